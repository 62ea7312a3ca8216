//! SELECT builder for user-composed filters and projections.

use crate::builder::param::ParamList;
use crate::builder::BuiltQuery;
use crate::error::{StoreError, StoreResult};
use crate::filter::{ComparisonOp, FilterCondition};
use crate::schema::{ColumnType, TableSchema};

/// SELECT query builder over one table's known column set.
///
/// Supports the two user-facing query shapes: an ordered sequence of filter
/// conditions over all columns, and a column projection over all rows. Both
/// may be combined.
///
/// # Filter semantics
///
/// Conditions chain strictly left to right. Each condition's connector joins
/// it with the *next* condition; the connector on the last condition, if
/// present, is ignored. No precedence grouping is inserted, so a mixed
/// `AND`/`OR` chain associates the way SQL does by default:
/// `(a) AND (b) OR (c)` evaluates as `((a AND b) OR c)`, not
/// `(a AND (b OR c))`. This is deliberate; callers wanting algebraic
/// grouping must order their conditions accordingly.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: &'static TableSchema,
    /// Requested projection, raw wire names; empty means all columns.
    columns: Vec<String>,
    conditions: Vec<FilterCondition>,
}

impl SelectQuery {
    /// Create a SELECT builder for a table.
    pub fn new(table: &'static TableSchema) -> Self {
        Self {
            table,
            columns: Vec::new(),
            conditions: Vec::new(),
        }
    }

    /// Set the filter conditions, replacing any previous filter.
    pub fn filter(mut self, conditions: impl IntoIterator<Item = FilterCondition>) -> Self {
        self.conditions = conditions.into_iter().collect();
        self
    }

    /// Set the projected columns, replacing any previous projection.
    ///
    /// An empty iterator keeps the "all columns" default. Duplicates are
    /// preserved in requested order, not de-duplicated.
    pub fn columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the request and build the parameterized SQL.
    ///
    /// Fails with [`StoreError::UnknownColumn`] for identifiers outside the
    /// known set, [`StoreError::TypeMismatch`] for values incompatible with
    /// the column's declared type, and [`StoreError::MissingConnector`] when
    /// a non-final condition has no connector. Nothing is submitted anywhere;
    /// this is a pure function of the input.
    pub fn build(&self) -> StoreResult<BuiltQuery> {
        let projection = self.build_projection()?;
        let mut params = ParamList::new();

        let mut sql = format!("SELECT {} FROM {}", projection, self.table.name);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            let last = self.conditions.len() - 1;
            for (i, cond) in self.conditions.iter().enumerate() {
                let column = self.table.require_column(&cond.column)?;

                if cond.operator == ComparisonOp::Like && column.ty != ColumnType::Text {
                    return Err(StoreError::TypeMismatch {
                        column: column.name.to_string(),
                        expected: ColumnType::Text.name(),
                        actual: column.ty.name(),
                    });
                }
                if !column.ty.accepts(&cond.value) {
                    return Err(StoreError::TypeMismatch {
                        column: column.name.to_string(),
                        expected: column.ty.name(),
                        actual: cond.value.type_name(),
                    });
                }

                let idx = params.push(cond.value.clone());
                sql.push_str(&format!(
                    "({} {} ${})",
                    column.name,
                    cond.operator.as_sql(),
                    idx
                ));

                if i < last {
                    match cond.connector {
                        Some(connector) => {
                            sql.push(' ');
                            sql.push_str(connector.as_sql());
                            sql.push(' ');
                        }
                        None => return Err(StoreError::MissingConnector(i)),
                    }
                }
            }
        }

        Ok(BuiltQuery { sql, params })
    }

    fn build_projection(&self) -> StoreResult<String> {
        if self.columns.is_empty() {
            return Ok(self.table.select_list());
        }
        let mut out = String::new();
        for (i, name) in self.columns.iter().enumerate() {
            let column = self.table.require_column(name)?;
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(column.name);
        }
        Ok(out)
    }
}
