//! UPDATE builder with a dynamic SET clause.

use crate::builder::param::{Param, ParamList};
use crate::builder::BuiltQuery;
use crate::error::{StoreError, StoreResult};
use crate::schema::TableSchema;
use tokio_postgres::types::ToSql;

/// UPDATE query builder over one table's known column set.
///
/// The SET clause is assembled dynamically from the fields that were
/// actually provided ([`set_opt`](UpdateQuery::set_opt) skips `None`), which
/// is how partial-edit requests arrive from the caller. An update with no SET
/// fields or no key predicate is rejected before execution.
#[derive(Debug, Clone)]
pub struct UpdateQuery {
    table: &'static TableSchema,
    sets: Vec<(String, Param)>,
    key: Option<(String, Param)>,
}

impl UpdateQuery {
    /// Create an UPDATE builder for a table.
    pub fn new(table: &'static TableSchema) -> Self {
        Self {
            table,
            sets: Vec::new(),
            key: None,
        }
    }

    /// Set a column value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, column: &str, value: T) -> Self {
        self.sets.push((column.to_string(), Param::new(value)));
        self
    }

    /// Set an optional column value (None skips the field entirely).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(
        self,
        column: &str,
        value: Option<T>,
    ) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Set the key predicate: `WHERE column = value`.
    pub fn key<T: ToSql + Send + Sync + 'static>(mut self, column: &str, value: T) -> Self {
        self.key = Some((column.to_string(), Param::new(value)));
        self
    }

    /// Validate and build the parameterized SQL.
    pub fn build(&self) -> StoreResult<BuiltQuery> {
        if self.sets.is_empty() {
            return Err(StoreError::validation(
                "UPDATE requires at least one SET field",
            ));
        }
        let Some((key_name, key_param)) = &self.key else {
            return Err(StoreError::validation("UPDATE requires a key predicate"));
        };

        let mut params = ParamList::new();
        let mut set_clause = String::new();
        for (i, (name, param)) in self.sets.iter().enumerate() {
            let column = self.table.require_column(name)?;
            if i > 0 {
                set_clause.push_str(", ");
            }
            let idx = params.push_param(param.clone());
            set_clause.push_str(&format!("{} = ${}", column.name, idx));
        }

        let key_column = self.table.require_column(key_name)?;
        let key_idx = params.push_param(key_param.clone());

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table.name, set_clause, key_column.name, key_idx
        );
        Ok(BuiltQuery { sql, params })
    }
}
