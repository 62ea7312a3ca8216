//! INSERT builder.

use crate::builder::param::{Param, ParamList};
use crate::builder::BuiltQuery;
use crate::error::{StoreError, StoreResult};
use crate::schema::TableSchema;
use tokio_postgres::types::ToSql;

/// INSERT query builder over one table's known column set.
#[derive(Debug, Clone)]
pub struct InsertQuery {
    table: &'static TableSchema,
    fields: Vec<(String, Param)>,
}

impl InsertQuery {
    /// Create an INSERT builder for a table.
    pub fn new(table: &'static TableSchema) -> Self {
        Self {
            table,
            fields: Vec::new(),
        }
    }

    /// Set a column value.
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, column: &str, value: T) -> Self {
        self.fields.push((column.to_string(), Param::new(value)));
        self
    }

    /// Set an optional column value (None binds SQL NULL).
    pub fn set_opt<T: ToSql + Send + Sync + 'static>(
        self,
        column: &str,
        value: Option<T>,
    ) -> Self {
        self.set(column, value)
    }

    /// Validate the column set and build the parameterized SQL.
    pub fn build(&self) -> StoreResult<BuiltQuery> {
        if self.fields.is_empty() {
            return Err(StoreError::validation("INSERT requires at least one column"));
        }

        let mut params = ParamList::new();
        let mut columns = String::new();
        let mut placeholders = String::new();
        for (i, (name, param)) in self.fields.iter().enumerate() {
            let column = self.table.require_column(name)?;
            if i > 0 {
                columns.push_str(", ");
                placeholders.push_str(", ");
            }
            columns.push_str(column.name);
            let idx = params.push_param(param.clone());
            placeholders.push_str(&format!("${idx}"));
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name, columns, placeholders
        );
        Ok(BuiltQuery { sql, params })
    }
}
