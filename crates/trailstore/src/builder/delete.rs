//! DELETE builder.

use crate::builder::param::{Param, ParamList};
use crate::builder::BuiltQuery;
use crate::error::{StoreError, StoreResult};
use crate::schema::TableSchema;
use tokio_postgres::types::ToSql;

/// DELETE query builder over one table's known column set.
///
/// A key predicate is mandatory; there is no way to build an unfiltered
/// DELETE with this type.
#[derive(Debug, Clone)]
pub struct DeleteQuery {
    table: &'static TableSchema,
    key: Option<(String, Param)>,
}

impl DeleteQuery {
    /// Create a DELETE builder for a table.
    pub fn new(table: &'static TableSchema) -> Self {
        Self { table, key: None }
    }

    /// Set the key predicate: `WHERE column = value`.
    pub fn key<T: ToSql + Send + Sync + 'static>(mut self, column: &str, value: T) -> Self {
        self.key = Some((column.to_string(), Param::new(value)));
        self
    }

    /// Validate and build the parameterized SQL.
    pub fn build(&self) -> StoreResult<BuiltQuery> {
        let Some((key_name, key_param)) = &self.key else {
            return Err(StoreError::validation("DELETE requires a key predicate"));
        };

        let column = self.table.require_column(key_name)?;
        let mut params = ParamList::new();
        let idx = params.push_param(key_param.clone());

        let sql = format!(
            "DELETE FROM {} WHERE {} = ${}",
            self.table.name, column.name, idx
        );
        Ok(BuiltQuery { sql, params })
    }
}
