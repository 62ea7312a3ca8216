//! Schema-validated query builders.
//!
//! Each builder turns structured input into a single parameterized SQL
//! statement. Identifier validation happens before any SQL text is emitted:
//! only canonical column names from the table's known set and operators from
//! the closed operator set appear in the statement; every value is bound as a
//! `$n` parameter.
//!
//! Builders are cheap, stateless between calls, and validate at
//! [`build`](SelectQuery::build) time, so a chain of setter calls never
//! fails mid-way.

mod delete;
mod insert;
mod param;
mod select;
mod update;

pub use delete::DeleteQuery;
pub use insert::InsertQuery;
pub use param::{Param, ParamList};
pub use select::SelectQuery;
pub use update::UpdateQuery;

use tokio_postgres::types::ToSql;

/// A built query: SQL text plus its bound parameters.
#[derive(Debug, Clone)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: ParamList,
}

impl BuiltQuery {
    /// Borrow the parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.as_refs()
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}
