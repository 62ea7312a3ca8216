//! The query executor capability.
//!
//! Everything above this layer builds parameterized statements; the executor
//! submits them and shapes the output. Keeping it a trait lets tests inject a
//! recording fake and assert that invalid requests never reach the database.

use crate::error::StoreResult;
use crate::rowset::{decode_rows, QueryResult};
use tokio_postgres::types::ToSql;

/// Executes parameterized statements against the database.
///
/// One executor value corresponds to one connection-equivalent resource,
/// scoped to the caller. No retries, no cancellation; a submitted statement
/// runs to completion or failure and the error propagates as-is.
pub trait Executor: Send + Sync {
    /// Run a row-returning statement and shape the output.
    ///
    /// Column descriptors are present even when zero rows match.
    fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = StoreResult<QueryResult>> + Send;

    /// Run a mutation and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = StoreResult<u64>> + Send;

    /// Run a batch of statements with no parameters (DDL).
    fn batch(&self, sql: &str) -> impl std::future::Future<Output = StoreResult<()>> + Send;
}

impl Executor for tokio_postgres::Client {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        // Prepare first so column metadata is available even for empty results.
        let stmt = tokio_postgres::Client::prepare(self, sql).await?;
        let rows = tokio_postgres::Client::query(self, &stmt, params).await?;
        decode_rows(stmt.columns(), &rows)
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        Ok(tokio_postgres::Client::execute(self, sql, params).await?)
    }

    async fn batch(&self, sql: &str) -> StoreResult<()> {
        Ok(tokio_postgres::Client::batch_execute(self, sql).await?)
    }
}

impl Executor for tokio_postgres::Transaction<'_> {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        let stmt = tokio_postgres::Transaction::prepare(self, sql).await?;
        let rows = tokio_postgres::Transaction::query(self, &stmt, params).await?;
        decode_rows(stmt.columns(), &rows)
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        Ok(tokio_postgres::Transaction::execute(self, sql, params).await?)
    }

    async fn batch(&self, sql: &str) -> StoreResult<()> {
        Ok(tokio_postgres::Transaction::batch_execute(self, sql).await?)
    }
}

// ===== deadpool-postgres support =====
//
// A pooled client checked out with `pool.get().await?` implements the same
// capability; dropping it returns the connection to the pool on every exit
// path.

#[cfg(feature = "pool")]
impl Executor for deadpool_postgres::ClientWrapper {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        Executor::query(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        Executor::execute(&**self, sql, params).await
    }

    async fn batch(&self, sql: &str) -> StoreResult<()> {
        Executor::batch(&**self, sql).await
    }
}

#[cfg(feature = "pool")]
impl Executor for deadpool_postgres::Client {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        Executor::query(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        Executor::execute(&**self, sql, params).await
    }

    async fn batch(&self, sql: &str) -> StoreResult<()> {
        Executor::batch(&**self, sql).await
    }
}
