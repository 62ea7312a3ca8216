//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use tokio_postgres::types::ToSql;
use trailstore::{ColumnDescriptor, Executor, QueryResult, StoreError, StoreResult};

/// One recorded executor call: the SQL text and how many parameters were bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub sql: String,
    pub params: usize,
}

/// An executor that records every call and answers with a canned result.
#[derive(Debug, Default)]
pub struct FakeExecutor {
    calls: Mutex<Vec<RecordedCall>>,
    result: QueryResult,
}

impl FakeExecutor {
    /// A fake that returns an empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A fake that answers every query with the given result.
    pub fn returning(result: QueryResult) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            result,
        }
    }

    /// Everything this executor has been asked to run.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, sql: &str, params: usize) {
        self.calls.lock().unwrap().push(RecordedCall {
            sql: sql.to_string(),
            params,
        });
    }
}

impl Executor for FakeExecutor {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        self.record(sql, params.len());
        Ok(self.result.clone())
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        self.record(sql, params.len());
        Ok(1)
    }

    async fn batch(&self, sql: &str) -> StoreResult<()> {
        self.record(sql, 0);
        Ok(())
    }
}

/// An executor whose every call fails with a connection error.
#[derive(Debug, Default)]
pub struct FailingExecutor;

impl Executor for FailingExecutor {
    async fn query(&self, _sql: &str, _params: &[&(dyn ToSql + Sync)]) -> StoreResult<QueryResult> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn execute(&self, _sql: &str, _params: &[&(dyn ToSql + Sync)]) -> StoreResult<u64> {
        Err(StoreError::Connection("connection refused".into()))
    }

    async fn batch(&self, _sql: &str) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".into()))
    }
}

/// A small trail dataset shaped like a full-table select.
pub fn trail_rows() -> QueryResult {
    QueryResult {
        columns: vec![
            ColumnDescriptor::new("trail_id", "int8"),
            ColumnDescriptor::new("region_id", "int8"),
            ColumnDescriptor::new("trail_name", "text"),
            ColumnDescriptor::new("length_km", "int8"),
            ColumnDescriptor::new("sport", "text"),
            ColumnDescriptor::new("terrain_type", "text"),
            ColumnDescriptor::new("start_loc", "text"),
            ColumnDescriptor::new("end_loc", "text"),
        ],
        rows: vec![
            row(1, 1, "Grouse Grind", 3, "hiking", "rocky", "Base", "Peak"),
            row(2, 1, "Lynn Loop", 5, "hiking", "forest", "Gate", "Gate"),
            row(3, 2, "Seymour DH", 12, "biking", "rocky", "Top", "Bottom"),
        ],
    }
}

fn row(
    trail_id: i64,
    region_id: i64,
    name: &str,
    length_km: i64,
    sport: &str,
    terrain: &str,
    start: &str,
    end: &str,
) -> Vec<serde_json::Value> {
    vec![
        trail_id.into(),
        region_id.into(),
        name.into(),
        length_km.into(),
        sport.into(),
        terrain.into(),
        start.into(),
        end.into(),
    ]
}
