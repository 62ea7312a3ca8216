//! # trailstore
//!
//! Schema-validated data access for the trails database.
//!
//! The centerpiece is a dynamic query layer over the trail table: callers
//! submit an ordered list of filter conditions (column, operator, value,
//! AND/OR connector) or a column projection, and the crate turns it into one
//! parameterized SQL statement, runs it, and returns rows together with
//! column metadata.
//!
//! ## Safety model
//!
//! - Column names are validated against a fixed, known column set per table;
//!   only canonical names ever appear in SQL text.
//! - Operators come from a closed set (`=`, `<>`, `<`, `<=`, `>`, `>=`,
//!   `LIKE`).
//! - Values are bound as query parameters, never concatenated.
//! - Values are type-checked against the column's declared type before
//!   anything is submitted.
//!
//! ## Filter semantics
//!
//! Conditions combine strictly left to right: each condition's connector
//! joins it with the next one, and no precedence grouping is inserted. A
//! mixed chain like `a AND b OR c` therefore evaluates as SQL associates it,
//! `(a AND b) OR c`.
//!
//! ## Example
//!
//! ```ignore
//! use trailstore::{store, ComparisonOp, FilterCondition};
//!
//! let pool = trailstore::create_pool(&url)?;
//! let client = pool.get().await?;
//!
//! let result = store::select_trails(
//!     &client,
//!     &[
//!         FilterCondition::new("Sport", ComparisonOp::Eq, "hiking").or(),
//!         FilterCondition::new("TerrainType", ComparisonOp::Eq, "rocky"),
//!     ],
//! )
//! .await?;
//! ```

pub mod bootstrap;
pub mod builder;
pub mod config;
pub mod error;
pub mod executor;
pub mod filter;
pub mod rowset;
pub mod scalar;
pub mod schema;
pub mod store;

pub use builder::{BuiltQuery, DeleteQuery, InsertQuery, Param, ParamList, SelectQuery, UpdateQuery};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use executor::Executor;
pub use filter::{ComparisonOp, Connector, FilterCondition, FilterRequest, ProjectionRequest};
pub use rowset::{ColumnDescriptor, QueryResult};
pub use scalar::Scalar;
pub use schema::{APP_USER, Column, ColumnType, GROUP_MEMBER, REGION, TRAIL, TRAIL_GROUP, TableSchema};
pub use store::{NewGroup, NewRegion, NewTrail, NewUser, TrailPatch};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config};
