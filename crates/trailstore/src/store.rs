//! Data-access operations for the trails database.
//!
//! Each function is one request-scoped round trip: build a single
//! parameterized statement, submit it through the caller's [`Executor`], and
//! shape the result. Validation failures surface before anything is
//! submitted; executor failures propagate as-is.

use crate::builder::{DeleteQuery, InsertQuery, SelectQuery, UpdateQuery};
use crate::error::{StoreError, StoreResult};
use crate::executor::Executor;
use crate::filter::FilterCondition;
use crate::rowset::QueryResult;
use crate::schema::{APP_USER, GROUP_MEMBER, REGION, TRAIL, TRAIL_GROUP};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A complete trail row for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTrail {
    pub trail_id: i64,
    pub region_id: i64,
    pub trail_name: String,
    pub length_km: i64,
    pub sport: String,
    pub terrain_type: String,
    pub start_loc: String,
    pub end_loc: String,
}

/// A partial trail edit; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrailPatch {
    #[serde(default)]
    pub region_id: Option<i64>,
    #[serde(default)]
    pub trail_name: Option<String>,
    #[serde(default)]
    pub length_km: Option<i64>,
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub terrain_type: Option<String>,
    #[serde(default)]
    pub start_loc: Option<String>,
    #[serde(default)]
    pub end_loc: Option<String>,
}

/// A complete region row for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRegion {
    pub region_id: i64,
    pub terrain_type: String,
    pub city: String,
    pub emerg_phone: String,
}

/// A new application user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone_num: String,
    #[serde(default)]
    pub hometown: Option<String>,
}

/// A new group with its leader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGroup {
    pub group_id: i64,
    pub username: String,
    #[serde(default)]
    pub experience: Option<String>,
}

/// Connectivity probe: one round trip, no table access.
pub async fn ping(conn: &impl Executor) -> StoreResult<()> {
    conn.query("SELECT 1", &[]).await?;
    Ok(())
}

// ==================== Trails ====================

/// Fetch every trail row with the full column set.
pub async fn fetch_trails(conn: &impl Executor) -> StoreResult<QueryResult> {
    select_trails(conn, &[]).await
}

/// Run a user-composed filter over the trail table.
///
/// An empty condition list returns every row. Conditions combine strictly
/// left to right with each condition's own connector; see
/// [`SelectQuery`](crate::builder::SelectQuery) for the chaining semantics.
pub async fn select_trails(
    conn: &impl Executor,
    conditions: &[FilterCondition],
) -> StoreResult<QueryResult> {
    let query = SelectQuery::new(&TRAIL)
        .filter(conditions.iter().cloned())
        .build()?;
    debug!(sql = %query.sql, params = query.param_count(), "select trails");
    conn.query(&query.sql, &query.params_ref()).await
}

/// Project the trail table onto the requested columns, all rows.
///
/// An empty column list substitutes the full column set in canonical order.
/// Duplicates are preserved in requested order.
pub async fn project_trails(conn: &impl Executor, columns: &[String]) -> StoreResult<QueryResult> {
    let query = SelectQuery::new(&TRAIL)
        .columns(columns.iter().cloned())
        .build()?;
    debug!(sql = %query.sql, "project trails");
    conn.query(&query.sql, &query.params_ref()).await
}

/// Count trail rows.
pub async fn count_trails(conn: &impl Executor) -> StoreResult<i64> {
    let result = conn.query("SELECT COUNT(*) FROM trail", &[]).await?;
    result
        .first_value()
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| StoreError::decode("count", "COUNT(*) returned no value"))
}

/// Insert a trail row; returns the number of affected rows.
pub async fn insert_trail(conn: &impl Executor, trail: &NewTrail) -> StoreResult<u64> {
    let query = InsertQuery::new(&TRAIL)
        .set("trail_id", trail.trail_id)
        .set("region_id", trail.region_id)
        .set("trail_name", trail.trail_name.clone())
        .set("length_km", trail.length_km)
        .set("sport", trail.sport.clone())
        .set("terrain_type", trail.terrain_type.clone())
        .set("start_loc", trail.start_loc.clone())
        .set("end_loc", trail.end_loc.clone())
        .build()?;
    debug!(sql = %query.sql, "insert trail");
    conn.execute(&query.sql, &query.params_ref()).await
}

/// Apply a partial edit to one trail.
///
/// The SET clause contains only the fields present in the patch; an empty
/// patch is rejected before anything is submitted.
pub async fn update_trail(
    conn: &impl Executor,
    trail_id: i64,
    patch: &TrailPatch,
) -> StoreResult<u64> {
    let query = UpdateQuery::new(&TRAIL)
        .set_opt("region_id", patch.region_id)
        .set_opt("trail_name", patch.trail_name.clone())
        .set_opt("length_km", patch.length_km)
        .set_opt("sport", patch.sport.clone())
        .set_opt("terrain_type", patch.terrain_type.clone())
        .set_opt("start_loc", patch.start_loc.clone())
        .set_opt("end_loc", patch.end_loc.clone())
        .key("trail_id", trail_id)
        .build()?;
    debug!(sql = %query.sql, "update trail");
    conn.execute(&query.sql, &query.params_ref()).await
}

/// Delete one trail by id.
pub async fn delete_trail(conn: &impl Executor, trail_id: i64) -> StoreResult<u64> {
    let query = DeleteQuery::new(&TRAIL).key("trail_id", trail_id).build()?;
    debug!(sql = %query.sql, "delete trail");
    conn.execute(&query.sql, &query.params_ref()).await
}

// ==================== Regions ====================

/// Insert a region row.
pub async fn insert_region(conn: &impl Executor, region: &NewRegion) -> StoreResult<u64> {
    let query = InsertQuery::new(&REGION)
        .set("region_id", region.region_id)
        .set("terrain_type", region.terrain_type.clone())
        .set("city", region.city.clone())
        .set("emerg_phone", region.emerg_phone.clone())
        .build()?;
    debug!(sql = %query.sql, "insert region");
    conn.execute(&query.sql, &query.params_ref()).await
}

/// Fetch every region row.
pub async fn fetch_regions(conn: &impl Executor) -> StoreResult<QueryResult> {
    let query = SelectQuery::new(&REGION).build()?;
    debug!(sql = %query.sql, "fetch regions");
    conn.query(&query.sql, &query.params_ref()).await
}

// ==================== Users & groups ====================

/// Register a new application user.
pub async fn create_user(conn: &impl Executor, user: &NewUser) -> StoreResult<u64> {
    let query = InsertQuery::new(&APP_USER)
        .set("email", user.email.clone())
        .set("username", user.username.clone())
        .set("phone_num", user.phone_num.clone())
        .set_opt("hometown", user.hometown.clone())
        .build()?;
    debug!(sql = %query.sql, "create user");
    conn.execute(&query.sql, &query.params_ref()).await
}

/// Create a group and enroll its leader as the first member.
///
/// Two statements in sequence; if the second fails the error propagates and
/// the caller decides how to recover (the group row exists without a
/// membership row). Pass a transaction as the executor for atomicity.
pub async fn create_group(conn: &impl Executor, group: &NewGroup) -> StoreResult<()> {
    let insert_group = InsertQuery::new(&TRAIL_GROUP)
        .set("group_id", group.group_id)
        .set("username", group.username.clone())
        .set_opt("experience", group.experience.clone())
        .build()?;
    debug!(sql = %insert_group.sql, "create group");
    conn.execute(&insert_group.sql, &insert_group.params_ref())
        .await?;

    add_member(conn, group.group_id, &group.username).await?;
    Ok(())
}

/// Enroll a user into a group.
pub async fn add_member(conn: &impl Executor, group_id: i64, username: &str) -> StoreResult<u64> {
    let query = InsertQuery::new(&GROUP_MEMBER)
        .set("username", username.to_string())
        .set("group_id", group_id)
        .build()?;
    debug!(sql = %query.sql, "add group member");
    conn.execute(&query.sql, &query.params_ref()).await
}
