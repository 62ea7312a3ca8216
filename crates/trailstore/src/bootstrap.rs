//! Administrative schema bootstrap.
//!
//! Drop-and-recreate conveniences for the demo deployment, not a migration
//! engine. Each reset drops the tables that depend on its target before
//! recreating the target.

use crate::error::StoreResult;
use crate::executor::Executor;
use tracing::info;

const CREATE_REGION: &str = "\
CREATE TABLE region (
    region_id BIGINT PRIMARY KEY,
    terrain_type TEXT,
    city TEXT,
    emerg_phone TEXT
)";

const CREATE_TRAIL: &str = "\
CREATE TABLE trail (
    trail_id BIGINT PRIMARY KEY,
    region_id BIGINT REFERENCES region (region_id),
    trail_name TEXT,
    length_km BIGINT,
    sport TEXT,
    terrain_type TEXT,
    start_loc TEXT,
    end_loc TEXT
)";

const CREATE_APP_USER: &str = "\
CREATE TABLE app_user (
    email TEXT NOT NULL UNIQUE,
    username TEXT PRIMARY KEY,
    phone_num TEXT NOT NULL UNIQUE,
    hometown TEXT
)";

const CREATE_TRAIL_GROUP: &str = "\
CREATE TABLE trail_group (
    group_id BIGINT PRIMARY KEY,
    username TEXT NOT NULL REFERENCES app_user (username),
    experience TEXT
)";

const CREATE_GROUP_MEMBER: &str = "\
CREATE TABLE group_member (
    username TEXT REFERENCES app_user (username) ON DELETE CASCADE,
    group_id BIGINT REFERENCES trail_group (group_id) ON DELETE CASCADE,
    PRIMARY KEY (username, group_id)
)";

/// Drop and recreate the region table (drops dependent trail rows too).
pub async fn reset_region_tables(conn: &impl Executor) -> StoreResult<()> {
    info!("resetting region tables");
    conn.batch(&format!(
        "DROP TABLE IF EXISTS trail CASCADE;\n\
         DROP TABLE IF EXISTS region CASCADE;\n\
         {CREATE_REGION};"
    ))
    .await
}

/// Drop and recreate the trail table.
pub async fn reset_trail_table(conn: &impl Executor) -> StoreResult<()> {
    info!("resetting trail table");
    conn.batch(&format!(
        "DROP TABLE IF EXISTS trail CASCADE;\n\
         {CREATE_TRAIL};"
    ))
    .await
}

/// Drop and recreate the user table (group tables depend on it).
pub async fn reset_user_tables(conn: &impl Executor) -> StoreResult<()> {
    info!("resetting user tables");
    conn.batch(&format!(
        "DROP TABLE IF EXISTS group_member CASCADE;\n\
         DROP TABLE IF EXISTS trail_group CASCADE;\n\
         DROP TABLE IF EXISTS app_user CASCADE;\n\
         {CREATE_APP_USER};"
    ))
    .await
}

/// Drop and recreate the group and membership tables.
pub async fn reset_group_tables(conn: &impl Executor) -> StoreResult<()> {
    info!("resetting group tables");
    conn.batch(&format!(
        "DROP TABLE IF EXISTS group_member CASCADE;\n\
         DROP TABLE IF EXISTS trail_group CASCADE;\n\
         {CREATE_TRAIL_GROUP};\n\
         {CREATE_GROUP_MEMBER};"
    ))
    .await
}

/// Drop and recreate every table in dependency order.
pub async fn reset_all(conn: &impl Executor) -> StoreResult<()> {
    info!("resetting all tables");
    conn.batch(&format!(
        "DROP TABLE IF EXISTS group_member CASCADE;\n\
         DROP TABLE IF EXISTS trail_group CASCADE;\n\
         DROP TABLE IF EXISTS app_user CASCADE;\n\
         DROP TABLE IF EXISTS trail CASCADE;\n\
         DROP TABLE IF EXISTS region CASCADE;\n\
         {CREATE_REGION};\n\
         {CREATE_TRAIL};\n\
         {CREATE_APP_USER};\n\
         {CREATE_TRAIL_GROUP};\n\
         {CREATE_GROUP_MEMBER};"
    ))
    .await
}
