//! Static schema metadata for the trails database.
//!
//! Every table the crate touches is described here as a fixed column set.
//! The query builders validate identifiers against these sets, so only
//! canonical column names ever reach SQL text; values always travel through
//! bound parameters.

use crate::error::{StoreError, StoreResult};
use crate::scalar::Scalar;

/// Declared scalar type of a column.
///
/// The trails schema only uses 64-bit integers and text; this is the closed
/// set the [`TypeMismatch`](StoreError::TypeMismatch) check works over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigInt,
    Text,
}

impl ColumnType {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ColumnType::BigInt => "integer",
            ColumnType::Text => "text",
        }
    }

    /// Check whether a scalar value can be bound against this column.
    pub fn accepts(self, value: &Scalar) -> bool {
        match self {
            ColumnType::BigInt => matches!(value, Scalar::Int(_)),
            ColumnType::Text => matches!(value, Scalar::Text(_)),
        }
    }
}

/// Metadata for a single column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Canonical (lower-case) column name as it appears in SQL.
    pub name: &'static str,
    /// Declared scalar type.
    pub ty: ColumnType,
    /// Whether this column is part of the primary key.
    pub primary_key: bool,
}

impl Column {
    const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: false,
        }
    }

    const fn key(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: true,
        }
    }
}

/// Metadata for a database table: its name and known column set.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    /// Look up a column, matching case-insensitively.
    ///
    /// Wire payloads use `TrailID`-style names; PostgreSQL folds unquoted
    /// identifiers to lower case, so the canonical names are snake_case and
    /// lookup ignores ASCII case.
    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Look up a column or fail with [`StoreError::UnknownColumn`].
    pub fn require_column(&self, name: &str) -> StoreResult<&'static Column> {
        self.column(name)
            .ok_or_else(|| StoreError::UnknownColumn(name.to_string()))
    }

    /// Canonical column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }

    /// The full SELECT list, all canonical columns in table order.
    pub fn select_list(&self) -> String {
        let mut out = String::new();
        for (i, c) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(c.name);
        }
        out
    }

    /// The primary key column, if the table declares a single-column key.
    pub fn primary_key(&self) -> Option<&'static Column> {
        let mut keys = self.columns.iter().filter(|c| c.primary_key);
        match (keys.next(), keys.next()) {
            (Some(pk), None) => Some(pk),
            _ => None,
        }
    }
}

/// The trail table (original `LocatedIn_Trail_2`).
pub static TRAIL: TableSchema = TableSchema {
    name: "trail",
    columns: &[
        Column::key("trail_id", ColumnType::BigInt),
        Column::new("region_id", ColumnType::BigInt),
        Column::new("trail_name", ColumnType::Text),
        Column::new("length_km", ColumnType::BigInt),
        Column::new("sport", ColumnType::Text),
        Column::new("terrain_type", ColumnType::Text),
        Column::new("start_loc", ColumnType::Text),
        Column::new("end_loc", ColumnType::Text),
    ],
};

/// The region table.
pub static REGION: TableSchema = TableSchema {
    name: "region",
    columns: &[
        Column::key("region_id", ColumnType::BigInt),
        Column::new("terrain_type", ColumnType::Text),
        Column::new("city", ColumnType::Text),
        Column::new("emerg_phone", ColumnType::Text),
    ],
};

/// The application user table (original `AppUser`).
pub static APP_USER: TableSchema = TableSchema {
    name: "app_user",
    columns: &[
        Column::new("email", ColumnType::Text),
        Column::key("username", ColumnType::Text),
        Column::new("phone_num", ColumnType::Text),
        Column::new("hometown", ColumnType::Text),
    ],
};

/// The group table (original `Leads_Group`); each group row names its leader.
pub static TRAIL_GROUP: TableSchema = TableSchema {
    name: "trail_group",
    columns: &[
        Column::key("group_id", ColumnType::BigInt),
        Column::new("username", ColumnType::Text),
        Column::new("experience", ColumnType::Text),
    ],
};

/// The group membership table (original `PartOf`); composite key.
pub static GROUP_MEMBER: TableSchema = TableSchema {
    name: "group_member",
    columns: &[
        Column::key("username", ColumnType::Text),
        Column::key("group_id", ColumnType::BigInt),
    ],
};
