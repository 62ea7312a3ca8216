//! Query results: row tuples plus column metadata.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_postgres::types::Type;
use tokio_postgres::Row;

/// Descriptor of one result column: its name and database type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// An executed query's rows together with their column descriptors.
///
/// Every row tuple has the same arity and order as `columns`. Cells are JSON
/// values, which is what the caller ultimately serializes back to the
/// front-end.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<Value>>,
}

impl QueryResult {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First cell of the first row, for single-value queries like COUNT.
    pub fn first_value(&self) -> Option<&Value> {
        self.rows.first().and_then(|row| row.first())
    }
}

/// Decode prepared-statement output into a [`QueryResult`].
///
/// Column metadata comes from the statement, not the rows, so an empty result
/// still carries its descriptors.
pub(crate) fn decode_rows(
    columns: &[tokio_postgres::Column],
    rows: &[Row],
) -> StoreResult<QueryResult> {
    let descriptors = columns
        .iter()
        .map(|c| ColumnDescriptor::new(c.name(), c.type_().name()))
        .collect();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            cells.push(decode_cell(row, i, column)?);
        }
        out.push(cells);
    }

    Ok(QueryResult {
        columns: descriptors,
        rows: out,
    })
}

fn decode_cell(row: &Row, idx: usize, column: &tokio_postgres::Column) -> StoreResult<Value> {
    let ty = column.type_();
    let name = column.name();

    let decode_err = |e: tokio_postgres::Error| StoreError::decode(name, e.to_string());

    if *ty == Type::BOOL {
        let v: Option<bool> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v.map(Value::Bool).unwrap_or(Value::Null));
    }
    if *ty == Type::INT2 {
        let v: Option<i16> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v.map(|n| Value::from(i64::from(n))).unwrap_or(Value::Null));
    }
    if *ty == Type::INT4 {
        let v: Option<i32> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v.map(|n| Value::from(i64::from(n))).unwrap_or(Value::Null));
    }
    if *ty == Type::INT8 {
        let v: Option<i64> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v.map(Value::from).unwrap_or(Value::Null));
    }
    if *ty == Type::FLOAT4 {
        let v: Option<f32> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v
            .and_then(|n| serde_json::Number::from_f64(f64::from(n)))
            .map(Value::Number)
            .unwrap_or(Value::Null));
    }
    if *ty == Type::FLOAT8 {
        let v: Option<f64> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null));
    }
    if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME {
        let v: Option<String> = row.try_get(idx).map_err(decode_err)?;
        return Ok(v.map(Value::String).unwrap_or(Value::Null));
    }

    Err(StoreError::decode(
        name,
        format!("unsupported column type {}", ty.name()),
    ))
}
