//! User-composed filter conditions.
//!
//! A filter arrives as an ordered sequence of [`FilterCondition`]s. Each one
//! carries a column name, a comparison operator from a closed set, a scalar
//! value, and an optional AND/OR connector that joins it with the *next*
//! condition in the sequence. The sequence combines strictly left to right;
//! there is no precedence grouping (see [`crate::builder::SelectQuery`]).

use crate::error::{StoreError, StoreResult};
use crate::scalar::Scalar;
use serde::{Deserialize, Serialize};

/// Comparison operator for a filter condition.
///
/// This is the closed operator set; anything else is rejected with
/// [`StoreError::UnknownOperator`] when the token is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComparisonOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `LIKE` (text columns only)
    Like,
}

impl ComparisonOp {
    /// Parse a wire token into an operator.
    ///
    /// Symbol tokens match exactly; `LIKE` matches case-insensitively.
    pub fn parse(token: &str) -> StoreResult<Self> {
        match token {
            "=" => Ok(ComparisonOp::Eq),
            "<>" => Ok(ComparisonOp::Ne),
            "<" => Ok(ComparisonOp::Lt),
            "<=" => Ok(ComparisonOp::Lte),
            ">" => Ok(ComparisonOp::Gt),
            ">=" => Ok(ComparisonOp::Gte),
            _ if token.eq_ignore_ascii_case("LIKE") => Ok(ComparisonOp::Like),
            _ => Err(StoreError::UnknownOperator(token.to_string())),
        }
    }

    /// SQL text of the operator.
    pub fn as_sql(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "=",
            ComparisonOp::Ne => "<>",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Like => "LIKE",
        }
    }
}

impl TryFrom<String> for ComparisonOp {
    type Error = StoreError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl From<ComparisonOp> for String {
    fn from(op: ComparisonOp) -> Self {
        op.as_sql().to_string()
    }
}

/// Logical connector joining a condition with the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Connector {
    And,
    Or,
}

impl Connector {
    /// Parse a wire token, case-insensitively.
    pub fn parse(token: &str) -> StoreResult<Self> {
        if token.eq_ignore_ascii_case("AND") {
            Ok(Connector::And)
        } else if token.eq_ignore_ascii_case("OR") {
            Ok(Connector::Or)
        } else {
            Err(StoreError::validation(format!(
                "unknown connector: {token}"
            )))
        }
    }

    /// SQL text of the connector.
    pub fn as_sql(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

impl TryFrom<String> for Connector {
    type Error = StoreError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::parse(&token)
    }
}

impl From<Connector> for String {
    fn from(c: Connector) -> Self {
        c.as_sql().to_string()
    }
}

/// One column/operator/value/connector unit of a user-composed filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub column: String,
    pub operator: ComparisonOp,
    pub value: Scalar,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Connector>,
}

impl FilterCondition {
    /// Create a condition with no connector (suitable for the last position).
    pub fn new(
        column: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Scalar>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
            connector: None,
        }
    }

    /// Attach an `AND` connector towards the next condition.
    pub fn and(mut self) -> Self {
        self.connector = Some(Connector::And);
        self
    }

    /// Attach an `OR` connector towards the next condition.
    pub fn or(mut self) -> Self {
        self.connector = Some(Connector::Or);
        self
    }
}

/// Wire shape of a filter request body: `{"conditions": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
}

/// Wire shape of a projection request body: `{"columns": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionRequest {
    #[serde(default)]
    pub columns: Vec<String>,
}
