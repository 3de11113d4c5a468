/// Cell value vocabulary for the grid engine.
///
/// Column accessors project an opaque row into a `CellValue`. Everything
/// the engine does with row data (comparing for sort order, matching
/// filters, rendering exports) goes through this closed vocabulary, so
/// the engine never needs to reflect over the row type itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;

/// A single cell value produced by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            CellValue::Int32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Lenient numeric projection across all numeric variants.
    ///
    /// Returns None for non-numeric values. Used for cross-type numeric
    /// comparison so `Int32(3)` and `Float64(3.5)` order sensibly.
    #[inline]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            CellValue::Int32(n) => Some(*n as f64),
            CellValue::Int64(n) => Some(*n as f64),
            CellValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Fixed rank per variant, used to order values of unrelated types
    /// deterministically.
    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int32(_) | CellValue::Int64(_) | CellValue::Float64(_) => 1,
            CellValue::DateTime(_) => 2,
            CellValue::String(_) => 3,
            CellValue::Null => 4,
        }
    }

    /// Total, type-aware comparison.
    ///
    /// Nulls order after every non-null value (ascending). Numeric
    /// variants compare numerically across types, dates chronologically,
    /// strings lexicographically. Values of unrelated types fall back to
    /// a fixed type rank so the ordering stays total and deterministic.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        match (self, other) {
            (CellValue::Int32(a), CellValue::Int32(b)) => a.cmp(b),
            (CellValue::Int64(a), CellValue::Int64(b)) => a.cmp(b),
            (CellValue::Float64(a), CellValue::Float64(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::String(a), CellValue::String(b)) => a.cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            (a, b) => match (a.numeric(), b.numeric()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => a.type_rank().cmp(&b.type_rank()),
            },
        }
    }

    /// Text rendering used by filters, CSV export and the print document.
    ///
    /// Null renders as the empty string; dates render as RFC 3339.
    pub fn render(&self) -> String {
        match self {
            CellValue::Int32(v) => v.to_string(),
            CellValue::Int64(v) => v.to_string(),
            CellValue::Float64(v) => v.to_string(),
            CellValue::String(v) => v.clone(),
            CellValue::Bool(v) => v.to_string(),
            CellValue::DateTime(v) => v.to_rfc3339(),
            CellValue::Null => String::new(),
        }
    }

    /// JSON rendering used by the share payload.
    pub fn to_json(&self) -> JsonValue {
        match self {
            CellValue::Int32(v) => JsonValue::from(*v),
            CellValue::Int64(v) => JsonValue::from(*v),
            CellValue::Float64(v) => JsonValue::from(*v),
            CellValue::String(v) => JsonValue::from(v.clone()),
            CellValue::Bool(v) => JsonValue::from(*v),
            CellValue::DateTime(v) => JsonValue::from(v.to_rfc3339()),
            CellValue::Null => JsonValue::Null,
        }
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int32(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int64(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float64(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::String(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::String(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

/// How a candidate value is matched against a needle string.
///
/// Shared between the client-side filter set and the search adapter's
/// wire operator, so both sides of the system speak the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOp {
    /// Rendered value equals the needle exactly.
    Eq,
    /// Rendered value starts with the needle.
    Prefix,
    /// Rendered value contains the needle.
    Contains,
}

impl MatchOp {
    /// Stable wire name, used in URL query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOp::Eq => "eq",
            MatchOp::Prefix => "prefix",
            MatchOp::Contains => "contains",
        }
    }

    /// Parse a wire name back into an operator.
    pub fn parse(s: &str) -> Option<MatchOp> {
        match s {
            "eq" => Some(MatchOp::Eq),
            "prefix" => Some(MatchOp::Prefix),
            "contains" => Some(MatchOp::Contains),
            _ => None,
        }
    }

    /// Apply this operator to a cell value and a needle string.
    ///
    /// Matching is on the rendered text form, so numeric and date cells
    /// match their canonical rendering. Null never matches a non-empty
    /// needle.
    pub fn matches(&self, candidate: &CellValue, needle: &str) -> bool {
        if candidate.is_null() {
            return needle.is_empty() && *self == MatchOp::Eq;
        }
        let rendered = candidate.render();
        match self {
            MatchOp::Eq => rendered == needle,
            MatchOp::Prefix => rendered.starts_with(needle),
            MatchOp::Contains => rendered.contains(needle),
        }
    }
}
