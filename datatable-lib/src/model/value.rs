//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// A dynamic value held by a single row field.
///
/// The table core only ever looks at values in two ways: as display text
/// (for search matching and default cell rendering) and through
/// [`Value::compare`] (for sorting).
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | boolean | `Bool` |
/// | integer fitting i64 | `Int` |
/// | other number | `Float` |
/// | string | `String` |
/// | array, object | `Json` |
///
/// `Decimal` and `DateTime` are never produced from raw JSON; callers build
/// them explicitly when a column carries money or timestamps.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// let name = Value::from("Contoso");
/// let age = Value::from(42i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Date and time.
    DateTime(DateTime<Utc>),
    /// Fallback for nested JSON arrays and objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Json(_) => "json",
        }
    }

    /// Returns the value as a float if it is one of the numeric variants.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Decimal(v) => v.to_f64(),
            _ => None,
        }
    }

    /// Returns the string contents if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Lower-cased display text, the form search terms are matched against.
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Three-way comparison used for sorting.
    ///
    /// The ordering is total and deterministic across every pair of variants.
    /// Values are grouped by kind first, in the order `Null`, `Bool`,
    /// numbers, `DateTime`, `String`, `Json`. Within a kind:
    ///
    /// - `Int`, `Float` and `Decimal` share one numeric order, so `3` and
    ///   `3.0` are equal. NaN sorts after every other number.
    /// - `String` compares by code point, `Json` by its display text.
    /// - `Bool` and `DateTime` use their natural order.
    pub fn compare(&self, other: &Value) -> Ordering {
        self.kind_rank()
            .cmp(&other.kind_rank())
            .then_with(|| match (self, other) {
                (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
                (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
                (Value::String(a), Value::String(b)) => a.cmp(b),
                (Value::Json(a), Value::Json(b)) => a.to_string().cmp(&b.to_string()),
                _ => match (self.numeric_key(), other.numeric_key()) {
                    (Some((fa, da)), Some((fb, db))) => fa.total_cmp(&fb).then_with(|| da.cmp(&db)),
                    _ => Ordering::Equal,
                },
            })
    }

    /// Position of this value's kind in the sort order.
    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) | Value::Decimal(_) => 2,
            Value::DateTime(_) => 3,
            Value::String(_) => 4,
            Value::Json(_) => 5,
        }
    }

    /// Sort key shared by the numeric variants.
    ///
    /// The float orders values coarsely; the decimal breaks ties between
    /// numbers that round to the same float (large integers, decimals with
    /// many digits). Non-finite floats have no decimal form.
    fn numeric_key(&self) -> Option<(f64, Option<Decimal>)> {
        match self {
            Value::Int(v) => Some((*v as f64, Some(Decimal::from(*v)))),
            Value::Float(v) => Some((normalize_nan(*v), Decimal::from_f64_retain(*v))),
            Value::Decimal(v) => Some((v.to_f64().unwrap_or(f64::NAN), Some(*v))),
            _ => None,
        }
    }
}

/// Folds every NaN onto the positive quiet NaN so all of them sort last.
fn normalize_nan(v: f64) -> f64 {
    if v.is_nan() { f64::NAN } else { v }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::DateTime(v) => f.write_str(&v.to_rfc3339()),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}
