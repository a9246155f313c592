use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value types for answers and authored comparison values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<Value>),
    Null,
}

/// Accumulated answers for one form run, keyed by field id.
pub type AnswerMap = AHashMap<String, Value>;

impl Value {
    /// Numeric view of a value. Number fields store numbers directly, but
    /// authored comparison values may arrive as numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Whether this value counts as "empty" for `is_empty`/`is_not_empty` and
    /// the required-field gate: missing, empty string, or empty list.
    pub fn is_empty_answer(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Type-aware equality. Numeric coercion applies only when one side is
    /// already a number; two numeric strings stay strings.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Number(a), Value::Text(text)) | (Value::Text(text), Value::Number(a)) => {
                text.trim().parse::<f64>().map(|b| *a == b).unwrap_or(false)
            }
            _ => self == other,
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(raw: &serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            // Objects have no place in an answer map.
            serde_json::Value::Object(_) => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        Value::from(&raw)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Null => write!(f, "null"),
        }
    }
}
