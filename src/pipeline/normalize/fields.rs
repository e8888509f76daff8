use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::common::{dates, text};

/// A loosely-typed API record. Anything that is not a JSON object is held as
/// an empty record so that every lookup degrades to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(Map<String, Value>);

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => RawRecord(map),
            other => {
                tracing::debug!(kind = value_kind(&other), "raw record is not an object");
                RawRecord::default()
            }
        }
    }
}

impl From<&Value> for RawRecord {
    fn from(value: &Value) -> Self {
        RawRecord::from(value.clone())
    }
}

impl RawRecord {
    /// First alias whose value is present and non-null. Later aliases are not
    /// consulted once one is found, even if its value turns out malformed.
    pub fn resolve(&self, aliases: &[&str]) -> Option<&Value> {
        aliases
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|value| !value.is_null())
    }

    /// Non-blank string field.
    pub fn string(&self, aliases: &[&str]) -> Option<String> {
        match self.resolve(aliases)? {
            Value::String(s) => text::non_blank(s),
            other => malformed(aliases, other),
        }
    }

    /// Integer field. Accepts integers, integral floats and numeric strings.
    pub fn integer(&self, aliases: &[&str]) -> Option<i64> {
        let value = self.resolve(aliases)?;
        let parsed = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| is_integral_i64(*f)).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        parsed.or_else(|| malformed(aliases, value))
    }

    pub fn year(&self, aliases: &[&str]) -> Option<i32> {
        self.integer(aliases).and_then(|y| i32::try_from(y).ok())
    }

    /// Timestamp field: a date/time string or epoch milliseconds.
    pub fn timestamp(&self, aliases: &[&str]) -> Option<DateTime<Utc>> {
        let value = self.resolve(aliases)?;
        let parsed = match value {
            Value::String(s) => dates::parse_timestamp(s),
            Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
            _ => None,
        };
        parsed.or_else(|| malformed(aliases, value))
    }

    pub fn array(&self, aliases: &[&str]) -> Option<&Vec<Value>> {
        match self.resolve(aliases)? {
            Value::Array(items) => Some(items),
            other => malformed(aliases, other),
        }
    }
}

/// Whole float that fits an `i64` without saturating.
fn is_integral_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

fn malformed<T>(aliases: &[&str], value: &Value) -> Option<T> {
    tracing::debug!(
        field = aliases.first().copied().unwrap_or_default(),
        kind = value_kind(value),
        "malformed field value, treating as absent"
    );
    None
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
