use serde_json::{Map, Value};

const BEDWARS_SUFFIX: &str = "bedwars";

/// A flat record of cumulative counters, as handed over by the stats service.
///
/// Keys follow `{prefix_}{counter}{_bedwars}`. Values may be numbers, numeric
/// strings or anything else; every accessor degrades to zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// Anything that is not a JSON object becomes an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Reads a field as a finite number.
    ///
    /// Numbers are returned as-is, strings are parsed. Absent fields, `null`,
    /// booleans, unparsable strings and non-finite values all read as `0.0`.
    pub fn number(&self, key: &str) -> f64 {
        let parsed = match self.fields.get(key) {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|value| value.is_finite()).unwrap_or(0.0)
    }

    /// Reads a field as a non-negative integer counter.
    ///
    /// Negative values clamp to `0` and fractional values are truncated.
    pub fn counter(&self, key: &str) -> u64 {
        let value = self.number(key);
        if value <= 0.0 {
            0
        } else {
            // `as` saturates at u64::MAX for huge values.
            value.trunc() as u64
        }
    }

    /// Reads `{prefix}_{counter}_bedwars`, or `{counter}_bedwars` for an empty prefix.
    pub fn bedwars_counter(&self, prefix: &str, counter: &str) -> u64 {
        self.counter(&prefixed_key(prefix, &format!("{}_{}", counter, BEDWARS_SUFFIX)))
    }

    /// Reads `{prefix}_{counter}` without the game suffix, or `{counter}` for an empty prefix.
    pub fn plain_counter(&self, prefix: &str, counter: &str) -> u64 {
        self.counter(&prefixed_key(prefix, counter))
    }

    /// Whether the record holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn prefixed_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{}_{}", prefix, name)
    }
}
