//! Lenient serde adapters for spreadsheet cells.
//!
//! The sheet returns whatever the cell holds: numbers where text was typed,
//! empty strings where nothing was, timestamps where a date was entered.

use serde::Deserialize;
use serde::Deserializer;
use serde_json::Value;

use crate::asset::AssetId;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<AssetId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as AssetId)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn cost<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .filter(|cost| cost.is_finite() && *cost >= 0.0)
            .unwrap_or(0.0),
        Value::String(s) => crate::asset::parse_cost(&s),
        _ => 0.0,
    })
}

pub(crate) mod date {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde_json::Value;

    use crate::asset::DateCell;

    pub(crate) fn serialize<S: Serializer>(
        cell: &Option<DateCell>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match cell {
            Some(cell) => serializer.collect_str(cell),
            None => serializer.serialize_str(""),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateCell>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(s) => DateCell::parse(&s),
            other => Some(DateCell::Raw(other.to_string())),
        })
    }
}
