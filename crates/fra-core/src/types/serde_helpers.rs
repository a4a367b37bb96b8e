//! Lenient deserializers for hand-edited fixture data.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads a non-negative count. Missing, null, negative or non-numeric
/// values read as 0; fractional values are truncated.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(count_from_value).unwrap_or(0))
}

/// Reads a float. Missing, null or non-numeric values read as 0.0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0))
}

/// Reads a flag. Anything other than a JSON boolean reads as `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
}

/// Reads a `[lng, lat]` polygon. A missing or non-array value reads as an
/// empty ring; points that are not two finite numbers are dropped.
pub fn lenient_points<'de, D>(deserializer: D) -> Result<Vec<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items.iter().filter_map(point_from_value).collect())
}

fn point_from_value(value: &Value) -> Option<[f64; 2]> {
    match value.as_array()?.as_slice() {
        [x, y] => {
            let (x, y) = (x.as_f64()?, y.as_f64()?);
            (x.is_finite() && y.is_finite()).then_some([x, y])
        }
        _ => None,
    }
}

fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
            .unwrap_or(0),
        _ => 0,
    }
}
