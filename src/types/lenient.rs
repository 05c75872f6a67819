//! Tolerant field readers for service bodies, which often carry `null` for
//! absent values and numbers written as strings.

use serde::{de::Error as _, Deserialize, Deserializer};

/// Read a field, treating `null` like a missing value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Int(u64),
    Float(f64),
    Text(String),
}

/// Read a non-negative count given as an integer, a float or a numeric
/// string. `null` reads as 0, negatives clamp to 0, large values saturate.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<CountRepr>::deserialize(deserializer)? {
        None => Ok(0),
        Some(CountRepr::Int(n)) => Ok(u32::try_from(n).unwrap_or(u32::MAX)),
        Some(CountRepr::Float(f)) => Ok(f as u32),
        Some(CountRepr::Text(text)) => text.trim().parse::<u32>().map_err(|_| {
            D::Error::custom(format!("expected a day count, got \"{}\"", text))
        }),
    }
}
