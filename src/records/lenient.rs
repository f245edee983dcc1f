//! Forgiving field readers for snapshot files that may have been edited by hand.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use tracing::warn;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Read a small non-negative integer, accepting numbers, whole floats and
/// numeric strings. Anything else (including null or a missing key) reads as
/// `None` instead of failing the whole snapshot.
pub fn number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberLike>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        NumberLike::Int(n) => u32::try_from(n).ok(),
        NumberLike::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
            u32::try_from(f as u64).ok()
        }
        NumberLike::Float(_) => None,
        NumberLike::Text(s) => s.trim().parse().ok(),
        NumberLike::Other(_) => None,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NameLike {
    Text(String),
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

/// Read an optional name, treating blank strings as absent. Bare numbers
/// keep their text form; arrays, objects and booleans read as `None`.
pub fn name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NameLike>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let text = match v {
            NameLike::Text(s) => s,
            NameLike::Int(n) => n.to_string(),
            NameLike::Float(f) => f.to_string(),
            NameLike::Other(_) => return None,
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

/// Read a list row by row. Rows that do not decode are logged and dropped
/// so one bad row leaves the rest readable.
pub fn rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!(index, error = %err, "Skipping unreadable entry");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "number")]
        n: Option<u32>,
        #[serde(default, deserialize_with = "name")]
        s: Option<String>,
    }

    fn read(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(read(r#"{"n": 5}"#).n, Some(5));
        assert_eq!(read(r#"{"n": 5.0}"#).n, Some(5));
        assert_eq!(read(r#"{"n": " 10 "}"#).n, Some(10));
    }

    #[test]
    fn test_number_garbage_is_none() {
        assert_eq!(read(r#"{"n": "ten"}"#).n, None);
        assert_eq!(read(r#"{"n": -3}"#).n, None);
        assert_eq!(read(r#"{"n": 2.5}"#).n, None);
        assert_eq!(read(r#"{"n": null}"#).n, None);
        assert_eq!(read(r#"{"n": [1]}"#).n, None);
        assert_eq!(read(r#"{}"#).n, None);
    }

    #[test]
    fn test_name_blank_is_none() {
        assert_eq!(read(r#"{"s": "  "}"#).s, None);
        assert_eq!(read(r#"{"s": null}"#).s, None);
        assert_eq!(read(r#"{"s": " Mandi "}"#).s, Some("Mandi".to_string()));
    }

    #[test]
    fn test_name_from_other_scalars() {
        assert_eq!(read(r#"{"s": 7}"#).s, Some("7".to_string()));
        assert_eq!(read(r#"{"s": true}"#).s, None);
        assert_eq!(read(r#"{"s": {"name": "Mandi"}}"#).s, None);
        assert_eq!(read(r#"{"s": ["Mandi"]}"#).s, None);
    }

    #[test]
    fn test_rows_skip_bad_elements() {
        #[derive(Deserialize)]
        struct List {
            #[serde(default, deserialize_with = "rows")]
            items: Vec<u32>,
        }

        let list: List = serde_json::from_str(r#"{"items": [1, "two", 3, null]}"#).unwrap();
        assert_eq!(list.items, vec![1, 3]);
        let list: List = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(list.items.is_empty());
    }
}
