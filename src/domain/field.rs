// Field helpers for loosely typed wire values
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value that is always written as a JSON string but may arrive as either
/// a string or a number (axis bounds are stored both ways by the product).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForceString(pub String);

impl ForceString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ForceString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ForceString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ForceString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct ForceStringVisitor;

impl<'de> Visitor<'de> for ForceStringVisitor {
    type Value = ForceString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ForceString(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ForceString(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ForceString(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ForceString(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ForceString(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for ForceString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ForceStringVisitor)
    }
}

/// Reads an explicit JSON `null` as the field's default value, the way a
/// missing key is read.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_string_and_number() {
        let from_str: ForceString = serde_json::from_str(r#""10""#).unwrap();
        let from_int: ForceString = serde_json::from_str("10").unwrap();
        let from_float: ForceString = serde_json::from_str("0.5").unwrap();

        assert_eq!(from_str.as_str(), "10");
        assert_eq!(from_int.as_str(), "10");
        assert_eq!(from_float.as_str(), "0.5");
    }

    #[test]
    fn test_always_writes_string() {
        let value = serde_json::to_value(ForceString::new("0")).unwrap();
        assert_eq!(value, serde_json::json!("0"));
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "nullable")]
        name: String,
        #[serde(default, deserialize_with = "nullable")]
        items: Vec<u32>,
    }

    #[test]
    fn test_nullable_reads_null_as_default() {
        let holder: Holder = serde_json::from_str(r#"{"name": null, "items": null}"#).unwrap();
        assert_eq!(holder.name, "");
        assert!(holder.items.is_empty());

        let holder: Holder = serde_json::from_str(r#"{"name": "x", "items": [1]}"#).unwrap();
        assert_eq!(holder.name, "x");
        assert_eq!(holder.items, vec![1]);

        assert!(serde_json::from_str::<Holder>(r#"{"name": 5}"#).is_err());
    }

    #[test]
    fn test_rejects_bool() {
        assert!(serde_json::from_str::<ForceString>("true").is_err());
    }
}
