// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Order-preserving JSON tree.
//
// Used for caller-supplied opaque data (`customData`, `bypass`) and for the
// loosely-typed request path. Unlike `serde_json::Value` it keeps integers and
// doubles apart and keeps object keys in insertion order, so a value decoded
// from a host dictionary encodes back to the same text.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PortOneError, Result};

/// JSON object with insertion-ordered keys.
pub type JsonObject = IndexMap<String, JsonValue>;

/// A JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

impl JsonValue {
    /// Parse JSON text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode as compact JSON text. Fails on NaN or infinite doubles.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            if self.contains_non_finite() {
                PortOneError::NonFiniteNumber
            } else {
                PortOneError::Serialization(e)
            }
        })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value as a double; integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key on an object value.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    fn contains_non_finite(&self) -> bool {
        match self {
            Self::Double(n) => !n.is_finite(),
            Self::Array(items) => items.iter().any(Self::contains_non_finite),
            Self::Object(map) => map.values().any(Self::contains_non_finite),
            _ => false,
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Double(n) => {
                if !n.is_finite() {
                    return Err(ser::Error::custom("non-finite number cannot be encoded as JSON"));
                }
                serializer.serialize_f64(*n)
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<JsonValue, D::Error> {
        JsonValue::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JsonValue, E> {
        // Integers beyond i64 only fit as doubles.
        Ok(i64::try_from(v).map_or(JsonValue::Double(v as f64), JsonValue::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonValue, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<JsonValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<JsonValue, A::Error> {
        let mut map = JsonObject::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, JsonValue>()? {
            map.insert(key, value);
        }
        Ok(JsonValue::Object(map))
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for JsonValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for JsonValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(v: Vec<JsonValue>) -> Self {
        Self::Array(v)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(v: JsonObject) -> Self {
        Self::Object(v)
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_encode_as_plain_json() {
        assert_eq!(JsonValue::Null.to_json_string().unwrap(), "null");
        assert_eq!(JsonValue::Bool(false).to_json_string().unwrap(), "false");
        assert_eq!(JsonValue::Int(-100).to_json_string().unwrap(), "-100");
        assert_eq!(JsonValue::from("한글 테스트").to_json_string().unwrap(), "\"한글 테스트\"");
    }

    #[test]
    fn array_keeps_element_order() {
        let array = JsonValue::Array(vec![1.into(), "two".into(), true.into()]);
        assert_eq!(array.to_json_string().unwrap(), r#"[1,"two",true]"#);
    }

    #[test]
    fn object_keeps_insertion_order() {
        let object: JsonValue = [("zeta", JsonValue::Int(1)), ("alpha", JsonValue::Int(2))]
            .into_iter()
            .collect();
        assert_eq!(object.to_json_string().unwrap(), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn integer_and_double_stay_distinct() {
        let decoded = JsonValue::parse(r#"{"number": 42, "float": 3.14, "whole": 3.0}"#).unwrap();
        assert_eq!(decoded.get("number"), Some(&JsonValue::Int(42)));
        assert_eq!(decoded.get("float"), Some(&JsonValue::Double(3.14)));
        assert_eq!(decoded.get("whole"), Some(&JsonValue::Double(3.0)));

        let text = decoded.to_json_string().unwrap();
        assert_eq!(JsonValue::parse(&text).unwrap(), decoded);
    }

    #[test]
    fn nested_structure_survives_round_trip() {
        let nested: JsonValue = [(
            "level1",
            [(
                "level2",
                JsonValue::Array(vec![
                    "item1".into(),
                    2.into(),
                    [("nested", true)].into_iter().collect(),
                ]),
            )]
            .into_iter()
            .collect::<JsonValue>(),
        )]
        .into_iter()
        .collect();

        let text = nested.to_json_string().unwrap();
        assert_eq!(JsonValue::parse(&text).unwrap(), nested);
    }

    #[test]
    fn decodes_every_kind() {
        let decoded = JsonValue::parse(
            r#"{"string":"hello","number":42,"bool":true,"null":null,"array":[1,2,3],"object":{"nested":"value"}}"#,
        )
        .unwrap();

        assert_eq!(decoded.get("string").and_then(JsonValue::as_str), Some("hello"));
        assert_eq!(decoded.get("bool").and_then(JsonValue::as_bool), Some(true));
        assert!(decoded.get("null").is_some_and(JsonValue::is_null));
        assert_eq!(
            decoded.get("array"),
            Some(&JsonValue::Array(vec![1.into(), 2.into(), 3.into()]))
        );
        assert_eq!(
            decoded.get("object").and_then(|o| o.get("nested")),
            Some(&JsonValue::from("value"))
        );
    }

    #[test]
    fn non_finite_double_is_rejected() {
        let value = JsonValue::Array(vec![JsonValue::Double(f64::NAN)]);
        assert!(matches!(value.to_json_string(), Err(PortOneError::NonFiniteNumber)));
    }
}
