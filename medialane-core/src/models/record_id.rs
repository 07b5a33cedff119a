use std::{convert::Infallible, fmt, str::FromStr};

/// The identifier of a listable record.
///
/// The marketplace datasets mix numeric ids (mock arrays indexed from 1) with
/// textual ones (contract addresses, slugs). Numeric ids double as the
/// creation order of a record when it carries no timestamp.
///
/// Ids are serialized as a bare number or string. Strings that read as a
/// `u64` deserialize as numeric ids, which keeps ids stable when they are used
/// as JSON object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "schemars",
    derive(schemars::JsonSchema),
    schemars(untagged)
)]
pub enum RecordId {
    /// A sequential numeric identifier
    Numeric(u64),
    /// Any other identifier
    Text(String),
}

impl RecordId {
    /// The creation-order key carried by the id itself (0 for textual ids).
    pub fn order_key(&self) -> i64 {
        match self {
            Self::Numeric(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            Self::Text(_) => 0,
        }
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        value
            .trim()
            .parse::<u64>()
            .map(Self::Numeric)
            .unwrap_or_else(|_| Self::Text(value.to_owned()))
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        match value.trim().parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(value),
        }
    }
}

impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => n.fmt(f),
            Self::Text(s) => s.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(n) => serializer.serialize_u64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or a string")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RecordId::Numeric(v))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map(RecordId::Numeric)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.parse().unwrap_or_else(|never: Infallible| match never {}))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_parse_as_numeric() {
        assert_eq!("42".parse::<RecordId>().unwrap(), RecordId::Numeric(42));
        assert_eq!(
            "0xabc".parse::<RecordId>().unwrap(),
            RecordId::Text("0xabc".to_string())
        );
    }

    #[test]
    fn digit_strings_build_numeric_ids() {
        assert_eq!(RecordId::from("7"), RecordId::Numeric(7));
        assert_eq!(RecordId::from(String::from(" 8 ")), RecordId::Numeric(8));
        assert_eq!(RecordId::from("0xabc"), RecordId::Text("0xabc".to_string()));
    }

    #[test]
    fn string_built_ids_survive_json() {
        for id in [RecordId::from("7"), RecordId::from("slug"), RecordId::from(3)] {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(serde_json::from_str::<RecordId>(&json).unwrap(), id);
        }
    }

    #[test]
    fn text_ids_have_no_order() {
        assert_eq!(RecordId::from("slug").order_key(), 0);
        assert_eq!(RecordId::from(7).order_key(), 7);
    }

    #[test]
    fn deserializes_either_shape() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[3, "three", "4"]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                RecordId::Numeric(3),
                RecordId::from("three"),
                RecordId::Numeric(4)
            ]
        );
    }

    #[test]
    fn numeric_ids_survive_as_object_keys() {
        let keyed: std::collections::BTreeMap<RecordId, f64> =
            serde_json::from_str(r#"{"7": 1.5, "0xabc": 2.0}"#).unwrap();
        assert_eq!(keyed.get(&RecordId::Numeric(7)), Some(&1.5));
        assert_eq!(serde_json::to_string(&keyed).unwrap(), r#"{"7":1.5,"0xabc":2.0}"#);
    }
}
