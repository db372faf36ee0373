//! Contains custom serialization and deserialization functions.

use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;
use serde::Deserialize;
use serde::de::{self, Deserializer, Unexpected, Visitor};

/// Deserializes an optional string, treating an empty string as `None`.
pub fn empty_string_is_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;

    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes a number which may be sent as either a JSON number or a numeric string.
pub fn string_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    struct NumericVisitor<T> {
        marker: PhantomData<T>,
    }

    impl<'de, T> Visitor<'de> for NumericVisitor<T>
    where
        T: FromStr + TryFrom<u64> + TryFrom<i64>,
        <T as FromStr>::Err: Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an integer or a string")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            <T as TryFrom<u64>>::try_from(v)
                .map_err(|_e| de::Error::custom("Number too large to fit in target type"))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            <T as TryFrom<i64>>::try_from(v)
                .map_err(|_e| de::Error::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse::<T>().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(NumericVisitor {
        marker: PhantomData,
    })
}

/// Deserializes a boolean sent as `0`/`1`, `"0"`/`"1"` or `true`/`false`. A `null` is `false`.
pub fn into_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct DeserializeBoolVisitor;

    impl<'de> Visitor<'de> for DeserializeBoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("zero, one, or a boolean")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Unsigned(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            match v {
                "0" => Ok(false),
                "1" => Ok(true),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"zero or one",
                )),
            }
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(false)
        }
    }

    deserializer.deserialize_any(DeserializeBoolVisitor)
}

/// Serializes and deserializes numbers as strings.
pub mod string {
    use std::fmt::Display;
    use std::str::FromStr;
    use serde::{de, Serializer, Deserialize, Deserializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "into_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "string_or_number")]
        count: u64,
        #[serde(default, deserialize_with = "empty_string_is_none")]
        error: Option<String>,
    }

    #[test]
    fn parses_numeric_flags() {
        let flags: Flags = serde_json::from_str(r#"{"flag":1,"count":"75","error":""}"#).unwrap();

        assert!(flags.flag);
        assert_eq!(flags.count, 75);
        assert_eq!(flags.error, None);
    }

    #[test]
    fn parses_boolean_flags() {
        let flags: Flags = serde_json::from_str(r#"{"flag":false,"count":250}"#).unwrap();

        assert!(!flags.flag);
        assert_eq!(flags.count, 250);
    }

    #[test]
    fn rejects_negative_unsigned_numbers() {
        let result = serde_json::from_str::<Flags>(r#"{"count":-1}"#);

        assert!(result.is_err());
    }
}
