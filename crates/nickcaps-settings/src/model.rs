use schemars::JsonSchema;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// `nickcaps.toml` schema v1.
///
/// Unknown tables are ignored so the host can keep other module config in the same file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NickcapsFileV1 {
    #[serde(default)]
    pub nickcaps: NickcapsConfigV1,
}

/// The `[nickcaps]` table. Absent keys fall back to defaults.
///
/// Integer keys accept any TOML value so one bad key is reported and defaulted on its own
/// instead of failing the whole document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NickcapsConfigV1 {
    /// How long a nick must be (in bytes) before `maxcaps` applies. Default 4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<i64>")]
    pub minlen: Option<ConfigInt>,

    /// Percentage of a nick that may be capital letters, 1 to 100. Default 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<i64>")]
    pub maxcaps: Option<ConfigInt>,

    /// Characters counted as capital letters. Default `A` through `Z`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capsmap: Option<String>,
}

/// An integer setting as written, or a rendering of whatever else was there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigInt {
    Int(i64),
    Invalid(String),
}

impl fmt::Display for ConfigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigInt::Int(v) => write!(f, "{v}"),
            ConfigInt::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for ConfigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConfigIntVisitor)
    }
}

struct ConfigIntVisitor;

impl<'de> Visitor<'de> for ConfigIntVisitor {
    type Value = ConfigInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ConfigInt, E> {
        Ok(ConfigInt::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ConfigInt, E> {
        Ok(i64::try_from(v).map_or_else(|_| ConfigInt::Invalid(v.to_string()), ConfigInt::Int))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<ConfigInt, E> {
        Ok(i64::try_from(v).map_or_else(|_| ConfigInt::Invalid(v.to_string()), ConfigInt::Int))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<ConfigInt, E> {
        Ok(i64::try_from(v).map_or_else(|_| ConfigInt::Invalid(v.to_string()), ConfigInt::Int))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ConfigInt, E> {
        Ok(ConfigInt::Invalid(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ConfigInt, E> {
        Ok(ConfigInt::Invalid(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ConfigInt, E> {
        Ok(ConfigInt::Invalid(format!("{v:?}")))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ConfigInt, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ConfigInt::Invalid("an array".to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ConfigInt, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ConfigInt::Invalid("a table".to_string()))
    }
}
