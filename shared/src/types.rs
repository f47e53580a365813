//! Wire types shared between the catalog library and its binary

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::errors::SharedResult;

/// A "number or string" element of a sequence to deduplicate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Integer(i64),
    Text(String),
}

impl Primitive {
    /// Parse a JSON array such as `[13, "a", 13]` into primitives
    pub fn parse_list(json: &str) -> SharedResult<Vec<Primitive>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Integer(value) => write!(f, "{value}"),
            Primitive::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Integer(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(value)
    }
}

/// One page of the Star Wars planets listing.
///
/// Only `count` and `results` are guaranteed by the upstream API. Every other
/// top-level field, `next` and `previous` included, stays in `extra` exactly
/// as received, so an absent link and a `null` link serialize differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPage {
    pub count: u64,
    pub results: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlanetPage {
    pub fn from_value(value: Value) -> SharedResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// URL of the following page, if the body carries one
    pub fn next(&self) -> Option<&str> {
        self.link("next")
    }

    /// URL of the preceding page, if the body carries one
    pub fn previous(&self) -> Option<&str> {
        self.link("previous")
    }

    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }

    fn link(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}
