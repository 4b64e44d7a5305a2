// src/shared/serializer/json_serializer.rs
use actix_web::web::Bytes;
use serde_json::Value;
use tracing::debug;

use super::{GroupSerialize, SerializationGroups};
use crate::error::SerializeError;

/// Group-aware JSON serializer used by `ResponseBuilder` for payload bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    pretty: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn to_value<T>(&self, value: &T, groups: &SerializationGroups) -> Result<Value, SerializeError>
    where
        T: GroupSerialize + ?Sized,
    {
        debug!(groups = %groups, "serializing payload");
        value.to_group_value(groups)
    }

    pub fn serialize<T>(&self, value: &T, groups: &SerializationGroups) -> Result<Bytes, SerializeError>
    where
        T: GroupSerialize + ?Sized,
    {
        let value = self.to_value(value, groups)?;
        Ok(self.encode(&value))
    }

    /// Encodes an already-built value. A `Value` always has string keys, so
    /// this cannot fail.
    pub fn encode(&self, value: &Value) -> Bytes {
        let encoded = if self.pretty {
            format!("{:#}", value)
        } else {
            value.to_string()
        };
        Bytes::from(encoded)
    }
}
