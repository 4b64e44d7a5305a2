// src/shared/serializer/grouped_object.rs
use serde::Serialize;
use serde_json::{Map, Value};

use super::{GroupSerialize, SerializationGroups};
use crate::error::SerializeError;

/// Builds a JSON object one field at a time, skipping fields that are not
/// visible in the requested groups.
///
/// ```
/// use response_maker::shared::serializer::{GroupSerialize, GroupedObject, SerializationGroups};
/// use response_maker::error::SerializeError;
/// use serde_json::Value;
///
/// struct User { id: u64, email: String }
///
/// impl GroupSerialize for User {
///     fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
///         Ok(GroupedObject::new(groups)
///             .field("id", &self.id, &[])?
///             .field("email", &self.email, &["admin"])?
///             .finish())
///     }
/// }
///
/// let user = User { id: 7, email: "a@b.c".into() };
/// let public = user.to_group_value(&SerializationGroups::default()).unwrap();
/// assert_eq!(public, serde_json::json!({"id": 7}));
/// ```
#[derive(Debug)]
pub struct GroupedObject<'g> {
    groups: &'g SerializationGroups,
    fields: Map<String, Value>,
}

impl<'g> GroupedObject<'g> {
    pub fn new(groups: &'g SerializationGroups) -> Self {
        Self {
            groups,
            fields: Map::new(),
        }
    }

    /// Adds `name` when any of `declared` is requested. An empty `declared`
    /// places the field in `Default`.
    pub fn field<T>(mut self, name: &str, value: &T, declared: &[&str]) -> Result<Self, SerializeError>
    where
        T: GroupSerialize + ?Sized,
    {
        if self.groups.matches(declared) {
            let value = value.to_group_value(self.groups)?;
            self.fields.insert(name.to_string(), value);
        }
        Ok(self)
    }

    /// Adds `name` regardless of the requested groups.
    pub fn always<T>(mut self, name: &str, value: &T) -> Result<Self, SerializeError>
    where
        T: GroupSerialize + ?Sized,
    {
        let value = value.to_group_value(self.groups)?;
        self.fields.insert(name.to_string(), value);
        Ok(self)
    }

    /// Like `field`, for plain serde values that carry no groups of their own.
    pub fn serde_field<T>(
        mut self,
        name: &str,
        value: &T,
        declared: &[&str],
    ) -> Result<Self, SerializeError>
    where
        T: Serialize + ?Sized,
    {
        if self.groups.matches(declared) {
            self.fields
                .insert(name.to_string(), serde_json::to_value(value)?);
        }
        Ok(self)
    }

    pub fn finish(self) -> Value {
        Value::Object(self.fields)
    }
}
