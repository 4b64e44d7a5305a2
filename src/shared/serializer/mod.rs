// src/shared/serializer/mod.rs
pub mod grouped_object;
pub mod groups;
pub mod json_serializer;

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SerializeError;

pub use grouped_object::GroupedObject;
pub use groups::{SerializationGroup, SerializationGroups, DEFAULT_GROUP_NAME};
pub use json_serializer::JsonSerializer;

/// Conversion of a value into JSON, keeping only the fields visible in the
/// requested groups.
///
/// Scalars and collections ignore groups themselves and pass them down to
/// their elements; domain objects usually implement this with
/// `GroupedObject`.
pub trait GroupSerialize {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError>;
}

/// Wraps any serde value so it serializes whole, whatever groups are asked.
#[derive(Debug, Clone, Copy)]
pub struct Ungrouped<T>(pub T);

impl<T: Serialize> GroupSerialize for Ungrouped<T> {
    fn to_group_value(&self, _groups: &SerializationGroups) -> Result<Value, SerializeError> {
        Ok(serde_json::to_value(&self.0)?)
    }
}

macro_rules! plain_group_serialize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl GroupSerialize for $ty {
                fn to_group_value(
                    &self,
                    _groups: &SerializationGroups,
                ) -> Result<Value, SerializeError> {
                    Ok(Value::from(self.clone()))
                }
            }
        )*
    };
}

plain_group_serialize!(String, bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, Value);

impl GroupSerialize for str {
    fn to_group_value(&self, _groups: &SerializationGroups) -> Result<Value, SerializeError> {
        Ok(Value::from(self))
    }
}

impl GroupSerialize for f64 {
    fn to_group_value(&self, _groups: &SerializationGroups) -> Result<Value, SerializeError> {
        serde_json::Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| SerializeError::NonFiniteNumber(self.to_string()))
    }
}

impl GroupSerialize for f32 {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        f64::from(*self).to_group_value(groups)
    }
}

impl<T: GroupSerialize + ?Sized> GroupSerialize for &T {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        (**self).to_group_value(groups)
    }
}

impl<T: GroupSerialize + ?Sized> GroupSerialize for Box<T> {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        (**self).to_group_value(groups)
    }
}

impl<T: GroupSerialize> GroupSerialize for Option<T> {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        match self {
            Some(value) => value.to_group_value(groups),
            None => Ok(Value::Null),
        }
    }
}

impl<T: GroupSerialize> GroupSerialize for [T] {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        self.iter()
            .map(|item| item.to_group_value(groups))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: GroupSerialize> GroupSerialize for Vec<T> {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        self.as_slice().to_group_value(groups)
    }
}

impl<T: GroupSerialize> GroupSerialize for BTreeMap<String, T> {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        let mut map = Map::with_capacity(self.len());
        for (key, value) in self {
            map.insert(key.clone(), value.to_group_value(groups)?);
        }
        Ok(Value::Object(map))
    }
}
