// src/shared/form/error_tree.rs
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Value stored under a field name in an `ErrorTree`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    /// The field failed on its own and none of its sub-fields did.
    Messages(Vec<String>),
    /// At least one sub-field failed.
    Nested(ErrorTree),
}

impl ErrorEntry {
    pub fn messages(&self) -> &[String] {
        match self {
            ErrorEntry::Messages(messages) => messages,
            ErrorEntry::Nested(tree) => tree.errors(),
        }
    }

    pub fn error_count(&self) -> usize {
        match self {
            ErrorEntry::Messages(messages) => messages.len(),
            ErrorEntry::Nested(tree) => tree.error_count(),
        }
    }
}

/// Key holding a node's own messages when the node also has failing fields.
/// Collection forms name their children `"0"`, `"1"`, ..., so own messages
/// cannot be keyed by index.
pub const OWN_ERRORS_KEY: &str = "_errors";

/// Flattened form errors: the node's own messages plus one entry per
/// failing field, in declaration order.
///
/// Serialized as a plain list when only own messages exist, otherwise as an
/// object with the own messages listed under [`OWN_ERRORS_KEY`], followed by
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTree {
    pub(crate) errors: Vec<String>,
    pub(crate) fields: Vec<(String, ErrorEntry)>,
}

impl ErrorTree {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.fields.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn fields(&self) -> &[(String, ErrorEntry)] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&ErrorEntry> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, entry)| entry)
    }

    /// Total number of messages in the whole tree.
    pub fn error_count(&self) -> usize {
        self.errors.len()
            + self
                .fields
                .iter()
                .map(|(_, entry)| entry.error_count())
                .sum::<usize>()
    }

    fn renders_as_list(&self) -> bool {
        self.fields.is_empty() && !self.errors.is_empty()
    }
}

impl Serialize for ErrorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

impl From<&ErrorTree> for Value {
    fn from(tree: &ErrorTree) -> Self {
        if tree.renders_as_list() {
            return Value::from(tree.errors.clone());
        }

        let mut map = Map::with_capacity(tree.fields.len() + 1);
        if !tree.errors.is_empty() {
            map.insert(OWN_ERRORS_KEY.to_string(), Value::from(tree.errors.clone()));
        }
        for (name, entry) in &tree.fields {
            let value = match entry {
                ErrorEntry::Messages(messages) => Value::from(messages.clone()),
                ErrorEntry::Nested(nested) => Value::from(nested),
            };
            map.insert(name.clone(), value);
        }
        Value::Object(map)
    }
}

impl From<ErrorTree> for Value {
    fn from(tree: ErrorTree) -> Self {
        Value::from(&tree)
    }
}
