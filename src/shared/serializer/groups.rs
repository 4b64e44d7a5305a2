// src/shared/serializer/groups.rs
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_GROUP_NAME: &str = "Default";

/// A named field-visibility profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SerializationGroup {
    /// Fields declared without any group belong here.
    Default,
    Named(String),
}

impl SerializationGroup {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == DEFAULT_GROUP_NAME {
            SerializationGroup::Default
        } else {
            SerializationGroup::Named(name)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SerializationGroup::Default => DEFAULT_GROUP_NAME,
            SerializationGroup::Named(name) => name,
        }
    }
}

impl fmt::Display for SerializationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SerializationGroup {
    fn from(name: &str) -> Self {
        SerializationGroup::named(name)
    }
}

impl From<String> for SerializationGroup {
    fn from(name: String) -> Self {
        SerializationGroup::named(name)
    }
}

/// The set of groups requested for one serialization call.
///
/// Keeps the caller's order and drops duplicates. Never empty: an empty
/// request falls back to `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationGroups(Vec<SerializationGroup>);

impl SerializationGroups {
    pub fn new<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<SerializationGroup>,
    {
        let mut unique: Vec<SerializationGroup> = Vec::new();
        for group in groups.into_iter().map(Into::into) {
            if !unique.contains(&group) {
                unique.push(group);
            }
        }

        if unique.is_empty() {
            unique.push(SerializationGroup::Default);
        }

        Self(unique)
    }

    pub fn contains(&self, group: &SerializationGroup) -> bool {
        self.0.contains(group)
    }

    /// True when any of `declared` is requested. An empty declaration means
    /// the field lives in `Default`.
    pub fn matches(&self, declared: &[&str]) -> bool {
        if declared.is_empty() {
            return self.contains(&SerializationGroup::Default);
        }
        declared
            .iter()
            .any(|name| self.0.iter().any(|group| group.as_str() == *name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SerializationGroup> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(SerializationGroup::as_str).collect()
    }
}

impl Default for SerializationGroups {
    fn default() -> Self {
        Self(vec![SerializationGroup::Default])
    }
}

impl fmt::Display for SerializationGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

/// Parses a comma-separated list such as `"Default,details"`.
impl FromStr for SerializationGroups {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        ))
    }
}

impl<G: Into<SerializationGroup>> FromIterator<G> for SerializationGroups {
    fn from_iter<I: IntoIterator<Item = G>>(iter: I) -> Self {
        Self::new(iter)
    }
}
