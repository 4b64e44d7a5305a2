// src/modules/article/domain.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::SerializeError;
use crate::shared::form::FormNode;
use crate::shared::serializer::{GroupSerialize, GroupedObject, SerializationGroups};

pub const MAX_TITLE_LEN: usize = 120;
pub const MIN_BODY_LEN: usize = 10;
pub const MAX_TAGS: usize = 5;

//
// ──────────────────────────────────────────────────────────
// Entities
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: Author,
    pub published: bool,
}

impl GroupSerialize for Author {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        Ok(GroupedObject::new(groups)
            .always("name", &self.name)?
            .field("email", &self.email, &["admin"])?
            .finish())
    }
}

/// `Default`: identity and state. `list` adds tags, `details` adds the body,
/// tags and author name, `admin` exposes the author email.
impl GroupSerialize for Article {
    fn to_group_value(&self, groups: &SerializationGroups) -> Result<Value, SerializeError> {
        Ok(GroupedObject::new(groups)
            .field("id", &self.id, &[])?
            .field("title", &self.title, &[])?
            .field("published", &self.published, &[])?
            .field("tags", &self.tags, &["list", "details"])?
            .field("body", &self.body, &["details"])?
            .field("author", &self.author, &["details", "admin"])?
            .finish())
    }
}

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct AuthorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<AuthorRequest>,
}

impl CreateArticleRequest {
    /// Checks every field and returns the resulting form tree; the request
    /// is acceptable when the tree `is_valid()`.
    pub fn validate(&self) -> FormNode {
        let mut form = FormNode::new();

        let mut title = FormNode::new();
        if self.title.trim().is_empty() {
            title.push_error("This value should not be blank.");
        } else if self.title.chars().count() > MAX_TITLE_LEN {
            title.push_error(format!(
                "This value is too long. It should have {} characters or less.",
                MAX_TITLE_LEN
            ));
        }
        form.insert_child("title", title);

        let mut body = FormNode::new();
        if self.body.trim().chars().count() < MIN_BODY_LEN {
            body.push_error(format!(
                "This value is too short. It should have {} characters or more.",
                MIN_BODY_LEN
            ));
        }
        form.insert_child("body", body);

        let mut tags = FormNode::new();
        if self.tags.len() > MAX_TAGS {
            tags.push_error(format!(
                "This collection should contain {} elements or less.",
                MAX_TAGS
            ));
        }
        for (index, tag) in self.tags.iter().enumerate() {
            let mut entry = FormNode::new();
            if tag.trim().is_empty() {
                entry.push_error("This value should not be blank.");
            }
            tags.insert_child(index.to_string(), entry);
        }
        form.insert_child("tags", tags);

        match &self.author {
            Some(author) => form.insert_child("author", author.validate()),
            None => form.push_error("The author is required."),
        }

        form
    }

    pub fn into_article(self, id: u64) -> Article {
        let author = self.author.unwrap_or_default();

        Article {
            id,
            title: self.title.trim().to_string(),
            body: self.body,
            tags: self.tags.into_iter().map(|t| t.trim().to_string()).collect(),
            author: Author {
                name: author.name,
                email: author.email,
            },
            published: false,
        }
    }
}

impl AuthorRequest {
    fn validate(&self) -> FormNode {
        let mut name = FormNode::new();
        if self.name.trim().is_empty() {
            name.push_error("This value should not be blank.");
        }

        let mut email = FormNode::new();
        if self.email.trim().is_empty() {
            email.push_error("This value should not be blank.");
        } else if !is_plausible_email(&self.email) {
            email.push_error("This value is not a valid email address.");
        }

        FormNode::new()
            .with_child("name", name)
            .with_child("email", email)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
