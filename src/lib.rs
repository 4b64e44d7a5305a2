//! JSON response helpers for actix-web.
//!
//! `ResponseBuilder` maps an outcome to a `JsonResponse` with a fixed status
//! code and an `application/json` body. Payloads go through a group-aware
//! serializer (`GroupSerialize`), and invalid forms are flattened into an
//! `ErrorTree` by `FormErrorCollector`.

pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use crate::modules::article::ArticleStore;

pub use config::{ResponseConfig, ServerConfig};
pub use error::{ConfigError, ResponseError, SerializeError};
pub use shared::api::{JsonResponse, ResponseBuilder};
pub use shared::form::{ErrorEntry, ErrorTree, FormErrorCollector, FormNode, FormView};
pub use shared::serializer::{
    GroupSerialize, GroupedObject, JsonSerializer, SerializationGroup, SerializationGroups,
    Ungrouped,
};

#[cfg(test)]
mod tests;

/// Shared state of the demo service.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<ArticleStore>,
    pub editor_token: String,
}
