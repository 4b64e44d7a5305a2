// src/api/schemas.rs
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Body of every error response except 401 and 409
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// A message, a flattened form error tree, or null
    #[schema(value_type = Object, example = "Article not found")]
    pub error: Value,
}

/// Body of a 409 response
#[derive(Serialize, ToSchema)]
pub struct ConflictBody {
    #[schema(example = "An article with this title already exists")]
    pub conflicts: String,

    /// The conflicting resource, serialized with the requested groups
    #[schema(value_type = Object)]
    pub context: Value,
}

/// Body of a paginated 200 response
#[derive(Serialize, ToSchema)]
pub struct PageBody {
    #[schema(example = 1)]
    pub current_page_number: u32,

    #[schema(example = 10)]
    pub num_items_per_page: u32,

    /// Items serialized with the requested groups
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
}

/// An article with every group requested. Fields outside the requested
/// groups are omitted.
#[derive(Serialize, ToSchema)]
pub struct ArticleView {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub published: Option<bool>,
    /// Groups `list`, `details`
    pub tags: Option<Vec<String>>,
    /// Group `details`
    pub body: Option<String>,
    /// Groups `details`, `admin`
    pub author: Option<AuthorView>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorView {
    pub name: String,
    /// Group `admin`
    pub email: Option<String>,
}
