// src/api/openapi.rs
use crate::api::schemas::{ArticleView, AuthorView, ConflictBody, ErrorBody, PageBody};
use crate::modules::article::{AuthorRequest, CreateArticleRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Response Maker Demo API",
        version = "0.1.0",
        description = "Article catalogue showing every JSON response shape"
    ),
    paths(
        crate::modules::article::routes::list_articles_handler,
        crate::modules::article::routes::create_article_handler,
        crate::modules::article::routes::get_article_handler,
        crate::modules::article::routes::publish_article_handler,
        crate::modules::article::routes::delete_article_handler,
    ),
    components(
        schemas(
            // Response bodies
            ErrorBody,
            ConflictBody,
            PageBody,
            ArticleView,
            AuthorView,

            // Request DTOs
            CreateArticleRequest,
            AuthorRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "articles", description = "Article endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Editor token"))
                        .build(),
                ),
            )
        }
    }
}
