// src/modules/article/routes.rs
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, HttpRequest};
use serde::Deserialize;
use tracing::{debug, warn};
use utoipa::IntoParams;

use super::domain::CreateArticleRequest;
use super::store::ArticleStoreError;
use crate::api::schemas::{ArticleView, ConflictBody, ErrorBody, PageBody};
use crate::error::ResponseError;
use crate::shared::api::fallback::method_not_allowed_handler;
use crate::shared::api::{JsonResponse, ResponseBuilder};
use crate::shared::serializer::SerializationGroups;
use crate::AppState;

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

type HandlerResult = Result<JsonResponse, ResponseError>;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListQuery {
    /// Page number, starting at 1
    #[serde(default)]
    pub page: u32,

    /// Items per page, at most 100
    #[serde(default)]
    pub per_page: u32,

    /// Comma-separated serialization groups, e.g. `Default,list`.
    pub groups: Option<String>,
}

impl ArticleListQuery {
    fn page(&self) -> u32 {
        if self.page == 0 {
            1
        } else {
            self.page
        }
    }

    fn per_page(&self) -> u32 {
        match self.per_page {
            0 => DEFAULT_PER_PAGE,
            n => n.min(MAX_PER_PAGE),
        }
    }
}

fn requested_groups(raw: Option<&str>) -> Option<SerializationGroups> {
    raw.map(|raw| raw.parse().unwrap_or_default())
}

fn details_groups() -> SerializationGroups {
    SerializationGroups::new(["Default", "details"])
}

/// Checks the `Authorization: Bearer <token>` header against the editor
/// token.
fn authorize_editor(
    req: &HttpRequest,
    state: &AppState,
    builder: &ResponseBuilder,
) -> Result<(), JsonResponse> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| builder.not_authorized())?;

    if token != state.editor_token.as_str() {
        warn!("Rejected editor token");
        return Err(builder.forbidden_access(Some("Only editors can change articles")));
    }
    Ok(())
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "articles",
    params(ArticleListQuery),
    responses(
        (status = 200, description = "One page of articles", body = PageBody)
    )
)]
pub async fn list_articles_handler(
    query: web::Query<ArticleListQuery>,
    data: web::Data<AppState>,
    builder: web::Data<ResponseBuilder>,
) -> HandlerResult {
    let groups = requested_groups(query.groups.as_deref());
    let page = data.articles.list(query.page(), query.per_page()).await;

    debug!(page = page.page, per_page = page.per_page, "Listing articles");
    builder.ok_paginated(&page.items, groups.as_ref(), page.per_page, page.page)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created", body = ArticleView),
        (status = 400, description = "Invalid form", body = ErrorBody),
        (status = 409, description = "Title already used", body = ConflictBody)
    )
)]
pub async fn create_article_handler(
    req: web::Json<CreateArticleRequest>,
    data: web::Data<AppState>,
    builder: web::Data<ResponseBuilder>,
) -> HandlerResult {
    let req = req.into_inner();

    let form = req.validate();
    if !form.is_valid() {
        return Ok(builder.bad_form(&form));
    }

    match data.articles.insert(req).await {
        Ok(created) => builder.created(&created, Some(&details_groups())),

        Err(ArticleStoreError::DuplicateTitle(existing)) => {
            builder.conflict("An article with this title already exists", &*existing, None)
        }

        Err(ArticleStoreError::NotFound) => Ok(builder.internal_error()),
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = "articles",
    params(
        ("id" = u64, Path, description = "Article id"),
        ArticleListQuery
    ),
    responses(
        (status = 200, description = "The article", body = ArticleView),
        (status = 404, description = "Unknown article", body = ErrorBody)
    )
)]
pub async fn get_article_handler(
    path: web::Path<u64>,
    query: web::Query<ArticleListQuery>,
    data: web::Data<AppState>,
    builder: web::Data<ResponseBuilder>,
) -> HandlerResult {
    let groups = requested_groups(query.groups.as_deref()).unwrap_or_else(details_groups);

    match data.articles.get(path.into_inner()).await {
        Some(article) => builder.ok(Some(&article), Some(&groups)),
        None => Ok(builder.not_found("Article not found")),
    }
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/publish",
    tag = "articles",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published", body = ArticleView),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Not an editor", body = ErrorBody),
        (status = 404, description = "Unknown article", body = ErrorBody)
    ),
    security(("BearerAuth" = []))
)]
pub async fn publish_article_handler(
    http: HttpRequest,
    path: web::Path<u64>,
    data: web::Data<AppState>,
    builder: web::Data<ResponseBuilder>,
) -> HandlerResult {
    if let Err(rejection) = authorize_editor(&http, &data, &builder) {
        return Ok(rejection);
    }

    match data.articles.publish(path.into_inner()).await {
        Ok(article) => builder.ok(Some(&article), None),
        Err(_) => Ok(builder.not_found("Article not found")),
    }
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = "articles",
    params(("id" = u64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 401, description = "Missing bearer token"),
        (status = 403, description = "Not an editor", body = ErrorBody),
        (status = 404, description = "Unknown article", body = ErrorBody)
    ),
    security(("BearerAuth" = []))
)]
pub async fn delete_article_handler(
    http: HttpRequest,
    path: web::Path<u64>,
    data: web::Data<AppState>,
    builder: web::Data<ResponseBuilder>,
) -> JsonResponse {
    if let Err(rejection) = authorize_editor(&http, &data, &builder) {
        return rejection;
    }

    match data.articles.delete(path.into_inner()).await {
        Ok(()) => builder.no_content(),
        Err(_) => builder.not_found("Article not found"),
    }
}

/// Registers the article resources. Unsupported methods on a known path
/// answer 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/articles")
            .route(web::get().to(list_articles_handler))
            .route(web::post().to(create_article_handler))
            .default_service(web::to(method_not_allowed_handler)),
    )
    .service(
        web::resource("/api/articles/{id}")
            .route(web::get().to(get_article_handler))
            .route(web::delete().to(delete_article_handler))
            .default_service(web::to(method_not_allowed_handler)),
    )
    .service(
        web::resource("/api/articles/{id}/publish")
            .route(web::post().to(publish_article_handler))
            .default_service(web::to(method_not_allowed_handler)),
    );
}
