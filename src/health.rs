use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;
use crate::shared::api::ResponseBuilder;
use crate::shared::serializer::Ungrouped;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    articles: usize,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health(data: web::Data<AppState>, builder: web::Data<ResponseBuilder>) -> impl Responder {
    let articles = data.articles.count().await;
    builder.ok(
        Some(&Ungrouped(HealthResponse {
            status: "ok",
            articles,
        })),
        None,
    )
}

#[get("/api-docs/openapi.json")]
pub async fn openapi_json(builder: web::Data<ResponseBuilder>) -> impl Responder {
    builder.ok(Some(&Ungrouped(ApiDoc::openapi())), None)
}
