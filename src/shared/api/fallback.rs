// src/shared/api/fallback.rs
use actix_web::{web, HttpRequest};

use crate::shared::api::{JsonResponse, ResponseBuilder};

pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "Resource not found";

/// Default service for a resource: answers 405 naming the request method.
pub async fn method_not_allowed_handler(
    req: HttpRequest,
    builder: web::Data<ResponseBuilder>,
) -> JsonResponse {
    builder.method_not_allowed(req.method().as_str())
}

/// Default service for the whole app: answers 404.
pub async fn not_found_handler(builder: web::Data<ResponseBuilder>) -> JsonResponse {
    builder.not_found(RESOURCE_NOT_FOUND_MESSAGE)
}
