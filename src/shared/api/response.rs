// src/shared/api/response.rs
use actix_web::body::BoxBody;
use actix_web::http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::{HttpRequest, HttpResponse, Responder};
use tracing::error;

use crate::error::ResponseError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A finished JSON response: status, headers and encoded body.
///
/// Built by `ResponseBuilder`; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl JsonResponse {
    pub(crate) fn new(status: StatusCode, body: Bytes) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Self {
            status,
            headers,
            body,
        }
    }

    pub(crate) fn empty(status: StatusCode) -> Self {
        Self::new(status, Bytes::new())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }
}

impl From<JsonResponse> for HttpResponse {
    fn from(response: JsonResponse) -> Self {
        let (status, headers, body) = response.into_parts();

        let mut builder = HttpResponse::build(status);
        for (name, value) in headers.iter() {
            builder.insert_header((name.clone(), value.clone()));
        }
        builder.body(body)
    }
}

impl Responder for JsonResponse {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into()
    }
}

/// Lets handlers return `Result<JsonResponse, ResponseError>` and use `?`
/// on serializer failures.
///
/// actix renders this without access to app data, so the body always comes
/// from a default builder and is compact even when `RESPONSE_PRETTY_JSON`
/// is set.
impl actix_web::ResponseError for ResponseError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("Failed to build response: {}", self);
        super::ResponseBuilder::default().internal_error().into()
    }
}
