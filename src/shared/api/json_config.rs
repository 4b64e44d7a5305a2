// src/shared/api/json_config.rs
use crate::shared::api::ResponseBuilder;
use actix_web::error::InternalError;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};
use tracing::debug;

/// JSON extractor config whose payload errors render as `bad_request`
/// with the extractor's error text.
pub fn custom_json_config(builder: ResponseBuilder) -> JsonConfig {
    JsonConfig::default().error_handler(move |err, _req| {
        let message = err.to_string();
        debug!("Rejected JSON payload: {}", message);
        InternalError::from_response(err, builder.bad_request(message).into()).into()
    })
}

/// Same as [`custom_json_config`] for query strings that fail to deserialize.
pub fn custom_query_config(builder: ResponseBuilder) -> QueryConfig {
    QueryConfig::default().error_handler(move |err, _req| {
        let message = err.to_string();
        debug!("Rejected query string: {}", message);
        InternalError::from_response(err, builder.bad_request(message).into()).into()
    })
}

/// Same as [`custom_json_config`] for path segments that fail to parse.
pub fn custom_path_config(builder: ResponseBuilder) -> PathConfig {
    PathConfig::default().error_handler(move |err, _req| {
        let message = err.to_string();
        debug!("Rejected path segment: {}", message);
        InternalError::from_response(err, builder.bad_request(message).into()).into()
    })
}
