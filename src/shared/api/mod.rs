pub mod fallback;
pub mod json_config;
pub mod response;
pub mod response_builder;

pub use response::JsonResponse;
pub use response_builder::ResponseBuilder;
