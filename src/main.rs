use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use response_maker::modules::article::{configure_routes, ArticleStore};
use response_maker::shared::api::fallback::not_found_handler;
use response_maker::shared::api::json_config::{
    custom_json_config, custom_path_config, custom_query_config,
};
use response_maker::{AppState, ResponseBuilder, ResponseConfig, ServerConfig};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let server_config = ServerConfig::from_env().map_err(to_io_error)?;
    let response_config = ResponseConfig::from_env().map_err(to_io_error)?;

    let editor_token = env::var("EDITOR_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("EDITOR_TOKEN not set, editor routes use the development token");
        "dev-editor-token".to_string()
    });

    let builder = ResponseBuilder::from_config(&response_config);
    let state = AppState {
        articles: Arc::new(ArticleStore::new()),
        editor_token,
    };

    let server_url = server_config.bind_address();
    info!(
        default_groups = %response_config.default_groups,
        "Server run on: {}", server_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(builder.clone()))
            .app_data(custom_json_config(builder.clone()))
            .app_data(custom_query_config(builder.clone()))
            .app_data(custom_path_config(builder.clone()))
            .configure(init_routes)
            .default_service(web::to(not_found_handler))
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(response_maker::health::health);
    cfg.service(response_maker::health::openapi_json);
    // Articles
    configure_routes(cfg);
}

fn to_io_error(err: response_maker::ConfigError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!("Error starting app: {e}");
        eprintln!("Error starting app: {e}");
    }
}
