mod handlers;
mod save;

pub use handlers::{SaveResponse, SaveStatus};
pub use save::save_document;

use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the server: `/save` and `/health`, with every other path served from
/// `config.static_dir`. Missing files and non-GET requests elsewhere get 404.
pub fn create_router(config: ServerConfig) -> Router {
    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(handlers::not_found.into_service());

    Router::new()
        // Documents are saved whole; no size cap.
        .route(
            "/save",
            post(handlers::save)
                .options(handlers::preflight)
                .layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(config)
}

/// Any origin may read and save.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
        ])
}
