//! Route table

use crate::config::Config;
use crate::handlers::{self, blogs, cafes, pages};
use crate::method_override::method_override;
use crate::AppState;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get},
    Router,
};
use tower::Layer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Site routes, with anything unmatched served from the public directory
pub fn router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/privacy", get(pages::privacy))
        .route("/blogs", get(blogs::list))
        .route("/blogs/:id", get(blogs::show))
        .route("/city/:city", get(cafes::by_city))
        .route("/cafe-details/:id", get(cafes::details))
        .route("/add-cafe", get(cafes::new_form).post(cafes::create))
        .route(
            "/edit-cafe/:id",
            get(cafes::edit_form).patch(cafes::update),
        )
        .route("/delete-cafe/:id", delete(cafes::delete))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The full application: method override runs before route matching, so it
/// wraps the routed app rather than being layered onto it.
pub fn app(state: AppState, config: &Config) -> Router {
    let routed = router(state, config);
    Router::new().fallback_service(middleware::from_fn(method_override).layer(routed))
}
