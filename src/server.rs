use axum::{
    extract::Request,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::movies::MovieService;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<MovieService>,
}

impl AppState {
    pub fn new(movies: Arc<MovieService>) -> Self {
        Self { movies }
    }
}

pub fn build_router(state: AppState) -> Router {
    let movie_routes = Router::new().route(
        "/api/movies/popular",
        get(crate::movies::get_popular_movies),
    );

    let greeting_routes = Router::new()
        .route("/greet", post(crate::greeting::greet))
        .route("/hello", get(crate::greeting::hello))
        .route("/hello1", get(crate::greeting::hello1));

    let routes = Router::new()
        .route("/health", get(health_handler))
        .merge(movie_routes)
        .merge(greeting_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .with_state(state);

    // Layers on a Router run after route matching, so path rewriting has
    // to wrap the routes from the outside.
    Router::new()
        .fallback_service(routes)
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, "no-cache, no-store")],
        "Healthy",
    )
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight for unknown paths; the CORS layer adds the headers
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
