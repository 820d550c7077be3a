use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login_page))
        .route("/signup", get(handlers::signup_page))
        .route("/recommend", get(handlers::recommend_page))
        .route("/health", get(handlers::health))
        .route("/api/results", get(handlers::get_results))
        .route("/api/recommend", post(handlers::recommend))
        .route("/api/download-pdf", post(handlers::download_pdf))
        .route("/api/login", post(handlers::login))
        .route("/api/signup", post(handlers::signup))
        .with_state(state)
}
