//! edss-lambda
//!
//! HTTP API over the EDSS instrument: catalogue, range validation and
//! scoring of raw grades or whole records. Runs under AWS Lambda via
//! `lambda_http`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/instruments/{id}/validate",
            post(routes::instruments::validate_scores),
        )
        .route("/edss/score", post(routes::edss::score_input))
        .route("/edss/score/record", post(routes::edss::score_record))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
