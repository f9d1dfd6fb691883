#[cfg(feature = "swagger")]
pub mod openapi;
pub mod error;
pub mod health;
pub mod houses;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::AppState;

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();

    let mut router = Router::new()
        .route("/houses", post(houses::create_house))
        .route("/houses/", post(houses::create_house))
        .route(
            "/houses/:id",
            get(houses::get_house)
                .post(houses::put_house)
                .delete(houses::delete_house),
        )
        .route("/houses/:id/energy", get(houses::get_energy))
        .route("/healthz", get(health::healthz))
        .with_state(state);

    if server.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "swagger")]
pub fn with_swagger(app: Router) -> Router {
    openapi::with_swagger(app)
}
