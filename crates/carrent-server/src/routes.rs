//! Route table and middleware stack.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::cors::build_cors_layer;
use crate::handlers::{owner, user};
use crate::state::AppState;

pub fn build_owner_routers() -> Router<AppState> {
    let owner_routers = Router::new()
        .route("/change-role", post(owner::change_role))
        .route("/add-car", post(owner::add_car))
        .route("/cars", get(owner::list_owner_cars))
        .route("/toggle-car", post(owner::toggle_car))
        .route("/delete-car", post(owner::delete_car))
        .route("/dashboard", get(owner::dashboard))
        .route("/update-image", post(owner::update_user_image));

    Router::new().nest("/owner", owner_routers)
}

pub fn build_user_routers() -> Router<AppState> {
    let user_routers = Router::new().route("/data", get(user::get_user_data));

    Router::new().nest("/user", user_routers)
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(build_owner_routers())
        .merge(build_user_routers());

    Router::new()
        .route("/", get(user::health))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(build_cors_layer(&config.cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}
