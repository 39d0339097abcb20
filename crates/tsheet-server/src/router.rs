use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tsheet_protocol::endpoints;

use crate::auth::require_session;
use crate::config::{ServerConfig, TsheetConfig};
use crate::error::{ServerError, ServerResult};
use crate::handler;
use crate::state::AppState;

/// Build the axum router with state derived from `config`.
pub fn build_router(config: &TsheetConfig) -> ServerResult<Router> {
    build_router_with_state(AppState::from_config(config), &config.server)
}

/// Build the axum router around an existing state.
///
/// Compare routes run behind session injection; health and info do not.
pub fn build_router_with_state(state: AppState, server: &ServerConfig) -> ServerResult<Router> {
    let compare_routes = Router::new()
        .route(endpoints::COMPARE_FIELDS, post(handler::compare_fields_handler))
        .route(endpoints::COMPARE_TERMSHEETS, post(handler::compare_termsheets_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .merge(compare_routes)
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_allowed_origins)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);
    Ok(router)
}

fn cors_layer(origins: &[String]) -> ServerResult<CorsLayer> {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|_| ServerError::Config(format!("invalid CORS origin: {o:?}")))
            })
            .collect::<ServerResult<Vec<_>>>()?;
        AllowOrigin::list(values)
    };
    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]))
}
