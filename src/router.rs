use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::{require_admin, require_user};
use crate::modules::auth::router::{init_admin_auth_router, init_user_auth_router};
use crate::modules::courses::router::{init_admin_courses_router, init_user_courses_router};
use crate::modules::purchases::router::init_purchases_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let user_routes = init_user_auth_router().merge(
        init_user_courses_router()
            .merge(init_purchases_router())
            .route_layer(middleware::from_fn_with_state(state.clone(), require_user)),
    );

    let admin_routes = init_admin_auth_router().merge(
        init_admin_courses_router()
            .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
    );

    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest("/user", user_routes)
        .nest("/admin", admin_routes)
        .with_state(state.clone())
        .layer({
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ]);

            // `*` is not a valid entry in an origin list; it selects the
            // allow-any-origin mode instead.
            if state.cors_config.allowed_origins.iter().any(|o| o == "*") {
                cors.allow_origin(Any)
            } else {
                let allowed_origins: Vec<HeaderValue> = state
                    .cors_config
                    .allowed_origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect();

                cors.allow_origin(allowed_origins)
            }
        })
        .layer(middleware::from_fn(logging_middleware))
}
