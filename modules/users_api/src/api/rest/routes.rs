use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Assemble the module router. Paths are relative; the server nests
/// them under `/api`.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/database-status", get(handlers::database_status))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(service))
}
