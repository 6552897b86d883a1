// src/routes/app_routes.rs

use std::sync::Arc;

use axum::{
    routing::get,
    Extension, Router,
};
use deadpool_postgres::Pool;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::message_handlers::{create_message, get_message, list_messages};

pub fn create_router(db: Arc<Pool>) -> Router {
    let state = AppState::new(db);

    Router::new()
        .route("/", get(list_messages).post(create_message))
        .route("/:id", get(get_message))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
