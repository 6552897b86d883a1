use axum::{debug_handler, extract::Path, response::IntoResponse, Extension, Json};
use hyper::StatusCode;
use tracing::debug;
use validator::Validate;

use crate::{
    app_state::AppState, error::ApiError, models::message::CreateMessageRequest,
    services::message_service,
};

#[debug_handler]
pub async fn list_messages(
    Extension(state): Extension<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = message_service::find_all(&state.db).await?;
    Ok(Json(messages))
}

#[debug_handler]
pub async fn get_message(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>, // Extracts the message id from the URL
) -> Result<impl IntoResponse, ApiError> {
    debug!("Fetching message with id {}", id);
    let messages = message_service::find_by_id(&state.db, &id).await?;
    Ok(Json(messages))
}

#[debug_handler]
pub async fn create_message(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    message_service::save(&state.db, payload).await?;
    Ok(StatusCode::OK)
}
