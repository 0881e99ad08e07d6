use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::chat_dto::{SubmitReplyPayload, SubmitReplyResponse, ThreadResponse, UnreadCountResponse},
    error::{Error, Result},
    middleware::auth::{require_admin, Caller},
    models::feedback::FeedbackId,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/chat/feedback/{feedback_id}",
    params(
        ("feedback_id" = i64, Path, description = "Feedback ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket thread, oldest first", body = Json<ThreadResponse>),
        (status = 400, description = "Malformed feedback id"),
        (status = 403, description = "Caller is not an administrator")
    )
)]
#[axum::debug_handler(state = AppState)]
pub async fn get_thread(
    State(state): State<AppState>,
    caller: Option<Caller>,
    Path(feedback_id): Path<String>,
) -> Result<impl IntoResponse> {
    let admin = require_admin(caller)?;
    let feedback_id: FeedbackId = feedback_id.parse()?;

    let mensagens = state
        .chat_service
        .fetch_thread(&admin, feedback_id)
        .await
        .map_err(|e| e.mask_unexpected("Failed to fetch messages"))?;

    Ok(Json(ThreadResponse { mensagens }))
}

#[utoipa::path(
    post,
    path = "/api/admin/chat/feedback/{feedback_id}",
    params(
        ("feedback_id" = i64, Path, description = "Feedback ticket ID")
    ),
    request_body = SubmitReplyPayload,
    responses(
        (status = 201, description = "Reply stored and ticket marked answered", body = Json<SubmitReplyResponse>),
        (status = 400, description = "Empty message or malformed feedback id"),
        (status = 403, description = "Caller is not an administrator"),
        (status = 404, description = "Feedback not found")
    )
)]
#[axum::debug_handler(state = AppState)]
pub async fn submit_reply(
    State(state): State<AppState>,
    caller: Option<Caller>,
    Path(feedback_id): Path<String>,
    payload: std::result::Result<Json<SubmitReplyPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let admin = require_admin(caller)?;
    let feedback_id: FeedbackId = feedback_id.parse()?;
    // body rejections are reported only once the caller is known to be an admin
    let Json(payload) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    payload.validate()?;

    let mensagem = state
        .chat_service
        .submit_reply(&admin, feedback_id, payload.text())
        .await
        .map_err(|e| e.mask_unexpected("Failed to send reply"))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReplyResponse {
            success: true,
            message: "Reply sent successfully".to_string(),
            mensagem,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/chat/unread",
    responses(
        (status = 200, description = "Unread user messages across all tickets", body = Json<UnreadCountResponse>),
        (status = 403, description = "Caller is not an administrator")
    )
)]
#[axum::debug_handler(state = AppState)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    caller: Option<Caller>,
) -> Result<impl IntoResponse> {
    let admin = require_admin(caller)?;
    let unread_count = state
        .chat_service
        .unread_count(&admin)
        .await
        .map_err(|e| e.mask_unexpected("Failed to count unread messages"))?;

    Ok(Json(UnreadCountResponse { unread_count }))
}
