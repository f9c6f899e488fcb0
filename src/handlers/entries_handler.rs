use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    models::{DeleteEntryResponse, DiaryEntry, EntryResponse},
    stoic::generate_stoic_comment,
    AppError, AppResult, AppState,
};

/// POST /entries - Store an entry and reply with a stoic comment
#[utoipa::path(
    post,
    path = "/entries",
    request_body = DiaryEntry,
    responses(
        (status = 200, description = "Entry stored", body = EntryResponse),
        (status = 422, description = "Body does not match the entry schema")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(input): Json<DiaryEntry>,
) -> Json<EntryResponse> {
    let entry = state.store.create(input).await;
    tracing::info!(entry_id = entry.id, mood = %entry.mood, "Diary entry created");

    let reply = generate_stoic_comment(&entry.text, &entry.mood);

    Json(EntryResponse {
        entry,
        stoic_comment: reply.comment,
        stoic_quote: reply.quote.to_string(),
    })
}

/// GET /entries - All entries in insertion order
#[utoipa::path(
    get,
    path = "/entries",
    responses(
        (status = 200, description = "List of diary entries", body = Vec<DiaryEntry>)
    ),
    tag = "entries"
)]
pub async fn list_entries(State(state): State<Arc<AppState>>) -> Json<Vec<DiaryEntry>> {
    Json(state.store.list().await)
}

/// GET /entries/{entry_id}
#[utoipa::path(
    get,
    path = "/entries/{entry_id}",
    params(
        ("entry_id" = i64, Path, description = "Diary entry ID")
    ),
    responses(
        (status = 200, description = "Diary entry", body = DiaryEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<DiaryEntry>> {
    let entry = state.store.get(entry_id).await.ok_or_else(|| {
        tracing::debug!(entry_id, "Diary entry lookup missed");
        AppError::entry_not_found(entry_id)
    })?;

    Ok(Json(entry))
}

/// DELETE /entries/{entry_id}
#[utoipa::path(
    delete,
    path = "/entries/{entry_id}",
    params(
        ("entry_id" = i64, Path, description = "Diary entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = DeleteEntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<DeleteEntryResponse>> {
    let deleted_entry = state.store.delete(entry_id).await.ok_or_else(|| {
        tracing::debug!(entry_id, "Diary entry delete missed");
        AppError::entry_not_found(entry_id)
    })?;

    tracing::info!(entry_id, "Diary entry deleted");

    Ok(Json(DeleteEntryResponse {
        message: format!("Entry {} deleted", entry_id),
        deleted_entry,
    }))
}
