//! Card endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use leitner_core::CardId;

/// GET /cards
/// Lists cards, optionally filtered by repeated `tags` parameters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CardResponse>>> {
    let tags: Vec<String> = params
        .into_iter()
        .filter(|(key, _)| key == "tags" || key == "tag")
        .map(|(_, value)| value)
        .collect();

    let cards = state.store.list(&tags).await?;
    Ok(Json(to_responses(cards)))
}

/// POST /cards
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CardResponse>)> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let card = state.store.create(request.into_new_card()).await?;
    tracing::info!("Created card {}", card.id);

    Ok((StatusCode::CREATED, Json(card.into())))
}

/// GET /cards/:card_id
pub async fn get(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Json<CardResponse>> {
    let card = state.store.get(&CardId::from(card_id)).await?;
    Ok(Json(card.into()))
}

/// GET /cards/quizz
/// Cards due on `date` (defaults to today), in review order.
/// Only the first `date` parameter is read; extra ones are ignored.
pub async fn quiz(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<CardResponse>>> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "date")
        .map(|(_, value)| value.as_str());
    let date = quiz_date(raw, state.clock.today());
    let cards = state.scheduler.due_cards(date).await?;
    Ok(Json(to_responses(cards)))
}

/// PATCH /cards/:card_id/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    payload: std::result::Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let is_valid = request
        .is_valid
        .ok_or_else(|| ApiError::BadRequest("isValid is required".to_string()))?;

    state
        .scheduler
        .record_answer(&CardId::from(card_id), is_valid, state.clock.today())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Parse the quiz date, falling back to `today` when absent or malformed.
fn quiz_date(raw: Option<&str>, today: NaiveDate) -> NaiveDate {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => today,
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid quiz date {:?}: {}", s, e);
            today
        }),
    }
}
