//! HTTP route handlers for the exercise API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use sightread::core::selector;
use sightread::core::types::{Catalog, ExerciseNumber, Piece};
use tracing::debug;

use crate::state::AppState;

/// Upper bound on `availableExercises` in a 404 body.
const NOT_FOUND_SAMPLE: usize = 20;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/today", get(get_today))
        .route("/piece/{number}", get(get_piece))
        .route("/random", get(get_random))
        .route("/next/{current}", get(get_next))
        .route("/previous/{current}", get(get_previous))
        .route("/available", get(get_available))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundBody {
    error: String,
    available_exercises: Vec<ExerciseNumber>,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<NotFoundBody>)>;

/// GET /api/today - exercise of the day.
async fn get_today(State(state): State<AppState>) -> Json<Piece> {
    let date = local_date();
    let number = selector::for_date(&state.catalog, date);
    Json(Piece::describe(&state.catalog, number, date))
}

/// GET /api/piece/{number} - a specific exercise, 404 if not in the catalog.
async fn get_piece(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> ApiResult<Piece> {
    match parse_number(&number).filter(|&n| selector::is_available(&state.catalog, n)) {
        Some(n) => Ok(Json(describe(&state.catalog, n))),
        None => {
            debug!(number = %number, "requested exercise not in catalog");
            Err(not_found(&state.catalog, &number))
        }
    }
}

/// GET /api/random - uniformly drawn exercise.
async fn get_random(State(state): State<AppState>) -> Json<Piece> {
    let number = selector::random(&state.catalog);
    Json(describe(&state.catalog, number))
}

/// GET /api/next/{current} - exercise after `current`, wrapping around.
async fn get_next(State(state): State<AppState>, Path(current): Path<String>) -> Json<Piece> {
    let number = parse_number(&current)
        .map(|n| selector::next(&state.catalog, n))
        .unwrap_or_else(|| selector::first(&state.catalog));
    Json(describe(&state.catalog, number))
}

/// GET /api/previous/{current} - exercise before `current`, wrapping around.
async fn get_previous(
    State(state): State<AppState>,
    Path(current): Path<String>,
) -> Json<Piece> {
    let number = parse_number(&current)
        .map(|n| selector::previous(&state.catalog, n))
        .unwrap_or_else(|| selector::first(&state.catalog));
    Json(describe(&state.catalog, number))
}

#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    exercises: Vec<ExerciseNumber>,
    count: usize,
    range: String,
}

/// GET /api/available - the full catalog.
async fn get_available(State(state): State<AppState>) -> Json<AvailableResponse> {
    let range = match state.catalog.range() {
        Some((min, max)) => format!("{min} - {max}"),
        None => "None".to_string(),
    };
    Json(AvailableResponse {
        exercises: state.catalog.as_slice().to_vec(),
        count: state.catalog.len(),
        range,
    })
}

fn local_date() -> NaiveDate {
    Local::now().date_naive()
}

fn describe(catalog: &Catalog, number: ExerciseNumber) -> Piece {
    Piece::describe(catalog, number, local_date())
}

/// Lenient path parsing: anything that is not a `u32` maps to `None`.
fn parse_number(raw: &str) -> Option<ExerciseNumber> {
    raw.trim().parse().ok()
}

fn not_found(catalog: &Catalog, requested: &str) -> (StatusCode, Json<NotFoundBody>) {
    let body = NotFoundBody {
        error: format!("Exercise {requested} not found"),
        available_exercises: catalog
            .as_slice()
            .iter()
            .take(NOT_FOUND_SAMPLE)
            .copied()
            .collect(),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(numbers: impl IntoIterator<Item = ExerciseNumber>) -> AppState {
        AppState::new(Catalog::new(numbers))
    }

    #[tokio::test]
    async fn piece_returns_metadata_for_member() {
        let Json(piece) = get_piece(State(state([1, 2, 5, 8])), Path("5".to_string()))
            .await
            .expect("piece 5");
        assert_eq!(piece.piece_number, 5);
        assert_eq!(piece.image_url, "/images/exercise_5.png");
        assert!(piece.has_scoring);
    }

    #[tokio::test]
    async fn piece_missing_is_404_with_truncated_sample() {
        let (status, Json(body)) = get_piece(State(state(1..=30)), Path("999".to_string()))
            .await
            .expect_err("999 missing");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.available_exercises.len(), NOT_FOUND_SAMPLE);
        assert_eq!(body.available_exercises, (1..=20).collect::<Vec<_>>());
        assert_eq!(body.error, "Exercise 999 not found");
    }

    #[tokio::test]
    async fn piece_malformed_is_404() {
        let (status, Json(body)) = get_piece(State(state([1, 2])), Path("abc".to_string()))
            .await
            .expect_err("abc missing");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.available_exercises, vec![1, 2]);
    }

    #[tokio::test]
    async fn next_and_previous_wrap() {
        let app = state([1, 2, 5, 8]);
        let Json(next) = get_next(State(app.clone()), Path("8".to_string())).await;
        assert_eq!(next.piece_number, 1);
        let Json(prev) = get_previous(State(app), Path("1".to_string())).await;
        assert_eq!(prev.piece_number, 8);
    }

    #[tokio::test]
    async fn navigation_from_unknown_or_malformed_restarts_at_first() {
        let app = state([2, 5, 8]);
        let Json(next) = get_next(State(app.clone()), Path("3".to_string())).await;
        assert_eq!(next.piece_number, 2);
        let Json(prev) = get_previous(State(app), Path("xyz".to_string())).await;
        assert_eq!(prev.piece_number, 2);
    }

    #[tokio::test]
    async fn empty_catalog_serves_fallback() {
        let app = AppState::new(Catalog::default());
        let Json(today) = get_today(State(app.clone())).await;
        assert_eq!(today.piece_number, 1);
        assert!(!today.has_scoring);
        let Json(random) = get_random(State(app.clone())).await;
        assert_eq!(random.piece_number, 1);
        let Json(next) = get_next(State(app), Path("7".to_string())).await;
        assert_eq!(next.piece_number, 1);
    }

    #[tokio::test]
    async fn today_and_random_are_members() {
        let app = state([3, 6, 9]);
        let Json(today) = get_today(State(app.clone())).await;
        assert!(app.catalog.contains(today.piece_number));
        let Json(random) = get_random(State(app.clone())).await;
        assert!(app.catalog.contains(random.piece_number));
    }

    #[tokio::test]
    async fn available_reports_sorted_range() {
        let Json(body) = get_available(State(state([3, 1, 2]))).await;
        let value = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"exercises": [1, 2, 3], "count": 3, "range": "1 - 3"})
        );
    }

    #[tokio::test]
    async fn available_empty_range_is_none() {
        let Json(body) = get_available(State(AppState::new(Catalog::default()))).await;
        assert_eq!(body.range, "None");
        assert_eq!(body.count, 0);
    }
}
