use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::db::{ReviewDb, StoredReview};
use super::error::ApiError;

/// Record-creation payload. Serde defaults mean a missing field arrives as
/// its empty value and is rejected by `validate` with the same message as an
/// explicitly empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewReview {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub movie_title: String,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// All fields present and non-empty, rating an integer in 1–5.
pub fn validate(payload: &NewReview) -> Result<u8, ApiError> {
    if payload.username.is_empty()
        || payload.movie_title.is_empty()
        || payload.review_text.is_empty()
    {
        return Err(ApiError::MissingFields);
    }
    match payload.rating {
        Some(r) if (1..=5).contains(&r) => Ok(r as u8),
        _ => Err(ApiError::InvalidRating),
    }
}

pub async fn submit_review(
    State(db): State<Arc<ReviewDb>>,
    Json(payload): Json<NewReview>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let rating = validate(&payload)?;
    db.insert(
        &payload.username,
        &payload.movie_title,
        &payload.review_text,
        rating,
    )?;
    Ok((
        StatusCode::CREATED,
        "Your review has been submitted successfully!",
    ))
}

pub async fn list_reviews(
    State(db): State<Arc<ReviewDb>>,
) -> Result<Json<Vec<StoredReview>>, ApiError> {
    Ok(Json(db.list()?))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    fn payload(username: &str, title: &str, text: &str, rating: Option<i64>) -> NewReview {
        NewReview {
            username: username.to_string(),
            movie_title: title.to_string(),
            review_text: text.to_string(),
            rating,
        }
    }

    // ---- validate ----

    #[test]
    fn complete_payload_validates() {
        assert_eq!(validate(&payload("sam", "Heat", "tense", Some(4))).unwrap(), 4);
    }

    #[test]
    fn empty_fields_are_missing_fields() {
        for p in [
            payload("", "Heat", "tense", Some(4)),
            payload("sam", "", "tense", Some(4)),
            payload("sam", "Heat", "", Some(4)),
        ] {
            assert!(matches!(validate(&p), Err(ApiError::MissingFields)));
        }
    }

    #[test]
    fn rating_bounds_enforced() {
        assert!(matches!(
            validate(&payload("sam", "Heat", "tense", Some(0))),
            Err(ApiError::InvalidRating)
        ));
        assert!(matches!(
            validate(&payload("sam", "Heat", "tense", Some(6))),
            Err(ApiError::InvalidRating)
        ));
        assert!(matches!(
            validate(&payload("sam", "Heat", "tense", None)),
            Err(ApiError::InvalidRating)
        ));
        assert_eq!(validate(&payload("sam", "Heat", "tense", Some(1))).unwrap(), 1);
        assert_eq!(validate(&payload("sam", "Heat", "tense", Some(5))).unwrap(), 5);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let p: NewReview = serde_json::from_str(r#"{"username": "sam"}"#).unwrap();
        assert_eq!(p.username, "sam");
        assert!(p.movie_title.is_empty());
        assert!(p.rating.is_none());
        assert!(matches!(validate(&p), Err(ApiError::MissingFields)));
    }

    // ---- handlers ----

    #[tokio::test]
    async fn submit_inserts_and_reports_success() {
        let db = Arc::new(ReviewDb::open_in_memory().unwrap());
        let response = submit_review(
            State(db.clone()),
            Json(payload("sam", "Heat", "tense", Some(4))),
        )
        .await
        .unwrap()
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(db.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejected_submit_leaves_table_untouched() {
        let db = Arc::new(ReviewDb::open_in_memory().unwrap());
        let result = submit_review(
            State(db.clone()),
            Json(payload("sam", "Heat", "tense", Some(9))),
        )
        .await;
        assert!(result.is_err());
        assert!(db.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_returns_rows() {
        let db = Arc::new(ReviewDb::open_in_memory().unwrap());
        db.insert("sam", "Heat", "tense", 4).unwrap();
        let Json(rows) = list_reviews(State(db)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].movie_title, "Heat");
    }
}
