use crate::{core::board::BoardError, repo::error::RepoError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub const GENERIC_ERROR_MESSAGE: &str = "Unexpected error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Latest game not found")]
    LatestGameNotFound,

    #[error("Specified turn not found: {0}")]
    TurnNotFound(i32),

    #[error("Invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] RepoError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        // no 400/404 split: every failure is a 500
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Unexpected error occurred");
        let body = Json(json!({
            "message": GENERIC_ERROR_MESSAGE,
        }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn every_error_is_a_generic_500() {
        let errors = vec![
            AppError::LatestGameNotFound,
            AppError::TurnNotFound(3),
            AppError::Board(BoardError::IncompleteSnapshot(63)),
            AppError::Validation("bad body".to_string()),
            AppError::Database(RepoError::TechnicalError(sqlx::Error::RowNotFound)),
            AppError::Internal("boom".to_string()),
        ];
        for err in errors {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(resp).await,
                json!({ "message": GENERIC_ERROR_MESSAGE })
            );
        }
    }

    #[test]
    fn messages_keep_the_cause_for_logs() {
        assert_eq!(
            AppError::TurnNotFound(4).to_string(),
            "Specified turn not found: 4"
        );
        let err: AppError = BoardError::OutOfRange { x: 9, y: 0 }.into();
        assert!(err.to_string().contains("(9, 0)"));
    }
}
