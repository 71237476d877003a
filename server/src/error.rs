use crate::api::ErrorResponse;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cookbook_core::{SearchError, ValidationError};
use diesel::r2d2::PoolError;
use thiserror::Error;

/// Failure of a single request, rendered as `{"error": "..."}`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Recipe not found")]
    NotFound,

    #[error("Recipe '{0}' already exists")]
    ConstraintViolation(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Database connection failed")]
    Pool(#[from] PoolError),

    #[error("Database query failed")]
    Query(#[from] diesel::result::Error),

    #[error("Search failed")]
    Search(#[from] SearchError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateDishName(name) => AppError::ConstraintViolation(name),
            StoreError::Query(e) => AppError::Query(e),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Pool(_) | AppError::Query(_) | AppError::Search(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Pool(e) => tracing::error!("Failed to get DB connection: {}", e),
            AppError::Query(e) => tracing::error!("Database query failed: {}", e),
            AppError::Search(e) => tracing::error!("Search failed: {}", e),
            _ => tracing::debug!(status = %status, "{}", self),
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::ConstraintViolation("Хинкали".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(ValidationError::EmptyField("dish_name")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(diesel::result::Error::NotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_maps_to_constraint_violation() {
        let err = AppError::from(StoreError::DuplicateDishName("Лобио".into()));
        assert!(matches!(err, AppError::ConstraintViolation(ref name) if name == "Лобио"));
        assert_eq!(err.to_string(), "Recipe 'Лобио' already exists");
    }
}
