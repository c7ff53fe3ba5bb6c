use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Service-wide error taxonomy. Every variant maps to a distinct HTTP status
/// so callers can branch on the kind without parsing messages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: u64 },

    #[error("{0}")]
    Validation(String),

    #[error("salary for employee {employee_id} for month {month}/{year} already exists")]
    DuplicateGeneration {
        employee_id: u64,
        month: u32,
        year: i32,
    },

    #[error("failed to send SMS: {0}")]
    ExternalService(anyhow::Error),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Error::NotFound { entity, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::DuplicateGeneration { .. } => StatusCode::CONFLICT,
            Error::ExternalService(_) => StatusCode::BAD_GATEWAY,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the logs, not in the response body.
        let message = match self {
            Error::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "message": message }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_codes_are_distinct_per_kind() {
        assert_eq!(
            Error::not_found("Employee", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::validation("month must be between 1 and 12").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::DuplicateGeneration {
                employee_id: 1,
                month: 2,
                year: 2024
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::ExternalService(anyhow::anyhow!("gateway down")).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            Error::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn duplicate_generation_names_the_period() {
        let err = Error::DuplicateGeneration {
            employee_id: 42,
            month: 3,
            year: 2024,
        };
        assert_eq!(
            err.to_string(),
            "salary for employee 42 for month 3/2024 already exists"
        );
    }
}
