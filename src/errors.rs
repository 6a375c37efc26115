use crate::date_key::DayKey;
use axum::http::StatusCode;
use thiserror::Error;

/// Failures of the planner core and its state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("cannot complete a record dated {0}, it is in the future")]
    FutureDate(DayKey),

    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("task text cannot be empty")]
    EmptyTaskText,
}

/// Reasons the stored planner document could not be loaded.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: "sign in as admin to make changes".to_string(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        let status = match err {
            PlannerError::MalformedDate(_) | PlannerError::EmptyTaskText => StatusCode::BAD_REQUEST,
            PlannerError::TaskNotFound(_) => StatusCode::NOT_FOUND,
            PlannerError::FutureDate(_) => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
