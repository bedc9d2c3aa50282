use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use database::{
    consts::consts::{InvalidPersonId, PersonId},
    persistence::StoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    ValidationFailed(String),

    #[error("Person not found: {0}")]
    NotFound(PersonId),

    #[error("Storage is currently unavailable")]
    PersistenceUnavailable,

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PersistenceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<InvalidPersonId> for ApiError {
    fn from(err: InvalidPersonId) -> Self {
        ApiError::InvalidId(err.0)
    }
}

// Storage errors are logged here and never sent to the caller
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        log::error!("Storage error: {}", err);

        match err {
            StoreError::Unavailable(_) => ApiError::PersistenceUnavailable,
            StoreError::MissingConnectionString | StoreError::OperationFailed(_) => {
                ApiError::Internal
            }
        }
    }
}
