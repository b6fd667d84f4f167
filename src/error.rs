use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ErrorResponse;

/// The only failure the sorting service knows about: the caller sent a
/// measurement that is negative, missing or not a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("{0}")]
    InvalidInput(String),
}

impl SortError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SortError::InvalidInput(message.into())
    }

    pub fn detail(&self) -> &str {
        match self {
            SortError::InvalidInput(message) => message,
        }
    }
}

impl From<ValidationErrors> for SortError {
    fn from(errors: ValidationErrors) -> Self {
        // field_errors() is a HashMap; order by field name so the detail is stable
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let detail = fields
            .iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs.iter().map(|e| e.to_string()).collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        SortError::InvalidInput(detail)
    }
}

impl From<error::JsonPayloadError> for SortError {
    fn from(err: error::JsonPayloadError) -> Self {
        SortError::InvalidInput(format!("Invalid JSON: {}", err))
    }
}

impl From<error::QueryPayloadError> for SortError {
    fn from(err: error::QueryPayloadError) -> Self {
        SortError::InvalidInput(format!("Invalid query: {}", err))
    }
}

impl error::ResponseError for SortError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail().to_string(),
        })
    }
}

pub type Result<T> = std::result::Result<T, SortError>;

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    SortError::from(err).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    SortError::from(err).into()
}
