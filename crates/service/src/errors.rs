use axum::extract::rejection::JsonRejection;
use thiserror::Error;

/// Reasons a submission payload could not be decoded into a person.
///
/// All variants surface to clients as the same failure envelope; the split only
/// exists so logs can tell the causes apart.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    Data(String),
    #[error("{0}")]
    ContentType(String),
    #[error("{0}")]
    Body(String),
}

impl ServiceError {
    /// Short label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Syntax(_) => "syntax",
            ServiceError::Data(_) => "data",
            ServiceError::ContentType(_) => "content_type",
            ServiceError::Body(_) => "body",
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        match rejection {
            JsonRejection::JsonSyntaxError(_) => ServiceError::Syntax(text),
            JsonRejection::JsonDataError(_) => ServiceError::Data(text),
            JsonRejection::MissingJsonContentType(_) => ServiceError::ContentType(text),
            _ => ServiceError::Body(text),
        }
    }
}
