//! Contact form submission: field extraction, validation and the wire response

pub mod policy;
pub mod submission;

pub use policy::{render_acknowledgment, ContactPolicy};
pub use submission::{ContactField, Submission};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{message}")]
    MissingFields {
        missing: Vec<ContactField>,
        message: String,
    },
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::MissingFields { message, .. } => (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResponse::rejected(message)),
            )
                .into_response(),
        }
    }
}

/// Body of every `/send-email` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

impl SubmissionResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
