//! JSON extractor that reads any body as a payload

use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;
use tracing::debug;

/// Parses the body as JSON regardless of the `Content-Type` header.
///
/// Unreadable bodies, empty bodies and invalid JSON all come through as
/// [`Value::Null`] so the handler sees an empty payload instead of a rejection.
/// The one exception is a body over the request body limit (axum's
/// `DefaultBodyLimit`, 2 MB unless changed), which is rejected with 413.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientJson(pub Value);

#[async_trait]
impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                debug!(error = %rejection, "request body over the size limit");
                return Err(rejection);
            }
            Err(rejection) => {
                debug!(error = %rejection, "unreadable request body, using empty payload");
                return Ok(LenientJson(Value::Null));
            }
        };

        if bytes.is_empty() {
            return Ok(LenientJson(Value::Null));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(LenientJson(value)),
            Err(err) => {
                debug!(error = %err, "malformed JSON body, using empty payload");
                Ok(LenientJson(Value::Null))
            }
        }
    }
}
