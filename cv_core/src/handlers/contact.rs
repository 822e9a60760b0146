//! Contact form endpoint

use crate::{
    contact::{ContactError, Submission, SubmissionResponse},
    extractors::LenientJson,
    AppState,
};
use axum::{extract::State, Json};
use tracing::info;

/// Validates a contact submission and acknowledges it.
///
/// Nothing is delivered: an accepted submission only produces the policy's
/// acknowledgment text. Rejections become a 400 with the policy's failure
/// message through [`ContactError`]'s response conversion.
pub async fn handle_send_email(
    State(state): State<AppState>,
    LenientJson(payload): LenientJson,
) -> Result<Json<SubmissionResponse>, ContactError> {
    let submission = Submission::from_payload(&payload);
    let acknowledgment = state.contact.evaluate(&submission)?;

    info!(
        message_len = submission.message.len(),
        "contact submission acknowledged, delivery simulated"
    );

    Ok(Json(SubmissionResponse::accepted(acknowledgment)))
}
