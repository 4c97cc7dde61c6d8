//! Generation orchestration: prompt, single completion call, normalization.

use tracing::info;

use crate::client::{ChatCompletion, ChatRequest, Message};
use crate::config::{validate_count, MAX_COMPLETION_TOKENS, SAMPLING_TEMPERATURE};
use crate::error::Result;
use crate::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::response::normalize_response;
use crate::types::GenerationOutcome;

/// Generate at most `count` attractions with one chat-completion call.
///
/// The count is validated before the client is touched, so an invalid
/// request never reaches the network. Transport, API, and parse failures
/// are final; under-delivery is not.
///
/// # Arguments
/// * `client` - Chat-completion backend
/// * `count` - Number of attractions to request
///
/// # Errors
/// Returns an error for a zero count, a failed or rejected API call, or
/// an unparseable response payload.
pub fn generate_attractions(
    client: &impl ChatCompletion,
    count: usize,
) -> Result<GenerationOutcome> {
    validate_count(count)?;

    info!(count, "requesting attraction batch");

    let request = ChatRequest {
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_user_prompt(count)),
        ],
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: SAMPLING_TEMPERATURE,
    };

    let response = client.complete(&request)?;

    normalize_response(&response.content, count)
}
