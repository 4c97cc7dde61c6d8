//! Response normalization, from raw completion text to attraction records.
//!
//! Models answer in one of two shapes: a bare JSON list, or an object
//! wrapping the list under an `"attractions"` key (the `json_object`
//! response format nudges some models toward the latter). The shape is
//! resolved exactly once here; everything downstream consumes the inner
//! sequence.

use serde_json::Value;
use tracing::warn;

use crate::config::RESPONSE_PREVIEW_CHARS;
use crate::error::{GeneratorError, Result};
use crate::types::{Attraction, GenerationOutcome};

/// Object key the list is wrapped under in the keyed shape.
pub const ATTRACTIONS_KEY: &str = "attractions";

/// The two response shapes the normalizer recognizes.
///
/// Elements stay untyped here; [`normalize_response`] truncates the
/// sequence first and type-checks only the elements it keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    /// The payload was a bare JSON list.
    List(Vec<Value>),
    /// The payload was an object carrying the `"attractions"` key. An
    /// object without the key yields an empty sequence.
    Keyed(Vec<Value>),
}

impl ResponsePayload {
    /// The candidate element sequence, regardless of shape.
    #[must_use]
    pub fn into_elements(self) -> Vec<Value> {
        match self {
            Self::List(elements) | Self::Keyed(elements) => elements,
        }
    }
}

/// Truncate raw response text for error diagnostics.
fn preview(raw: &str) -> String {
    raw.chars().take(RESPONSE_PREVIEW_CHARS).collect()
}

/// Parse raw completion text into one of the two recognized shapes.
///
/// # Errors
/// * `MalformedResponse` when the text is not valid JSON.
/// * `UnexpectedShape` when the top level is neither a list nor an
///   object, or the `"attractions"` value is not a list.
pub fn parse_response(raw: &str) -> Result<ResponsePayload> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| GeneratorError::MalformedResponse {
            message: e.to_string(),
            preview: preview(raw),
        })?;

    match value {
        Value::Array(elements) => Ok(ResponsePayload::List(elements)),
        Value::Object(mut map) => {
            // An object without the key counts as zero attractions rather
            // than a failure; under-delivery handling takes over from there.
            let inner = map
                .remove(ATTRACTIONS_KEY)
                .unwrap_or_else(|| Value::Array(Vec::new()));
            match inner {
                Value::Array(elements) => Ok(ResponsePayload::Keyed(elements)),
                _ => Err(GeneratorError::UnexpectedShape {
                    preview: preview(raw),
                }),
            }
        }
        _ => Err(GeneratorError::UnexpectedShape {
            preview: preview(raw),
        }),
    }
}

/// Deserialize candidate elements into attraction records.
///
/// Every element must carry `name`, `address`, and `description` as
/// strings; extra fields are ignored.
fn parse_attractions(elements: Vec<Value>, raw: &str) -> Result<Vec<Attraction>> {
    serde_json::from_value(Value::Array(elements)).map_err(|e| GeneratorError::MalformedResponse {
        message: e.to_string(),
        preview: preview(raw),
    })
}

/// Normalize raw completion text to at most `requested` attractions.
///
/// Over-delivery is cut back to the first `requested` elements; surplus
/// elements are dropped without being type-checked. Under-delivery is
/// tolerated: a warning is logged and the reduced set is returned, with
/// the received count preserved in the outcome.
///
/// # Errors
/// Propagates [`parse_response`] errors, plus `MalformedResponse` when
/// a kept element does not carry the three expected string fields.
pub fn normalize_response(raw: &str, requested: usize) -> Result<GenerationOutcome> {
    let mut elements = parse_response(raw)?.into_elements();
    let received = elements.len();

    if received < requested {
        warn!(
            received,
            requested, "model under-delivered, continuing with the reduced set"
        );
    }

    elements.truncate(requested);
    let attractions = parse_attractions(elements, raw)?;

    Ok(GenerationOutcome {
        attractions,
        requested,
        received,
    })
}
