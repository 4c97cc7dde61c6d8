//! Prompt construction for the chat-completion request.

/// System instruction framing the assistant as a structured-data generator.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates structured JSON data.";

/// Build the user instruction for a batch of `count` attractions.
///
/// The instruction pins the desired count, the exact JSON shape of each
/// element, and asks for variety without duplicates. The JSON example
/// doubles as the schema, which keeps the model from inventing fields.
///
/// # Arguments
/// * `count` - Number of attractions to request
#[must_use]
pub fn build_user_prompt(count: usize) -> String {
    format!(
        r#"Generate a list of {count} unique kid-friendly attractions in the Austin, TX area.
Base this on content from Instagram handles @austinwithkids and @austinfunforkids, focusing on parks, indoor play spots, museums, pools, trails, and events.

For each attraction, provide exactly this JSON structure (no extra text):
[
    {{
        "name": "Attraction Name",
        "address": "Full address or location",
        "description": "Brief description why it's great for kids"
    }},
    // ... more entries
]

Ensure variety, no duplicates, and family-oriented focus. Use real or plausible Austin-area details."#
    )
}
