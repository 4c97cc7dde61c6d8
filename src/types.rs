//! Core data types for generated attractions.

use serde::{Deserialize, Serialize};

/// A single kid-friendly attraction in the Austin, TX area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attraction {
    /// Display name of the attraction.
    pub name: String,
    /// Full address or a looser location description.
    pub address: String,
    /// Short description of why the spot works for kids.
    pub description: String,
}

impl Attraction {
    /// Create a new attraction.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            description: description.into(),
        }
    }
}

/// Result of one generation run.
///
/// Carries the already truncated attraction sequence together with the
/// requested and received counts, so callers can tell a full batch from an
/// under-delivered one without inspecting log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// Attractions after truncation to the requested count.
    pub attractions: Vec<Attraction>,
    /// Number of attractions asked for.
    pub requested: usize,
    /// Number of attractions the model actually returned, before truncation.
    pub received: usize,
}

impl GenerationOutcome {
    /// Whether the model returned fewer attractions than requested.
    #[must_use]
    pub fn is_underdelivered(&self) -> bool {
        self.received < self.requested
    }

    /// How many attractions short of the request the model fell.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attraction_new() {
        let attraction = Attraction::new(
            "Zilker Park",
            "2207 Lou Neff Rd, Austin, TX",
            "Huge green space with a playground",
        );
        assert_eq!(attraction.name, "Zilker Park");
        assert_eq!(attraction.address, "2207 Lou Neff Rd, Austin, TX");
        assert_eq!(attraction.description, "Huge green space with a playground");
    }

    #[test]
    fn test_attraction_deserialize_ignores_extra_fields() {
        let json = r#"{
            "name": "Thinkery",
            "address": "1830 Simond Ave, Austin, TX",
            "description": "Hands-on children's museum",
            "rating": 4.8
        }"#;
        let attraction: Attraction = serde_json::from_str(json).unwrap();
        assert_eq!(attraction.name, "Thinkery");
    }

    #[test]
    fn test_attraction_deserialize_rejects_missing_field() {
        let json = r#"{"name": "Thinkery", "address": "1830 Simond Ave"}"#;
        let result: Result<Attraction, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_full_batch() {
        let outcome = GenerationOutcome {
            attractions: vec![Attraction::new("a", "b", "c")],
            requested: 1,
            received: 1,
        };
        assert!(!outcome.is_underdelivered());
        assert_eq!(outcome.shortfall(), 0);
    }

    #[test]
    fn test_outcome_underdelivered() {
        let outcome = GenerationOutcome {
            attractions: vec![Attraction::new("a", "b", "c")],
            requested: 10,
            received: 1,
        };
        assert!(outcome.is_underdelivered());
        assert_eq!(outcome.shortfall(), 9);
    }

    #[test]
    fn test_outcome_overdelivery_has_no_shortfall() {
        let outcome = GenerationOutcome {
            attractions: Vec::new(),
            requested: 5,
            received: 8,
        };
        assert!(!outcome.is_underdelivered());
        assert_eq!(outcome.shortfall(), 0);
    }
}
