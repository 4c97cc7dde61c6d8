//! Austin Attractions - Generate a kid-friendly attractions dataset via xAI.
//!
//! This crate asks the xAI chat-completions API (OpenAI-compatible) for a
//! batch of kid-friendly attractions in the Austin, TX area, normalizes the
//! JSON payload, prints a Markdown table, and writes a CSV artifact.
//!
//! # Example
//!
//! ```
//! use austin_attractions::config;
//!
//! // Validate the requested batch size
//! assert!(config::validate_count(100).is_ok());
//! assert!(config::validate_count(0).is_err());
//! ```
//!
//! # Architecture
//!
//! The generator is organized into several modules:
//!
//! - [`config`]: Configuration constants, environment loading, validation
//! - [`types`]: Core data types (Attraction, GenerationOutcome)
//! - [`error`]: Error types and Result alias
//! - [`prompt`]: Prompt construction
//! - [`client`]: Blocking chat-completion client
//! - [`response`]: Response parsing and normalization
//! - [`generator`]: Main generation service
//! - [`output`]: Markdown table and CSV artifact
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod prompt;
pub mod response;
pub mod types;

// Re-export main functions
pub use generator::generate_attractions;

// Re-export commonly used items
pub use client::{ChatCompletion, ChatRequest, ChatResponse, Message, Role, XaiClient};
pub use config::{validate_count, GeneratorConfig};
pub use error::{GeneratorError, Result};
pub use response::{normalize_response, parse_response, ResponsePayload};
pub use types::{Attraction, GenerationOutcome};
