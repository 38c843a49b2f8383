//! Encoder configuration.
//!
//! This module provides the settings types consumed by encoder
//! constructors. Keys are resolved here, once, so the rest of the crate is
//! free of environment lookups.

mod settings;

pub use settings::{
    OpenAiConfig, RetryConfig, VoyageConfig, OPENAI_API_KEY_ENV, VOYAGE_API_KEY_ENV,
};
