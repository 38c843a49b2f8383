//! Embedding encoder implementations.
//!
//! This module provides a unified interface for turning batches of text
//! documents into embedding vectors via remote APIs.
//!
//! # Supported Encoders
//!
//! - **VoyageAI**: the `/embeddings` endpoint at api.voyageai.com
//! - **OpenAI**: the `/embeddings` endpoint at api.openai.com, or any
//!   compatible gateway
//!
//! Each encoder resolves its API key at construction (explicit argument
//! first, then the provider's environment variable), holds a lazily-built
//! client handle, and retries failed calls against a fixed budget before
//! surfacing a single uniform [`EncoderError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use semroute::encoders::{Encoder, VoyageEncoder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let encoder = VoyageEncoder::new(Some("pa-...".to_string()))?;
//!
//! let documents = vec!["note the projected deadline".to_string()];
//! let embeddings = encoder.encode(&documents).await?;
//! assert_eq!(embeddings.len(), documents.len());
//! # Ok(())
//! # }
//! ```

mod openai;
mod retry;
mod traits;
mod voyage;

pub use openai::OpenAiEncoder;
pub use traits::{EmbeddingApi, EmbeddingResponse, Encoder, EncoderError, EncoderResult};
pub use voyage::VoyageEncoder;

#[cfg(feature = "openai")]
pub use openai::OpenAiHttpClient;
#[cfg(feature = "voyage")]
pub use voyage::VoyageHttpClient;
