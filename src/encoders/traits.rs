//! Encoder trait and supporting types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during encoder operations.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// Support for this encoder was not compiled into the build.
    #[error("the `{0}` encoder is not available; rebuild with the `{0}` cargo feature enabled")]
    FeatureDisabled(&'static str),

    /// No API key could be resolved, or the vendor client could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The encoder was invoked before its client was successfully constructed.
    #[error("{0} client is not initialized")]
    NotInitialized(&'static str),

    /// Every attempt against the remote service failed.
    #[error("{provider} API call failed: {message}")]
    ApiCall {
        /// Provider the call was made against.
        provider: &'static str,
        /// Message of the last underlying error.
        message: String,
    },
}

/// Result type for encoder operations.
pub type EncoderResult<T> = Result<T, EncoderError>;

/// Embedding payload decoded from a vendor response.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingResponse {
    /// One embedding per input document, in input order.
    pub embeddings: Vec<Vec<f32>>,
}

/// Minimal surface of a remote embeddings API.
///
/// Implementations own the wire format; encoders only see the decoded
/// payload. Errors are opaque here: the retry loop treats every failure
/// the same way, and only the final one is surfaced to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingApi: Send + Sync {
    /// Calls the remote embeddings endpoint with a batch of documents.
    async fn embed(&self, documents: &[String]) -> anyhow::Result<EmbeddingResponse>;
}

/// Trait for embedding encoders (VoyageAI, OpenAI, etc.).
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Returns the encoder's name (e.g., "voyageai", "openai").
    fn name(&self) -> &str;

    /// Returns the model identifier being used.
    fn model(&self) -> &str;

    /// Embeds a batch of documents, returning one vector per document in
    /// input order. Either the full vector list is returned or the call
    /// fails as a whole; partial results are never produced.
    async fn encode(&self, documents: &[String]) -> EncoderResult<Vec<Vec<f32>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EncoderError::FeatureDisabled("voyage");
        assert!(err.to_string().contains("`voyage` cargo feature"));

        let err = EncoderError::Configuration("no API key".to_string());
        assert_eq!(err.to_string(), "configuration error: no API key");

        let err = EncoderError::NotInitialized("VoyageAI");
        assert_eq!(err.to_string(), "VoyageAI client is not initialized");

        let err = EncoderError::ApiCall {
            provider: "VoyageAI",
            message: "connection reset".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "VoyageAI API call failed: connection reset"
        );
    }

    #[test]
    fn test_embedding_response_equality() {
        let a = EmbeddingResponse {
            embeddings: vec![vec![0.1, 0.2]],
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
