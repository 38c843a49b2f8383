//! OpenAI embedding encoder.
//!
//! Same adapter contract as the VoyageAI encoder, pointed at the OpenAI
//! `/embeddings` endpoint. Also works against OpenAI-compatible gateways
//! via [`OpenAiConfig::with_base_url`].

use std::sync::Arc;

use async_trait::async_trait;

use super::retry::with_retries;
use super::traits::{EmbeddingApi, Encoder, EncoderError, EncoderResult};
use crate::config::{OpenAiConfig, OPENAI_API_KEY_ENV};

const PROVIDER: &str = "OpenAI";

/// Encoder backed by the OpenAI embeddings API.
pub struct OpenAiEncoder {
    config: OpenAiConfig,
    client: Option<Arc<dyn EmbeddingApi>>,
}

impl std::fmt::Debug for OpenAiEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEncoder")
            .field("config", &self.config)
            .field("client", &self.client.as_ref().map(|_| "<dyn EmbeddingApi>"))
            .finish()
    }
}

impl OpenAiEncoder {
    /// Creates an encoder with default configuration, resolving the API key
    /// from the explicit argument or the `OPENAI_API_KEY` environment
    /// variable. The explicit argument wins.
    pub fn new(api_key: Option<String>) -> EncoderResult<Self> {
        Self::with_config(OpenAiConfig::from_env(api_key))
    }

    /// Creates an encoder from a fully-populated config. No environment
    /// lookup is performed.
    #[allow(unused_variables)]
    pub fn with_config(config: OpenAiConfig) -> EncoderResult<Self> {
        #[cfg(not(feature = "openai"))]
        {
            Err(EncoderError::FeatureDisabled("openai"))
        }
        #[cfg(feature = "openai")]
        {
            let api_key = config.api_key.as_deref().ok_or_else(|| {
                EncoderError::Configuration(format!(
                    "no {PROVIDER} API key provided; pass one explicitly or set {OPENAI_API_KEY_ENV}"
                ))
            })?;

            let client = OpenAiHttpClient::new(api_key, &config.base_url, &config.model)
                .map_err(|e| {
                    EncoderError::Configuration(format!(
                        "{PROVIDER} client failed to initialize: {e}"
                    ))
                })?;

            Ok(Self {
                config,
                client: Some(Arc::new(client)),
            })
        }
    }

    /// Creates an encoder backed by the given client, bypassing HTTP client
    /// construction.
    pub fn with_client(config: OpenAiConfig, client: Arc<dyn EmbeddingApi>) -> Self {
        Self {
            config,
            client: Some(client),
        }
    }
}

#[async_trait]
impl Encoder for OpenAiEncoder {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn encode(&self, documents: &[String]) -> EncoderResult<Vec<Vec<f32>>> {
        let client = self
            .client
            .as_ref()
            .ok_or(EncoderError::NotInitialized(PROVIDER))?;

        let response = with_retries(&self.config.retry, || client.embed(documents))
            .await
            .map_err(|e| EncoderError::ApiCall {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        tracing::debug!(documents = documents.len(), "openai embedding succeeded");
        Ok(response.embeddings)
    }
}

#[cfg(feature = "openai")]
mod http {
    use async_trait::async_trait;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
    use serde::{Deserialize, Serialize};

    use super::super::traits::{EmbeddingApi, EmbeddingResponse};

    #[derive(Debug, Serialize)]
    pub(super) struct OpenAiRequest<'a> {
        pub input: &'a [String],
        pub model: &'a str,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct OpenAiResponse {
        pub data: Vec<OpenAiEmbedding>,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct OpenAiEmbedding {
        pub embedding: Vec<f32>,
    }

    /// HTTP client for the OpenAI embeddings API.
    pub struct OpenAiHttpClient {
        client: reqwest::Client,
        base_url: String,
        model: String,
    }

    impl OpenAiHttpClient {
        pub fn new(api_key: &str, base_url: &str, model: &str) -> anyhow::Result<Self> {
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

            let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);

            let client = reqwest::Client::builder().default_headers(headers).build()?;

            Ok(Self {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
                model: model.to_string(),
            })
        }
    }

    #[async_trait]
    impl EmbeddingApi for OpenAiHttpClient {
        async fn embed(&self, documents: &[String]) -> anyhow::Result<EmbeddingResponse> {
            let response = self
                .client
                .post(format!("{}/embeddings", self.base_url))
                .json(&OpenAiRequest {
                    input: documents,
                    model: &self.model,
                })
                .send()
                .await?
                .error_for_status()?
                .json::<OpenAiResponse>()
                .await?;

            Ok(EmbeddingResponse {
                embeddings: response.data.into_iter().map(|d| d.embedding).collect(),
            })
        }
    }
}

#[cfg(feature = "openai")]
pub use http::OpenAiHttpClient;

#[cfg(test)]
mod tests {
    use super::super::traits::MockEmbeddingApi;
    use super::*;
    use crate::encoders::EmbeddingResponse;

    #[test]
    fn missing_api_key_fails() {
        let err = OpenAiEncoder::with_config(OpenAiConfig::default()).unwrap_err();
        match err {
            EncoderError::Configuration(message) => {
                assert!(message.contains(OPENAI_API_KEY_ENV), "{message}");
            }
            #[cfg(not(feature = "openai"))]
            EncoderError::FeatureDisabled(_) => {}
            other => panic!("expected Configuration error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn uninitialized_client_fails_fast() {
        let mut encoder =
            OpenAiEncoder::with_client(OpenAiConfig::default(), Arc::new(MockEmbeddingApi::new()));
        encoder.client = None;

        let err = encoder
            .encode(&["test document".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "OpenAI client is not initialized");
    }

    #[tokio::test]
    async fn encode_returns_vectors() {
        let mut mock = MockEmbeddingApi::new();
        mock.expect_embed().times(1).returning(|_| {
            Ok(EmbeddingResponse {
                embeddings: vec![vec![0.5, 0.25]],
            })
        });

        let encoder = OpenAiEncoder::with_client(OpenAiConfig::default(), Arc::new(mock));
        let embeddings = encoder
            .encode(&["test document".to_string()])
            .await
            .unwrap();
        assert_eq!(embeddings, vec![vec![0.5, 0.25]]);
    }

    #[test]
    fn trait_methods() {
        let encoder =
            OpenAiEncoder::with_client(OpenAiConfig::default(), Arc::new(MockEmbeddingApi::new()));
        assert_eq!(encoder.name(), "openai");
        assert_eq!(encoder.model(), "text-embedding-3-small");
    }

    #[cfg(feature = "openai")]
    #[test]
    fn response_parsing() {
        let json = r#"{
            "object": "list",
            "data": [
                {"object": "embedding", "embedding": [0.5, 0.25], "index": 0}
            ],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 2, "total_tokens": 2}
        }"#;

        let response: http::OpenAiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].embedding, vec![0.5, 0.25]);
    }
}
