//! VoyageAI embedding encoder.
//!
//! Wraps the VoyageAI `/embeddings` endpoint behind the [`Encoder`] trait.
//! The underlying HTTP client is built at construction from an API key
//! (passed explicitly or taken from `VOYAGE_API_KEY`), and every embedding
//! call runs through a fixed-budget retry loop.

use std::sync::Arc;

use async_trait::async_trait;

use super::retry::with_retries;
use super::traits::{EmbeddingApi, Encoder, EncoderError, EncoderResult};
use crate::config::{VoyageConfig, VOYAGE_API_KEY_ENV};

/// Provider name used in error messages.
const PROVIDER: &str = "VoyageAI";

/// Encoder backed by the VoyageAI embeddings API.
pub struct VoyageEncoder {
    config: VoyageConfig,
    client: Option<Arc<dyn EmbeddingApi>>,
}

impl std::fmt::Debug for VoyageEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoyageEncoder")
            .field("config", &self.config)
            .field("client", &self.client.as_ref().map(|_| "<dyn EmbeddingApi>"))
            .finish()
    }
}

impl VoyageEncoder {
    /// Creates an encoder with default configuration, resolving the API key
    /// from the explicit argument or the `VOYAGE_API_KEY` environment
    /// variable. The explicit argument wins.
    pub fn new(api_key: Option<String>) -> EncoderResult<Self> {
        Self::with_config(VoyageConfig::from_env(api_key))
    }

    /// Creates an encoder from a fully-populated config. No environment
    /// lookup is performed.
    #[allow(unused_variables)]
    pub fn with_config(config: VoyageConfig) -> EncoderResult<Self> {
        #[cfg(not(feature = "voyage"))]
        {
            Err(EncoderError::FeatureDisabled("voyage"))
        }
        #[cfg(feature = "voyage")]
        {
            let api_key = config.api_key.as_deref().ok_or_else(|| {
                EncoderError::Configuration(format!(
                    "no {PROVIDER} API key provided; pass one explicitly or set {VOYAGE_API_KEY_ENV}"
                ))
            })?;

            let client = VoyageHttpClient::new(api_key, &config.base_url, &config.model)
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
    /// construction. Useful for substituting the transport in tests or for
    /// sharing one client across encoders.
    pub fn with_client(config: VoyageConfig, client: Arc<dyn EmbeddingApi>) -> Self {
        Self {
            config,
            client: Some(client),
        }
    }
}

#[async_trait]
impl Encoder for VoyageEncoder {
    fn name(&self) -> &str {
        "voyageai"
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

        tracing::debug!(documents = documents.len(), "voyageai embedding succeeded");
        Ok(response.embeddings)
    }
}

#[cfg(feature = "voyage")]
mod http {
    use async_trait::async_trait;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
    use serde::{Deserialize, Serialize};

    use super::super::traits::{EmbeddingApi, EmbeddingResponse};

    /// Wire format for the embeddings endpoint.
    #[derive(Debug, Serialize)]
    pub(super) struct VoyageRequest<'a> {
        pub input: &'a [String],
        pub model: &'a str,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct VoyageResponse {
        pub data: Vec<VoyageEmbedding>,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct VoyageEmbedding {
        pub embedding: Vec<f32>,
    }

    /// HTTP client for the VoyageAI embeddings API.
    pub struct VoyageHttpClient {
        client: reqwest::Client,
        base_url: String,
        model: String,
    }

    impl VoyageHttpClient {
        /// Builds a client with the key baked into its default headers.
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
    impl EmbeddingApi for VoyageHttpClient {
        async fn embed(&self, documents: &[String]) -> anyhow::Result<EmbeddingResponse> {
            let response = self
                .client
                .post(format!("{}/embeddings", self.base_url))
                .json(&VoyageRequest {
                    input: documents,
                    model: &self.model,
                })
                .send()
                .await?
                .error_for_status()?
                .json::<VoyageResponse>()
                .await?;

            Ok(EmbeddingResponse {
                embeddings: response.data.into_iter().map(|d| d.embedding).collect(),
            })
        }
    }
}

#[cfg(feature = "voyage")]
pub use http::VoyageHttpClient;
