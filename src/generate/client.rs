//! The opaque generation client boundary.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tokio::time::timeout;

use crate::config::GeneratorConfig;

/// Errors from the generation client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to reach the generation API.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Generation timed out after {duration}s")]
    Timeout { duration: u64 },

    /// The API returned a non-success status.
    #[error("Generation failed: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The API responded with a body we could not interpret.
    #[error("Invalid response from generation API: {0}")]
    InvalidResponse(String),
}

/// Asynchronous image generation: prompt in, image URL out.
///
/// Implementations may fail with an arbitrary [`ClientError`]; callers
/// must not spend credits on failure.
pub trait ImageClient: Send + Sync {
    fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> impl std::future::Future<Output = Result<String, ClientError>> + Send;
}

#[derive(Deserialize)]
struct GenerateResponse {
    url: String,
}

/// HTTP implementation of [`ImageClient`].
pub struct HttpImageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    request_timeout: Duration,
}

impl HttpImageClient {
    /// Build a client from generator configuration.
    pub fn new(config: &GeneratorConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .expect("Failed to build generation client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    async fn do_generate(&self, prompt: &str, aspect_ratio: &str) -> Result<String, ClientError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "aspect_ratio": aspect_ratio,
        });

        let mut builder = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| ClientError::Connection { source: e })?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if parsed.url.is_empty() {
            return Err(ClientError::InvalidResponse(
                "response contained an empty image URL".to_string(),
            ));
        }
        Ok(parsed.url)
    }
}

impl ImageClient for HttpImageClient {
    async fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<String, ClientError> {
        let duration = self.request_timeout.as_secs();
        match timeout(self.request_timeout, self.do_generate(prompt, aspect_ratio)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout { duration }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = HttpImageClient::new(&GeneratorConfig {
            base_url: "https://api.example.com/".to_string(),
            ..GeneratorConfig::default()
        });
        assert_eq!(client.base_url, "https://api.example.com");
    }

    #[test]
    fn response_parsing() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"url": "https://cdn.example.com/img.png"}"#).unwrap();
        assert_eq!(parsed.url, "https://cdn.example.com/img.png");

        assert!(serde_json::from_str::<GenerateResponse>(r#"{"image": "x"}"#).is_err());
    }
}
