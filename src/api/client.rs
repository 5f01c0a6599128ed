use super::models::{GenerateContentRequest, GenerateContentResponse};
use super::response::parse_response;
use crate::config::{Config, Credentials};
use crate::error::{FlightsError, Result};
use crate::ui::trace;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Anything that can answer a `generateContent` request.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Returns `Ok(None)` when the service answered with an empty body.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<GenerateContentResponse>>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(build_headers(&config.credentials)?)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_endpoint.clone(),
            verbose: config.verbose,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn build_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    match credentials {
        Credentials::AccessToken(token) => {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    FlightsError::ConfigError(format!("Invalid access token: {}", e))
                })?,
            );
        }
        Credentials::ApiKey(key) => {
            headers.insert(
                HeaderName::from_static("x-goog-api-key"),
                HeaderValue::from_str(key)
                    .map_err(|e| FlightsError::ConfigError(format!("Invalid API key: {}", e)))?,
            );
        }
    }
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl ModelBackend for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Option<GenerateContentResponse>> {
        trace(
            self.verbose,
            format!(
                "POST {} ({} contents)",
                self.endpoint,
                request.contents.len()
            ),
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        trace(self.verbose, format!("Response status: {}", response.status()));

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FlightsError::ApiError { status, message });
        }

        let body = response.text().await?;
        trace(self.verbose, format!("Raw response: {}", body));
        parse_response(&body)
    }
}
