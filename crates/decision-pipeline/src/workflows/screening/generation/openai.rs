use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationError, TextGenerator};
use crate::config::GenerationConfig;

/// Blocking client for the OpenAI Responses API.
///
/// The underlying HTTP client is built per request so the type can be held by async
/// hosts; calls must run on a blocking thread.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: GenerationConfig,
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesPayload {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!("{}/responses", self.config.base_url.trim_end_matches('/'))
    }

    fn map_transport(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredentials)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout())
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        debug!(model = %self.config.model, prompt_len = prompt.len(), "requesting completion");

        let response = client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&ResponsesRequest {
                model: &self.config.model,
                input: prompt,
            })
            .send()
            .map_err(|err| self.map_transport(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ResponsesPayload = response
            .json()
            .map_err(|err| GenerationError::Decode(err.to_string()))?;

        Ok(collect_output_text(payload))
    }
}

fn collect_output_text(payload: ResponsesPayload) -> String {
    if let Some(text) = payload.output_text {
        return text;
    }

    payload
        .output
        .into_iter()
        .flat_map(|item| item.content)
        .filter(|part| part.kind == "output_text")
        .filter_map(|part| part.text)
        .collect()
}
