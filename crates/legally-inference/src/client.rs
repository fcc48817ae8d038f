//! Hosted inference client.
//!
//! [`HfClient`] wraps the Hugging Face inference REST API. Both calling
//! conventions perform exactly one HTTP call per invocation; ordered
//! fallback across models is the caller's job, never this client's.
//!
//! Every failure mode (transport error, non-success status, undecodable
//! or structurally empty payload) collapses into the single "no answer"
//! signal (`None`). The detail is logged here and nowhere else.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fallback::{ModelConvention, ModelSpec, TextGenerator};
use crate::message::{render_completion_prompt, Message};

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

const CHAT_MAX_TOKENS: u32 = 1000;
const COMPLETION_MAX_NEW_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const REPETITION_PENALTY: f32 = 1.15;

/// Completion calls carry an explicit timeout; chat calls rely on the
/// transport defaults.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Client for the hosted inference API.
#[derive(Debug, Clone)]
pub struct HfClient {
    http: Client,
    base_url: String,
    token: String,
}

impl HfClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: token.into(),
        }
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Chat convention: role-tagged messages to the model's
    /// `/v1/chat/completions` endpoint.
    async fn chat_completion(&self, model: &str, messages: &[Message]) -> Option<String> {
        let wire: Vec<WireMessage> = messages
            .iter()
            .map(|m| WireMessage { role: m.role.as_str(), content: &m.content })
            .collect();
        let body = serde_json::json!({
            "model": model,
            "messages": wire,
            "max_tokens": CHAT_MAX_TOKENS,
            "temperature": TEMPERATURE,
        });

        let url = format!("{}/models/{}/v1/chat/completions", self.base_url, model);
        let resp = match self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(model, error = %e, "chat call failed");
                return None;
            }
        };

        if !resp.status().is_success() {
            warn!(model, status = %resp.status(), "chat call returned non-success status");
            return None;
        }

        let parsed: ChatResponse = match resp.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(model, error = %e, "chat response was not decodable");
                return None;
            }
        };

        parsed.choices.into_iter().next().map(|c| c.message.content)
    }

    /// Completion convention: the message list flattened into one prompt
    /// under the `### Role:` delimiter convention.
    async fn text_generation(&self, model: &str, messages: &[Message]) -> Option<String> {
        let prompt = render_completion_prompt(messages);
        let body = serde_json::json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": COMPLETION_MAX_NEW_TOKENS,
                "temperature": TEMPERATURE,
                "top_p": TOP_P,
                "repetition_penalty": REPETITION_PENALTY,
                "do_sample": true,
                "return_full_text": false,
            },
        });

        let url = format!("{}/models/{}", self.base_url, model);
        let resp = match self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .timeout(COMPLETION_TIMEOUT)
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(model, error = %e, "completion call failed");
                return None;
            }
        };

        if !resp.status().is_success() {
            warn!(model, status = %resp.status(), "completion call returned non-success status");
            return None;
        }

        let parsed: Vec<GeneratedText> = match resp.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(model, error = %e, "completion response was not decodable");
                return None;
            }
        };

        parsed.into_iter().next().map(|g| g.generated_text)
    }
}

impl TextGenerator for HfClient {
    async fn generate(&self, model: &ModelSpec, messages: &[Message]) -> Option<String> {
        match model.convention {
            ModelConvention::Chat => self.chat_completion(&model.id, messages).await,
            ModelConvention::Completion => self.text_generation(&model.id, messages).await,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chat_response_with_no_choices_decodes_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn chat_response_extracts_first_choice() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#,
        )
        .unwrap();
        let text = parsed.choices.into_iter().next().map(|c| c.message.content);
        assert_eq!(text.as_deref(), Some("hello"));
    }

    #[test]
    fn generated_text_list_decodes() {
        let parsed: Vec<GeneratedText> =
            serde_json::from_str(r#"[{"generated_text":"the law says"}]"#).unwrap();
        assert_eq!(parsed[0].generated_text, "the law says");
    }

    #[test]
    fn base_url_override_applies() {
        let client = HfClient::new("tok").with_base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
