use crate::models::Candidate;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const SYSTEM_PROMPT: &str = "You are a medical research assistant. Create a clear, professional summary of the selected research items that a patient can share with their doctor. Include key points about experts, clinical trials, and publications. Keep it concise but informative.";

const USER_PROMPT_PREFIX: &str =
    "Please summarize these research items for a patient to discuss with their doctor:";

pub const FALLBACK_SUMMARY: &str = "Unable to generate summary";

/// Errors that can occur when generating a favourites summary
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Summarizer API key is not configured")]
    NotConfigured,

    #[error("No items provided")]
    NoItems,
}

/// Connection and sampling settings for the chat-completions gateway
#[derive(Debug, Clone)]
pub struct SummarizerOptions {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://ai.gateway.lovable.dev/v1".to_string(),
            api_key: None,
            model: "google/gemini-2.5-flash".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// One line describing a saved item
pub fn describe_item(candidate: &Candidate) -> String {
    match candidate {
        Candidate::Expert(e) => {
            format!("Expert: {}, {} at {}", e.name, e.specialization, e.institution)
        }
        Candidate::Trial(t) => {
            format!("Clinical Trial: {}, Phase: {}, Status: {}", t.title, t.phase, t.status)
        }
        Candidate::Publication(p) => {
            format!("Publication: {} by {} ({})", p.title, p.authors.join(", "), p.year)
        }
    }
}

/// User prompt listing every item, one per line
pub fn build_prompt(items: &[&Candidate]) -> Result<String, SummaryError> {
    if items.is_empty() {
        return Err(SummaryError::NoItems);
    }

    let content = items
        .iter()
        .map(|item| describe_item(item))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("{}\n\n{}", USER_PROMPT_PREFIX, content))
}

/// Client for the AI gateway that turns favourites into a shareable summary
pub struct SummaryClient {
    options: SummarizerOptions,
    client: Client,
}

impl SummaryClient {
    pub fn new(options: SummarizerOptions) -> Result<Self, SummaryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()?;

        Ok(Self { options, client })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.options
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Summarize the given items for a patient to discuss with their doctor
    pub async fn summarize(&self, items: &[&Candidate]) -> Result<String, SummaryError> {
        let prompt = build_prompt(items)?;
        let api_key = self.api_key().ok_or(SummaryError::NotConfigured)?;

        let url = format!(
            "{}/chat/completions",
            self.options.endpoint.trim_end_matches('/')
        );

        let body = ChatRequest {
            model: &self.options.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.options.temperature,
            max_tokens: self.options.max_tokens,
        };

        tracing::debug!("Requesting summary of {} items from {}", items.len(), url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("AI gateway error: {} - {}", status, text);
            return Err(SummaryError::ApiError(format!(
                "Failed to generate summary: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        let choices = json
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| SummaryError::InvalidResponse("Missing choices array".into()))?;

        let summary = choices
            .first()
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .filter(|content| !content.is_empty())
            .unwrap_or(FALLBACK_SUMMARY);

        Ok(summary.to_string())
    }
}
