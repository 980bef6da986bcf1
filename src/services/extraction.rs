use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::models::StructuredResume;

/// Errors that can occur when calling the extraction service
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Turns free resume text into structured fields
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> Result<StructuredResume, ExtractionError>;
}

const PROMPT_TEMPLATE: &str = r#"
You are a professional AI resume parser.

From the following resume text, extract and return only a JSON object with these fields:

{
  "name": "Full candidate name as it appears",
  "total_experience": "Total years and months of full-time professional work experience (e.g., '2 years 3 months')",
  "skills": ["List", "of", "technical", "skills"],
  "recent_job_title": "The most recent job title",
  "education": "Highest degree and major (e.g., 'B.Sc in Computer Science')",
  "certifications": ["List of certifications, if any"],
  "companies_worked": ["Company A", "Company B", "Company C"]
}

Instructions:
- Parse the work history carefully. Extract company names from employment sections only.
- Do not include colleges, training centers, or internship sites unless clearly professional work.
- Avoid duplicates or invalid entries.
- Return only valid JSON.

Resume:
"""
{resume_text}
"""
"#;

/// Build the extraction prompt for a resume
pub fn build_prompt(resume_text: &str) -> String {
    PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

/// Interpret model output: a JSON object becomes structured data, anything else is kept raw
pub fn parse_model_output(content: &str) -> StructuredResume {
    match serde_json::from_str::<Value>(content) {
        Ok(value @ Value::Object(_)) => StructuredResume::from(value),
        Ok(_) | Err(_) => {
            tracing::warn!("Extraction output is not a JSON object, storing raw content");
            StructuredResume::raw(content)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
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
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiExtractor {
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

impl OpenAiExtractor {
    /// Create a new extraction client
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, ExtractionError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            temperature,
            client,
        })
    }
}

#[async_trait]
impl ResumeExtractor for OpenAiExtractor {
    async fn extract(&self, resume_text: &str) -> Result<StructuredResume, ExtractionError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let prompt = build_prompt(resume_text);

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: self.temperature,
        };

        tracing::debug!("Requesting extraction from {} (model {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ExtractionError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Extraction request failed: {} - {}", status, body);
            return Err(ExtractionError::ApiError(format!(
                "Extraction request failed: {}",
                status
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractionError::InvalidResponse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ExtractionError::InvalidResponse("Missing message content".into()))?;

        tracing::debug!("Extraction returned {} bytes", content.len());

        Ok(parse_model_output(&content))
    }
}
