//! Google Gemini text generation (`generateContent`)

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::utils::errors::{AppError, AppResult};

/// Connection settings for one generation call
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Send one prompt, return the generated text
pub async fn generate_text(config: &GeminiConfig, prompt: &str) -> AppResult<String> {
    let api_key = config
        .api_key
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(AppError::MissingApiKey)?;

    let url = format!(
        "{}/models/{}:generateContent",
        config.base_url.trim_end_matches('/'),
        config.model
    );
    let request = GenerateRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
    };

    log::debug!("[Gemini] POST {} ({} prompt chars)", url, prompt.chars().count());

    let response = crate::utils::http::client()?
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(&request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    let result = interpret_generate_response(status, &body);
    match &result {
        Ok(text) => log::info!("[Gemini] Received {} chars from {}", text.len(), config.model),
        Err(e) => log::warn!("[Gemini] Generation failed ({}): {}", status, e),
    }
    result
}

/// Extract the generated text, or the most specific error the body offers
pub fn interpret_generate_response(status: StatusCode, body: &str) -> AppResult<String> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.error.message)
            .filter(|m| !m.trim().is_empty());
        return Err(match message {
            Some(msg) => AppError::Generation(msg),
            None => AppError::HttpStatus(status.as_u16()),
        });
    }

    let parsed: GenerateResponse = serde_json::from_str(body)?;

    if let Some(reason) = parsed.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AppError::Generation(format!("Prompt was blocked: {}", reason)));
    }

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        return Err(AppError::EmptyGeneration);
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(match candidate.finish_reason {
            Some(reason) if reason != "STOP" => {
                AppError::Generation(format!("Generation stopped: {}", reason))
            }
            _ => AppError::EmptyGeneration,
        });
    }

    Ok(text)
}
