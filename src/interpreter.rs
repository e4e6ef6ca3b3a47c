//! Optional AI code-interpreter backend.
//!
//! When configured, the dispatcher delegates commands here first and only
//! falls back to direct shell execution if the backend is absent or fails.
//! This path carries no timeout.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::json;

/// An AI backend that can take a natural-language or literal command and
/// return a textual result.
pub trait Interpreter: Send + Sync {
    fn name(&self) -> &str;
    fn chat(&self, command: &str) -> Result<String>;
}

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini-backed interpreter using the `generateContent` REST endpoint.
pub struct GeminiInterpreter {
    client: reqwest::blocking::Client,
    model: String,
    api_key: String,
}

impl GeminiInterpreter {
    pub fn new(model: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Concatenate the text parts across all candidates.
fn response_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .flat_map(|candidate| candidate.content.parts)
        .filter_map(|part| part.text)
        .collect()
}

impl Interpreter for GeminiInterpreter {
    fn name(&self) -> &str {
        "gemini"
    }

    fn chat(&self, command: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_ENDPOINT, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": command }] }],
            "generationConfig": { "temperature": 0.1 }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(anyhow!("Gemini returned {}: {}", status, detail.trim()));
        }

        let parsed: GenerateResponse = response
            .json()
            .context("failed to decode Gemini response")?;

        let text = response_text(parsed);
        if text.is_empty() {
            return Err(anyhow!("Gemini response contained no text"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "Operating " }, { "text": "System: Linux" }] }
            }]
        }"#;

        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response_text(parsed), "Operating System: Linux");
    }

    #[test]
    fn test_response_without_candidates_parses_empty() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
