use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use crate::config::INSIGHT;

// Wire types of the generateContent endpoint. Unknown response fields
// (roles, safety metadata, usage) are ignored.

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

fn extract_text(response: GenerateResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

/// Thin client for the Gemini generateContent endpoint. One request per
/// analysis, no retries, no streaming.
pub struct InsightClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl InsightClient {
    /// Reads the API credential from the process environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(INSIGHT.api_key_env)
            .with_context(|| format!("{} is not set", INSIGHT.api_key_env))?;

        Self::new(INSIGHT.base_url.to_string(), api_key)
    }

    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(INSIGHT.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, INSIGHT.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        let text = extract_text(body);
        if text.is_empty() {
            anyhow::bail!("the generation service returned no text");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_from_first_candidate() {
        let json = r###"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "## Resumo Geral\n" },
                            { "text": "Vendas estáveis." }
                        ]
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        }"###;

        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(response), "## Resumo Geral\nVendas estáveis.");
    }

    #[test]
    fn empty_candidates_extract_to_empty_string() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(response), "");
    }

    #[test]
    fn request_body_has_the_expected_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "análise".into(),
                }],
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "análise");
    }
}
