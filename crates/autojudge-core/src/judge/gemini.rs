//! Hosted generative-text backend (Google Gemini).

use super::Judge;
use crate::errors::Error;
use crate::model::Evaluation;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug)]
pub struct GeminiJudge {
    model: String,
    api_key: String,
    temperature: f32,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiJudge {
    /// The credential is an explicit constructor parameter; nothing
    /// here reads process-wide state.
    pub fn new(model: String, api_key: String, temperature: f32) -> Self {
        Self {
            model,
            api_key,
            temperature,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Resolve the credential from the environment at construction
    /// time. Absence is a startup failure, never a per-record one.
    pub fn from_env(model: String, temperature: f32) -> Result<Self, Error> {
        let api_key =
            std::env::var(API_KEY_VAR).map_err(|_| Error::MissingCredential(API_KEY_VAR))?;
        Ok(Self::new(model, api_key, temperature))
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The fallible half of `evaluate`. Everything that can go wrong
    /// on the wire or in parsing surfaces here as a `Result`; the
    /// trait impl turns the error case into a degraded verdict at one
    /// explicit seam.
    async fn request(&self, prompt: &str) -> anyhow::Result<Evaluation> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "responseMimeType": "application/json",
            },
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("request to generative API failed")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            anyhow::bail!("generative API error (status {status}): {detail}");
        }

        let payload: serde_json::Value = resp
            .json()
            .await
            .context("generative API returned a non-JSON body")?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("API response missing candidate text"))?;

        parse_evaluation(text)
    }
}

#[async_trait]
impl Judge for GeminiJudge {
    async fn evaluate(&self, prompt: &str) -> Evaluation {
        match self.request(prompt).await {
            Ok(evaluation) => evaluation,
            Err(err) => {
                warn!(provider = "google", error = %err, "judge call degraded");
                Evaluation::degraded(err)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}

/// Strict JSON parse with one markdown-fence fallback. The API usually
/// honors `responseMimeType`, but models still occasionally wrap the
/// payload in ```json fences.
pub(crate) fn parse_evaluation(text: &str) -> anyhow::Result<Evaluation> {
    let trimmed = text.trim();
    if let Ok(evaluation) = serde_json::from_str::<Evaluation>(trimmed) {
        return Ok(evaluation);
    }
    serde_json::from_str(strip_code_fences(trimmed))
        .with_context(|| format!("judge returned unparseable output: {trimmed}"))
}

fn strip_code_fences(text: &str) -> &str {
    let mut inner = text.trim();
    if let Some(rest) = inner.strip_prefix("```") {
        inner = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    }
    if let Some(rest) = inner.strip_suffix("```") {
        inner = rest.trim_end();
    }
    inner
}
