//! `ApiTranslator` — translation through an OpenAI-compatible
//! `/v1/chat/completions` endpoint (Ollama, OpenAI, Groq, LM Studio, vLLM …).
//!
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;

use super::{TranslateError, Translation, Translator};
use crate::config::{LlmConfig, TranslationConfig};

const SYSTEM_INSTRUCTION: &str = "\
You are a translation engine.
Rules:
1. Translate the user's text into {language}.
2. Keep names, numbers and code exactly as written.
3. Reply with ONLY the translation, no explanation, no quotes.";

/// English name of an ISO-639-1 code, for the prompt.  Unknown codes are
/// passed through as-is.
fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "ja" => "Japanese",
        "th" => "Thai",
        "de" => "German",
        "fr" => "French",
        "es" => "Spanish",
        "ko" => "Korean",
        "zh" => "Chinese",
        other => other,
    }
}

/// Build the `(system_msg, user_msg)` pair for one translation request.
pub fn build_chat(text: &str, target_lang: &str) -> (String, String) {
    let system = SYSTEM_INSTRUCTION.replace("{language}", language_name(target_lang));
    (system, text.to_string())
}

pub struct ApiTranslator {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiTranslator {
    /// Build an `ApiTranslator` from the translation config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.llm.clone(),
        }
    }
}

#[async_trait]
impl Translator for ApiTranslator {
    /// The `Authorization: Bearer …` header is attached only when
    /// `config.api_key` is a non-empty string.
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Translation, TranslateError> {
        let (system_msg, user_msg) = build_chat(text, target_lang);

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  1024
        });

        let mut req = self.client.post(&url).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?.error_for_status()?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        let translated = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(TranslateError::EmptyResponse)?
            .trim();

        if translated.is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        Ok(Translation::new(translated))
    }

    fn name(&self) -> &'static str {
        "openai-compatible"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
