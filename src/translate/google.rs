//! Google Translate web endpoint (`translate_a/single`, `client=gtx`).
//!
//! No API key is needed.  The response is a nested JSON array:
//!
//! ```text
//! [[["Japanese","日本語",null,null,10], …], null, "ja", …]
//!   └─ segments: [translated, original, …]     └─ detected source language
//! ```
//!
//! Long input comes back split into several segments whose translated parts
//! are concatenated.

use async_trait::async_trait;
use serde_json::Value;

use super::{TranslateError, Translation, Translator};
use crate::config::TranslationConfig;

pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
    source_language: String,
}

impl GoogleTranslator {
    /// Build from the translation config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `config.timeout_secs`; a default client is the fallback if the builder
    /// fails.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: config.google_base_url.trim_end_matches('/').to_string(),
            source_language: config.source_language.clone(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Translation, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_language.as_str()),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Parse(e.to_string()))?;

        parse_response(&json)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Extract the translation from a `translate_a/single` response body.
pub fn parse_response(json: &Value) -> Result<Translation, TranslateError> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Parse("missing segment array".into()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let translation = translation.trim();
    if translation.is_empty() {
        return Err(TranslateError::EmptyResponse);
    }

    Ok(Translation {
        translation: translation.to_string(),
        source_language: json.get(2).and_then(Value::as_str).map(str::to_string),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_single_segment() {
        let body = json!([[["Japanese", "日本語", null, null, 10]], null, "ja"]);
        let t = parse_response(&body).unwrap();
        assert_eq!(t.translation, "Japanese");
        assert_eq!(t.source_language.as_deref(), Some("ja"));
    }

    #[test]
    fn joins_multiple_segments() {
        let body = json!([
            [
                ["It is sunny today. ", "今日は晴れです。", null, null, 10],
                ["Let's go out.", "出かけましょう。", null, null, 10]
            ],
            null,
            "ja"
        ]);
        let t = parse_response(&body).unwrap();
        assert_eq!(t.translation, "It is sunny today. Let's go out.");
    }

    #[test]
    fn missing_segments_is_a_parse_error() {
        let err = parse_response(&json!({"error": "nope"})).unwrap_err();
        assert!(matches!(err, TranslateError::Parse(_)));
    }

    #[test]
    fn blank_translation_is_empty_response() {
        let err = parse_response(&json!([[[" ", "、"]], null, "ja"])).unwrap_err();
        assert!(matches!(err, TranslateError::EmptyResponse));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = TranslationConfig {
            google_base_url: "http://localhost:9/".into(),
            ..TranslationConfig::default()
        };
        let translator = GoogleTranslator::from_config(&config);
        assert_eq!(translator.base_url, "http://localhost:9");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let config = TranslationConfig {
            // Port 9 (discard) is closed on test machines.
            google_base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..TranslationConfig::default()
        };
        let err = GoogleTranslator::from_config(&config)
            .translate("日本語", "en")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Request(_) | TranslateError::Timeout
        ));
    }
}
