//! Aggregate translator — tries each backend in order until one succeeds.
//!
//! When Google's web endpoint is rate-limited or unreachable the next backend
//! (e.g. a local Ollama model) still gets a chance.  Only when every backend
//! fails does the caller see an error.

use std::sync::Arc;

use async_trait::async_trait;

use super::{ApiTranslator, GoogleTranslator, TranslateError, Translation, Translator};
use crate::config::{TranslationConfig, TranslatorKind};

pub struct AggregateTranslator {
    backends: Vec<Arc<dyn Translator>>,
}

impl AggregateTranslator {
    pub fn new(backends: Vec<Arc<dyn Translator>>) -> Self {
        Self { backends }
    }

    /// One backend per entry of `config.providers`, in the listed order.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let backends = config
            .providers
            .iter()
            .map(|kind| -> Arc<dyn Translator> {
                match kind {
                    TranslatorKind::Google => Arc::new(GoogleTranslator::from_config(config)),
                    TranslatorKind::OpenAiCompatible => {
                        Arc::new(ApiTranslator::from_config(config))
                    }
                }
            })
            .collect();
        Self::new(backends)
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

#[async_trait]
impl Translator for AggregateTranslator {
    async fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> Result<Translation, TranslateError> {
        if self.backends.is_empty() {
            return Err(TranslateError::NoProviders);
        }

        let mut failures = Vec::with_capacity(self.backends.len());
        for backend in &self.backends {
            match backend.translate(text, target_lang).await {
                Ok(translation) => return Ok(translation),
                Err(e) => {
                    log::warn!("translate: {} failed: {e}", backend.name());
                    failures.push(format!("{}: {e}", backend.name()));
                }
            }
        }

        Err(TranslateError::AllFailed(failures.join("; ")))
    }

    fn name(&self) -> &'static str {
        "aggregate"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Always succeeds with a fixed string and counts calls.
    struct AlwaysOk(&'static str, AtomicUsize);

    #[async_trait]
    impl Translator for AlwaysOk {
        async fn translate(&self, _: &str, _: &str) -> Result<Translation, TranslateError> {
            self.1.fetch_add(1, Ordering::SeqCst);
            Ok(Translation::new(self.0))
        }

        fn name(&self) -> &'static str {
            "ok"
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl Translator for AlwaysFails {
        async fn translate(&self, _: &str, _: &str) -> Result<Translation, TranslateError> {
            Err(TranslateError::Request("connection refused".into()))
        }

        fn name(&self) -> &'static str {
            "down"
        }
    }

    #[tokio::test]
    async fn first_success_wins() {
        let second = Arc::new(AlwaysOk("second", AtomicUsize::new(0)));
        let agg = AggregateTranslator::new(vec![
            Arc::new(AlwaysOk("first", AtomicUsize::new(0))),
            Arc::clone(&second) as Arc<dyn Translator>,
        ]);

        let t = agg.translate("日本語", "en").await.unwrap();

        assert_eq!(t.translation, "first");
        assert_eq!(second.1.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_through_failures() {
        let agg = AggregateTranslator::new(vec![
            Arc::new(AlwaysFails),
            Arc::new(AlwaysOk("Japanese", AtomicUsize::new(0))),
        ]);

        let t = agg.translate("日本語", "en").await.unwrap();
        assert_eq!(t.translation, "Japanese");
    }

    #[tokio::test]
    async fn all_failing_reports_every_backend() {
        let agg = AggregateTranslator::new(vec![Arc::new(AlwaysFails), Arc::new(AlwaysFails)]);

        let err = agg.translate("日本語", "en").await.unwrap_err();

        match err {
            TranslateError::AllFailed(msg) => assert_eq!(msg.matches("down:").count(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn no_backends_is_an_error() {
        let err = AggregateTranslator::new(Vec::new())
            .translate("日本語", "en")
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::NoProviders));
    }

    #[test]
    fn from_config_follows_provider_list() {
        let mut config = TranslationConfig::default();
        assert_eq!(AggregateTranslator::from_config(&config).len(), 2);

        config.providers = vec![TranslatorKind::OpenAiCompatible];
        assert_eq!(AggregateTranslator::from_config(&config).len(), 1);

        config.providers.clear();
        assert!(AggregateTranslator::from_config(&config).is_empty());
    }
}
