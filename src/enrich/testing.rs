//! Scripted providers for coordinator and pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::romaji::{TransliterationError, Transliterator};
use crate::translate::{TranslateError, Translation, Translator};

/// What a scripted provider does when called.
#[derive(Clone)]
pub enum Outcome {
    Reply(String),
    Fail(String),
    Panic,
}

/// Transliterator that sleeps for `delay`, then follows its script.
pub struct FixedTransliterator {
    script: Outcome,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl FixedTransliterator {
    pub fn new(script: Outcome, delay: Duration) -> Self {
        Self {
            script,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reply(output: &str) -> Self {
        Self::new(Outcome::Reply(output.into()), Duration::ZERO)
    }

    pub fn fail(message: &str) -> Self {
        Self::new(Outcome::Fail(message.into()), Duration::ZERO)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transliterator for FixedTransliterator {
    async fn convert(&self, _text: &str) -> Result<String, TransliterationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.script {
            Outcome::Reply(out) => Ok(out.clone()),
            Outcome::Fail(msg) => Err(TransliterationError::Backend(msg.clone())),
            Outcome::Panic => panic!("transliterator exploded"),
        }
    }
}

/// Translator that sleeps for `delay`, then follows its script.
pub struct FixedTranslator {
    script: Outcome,
    delay: Duration,
    pub calls: AtomicUsize,
}

impl FixedTranslator {
    pub fn new(script: Outcome, delay: Duration) -> Self {
        Self {
            script,
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn reply(output: &str) -> Self {
        Self::new(Outcome::Reply(output.into()), Duration::ZERO)
    }

    pub fn fail(message: &str) -> Self {
        Self::new(Outcome::Fail(message.into()), Duration::ZERO)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for FixedTranslator {
    async fn translate(&self, _text: &str, _lang: &str) -> Result<Translation, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match &self.script {
            Outcome::Reply(out) => Ok(Translation::new(out.clone())),
            Outcome::Fail(msg) => Err(TranslateError::Request(msg.clone())),
            Outcome::Panic => panic!("translator exploded"),
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
