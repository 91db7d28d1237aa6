//! Application entry point for the kanji reading assistant.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the [`tokio`] runtime.
//! 4. Build capture, transliteration, translation and presentation.
//! 5. Spawn the pipeline driver on the runtime.
//! 6. Spawn the hotkey listener thread.
//! 7. Block until Ctrl+C, then log the session counters.

use std::sync::{Arc, PoisonError};

use anyhow::Context;
use tokio::sync::mpsc;

use kanji_read_assist::{
    capture::{CaptureController, EnigoSimulator, SystemClipboard},
    config::{AppConfig, HotkeyConfig},
    enrich::EnrichmentCoordinator,
    hotkey::{parse_combo, CaptureRequest, HotkeyListener},
    pipeline::{new_shared_state, PipelineDriver},
    present::ConsoleSink,
    romaji::RomajiTransliterator,
    translate::AggregateTranslator,
};

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("kanji-read-assist starting up");

    // 2. Configuration
    if AppConfig::is_first_run() {
        log::info!("No settings file found; using defaults");
    }
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 4. Components
    let capture = CaptureController::new(
        Arc::new(SystemClipboard::new()),
        Arc::new(EnigoSimulator::new()),
        config.capture.clone(),
    );

    let translator = AggregateTranslator::from_config(&config.translation);
    if translator.is_empty() {
        log::warn!("No translation providers configured; translations will show an error");
    }

    let transliterator = RomajiTransliterator::from_config(&config.romaji)
        .context("failed to load the reading dictionary")?;
    let enrich = EnrichmentCoordinator::new(
        Arc::new(transliterator),
        Arc::new(translator),
        config.translation.target_language.clone(),
        config.enrichment.provider_timeout(),
    );

    // 5. Pipeline driver
    let (request_tx, request_rx) = mpsc::channel::<CaptureRequest>(4);
    let state = new_shared_state();
    let driver = PipelineDriver::new(
        Arc::clone(&state),
        Arc::new(capture),
        Arc::new(enrich),
        Arc::new(ConsoleSink::new()),
    );
    rt.spawn(driver.run(request_rx));

    // 6. Hotkey listener thread
    let (combo, trigger) = match parse_combo(&config.hotkey.trigger) {
        Ok(combo) => (combo, config.hotkey.trigger.clone()),
        Err(e) => {
            let fallback = HotkeyConfig::default().trigger;
            log::warn!("Invalid hotkey {:?} ({e}); using {fallback}", config.hotkey.trigger);
            (parse_combo(&fallback)?, fallback)
        }
    };
    let _hotkey_listener =
        HotkeyListener::start(combo, request_tx).context("failed to spawn hotkey listener")?;

    if config.ui.show_ready_notice {
        log::info!("Ready. Select text → Press {}", trigger.replace('+', " + "));
    }

    // 7. Run until interrupted
    rt.block_on(tokio::signal::ctrl_c())
        .context("failed to listen for Ctrl+C")?;
    log::info!("kanji-read-assist shutting down");

    let st = state.lock().unwrap_or_else(PoisonError::into_inner);
    if st.pipeline.is_busy() {
        log::warn!("Interrupted during a run ({})", st.pipeline.label());
    }
    log::info!("Session: {}", st.summary());

    Ok(())
}
