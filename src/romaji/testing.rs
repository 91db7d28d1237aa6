//! Shared analyzer for unit tests.

use std::sync::{Arc, OnceLock};

use super::IpadicAnalyzer;

/// One IPADIC analyzer for the whole test binary; loading it is slow.
pub fn ipadic() -> Arc<IpadicAnalyzer> {
    static ANALYZER: OnceLock<Arc<IpadicAnalyzer>> = OnceLock::new();
    ANALYZER
        .get_or_init(|| Arc::new(IpadicAnalyzer::load().expect("embedded IPADIC")))
        .clone()
}
