//! Shared utilities for integration tests.
//!
//! Provides a serialised handle to the global `logtest` logger and a
//! deterministic proptest runner.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use logtest::Logger;
use proptest::test_runner::{Config as ProptestConfig, RngAlgorithm, TestRng, TestRunner};
use rstest::fixture;

/// Handle to the global logger with exclusive access.
///
/// Serialises access to a [`logtest::Logger`] so tests do not observe each
/// other's records.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let guard = logger
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        Self { guard }
    }

    /// Drop any records captured so far.
    pub fn clear(&mut self) { while self.guard.pop().is_some() {} }

    /// Drain captured records as `(level, message)` pairs.
    pub fn drain(&mut self) -> Vec<(log::Level, String)> {
        let mut records = Vec::new();
        while let Some(record) = self.guard.pop() {
            records.push((record.level(), record.args().to_string()));
        }
        records
    }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }

/// Proptest runner seeded deterministically so failures reproduce.
pub fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}
