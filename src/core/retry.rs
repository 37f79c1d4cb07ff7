// src/core/retry.rs

use std::time::Duration;

use log::{error, warn};

use crate::core::error::ScrapeError;
use crate::params::MAX_ATTEMPTS;

/// Backoff wait after failed attempt `n` (1-based): 2^n seconds.
/// Attempt 1 fails → wait 2 s, attempt 2 fails → wait 4 s.
pub fn backoff_wait(attempt: u32) -> Duration {
    Duration::from_secs(2u64.pow(attempt))
}

/// Run `op` up to `MAX_ATTEMPTS` times with exponential backoff in between.
///
/// `label` names the unit of work for the logs ("sueldos 2024-03 page 2").
/// After the last failure the error surfaces as `RetriesExhausted`; the
/// caller decides whether that kills the page, the month, or the run.
pub fn with_retry<T>(
    label: &str,
    op: impl FnMut() -> Result<T, ScrapeError>,
) -> Result<T, ScrapeError> {
    with_retry_using(label, MAX_ATTEMPTS, std::thread::sleep, op)
}

/// Same as `with_retry` but with the attempt cap and sleep injected.
/// Tests pass a recording sleep instead of actually waiting.
pub fn with_retry_using<T>(
    label: &str,
    max_attempts: u32,
    mut sleep: impl FnMut(Duration),
    mut op: impl FnMut() -> Result<T, ScrapeError>,
) -> Result<T, ScrapeError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => {
                warn!("{label}: attempt {attempt}/{max_attempts} failed: {e}");
                if attempt >= max_attempts {
                    error!("{label}: max attempts reached, giving up");
                    return Err(ScrapeError::RetriesExhausted {
                        label: label.to_string(),
                        attempts: attempt,
                    });
                }
                let wait = backoff_wait(attempt);
                warn!("{label}: waiting {} s before retrying", wait.as_secs());
                sleep(wait);
            }
        }
    }
}
