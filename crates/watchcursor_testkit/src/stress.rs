//! Stress helpers for watchcursor.
//!
//! The codec holds no mutable shared state, so any number of threads may
//! encode and decode at once. These helpers hammer it from several threads
//! and count mismatches.

use std::thread;
use std::time::{Duration, Instant};
use watchcursor_core::{is_no_event, no_event_token, Cursor, Position, ResourceType};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of operations per thread.
    pub operations: usize,
    /// Number of concurrent threads.
    pub threads: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            threads: 4,
        }
    }
}

/// Builds the cursor used for operation `i` of thread `thread_id`.
fn cursor_for(thread_id: usize, i: usize) -> Cursor {
    let types = ResourceType::watchable();
    let kind = types[(thread_id + i) % types.len()];
    let seconds = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
    let counter = u32::try_from(thread_id).unwrap_or(u32::MAX);
    Cursor::new(
        kind,
        Position::new(seconds, counter),
        format!("{:024x}", ((thread_id as u64) << 32) | i as u64),
    )
}

/// Encodes and decodes cursors from several threads at once.
///
/// An operation fails if encoding fails, decoding fails, or the decoded
/// cursor differs from the original. Threads also check the shared
/// no-event token on every iteration.
pub fn stress_concurrent_roundtrip(config: &StressConfig) -> StressTestResult {
    let start = Instant::now();

    let handles: Vec<_> = (0..config.threads)
        .map(|thread_id| {
            let operations = config.operations;
            thread::spawn(move || {
                let mut successful = 0usize;
                let mut failed = 0usize;

                for i in 0..operations {
                    let cursor = cursor_for(thread_id, i);
                    let ok = cursor
                        .encode()
                        .and_then(|token| Cursor::decode(&token))
                        .is_ok_and(|decoded| decoded == cursor)
                        && is_no_event(no_event_token());

                    if ok {
                        successful += 1;
                    } else {
                        failed += 1;
                    }
                }

                (successful, failed)
            })
        })
        .collect();

    let (successful, failed) = handles
        .into_iter()
        .map(|handle| handle.join().unwrap_or((0, config.operations)))
        .fold((0, 0), |(s, f), (ts, tf)| (s + ts, f + tf));

    StressTestResult::new(successful, failed, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_concurrent_run() {
        let config = StressConfig {
            operations: 200,
            threads: 4,
        };
        let result = stress_concurrent_roundtrip(&config);
        assert_eq!(result.total_ops, 800);
        assert_eq!(result.failed_ops, 0);
    }

    #[test]
    fn generated_cursors_are_valid() {
        for thread_id in 0..3 {
            for i in 0..50 {
                assert!(cursor_for(thread_id, i).validate().is_ok());
            }
        }
    }
}
