//! Logger metrics for observability
//!
//! Counters for dispatched calls, lines written and write failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use tag_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_call();
/// metrics.record_line();
///
/// assert_eq!(metrics.calls(), 1);
/// assert_eq!(metrics.lines_written(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Number of `log` calls dispatched
    calls: AtomicU64,

    /// Number of lines written, one per matching target per call
    lines_written: AtomicU64,

    /// Calls that no target accepted
    unmatched_calls: AtomicU64,

    /// Lines aborted by a sink write error
    write_errors: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            lines_written: AtomicU64::new(0),
            unmatched_calls: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn unmatched_calls(&self) -> u64 {
        self.unmatched_calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_line(&self) {
        self.lines_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_unmatched(&self) {
        self.unmatched_calls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_write_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Average lines written per call (fan-out across targets)
    pub fn fan_out(&self) -> f64 {
        let calls = self.calls();
        if calls == 0 {
            return 0.0;
        }
        self.lines_written() as f64 / calls as f64
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.lines_written.store(0, Ordering::Relaxed);
        self.unmatched_calls.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.calls(), 0);
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.unmatched_calls(), 0);
        assert_eq!(metrics.write_errors(), 0);
        assert_eq!(metrics.fan_out(), 0.0);
    }

    #[test]
    fn test_fan_out() {
        let metrics = LoggerMetrics::new();
        for _ in 0..4 {
            metrics.record_call();
        }
        for _ in 0..6 {
            metrics.record_line();
        }
        assert!((metrics.fan_out() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_call();
        metrics.record_unmatched();
        metrics.record_write_error();
        metrics.reset();
        assert_eq!(metrics.calls(), 0);
        assert_eq!(metrics.unmatched_calls(), 0);
        assert_eq!(metrics.write_errors(), 0);
    }
}
