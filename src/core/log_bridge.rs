//! `log` crate integration
//!
//! Installing a [`Logger`] as the global `log` backend routes `log::info!`
//! and friends through its targets. Each record is dispatched with the single
//! tag mapped from its level.
//!
//! Records emitted while this thread is already writing to sinks (a sink
//! that itself logs, for instance) are dropped: the target registry is held
//! for the whole dispatch and is not re-entrant.

use super::{
    error::LoggerError,
    log_tag::LogTag,
    logger::{is_dispatching, Logger},
};

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        !is_dispatching() && self.accepts(LogTag::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if is_dispatching() {
            eprintln!(
                "[LOGGER ERROR] Dropped log record emitted while writing to a sink: {}",
                record.args()
            );
            return;
        }
        let tag = LogTag::from(record.level());
        if !self.accepts(tag) {
            return;
        }
        if let Err(e) = self.log_tag(tag, record.args().to_string()) {
            eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
        }
    }

    fn flush(&self) {
        if is_dispatching() {
            return;
        }
        if let Err(e) = Logger::flush(self) {
            eprintln!("[LOGGER ERROR] Failed to flush: {}", e);
        }
    }
}

impl Logger {
    /// Install this logger as the global `log` backend.
    ///
    /// Returns a `'static` handle so targets can still be added or
    /// reconfigured afterwards. Fails if a global logger is already set.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tag_logger::Logger;
    ///
    /// let logger = Logger::new().install(log::LevelFilter::Debug).unwrap();
    /// logger.add_console_target();
    /// log::info!("routed through tag_logger");
    /// ```
    pub fn install(self, max_level: log::LevelFilter) -> Result<&'static Logger, LoggerError> {
        let logger: &'static Logger = Box::leak(Box::new(self));
        log::set_logger(logger).map_err(|e| LoggerError::other(e.to_string()))?;
        log::set_max_level(max_level);
        Ok(logger)
    }
}
