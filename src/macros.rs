//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and dispatch through
//! the logger, returning its [`Result`](crate::Result).
//!
//! # Examples
//!
//! ```
//! use tag_logger::prelude::*;
//! use tag_logger::{info, log};
//!
//! let logger = Logger::new();
//! let sink = MemorySink::new();
//! logger.add_target_with_format(sink.clone(), "<$t> $m").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! log!(logger, &[LogTag::Warning, LogTag::Debug], "{} retries left", 2).unwrap();
//!
//! assert_eq!(
//!     sink.lines(),
//!     vec!["<INFO> Server listening on port 8080", "<WARNING/DEBUG> 2 retries left"]
//! );
//! ```

/// Log a formatted message under a list of tags.
///
/// # Examples
///
/// ```
/// # use tag_logger::prelude::*;
/// # let logger = Logger::new();
/// use tag_logger::log;
/// log!(logger, &[LogTag::Error], "Simple message").unwrap();
/// log!(logger, &[LogTag::Error, LogTag::Trace], "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $tags:expr, $($arg:tt)+) => {
        $logger.log($tags, format!($($arg)+))
    };
}

/// Log a trace-tagged message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, &[$crate::LogTag::Trace], $($arg)+)
    };
}

/// Log a debug-tagged message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, &[$crate::LogTag::Debug], $($arg)+)
    };
}

/// Log an info-tagged message.
///
/// # Examples
///
/// ```
/// # use tag_logger::prelude::*;
/// # let logger = Logger::new();
/// use tag_logger::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, &[$crate::LogTag::Info], $($arg)+)
    };
}

/// Log a warning-tagged message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, &[$crate::LogTag::Warning], $($arg)+)
    };
}

/// Log an error-tagged message.
///
/// # Examples
///
/// ```
/// # use tag_logger::prelude::*;
/// # let logger = Logger::new();
/// use tag_logger::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, &[$crate::LogTag::Error], $($arg)+)
    };
}
