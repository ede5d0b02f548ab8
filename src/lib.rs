//! # Tag Logger
//!
//! A small synchronous logging facility. Messages carry one or more
//! [`LogTag`]s and are written to every registered target that accepts at
//! least one of them, rendered through that target's compiled template.
//!
//! ## Features
//!
//! - **Compiled Templates**: `[$d][$i] <$t> $m` style formats, parsed once at registration
//! - **Tag Filtering**: Each target accepts its own subset of tags
//! - **Multiple Sinks**: Console, file, in-memory and custom sinks
//! - **`log` Facade**: Can be installed as the global `log` backend
//!
//! ```
//! use tag_logger::prelude::*;
//!
//! let logger = Logger::new();
//! let sink = MemorySink::new();
//! logger.add_target_with_format(sink.clone(), "<$t> $m").unwrap();
//!
//! logger.warning("cache miss").unwrap();
//! assert_eq!(sink.contents(), "<WARNING> cache miss\n");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogTag, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, TagSet,
        TargetId, Template, DEFAULT_FORMAT,
    };
    pub use crate::sinks::MemorySink;
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
}

pub use core::{
    LogTag, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Result, Sink, TagSet, TargetId,
    Template, DEFAULT_FORMAT,
};
pub use sinks::MemorySink;
#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::FileSink;
