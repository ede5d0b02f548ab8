//! Core logger types and traits

pub mod error;
pub mod log_bridge;
pub mod log_tag;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod render_node;
pub mod sink;
pub mod tag_set;
pub mod template;

pub use error::{LoggerError, Result};
pub use log_tag::LogTag;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use registry::{Target, TargetId, TargetRegistry};
pub use render_node::{Metadata, RenderContext, RenderNode};
pub use sink::Sink;
pub use tag_set::TagSet;
pub use template::{Template, DEFAULT_FORMAT};
