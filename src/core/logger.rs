//! Main logger implementation
//!
//! The [`Logger`] owns a [`TargetRegistry`] and dispatches each call to every
//! target whose accepted tags intersect the call's tags. Dispatch is fully
//! synchronous: `log` returns once every matching sink has been written and
//! flushed.

use super::{
    error::{LoggerError, Result},
    log_tag::LogTag,
    metrics::LoggerMetrics,
    registry::{TargetId, TargetRegistry},
    render_node::RenderContext,
    sink::Sink,
    tag_set::TagSet,
    template::Template,
};
use parking_lot::Mutex;
use std::cell::Cell;
use std::io::{self, BufWriter, Write};

#[cfg(feature = "file")]
use std::path::{Path, PathBuf};

thread_local! {
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside [`Logger::log`] until dropped
struct DispatchGuard {
    outer: bool,
}

impl DispatchGuard {
    fn enter() -> Self {
        Self {
            outer: DISPATCHING.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        DISPATCHING.with(|flag| flag.set(self.outer));
    }
}

/// Whether the current thread is writing to sinks from inside [`Logger::log`]
pub(crate) fn is_dispatching() -> bool {
    DISPATCHING.with(Cell::get)
}

pub struct Logger {
    targets: Mutex<TargetRegistry>,
    /// Metrics for observability (calls, lines written, write errors)
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            targets: Mutex::new(TargetRegistry::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Register `sink` for every tag with the default format
    pub fn add_target<S: Sink + 'static>(&self, sink: S) -> TargetId {
        self.add_target_template(sink, TagSet::all(), Template::default())
    }

    pub fn add_target_with_tags<S: Sink + 'static>(
        &self,
        sink: S,
        tags: impl Into<TagSet>,
    ) -> TargetId {
        self.add_target_template(sink, tags, Template::default())
    }

    pub fn add_target_with_format<S: Sink + 'static>(
        &self,
        sink: S,
        format: &str,
    ) -> Result<TargetId> {
        self.add_target_with(sink, TagSet::all(), format)
    }

    /// Register `sink` for `tags`, rendering lines with `format`.
    ///
    /// The format is compiled before anything is registered, so a
    /// [`LoggerError::Format`] leaves the logger unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use tag_logger::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let sink = MemorySink::new();
    /// logger
    ///     .add_target_with(sink.clone(), [LogTag::Error, LogTag::Warning], "$t: $m")
    ///     .unwrap();
    ///
    /// logger.log(&[LogTag::Warning, LogTag::Info], "low disk").unwrap();
    /// logger.info("not for this sink").unwrap();
    /// assert_eq!(sink.contents(), "WARNING/INFO: low disk\n");
    /// ```
    pub fn add_target_with<S: Sink + 'static>(
        &self,
        sink: S,
        tags: impl Into<TagSet>,
        format: &str,
    ) -> Result<TargetId> {
        let template = Template::compile(format)?;
        Ok(self.add_target_template(sink, tags, template))
    }

    /// Register `sink` with an already compiled template
    pub fn add_target_template<S: Sink + 'static>(
        &self,
        sink: S,
        tags: impl Into<TagSet>,
        template: Template,
    ) -> TargetId {
        self.register(Box::new(sink), tags.into(), template)
    }

    fn register(&self, sink: Box<dyn Sink>, tags: TagSet, template: Template) -> TargetId {
        self.targets.lock().add(sink, tags, template)
    }

    #[cfg(feature = "file")]
    pub fn add_file_target(&self, path: impl AsRef<Path>) -> Result<TargetId> {
        self.add_file_target_with(path, TagSet::all(), super::template::DEFAULT_FORMAT)
    }

    #[cfg(feature = "file")]
    pub fn add_file_target_with_tags(
        &self,
        path: impl AsRef<Path>,
        tags: impl Into<TagSet>,
    ) -> Result<TargetId> {
        self.add_file_target_with(path, tags, super::template::DEFAULT_FORMAT)
    }

    #[cfg(feature = "file")]
    pub fn add_file_target_with_format(
        &self,
        path: impl AsRef<Path>,
        format: &str,
    ) -> Result<TargetId> {
        self.add_file_target_with(path, TagSet::all(), format)
    }

    /// Open `path` for appending and register it.
    ///
    /// The format is compiled first; no file is created for a bad format.
    #[cfg(feature = "file")]
    pub fn add_file_target_with(
        &self,
        path: impl AsRef<Path>,
        tags: impl Into<TagSet>,
        format: &str,
    ) -> Result<TargetId> {
        let template = Template::compile(format)?;
        let sink = crate::sinks::FileSink::new(path.as_ref())?;
        Ok(self.add_target_template(sink, tags, template))
    }

    #[cfg(feature = "console")]
    pub fn add_console_target(&self) -> TargetId {
        self.add_target(crate::sinks::ConsoleSink::new())
    }

    #[cfg(feature = "console")]
    pub fn add_console_target_with_tags(&self, tags: impl Into<TagSet>) -> TargetId {
        self.add_target_with_tags(crate::sinks::ConsoleSink::new(), tags)
    }

    #[cfg(feature = "console")]
    pub fn add_console_target_with_format(&self, format: &str) -> Result<TargetId> {
        self.add_target_with_format(crate::sinks::ConsoleSink::new(), format)
    }

    #[cfg(feature = "console")]
    pub fn add_console_target_with(
        &self,
        tags: impl Into<TagSet>,
        format: &str,
    ) -> Result<TargetId> {
        self.add_target_with(crate::sinks::ConsoleSink::new(), tags, format)
    }

    /// Replace the accepted tags and format of a registered target.
    ///
    /// The previous configuration is discarded, never merged.
    pub fn configure_target(
        &self,
        id: TargetId,
        tags: impl Into<TagSet>,
        format: &str,
    ) -> Result<()> {
        let template = Template::compile(format)?;
        self.targets.lock().configure(id, tags.into(), template)
    }

    /// Unregister a target. The sink is returned flushed but not closed.
    pub fn remove_target(&self, id: TargetId) -> Option<Box<dyn Sink>> {
        let mut sink = self.targets.lock().remove(id)?;
        if let Err(e) = sink.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush removed target {}: {}", id, e);
        }
        Some(sink)
    }

    pub fn target_count(&self) -> usize {
        self.targets.lock().len()
    }

    /// Accepted tags of a registered target
    pub fn target_tags(&self, id: TargetId) -> Option<TagSet> {
        self.targets.lock().get(id).map(|t| t.tags())
    }

    /// Whether any registered target accepts `tag`
    pub fn accepts(&self, tag: LogTag) -> bool {
        self.targets.lock().iter().any(|t| t.tags().contains(tag))
    }

    /// Dispatch `message` to every target accepting at least one of `tags`.
    ///
    /// Each matching target renders the whole call tag list exactly once,
    /// followed by a line terminator. Targets are visited in registration
    /// order; a write error aborts the call and skips the remaining targets.
    pub fn log(&self, tags: &[LogTag], message: impl AsRef<str>) -> Result<()> {
        self.metrics.record_call();

        let mut registry = self.targets.lock();
        // Stamped under the lock so lines reach each sink in time order
        let ctx = RenderContext::new(message.as_ref(), tags);
        let _dispatch = DispatchGuard::enter();
        let mut matched = false;

        for target in registry.iter_mut() {
            let id = target.id();
            let (sink, accepted, template) = target.parts_mut();
            if accepted.first_match(tags).is_none() {
                continue;
            }
            matched = true;

            if let Err(source) = Self::write_line(&mut *sink, template, &ctx) {
                self.metrics.record_write_error();
                return Err(LoggerError::io_operation(
                    "writing log line",
                    format!("target {} ({}) failed", id, sink.name()),
                    source,
                ));
            }
            self.metrics.record_line();
        }

        if !matched {
            self.metrics.record_unmatched();
        }
        Ok(())
    }

    /// Render one line through a scoped buffer.
    ///
    /// The buffer is flushed on success and on drop if rendering fails
    /// midway. The sink itself is only borrowed.
    fn write_line(sink: &mut dyn Sink, template: &Template, ctx: &RenderContext<'_>) -> io::Result<()> {
        let capacity = sink.buffer_capacity();
        let mut writer = BufWriter::with_capacity(capacity, sink);
        template.render(&mut writer, ctx)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }

    #[inline]
    pub fn log_tag(&self, tag: LogTag, message: impl AsRef<str>) -> Result<()> {
        self.log(&[tag], message)
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_tag(LogTag::Info, message)
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_tag(LogTag::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_tag(LogTag::Error, message)
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_tag(LogTag::Trace, message)
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) -> Result<()> {
        self.log_tag(LogTag::Debug, message)
    }

    pub fn flush(&self) -> Result<()> {
        let mut registry = self.targets.lock();
        for target in registry.iter_mut() {
            let (sink, _, _) = target.parts_mut();
            sink.flush()?;
        }
        Ok(())
    }

    /// Get the logger metrics
    ///
    /// # Example
    ///
    /// ```
    /// use tag_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.info("nobody listens").unwrap();
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.calls(), 1);
    /// assert_eq!(metrics.unmatched_calls(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

enum PendingTarget {
    Sink(Box<dyn Sink>),
    #[cfg(feature = "console")]
    Console,
    #[cfg(feature = "file")]
    File(PathBuf),
}

/// Builder for constructing a Logger with a fluent API
///
/// Formats are compiled and files opened in [`build`](LoggerBuilder::build),
/// which fails on the first bad format or unopenable file.
///
/// # Example
/// ```
/// use tag_logger::prelude::*;
///
/// let errors = MemorySink::new();
/// let logger = Logger::builder()
///     .target(MemorySink::new())
///     .target_with(errors.clone(), LogTag::Error, "!! $m")
///     .build()
///     .unwrap();
///
/// logger.error("boom").unwrap();
/// assert_eq!(errors.contents(), "!! boom\n");
/// ```
pub struct LoggerBuilder {
    targets: Vec<(PendingTarget, TagSet, String)>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    fn push(mut self, target: PendingTarget, tags: TagSet, format: &str) -> Self {
        self.targets.push((target, tags, format.to_string()));
        self
    }

    /// Add a sink for every tag with the default format
    #[must_use = "builder methods return a new value"]
    pub fn target<S: Sink + 'static>(self, sink: S) -> Self {
        self.target_with(sink, TagSet::all(), super::template::DEFAULT_FORMAT)
    }

    #[must_use = "builder methods return a new value"]
    pub fn target_with<S: Sink + 'static>(
        self,
        sink: S,
        tags: impl Into<TagSet>,
        format: &str,
    ) -> Self {
        self.push(PendingTarget::Sink(Box::new(sink)), tags.into(), format)
    }

    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn console(self) -> Self {
        self.console_with(TagSet::all(), super::template::DEFAULT_FORMAT)
    }

    #[cfg(feature = "console")]
    #[must_use = "builder methods return a new value"]
    pub fn console_with(self, tags: impl Into<TagSet>, format: &str) -> Self {
        self.push(PendingTarget::Console, tags.into(), format)
    }

    #[cfg(feature = "file")]
    #[must_use = "builder methods return a new value"]
    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.file_with(path, TagSet::all(), super::template::DEFAULT_FORMAT)
    }

    #[cfg(feature = "file")]
    #[must_use = "builder methods return a new value"]
    pub fn file_with(self, path: impl Into<PathBuf>, tags: impl Into<TagSet>, format: &str) -> Self {
        self.push(PendingTarget::File(path.into()), tags.into(), format)
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let logger = Logger::new();
        for (target, tags, format) in self.targets {
            let template = Template::compile(&format)?;
            match target {
                PendingTarget::Sink(sink) => {
                    logger.register(sink, tags, template);
                }
                #[cfg(feature = "console")]
                PendingTarget::Console => {
                    logger.add_target_template(crate::sinks::ConsoleSink::new(), tags, template);
                }
                #[cfg(feature = "file")]
                PendingTarget::File(path) => {
                    let sink = crate::sinks::FileSink::new(&path)?;
                    logger.add_target_template(sink, tags, template);
                }
            }
        }
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
