//! Sink trait for log output destinations

use std::io::Write;

/// A writable destination for rendered log lines.
///
/// The logger only ever borrows a sink to write and flush it; it never closes one.
pub trait Sink: Write + Send {
    fn name(&self) -> &str;

    /// Capacity of the per-call write buffer placed in front of this sink
    fn buffer_capacity(&self) -> usize {
        1024
    }
}

impl Sink for Box<dyn Sink> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn buffer_capacity(&self) -> usize {
        (**self).buffer_capacity()
    }
}
