//! Console sink implementation

use crate::core::Sink;
use std::io::{self, Stdout, Write};

/// Writes to the process's standard output
pub struct ConsoleSink {
    stdout: Stdout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for ConsoleSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }
}
