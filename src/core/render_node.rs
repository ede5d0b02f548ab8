//! Compiled template units
//!
//! A [`Template`](super::Template) is an ordered list of [`RenderNode`]s. Each
//! node writes one piece of a log line given the per-call [`RenderContext`].

use super::log_tag::LogTag;
use chrono::{Local, NaiveDateTime};
use std::io::{self, Write};

/// `$i`: zero-padded 24-hour clock
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// `$d`: day/month/year without padding
pub const DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Separator between tags rendered by `$t`
pub const TAG_SEPARATOR: &str = "/";

/// Metadata a template can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metadata {
    Time,
    Date,
    Tags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// Fixed text, written verbatim
    Literal(String),
    /// The message body
    Message,
    Metadata(Metadata),
}

/// Inputs shared by every node rendered for one log call.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub message: &'a str,
    pub tags: &'a [LogTag],
    /// Local wall-clock time, captured once per call
    pub timestamp: NaiveDateTime,
}

impl<'a> RenderContext<'a> {
    pub fn new(message: &'a str, tags: &'a [LogTag]) -> Self {
        Self::at(message, tags, Local::now().naive_local())
    }

    pub fn at(message: &'a str, tags: &'a [LogTag], timestamp: NaiveDateTime) -> Self {
        Self {
            message,
            tags,
            timestamp,
        }
    }
}

impl RenderNode {
    pub fn render<W: Write + ?Sized>(&self, out: &mut W, ctx: &RenderContext<'_>) -> io::Result<()> {
        match self {
            RenderNode::Literal(text) => out.write_all(text.as_bytes()),
            RenderNode::Message => out.write_all(ctx.message.as_bytes()),
            RenderNode::Metadata(Metadata::Time) => {
                write!(out, "{}", ctx.timestamp.format(TIME_FORMAT))
            }
            RenderNode::Metadata(Metadata::Date) => {
                write!(out, "{}", ctx.timestamp.format(DATE_FORMAT))
            }
            RenderNode::Metadata(Metadata::Tags) => {
                for (i, tag) in ctx.tags.iter().enumerate() {
                    if i > 0 {
                        out.write_all(TAG_SEPARATOR.as_bytes())?;
                    }
                    out.write_all(tag.to_str().as_bytes())?;
                }
                Ok(())
            }
        }
    }
}
