//! Message template compiler
//!
//! A format string is compiled once, when a target is registered, into an
//! ordered list of [`RenderNode`]s that is replayed for every log line.
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `$d`  | current date (`d/m/yyyy`) |
//! | `$i`  | current time (`HH:MM:SS`) |
//! | `$t`  | call tags, upper-cased and `/`-joined |
//! | `$m`  | message body |
//! | `$$`  | a literal `$` |
//!
//! Any other character after `$` is rejected with [`LoggerError::Format`].
//! A lone `$` at the very end of the format is dropped.

use super::error::{LoggerError, Result};
use super::render_node::{Metadata, RenderContext, RenderNode};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

pub const ESCAPE_CHARACTER: char = '$';
pub const MESSAGE_CHARACTER: char = 'm';
pub const TAGS_CHARACTER: char = 't';
pub const TIME_CHARACTER: char = 'i';
pub const DATE_CHARACTER: char = 'd';

/// `[date][time] <TAGS> message`
pub const DEFAULT_FORMAT: &str = "[$d][$i] <$t> $m";

/// A compiled message format.
///
/// # Examples
///
/// ```
/// use tag_logger::core::{RenderNode, Template};
///
/// let template = Template::compile("$$$m!").unwrap();
/// assert_eq!(
///     template.nodes(),
///     &[
///         RenderNode::Literal("$".to_string()),
///         RenderNode::Message,
///         RenderNode::Literal("!".to_string()),
///     ]
/// );
///
/// assert!(Template::compile("$x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<RenderNode>,
}

impl Template {
    /// Compile a format string in a single left-to-right pass.
    pub fn compile(format: &str) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut buffer = String::new();
        let mut in_escape = false;

        for (position, character) in format.chars().enumerate() {
            if !in_escape {
                if character == ESCAPE_CHARACTER {
                    in_escape = true;
                } else {
                    buffer.push(character);
                }
                continue;
            }

            in_escape = false;
            if character == ESCAPE_CHARACTER {
                buffer.push(ESCAPE_CHARACTER);
                continue;
            }

            if !buffer.is_empty() {
                nodes.push(RenderNode::Literal(std::mem::take(&mut buffer)));
            }
            nodes.push(Self::control_node(character, position)?);
        }

        if !buffer.is_empty() {
            nodes.push(RenderNode::Literal(buffer));
        }

        Ok(Self { nodes })
    }

    fn control_node(character: char, position: usize) -> Result<RenderNode> {
        match character {
            DATE_CHARACTER => Ok(RenderNode::Metadata(Metadata::Date)),
            TIME_CHARACTER => Ok(RenderNode::Metadata(Metadata::Time)),
            TAGS_CHARACTER => Ok(RenderNode::Metadata(Metadata::Tags)),
            MESSAGE_CHARACTER => Ok(RenderNode::Message),
            other => Err(LoggerError::format(other, position)),
        }
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render every node in order. No line terminator is written.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W, ctx: &RenderContext<'_>) -> io::Result<()> {
        for node in &self.nodes {
            node.render(out, ctx)?;
        }
        Ok(())
    }

    /// Render into a new string
    pub fn render_to_string(&self, ctx: &RenderContext<'_>) -> String {
        let mut out = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut out, ctx);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            nodes: vec![
                RenderNode::Literal("[".to_string()),
                RenderNode::Metadata(Metadata::Date),
                RenderNode::Literal("][".to_string()),
                RenderNode::Metadata(Metadata::Time),
                RenderNode::Literal("] <".to_string()),
                RenderNode::Metadata(Metadata::Tags),
                RenderNode::Literal("> ".to_string()),
                RenderNode::Message,
            ],
        }
    }
}

impl FromStr for Template {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Template::compile(s)
    }
}

/// Canonical format string; compiling it yields an equal template.
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let control = match node {
                RenderNode::Literal(text) => {
                    for c in text.chars() {
                        if c == ESCAPE_CHARACTER {
                            write!(f, "{ESCAPE_CHARACTER}")?;
                        }
                        write!(f, "{c}")?;
                    }
                    continue;
                }
                RenderNode::Message => MESSAGE_CHARACTER,
                RenderNode::Metadata(Metadata::Date) => DATE_CHARACTER,
                RenderNode::Metadata(Metadata::Time) => TIME_CHARACTER,
                RenderNode::Metadata(Metadata::Tags) => TAGS_CHARACTER,
            };
            write!(f, "{ESCAPE_CHARACTER}{control}")?;
        }
        Ok(())
    }
}
