//! Registered output targets

use super::error::{LoggerError, Result};
use super::sink::Sink;
use super::tag_set::TagSet;
use super::template::Template;
use std::fmt;

/// Opaque handle to a registered target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(u64);

impl TargetId {
    #[cfg(test)]
    pub(crate) fn from_raw(raw: u64) -> Self {
        TargetId(raw)
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sink bound to the tags it accepts and its compiled template
pub struct Target {
    id: TargetId,
    sink: Box<dyn Sink>,
    tags: TagSet,
    template: Template,
}

impl Target {
    pub fn id(&self) -> TargetId {
        self.id
    }

    pub fn tags(&self) -> TagSet {
        self.tags
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn name(&self) -> &str {
        self.sink.name()
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut dyn Sink, TagSet, &Template) {
        (self.sink.as_mut(), self.tags, &self.template)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("sink", &self.sink.name())
            .field("tags", &self.tags)
            .field("template", &self.template.to_string())
            .finish()
    }
}

/// Targets in registration order
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<Target>,
    next_id: u64,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sink: Box<dyn Sink>, tags: TagSet, template: Template) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.push(Target {
            id,
            sink,
            tags,
            template,
        });
        id
    }

    /// Replace the accepted tags and template of an existing target.
    /// The target keeps its position in the dispatch order.
    pub fn configure(&mut self, id: TargetId, tags: TagSet, template: Template) -> Result<()> {
        let target = self
            .targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LoggerError::UnknownTarget(id))?;
        target.tags = tags;
        target.template = template;
        Ok(())
    }

    /// Unregister a target, handing its sink back unclosed
    pub fn remove(&mut self, id: TargetId) -> Option<Box<dyn Sink>> {
        let index = self.targets.iter().position(|t| t.id == id)?;
        Some(self.targets.remove(index).sink)
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Target> {
        self.targets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
