//! Accepted-tag set for output targets

use super::log_tag::LogTag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Unordered set of [`LogTag`]s a target accepts.
///
/// Stored as a bit set; the default is every tag.
///
/// # Examples
///
/// ```
/// use tag_logger::{LogTag, TagSet};
///
/// let tags: TagSet = [LogTag::Error, LogTag::Warning].into_iter().collect();
/// assert!(tags.contains(LogTag::Error));
/// assert!(!tags.contains(LogTag::Info));
/// assert_eq!(tags.first_match(&[LogTag::Info, LogTag::Warning]), Some(LogTag::Warning));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSet {
    bits: u8,
}

impl TagSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < LogTag::ALL.len() {
            bits |= LogTag::ALL[i].bit();
            i += 1;
        }
        Self { bits }
    }

    pub fn insert(&mut self, tag: LogTag) {
        self.bits |= tag.bit();
    }

    pub fn remove(&mut self, tag: LogTag) {
        self.bits &= !tag.bit();
    }

    #[must_use]
    pub fn with(mut self, tag: LogTag) -> Self {
        self.insert(tag);
        self
    }

    #[inline]
    pub fn contains(&self, tag: LogTag) -> bool {
        self.bits & tag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// First tag of `call_tags` this set accepts. The scan stops at the first member.
    pub fn first_match(&self, call_tags: &[LogTag]) -> Option<LogTag> {
        call_tags.iter().copied().find(|tag| self.contains(*tag))
    }

    /// Members in [`LogTag::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = LogTag> + '_ {
        LogTag::ALL.into_iter().filter(|tag| self.contains(*tag))
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<LogTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = LogTag>>(iter: I) -> Self {
        let mut set = TagSet::empty();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<'a> FromIterator<&'a LogTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a LogTag>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl From<LogTag> for TagSet {
    fn from(tag: LogTag) -> Self {
        TagSet::empty().with(tag)
    }
}

impl From<&[LogTag]> for TagSet {
    fn from(tags: &[LogTag]) -> Self {
        tags.iter().collect()
    }
}

impl<const N: usize> From<[LogTag; N]> for TagSet {
    fn from(tags: [LogTag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tags = Vec::<LogTag>::deserialize(deserializer)?;
        Ok(tags.into_iter().collect())
    }
}
