//! Severity tag definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag attached to a log call and used to filter targets.
///
/// Tags carry no ordering: a target accepts an arbitrary subset of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogTag {
    Info,
    Warning,
    Error,
    Trace,
    Debug,
}

impl LogTag {
    /// Every tag, in declaration order
    pub const ALL: [LogTag; 5] = [
        LogTag::Info,
        LogTag::Warning,
        LogTag::Error,
        LogTag::Trace,
        LogTag::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogTag::Info => "INFO",
            LogTag::Warning => "WARNING",
            LogTag::Error => "ERROR",
            LogTag::Trace => "TRACE",
            LogTag::Debug => "DEBUG",
        }
    }

    /// Bit used by [`TagSet`](super::TagSet)
    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogTag::Info),
            "WARNING" | "WARN" => Ok(LogTag::Warning),
            "ERROR" => Ok(LogTag::Error),
            "TRACE" => Ok(LogTag::Trace),
            "DEBUG" => Ok(LogTag::Debug),
            _ => Err(format!("Invalid log tag: '{}'", s)),
        }
    }
}

impl From<log::Level> for LogTag {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogTag::Error,
            log::Level::Warn => LogTag::Warning,
            log::Level::Info => LogTag::Info,
            log::Level::Debug => LogTag::Debug,
            log::Level::Trace => LogTag::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_uppercase_name() {
        assert_eq!(LogTag::Info.to_string(), "INFO");
        assert_eq!(LogTag::Warning.to_string(), "WARNING");
        assert_eq!(LogTag::Debug.to_string(), "DEBUG");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogTag>(), Ok(LogTag::Warning));
        assert_eq!("Warn".parse::<LogTag>(), Ok(LogTag::Warning));
        assert_eq!("TRACE".parse::<LogTag>(), Ok(LogTag::Trace));
        assert!("fatal".parse::<LogTag>().is_err());
    }

    #[test]
    fn test_bits_are_distinct() {
        let mut seen = 0u8;
        for tag in LogTag::ALL {
            assert_eq!(seen & tag.bit(), 0);
            seen |= tag.bit();
        }
        assert_eq!(seen, 0b1_1111);
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(LogTag::from(log::Level::Warn), LogTag::Warning);
        assert_eq!(LogTag::from(log::Level::Error), LogTag::Error);
        assert_eq!(LogTag::from(log::Level::Trace), LogTag::Trace);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&LogTag::Warning).expect("serialize");
        assert_eq!(json, "\"Warning\"");
        let tag: LogTag = serde_json::from_str("\"Debug\"").expect("deserialize");
        assert_eq!(tag, LogTag::Debug);
    }
}
