use serde::Serialize;
use std::fmt;

/// Which input file a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSource {
    Catalog,
    Progress,
    Photos,
}

impl WarningSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningSource::Catalog => "catalog",
            WarningSource::Progress => "progress",
            WarningSource::Photos => "photos",
        }
    }
}

/// A value that was coerced or skipped while loading. Loading never fails
/// because of these; they are collected so callers can report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    pub source: WarningSource,
    /// 1-based line in the CSV file (header is line 1), 0 when not tied to a line.
    pub line: usize,
    pub peak: String,
    pub field: String,
    pub value: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(
        source: WarningSource,
        line: usize,
        peak: &str,
        field: &str,
        value: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            line,
            peak: peak.to_string(),
            field: field.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "[{}:{}] ", self.source.as_str(), self.line)?;
        } else {
            write!(f, "[{}] ", self.source.as_str())?;
        }
        if !self.peak.is_empty() {
            write!(f, "{}: ", self.peak)?;
        }
        if self.value.is_empty() {
            write!(f, "{} {}", self.field, self.message)
        } else {
            write!(f, "{} '{}' {}", self.field, self.value, self.message)
        }
    }
}
