//! Structured configuration issues.
//!
//! Configuration loading never fails on a questionable value; it reports
//! issues with a severity so the caller can decide whether to warn or abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name field is empty.
    EmptyModelName { field: String },
    /// A string field does not match any known value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A width/height pair has a zero side.
    InvalidDimensions { field: String },
    /// The topic catalog is empty.
    EmptyCatalog,
    /// `timeout_seconds` is set to 0.
    InvalidTimeout,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let warn = ConfigIssue::warning(ConfigIssueCode::EmptyCatalog, "no topics");
        let err = ConfigIssue::error(ConfigIssueCode::InvalidTimeout, "zero timeout");
        assert!(!warn.is_error());
        assert!(err.is_error());
        assert_eq!(warn.message, "no topics");
    }
}
