//! Validation issues, reports, and options.

use std::fmt;

use serde::Serialize;

/// Structural error kinds. Any of these makes a tree invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    InvalidType,
    MissingRequiredField,
    InvalidNesting,
    InvalidSlot,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "invalid-type",
            ErrorKind::MissingRequiredField => "missing-required-field",
            ErrorKind::InvalidNesting => "invalid-nesting",
            ErrorKind::InvalidSlot => "invalid-slot",
        }
    }
}

/// Advisory warning kinds. Never affect validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    DeprecatedValue,
    PerformanceConcern,
    AccessibilityIssue,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::DeprecatedValue => "deprecated-value",
            WarningKind::PerformanceConcern => "performance-concern",
            WarningKind::AccessibilityIssue => "accessibility-issue",
        }
    }
}

/// One finding, located by node id (when the node has one) and by JSON
/// Pointer into the tree's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue<K> {
    pub kind: K,
    pub node_id: Option<String>,
    pub path: String,
    pub message: String,
}

pub type ValidationError = Issue<ErrorKind>;
pub type ValidationWarning = Issue<WarningKind>;

impl fmt::Display for Issue<ErrorKind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if !self.path.is_empty() {
            write!(f, " (at {})", self.path)?;
        }
        Ok(())
    }
}

impl fmt::Display for Issue<WarningKind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if !self.path.is_empty() {
            write!(f, " (at {})", self.path)?;
        }
        Ok(())
    }
}

/// Result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &ValidationWarning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }
}

/// Options for the validator's advisory checks.
#[derive(Debug, Clone)]
pub struct ValidatorOptions {
    /// Run the soft checks that produce warnings.
    pub warnings: bool,
    /// More default-slot children than this raises `performance-concern`.
    pub child_count_warning: usize,
    /// Nodes deeper than this raise `performance-concern`.
    pub depth_warning: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            warnings: true,
            child_count_warning: 100,
            depth_warning: 32,
        }
    }
}
