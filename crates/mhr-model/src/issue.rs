//! Validation issues and reports.
//!
//! Rules emit typed issue records in the order they are found. The legacy
//! single-string contract is preserved by `ValidationReport::joined`, which
//! concatenates the message fragments verbatim; consuming layers match on
//! literal substrings of those fragments.

use serde::{Deserialize, Serialize};

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A mandatory field or field combination is missing.
    Structural,
    /// Two related fields contradict each other.
    Consistency,
    /// The target record's status forbids the requested change.
    State,
    /// An external lookup failed or returned not-found.
    External,
    /// An unexpected fault during validation, degraded to a generic message.
    Internal,
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    /// Human-readable message fragment, stable across releases.
    pub message: String,
    /// Dotted path of the offending field, when one field is at fault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Structural, message)
    }

    pub fn consistency(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Consistency, message)
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::new(IssueKind::State, message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new(IssueKind::External, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(IssueKind::Internal, message)
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Ordered accumulation of rule violations for one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: Vec<ValidationIssue>) {
        self.issues.extend(issues);
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true when an issue message contains the given fragment.
    pub fn contains(&self, fragment: &str) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.message.contains(fragment))
    }

    /// Concatenate message fragments into the legacy single-string form.
    /// Empty means the request is valid.
    pub fn joined(&self) -> String {
        self.issues
            .iter()
            .map(|issue| issue.message.as_str())
            .collect()
    }
}
