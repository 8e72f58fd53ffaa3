//! Error types
//!
//! Two families live here:
//!
//! - [`ErrorEntry`] / [`ErrorList`]: rule violations. They are the expected
//!   negative outcome of validation and are returned inside an
//!   [`Outcome`](crate::Outcome), never as `Err`.
//! - [`ValidatorError`], [`RestrictionError`], [`ConfigError`]: configuration
//!   problems. Malformed restrictions and unknown rules only surface as
//!   [`ValidatorError`] when the matching strict policy is enabled.

use std::fmt;

use serde::Serialize;

// ============================================================================
// ERROR ENTRY
// ============================================================================

/// One rule violation at one field path.
///
/// Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[error("Validation error -> Field: \"{field_path}\", Rule:\"{rule_name}\", Message: \"{message}\"")]
pub struct ErrorEntry {
    field_path: String,
    rule_name: String,
    message: String,
}

impl ErrorEntry {
    /// Creates an entry.
    pub fn new(
        field_path: impl Into<String>,
        rule_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            rule_name: rule_name.into(),
            message: message.into(),
        }
    }

    /// Dot-qualified path, e.g. `Order.Customer.email`.
    #[must_use]
    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Name of the rule that failed.
    #[must_use]
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// ERROR LIST
// ============================================================================

/// Append-only, ordered collection of [`ErrorEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList {
    entries: Vec<ErrorEntry>,
}

impl ErrorList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one entry.
    pub fn push(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    /// Appends entries in order.
    pub fn append<I: IntoIterator<Item = ErrorEntry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[ErrorEntry] {
        &self.entries
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<ErrorEntry> {
        self.entries
    }
}

impl FromIterator<ErrorEntry> for ErrorList {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_entries(self.entries.iter().map(Some)))
    }
}

impl std::error::Error for ErrorList {}

/// Renders entries comma-separated, skipping `None` slots.
///
/// ```rust,ignore
/// let entry = ErrorEntry::new("User.name", "required", "missing");
/// let text = render_entries([None, Some(&entry)]);
/// assert_eq!(text, entry.to_string());
/// ```
pub fn render_entries<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = Option<&'a ErrorEntry>>,
{
    entries
        .into_iter()
        .flatten()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// A rule's restriction list cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RestrictionError {
    /// Fewer restrictions were declared than the rule needs.
    #[error("expected at least {expected} restriction(s), got {actual}")]
    TooFew {
        /// Count the rule requires.
        expected: usize,
        /// Count that was declared.
        actual: usize,
    },

    /// A numeric bound is not an integer.
    #[error("restriction `{value}` is not an integer")]
    NotAnInteger {
        /// The offending restriction.
        value: String,
    },

    /// A numeric bound is below the smallest value the rule accepts.
    #[error("bound {value} is below the minimum of {minimum}")]
    BelowMinimum {
        /// The parsed bound.
        value: i64,
        /// Smallest accepted bound.
        minimum: i64,
    },

    /// A flag restriction is not a boolean.
    #[error("restriction `{value}` is not a boolean")]
    NotABool {
        /// The offending restriction.
        value: String,
    },
}

/// Validation could not run to completion under a strict policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// A declared rule has no registered constructor.
    #[error("rule `{rule}` declared on `{field_path}` is not registered")]
    UnknownRule {
        /// Field the rule was declared on.
        field_path: String,
        /// The unresolved rule name.
        rule: String,
    },

    /// A declared rule carries restrictions it cannot interpret.
    #[error("rule `{rule}` declared on `{field_path}` is misconfigured: {source}")]
    Restriction {
        /// Field the rule was declared on.
        field_path: String,
        /// The rule name.
        rule: String,
        /// What is wrong with the restrictions.
        #[source]
        source: RestrictionError,
    },
}

/// Invalid [`ValidatorConfig`](crate::ValidatorConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A delimiter token is empty.
    #[error("the {which} delimiter must not be empty")]
    EmptyDelimiter {
        /// Which delimiter.
        which: &'static str,
    },

    /// Two delimiters use the same token.
    #[error("the {first} and {second} delimiters are both `{token}`")]
    ClashingDelimiters {
        /// First delimiter.
        first: &'static str,
        /// Second delimiter.
        second: &'static str,
        /// Shared token.
        token: String,
    },

    /// The configuration document could not be deserialized.
    #[error("invalid validator config: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================
