//! Validation outcome

use std::fmt;

use serde::Serialize;

use crate::error::{ErrorEntry, ErrorList};

/// Success flag plus the ordered list of violations.
///
/// `valid` reflects the record traversal only. Entries produced by the
/// required-keys check are listed in `errors` without touching it, and a
/// structural failure (absent or non-record input) is `valid == false` with
/// no entries at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    valid: bool,
    errors: ErrorList,
}

impl Outcome {
    pub(crate) fn success() -> Self {
        Self {
            valid: true,
            errors: ErrorList::new(),
        }
    }

    pub(crate) fn structural_failure() -> Self {
        Self {
            valid: false,
            errors: ErrorList::new(),
        }
    }

    pub(crate) fn record_violation(&mut self, entry: ErrorEntry) {
        self.valid = false;
        self.errors.push(entry);
    }

    /// Appends a nested outcome. A passing child never upgrades `valid`.
    pub(crate) fn absorb(&mut self, child: Outcome) {
        self.valid = self.valid && child.valid;
        self.errors.append(child.errors);
    }

    pub(crate) fn append_unflagged<I: IntoIterator<Item = ErrorEntry>>(&mut self, entries: I) {
        self.errors.append(entries);
    }

    /// True iff the traversal found no violation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Violations in field order, then recursion order.
    #[must_use]
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Splits into the flag and the list.
    #[must_use]
    pub fn into_parts(self) -> (bool, ErrorList) {
        (self.valid, self.errors)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.errors, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_child_does_not_upgrade() {
        let mut parent = Outcome::success();
        parent.record_violation(ErrorEntry::new("A.x", "min", "m"));
        parent.absorb(Outcome::success());
        assert!(!parent.is_valid());
        assert_eq!(parent.errors().len(), 1);
    }

    #[test]
    fn failing_child_downgrades() {
        let mut child = Outcome::success();
        child.record_violation(ErrorEntry::new("A.B.y", "required", "m"));

        let mut parent = Outcome::success();
        parent.absorb(child);
        assert!(!parent.is_valid());
        assert_eq!(parent.errors().as_slice()[0].field_path(), "A.B.y");
    }

    #[test]
    fn unflagged_entries_keep_validity() {
        let mut outcome = Outcome::success();
        outcome.append_unflagged([ErrorEntry::new("email", "required", "No field provided")]);
        let (valid, errors) = outcome.into_parts();
        assert!(valid);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn structural_failure_has_no_entries() {
        let outcome = Outcome::structural_failure();
        assert!(!outcome.is_valid());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.to_string(), "");
    }

    #[test]
    fn serializes_flag_and_entries() {
        let mut outcome = Outcome::success();
        outcome.record_violation(ErrorEntry::new("A.x", "min", "m"));
        let json = serde_json::to_value(&outcome).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({
                "valid": false,
                "errors": [{"field_path": "A.x", "rule_name": "min", "message": "m"}]
            }))
        );
    }
}
