//! Rule protocol
//!
//! A rule is built fresh for every (field, rule) pair from a [`RuleContext`]
//! and evaluated once. Evaluation is a pure function of the context and the
//! field value: [`Rule::validate`] returns a value-typed [`Verdict`] instead
//! of mutating the rule, and never panics on bad input. A violation is an
//! ordinary outcome, not an error.
//!
//! # Implementing a rule
//!
//! The [`rule!`](crate::rule!) macro generates the struct, the constructor
//! and the [`Rule`] impl:
//!
//! ```rust,ignore
//! tagval::rule! {
//!     /// Fails on strings containing whitespace.
//!     pub NoSpaces = "no-spaces", restrictions: 0;
//!     check(self, value) {
//!         match value {
//!             Value::Str(s) if s.contains(char::is_whitespace) => Err(Failure::Violated),
//!             _ => Ok(()),
//!         }
//!     }
//! }
//!
//! let registry = RuleRegistry::builder()
//!     .with_builtin()
//!     .rule(NoSpaces::NAME, NoSpaces::new)
//!     .build();
//! ```

use std::fmt;

use crate::config::{CollectionLength, StringLength};
use crate::error::RestrictionError;
use crate::reflect::Value;

// ============================================================================
// RULE OPTIONS
// ============================================================================

/// Engine policies a rule may need to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleOptions {
    /// Treat recoverable restriction problems as failures.
    pub strict_restrictions: bool,
    /// Measurement used for slices and maps by length rules.
    pub collection_length: CollectionLength,
    /// Measurement used for strings by length rules.
    pub string_length: StringLength,
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Everything one rule instance is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContext {
    field_name: String,
    rule_name: String,
    restrictions: Vec<String>,
    min_restrictions: usize,
    options: RuleOptions,
}

impl RuleContext {
    /// Creates a context for `rule_name` declared on `field_name`.
    pub fn new(
        field_name: impl Into<String>,
        rule_name: impl Into<String>,
        restrictions: Vec<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            rule_name: rule_name.into(),
            restrictions,
            min_restrictions: 0,
            options: RuleOptions::default(),
        }
    }

    /// Attaches engine policies.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    /// Fixes how many restrictions the bound rule needs.
    ///
    /// Called once by the rule's constructor.
    #[must_use = "builder methods must be chained or built"]
    pub fn require(mut self, count: usize) -> Self {
        self.min_restrictions = count;
        self
    }

    /// Name of the field the rule is declared on.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Name the rule was declared under.
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// Declared restriction values.
    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }

    /// Restriction at `index`, if declared.
    pub fn restriction(&self, index: usize) -> Option<&str> {
        self.restrictions.get(index).map(String::as_str)
    }

    /// Minimum restriction count fixed by the rule.
    pub fn min_restrictions(&self) -> usize {
        self.min_restrictions
    }

    /// Engine policies.
    pub fn options(&self) -> RuleOptions {
        self.options
    }

    /// Fails if fewer restrictions were declared than the rule needs.
    pub fn ensure_restrictions(&self) -> Result<(), RestrictionError> {
        if self.restrictions.len() < self.min_restrictions {
            return Err(RestrictionError::TooFew {
                expected: self.min_restrictions,
                actual: self.restrictions.len(),
            });
        }
        Ok(())
    }

    /// Parses the first restriction as an integer bound of at least `minimum`.
    pub fn integer_bound(&self, minimum: i64) -> Result<i64, RestrictionError> {
        let raw = self.restriction(0).ok_or(RestrictionError::TooFew {
            expected: 1,
            actual: 0,
        })?;

        let value: i64 = raw.parse().map_err(|_| RestrictionError::NotAnInteger {
            value: raw.to_owned(),
        })?;

        if value < minimum {
            return Err(RestrictionError::BelowMinimum { value, minimum });
        }

        Ok(value)
    }

    /// Message reported when the rule fails.
    pub fn error_message(&self) -> String {
        format!(
            "Field '{}' failed to pass {} validation rule",
            self.field_name, self.rule_name
        )
    }
}

// ============================================================================
// FAILURE AND VERDICT
// ============================================================================

/// Why a rule did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The value breaks the constraint.
    Violated,
    /// The declared restrictions cannot be interpreted.
    Restriction(RestrictionError),
}

impl From<RestrictionError> for Failure {
    fn from(err: RestrictionError) -> Self {
        Self::Restriction(err)
    }
}

/// Result of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<'r> {
    context: &'r RuleContext,
    failure: Option<Failure>,
}

impl<'r> Verdict<'r> {
    /// Creates a verdict for `context`.
    pub fn new(context: &'r RuleContext, failure: Option<Failure>) -> Self {
        Self { context, failure }
    }

    /// True iff the rule passed.
    pub fn is_successful(&self) -> bool {
        self.failure.is_none()
    }

    /// Why the rule failed, if it did.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Human-readable message naming the field and the rule.
    pub fn error_message(&self) -> String {
        self.context.error_message()
    }

    /// The context the rule was bound to.
    pub fn context(&self) -> &'r RuleContext {
        self.context
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A constraint bound to one field's restrictions.
pub trait Rule: fmt::Debug + Send + Sync {
    /// The bound context.
    fn context(&self) -> &RuleContext;

    /// Evaluates `value`. Restriction counts are checked before this runs.
    fn check(&self, value: &Value<'_>) -> Result<(), Failure>;

    /// Checks the restriction count, then evaluates `value`.
    fn validate(&self, value: &Value<'_>) -> Verdict<'_> {
        let outcome = self
            .context()
            .ensure_restrictions()
            .map_err(Failure::from)
            .and_then(|()| self.check(value));
        Verdict::new(self.context(), outcome.err())
    }
}
