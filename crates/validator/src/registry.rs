//! Rule registry
//!
//! Maps rule names to constructors. A registry is built once, then shared
//! read-only by every [`Validator`](crate::Validator) that borrows it; there
//! is no process-wide instance.
//!
//! ```rust,ignore
//! use tagval::{RuleRegistry, rules::Required};
//!
//! let registry = RuleRegistry::builder()
//!     .with_builtin()
//!     .rule("present", Required::new)
//!     .build();
//!
//! assert!(registry.contains("present"));
//! assert!(!registry.contains("Present"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::rule::{Rule, RuleContext};
use crate::rules::{ArrayUnique, Len, Max, Min, Positive, Required};

/// Builds a rule instance bound to one field's context.
pub type RuleConstructor = Arc<dyn Fn(RuleContext) -> Box<dyn Rule> + Send + Sync>;

/// Immutable mapping from rule name to constructor.
///
/// Lookup is an exact, case-sensitive match.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, RuleConstructor>,
}

impl RuleRegistry {
    /// Creates a registry from an existing mapping.
    pub fn new(rules: HashMap<String, RuleConstructor>) -> Self {
        Self { rules }
    }

    /// Creates a registry with no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a registry.
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// Creates a registry holding only the built-in rules.
    pub fn builtin() -> Self {
        Self::builder().with_builtin().build()
    }

    /// Returns the constructor registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&RuleConstructor> {
        self.rules.get(name)
    }

    /// Checks whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

/// Builder for [`RuleRegistry`]. Later registrations under the same name
/// replace earlier ones.
#[derive(Default)]
pub struct RuleRegistryBuilder {
    rules: HashMap<String, RuleConstructor>,
}

impl RuleRegistryBuilder {
    /// Registers `constructor` under `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<F, R>(mut self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(RuleContext) -> R + Send + Sync + 'static,
        R: Rule + 'static,
    {
        let constructor: RuleConstructor =
            Arc::new(move |context| Box::new(constructor(context)) as Box<dyn Rule>);
        self.rules.insert(name.into(), constructor);
        self
    }

    /// Registers every built-in rule under its default name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_builtin(self) -> Self {
        self.rule(Required::NAME, Required::new)
            .rule(Min::NAME, Min::new)
            .rule(Max::NAME, Max::new)
            .rule(Len::NAME, Len::new)
            .rule(Positive::NAME, Positive::new)
            .rule(ArrayUnique::NAME, ArrayUnique::new)
    }

    /// Finishes the registry.
    pub fn build(self) -> RuleRegistry {
        RuleRegistry::new(self.rules)
    }
}

impl fmt::Debug for RuleRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistryBuilder")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_names() {
        let registry = RuleRegistry::builtin();
        assert_eq!(
            registry.names(),
            vec!["array-unique", "len", "max", "min", "positive", "required"]
        );
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = RuleRegistry::builtin();
        assert!(registry.resolve("required").is_some());
        assert!(registry.resolve("Required").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn constructors_bind_context() {
        let registry = RuleRegistry::builtin();
        let constructor = registry.resolve("min").cloned();
        let rule = constructor.map(|build| build(RuleContext::new("name", "min", vec!["3".into()])));
        let rule = rule.as_deref();
        assert_eq!(rule.map(|r| r.context().min_restrictions()), Some(1));
        assert_eq!(rule.map(|r| r.validate(&Value::Str("ab")).is_successful()), Some(false));
    }

    #[test]
    fn custom_names_and_overrides() {
        let registry = RuleRegistry::builder()
            .rule("present", Required::new)
            .rule("present", Positive::new)
            .build();
        assert_eq!(registry.names(), vec!["present"]);

        let rule = registry
            .resolve("present")
            .map(|build| build(RuleContext::new("n", "present", vec!["1".into()])));
        let verdict = rule.as_deref().map(|r| r.validate(&Value::Int(0)).is_successful());
        assert_eq!(verdict, Some(true));
    }

    #[test]
    fn empty_registry() {
        let registry = RuleRegistry::empty();
        assert!(registry.is_empty());
        assert!(!registry.contains("required"));
        assert_eq!(format!("{registry:?}"), "RuleRegistry { rules: [] }");
    }

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
    }
}
