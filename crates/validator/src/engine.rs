//! Traversal engine
//!
//! [`Validator`] walks a record's field table, builds one rule per declared
//! (field, rule) pair through the registry, and recurses into nested records.
//!
//! Paths are built top-down: a field `email` on `Customer`, reached through
//! the `customer` field of `Order`, is reported as `Order.Customer.email`.
//!
//! ```rust,ignore
//! use tagval::{Record, RuleRegistry, Validator};
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate("required;min:3")]
//!     login: String,
//! }
//!
//! let registry = RuleRegistry::builtin();
//! let validator = Validator::new(&registry);
//! let (valid, errors) = validator
//!     .validate(&Signup { login: "al".into() }, None)?
//!     .into_parts();
//!
//! assert!(!valid);
//! assert_eq!(errors.as_slice()[0].field_path(), "Signup.login");
//! ```

use serde_json::Map;
use tracing::{debug, trace};

use crate::config::ValidatorConfig;
use crate::declaration::{FieldDeclaration, parse_record};
use crate::error::{ConfigError, ErrorEntry, ValidatorError};
use crate::outcome::Outcome;
use crate::record::Record;
use crate::reflect::{Reflect, Value};
use crate::registry::RuleRegistry;
use crate::required::check_required_keys;
use crate::rule::{Failure, RuleContext, RuleOptions};

/// Validates records against a borrowed [`RuleRegistry`].
///
/// Holds no per-call state; one validator can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Validator<'r> {
    registry: &'r RuleRegistry,
    config: ValidatorConfig,
}

impl<'r> Validator<'r> {
    /// Creates a validator with the default configuration.
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    /// Creates a validator after checking `config`.
    pub fn with_config(
        registry: &'r RuleRegistry,
        config: ValidatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// The registry rules are resolved against.
    pub fn registry(&self) -> &'r RuleRegistry {
        self.registry
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `record`, then appends required-key entries for
    /// `required_keys`.
    ///
    /// An absent record, or anything that is not a record after one
    /// dereference, is invalid with no entries. Required-key entries never
    /// change the validity flag.
    ///
    /// # Errors
    ///
    /// Only under strict policies: [`ValidatorError::UnknownRule`] for a
    /// declared rule missing from the registry and
    /// [`ValidatorError::Restriction`] for malformed restrictions.
    pub fn validate<T: Reflect + ?Sized>(
        &self,
        record: &T,
        required_keys: Option<&Map<String, serde_json::Value>>,
    ) -> Result<Outcome, ValidatorError> {
        let mut outcome = self.evaluate_value(&record.reflect())?;

        if let Some(data) = required_keys {
            outcome.append_unflagged(check_required_keys(data));
        }

        Ok(outcome)
    }

    fn evaluate_value(&self, value: &Value<'_>) -> Result<Outcome, ValidatorError> {
        if let Value::Ref(None) = value {
            debug!("absent record");
            return Ok(Outcome::structural_failure());
        }

        match value.as_record() {
            Some(record) => self.evaluate(record, ""),
            None => {
                debug!(kind = %value.kind(), "value is not a record");
                Ok(Outcome::structural_failure())
            }
        }
    }

    /// Evaluates every declared rule of `record`, then its nested records.
    ///
    /// `prefix` is the dot-joined chain of enclosing type names, empty at
    /// the top level.
    pub fn evaluate(&self, record: &dyn Record, prefix: &str) -> Result<Outcome, ValidatorError> {
        let type_path = join(prefix, record.type_name());
        let declarations = parse_record(record, &self.config.delimiters);
        let mut outcome = Outcome::success();

        for field in declarations.iter().filter(|field| field.has_rules()) {
            self.evaluate_field(record, field, &type_path, &mut outcome)?;
        }

        for field in declarations.iter().filter(|field| field.nested) {
            let Some(value) = record.field_value(field.index) else {
                continue;
            };
            if let Some(child) = value.as_record() {
                trace!(path = %type_path, field = field.name, "descending");
                outcome.absorb(self.evaluate(child, &type_path)?);
            }
        }

        Ok(outcome)
    }

    fn evaluate_field(
        &self,
        record: &dyn Record,
        field: &FieldDeclaration,
        type_path: &str,
        outcome: &mut Outcome,
    ) -> Result<(), ValidatorError> {
        let field_path = join(type_path, field.name);
        let Some(value) = record.field_value(field.index) else {
            debug!(path = %field_path, "field value unavailable");
            return Ok(());
        };

        trace!(path = %field_path, kind = %field.kind, rules = field.rules.len(), "evaluating field");

        for (name, restrictions) in &field.rules {
            let Some(constructor) = self.registry.resolve(name) else {
                if self.config.strict_unknown_rules {
                    return Err(ValidatorError::UnknownRule {
                        field_path,
                        rule: name.clone(),
                    });
                }
                debug!(path = %field_path, rule = %name, "skipping unregistered rule");
                continue;
            };

            let context =
                RuleContext::new(field.name, name.as_str(), restrictions.clone()).with_options(self.rule_options());
            let rule = constructor(context);
            let verdict = rule.validate(&value);

            match verdict.failure() {
                None => {}
                Some(Failure::Restriction(source)) if self.config.strict_restrictions => {
                    return Err(ValidatorError::Restriction {
                        field_path,
                        rule: name.clone(),
                        source: source.clone(),
                    });
                }
                Some(_) => outcome.record_violation(ErrorEntry::new(
                    field_path.as_str(),
                    name.as_str(),
                    verdict.error_message(),
                )),
            }
        }

        Ok(())
    }

    fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            strict_restrictions: self.config.strict_restrictions,
            collection_length: self.config.collection_length,
            string_length: self.config.string_length,
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldSchema;
    use crate::reflect::Kind;
    use pretty_assertions::assert_eq;

    struct Inner {
        code: String,
    }

    impl Record for Inner {
        fn type_name(&self) -> &'static str {
            "Inner"
        }

        fn fields(&self) -> &'static [FieldSchema] {
            const FIELDS: &[FieldSchema] =
                &[FieldSchema::new("code", Some("required"), Kind::Str, false)];
            FIELDS
        }

        fn field_value(&self, index: usize) -> Option<Value<'_>> {
            match index {
                0 => Some(self.code.reflect()),
                _ => None,
            }
        }
    }

    impl Reflect for Inner {
        const KIND: Kind = Kind::Record;

        fn reflect(&self) -> Value<'_> {
            Value::Record(self)
        }
    }

    struct Outer {
        name: String,
        inner: Option<Inner>,
    }

    impl Record for Outer {
        fn type_name(&self) -> &'static str {
            "Outer"
        }

        fn fields(&self) -> &'static [FieldSchema] {
            const FIELDS: &[FieldSchema] = &[
                FieldSchema::new("name", Some("min:3;unknown"), Kind::Str, false),
                FieldSchema::new("inner", None, Kind::Ref, true),
            ];
            FIELDS
        }

        fn field_value(&self, index: usize) -> Option<Value<'_>> {
            match index {
                0 => Some(self.name.reflect()),
                1 => Some(self.inner.reflect()),
                _ => None,
            }
        }
    }

    impl Reflect for Outer {
        const KIND: Kind = Kind::Record;

        fn reflect(&self) -> Value<'_> {
            Value::Record(self)
        }
    }

    fn outer(name: &str, inner: Option<&str>) -> Outer {
        Outer {
            name: name.to_owned(),
            inner: inner.map(|code| Inner {
                code: code.to_owned(),
            }),
        }
    }

    fn paths(outcome: &Outcome) -> Vec<(&str, &str)> {
        outcome
            .errors()
            .iter()
            .map(|e| (e.field_path(), e.rule_name()))
            .collect()
    }

    #[test]
    fn join_omits_empty_prefix() {
        assert_eq!(join("", "User"), "User");
        assert_eq!(join("Order", "User"), "Order.User");
    }

    #[test]
    fn valid_record() {
        let registry = RuleRegistry::builtin();
        let outcome = Validator::new(&registry).validate(&outer("abc", Some("x")), None);
        assert_eq!(outcome.map(|o| o.into_parts().0), Ok(true));
    }

    #[test]
    fn violations_are_path_qualified() {
        let registry = RuleRegistry::builtin();
        let outcome = Validator::new(&registry)
            .validate(&outer("ab", Some("")), None)
            .unwrap();
        assert!(!outcome.is_valid());
        assert_eq!(
            paths(&outcome),
            vec![("Outer.name", "min"), ("Outer.Inner.code", "required")]
        );
        assert_eq!(
            outcome.errors().as_slice()[1].message(),
            "Field 'code' failed to pass required validation rule"
        );
    }

    #[test]
    fn absent_nested_record_is_skipped() {
        let registry = RuleRegistry::builtin();
        let outcome = Validator::new(&registry)
            .validate(&outer("abc", None), None)
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn absent_top_level_record_fails_without_entries() {
        let registry = RuleRegistry::builtin();
        let missing: Option<Outer> = None;
        let outcome = Validator::new(&registry).validate(&missing, None).unwrap();
        assert!(!outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn non_record_input_fails_without_entries() {
        let registry = RuleRegistry::builtin();
        let outcome = Validator::new(&registry).validate("text", None).unwrap();
        assert!(!outcome.is_valid());
        assert!(outcome.errors().is_empty());

        let twice: Option<Option<Outer>> = Some(Some(outer("abc", None)));
        let outcome = Validator::new(&registry).validate(&twice, None).unwrap();
        assert!(!outcome.is_valid());
    }

    #[test]
    fn strict_unknown_rules() {
        let registry = RuleRegistry::builtin();
        let config = ValidatorConfig::default().with_strict_unknown_rules(true);
        let validator = Validator::with_config(&registry, config).unwrap();
        assert_eq!(
            validator.validate(&outer("abc", None), None),
            Err(ValidatorError::UnknownRule {
                field_path: "Outer.name".into(),
                rule: "unknown".into(),
            })
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let registry = RuleRegistry::builtin();
        let mut config = ValidatorConfig::default();
        config.delimiters.values = ";".into();
        assert!(Validator::with_config(&registry, config).is_err());
    }
}
