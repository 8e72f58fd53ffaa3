use crate::reflect::Value;
use crate::rule::Failure;

crate::rule! {
    /// Fails on empty strings, absent references, absent or empty
    /// collections, empty arrays and zero numbers.
    pub Required = "required", restrictions: 0;
    check(self, value) {
        let empty = match value {
            Value::Str(s) => s.is_empty(),
            Value::Ref(inner) => inner.is_none(),
            Value::Slice(items) => items.as_ref().is_none_or(Vec::is_empty),
            Value::Map(entries) => entries.as_ref().is_none_or(Vec::is_empty),
            Value::Array(items) => items.is_empty(),
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Bool(_) | Value::Record(_) | Value::Opaque(_) => false,
        };

        if empty { Err(Failure::Violated) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleContext};

    fn passes(value: &Value<'_>) -> bool {
        Required::new(RuleContext::new("f", "required", vec!["1".into()]))
            .validate(value)
            .is_successful()
    }

    #[test]
    fn strings() {
        assert!(passes(&Value::Str("x")));
        assert!(!passes(&Value::Str("")));
    }

    #[test]
    fn references() {
        assert!(!passes(&Value::Ref(None)));
        assert!(passes(&Value::Ref(Some(Box::new(Value::Str(""))))));
    }

    #[test]
    fn collections() {
        assert!(!passes(&Value::Slice(None)));
        assert!(!passes(&Value::Slice(Some(vec![]))));
        assert!(passes(&Value::Slice(Some(vec![Value::Int(0)]))));
        assert!(!passes(&Value::Map(None)));
        assert!(!passes(&Value::Map(Some(vec![]))));
        assert!(!passes(&Value::Array(vec![])));
        assert!(passes(&Value::Array(vec![Value::Bool(false)])));
    }

    #[test]
    fn numbers() {
        assert!(!passes(&Value::Int(0)));
        assert!(passes(&Value::Int(-1)));
        assert!(!passes(&Value::Uint(0)));
        assert!(!passes(&Value::Float(0.0)));
        assert!(passes(&Value::Float(0.1)));
    }

    #[test]
    fn other_categories_pass() {
        assert!(passes(&Value::Bool(false)));
        assert!(passes(&Value::Opaque("std::time::Duration")));
    }
}
