use crate::reflect::Value;
use crate::rule::Failure;

crate::rule! {
    /// Fails on negative integers and floats. Zero passes.
    pub Positive = "positive", restrictions: 0;
    check(self, value) {
        match value {
            Value::Int(n) if *n < 0 => Err(Failure::Violated),
            Value::Float(n) if *n < 0.0 => Err(Failure::Violated),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, RuleContext};

    fn passes(value: &Value<'_>) -> bool {
        Positive::new(RuleContext::new("balance", "positive", vec!["1".into()]))
            .validate(value)
            .is_successful()
    }

    #[test]
    fn negatives_fail() {
        assert!(!passes(&Value::Int(-1)));
        assert!(!passes(&Value::Float(-0.5)));
    }

    #[test]
    fn zero_and_positives_pass() {
        assert!(passes(&Value::Int(0)));
        assert!(passes(&Value::Int(7)));
        assert!(passes(&Value::Uint(0)));
        assert!(passes(&Value::Float(0.0)));
        assert!(passes(&Value::Float(2.5)));
    }

    #[test]
    fn other_categories_pass() {
        assert!(passes(&Value::Str("-1")));
        assert!(passes(&Value::Ref(None)));
    }
}
