//! Property-based tests for declaration parsing.

use proptest::prelude::*;
use tagval::{Delimiters, parse_declaration};

fn rule_name() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,12}"
}

fn restriction() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,8}"
}

// ============================================================================
// IMPLICIT RESTRICTION: `name` == `name:1`
// ============================================================================

proptest! {
    #[test]
    fn bare_rule_gets_implicit_restriction(name in rule_name()) {
        let rules = parse_declaration(&name, &Delimiters::default());
        prop_assert_eq!(rules.len(), 1);
        prop_assert_eq!(rules.get(&name), Some(&vec!["1".to_owned()]));
    }
}

// ============================================================================
// TRIMMING: surrounding whitespace never reaches names or values
// ============================================================================

proptest! {
    #[test]
    fn names_and_values_are_trimmed(
        name in rule_name(),
        values in prop::collection::vec(restriction(), 1..4),
        pad in "[ \t]{0,3}",
    ) {
        let payload = values
            .iter()
            .map(|v| format!("{pad}{v}{pad}"))
            .collect::<Vec<_>>()
            .join(",");
        let raw = format!("{pad}{name}{pad}:{payload}{pad};");

        let rules = parse_declaration(&raw, &Delimiters::default());
        prop_assert_eq!(rules.get(&name), Some(&values));
    }
}

// ============================================================================
// LAST WRITE WINS: a repeated rule keeps only its final payload
// ============================================================================

proptest! {
    #[test]
    fn last_write_wins(
        name in rule_name(),
        first in restriction(),
        last in restriction(),
        other in rule_name(),
    ) {
        prop_assume!(name != other);
        let raw = format!("{name}:{first};{other};{name}:{last}");

        let rules = parse_declaration(&raw, &Delimiters::default());
        prop_assert_eq!(rules.len(), 2);
        prop_assert_eq!(rules.get(&name), Some(&vec![last]));
        prop_assert_eq!(rules.get_index(0).map(|(k, _)| k.as_str()), Some(name.as_str()));
    }
}

// ============================================================================
// ORDER: rules come out in declaration order
// ============================================================================

proptest! {
    #[test]
    fn declaration_order_is_kept(names in prop::collection::hash_set(rule_name(), 1..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let raw = names.join(";");

        let rules = parse_declaration(&raw, &Delimiters::default());
        let parsed: Vec<&String> = rules.keys().collect();
        let expected: Vec<&String> = names.iter().collect();
        prop_assert_eq!(parsed, expected);
    }
}
