//! The prelude is enough for the common path.

use tagval::prelude::*;

#[derive(Record)]
struct Login {
    #[validate("required;min:3")]
    user: String,
    #[validate("required")]
    attempts: u32,
}

#[test]
fn prelude_covers_common_path() {
    let registry = RuleRegistry::builtin();
    let validator = Validator::new(&registry);

    let outcome = validator
        .validate(
            &Login {
                user: "bob".into(),
                attempts: 1,
            },
            None,
        )
        .unwrap();
    assert!(outcome.is_valid());

    let outcome = validator
        .validate(
            &Login {
                user: "bo".into(),
                attempts: 0,
            },
            None,
        )
        .unwrap();
    let rules: Vec<&str> = outcome.errors().iter().map(ErrorEntry::rule_name).collect();
    assert_eq!(rules, ["min", "required"]);
}
