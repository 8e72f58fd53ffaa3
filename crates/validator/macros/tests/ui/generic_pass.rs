//! Generic records get a `Reflect` bound on their type parameters.

use tagval::{Record, RuleRegistry, Validator};

#[derive(Record)]
pub struct Page<'a, T> {
    #[validate("required")]
    title: &'a str,
    #[validate("array-unique:Id,true")]
    items: Vec<T>,
}

#[derive(Record)]
pub struct Item {
    #[validate("required")]
    #[allow(non_snake_case)]
    Id: String,
}

fn main() {
    let page = Page {
        title: "first",
        items: vec![Item { Id: "a".into() }, Item { Id: "a".into() }],
    };

    assert_eq!(page.type_name(), "Page");
    let registry = RuleRegistry::builtin();
    let outcome = Validator::new(&registry).validate(&page, None);
    assert!(outcome.is_ok_and(|o| !o.is_valid()));
}
