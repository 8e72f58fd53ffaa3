//! Records with declarations, skipped fields and nested records.

use tagval::{Kind, Record, Reflect, RuleRegistry, Validator};

#[derive(Record)]
pub struct Address {
    #[validate("required")]
    city: String,
    #[validate = "len:10"]
    zip: String,
}

#[derive(Record)]
pub struct Customer {
    #[validate("required;min:3")]
    name: String,
    #[validate(skip)]
    cache: std::cell::Cell<u8>,
    address: Option<Box<Address>>,
    tags: Option<Vec<String>>,
    r#type: u8,
}

#[derive(Record)]
pub struct Empty {}

fn main() {
    let customer = Customer {
        name: "Ann".into(),
        cache: std::cell::Cell::new(0),
        address: Some(Box::new(Address {
            city: "Oslo".into(),
            zip: "0150".into(),
        })),
        tags: None,
        r#type: 1,
    };

    let names: Vec<&str> = customer.fields().iter().map(|f| f.name).collect();
    assert_eq!(names, ["name", "address", "tags", "type"]);
    assert_eq!(customer.fields()[1].kind, Kind::Ref);
    assert!(customer.fields()[1].nested);
    assert_eq!(customer.fields()[2].kind, Kind::Slice);
    assert_eq!(<Customer as Reflect>::KIND, Kind::Record);
    assert!(Empty {}.fields().is_empty());

    let registry = RuleRegistry::builtin();
    let outcome = Validator::new(&registry).validate(&customer, None);
    assert!(outcome.is_ok_and(|o| o.is_valid()));
}
