//! Basic usage example for tagval
//!
//! Run with `RUST_LOG=tagval=trace` to see per-field evaluation.

use serde_json::json;
use tagval::{Record, RuleRegistry, Validator, ValidatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Record)]
struct Address {
    #[validate("required")]
    city: String,
    #[validate("len:10")]
    zip: String,
}

#[derive(Record)]
#[allow(non_snake_case)]
struct Tag {
    #[validate("required")]
    Name: String,
}

#[derive(Record)]
struct Customer {
    #[validate("required;min:3")]
    name: String,
    #[validate("positive")]
    balance: i64,
    #[validate("array-unique:Name,true")]
    tags: Vec<Tag>,
    #[validate("required;gravatar")]
    avatar: String,
    address: Option<Address>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let registry = RuleRegistry::builtin();
    let validator = Validator::new(&registry);

    let customer = Customer {
        name: "Jo".into(),
        balance: -20,
        tags: vec![
            Tag { Name: "vip".into() },
            Tag { Name: "vip".into() },
        ],
        avatar: "jo.png".into(),
        address: Some(Address {
            city: String::new(),
            zip: "75001-CEDEX-01".into(),
        }),
    };

    let form = json!({ "email": "", "phone": "+33 1 23 45 67 89" });
    let outcome = validator.validate(&customer, form.as_object())?;

    println!("valid: {}", outcome.is_valid());
    for entry in outcome.errors() {
        println!("  {entry}");
    }

    // `gravatar` is not registered: skipped by default, an error when strict.
    let strict = Validator::with_config(
        &registry,
        ValidatorConfig::default().with_strict_unknown_rules(true),
    )?;
    match strict.validate(&customer, None) {
        Ok(outcome) => println!("strict: valid = {}", outcome.is_valid()),
        Err(err) => println!("strict: {err}"),
    }

    Ok(())
}
