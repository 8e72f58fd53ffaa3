//! # tagval
//!
//! Declarative, tag-driven validation for Rust records.
//!
//! Fields carry rule declarations such as `"required;min:3"`. A [`Validator`]
//! resolves each rule name against a [`RuleRegistry`], evaluates it on the
//! live field value, recurses into nested records and reports every
//! violation with a dot-qualified path.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tagval::prelude::*;
//!
//! #[derive(Record)]
//! struct Customer {
//!     #[validate("required;len:64")]
//!     email: String,
//! }
//!
//! #[derive(Record)]
//! struct Order {
//!     #[validate("required")]
//!     id: String,
//!     #[validate("array-unique:Sku,false")]
//!     lines: Vec<Line>,
//!     customer: Option<Customer>,
//! }
//!
//! let registry = RuleRegistry::builtin();
//! let outcome = Validator::new(&registry).validate(&order, None)?;
//! for entry in outcome.errors() {
//!     println!("{entry}");
//! }
//! ```
//!
//! ## Declarations
//!
//! Rules are separated by `;`, a rule name and its restrictions by `:` and
//! restrictions by `,`. A rule without restrictions receives the single
//! restriction `"1"`. Delimiters are configurable through [`Delimiters`].
//!
//! ## Policies
//!
//! Unknown rule names are skipped and malformed restrictions are reported as
//! ordinary violations. [`ValidatorConfig`] turns either into a
//! [`ValidatorError`].

extern crate self as tagval;

pub mod config;
pub mod declaration;
pub mod engine;
pub mod error;
mod macros;
pub mod outcome;
pub mod prelude;
pub mod record;
pub mod reflect;
pub mod registry;
pub mod required;
pub mod rule;
pub mod rules;

pub use config::{CollectionLength, Delimiters, StringLength, ValidatorConfig};
pub use declaration::{FieldDeclaration, RuleSpecs, parse_declaration, parse_record};
pub use engine::Validator;
pub use error::{ConfigError, ErrorEntry, ErrorList, RestrictionError, ValidatorError, render_entries};
pub use outcome::Outcome;
pub use record::{FieldSchema, Record};
pub use reflect::{Kind, Reflect, Value};
pub use registry::{RuleConstructor, RuleRegistry, RuleRegistryBuilder};
pub use required::check_required_keys;
pub use rule::{Failure, Rule, RuleContext, RuleOptions, Verdict};

/// `#[derive(Record)]`: builds the field table and the [`Reflect`] impl.
#[cfg(feature = "derive")]
pub use tagval_macros::Record;
