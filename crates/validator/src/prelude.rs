//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use tagval::prelude::*;
//!
//! let registry = RuleRegistry::builtin();
//! let validator = Validator::new(&registry);
//! ```

pub use crate::config::{CollectionLength, Delimiters, StringLength, ValidatorConfig};
pub use crate::engine::Validator;
pub use crate::error::{ErrorEntry, ErrorList, ValidatorError};
pub use crate::outcome::Outcome;
pub use crate::Record;
pub use crate::reflect::{Reflect, Value};
pub use crate::registry::RuleRegistry;
pub use crate::rule::{Failure, Rule, RuleContext};
