//! Built-in rules
//!
//! | Name | Rule | Restrictions |
//! |------|------|--------------|
//! | `required` | [`Required`] | none |
//! | `min` | [`Min`] | lower bound ≥ 0 |
//! | `max` | [`Max`] | upper bound ≥ 1 |
//! | `len` | [`Len`] | upper bound ≥ 0 (strings only) |
//! | `positive` | [`Positive`] | none |
//! | `array-unique` | [`ArrayUnique`] | key field name, empty-allowed flag |
//!
//! Categories a rule does not list pass that rule.

mod array_unique;
mod bounds;
mod len;
mod positive;
mod required;

pub use array_unique::ArrayUnique;
pub use bounds::{Max, Min};
pub use len::Len;
pub use positive::Positive;
pub use required::Required;

use crate::config::CollectionLength;
use crate::reflect::Value;
use crate::rule::RuleOptions;

/// Parses a boolean the way declaration flags are written:
/// `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Quantity a length or bound rule compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Measure {
    /// An absent slice or map.
    Absent,
    /// A length or an integer value.
    Quantity(i128),
    /// A category the rule does not check.
    Unchecked,
}

/// Measures `value` for `min` / `max`.
///
/// Arrays count elements and integers are their own measure. Strings
/// depend on `options.string_length`, slices and maps on
/// `options.collection_length`.
pub(crate) fn measure(value: &Value<'_>, options: RuleOptions) -> Measure {
    match value {
        Value::Str(s) => Measure::Quantity(options.string_length.count(s) as i128),
        Value::Slice(None) | Value::Map(None) => Measure::Absent,
        Value::Slice(Some(_)) | Value::Map(Some(_)) => match options.collection_length {
            CollectionLength::Literal => Measure::Quantity(value.repr().len() as i128),
            CollectionLength::ElementCount => {
                Measure::Quantity(value.element_count().unwrap_or_default() as i128)
            }
        },
        Value::Array(items) => Measure::Quantity(items.len() as i128),
        Value::Int(n) => Measure::Quantity(i128::from(*n)),
        Value::Uint(n) => Measure::Quantity(i128::from(*n)),
        _ => Measure::Unchecked,
    }
}
