//! `array-unique:<KeyField>,<empty-allowed>`
//!
//! Scalar elements are compared by value: `-0.0` equals `0.0` and `NaN`
//! equals nothing. Record elements, or present references to records, are
//! compared by the string representation of the field named by the first
//! restriction, so integer keys compare by their decimal form.

use std::collections::HashSet;

use tracing::debug;

use super::parse_flag;
use crate::error::RestrictionError;
use crate::reflect::{Kind, Value};
use crate::rule::Failure;

/// Identity of one element for duplicate detection.
#[derive(Debug, PartialEq, Eq, Hash)]
enum ElementKey {
    Text(Kind, String),
    Float(u64),
}

crate::rule! {
    /// Fails on duplicate elements of a slice, array or map's values.
    pub ArrayUnique = "array-unique", restrictions: 2;
    check(self, value) {
        let key_field = self.context.restriction(0).unwrap_or_default();
        let empty_allowed = self.empty_allowed()?;

        let elements: Vec<&Value<'_>> = match value {
            Value::Slice(Some(items)) | Value::Array(items) => items.iter().collect(),
            Value::Map(Some(entries)) => entries.iter().map(|(_, v)| v).collect(),
            Value::Slice(None) | Value::Map(None) => {
                debug!(field = self.context.field_name(), "absent collection");
                return Err(Failure::Violated);
            }
            other => {
                debug!(field = self.context.field_name(), kind = %other.kind(), "unsupported container");
                return Err(Failure::Violated);
            }
        };

        if elements.is_empty() && !empty_allowed {
            debug!(field = self.context.field_name(), "empty collection");
            return Err(Failure::Violated);
        }

        let mut seen: HashSet<ElementKey> = HashSet::with_capacity(elements.len());
        let mut duplicate = false;

        for (index, element) in elements.into_iter().enumerate() {
            let key = match element {
                Value::Float(n) if n.is_nan() => continue,
                // `-0.0 + 0.0` is `+0.0`.
                Value::Float(n) => ElementKey::Float((n + 0.0).to_bits()),
                Value::Str(_) | Value::Int(_) | Value::Uint(_) => {
                    ElementKey::Text(element.kind(), element.repr().into_owned())
                }
                Value::Record(_) | Value::Ref(Some(_)) => {
                    let Some(record) = element.as_record() else {
                        debug!(field = self.context.field_name(), index, "element is not a record");
                        return Err(Failure::Violated);
                    };
                    let Some(field) = record.field_by_name(key_field) else {
                        debug!(field = self.context.field_name(), index, key_field, "element has no key field");
                        duplicate = true;
                        continue;
                    };
                    let repr = field.repr();
                    if repr.is_empty() {
                        debug!(field = self.context.field_name(), index, key_field, "empty key field");
                        duplicate = true;
                        continue;
                    }
                    ElementKey::Text(Kind::Str, repr.into_owned())
                }
                other => {
                    debug!(field = self.context.field_name(), index, kind = %other.kind(), "unsupported element");
                    return Err(Failure::Violated);
                }
            };

            if !seen.insert(key) {
                debug!(field = self.context.field_name(), index, "duplicate element");
                duplicate = true;
            }
        }

        if duplicate { Err(Failure::Violated) } else { Ok(()) }
    }
}

impl ArrayUnique {
    /// Reads the empty-allowed flag. Unparsable flags count as `false`
    /// unless restrictions are strict.
    fn empty_allowed(&self) -> Result<bool, RestrictionError> {
        let raw = self.context.restriction(1).unwrap_or_default();
        match parse_flag(raw) {
            Some(flag) => Ok(flag),
            None if self.context.options().strict_restrictions => Err(RestrictionError::NotABool {
                value: raw.to_owned(),
            }),
            None => {
                debug!(field = self.context.field_name(), flag = raw, "unparsable empty-allowed flag");
                Ok(false)
            }
        }
    }
}
