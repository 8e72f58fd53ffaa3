//! Records and their field descriptor tables
//!
//! A [`Record`] exposes a static table of [`FieldSchema`] entries (name, raw
//! declaration string, category, recursion flag) plus indexed access to the
//! live field values. `#[derive(Record)]` generates both; implementing the
//! trait by hand works the same way.
//!
//! ```rust,ignore
//! use tagval::Record;
//!
//! #[derive(Record)]
//! struct Account {
//!     #[validate("required;min:3")]
//!     login: String,
//!     #[validate("positive")]
//!     balance: i64,
//!     owner: Option<Person>,
//! }
//! ```

use crate::reflect::{Kind, Value};

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSchema {
    /// Field identifier as written in the type.
    pub name: &'static str,
    /// Raw declaration string, if the field carries one.
    pub declaration: Option<&'static str>,
    /// Category of the field's type.
    pub kind: Kind,
    /// Whether the field is a record or a reference to one.
    pub nested: bool,
}

impl FieldSchema {
    /// Creates a field description.
    pub const fn new(
        name: &'static str,
        declaration: Option<&'static str>,
        kind: Kind,
        nested: bool,
    ) -> Self {
        Self {
            name,
            declaration,
            kind,
            nested,
        }
    }
}

/// A structured value whose fields the engine can enumerate.
///
/// The trait is object safe; the engine works on `&dyn Record` throughout.
pub trait Record {
    /// Name of the record type, used as a field path segment.
    fn type_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&self) -> &'static [FieldSchema];

    /// Value of the field at `index` in [`fields`](Record::fields).
    fn field_value(&self, index: usize) -> Option<Value<'_>>;

    /// Value of the field called `name`.
    fn field_by_name(&self, name: &str) -> Option<Value<'_>> {
        let index = self.fields().iter().position(|field| field.name == name)?;
        self.field_value(index)
    }
}
