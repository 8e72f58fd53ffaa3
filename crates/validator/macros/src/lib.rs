//! # tagval-macros
//!
//! `#[derive(Record)]` for [`tagval`](https://docs.rs/tagval). Use it
//! through the re-export `tagval::Record`; the generated code refers to
//! `::tagval` paths.
//!
//! ```ignore
//! use tagval::Record;
//!
//! #[derive(Record)]
//! pub struct Customer {
//!     #[validate("required;len:64")]
//!     email: String,
//!     #[validate(skip)]
//!     cache: Vec<u8>,
//!     address: Option<Address>,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` and `Reflect` traits.
///
/// Only structs with named fields are accepted. Every field type must
/// implement `tagval::Reflect`; type parameters get that bound added.
///
/// # Field attributes
///
/// - `#[validate("rule;rule:value,value")]` or `#[validate = "..."]` -
///   The declaration string for this field
/// - `#[validate(skip)]` - Leaves the field out of the field table; it is
///   neither validated nor recursed into
///
/// Fields without an attribute are still listed, so nested records are
/// validated even when the field itself declares nothing.
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// struct Order {
///     #[validate("required")]
///     id: String,
///     #[validate("array-unique:Sku,false")]
///     lines: Vec<Line>,
///     customer: Option<Customer>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
