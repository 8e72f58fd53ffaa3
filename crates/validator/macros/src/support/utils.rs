use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Returns the named fields of a struct, or a spanned error for anything
/// else.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span,
                "Record can only be derived for structs, not enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "Record can only be derived for structs, not unions",
            ));
        }
    };

    match fields {
        Fields::Named(named) => Ok(named),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "Record requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            input.ident.span(),
            "Record requires a non-unit struct with fields",
        )),
    }
}
