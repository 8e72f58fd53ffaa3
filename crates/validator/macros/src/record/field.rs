//! `#[validate(...)]` field attribute parsing.

use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, LitStr, Meta, Type};

use crate::support::diag;

/// One field that goes into the generated field table.
pub struct RecordField {
    /// Field identifier as written (may be raw).
    pub ident: Ident,
    /// Identifier without the `r#` prefix.
    pub name: String,
    /// Field type.
    pub ty: Type,
    /// Declaration string, if any.
    pub declaration: Option<String>,
}

/// What a single `#[validate]` attribute says.
enum Directive {
    Declare(LitStr),
    Skip,
}

/// Parses a named field. Returns `None` for `#[validate(skip)]`.
pub fn parse_field(field: &Field) -> syn::Result<Option<RecordField>> {
    let Some(ident) = field.ident.clone() else {
        return Err(diag::error_spanned(field, "Record requires named fields"));
    };

    let mut directive: Option<Directive> = None;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("validate")) {
        let parsed = parse_directive(attr)?;
        if let Some(previous) = &directive {
            let msg = match (previous, &parsed) {
                (Directive::Skip, Directive::Declare(_)) | (Directive::Declare(_), Directive::Skip) => {
                    "`#[validate(skip)]` cannot be combined with a declaration"
                }
                _ => "duplicate `#[validate]` attribute; put every rule in one declaration",
            };
            return Err(diag::error_spanned(attr, msg));
        }
        directive = Some(parsed);
    }

    let declaration = match directive {
        Some(Directive::Skip) => return Ok(None),
        Some(Directive::Declare(lit)) => Some(lit.value()),
        None => None,
    };

    Ok(Some(RecordField {
        name: ident.unraw().to_string(),
        ident,
        ty: field.ty.clone(),
        declaration,
    }))
}

fn parse_directive(attr: &Attribute) -> syn::Result<Directive> {
    let lit = match &attr.meta {
        Meta::Path(path) => {
            return Err(diag::error_spanned(
                path,
                "expected `#[validate(\"...\")]`, `#[validate = \"...\"]` or `#[validate(skip)]`",
            ));
        }
        Meta::List(list) => {
            let tokens = list.tokens.clone();
            if let Ok(ident) = syn::parse2::<Ident>(tokens.clone()) {
                if ident == "skip" {
                    return Ok(Directive::Skip);
                }
                return Err(diag::error_spanned(
                    &ident,
                    format!("unknown validate option `{ident}`; expected `skip` or a string literal"),
                ));
            }
            syn::parse2::<LitStr>(tokens).map_err(|_| {
                diag::error_spanned(list, "expected a declaration string, e.g. `#[validate(\"required;min:3\")]`")
            })?
        }
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lit.clone(),
            other => {
                return Err(diag::error_spanned(other, "expected a string literal declaration"));
            }
        },
    };

    if lit.value().trim().is_empty() {
        return Err(diag::error_spanned(&lit, "declaration must not be empty"));
    }

    Ok(Directive::Declare(lit))
}
