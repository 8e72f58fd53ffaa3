mod field;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, GenericParam, Generics, parse_macro_input, parse_quote};

use crate::support::{diag, utils};
use field::{RecordField, parse_field};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let fields = utils::require_named_fields(&input)?
        .named
        .iter()
        .map(parse_field)
        .filter_map(Result::transpose)
        .collect::<syn::Result<Vec<RecordField>>>()?;

    add_reflect_bounds(&mut input.generics);

    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let schemas = fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let declaration = match &field.declaration {
            Some(raw) => quote!(::core::option::Option::Some(#raw)),
            None => quote!(::core::option::Option::None),
        };
        quote! {
            ::tagval::FieldSchema::new(
                #name,
                #declaration,
                <#ty as ::tagval::Reflect>::KIND,
                <#ty as ::tagval::Reflect>::NESTED,
            )
        }
    });

    let arms = fields.iter().enumerate().map(|(index, field)| {
        let ident = &field.ident;
        quote! {
            #index => ::core::option::Option::Some(::tagval::Reflect::reflect(&self.#ident)),
        }
    });

    Ok(quote! {
        const _: () = {
            impl #impl_generics #struct_name #ty_generics #where_clause {
                #[doc(hidden)]
                const __TAGVAL_FIELDS: &'static [::tagval::FieldSchema] = &[#(#schemas),*];
            }

            #[automatically_derived]
            impl #impl_generics ::tagval::Record for #struct_name #ty_generics #where_clause {
                fn type_name(&self) -> &'static str {
                    #type_name
                }

                fn fields(&self) -> &'static [::tagval::FieldSchema] {
                    Self::__TAGVAL_FIELDS
                }

                #[allow(clippy::match_single_binding)]
                fn field_value(&self, index: usize) -> ::core::option::Option<::tagval::Value<'_>> {
                    match index {
                        #(#arms)*
                        _ => ::core::option::Option::None,
                    }
                }
            }

            #[automatically_derived]
            impl #impl_generics ::tagval::Reflect for #struct_name #ty_generics #where_clause {
                const KIND: ::tagval::Kind = ::tagval::Kind::Record;

                fn reflect(&self) -> ::tagval::Value<'_> {
                    ::tagval::Value::Record(self)
                }
            }
        };
    })
}

fn add_reflect_bounds(generics: &mut Generics) {
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::tagval::Reflect));
        }
    }
}
