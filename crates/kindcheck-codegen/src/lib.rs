// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Generics, Index,
    Member,
};

/// Field exposed through `Reflect::field`
struct FieldInfo {
    member: Member,
    name: String,
}

/// `#[derive(Reflect)]` macro: generates a `kindcheck::Reflect` impl
///
/// Supports:
/// - Structs with named, tuple or unit fields: `Kind::Struct`, fields exposed in
///   declaration order
/// - Enums: `Kind::Enum`, no children
/// - `#[kindcheck(skip)]` on a field: field is not visited
///
/// Rejects unions and `#[repr(packed)]` structs (fields cannot be borrowed).
///
/// Example:
/// ```ignore
/// use kindcheck::Reflect;
///
/// #[derive(Reflect)]
/// struct Sample {
///     id: u32,
///     values: [f64; 4],
///     #[kindcheck(skip)]
///     label: String,       // Not visited
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(kindcheck))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data) => expand_struct(&input, &data.fields),
        Data::Enum(_) => Ok(expand_enum(&input)),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect cannot be derived for unions",
        )),
    };

    match expanded {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_struct(input: &DeriveInput, fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    if is_packed(input)? {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Reflect cannot be derived for #[repr(packed)] structs",
        ));
    }

    let mut field_infos = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }
        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
            None => (Member::Unnamed(Index::from(position)), position.to_string()),
        };
        field_infos.push(FieldInfo { member, name });
    }

    let name = &input.ident;
    let generics = add_reflect_bounds(input.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let count = field_infos.len();
    let indices: Vec<_> = (0..count).map(Literal::usize_unsuffixed).collect();
    let members: Vec<_> = field_infos.iter().map(|f| &f.member).collect();
    let names: Vec<_> = field_infos.iter().map(|f| f.name.as_str()).collect();

    Ok(quote! {
        impl #impl_generics ::kindcheck::Reflect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::kindcheck::Kind {
                ::kindcheck::Kind::Struct
            }

            fn num_fields(&self) -> usize {
                #count
            }

            fn field(&self, index: usize) -> ::kindcheck::Value<'_> {
                match index {
                    #(#indices => ::kindcheck::Value::of(&self.#members),)*
                    _ => ::kindcheck::Value::invalid(),
                }
            }

            fn field_name(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#indices => ::core::option::Option::Some(#names),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

fn expand_enum(input: &DeriveInput) -> proc_macro2::TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::kindcheck::Reflect for #name #ty_generics #where_clause {
            fn kind(&self) -> ::kindcheck::Kind {
                ::kindcheck::Kind::Enum
            }
        }
    }
}

/// Add `T: ::kindcheck::Reflect` for every type parameter
fn add_reflect_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(::kindcheck::Reflect));
        }
    }
    generics
}

/// `#[kindcheck(skip)]` on a field
fn is_skipped(field: &syn::Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("kindcheck") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported kindcheck attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

/// `#[repr(packed)]` or `#[repr(packed(N))]` on the struct
fn is_packed(input: &DeriveInput) -> syn::Result<bool> {
    let mut packed = false;
    for attr in &input.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("packed") {
                packed = true;
            }
            // Skip arguments such as `packed(2)` or `align(8)`
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                let _: proc_macro2::TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(packed)
}
