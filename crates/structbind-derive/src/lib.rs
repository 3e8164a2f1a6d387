//! `#[derive(Record)]` for `structbind`.
//!
//! Generates `structbind::Record` and `structbind::FieldValue` impls for a
//! named-field struct.
//!
//! # Field Attributes
//!
//! - `#[record(key = "...")]` - external name used by bind, validate and
//!   to_map; `"-"` opts the field out entirely
//! - `#[record(required)]` / `required = "true"` - validate rejects the
//!   field's zero value
//! - `#[record(skip)]` / `skip = "true"` - bind never assigns the field
//!
//! `#[serde(rename = "...")]` supplies the key when no `#[record(key)]` is
//! given, and `#[serde(skip)]` opts the field out.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

mod attrs;

#[proc_macro_derive(Record, attributes(record, serde))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_derive(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_derive(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record does not support enums; hint: use a struct with named fields",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record does not support `union` items; hint: use a struct with named fields",
            ))
        }
    };
    let fields = match &data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Tuple structs are not supported; hint: name the fields so they can carry keys",
            ))
        }
        Fields::Unit => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Unit structs are not supported; hint: a record needs at least one named field",
            ))
        }
    };
    attrs::reject_container_attrs(&input.attrs)?;

    let name = &input.ident;
    let name_lit = LitStr::new(&name.unraw().to_string(), Span::call_site());
    let is_generic = input.generics.type_params().next().is_some();

    let mut descriptors = Vec::new();
    let mut ref_arms = Vec::new();
    let mut mut_arms = Vec::new();
    let mut bounds = Vec::new();

    for (index, field) in fields.named.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let field_attrs = attrs::parse_field_attrs(&field.attrs)?;
        let field_name = LitStr::new(&ident.unraw().to_string(), Span::call_site());

        let kind = if field_attrs.is_opted_out() {
            quote! { ::structbind::FieldKind::Unsupported(::core::stringify!(#ty)) }
        } else {
            quote! { <#ty as ::structbind::FieldValue>::field_kind() }
        };

        let mut descriptor = quote! {
            ::structbind::FieldDescriptor::new(#field_name, #kind)
        };
        if let Some(key) = field_attrs.resolved_key() {
            let key_lit = LitStr::new(key, Span::call_site());
            descriptor = quote! { #descriptor.with_key(#key_lit) };
        }
        if field_attrs.required {
            descriptor = quote! { #descriptor.required() };
        }
        if field_attrs.skip {
            descriptor = quote! { #descriptor.skip() };
        }
        descriptors.push(descriptor);

        if field_attrs.is_opted_out() {
            continue;
        }
        ref_arms.push(quote! {
            #index => ::std::option::Option::Some(&self.#ident as &dyn ::structbind::FieldValue)
        });
        mut_arms.push(quote! {
            #index => ::std::option::Option::Some(&mut self.#ident as &mut dyn ::structbind::FieldValue)
        });
        if is_generic {
            bounds.push(quote! { #ty: ::structbind::FieldValue });
        }
    }

    let mut generics = input.generics.clone();
    if !bounds.is_empty() {
        let where_clause = generics.make_where_clause();
        for bound in &bounds {
            where_clause.predicates.push(syn::parse2(bound.clone())?);
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::structbind::Record for #name #ty_generics #where_clause {
            fn record_name(&self) -> &'static str {
                #name_lit
            }

            fn field_descriptors(&self) -> ::std::vec::Vec<::structbind::FieldDescriptor> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }

            fn field(&self, index: usize) -> ::std::option::Option<&dyn ::structbind::FieldValue> {
                match index {
                    #(#ref_arms,)*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::std::option::Option<&mut dyn ::structbind::FieldValue> {
                match index {
                    #(#mut_arms,)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #impl_generics ::structbind::FieldValue for #name #ty_generics #where_clause {
            fn field_kind() -> ::structbind::FieldKind {
                ::structbind::FieldKind::Nested(#name_lit)
            }

            fn to_value(&self, stringify: bool) -> ::structbind::Value {
                ::structbind::Value::Map(::structbind::to_map(self, stringify))
            }

            fn as_record(&self) -> ::std::option::Option<&dyn ::structbind::Record> {
                ::std::option::Option::Some(self)
            }

            fn as_record_mut(&mut self) -> ::std::option::Option<&mut dyn ::structbind::Record> {
                ::std::option::Option::Some(self)
            }
        }
    })
}
