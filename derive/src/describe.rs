//! `#[derive(Describe)]` expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr};

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let struct_name_str = struct_name.unraw().to_string();

    // The schema lives in a `static`, which cannot depend on type parameters.
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Describe cannot be derived for generic types; implement it with SchemaBuilder",
        ));
    }

    let StructAttrs { no_default } = parse_struct_attrs(&input.attrs)?;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Describe requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Describe can only be derived for structs",
            ))
        }
    };

    let mut field_entries = Vec::new();
    for field in &named.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "field must have a name"))?;
        let fname_str = ident.unraw().to_string();

        let FieldAttrs { alias, ignore } = parse_field_attrs(&field.attrs)?;

        let alias_call = alias.map(|a| quote! { .with_alias(#a) });
        let ignore_call = ignore.then(|| quote! { .excluded() });

        field_entries.push(quote! {
            .field_with(
                #fname_str,
                ::duckmap::FieldConfig::new() #alias_call #ignore_call,
                |this: &#struct_name| &this.#ident,
                |this: &mut #struct_name| &mut this.#ident,
            )
        });
    }

    let constructor = if no_default {
        quote! {}
    } else {
        quote! { .with_default() }
    };

    Ok(quote! {
        impl ::duckmap::Describe for #struct_name {
            fn schema() -> &'static ::duckmap::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<::duckmap::Schema<#struct_name>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::duckmap::SchemaBuilder::<#struct_name>::new(#struct_name_str)
                        #(#field_entries)*
                        #constructor
                        .build_unchecked()
                })
            }
        }
    })
}

struct StructAttrs {
    no_default: bool,
}

fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut no_default = false;
    for attr in attrs {
        if !attr.path().is_ident("mapping") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("no_default") {
                no_default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported struct-level mapping attribute, expected `no_default`"))
            }
        })?;
    }
    Ok(StructAttrs { no_default })
}

struct FieldAttrs {
    alias: Option<LitStr>,
    ignore: bool,
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut alias: Option<LitStr> = None;
    let mut ignore = false;
    for attr in attrs {
        if !attr.path().is_ident("mapping") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new(lit.span(), "mapping name cannot be empty"));
                }
                if alias.is_some() {
                    return Err(meta.error("duplicate `name` in mapping attributes"));
                }
                alias = Some(lit);
                Ok(())
            } else if meta.path.is_ident("ignore") {
                ignore = true;
                Ok(())
            } else {
                Err(meta.error("unsupported mapping attribute, expected `name = \"...\"` or `ignore`"))
            }
        })?;
    }
    Ok(FieldAttrs { alias, ignore })
}
