//! Derive macro implementation for envfill

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

mod attrs;
mod kind;

use attrs::FieldAttrs;
use kind::FieldKind;

/// `Populate` derive macro
///
/// Implements `envfill::Populate` for a struct with named fields. The
/// generated `populate_from` visits fields in declaration order; fields
/// without an `#[env]` attribute are skipped.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env(var = "NAME")]`: Environment variable the field is read from
/// - `#[env(default = "value")]`: Fallback literal when the variable is unset or empty
///
/// # Example
///
/// See the `envfill` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(env))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    if let Some(attr) = attrs::find_env_attr(&input.attrs) {
        return Err(syn::Error::new_spanned(
            attr,
            "`#[env]` is only supported on fields",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Populate only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Populate only supports structs",
            ));
        }
    };

    // Report every malformed field at once rather than one per build
    let mut steps = Vec::new();
    let mut errors: Option<syn::Error> = None;
    for field in fields {
        match FieldAttrs::from_field(field) {
            Ok(Some(attrs)) => steps.push(field_step(field, &attrs)),
            Ok(None) => {}
            Err(e) => match errors.as_mut() {
                Some(errors) => errors.combine(e),
                None => errors = Some(e),
            },
        }
    }
    if let Some(errors) = errors {
        return Err(errors);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envfill::Populate for #struct_name #ty_generics #where_clause {
            fn populate_from<__L: ::envfill::Lookup + ?Sized>(
                &mut self,
                __env: &__L,
            ) -> ::envfill::Result<()> {
                #(#steps)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

/// Resolve-then-dispatch code for one annotated field.
fn field_step(field: &Field, attrs: &FieldAttrs) -> TokenStream2 {
    let Some(ident) = field.ident.as_ref() else {
        return syn::Error::new_spanned(field, "Populate only supports named fields")
            .to_compile_error();
    };
    let field_type = &field.ty;
    let field_name = ident.unraw().to_string();
    let var = attrs.var_or_empty();
    let fallback = match &attrs.default {
        Some(literal) => quote!(::core::option::Option::Some(#literal)),
        None => quote!(::core::option::Option::None),
    };

    let dispatch = match FieldKind::classify(field_type) {
        FieldKind::Text => quote! {
            self.#ident = __value;
        },
        FieldKind::Integer => quote! {
            self.#ident = ::envfill::walk::integer(#field_name, #var, &__value)?;
        },
        FieldKind::Boolean => quote! {
            self.#ident = ::envfill::walk::boolean(#field_name, #var, &__value)?;
        },
        FieldKind::Nested => quote! {
            ::envfill::walk::nested(#field_name, &mut self.#ident, __env)?;
        },
        FieldKind::OptionalNested => quote! {
            ::envfill::walk::optional_nested(#field_name, &mut self.#ident, __env)?;
        },
        FieldKind::SharedNested => quote! {
            ::envfill::walk::shared_nested(
                #field_name,
                <#field_type>::get_mut(&mut self.#ident),
                __env,
            )?;
        },
        FieldKind::Unsettable => quote! {
            ::envfill::walk::unsettable(#field_name)?;
        },
        FieldKind::Unsupported(kind) => quote! {
            ::envfill::walk::unsupported(#field_name, #kind)?;
        },
    };

    quote! {
        {
            let __value = ::envfill::walk::resolve(__env, #field_name, #var, #fallback)?;
            #dispatch
        }
    }
}
