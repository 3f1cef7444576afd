//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts the source-key and fallback literal from struct
//! fields during macro expansion.

use syn::{Attribute, Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Environment variable the field is read from (`var = "..."`).
    pub var: Option<String>,

    /// Fallback literal used when the variable is unset or empty (`default = "..."`).
    pub default: Option<String>,
}

impl FieldAttrs {
    /// Extract `#[env(...)]` attributes from a struct field.
    ///
    /// Returns `Ok(None)` when the field carries no `#[env]` attribute at all,
    /// meaning the field is not managed by the populator. Several `#[env]`
    /// attributes on one field are merged; repeating a key is an error.
    pub fn from_field(field: &Field) -> syn::Result<Option<Self>> {
        let mut attrs = Self::default();
        let mut seen = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }
            seen = true;
            attrs.merge(attr)?;
        }

        if !seen {
            return Ok(None);
        }

        if attrs.var.is_none() && attrs.default.is_none() {
            return Err(syn::Error::new_spanned(
                field,
                "`#[env]` needs `var = \"NAME\"`, `default = \"value\"` or both",
            ));
        }

        Ok(Some(attrs))
    }

    fn merge(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            // var = "..."
            if meta.path.is_ident("var") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("`var` must not be empty"));
                }
                if self.var.replace(lit.value()).is_some() {
                    return Err(meta.error("duplicate `var` in `#[env]`"));
                }
                return Ok(());
            }

            // default = "..."
            if meta.path.is_ident("default") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(meta.error("`default` must not be empty"));
                }
                if self.default.replace(lit.value()).is_some() {
                    return Err(meta.error("duplicate `default` in `#[env]`"));
                }
                return Ok(());
            }

            Err(meta.error("unsupported env attribute, expected `var` or `default`"))
        })
    }

    /// Source-key passed to the runtime; empty when only a fallback is declared.
    pub fn var_or_empty(&self) -> &str {
        self.var.as_deref().unwrap_or("")
    }
}

/// First `#[env]` attribute in a struct-level attribute list.
pub fn find_env_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("env"))
}
