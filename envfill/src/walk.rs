//! Per-field steps called by `#[derive(Populate)]` generated code

use crate::coerce;
use crate::error::Error;
use crate::lookup::Lookup;
use crate::sanitize::sanitize;
use crate::Populate;
use std::num::ParseIntError;
use std::str::FromStr;

/// Resolve the string destined for a field.
///
/// Priority order:
/// 1. Sanitized environment variable `var` (skipped when `var` is empty)
/// 2. `fallback` literal
/// 3. `MissingRequiredVariable` if both are empty
#[doc(hidden)]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn resolve<L: Lookup + ?Sized>(
    env: &L,
    field: &str,
    var: &str,
    fallback: Option<&str>,
) -> Result<String, Error> {
    let value = if var.is_empty() {
        String::new()
    } else {
        sanitize(env, var)
    };

    if !value.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!(field, var, source = "environment", "resolved field");
        return Ok(value);
    }

    match fallback {
        Some(fallback) if !fallback.is_empty() => {
            #[cfg(feature = "tracing")]
            tracing::trace!(field, var, source = "fallback", "resolved field");
            Ok(fallback.to_string())
        }
        _ => {
            #[cfg(feature = "tracing")]
            tracing::trace!(field, var, "no value for field");
            Err(Error::missing(var))
        }
    }
}

#[doc(hidden)]
pub fn integer<T>(field: &str, var: &str, value: &str) -> Result<T, Error>
where
    T: FromStr<Err = ParseIntError>,
{
    coerce::parse_integer(value).map_err(|e| Error::coercion(field, var, "integer", e))
}

#[doc(hidden)]
pub fn boolean(field: &str, var: &str, value: &str) -> Result<bool, Error> {
    coerce::parse_bool(value).map_err(|e| Error::coercion(field, var, "boolean", e))
}

/// Recurse into a struct held by value.
#[doc(hidden)]
pub fn nested<T, L>(field: &str, target: &mut T, env: &L) -> Result<(), Error>
where
    T: Populate,
    L: Lookup + ?Sized,
{
    target
        .populate_from(env)
        .map_err(|e| Error::nested(field, e))
}

/// Recurse into an `Option<T>`, binding `T::default()` first if it is `None`.
#[doc(hidden)]
pub fn optional_nested<T, L>(field: &str, slot: &mut Option<T>, env: &L) -> Result<(), Error>
where
    T: Populate + Default,
    L: Lookup + ?Sized,
{
    nested(field, slot.get_or_insert_with(T::default), env)
}

/// Recurse into an `Rc`/`Arc` pointee obtained through `get_mut`.
///
/// `None` means the allocation is shared and cannot be written.
#[doc(hidden)]
pub fn shared_nested<T, L>(field: &str, target: Option<&mut T>, env: &L) -> Result<(), Error>
where
    T: Populate,
    L: Lookup + ?Sized,
{
    match target {
        Some(target) => nested(field, target, env),
        None => Err(Error::unsettable(field)),
    }
}

#[doc(hidden)]
pub fn unsettable(field: &str) -> Result<(), Error> {
    Err(Error::unsettable(field))
}

#[doc(hidden)]
pub fn unsupported(field: &str, kind: &str) -> Result<(), Error> {
    Err(Error::unsupported(field, kind))
}
