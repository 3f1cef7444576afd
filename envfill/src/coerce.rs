//! String to scalar coercion for populated fields

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Error returned by [`parse_bool`] for literals outside the accepted set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoolError {
    literal: String,
}

impl fmt::Display for ParseBoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid boolean literal {:?}", self.literal)
    }
}

impl std::error::Error for ParseBoolError {}

/// Parse a boolean from the conventional literal set.
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
///
/// ```
/// use envfill::coerce::parse_bool;
///
/// assert_eq!(parse_bool("T"), Ok(true));
/// assert_eq!(parse_bool("0"), Ok(false));
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError {
            literal: s.to_string(),
        }),
    }
}

/// Parse a base-10 integer into any primitive integer width.
///
/// An optional leading sign is accepted; the value must fit the target type.
pub fn parse_integer<T>(s: &str) -> Result<T, ParseIntError>
where
    T: FromStr<Err = ParseIntError>,
{
    s.parse::<T>()
}
