//! Quote stripping for raw environment values
//!
//! Values copied out of shell-style `.env` files often keep their quotes
//! (`API_KEY="abc"`). Exactly one symmetric layer of `'`, `"` or `` ` `` is
//! removed; anything else is returned untouched.

use crate::lookup::{Lookup, ProcessEnv};

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Strip one layer of matching quote characters from `raw`.
///
/// ```
/// use envfill::sanitize::strip_quotes;
///
/// assert_eq!(strip_quotes("\"x\""), "x");
/// assert_eq!(strip_quotes("''"), "");
/// assert_eq!(strip_quotes("'a"), "'a");
/// assert_eq!(strip_quotes("\"'nested'\""), "'nested'");
/// ```
pub fn strip_quotes(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTES.contains(&first) => chars.as_str(),
        _ => raw,
    }
}

/// Look `name` up in `env` and strip one layer of quotes.
///
/// Unset and empty variables both come back as an empty string.
pub fn sanitize<L: Lookup + ?Sized>(env: &L, name: &str) -> String {
    match env.get(name) {
        Some(raw) => strip_quotes(&raw).to_string(),
        None => String::new(),
    }
}

/// [`sanitize`] against the live process environment.
pub fn env(name: &str) -> String {
    sanitize(&ProcessEnv, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env as std_env;

    #[test]
    fn test_strips_each_quote_kind() {
        assert_eq!(strip_quotes("\"value\""), "value");
        assert_eq!(strip_quotes("'value'"), "value");
        assert_eq!(strip_quotes("`value`"), "value");
    }

    #[test]
    fn test_bare_quote_pair_is_empty() {
        assert_eq!(strip_quotes("''"), "");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("``"), "");
    }

    #[test]
    fn test_single_character_is_untouched() {
        assert_eq!(strip_quotes("'"), "'");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("x"), "x");
        assert_eq!(strip_quotes(""), "");
    }

    #[test]
    fn test_mismatched_quotes_are_untouched() {
        assert_eq!(strip_quotes("'a"), "'a");
        assert_eq!(strip_quotes("'a\""), "'a\"");
        assert_eq!(strip_quotes("\"a`"), "\"a`");
    }

    #[test]
    fn test_non_quote_symmetry_is_untouched() {
        assert_eq!(strip_quotes("xax"), "xax");
        assert_eq!(strip_quotes("[a]"), "[a]");
    }

    #[test]
    fn test_only_one_layer_is_removed() {
        assert_eq!(strip_quotes("''a''"), "'a'");
        assert_eq!(strip_quotes("\"\"\"\""), "\"\"");
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(strip_quotes("'héllo wörld'"), "héllo wörld");
        assert_eq!(strip_quotes("é"), "é");
    }

    #[test]
    fn test_sanitize_missing_is_empty() {
        let env = [("PRESENT", "'quoted'")];
        assert_eq!(sanitize(&env, "PRESENT"), "quoted");
        assert_eq!(sanitize(&env, "ABSENT"), "");
    }

    #[test]
    #[serial]
    fn test_env_reads_process_environment() {
        std_env::set_var("ENVFILL_SANITIZE_TEST", "`ticked`");
        assert_eq!(env("ENVFILL_SANITIZE_TEST"), "ticked");

        std_env::remove_var("ENVFILL_SANITIZE_TEST");
        assert_eq!(env("ENVFILL_SANITIZE_TEST"), "");
    }
}
