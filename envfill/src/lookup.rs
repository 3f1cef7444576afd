//! Key-value sources that environment variable names are resolved against

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only view of environment variables.
///
/// The populator only ever asks for a value by exact, case-sensitive name.
/// `None` and `Some("")` are treated alike: both mean "unset".
///
/// ```
/// use envfill::Lookup;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
/// assert_eq!(Lookup::get(&env, "PORT").as_deref(), Some("8080"));
/// assert_eq!(Lookup::get(&env, "HOST"), None);
/// ```
pub trait Lookup {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment.
///
/// Every call reads the environment afresh; nothing is cached between
/// lookups or between populate calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Names the platform cannot represent never match anything.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Lookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl Lookup for [(&str, &str)] {
    fn get(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    }
}

impl<const N: usize> Lookup for [(&str, &str); N] {
    fn get(&self, key: &str) -> Option<String> {
        Lookup::get(self.as_slice(), key)
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn get(&self, key: &str) -> Option<String> {
        L::get(*self, key)
    }
}
