//! Populating from something other than the process environment

use envfill::{Lookup, Populate};
use std::collections::HashMap;

#[derive(Debug, Default, Populate)]
struct Config {
    #[env(var = "REGION", default = "eu-west-1")]
    pub region: String,

    #[env(var = "REPLICAS")]
    pub replicas: u8,
}

/// Lookup that namespaces every key, e.g. for per-tenant settings.
struct Prefixed<'a> {
    prefix: &'a str,
    values: HashMap<String, String>,
}

impl Lookup for Prefixed<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(&format!("{}{}", self.prefix, key)).cloned()
    }
}

fn main() -> anyhow::Result<()> {
    let source = Prefixed {
        prefix: "TENANT_A_",
        values: HashMap::from([("TENANT_A_REPLICAS".to_string(), "3".to_string())]),
    };

    let mut config = Config::default();
    envfill::populate_from(Some(&mut config), &source)?;
    println!("{config:?}");

    Ok(())
}
