// Text, integer and boolean fields with fallbacks, mixed with unannotated fields

use envfill::Populate;

#[derive(Default, Populate)]
pub struct Config {
    #[env(var = "ENVFILL_PASS_NAME", default = "svc")]
    pub name: String,

    #[env(var = "ENVFILL_PASS_WORKERS", default = "4")]
    pub workers: usize,

    #[env(var = "ENVFILL_PASS_OFFSET", default = "-1")]
    pub offset: i32,

    #[env(default = "false")]
    pub debug: bool,

    pub runtime_only: Vec<u8>,
}

fn main() {
    let config = Config::from_env().unwrap();
    assert_eq!(config.name, "svc");
    assert_eq!(config.workers, 4);
    assert_eq!(config.offset, -1);
    assert!(!config.debug);
    assert!(config.runtime_only.is_empty());
}
