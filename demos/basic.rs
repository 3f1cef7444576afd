//! Basic usage example

use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    // Required: loaded from DATABASE_URL
    #[env(var = "DATABASE_URL")]
    pub database_url: String,

    // Integer with a fallback literal
    #[env(var = "MAX_CONNECTIONS", default = "10")]
    pub max_connections: u32,

    // Boolean: 1/t/true/TRUE/... and 0/f/false/FALSE/...
    #[env(var = "DEBUG_MODE", default = "false")]
    pub debug_mode: bool,

    // Not annotated, never touched
    pub started_at: u64,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG_MODE", "1");

    // Populate an existing value in place
    let mut config = Config::default();
    envfill::populate(Some(&mut config))?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Started At: {}", config.started_at);

    Ok(())
}
