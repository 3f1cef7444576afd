//! Fallback literals and empty values

use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    #[env(var = "SERVER_ADDR", default = "127.0.0.1:8080")]
    pub server_addr: String,

    // No variable at all: always the literal
    #[env(default = "30")]
    pub shutdown_grace_secs: i64,
}

fn main() -> anyhow::Result<()> {
    // Empty counts as unset, so the fallback wins
    std::env::set_var("SERVER_ADDR", "");

    let config = Config::from_env()?;

    println!("Server Address: {}", config.server_addr);
    println!("Shutdown Grace: {}s", config.shutdown_grace_secs);

    Ok(())
}
