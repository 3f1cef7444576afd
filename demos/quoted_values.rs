//! Values copied from `.env` files keep their quotes; one layer is stripped

use envfill::sanitize;
use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct Config {
    #[env(var = "GREETING")]
    pub greeting: String,

    #[env(var = "RETRIES")]
    pub retries: i32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("GREETING", "\"'hello'\"");
    std::env::set_var("RETRIES", "`3`");

    let config = Config::from_env()?;
    println!("Greeting: {}", config.greeting);
    println!("Retries: {}", config.retries);

    for raw in ["\"x\"", "''", "'", "'a"] {
        println!("{raw:>5} -> {:?}", sanitize::strip_quotes(raw));
    }

    Ok(())
}
