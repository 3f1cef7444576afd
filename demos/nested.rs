//! Nested configuration structs and error paths

use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct PoolConfig {
    #[env(var = "DB_POOL_SIZE", default = "10")]
    pub size: u32,
}

#[derive(Debug, Default, Populate)]
struct DatabaseConfig {
    #[env(var = "DB_HOST", default = "localhost")]
    pub host: String,

    #[env(var = "DB_PORT", default = "5432")]
    pub port: u16,

    // Nested fields resolve a value too; the marker literal keeps them enabled
    #[env(default = "pool")]
    pub pool: PoolConfig,
}

#[derive(Debug, Default, Populate)]
struct AppConfig {
    #[env(var = "APP_NAME", default = "demo")]
    pub name: String,

    #[env(default = "database")]
    pub database: DatabaseConfig,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_HOST", "db.internal");

    let config = AppConfig::from_env()?;
    println!("{config:#?}");

    // A bad nested value reports the whole path
    std::env::set_var("DB_POOL_SIZE", "lots");
    match AppConfig::from_env() {
        Ok(_) => println!("unexpected success"),
        Err(e) => {
            println!("error at {}: {}", e.path(), e);
            println!("root cause: {}", e.root_cause());
        }
    }

    Ok(())
}
