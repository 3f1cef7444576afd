//! Optional nested structs are allocated on demand

use envfill::Populate;

#[derive(Debug, Default, Populate)]
struct TlsConfig {
    #[env(var = "TLS_CERT", default = "/etc/tls/cert.pem")]
    pub cert: String,

    #[env(var = "TLS_KEY", default = "/etc/tls/key.pem")]
    pub key: String,
}

#[derive(Debug, Default, Populate)]
struct ServerConfig {
    #[env(var = "PORT", default = "8443")]
    pub port: u16,

    // Enabled by setting TLS_ENABLED to any non-empty value
    #[env(var = "TLS_ENABLED")]
    pub tls: Option<TlsConfig>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("TLS_ENABLED", "yes");
    std::env::set_var("TLS_CERT", "/run/secrets/cert.pem");

    let mut config = ServerConfig::default();
    println!("before: tls = {:?}", config.tls);

    config.populate()?;
    println!("after:  tls = {:?}", config.tls);

    Ok(())
}
