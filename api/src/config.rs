use std::env;

/// Actor recorded in audit fields when none is configured
pub const DEFAULT_AUDIT_ACTOR: &str = "ACCOUNTS_MS";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Name written to created_by / updated_by on every save
    pub audit_actor: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let port = match env::var("PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {:?}", p))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            port,
            audit_actor: env::var("AUDIT_ACTOR")
                .ok()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AUDIT_ACTOR.to_string()),
        })
    }
}
