use anyhow::{anyhow, Context, Result};

use crate::render::TemplateVariant;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Name greeted by `GET /`.
    pub target: String,
    /// Template used when a request does not pick one.
    pub default_template: TemplateVariant,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            target: lookup("TARGET").unwrap_or_else(|| "World".to_string()),
            default_template: match lookup("RESUME_TEMPLATE") {
                Some(raw) => raw
                    .parse::<TemplateVariant>()
                    .map_err(|e: String| anyhow!(e))
                    .context("RESUME_TEMPLATE must be 'one' or 'two'")?,
                None => TemplateVariant::default(),
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
