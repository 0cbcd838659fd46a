use anyhow::{Context, bail};
use std::env;

/// Signing configuration, loaded once at startup and carried in [`AppState`].
///
/// [`AppState`]: crate::state::AppState
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token TTL in seconds. Defaults to one hour.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw
                .parse()
                .context("JWT_ACCESS_EXPIRY must be an integer number of seconds")?,
            Err(_) => 3600,
        };

        Ok(Self {
            secret,
            access_token_expiry,
        })
    }
}
