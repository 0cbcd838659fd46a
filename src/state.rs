use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

/// Build the shared state. Fails fast when required environment variables are
/// missing or the database is unreachable.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let cors_config = CorsConfig::from_env();
    let db = init_db_pool().await?;

    Ok(AppState {
        db,
        jwt_config,
        cors_config,
    })
}
