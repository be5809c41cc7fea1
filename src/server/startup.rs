use sea_orm::DatabaseConnection;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_redis_store::{fred::prelude::Pool, RedisStore};

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    google::GoogleClient,
};

/// Install the global tracing subscriber, honoring `RUST_LOG` and defaulting to `info`
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Build the Google client from the configured credentials & endpoints
pub fn build_google_client(config: &Config) -> Result<GoogleClient, Error> {
    GoogleClient::new(&config.google)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure signed-cookie session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<Pool>, SignedCookie>, Error> {
    use time::Duration;
    use tower_sessions::{
        cookie::{Key, SameSite},
        Expiry,
    };
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as RedisConfig};

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    let redis_config = RedisConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
        .with_signed(key);

    Ok(session)
}
