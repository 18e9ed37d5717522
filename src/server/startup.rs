use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::{
    fred::prelude::{ClientLike, Config as RedisConfig, Pool},
    RedisStore,
};

use crate::server::error::Error;

/// Sessions expire after this long without a request
pub const SESSION_INACTIVITY_DAYS: i64 = 30;

/// Connect to Valkey/Redis for session storage
pub async fn connect_to_session_store(valkey_url: &str) -> Result<RedisStore<Pool>, Error> {
    let config = RedisConfig::from_url(valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(RedisStore::new(pool))
}

/// Configure the session cookie for the given store
pub fn session_layer<S: SessionStore>(store: S) -> SessionManagerLayer<S> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let secure_cookies = !cfg!(debug_assertions);

    SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
}
