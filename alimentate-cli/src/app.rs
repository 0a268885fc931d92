//! Process-wide wiring: config, durable storage, API client, session store.

use anyhow::{Context, Result};
use std::sync::Arc;

use alimentate_client::AlimentateClient;
use alimentate_session::modules::config;
use alimentate_session::{FileStorage, PersistedToken, SessionStore, SharedStorage};

pub struct App {
    pub client: Arc<AlimentateClient>,
    pub store: SessionStore,
}

impl App {
    /// Build the single session store for this process.
    pub fn bootstrap() -> Result<Self> {
        let config = config::load_config().context("Failed to load config")?;
        let storage: SharedStorage =
            Arc::new(FileStorage::open_default().context("Failed to open session storage")?);
        let token_source = Arc::new(PersistedToken::new(storage.clone()));
        let client = Arc::new(AlimentateClient::new(config.api.clone(), token_source)?);
        let store = SessionStore::new(client.clone(), storage, config.session);

        tracing::debug!(
            "Session store ready (signed in: {}, api: {})",
            store.is_signed_in(),
            config.api.base_url
        );
        Ok(Self { client, store })
    }
}
