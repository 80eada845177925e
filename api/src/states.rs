use crate::{ai::SuggestionClient, auth::RevokedTokens, config::Config, db::Database};
use std::sync::Arc;

/// Shared by every request. Cloning is cheap: the database and the
/// revocation list are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub revoked: RevokedTokens,
    pub suggestions: SuggestionClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Result<Self, reqwest::Error> {
        let suggestions = SuggestionClient::new(config.ai.clone())?;
        Ok(Self {
            db,
            revoked: RevokedTokens::default(),
            suggestions,
            config: Arc::new(config),
        })
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt_secret
    }
}
