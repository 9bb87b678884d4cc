//! Shared application state for the web server.

use std::sync::Arc;

use qiyas_common::error::Result;
use qiyas_config::Config;

use crate::presentation::Templates;
use crate::relay::Relay;

/// Shared state injected into every Axum handler. Immutable once built.
pub struct AppState {
    pub relay: Relay,
    pub templates: Templates,
}

impl AppState {
    pub fn new(relay: Relay, templates: Templates) -> Self {
        Self { relay, templates }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Relay::new(&config.backend)?, Templates::new()?))
    }
}

pub type SharedState = Arc<AppState>;
