//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. It is immutable after startup, so cloning only bumps the
//! reference counts.

use std::sync::Arc;

use access::RouteTable;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config), routes: Arc::new(RouteTable::default()) }
    }
}
