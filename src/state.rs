use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use data::GoldAccount;
use exchange::Kline;

use crate::agent::AgentClient;
use crate::config::Config;

/// Shared application state, passed to all route handlers via
/// `axum::extract::State`.
pub struct AppState {
    pub config: Config,
    /// Latest fully-merged window snapshot, published by the feed task.
    klines: watch::Receiver<Vec<Kline>>,
    pub account: Mutex<GoldAccount>,
    pub agent: AgentClient,
}

impl AppState {
    pub fn new(config: Config, klines: watch::Receiver<Vec<Kline>>) -> Arc<Self> {
        let agent = AgentClient::new(
            config.provider_url.clone(),
            config.provider_key.clone(),
            config.provider_model.clone(),
        );

        Arc::new(Self {
            config,
            klines,
            account: Mutex::new(GoldAccount::new()),
            agent,
        })
    }

    /// Current bar window, ascending by timestamp. Snapshots are only ever
    /// published after a merge fully completes, so this never observes a
    /// partially-appended window.
    pub fn window(&self) -> Vec<Kline> {
        self.klines.borrow().clone()
    }
}
