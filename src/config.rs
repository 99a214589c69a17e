use std::env;
use std::time::Duration;

use data::window::Bound;

use crate::agent;

/// Runtime configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,

    /// Base URL of the market-data endpoint; `/latest` is appended.
    pub api_base: String,
    pub poll_interval: Duration,
    pub window_bound: Bound,

    /// Chat-completions provider for the advisor proxy.
    pub provider_url: String,
    /// Bearer key. Empty ⇒ the agent endpoint reports a configuration error.
    pub provider_key: String,
    pub provider_model: String,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        // Two windowing policies exist in the product: a fixed bar count
        // and a rolling time horizon. Horizon is the default.
        let window_bound = match env_str("GOLDVIEW_WINDOW_MODE", "horizon").as_str() {
            "count" => Bound::Count(env_u64("GOLDVIEW_WINDOW_BARS", 10) as usize),
            _ => Bound::Horizon(env_u64("GOLDVIEW_WINDOW_MINUTES", 10) * 60_000),
        };

        Self {
            bind: env_str("GOLDVIEW_BIND", "127.0.0.1"),
            port: env_u16("GOLDVIEW_PORT", 3000),
            api_base: env_str("GOLDVIEW_API_BASE", "http://localhost:8000"),
            poll_interval: Duration::from_millis(env_u64("GOLDVIEW_POLL_MS", 60_000)),
            window_bound,
            provider_url: env_str("DEEPSEEK_API_URL", agent::DEFAULT_PROVIDER_URL),
            provider_key: env_str("DEEPSEEK_API_KEY", ""),
            provider_model: env_str("DEEPSEEK_MODEL", agent::DEFAULT_MODEL),
        }
    }
}
