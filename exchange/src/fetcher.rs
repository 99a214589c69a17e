use crate::{Kline, KlineMessage};

use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Fetches the latest kline snapshot from the market-data endpoint.
///
/// Returns the well-formed bars of the payload; an empty vector means
/// "no new bars" and is not an error.
pub async fn fetch_latest(
    client: &reqwest::Client,
    api_base: &str,
) -> Result<Vec<Kline>, FeedError> {
    let url = format!("{}/latest", api_base.trim_end_matches('/'));

    let response_text = client
        .get(&url)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let message: KlineMessage =
        serde_json::from_str(&response_text).map_err(|e| FeedError::Parse(e.to_string()))?;

    log::debug!(
        "{}: {} bar(s) for {}",
        message.topic,
        message.data.len(),
        message.symbol
    );

    Ok(message.into_bars())
}
