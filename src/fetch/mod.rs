// src/fetch/mod.rs

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::FeedError;

/// Download the rate feed at `url` and return the response body as text.
///
/// Any transport failure (connect, timeout, non-2xx status, body read) is
/// fatal to the run and surfaces as [`FeedError::Transport`]. Retry policy,
/// if any, belongs to the caller.
pub async fn fetch_feed_text(client: &Client, url: &Url) -> Result<String, FeedError> {
    debug!(%url, "fetching rate feed");
    let transport = |source| FeedError::Transport {
        url: url.to_string(),
        source,
    };
    client
        .get(url.clone())
        .send()
        .await
        .map_err(transport)?
        .error_for_status()
        .map_err(transport)?
        .text()
        .await
        .map_err(transport)
}
