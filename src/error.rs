use thiserror::Error;

/// Fatal failures for a feed run. Per-entry problems are not errors: the
/// parser drops the entry and reports a diagnostic instead, and "no
/// applicable rate" is the `None` arm of the selector.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("transport error fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("feed is not well-formed XML: {0}")]
    MalformedFeed(#[from] roxmltree::Error),
}
