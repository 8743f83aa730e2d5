pub mod error;
pub mod feed;
pub mod fetch;
pub mod select;

pub use error::FeedError;
pub use feed::{parse_rates, ParsedFeed, RateEntry};
pub use select::select_latest;
