//! News domain module.
//!
//! Everything that talks to the outside world on behalf of the tools:
//!
//! - `query.rs` - Validates tool arguments and builds the news API parameters
//! - `client.rs` - Outbound calls to the news API and the What's New feed
//! - `feed.rs` - RSS parsing, keyword filtering and truncation
//! - `envelope.rs` - JSON envelopes handed back to the caller
//! - `error.rs` - News-specific error types
//!
//! Nothing here keeps state between calls.

mod client;
mod envelope;
mod error;
pub mod feed;
pub mod query;

pub use client::NewsClient;
pub use envelope::{FEED_SOURCE, FeedEnvelope, NewsEnvelope};
pub use error::{INVALID_DATE_MESSAGE, NewsError};
pub use feed::{FeedArticle, FeedRequest};
pub use query::{NewsQuery, NewsType, QueryParams};

#[cfg(test)]
pub(crate) use client::tests::mock_client;
