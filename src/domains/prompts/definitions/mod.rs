//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - A pure function producing the instruction from typed values
//! - A `render()` adapter parsing the raw string arguments
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod comprehensive_search;
mod feed_latest;
mod latest_announcements;
mod latest_blogs;
mod recent_updates;
mod regional_expansions;
mod weekly_digest;
mod whats_new_today;

use chrono::{DateTime, Utc};
use rmcp::model::PromptArgument;

use super::error::PromptError;
use super::templates::PromptArguments;

pub use comprehensive_search::{ComprehensiveSearchPrompt, comprehensive_search};
pub use feed_latest::{FeedLatestPrompt, feed_latest};
pub use latest_announcements::{LatestAnnouncementsPrompt, latest_announcements};
pub use latest_blogs::{LatestBlogsPrompt, latest_blogs};
pub use recent_updates::{RecentUpdatesPrompt, recent_updates};
pub use regional_expansions::{RegionalExpansionsPrompt, regional_expansions};
pub use weekly_digest::{WeeklyDigestPrompt, weekly_digest};
pub use whats_new_today::{WhatsNewTodayPrompt, whats_new_today};

/// Trait for prompt definitions.
///
/// Each prompt must implement this trait to provide its metadata and renderer.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Produce the instruction text at instant `now`.
    fn render(args: &PromptArguments<'_>, now: DateTime<Utc>) -> Result<String, PromptError>;
}

/// Shared description of the `service` argument.
const SERVICE_DESCRIPTION: &str = "Any AWS service name (e.g., 'lambda', 's3', 'ec2', 'bedrock')";

#[cfg(test)]
pub(crate) fn test_now() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2025, 5, 31, 8, 30, 15).unwrap()
}
