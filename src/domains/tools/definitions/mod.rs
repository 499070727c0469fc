//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file and shares the news client.

pub mod announcements;
pub mod blogs;
pub mod common;
pub mod feed;
pub mod news;
pub mod regional;

pub use announcements::{GetAwsAnnouncementsParams, GetAwsAnnouncementsTool};
pub use blogs::{GetAwsBlogsParams, GetAwsBlogsTool};
pub use feed::{GetAwsFeedNewsParams, GetAwsFeedNewsTool};
pub use news::{GetAwsNewsParams, GetAwsNewsTool};
pub use regional::{GetAwsRegionalExpansionsParams, GetAwsRegionalExpansionsTool};
