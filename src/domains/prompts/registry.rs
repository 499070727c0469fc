//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use super::definitions::{
    ComprehensiveSearchPrompt, FeedLatestPrompt, LatestAnnouncementsPrompt, LatestBlogsPrompt,
    PromptDefinition, RecentUpdatesPrompt, RegionalExpansionsPrompt, WeeklyDigestPrompt,
    WhatsNewTodayPrompt,
};
use super::templates::PromptTemplate;

/// Build a PromptTemplate from a PromptDefinition.
fn build_template<P: PromptDefinition>() -> PromptTemplate {
    PromptTemplate::new(
        P::NAME,
        Some(P::DESCRIPTION.to_string()),
        P::arguments(),
        P::render,
    )
}

/// Get all registered prompts as PromptTemplates.
///
/// This is the central place where all prompts are registered.
/// When adding a new prompt, add it here.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        build_template::<RecentUpdatesPrompt>(),
        build_template::<LatestBlogsPrompt>(),
        build_template::<LatestAnnouncementsPrompt>(),
        build_template::<RegionalExpansionsPrompt>(),
        build_template::<WhatsNewTodayPrompt>(),
        build_template::<WeeklyDigestPrompt>(),
        build_template::<ComprehensiveSearchPrompt>(),
        build_template::<FeedLatestPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        RecentUpdatesPrompt::NAME,
        LatestBlogsPrompt::NAME,
        LatestAnnouncementsPrompt::NAME,
        RegionalExpansionsPrompt::NAME,
        WhatsNewTodayPrompt::NAME,
        WeeklyDigestPrompt::NAME,
        ComprehensiveSearchPrompt::NAME,
        FeedLatestPrompt::NAME,
    ]
}
