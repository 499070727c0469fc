//! Prompts domain module.
//!
//! Prompts are instruction templates that tell the calling agent which news
//! tool to call, and with which arguments, for a natural-language request.
//! None of them perform I/O; the only input besides their arguments is the
//! current time, read from an injected [`Clock`].
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Prompt service for listing and rendering
//! - `templates.rs` - Argument parsing and instruction formatting
//! - `clock.rs` - Time sources
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod clock;
pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use clock::{Clock, FixedClock, SystemClock};
pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{get_all_prompts, prompt_names};
pub use service::PromptService;
pub use templates::PromptTemplate;
