//! Prompt service implementation.
//!
//! The PromptService keeps the registered prompt templates and renders them
//! against the injected [`Clock`].
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and rendering prompts.
pub struct PromptService {
    clock: Arc<dyn Clock>,

    /// Key: prompt name, Value: prompt template
    prompts: BTreeMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a PromptService driven by wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a PromptService with a custom time source.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            clock,
            prompts: BTreeMap::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Render a prompt with the given arguments.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let arguments = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let content = template.render(&arguments, self.clock.now())?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
