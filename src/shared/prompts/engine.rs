//! Template engine for prompt management using Jinja2 syntax.
//!
//! Prompt templates live under `templates/prompts/` and are loaded once on
//! first render.

use minijinja::{Environment, Value};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template directory relative to the project root
const TEMPLATE_DIR: &str = "templates/prompts";

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    let template_path = Path::new(TEMPLATE_DIR);
    if let Ok(entries) = std::fs::read_dir(template_path) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "jinja") {
                let template_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                if let Ok(content) = std::fs::read_to_string(&path) {
                    // Convert to 'static str by leaking (safe for long-lived templates)
                    let static_name: &'static str =
                        Box::leak(template_name.clone().into_boxed_str());
                    let static_content: &'static str = Box::leak(content.into_boxed_str());
                    if let Err(e) = env.add_template(static_name, static_content) {
                        tracing::warn!("Failed to load template {}: {}", template_name, e);
                    } else {
                        tracing::debug!("Loaded template: {}", template_name);
                    }
                }
            }
        }
    }

    env
}

/// Render a named template with the given context
pub fn render_template(name: &str, context: Value) -> Result<String, TemplateError> {
    let env = TEMPLATE_ENV.get_or_init(init_environment);

    let template = env
        .get_template(name)
        .map_err(|_| TemplateError::NotFound(name.to_string()))?;

    template
        .render(context)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}
