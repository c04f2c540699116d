//! HTML page rendering.
//!
//! Templates are loaded from the configured template directory by relative
//! name (`pages/index.html`, `partials/project.html`). HTML auto-escaping is
//! on for `.html` templates; pre-rendered markdown is marked `| safe` in the
//! templates themselves.

use std::path::Path;

use minijinja::{Environment, context};

use crate::services::catalog::PageData;

pub const INDEX_TEMPLATE: &str = "pages/index.html";

/// Errors produced while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template {name} failed: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Renderer reading templates from `dir` on demand.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir));
        Self { env }
    }

    /// Render the index page.
    ///
    /// # Errors
    ///
    /// Fails when a template is missing or does not compile or evaluate.
    pub fn index(&self, data: &PageData) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(INDEX_TEMPLATE)
            .map_err(|source| RenderError::Template { name: INDEX_TEMPLATE, source })?;
        template
            .render(context! {
                github_user => &data.github_user,
                projects => &data.projects,
                about_me => &data.about_me_html,
            })
            .map_err(|source| RenderError::Template { name: INDEX_TEMPLATE, source })
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
