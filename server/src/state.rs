//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Page data is gathered once at startup and swapped wholesale on refresh,
//! so readers never see a half-updated project list.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::SiteConfig;
use crate::render::PageRenderer;
use crate::services::catalog::{self, CatalogError, PageData};
use crate::services::github::GithubClient;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub github: Arc<GithubClient>,
    pub renderer: Arc<PageRenderer>,
    pub data: Arc<RwLock<PageData>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, github: GithubClient, data: PageData) -> Self {
        let renderer = PageRenderer::from_dir(&config.template_dir);
        Self {
            config: Arc::new(config),
            github: Arc::new(github),
            renderer: Arc::new(renderer),
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Re-gather page data and replace the current copy.
    ///
    /// An about section that could not be fetched this time keeps its
    /// previous value.
    ///
    /// # Errors
    ///
    /// Leaves the current data untouched when gathering fails.
    pub async fn refresh(&self) -> Result<(), CatalogError> {
        let mut fresh = catalog::gather(&self.github, &self.config.projects_file, &self.config.about_section).await?;
        let mut data = self.data.write().await;
        if fresh.about_me_html.is_none() {
            fresh.about_me_html = data.about_me_html.take();
        }
        *data = fresh;
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
