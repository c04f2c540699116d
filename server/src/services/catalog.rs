//! Page data gathering.
//!
//! DESIGN
//! ======
//! The list of showcased repositories lives in a plain text file, one repo
//! name per line. Each repo's README overview becomes a project card; the
//! profile repo (`{user}/{user}`) supplies the about section. A repo whose
//! README cannot be fetched is logged and left out rather than failing the
//! whole page.

use std::path::Path;

use serde::Serialize;

use super::github::{GithubClient, GithubError};
use super::readme::{extract_overview, extract_section, render_markdown};

/// Errors that prevent gathering page data at all.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The projects file could not be read.
    #[error("failed to read projects file {path}: {source}")]
    ProjectsFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Every README fetch failed (GitHub outage, rate limit, bad token).
    #[error("no project READMEs could be fetched ({requested} requested)")]
    Unavailable { requested: usize },
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub overview_html: String,
    pub github_url: String,
}

/// Everything the index template renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub github_user: String,
    pub projects: Vec<Project>,
    pub about_me_html: Option<String>,
}

/// Repository names from the projects file. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`CatalogError::ProjectsFile`] if the file cannot be read.
pub async fn read_project_names(path: &Path) -> Result<Vec<String>, CatalogError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::ProjectsFile { path: path.display().to_string(), source })?;
    Ok(parse_project_names(&raw))
}

fn parse_project_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Build a project card from a README.
#[must_use]
pub fn project_from_readme(github: &GithubClient, repo: &str, readme: &str) -> Project {
    Project {
        name: repo.to_string(),
        overview_html: render_markdown(&extract_overview(readme)),
        github_url: github.repo_url(repo),
    }
}

/// Fetch the cards for `repos`, in file order, skipping failures.
pub async fn gather_projects(github: &GithubClient, repos: &[String]) -> Vec<Project> {
    let mut projects = Vec::with_capacity(repos.len());
    for repo in repos {
        match github.readme(repo).await {
            Ok(readme) => projects.push(project_from_readme(github, repo, &readme)),
            Err(e) => tracing::warn!(%repo, error = %e, "skipping project: README fetch failed"),
        }
    }
    projects
}

/// About section from the profile README.
///
/// # Errors
///
/// Returns the fetch error; the caller decides whether the page can do
/// without it.
pub async fn gather_about_me(github: &GithubClient, section: &str) -> Result<String, GithubError> {
    let readme = github.readme(github.user()).await?;
    Ok(render_markdown(&extract_section(&readme, section)))
}

/// Gather everything the index page shows.
///
/// # Errors
///
/// Fails if the projects file is unreadable, or if it lists repositories
/// and none of their READMEs could be fetched.
pub async fn gather(github: &GithubClient, projects_file: &Path, about_section: &str) -> Result<PageData, CatalogError> {
    let repos = read_project_names(projects_file).await?;
    let projects = gather_projects(github, &repos).await;
    if projects.is_empty() && !repos.is_empty() {
        return Err(CatalogError::Unavailable { requested: repos.len() });
    }

    let about_me_html = match gather_about_me(github, about_section).await {
        Ok(html) => Some(html),
        Err(e) => {
            tracing::warn!(error = %e, "about section unavailable");
            None
        }
    };

    tracing::info!(requested = repos.len(), loaded = projects.len(), "page data gathered");
    Ok(PageData { github_user: github.user().to_string(), projects, about_me_html })
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
