pub mod client;
pub mod config;
pub mod content;
pub mod mapping;
pub mod page;
pub mod richtext;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::client::{ContentClient, FetchError};
    pub use crate::config::{AdminConfig, AdminFlags, SiteConfig};
    pub use crate::content::{ProjectAttributes, ProjectItem, RichTextBlock, RichTextChild};
    pub use crate::page::{CardImage, HomePage, ProjectCard};
    pub use crate::Folio;
}

use anyhow::Result;
use askama::Template;

use crate::client::{ContentClient, FetchError};
use crate::config::SiteConfig;
use crate::content::ProjectItem;
use crate::page::HomePage;

/// Library entry point. Owns the resolved site configuration and the
/// content-store client; one instance serves any number of renders.
pub struct Folio {
    config: SiteConfig,
    client: ContentClient,
}

impl Folio {
    /// Resolve configuration from the environment and build the client.
    pub fn from_env() -> Result<Self> {
        Self::with_config(SiteConfig::from_env()?)
    }

    pub fn with_config(config: SiteConfig) -> Result<Self> {
        let client = ContentClient::new(&config.api_url)?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch the raw project listing. One attempt, server order preserved.
    pub async fn projects(&self) -> Result<Vec<ProjectItem>, FetchError> {
        self.client.fetch_projects().await
    }

    /// Build the home page view. This is the render boundary: a failed
    /// fetch is logged and turned into the error banner, never propagated,
    /// so the page always renders (degraded, with an empty grid).
    pub async fn home_page(&self) -> HomePage {
        match self.client.fetch_projects().await {
            Ok(items) => {
                let cards = items
                    .iter()
                    .map(|item| mapping::card_from_item(item, &self.config.public_url))
                    .collect();
                HomePage::new(cards)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load projects");
                HomePage::failed(format!("Failed to fetch projects: {e}"))
            }
        }
    }

    /// Fetch and render the home page to an HTML string.
    pub async fn render_home(&self) -> Result<String> {
        Ok(self.home_page().await.render()?)
    }
}
