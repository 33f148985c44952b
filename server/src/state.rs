use std::sync::Arc;

use color_eyre::{eyre::Context, Result};
use recipes::{filters::RecipeFilters, taxonomy::TaxonomyRegistry, RecipeBook};
use tracing::instrument;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("APP_BASE_URL")
            .wrap_err("Missing APP_BASE_URL, needed for app launch")?;
        let base_url = Url::parse(&base_url).wrap_err("Invalid APP_BASE_URL not parsable")?;

        Ok(Self { base_url })
    }

    pub fn app_url(&self, path: &str) -> String {
        let mut url = self.base_url.clone();

        url.set_path(path);

        url.into()
    }

    pub fn home_page(&self) -> String {
        self.base_url.to_string()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub book: Arc<RecipeBook>,
    pub filters: Arc<RecipeFilters>,
    pub taxonomies: Arc<TaxonomyRegistry>,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> Result<Self> {
        let book = RecipeBook::from_static_dir()?;
        book.validate()?;

        Ok(AppState {
            app: AppConfig::from_env()?,
            book: Arc::new(book),
            filters: Arc::new(RecipeFilters::new()),
            taxonomies: Arc::new(TaxonomyRegistry::with_defaults()),
        })
    }
}
