use super::InventoryPager;
use crate::enums::Language;
use crate::http::HttpExecutor;
use std::sync::Arc;

/// Builder for constructing an [`InventoryPager`].
#[derive(Clone)]
pub struct InventoryPagerBuilder {
    pub(crate) client: Arc<dyn HttpExecutor>,
    pub(crate) language: Language,
}

impl std::fmt::Debug for InventoryPagerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryPagerBuilder")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Default for InventoryPagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryPagerBuilder {
    /// Creates a new [`InventoryPagerBuilder`] with a client that sends no cookies.
    /// 
    /// Public inventories can be read without cookies. Use [`InventoryPagerBuilder::client`] to
    /// read your own private inventory.
    pub fn new() -> Self {
        Self {
            client: Arc::new(reqwest::Client::new()),
            language: Language::default(),
        }
    }
    
    /// Client to use for requests.
    pub fn client(mut self, client: Arc<dyn HttpExecutor>) -> Self {
        self.client = client;
        self
    }
    
    /// Language for item descriptions.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
    
    /// Builds the [`InventoryPager`].
    pub fn build(self) -> InventoryPager {
        self.into()
    }
}
