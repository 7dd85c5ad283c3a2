//! Page data context for the patch notes viewer.
//!
//! The configuration and records are loaded once in `main` and handed to the
//! component tree through Dioxus context, never through globals.
//!
//! ## Usage
//!
//! ```ignore
//! let data = use_page_data();
//! let items = data.render_items();
//! ```

use dioxus::prelude::*;
use patchnotes_core::{
    DisclosureItem, DisclosureListRenderer, MemoryPage, PatchBundle, PatchConfig, PatchNote,
    DEFAULT_CONTAINER_ID,
};

/// Everything the notes page displays.
#[derive(Clone, Debug, Default)]
pub struct PageData {
    pub config: PatchConfig,
    pub notes: Vec<PatchNote>,
}

impl From<PatchBundle> for PageData {
    fn from(bundle: PatchBundle) -> Self {
        Self {
            config: bundle.config,
            notes: bundle.notes,
        }
    }
}

impl PageData {
    /// Run the renderer against an in-memory page and collect the items.
    ///
    /// The page always has the list container, so this only comes back
    /// empty when there are no records.
    pub fn render_items(&self) -> Vec<DisclosureItem> {
        let renderer = DisclosureListRenderer::new(self.config.clone());
        let mut page = MemoryPage::with_container(DEFAULT_CONTAINER_ID);
        if let Err(e) = renderer.render(&mut page, &self.notes) {
            tracing::error!("Failed to render patch notes: {}", e);
        }
        page.take_items(DEFAULT_CONTAINER_ID)
    }
}

/// Hook to access the page data from context.
pub fn use_page_data() -> PageData {
    use_context::<PageData>()
}
