//! Disclosure list renderer and the host-page boundary
//!
//! The renderer looks up a designated container on a [`HostPage`], builds
//! one [`DisclosureItem`] per record and appends them in order. A missing
//! container is reported and leaves the page untouched.

use std::collections::BTreeMap;

use crate::error::{PatchNotesError, PatchResult};
use crate::types::{PatchConfig, PatchNote};
use crate::view::DisclosureItem;

/// Container id used when none is configured
pub const DEFAULT_CONTAINER_ID: &str = "list";

/// Something rendered items can be appended to
pub trait ItemSink {
    fn append(&mut self, item: DisclosureItem);
}

impl ItemSink for Vec<DisclosureItem> {
    fn append(&mut self, item: DisclosureItem) {
        self.push(item);
    }
}

/// A page that may contain the designated list container
pub trait HostPage {
    /// Find a container by id
    fn container(&mut self, id: &str) -> Option<&mut dyn ItemSink>;
}

/// Renders release records into a host page's list container
///
/// # Example
///
/// ```rust
/// use patchnotes_core::{DisclosureListRenderer, MemoryPage, PatchConfig, PatchNote, PatchNotesError};
///
/// let renderer = DisclosureListRenderer::new(PatchConfig::default());
///
/// // No container with the default id: reported, nothing appended.
/// let mut page = MemoryPage::with_container("sidebar");
/// let result = renderer.render(&mut page, &[PatchNote::default()]);
/// assert!(matches!(result, Err(PatchNotesError::MissingContainer(_))));
/// assert!(page.items("sidebar").unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DisclosureListRenderer {
    config: PatchConfig,
    container_id: String,
}

impl DisclosureListRenderer {
    pub fn new(config: PatchConfig) -> Self {
        Self {
            config,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }

    /// Render into a container other than `#list`
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Build items for all records without touching any page
    pub fn build_items(&self, notes: &[PatchNote]) -> Vec<DisclosureItem> {
        notes
            .iter()
            .enumerate()
            .map(|(position, note)| DisclosureItem::from_note(position, note, &self.config))
            .collect()
    }

    /// Append one item per record, in input order, to the designated
    /// container. Returns the number of items appended.
    pub fn render<H: HostPage + ?Sized>(
        &self,
        host: &mut H,
        notes: &[PatchNote],
    ) -> PatchResult<usize> {
        let Some(container) = host.container(&self.container_id) else {
            tracing::error!(container = %self.container_id, "List container not found, skipping render");
            return Err(PatchNotesError::MissingContainer(self.container_id.clone()));
        };

        let items = self.build_items(notes);
        let count = items.len();
        for item in items {
            container.append(item);
        }

        tracing::debug!(container = %self.container_id, count, "Rendered patch notes");
        Ok(count)
    }
}

/// In-memory host page with named containers
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    containers: BTreeMap<String, Vec<DisclosureItem>>,
}

impl MemoryPage {
    /// A page without any containers
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with one empty container
    pub fn with_container(id: impl Into<String>) -> Self {
        let mut page = Self::new();
        page.add_container(id);
        page
    }

    /// Add an empty container (keeps existing contents if already present)
    pub fn add_container(&mut self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    pub fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    /// Items in a container, or `None` if it does not exist
    pub fn items(&self, id: &str) -> Option<&[DisclosureItem]> {
        self.containers.get(id).map(Vec::as_slice)
    }

    /// Move the items out of a container, leaving it empty
    pub fn take_items(&mut self, id: &str) -> Vec<DisclosureItem> {
        self.containers
            .get_mut(id)
            .map(std::mem::take)
            .unwrap_or_default()
    }
}

impl HostPage for MemoryPage {
    fn container(&mut self, id: &str) -> Option<&mut dyn ItemSink> {
        self.containers
            .get_mut(id)
            .map(|items| items as &mut dyn ItemSink)
    }
}
