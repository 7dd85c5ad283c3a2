//! Patch Notes UI Components
//!
//! Dioxus components that materialize [`patchnotes_core::DisclosureItem`]
//! descriptions in a live UI tree.
//!
//! ## Components
//!
//! - [`DisclosureList`] - the `#list` container, one card per item
//! - [`DisclosureCard`] - one collapsible release entry with its own toggle
//! - [`HighlightChips`] - inline highlight tags
//! - [`DetailGroup`] - a tagged Added / Changed / Fixed section
//! - [`DownloadLink`] - link to the update described by the notes
//!
//! All record text is rendered as text nodes, so markup in the data shows up
//! literally instead of being interpreted.

pub mod components;

pub use components::*;
