//! Patch Notes Core Library
//!
//! Release records, the disclosure view model and the list renderer.
//!
//! ## Overview
//!
//! A release page shows one collapsible item per release record. Each item
//! has an always-visible head (version, title, date) and a hidden panel with
//! highlight chips and the Added / Changed / Fixed detail groups.
//!
//! The crate keeps the data-to-view mapping independent of any UI library:
//!
//! - [`DisclosureItem`] is an immutable description of one rendered item
//! - [`DisclosureListRenderer`] builds items and appends them to a
//!   container found on a [`HostPage`]
//! - [`MemoryPage`] and [`HtmlPage`] are the two built-in host pages; the
//!   Dioxus components in `patchnotes-ui` materialize items in a live UI
//!
//! ## Quick Start
//!
//! ```
//! use patchnotes_core::{DisclosureListRenderer, MemoryPage, PatchConfig, PatchNote};
//!
//! let notes = vec![PatchNote {
//!     version: "1.0.0".into(),
//!     date: "2026-01-31".into(),
//!     title: Some("Release".into()),
//!     highlights: vec!["Gen 1".into()],
//!     added: vec!["Feature A".into(), "Feature B".into()],
//!     ..Default::default()
//! }];
//!
//! let renderer = DisclosureListRenderer::new(PatchConfig::default());
//! let mut page = MemoryPage::with_container("list");
//! let count = renderer.render(&mut page, &notes).unwrap();
//!
//! assert_eq!(count, 1);
//! let item = &page.items("list").unwrap()[0];
//! assert_eq!(item.head.summary(), "v1.0.0 \u{2014} Release \u{2014} 31 jan 2026");
//! assert!(!item.toggle.is_expanded());
//! ```

pub mod check;
pub mod date;
pub mod error;
pub mod html;
pub mod loader;
pub mod logging;
pub mod render;
pub mod toggle;
pub mod types;
pub mod view;

// Re-exports
pub use check::{check_notes, NoteWarning};
pub use error::{PatchNotesError, PatchResult};
pub use html::HtmlPage;
pub use loader::{builtin_bundle, load_bundle, load_config, parse_bundle, PatchBundle};
pub use render::{DisclosureListRenderer, HostPage, ItemSink, MemoryPage, DEFAULT_CONTAINER_ID};
pub use toggle::{DisclosureState, ItemToggle, PANEL_PADDING_PX};
pub use types::*;
pub use view::{DisclosureItem, GroupView, HeadView, PanelView};
