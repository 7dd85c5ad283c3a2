//! Immutable descriptions of rendered disclosure items
//!
//! A [`DisclosureItem`] is built once from a [`PatchNote`] and a
//! [`PatchConfig`]. It owns copies of everything it displays, so the input
//! records can be dropped after rendering. Materializing the description
//! (HTML, Dioxus, in-memory) is left to a rendering boundary.

use crate::date::format_release_date;
use crate::toggle::ItemToggle;
use crate::types::{GroupKind, PatchConfig, PatchNote};

/// Always-visible summary row, which is also the item's toggle control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadView {
    /// `v` followed by the record's version
    pub version_label: String,
    /// Record title, or the configured default title
    pub title: String,
    /// Formatted release date
    pub date_label: String,
}

impl HeadView {
    /// One-line text rendering: `v1.0.0 — Release — 31 jan 2026`
    pub fn summary(&self) -> String {
        format!(
            "{} \u{2014} {} \u{2014} {}",
            self.version_label, self.title, self.date_label
        )
    }
}

/// One labeled detail group inside a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    pub kind: GroupKind,
    /// Localized tag label (e.g. "Added")
    pub label: String,
    pub entries: Vec<String>,
}

impl GroupView {
    /// CSS class of the group's tag
    pub fn class(&self) -> &'static str {
        self.kind.class()
    }
}

/// Hidden-by-default detail region
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelView {
    /// Highlight chips, in input order (empty means no strip)
    pub highlights: Vec<String>,
    /// Non-empty groups in Added, Changed, Fixed order
    pub groups: Vec<GroupView>,
}

impl PanelView {
    pub fn has_highlights(&self) -> bool {
        !self.highlights.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty() && self.groups.is_empty()
    }

    /// Group of the given kind, if it was emitted
    pub fn group(&self, kind: GroupKind) -> Option<&GroupView> {
        self.groups.iter().find(|g| g.kind == kind)
    }
}

/// A self-contained disclosure item: head, panel and its own toggle state
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureItem {
    /// Position in the rendered list, used as a stable key
    pub position: usize,
    pub head: HeadView,
    pub panel: PanelView,
    pub toggle: ItemToggle,
}

impl DisclosureItem {
    /// Describe one record. Missing optional fields degrade to their
    /// fallbacks; this never fails.
    pub fn from_note(position: usize, note: &PatchNote, config: &PatchConfig) -> Self {
        let head = HeadView {
            version_label: format!("v{}", note.version),
            title: note.effective_title(&config.default_title).to_string(),
            date_label: format_release_date(&note.date, config.locale),
        };

        let groups = note
            .groups()
            .map(|(kind, entries)| GroupView {
                kind,
                label: kind.label(config.locale).to_string(),
                entries: entries.to_vec(),
            })
            .collect();

        Self {
            position,
            head,
            panel: PanelView {
                highlights: note.highlights.clone(),
                groups,
            },
            toggle: ItemToggle::new(),
        }
    }

    /// Key for keyed list rendering
    pub fn key(&self) -> String {
        format!("{}-{}", self.position, self.head.version_label)
    }
}
