//! Highlight Chips Component
//!
//! Inline strip of short highlight labels shown at the top of a panel.

use dioxus::prelude::*;

/// Displays one chip per highlight, in order
///
/// Renders nothing when `highlights` is empty.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HighlightChips {
///         highlights: vec!["Gen 1".to_string(), "PvP".to_string()],
///     }
/// }
/// ```
#[component]
pub fn HighlightChips(highlights: Vec<String>) -> Element {
    if highlights.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "hi",
            for (i, highlight) in highlights.iter().enumerate() {
                span { key: "{i}", class: "chip", "{highlight}" }
            }
        }
    }
}
