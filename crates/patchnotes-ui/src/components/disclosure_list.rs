//! Disclosure List Components
//!
//! The list container and the collapsible cards inside it. Each card owns
//! its toggle state; expanding one card never touches another, and several
//! may be open at once.
//!
//! The panel's `max-height` comes from its scroll height measured when the
//! head is activated, so entries of any length fit.

use std::rc::Rc;

use dioxus::prelude::*;
use patchnotes_core::{DisclosureItem, ItemToggle};

use super::{DetailGroup, HighlightChips};

/// Chevron shown at the right of every head
const CHEVRON: &str = "\u{2304}";

/// Classes for the card element
pub fn card_class(toggle: &ItemToggle) -> &'static str {
    if toggle.is_expanded() {
        "item open"
    } else {
        "item"
    }
}

/// Keys that activate a focused head, like a native button
pub fn is_activation_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

/// A held key toggles once; auto-repeated keydowns are ignored
pub fn should_toggle_on_key(is_auto_repeating: bool) -> bool {
    !is_auto_repeating
}

/// Scroll height of the panel content, or 0 if it cannot be measured
async fn measure_panel(panel: Option<Rc<MountedData>>) -> f64 {
    let Some(panel) = panel else {
        return 0.0;
    };
    match panel.get_scroll_size().await {
        Ok(size) => size.height,
        Err(e) => {
            tracing::warn!("Failed to measure panel height: {:?}", e);
            0.0
        }
    }
}

/// The list container holding one card per item
///
/// # Example
///
/// ```rust,ignore
/// let items = renderer.build_items(&notes);
///
/// rsx! {
///     DisclosureList { items }
/// }
/// ```
#[component]
pub fn DisclosureList(
    /// Items in display order
    items: Vec<DisclosureItem>,
    /// Element id of the container
    #[props(default = "list".to_string())]
    id: String,
) -> Element {
    rsx! {
        div { id: "{id}", class: "list",
            for item in items {
                {
                    let key = item.key();
                    rsx! {
                        DisclosureCard { key: "{key}", item }
                    }
                }
            }
        }
    }
}

/// One collapsible release entry
///
/// The head is the only toggle control. `aria-expanded` on the head follows
/// the toggle state on every transition.
#[component]
pub fn DisclosureCard(item: DisclosureItem) -> Element {
    let mut toggle = use_signal(|| item.toggle);
    let mut panel_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let activate = move || async move {
        let height = measure_panel(panel_ref()).await;
        let state = toggle.write().activate(height);
        tracing::debug!(?state, height, "Toggled release entry");
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if !is_activation_key(&evt.key()) {
            return;
        }
        // Keep Space from scrolling the page
        evt.prevent_default();
        if should_toggle_on_key(evt.is_auto_repeating()) {
            spawn(activate());
        }
    };

    let current = toggle();
    let panel_id = format!("panel-{}", item.position);
    let panel_style = current.panel_style();
    let head = item.head;
    let panel = item.panel;

    rsx! {
        article { class: card_class(&current),
            div {
                class: "head",
                role: "button",
                tabindex: "0",
                "aria-expanded": current.aria_expanded(),
                "aria-controls": "{panel_id}",
                onclick: move |_| activate(),
                onkeydown: on_keydown,

                div { class: "head-left",
                    span { class: "ver", "{head.version_label}" }
                    span { class: "title", "{head.title}" }
                    span { class: "date", "\u{2014} {head.date_label}" }
                }
                div { class: "chevBtn", "aria-hidden": "true", "{CHEVRON}" }
            }

            div {
                class: "panel",
                id: "{panel_id}",
                style: "{panel_style}",
                onmounted: move |evt| panel_ref.set(Some(evt.data())),

                HighlightChips { highlights: panel.highlights.clone() }
                for group in panel.groups.iter() {
                    DetailGroup { key: "{group.class()}", group: group.clone() }
                }
            }
        }
    }
}
