//! Notes page - the release history.
//!
//! Header with the page title and optional download link, followed by the
//! disclosure list with one collapsible entry per release.

use dioxus::prelude::*;
use patchnotes_core::DEFAULT_CONTAINER_ID;
use patchnotes_ui::{DisclosureList, DownloadLink};

use crate::context::use_page_data;

/// Notes page component.
#[component]
pub fn Notes() -> Element {
    let data = use_page_data();
    let items = use_hook(|| data.render_items());

    let config = &data.config;
    let title = config.default_title.clone();
    let download_label = config.locale.download_label().to_string();

    rsx! {
        main { class: "notes-page",
            header { class: "notes-header",
                h1 { class: "page-title", "{title}" }
                DownloadLink {
                    url: config.download_url.clone(),
                    label: download_label,
                }
            }

            if items.is_empty() {
                p { class: "notes-empty", "No release notes yet" }
            } else {
                DisclosureList { items, id: DEFAULT_CONTAINER_ID.to_string() }
            }
        }
    }
}
