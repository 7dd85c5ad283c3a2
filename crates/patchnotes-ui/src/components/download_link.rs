//! Download Link Component
//!
//! Points at the client update the notes describe. Only shown when the
//! configuration carries a download URL.

use dioxus::prelude::*;

/// Properties for the DownloadLink component
#[derive(Clone, PartialEq, Props)]
pub struct DownloadLinkProps {
    /// Configured download URL; nothing is rendered when absent
    pub url: Option<String>,
    /// Link text
    #[props(default = "Download update".to_string())]
    pub label: String,
}

/// Link styled as a primary button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DownloadLink { url: config.download_url.clone() }
/// }
/// ```
#[component]
pub fn DownloadLink(props: DownloadLinkProps) -> Element {
    let Some(url) = props.url.filter(|u| !u.trim().is_empty()) else {
        return rsx! {};
    };

    rsx! {
        a {
            class: "btn-primary download-link",
            href: "{url}",
            target: "_blank",
            rel: "noopener noreferrer",
            "{props.label}"
        }
    }
}
