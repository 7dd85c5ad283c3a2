//! Detail Group Component
//!
//! One labeled section of a panel: a colored tag followed by its entries.

use dioxus::prelude::*;
use patchnotes_core::GroupView;

/// CSS classes for a group's tag
pub fn tag_class(group: &GroupView) -> String {
    format!("tag {}", group.class())
}

/// Displays a group tag and its entries as a list
///
/// # Example
///
/// ```rust,ignore
/// for group in item.panel.groups.iter() {
///     DetailGroup { group: group.clone() }
/// }
/// ```
#[component]
pub fn DetailGroup(group: GroupView) -> Element {
    let tag = tag_class(&group);

    rsx! {
        section { class: "group",
            span { class: "{tag}", "{group.label}" }
            ul {
                for (i, entry) in group.entries.iter().enumerate() {
                    li { key: "{i}", "{entry}" }
                }
            }
        }
    }
}
