//! Static HTML materializer
//!
//! Turns disclosure items into markup using the class names the patch notes
//! stylesheet expects. Record text is always escaped: highlights and entries
//! are inserted as text, never interpreted as markup.

use crate::render::{HostPage, ItemSink, DEFAULT_CONTAINER_ID};
use crate::view::{DisclosureItem, GroupView};

/// Chevron shown at the right of every head
const CHEVRON: &str = "\u{2304}";

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Accumulated markup for the items of one list container
#[derive(Debug, Clone, Default)]
pub struct HtmlList {
    html: String,
    count: usize,
}

impl HtmlList {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl ItemSink for HtmlList {
    fn append(&mut self, item: DisclosureItem) {
        let panel_id = format!("panel-{}", self.count);
        write_item(&mut self.html, &item, &panel_id);
        self.count += 1;
    }
}

/// A host page holding exactly one list container
///
/// # Example
///
/// ```rust
/// use patchnotes_core::{DisclosureListRenderer, HtmlPage, PatchConfig, PatchNote};
///
/// let note = PatchNote {
///     version: "1.0.0".into(),
///     added: vec!["<b>bold</b>".into()],
///     ..Default::default()
/// };
///
/// let mut page = HtmlPage::new("list");
/// DisclosureListRenderer::new(PatchConfig::default())
///     .render(&mut page, &[note])
///     .unwrap();
///
/// let html = page.fragment();
/// assert!(html.contains("<li>&lt;b&gt;bold&lt;/b&gt;</li>"));
/// ```
#[derive(Debug, Clone)]
pub struct HtmlPage {
    container_id: String,
    list: HtmlList,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID)
    }
}

impl HtmlPage {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            list: HtmlList::default(),
        }
    }

    pub fn list(&self) -> &HtmlList {
        &self.list
    }

    /// The container element with all appended items
    pub fn fragment(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"list\">\n{}</div>\n",
            escape_html(&self.container_id),
            self.list.as_str()
        )
    }
}

impl HostPage for HtmlPage {
    fn container(&mut self, id: &str) -> Option<&mut dyn ItemSink> {
        if id == self.container_id {
            Some(&mut self.list)
        } else {
            None
        }
    }
}

fn write_item(out: &mut String, item: &DisclosureItem, panel_id: &str) {
    let head = &item.head;
    let open_class = if item.toggle.is_expanded() { " open" } else { "" };

    out.push_str(&format!("<article class=\"item{}\">\n", open_class));
    out.push_str(&format!(
        "  <div class=\"head\" role=\"button\" tabindex=\"0\" aria-expanded=\"{}\" aria-controls=\"{}\">\n",
        item.toggle.aria_expanded(),
        panel_id
    ));
    out.push_str(&format!(
        "    <div class=\"head-left\"><span class=\"ver\">{}</span><span class=\"title\">{}</span><span class=\"date\">\u{2014} {}</span></div>\n",
        escape_html(&head.version_label),
        escape_html(&head.title),
        escape_html(&head.date_label)
    ));
    out.push_str(&format!(
        "    <div class=\"chevBtn\" aria-hidden=\"true\">{}</div>\n",
        CHEVRON
    ));
    out.push_str("  </div>\n");

    out.push_str(&format!(
        "  <div class=\"panel\" id=\"{}\" style=\"{}\">\n",
        panel_id,
        item.toggle.panel_style()
    ));
    if item.panel.has_highlights() {
        out.push_str("    <div class=\"hi\">");
        for highlight in &item.panel.highlights {
            out.push_str(&format!("<span class=\"chip\">{}</span>", escape_html(highlight)));
        }
        out.push_str("</div>\n");
    }
    for group in &item.panel.groups {
        write_group(out, group);
    }
    out.push_str("  </div>\n");
    out.push_str("</article>\n");
}

fn write_group(out: &mut String, group: &GroupView) {
    out.push_str(&format!(
        "    <section class=\"group\"><span class=\"tag {}\">{}</span><ul>",
        group.class(),
        escape_html(&group.label)
    ));
    for entry in &group.entries {
        out.push_str(&format!("<li>{}</li>", escape_html(entry)));
    }
    out.push_str("</ul></section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DisclosureListRenderer;
    use crate::types::{PatchConfig, PatchNote};

    fn render(notes: &[PatchNote]) -> HtmlPage {
        let mut page = HtmlPage::default();
        DisclosureListRenderer::new(PatchConfig::default())
            .render(&mut page, notes)
            .unwrap();
        page
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt; &amp; co"
        );
    }

    #[test]
    fn test_example_markup() {
        let page = render(&[PatchNote {
            version: "1.0.0".to_string(),
            date: "2026-01-31".to_string(),
            title: Some("Release".to_string()),
            highlights: vec!["Gen 1".to_string()],
            added: vec!["Feature A".to_string(), "Feature B".to_string()],
            ..Default::default()
        }]);
        let html = page.fragment();

        assert!(html.starts_with("<div id=\"list\" class=\"list\">"));
        assert!(html.contains("<article class=\"item\">"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("<span class=\"ver\">v1.0.0</span>"));
        assert!(html.contains("<span class=\"title\">Release</span>"));
        assert!(html.contains("<span class=\"date\">\u{2014} 31 jan 2026</span>"));
        assert!(html.contains("<div class=\"hi\"><span class=\"chip\">Gen 1</span></div>"));
        assert!(html.contains(
            "<span class=\"tag add\">Added</span><ul><li>Feature A</li><li>Feature B</li></ul>"
        ));
        assert!(!html.contains("tag chg"));
        assert!(!html.contains("tag fix"));
        assert!(html.contains("style=\"max-height: 0px;\""));
    }

    #[test]
    fn test_no_highlight_strip_when_empty() {
        let page = render(&[PatchNote::default()]);
        assert!(!page.fragment().contains("class=\"hi\""));
        assert_eq!(page.list().len(), 1);
    }

    #[test]
    fn test_panel_ids_are_unique() {
        let page = render(&[PatchNote::default(), PatchNote::default()]);
        let html = page.fragment();
        assert!(html.contains("id=\"panel-0\""));
        assert!(html.contains("id=\"panel-1\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = render(&[PatchNote {
            title: Some("<script>x</script>".to_string()),
            ..Default::default()
        }]);
        let html = page.fragment();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn test_other_container_ids_are_absent() {
        let mut page = HtmlPage::new("list");
        assert!(page.container("notes").is_none());
        assert!(page.list().is_empty());
    }
}
