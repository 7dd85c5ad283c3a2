//! Release Record Types
//!
//! A [`PatchNote`] is one versioned entry describing a release. Records come
//! from hand-edited data files, so deserialization is lenient: absent or
//! `null` fields fall back to empty values instead of failing the document.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::parse_release_date;
use crate::types::config::Locale;

/// The fixed taxonomy of detail groups, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Added,
    Changed,
    Fixed,
}

impl GroupKind {
    /// All groups in the order they appear in a panel
    pub const ALL: [GroupKind; 3] = [GroupKind::Added, GroupKind::Changed, GroupKind::Fixed];

    /// CSS class of the group's tag
    pub fn class(&self) -> &'static str {
        match self {
            GroupKind::Added => "add",
            GroupKind::Changed => "chg",
            GroupKind::Fixed => "fix",
        }
    }

    /// Display label for the group tag
    pub fn label(&self, locale: Locale) -> &'static str {
        locale.group_label(*self)
    }
}

/// One versioned release entry
///
/// # Example
///
/// ```rust
/// use patchnotes_core::PatchNote;
///
/// let note: PatchNote = serde_json::from_str(
///     r#"{ "version": "1.0.0", "date": "2026-01-31", "added": ["Weekly challenges"] }"#,
/// ).unwrap();
///
/// assert_eq!(note.effective_title("Patch notes"), "Patch notes");
/// assert_eq!(note.added, vec!["Weekly challenges".to_string()]);
/// assert!(note.fixed.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchNote {
    /// Version identifier, display-only
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    /// Release date as written in the data file (`YYYY-MM-DD`)
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Optional title; blank means "use the configured default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short labels shown as chips
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub added: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub changed: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub fixed: Vec<String>,
}

impl PatchNote {
    /// Whether the record carries a non-blank title
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// The record's title, or `default_title` when it is absent or blank
    pub fn effective_title<'a>(&'a self, default_title: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => default_title,
        }
    }

    /// Entries of one detail group
    pub fn entries(&self, kind: GroupKind) -> &[String] {
        match kind {
            GroupKind::Added => &self.added,
            GroupKind::Changed => &self.changed,
            GroupKind::Fixed => &self.fixed,
        }
    }

    /// Non-empty detail groups in display order
    pub fn groups(&self) -> impl Iterator<Item = (GroupKind, &[String])> + '_ {
        GroupKind::ALL
            .into_iter()
            .map(|kind| (kind, self.entries(kind)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    /// Parsed calendar date, if the date string is well-formed
    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_release_date(&self.date)
    }
}

/// Accepts a string, a number or `null` (which becomes an empty string)
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with_title(title: Option<&str>) -> PatchNote {
        PatchNote {
            version: "1.0.0".to_string(),
            title: title.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_title_fallback() {
        assert_eq!(note_with_title(None).effective_title("Patch notes"), "Patch notes");
        assert_eq!(note_with_title(Some("")).effective_title("Patch notes"), "Patch notes");
        assert_eq!(note_with_title(Some("   ")).effective_title("Patch notes"), "Patch notes");
    }

    #[test]
    fn test_effective_title_verbatim() {
        let note = note_with_title(Some("  Launch day "));
        assert!(note.has_title());
        assert_eq!(note.effective_title("Patch notes"), "  Launch day ");
    }

    #[test]
    fn test_groups_skip_empty_in_fixed_order() {
        let note = PatchNote {
            fixed: vec!["crash on login".to_string()],
            added: vec!["challenges".to_string()],
            ..Default::default()
        };
        let kinds: Vec<GroupKind> = note.groups().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![GroupKind::Added, GroupKind::Fixed]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let note: PatchNote = serde_json::from_str("{}").unwrap();
        assert_eq!(note, PatchNote::default());
    }

    #[test]
    fn test_deserialize_nulls_and_numbers() {
        let note: PatchNote = serde_json::from_str(
            r#"{"version": 2, "date": null, "title": null, "highlights": null, "changed": null}"#,
        )
        .unwrap();
        assert_eq!(note.version, "2");
        assert_eq!(note.date, "");
        assert!(note.title.is_none());
        assert!(note.highlights.is_empty());
        assert!(note.changed.is_empty());
    }

    #[test]
    fn test_highlights_keep_duplicates() {
        let note: PatchNote =
            serde_json::from_str(r#"{"highlights": ["PvP", "PvP", "Gen 1"]}"#).unwrap();
        assert_eq!(note.highlights, vec!["PvP", "PvP", "Gen 1"]);
    }

    #[test]
    fn test_group_classes() {
        assert_eq!(GroupKind::Added.class(), "add");
        assert_eq!(GroupKind::Changed.class(), "chg");
        assert_eq!(GroupKind::Fixed.class(), "fix");
    }
}
