//! Display configuration
//!
//! Passed explicitly into the renderer. Keys missing from a config file take
//! their defaults, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PatchNotesError, PatchResult};
use crate::types::note::GroupKind;

/// Title used when a record has none
pub const DEFAULT_TITLE: &str = "Patch notes";

/// Language used for group labels and month abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    /// Lowercase abbreviated month name for `month` in `1..=12`
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
        ];
        const PT_BR: [&str; 12] = [
            "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
        ];
        let table = match self {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
        };
        let index = month.clamp(1, 12) as usize - 1;
        table[index]
    }

    /// Text of the update download link
    pub fn download_label(&self) -> &'static str {
        match self {
            Locale::En => "Download update",
            Locale::PtBr => "Baixar atualização",
        }
    }

    /// Label of a detail group's tag
    pub fn group_label(&self, kind: GroupKind) -> &'static str {
        match (self, kind) {
            (Locale::En, GroupKind::Added) => "Added",
            (Locale::En, GroupKind::Changed) => "Changed",
            (Locale::En, GroupKind::Fixed) => "Fixed",
            (Locale::PtBr, GroupKind::Added) => "Adicionado",
            (Locale::PtBr, GroupKind::Changed) => "Alterado",
            (Locale::PtBr, GroupKind::Fixed) => "Corrigido",
        }
    }
}

/// Display configuration for a patch notes page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchConfig {
    /// Title shown for records without one
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Where the update described by the notes can be downloaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default)]
    pub locale: Locale,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            download_url: None,
            locale: Locale::default(),
        }
    }
}

impl PatchConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> PatchResult<()> {
        if let Some(url) = &self.download_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(PatchNotesError::Config(format!(
                    "downloadUrl must be an http(s) URL, got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }
}
