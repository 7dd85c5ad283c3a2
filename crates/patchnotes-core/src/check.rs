//! Soft validation of release records
//!
//! Malformed records never stop a render; they degrade to fallbacks. This
//! module reports those degradations so data authors can spot them.

use std::collections::HashSet;
use std::fmt;

use crate::types::PatchNote;

/// A record field that will be shown using a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteWarning {
    EmptyVersion { position: usize },
    BlankTitle { position: usize, version: String },
    UnparsableDate { position: usize, version: String, date: String },
    DuplicateVersion { position: usize, version: String },
}

impl fmt::Display for NoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteWarning::EmptyVersion { position } => {
                write!(f, "record #{}: empty version", position)
            }
            NoteWarning::BlankTitle { position, version } => {
                write!(f, "record #{} (v{}): no title, default title will be shown", position, version)
            }
            NoteWarning::UnparsableDate { position, version, date } => {
                write!(f, "record #{} (v{}): date '{}' is not YYYY-MM-DD", position, version, date)
            }
            NoteWarning::DuplicateVersion { position, version } => {
                write!(f, "record #{}: version v{} appears more than once", position, version)
            }
        }
    }
}

/// Collect warnings for every record, in input order
pub fn check_notes(notes: &[PatchNote]) -> Vec<NoteWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (position, note) in notes.iter().enumerate() {
        let version = note.version.trim().to_string();

        if version.is_empty() {
            warnings.push(NoteWarning::EmptyVersion { position });
        } else if !seen.insert(version.clone()) {
            warnings.push(NoteWarning::DuplicateVersion {
                position,
                version: version.clone(),
            });
        }
        if !note.has_title() {
            warnings.push(NoteWarning::BlankTitle {
                position,
                version: version.clone(),
            });
        }
        if note.release_date().is_none() {
            warnings.push(NoteWarning::UnparsableDate {
                position,
                version,
                date: note.date.clone(),
            });
        }
    }

    warnings
}
