//! Data types for release records and display configuration

pub mod config;
pub mod note;

pub use config::{Locale, PatchConfig, DEFAULT_TITLE};
pub use note::{GroupKind, PatchNote};
