//! Page components for the patch notes viewer.

mod notes;

pub use notes::Notes;
