//! Visual theme for the patch notes viewer.

mod styles;

pub use styles::GLOBAL_STYLES;
