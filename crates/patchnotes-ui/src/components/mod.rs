//! Components for the patch notes page
//!
//! Class names match the patch notes stylesheet (`item`, `head`, `panel`,
//! `chip`, `group`, `tag`).

mod detail_group;
mod disclosure_list;
mod download_link;
mod highlight_chips;

pub use detail_group::*;
pub use disclosure_list::*;
pub use download_link::*;
pub use highlight_chips::*;
