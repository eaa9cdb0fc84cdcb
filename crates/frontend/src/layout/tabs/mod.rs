//! Tab plumbing
//!
//! - `page` mounts one tab's content while the tab is active
//! - `registry` maps a tab key to its view
//! - `tab_labels` holds the titles shown in the tab bar and the sidebar

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
