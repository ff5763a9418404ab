//! Tab management module
//!
//! Содержит:
//! - `registry` - маппинг tab.key → View (единственный источник правды)
//! - `tab_labels` - единственный источник правды для заголовков табов

pub mod registry;
pub mod tab_labels;

pub use registry::render_tab_content;
pub use tab_labels::tab_label_for_key;
