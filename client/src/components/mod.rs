//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome and the form building blocks the
//! section pages assemble. They receive signals and callbacks as props and
//! never hold record state themselves.

pub mod alert_banner;
pub mod form_fields;
pub mod image_picker;
pub mod search_box;
pub mod section_header;
pub mod sidebar;
pub mod summary_card;
