//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers; route guards
//! are the only ones that navigate programmatically.

pub mod faq_section;
pub mod footer;
pub mod guards;
pub mod install_modal;
pub mod navbar;
pub mod otp_modal;
pub mod recent_activity;
pub mod sidebar;
pub mod stats_card;
pub mod testimonials_section;
pub mod toast_host;
