//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and shared widgets while reading
//! session state from Leptos context.

pub mod admin_layout;
pub mod confirm_dialog;
pub mod pagination;
pub mod route_guard;
pub mod sidebar;
pub mod stat_card;
