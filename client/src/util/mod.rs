//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the arithmetic and formatting can be tested natively.

pub mod auth;
pub mod credentials;
pub mod format;
pub mod pagination;
pub mod sequence;
