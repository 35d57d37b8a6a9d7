//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `normalize` folds the backend's envelope
//! variants into `types`, and `error` is the shared failure taxonomy.

pub mod api;
pub mod error;
pub mod normalize;
pub mod types;
