//! Shared route-protection policy for the admin dashboard.
//!
//! This crate owns the authorization rules used by both enforcement points:
//! the `server` edge gate (cookie only, coarse) and the `client` route guard
//! (browser storage, role aware). It has no web dependencies so every rule can
//! be exercised natively.
//!
//! ARCHITECTURE
//! ============
//! - `route` classifies request paths into public / protected / admin-only.
//! - `profile` holds the stored user snapshot and the canonical role claim.
//! - `policy` turns (route class, credential presence, role) into a decision.
//! - `guard` is the `checking -> terminal` state machine, pinned to a path.
//! - `store` is the single accessor for credentials kept in key/value storage.

pub mod guard;
pub mod policy;
pub mod profile;
pub mod route;
pub mod store;

pub use guard::{GuardStatus, RouteGate};
pub use policy::{Decision, SessionView, authorize, edge_decision};
pub use profile::{ProfileSnapshot, Role};
pub use route::{RouteClass, RouteTable, matches_prefix};
pub use store::{CredentialStore, KeyValueStorage, MemoryStorage, StorageError, StoredSession};
