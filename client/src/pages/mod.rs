//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`home`, `login`, `register`, `forgot_password`) render on
//! their own. Admin pages render inside `AdminLayout`; every page sits behind
//! the `RouteGuard` mounted in `App`.

pub mod dashboard;
pub mod faqs;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod plans;
pub mod products;
pub mod register;
pub mod reviews;
pub mod settings;
pub mod subscribers;
pub mod users;
