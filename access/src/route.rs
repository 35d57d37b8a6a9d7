//! Static route table and path classification.
//!
//! DESIGN
//! ======
//! Every path lands in exactly one [`RouteClass`]. Admin prefixes are checked
//! first, then public paths; anything else is protected (default deny).
//! Prefix checks always stop at a `/` segment boundary so `/admin` never
//! matches `/administrator`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Landing page; also the "home" redirect target.
pub const HOME_PATH: &str = "/";
/// Login page; target for unauthenticated access to protected paths.
pub const LOGIN_PATH: &str = "/login";
/// Root of the admin area.
pub const ADMIN_PATH: &str = "/admin";

const DEFAULT_PUBLIC_PATHS: [&str; 4] = [HOME_PATH, LOGIN_PATH, "/register", "/forgot-password"];
const DEFAULT_ADMIN_PREFIXES: [&str; 1] = [ADMIN_PATH];

/// Access partition a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteClass {
    /// Reachable without a credential.
    Public,
    /// Requires a credential; any role.
    Protected,
    /// Requires a credential with the admin role.
    AdminOnly,
}

impl RouteClass {
    /// Whether a credential is needed to view this class of route.
    #[must_use]
    pub fn requires_credential(self) -> bool {
        !matches!(self, Self::Public)
    }
}

/// Public paths and admin prefixes used to classify request paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    public: Vec<String>,
    admin: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PATHS, DEFAULT_ADMIN_PREFIXES)
    }
}

impl RouteTable {
    /// Build a table from explicit public paths and admin prefixes.
    ///
    /// Entries are normalized the same way request paths are, so `"/admin/"`
    /// and `"/admin"` are equivalent.
    pub fn new<P, A>(public: P, admin: A) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            public: public.into_iter().map(|p| normalize_path(p.as_ref()).to_owned()).collect(),
            admin: admin.into_iter().map(|p| normalize_path(p.as_ref()).to_owned()).collect(),
        }
    }

    /// Classify a request path (query string and fragment are ignored).
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        let path = normalize_path(path);
        if self.admin.iter().any(|prefix| matches_prefix(path, prefix)) {
            return RouteClass::AdminOnly;
        }
        if self.public.iter().any(|public| matches_public(path, public)) {
            return RouteClass::Public;
        }
        RouteClass::Protected
    }
}

/// Whether `path` equals `prefix` or continues it past a `/` boundary.
#[must_use]
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize_path(path);
    let prefix = normalize_path(prefix);
    if prefix == "/" {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// The root public path only matches itself; others also cover sub-paths.
fn matches_public(path: &str, public: &str) -> bool {
    if public == HOME_PATH {
        return path == HOME_PATH;
    }
    matches_prefix(path, public)
}

/// Strip query, fragment, and trailing slashes. An empty result becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
