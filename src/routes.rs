//! Role-gated route table.
//!
//! DESIGN
//! ======
//! A `RouteTable` maps path patterns to required-role sets and resolves a
//! requested path into one of four outcomes. Denial for an authenticated
//! user is `NoPermission` — a dedicated view, never a silent redirect;
//! only unauthenticated access bounces to the login screen.

use crate::auth::{AuthGate, Role};

/// Outcome of resolving a path for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    NoPermission,
    NotFound,
}

struct RouteRule {
    /// Slash-separated pattern; a `:name` segment matches any one segment.
    pattern: String,
    required_roles: Vec<Role>,
    anonymous: bool,
}

/// Ordered route rules; first match wins.
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The table the recruitment dashboard ships with.
    #[must_use]
    pub fn dashboard() -> Self {
        let mut table = Self::new();
        for path in ["/", "/manager/interviews", "/manager/jobs", "/manager/offers", "/manager/candidates"] {
            table.protect(path, &Role::STAFF);
        }
        table.protect("/manager/employees", &[Role::Admin]);
        for path in [
            "/auth/login",
            "/auth/forgotPassword",
            "/auth/verifyToken/:token",
            "/auth/changePassword/:token",
            "/no-permission",
        ] {
            table.open(path);
        }
        table
    }

    /// Add a route requiring any of `roles`. An empty slice means "any
    /// authenticated user".
    pub fn protect(&mut self, pattern: &str, roles: &[Role]) {
        self.rules.push(RouteRule {
            pattern: pattern.to_owned(),
            required_roles: roles.to_vec(),
            anonymous: false,
        });
    }

    /// Add a route open to unauthenticated visitors.
    pub fn open(&mut self, pattern: &str) {
        self.rules.push(RouteRule {
            pattern: pattern.to_owned(),
            required_roles: Vec::new(),
            anonymous: true,
        });
    }

    /// Resolve `path` against the table for the session held by `gate`.
    #[must_use]
    pub fn resolve(&self, path: &str, gate: &AuthGate) -> RouteDecision {
        let Some(rule) = self.rules.iter().find(|rule| matches(&rule.pattern, path)) else {
            return RouteDecision::NotFound;
        };
        if rule.anonymous {
            return RouteDecision::Allow;
        }
        if !gate.is_authenticated() {
            return RouteDecision::RedirectToLogin;
        }
        if gate.has_access(&rule.required_roles) {
            RouteDecision::Allow
        } else {
            RouteDecision::NoPermission
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::dashboard()
    }
}

fn matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = segments(pattern);
    let path_segments: Vec<&str> = segments(path);
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pat, seg)| pat.starts_with(':') || pat == seg)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
