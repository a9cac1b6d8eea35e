//! Route admission.
//!
//! The navigation layer asks [`admit`] before activating a protected route;
//! the decision is a pure function of the session state and the route's
//! declared role requirement.

/// Path of the login screen.
pub const LOGIN_PATH: &str = "/login";

/// Default landing page for authenticated users.
pub const DEFAULT_LANDING: &str = "/dashboard";

/// A navigable route and its access requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub path: String,
    /// Role required to enter, if any.
    pub required_role: Option<String>,
}

impl RouteTarget {
    /// A protected route any authenticated user may enter.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            required_role: None,
        }
    }

    /// A protected route requiring a specific role.
    pub fn with_role(path: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            required_role: Some(role.into()),
        }
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation may proceed.
    Permit,
    /// Not authenticated: go to the login screen, remembering where the
    /// user was headed so the navigation can resume after login.
    RedirectToLogin { return_url: String },
    /// Authenticated but lacking the required role: go to the landing page.
    RedirectToDefault,
}

/// Decide whether a navigation attempt is permitted.
pub fn admit(authenticated: bool, roles: &[String], target: &RouteTarget) -> RouteDecision {
    if !authenticated {
        return RouteDecision::RedirectToLogin {
            return_url: target.path.clone(),
        };
    }
    match &target.required_role {
        Some(role) if !roles.iter().any(|r| r == role) => RouteDecision::RedirectToDefault,
        _ => RouteDecision::Permit,
    }
}
