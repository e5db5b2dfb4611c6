//! Login gating - role pick, sign-in, demo bypass and logout
//!
//! No credentials are checked anywhere. The state machine only decides
//! which role shell is mounted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RoleParseError, SignInError};

/// The closed set of portal roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
    Faculty,
    Parent,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Student, Role::Faculty, Role::Parent];

    /// URL-safe slug, also the `Display` form
    pub fn slug(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Parent => "parent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Parent => "Parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

/// Where the login flow currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    RoleSelected(Role),
    Authenticated(Role),
}

impl AuthState {
    pub fn role(self) -> Option<Role> {
        match self {
            AuthState::Unauthenticated => None,
            AuthState::RoleSelected(role) | AuthState::Authenticated(role) => Some(role),
        }
    }

    pub fn authenticated_role(self) -> Option<Role> {
        match self {
            AuthState::Authenticated(role) => Some(role),
            _ => None,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Choose (or change) the role on the login screen
    pub fn pick_role(&mut self, role: Role) {
        match *self {
            AuthState::Unauthenticated | AuthState::RoleSelected(_) => {
                *self = AuthState::RoleSelected(role);
            }
            AuthState::Authenticated(current) => {
                tracing::debug!(%current, picked = %role, "role pick ignored while signed in");
            }
        }
    }

    /// Confirm the picked role. Without a pick the state is left as it is.
    pub fn sign_in(&mut self) -> Result<Role, SignInError> {
        match *self {
            AuthState::RoleSelected(role) => {
                *self = AuthState::Authenticated(role);
                tracing::info!(%role, "signed in");
                Ok(role)
            }
            AuthState::Unauthenticated => Err(SignInError::NoRoleSelected),
            AuthState::Authenticated(_) => Err(SignInError::AlreadyAuthenticated),
        }
    }

    /// Skip credential entry and go straight to `role`'s shell
    pub fn demo_login(&mut self, role: Role) -> Result<Role, SignInError> {
        match *self {
            AuthState::Unauthenticated | AuthState::RoleSelected(_) => {
                *self = AuthState::Authenticated(role);
                tracing::info!(%role, "demo login");
                Ok(role)
            }
            AuthState::Authenticated(_) => Err(SignInError::AlreadyAuthenticated),
        }
    }

    pub fn logout(&mut self) {
        if let AuthState::Authenticated(role) = *self {
            tracing::info!(%role, "logged out");
        }
        *self = AuthState::Unauthenticated;
    }
}
