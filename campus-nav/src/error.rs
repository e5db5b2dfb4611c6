//! Error types for the navigation core

use thiserror::Error;

/// Why a selection key did not produce a screen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route '{0}' not found in navigation tree")]
    NotFound(String),

    #[error("Route '{0}' is a group and has no screen of its own")]
    NoScreen(String),
}

impl RouteError {
    /// The key that failed to resolve
    pub fn key(&self) -> &str {
        match self {
            RouteError::NotFound(key) | RouteError::NoScreen(key) => key,
        }
    }
}

/// A structural problem found by [`crate::validate::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Duplicate route '{name}' under '{parent}'")]
    DuplicateSibling { parent: String, name: String },

    #[error("Route '{path}' has neither a screen nor children")]
    DeadNode { path: String },

    #[error("Route '{path}' sits at depth {depth}, deeper than the limit of {limit}")]
    TooDeep {
        path: String,
        depth: usize,
        limit: usize,
    },
}

/// Sign-in attempted from a state that cannot sign in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    #[error("Please select a role before signing in")]
    NoRoleSelected,

    #[error("Already signed in")]
    AlreadyAuthenticated,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role '{0}'")]
pub struct RoleParseError(pub String);

/// Failure loading navigation configuration
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Route configuration could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for navigation operations
pub type NavResult<T> = Result<T, NavError>;
