//! Campus Nav - role-based navigation core for the campus portal
//!
//! This library holds everything about navigation that does not depend on a
//! UI toolkit:
//! - Route trees per role, parsed from static JSON
//! - Key to screen resolution with first-match-wins semantics
//! - Selection and expand/collapse state
//! - Flattening the tree into indented menu rows
//! - Login gating with a demo bypass
//!
//! ## Example
//! ```rust
//! use campus_nav::prelude::*;
//! use std::sync::Arc;
//!
//! let tree = RouteTree::new(vec![
//!     RouteNode::leaf("Dashboard", "dashboard"),
//!     RouteNode::group("Admission", vec![RouteNode::leaf("Applications", "applications")]),
//! ]);
//!
//! let mut auth = AuthState::default();
//! let role = auth.demo_login(Role::Admin).unwrap();
//!
//! let mut session = Session::new(role, Arc::new(tree), ActiveRule::Exact, &NavConfig::default());
//! session.toggle_expand("Admission");
//! session.select("Applications").unwrap();
//!
//! assert_eq!(session.view(), &View::Screen("applications"));
//! assert_eq!(session.menu().len(), 3);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod menu;
pub mod resolver;
pub mod session;
pub mod state;
pub mod tree;
pub mod validate;

// Re-export common types
pub mod prelude {
    pub use crate::auth::{AuthState, Role};
    pub use crate::config::{ActiveRule, NavConfig};
    pub use crate::error::{
        ConfigIssue, NavError, NavResult, RoleParseError, RouteError, SignInError,
    };
    pub use crate::menu::{render_menu, MenuAction, MenuRow, RowKind};
    pub use crate::resolver::resolve;
    pub use crate::session::{Session, View};
    pub use crate::state::NavigationState;
    pub use crate::tree::{RouteNode, RouteTree};
    pub use crate::validate::{validate, validate_and_report};
}
