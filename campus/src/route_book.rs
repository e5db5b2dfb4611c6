//! Per-role route trees and shell settings, loaded once before launch

use std::sync::Arc;

use campus_nav::prelude::*;
use thiserror::Error;

use crate::screen::Screen;

static ADMIN_ROUTES: &str = include_str!("routes/admin.json");
static STUDENT_ROUTES: &str = include_str!("routes/student.json");
static FACULTY_ROUTES: &str = include_str!("routes/faculty.json");
static PARENT_ROUTES: &str = include_str!("routes/parent.json");

#[derive(Debug, Error)]
pub enum RouteBookError {
    #[error("{role} route configuration: {source}")]
    Load {
        role: Role,
        #[source]
        source: NavError,
    },
}

/// How one role's shell is set up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellProfile {
    pub role: Role,
    pub title: &'static str,
    pub active_rule: ActiveRule,
    source: &'static str,
}

impl ShellProfile {
    pub fn for_role(role: Role) -> Self {
        match role {
            // Section headings light up for their prefixed leaves
            Role::Admin => Self {
                role,
                title: "Administration",
                active_rule: ActiveRule::Prefix,
                source: ADMIN_ROUTES,
            },
            Role::Student => Self {
                role,
                title: "Student Portal",
                active_rule: ActiveRule::Exact,
                source: STUDENT_ROUTES,
            },
            Role::Faculty => Self {
                role,
                title: "Faculty Portal",
                active_rule: ActiveRule::Exact,
                source: FACULTY_ROUTES,
            },
            Role::Parent => Self {
                role,
                title: "Parent Portal",
                active_rule: ActiveRule::Exact,
                source: PARENT_ROUTES,
            },
        }
    }
}

/// Parsed route trees for every role
#[derive(Debug)]
pub struct RouteBook {
    config: NavConfig,
    admin: Arc<RouteTree<Screen>>,
    student: Arc<RouteTree<Screen>>,
    faculty: Arc<RouteTree<Screen>>,
    parent: Arc<RouteTree<Screen>>,
}

impl RouteBook {
    /// Parse and validate all four trees. Validation problems are logged only.
    pub fn load(config: NavConfig) -> Result<Self, RouteBookError> {
        let load = |role: Role| -> Result<Arc<RouteTree<Screen>>, RouteBookError> {
            let profile = ShellProfile::for_role(role);
            let tree = RouteTree::from_json(profile.source)
                .map_err(|source| RouteBookError::Load { role, source })?;
            let issues = validate_and_report(role.slug(), &tree, config.max_depth);
            tracing::info!(%role, routes = tree.len(), issues = issues.len(), "route tree loaded");
            Ok(Arc::new(tree))
        };

        Ok(Self {
            admin: load(Role::Admin)?,
            student: load(Role::Student)?,
            faculty: load(Role::Faculty)?,
            parent: load(Role::Parent)?,
            config,
        })
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn tree(&self, role: Role) -> Arc<RouteTree<Screen>> {
        match role {
            Role::Admin => self.admin.clone(),
            Role::Student => self.student.clone(),
            Role::Faculty => self.faculty.clone(),
            Role::Parent => self.parent.clone(),
        }
    }

    /// A fresh navigation session for `role`
    pub fn session(&self, role: Role) -> Session<Screen> {
        let profile = ShellProfile::for_role(role);
        Session::new(role, self.tree(role), profile.active_rule, &self.config)
    }
}
