//! Per-role navigation session
//!
//! Wires one route tree to one navigation state and keeps track of the screen
//! currently on display. A new session is created on every sign-in and
//! dropped on logout, so nothing leaks between roles.

use std::sync::Arc;

use crate::auth::Role;
use crate::config::{ActiveRule, NavConfig};
use crate::error::RouteError;
use crate::menu::{render_menu, MenuAction, MenuRow};
use crate::resolver::resolve;
use crate::state::NavigationState;
use crate::tree::RouteTree;

/// What the content area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<S> {
    /// Nothing resolved yet
    Blank,
    Screen(S),
    /// Placeholder for a key with no route, echoing the key
    Fallback(String),
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    role: Role,
    tree: Arc<RouteTree<S>>,
    state: NavigationState,
    rule: ActiveRule,
    indent_step: u32,
    view: View<S>,
}

impl<S: Clone> Session<S> {
    /// Start a session and resolve the configured initial key
    pub fn new(role: Role, tree: Arc<RouteTree<S>>, rule: ActiveRule, config: &NavConfig) -> Self {
        let mut session = Self {
            role,
            tree,
            state: NavigationState::from_config(config),
            rule,
            indent_step: config.indent_step,
            view: View::Blank,
        };
        let initial = session.state.selected_key().to_string();
        if let Err(err) = session.select(&initial) {
            tracing::debug!(%role, "initial selection: {err}");
        }
        session
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tree(&self) -> &RouteTree<S> {
        &self.tree
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn rule(&self) -> ActiveRule {
        self.rule
    }

    pub fn view(&self) -> &View<S> {
        &self.view
    }

    /// Select `key` and update the displayed view.
    ///
    /// A key naming only a screenless group changes nothing, selection
    /// included. An unknown key shows the fallback placeholder.
    pub fn select(&mut self, key: &str) -> Result<(), RouteError> {
        match resolve(&self.tree, key) {
            Ok(screen) => {
                self.view = View::Screen(screen.clone());
                self.state.select(key);
                Ok(())
            }
            Err(err @ RouteError::NoScreen(_)) => Err(err),
            Err(err @ RouteError::NotFound(_)) => {
                tracing::warn!(role = %self.role, key, "no route for selection, showing fallback");
                self.view = View::Fallback(key.to_string());
                self.state.select(key);
                Err(err)
            }
        }
    }

    pub fn toggle_expand(&mut self, key: &str) {
        self.state.toggle_expand(key);
    }

    /// Apply a menu row press
    pub fn press(&mut self, action: &MenuAction) -> Result<(), RouteError> {
        match action {
            MenuAction::Select(key) => self.select(key),
            MenuAction::Toggle(key) => {
                self.toggle_expand(key);
                Ok(())
            }
        }
    }

    /// Open every group on the way to `key` so its row is visible
    pub fn reveal(&mut self, key: &str) {
        if let Some(path) = self.tree.screen_path(key) {
            let ancestors = &path[..path.len().saturating_sub(1)];
            self.state.expand_all(ancestors.iter().copied());
        }
    }

    /// Visible menu rows for the current state
    pub fn menu(&self) -> Vec<MenuRow> {
        render_menu(&self.tree, &self.state, self.rule, self.indent_step)
    }

    /// Ancestor chain of the selected key, empty when the key is unknown
    pub fn breadcrumbs(&self) -> Vec<String> {
        self.tree
            .screen_path(self.state.selected_key())
            .map(|path| path.into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
