//! Menu renderer - flattens a route tree into visible menu rows
//!
//! The output is a plain list so any front end can draw it: each row knows
//! its depth, indent, whether it is highlighted, and what a press on it does.

use crate::config::ActiveRule;
use crate::state::NavigationState;
use crate::tree::{RouteNode, RouteTree};

/// What pressing a row asks the session to do
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Select(String),
    Toggle(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Leaf,
    Group { expanded: bool },
}

/// One visible menu line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub name: String,
    pub icon: Option<String>,
    pub depth: usize,
    /// Horizontal offset in pixels
    pub indent: u32,
    pub active: bool,
    pub kind: RowKind,
}

impl MenuRow {
    /// Groups toggle, leaves select
    pub fn action(&self) -> MenuAction {
        match self.kind {
            RowKind::Leaf => MenuAction::Select(self.name.clone()),
            RowKind::Group { .. } => MenuAction::Toggle(self.name.clone()),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, RowKind::Group { .. })
    }

    /// Expand/collapse indicator, empty for leaves
    pub fn chevron(&self) -> &'static str {
        match self.kind {
            RowKind::Leaf => "",
            RowKind::Group { expanded: true } => "▼",
            RowKind::Group { expanded: false } => "▶",
        }
    }
}

/// Flatten the visible part of `tree` in depth-first order.
///
/// Children of an expanded group follow it directly. Collapsed groups hide
/// their whole subtree.
pub fn render_menu<S>(
    tree: &RouteTree<S>,
    state: &NavigationState,
    rule: ActiveRule,
    indent_step: u32,
) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    push_rows(tree.roots(), 0, state, rule, indent_step, &mut rows);
    rows
}

fn push_rows<S>(
    nodes: &[RouteNode<S>],
    depth: usize,
    state: &NavigationState,
    rule: ActiveRule,
    indent_step: u32,
    rows: &mut Vec<MenuRow>,
) {
    for node in nodes {
        let expanded = state.is_expanded(&node.name);
        let kind = if node.has_children() {
            RowKind::Group { expanded }
        } else {
            RowKind::Leaf
        };

        rows.push(MenuRow {
            name: node.name.clone(),
            icon: node.icon.clone(),
            depth,
            indent: indent_step.saturating_mul(depth as u32),
            active: rule.matches(&node.name, state.selected_key()),
            kind,
        });

        if expanded && node.has_children() {
            push_rows(&node.children, depth + 1, state, rule, indent_step, rows);
        }
    }
}
