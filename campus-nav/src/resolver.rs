//! Route resolver - selection key to screen lookup

use crate::error::RouteError;
use crate::tree::{RouteNode, RouteTree};

/// Find the screen for `key`.
///
/// Depth-first in document order. A node named `key` without a screen does
/// not end the search; its children and then the rest of the tree are still
/// searched, and the first named node that carries a screen wins.
pub fn resolve<'a, S>(tree: &'a RouteTree<S>, key: &str) -> Result<&'a S, RouteError> {
    let mut saw_group = false;
    match search(tree.roots(), key, &mut saw_group) {
        Some(screen) => Ok(screen),
        None if saw_group => {
            tracing::debug!(key, "route has no screen");
            Err(RouteError::NoScreen(key.to_string()))
        }
        None => {
            tracing::debug!(key, "route not found");
            Err(RouteError::NotFound(key.to_string()))
        }
    }
}

fn search<'a, S>(nodes: &'a [RouteNode<S>], key: &str, saw_group: &mut bool) -> Option<&'a S> {
    for node in nodes {
        if node.name == key {
            match &node.screen {
                Some(screen) => return Some(screen),
                None => *saw_group = true,
            }
        }
        if let Some(screen) = search(&node.children, key, saw_group) {
            return Some(screen);
        }
    }
    None
}
