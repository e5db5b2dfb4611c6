//! Route tree - the static navigation hierarchy for one role

use serde::{Deserialize, Serialize};

use crate::error::NavResult;

/// One entry in the navigation hierarchy
///
/// `S` is the screen token the shell knows how to render. The core never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNode<S> {
    /// Display label, also the selection key
    pub name: String,

    /// Screen shown when this node is selected; absent for pure groups
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub screen: Option<S>,

    /// Display hint only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode<S>>,
}

impl<S> RouteNode<S> {
    /// A leaf that shows `screen`
    pub fn leaf(name: impl Into<String>, screen: S) -> Self {
        Self {
            name: name.into(),
            screen: Some(screen),
            icon: None,
            children: Vec::new(),
        }
    }

    /// A group header with no screen of its own
    pub fn group(name: impl Into<String>, children: Vec<RouteNode<S>>) -> Self {
        Self {
            name: name.into(),
            screen: None,
            icon: None,
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Neither a screen nor children: unreachable in the menu
    pub fn is_dead(&self) -> bool {
        self.screen.is_none() && self.children.is_empty()
    }
}

/// Ordered top-level route nodes for one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTree<S> {
    roots: Vec<RouteNode<S>>,
}

impl<S> RouteTree<S> {
    pub fn new(roots: Vec<RouteNode<S>>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[RouteNode<S>] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order walk yielding `(node, depth)`; top-level nodes are depth 0
    pub fn iter(&self) -> PreOrder<'_, S> {
        PreOrder {
            stack: self.roots.iter().rev().map(|node| (node, 0)).collect(),
        }
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// First node named `key` in pre-order
    pub fn find(&self, key: &str) -> Option<&RouteNode<S>> {
        self.iter().map(|(node, _)| node).find(|node| node.name == key)
    }

    /// Number of levels; a flat tree has depth 1, an empty tree 0
    pub fn max_depth(&self) -> usize {
        self.iter().map(|(_, depth)| depth + 1).max().unwrap_or(0)
    }

    /// Names from the top level down to the first node named `key`
    pub fn path_to(&self, key: &str) -> Option<Vec<&str>> {
        self.path_where(|node| node.name == key)
    }

    /// Names from the top level down to the node [`resolve`] picks for `key`.
    ///
    /// That is the first node named `key` carrying a screen, or failing that
    /// the first node named `key` at all.
    ///
    /// [`resolve`]: crate::resolver::resolve
    pub fn screen_path(&self, key: &str) -> Option<Vec<&str>> {
        self.path_where(|node| node.name == key && node.screen.is_some())
            .or_else(|| self.path_to(key))
    }

    fn path_where<F>(&self, hit: F) -> Option<Vec<&str>>
    where
        F: Fn(&RouteNode<S>) -> bool,
    {
        let mut path = Vec::new();
        path_within(&self.roots, &hit, &mut path).then_some(path)
    }
}

impl<S> RouteTree<S>
where
    S: for<'de> Deserialize<'de>,
{
    /// Parse a tree from its JSON form (an array of nodes)
    pub fn from_json(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S> From<Vec<RouteNode<S>>> for RouteTree<S> {
    fn from(roots: Vec<RouteNode<S>>) -> Self {
        Self::new(roots)
    }
}

fn path_within<'a, S, F>(nodes: &'a [RouteNode<S>], hit: &F, path: &mut Vec<&'a str>) -> bool
where
    F: Fn(&RouteNode<S>) -> bool,
{
    for node in nodes {
        path.push(&node.name);
        if hit(node) || path_within(&node.children, hit, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Iterator returned by [`RouteTree::iter`]
pub struct PreOrder<'a, S> {
    stack: Vec<(&'a RouteNode<S>, usize)>,
}

impl<'a, S> Iterator for PreOrder<'a, S> {
    type Item = (&'a RouteNode<S>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}
