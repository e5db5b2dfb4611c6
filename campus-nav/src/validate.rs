//! Startup validation of route trees
//!
//! Problems are reported, never fatal: resolution still works on a flawed
//! tree with first-match-wins.

use std::collections::HashSet;

use crate::error::ConfigIssue;
use crate::tree::{RouteNode, RouteTree};

/// Label used as the parent of top-level nodes in reports
pub const ROOT_LABEL: &str = "<root>";

/// Check `tree` for duplicate siblings, dead nodes and excess depth.
///
/// `max_depth` counts the top level as 1.
pub fn validate<S>(tree: &RouteTree<S>, max_depth: usize) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    check_level(tree.roots(), None, 1, max_depth, &mut issues);
    issues
}

/// Run [`validate`] and log every issue at warn level
pub fn validate_and_report<S>(label: &str, tree: &RouteTree<S>, max_depth: usize) -> Vec<ConfigIssue> {
    let issues = validate(tree, max_depth);
    for issue in &issues {
        tracing::warn!(tree = label, "{issue}");
    }
    issues
}

fn check_level<S>(
    nodes: &[RouteNode<S>],
    parent: Option<&str>,
    depth: usize,
    max_depth: usize,
    issues: &mut Vec<ConfigIssue>,
) {
    let mut seen = HashSet::new();
    for node in nodes {
        let path = match parent {
            Some(parent) => format!("{parent}/{}", node.name),
            None => node.name.clone(),
        };

        if !seen.insert(node.name.as_str()) {
            issues.push(ConfigIssue::DuplicateSibling {
                parent: parent.unwrap_or(ROOT_LABEL).to_string(),
                name: node.name.clone(),
            });
        }
        if node.is_dead() {
            issues.push(ConfigIssue::DeadNode { path: path.clone() });
        }
        if depth > max_depth {
            issues.push(ConfigIssue::TooDeep {
                path: path.clone(),
                depth,
                limit: max_depth,
            });
        }

        check_level(&node.children, Some(path.as_str()), depth + 1, max_depth, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_tree() {
        let tree = RouteTree::new(vec![
            RouteNode::leaf("Dashboard", ()),
            RouteNode::group("Admission", vec![RouteNode::leaf("Applications", ())]),
        ]);
        assert!(validate(&tree, 3).is_empty());
    }

    #[test]
    fn test_duplicate_siblings() {
        let tree = RouteTree::new(vec![
            RouteNode::group(
                "Exams",
                vec![RouteNode::leaf("Results", ()), RouteNode::leaf("Results", ())],
            ),
            RouteNode::leaf("Dashboard", ()),
            RouteNode::leaf("Dashboard", ()),
        ]);
        let issues = validate(&tree, 3);
        assert_eq!(
            issues,
            vec![
                ConfigIssue::DuplicateSibling {
                    parent: "Exams".to_string(),
                    name: "Results".to_string(),
                },
                ConfigIssue::DuplicateSibling {
                    parent: ROOT_LABEL.to_string(),
                    name: "Dashboard".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_same_name_under_different_parents_is_fine() {
        let tree = RouteTree::new(vec![
            RouteNode::group("Fees", vec![RouteNode::leaf("Reports", ())]),
            RouteNode::group("Exams", vec![RouteNode::leaf("Reports", ())]),
        ]);
        assert!(validate(&tree, 3).is_empty());
    }

    #[test]
    fn test_dead_node() {
        let tree: RouteTree<()> = RouteTree::new(vec![RouteNode::group(
            "Academics",
            vec![RouteNode::group("Electives", vec![])],
        )]);
        assert_eq!(
            validate(&tree, 3),
            vec![ConfigIssue::DeadNode {
                path: "Academics/Electives".to_string()
            }]
        );
    }

    #[test]
    fn test_too_deep() {
        let tree = RouteTree::new(vec![RouteNode::group(
            "A",
            vec![RouteNode::group("B", vec![RouteNode::leaf("C", ())])],
        )]);
        assert!(validate(&tree, 3).is_empty());
        assert_eq!(
            validate(&tree, 2),
            vec![ConfigIssue::TooDeep {
                path: "A/B/C".to_string(),
                depth: 3,
                limit: 2,
            }]
        );
    }
}
