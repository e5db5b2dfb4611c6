//! Navigation configuration

use serde::{Deserialize, Serialize};

/// How a menu row decides it is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveRule {
    /// Row name equals the selected key
    #[default]
    Exact,
    /// Selected key starts with the row name, so a section lights up with its leaves
    Prefix,
}

impl ActiveRule {
    pub fn matches(self, name: &str, selected_key: &str) -> bool {
        match self {
            ActiveRule::Exact => name == selected_key,
            ActiveRule::Prefix => selected_key.starts_with(name),
        }
    }
}

/// Shared navigation settings (Units: indent in pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Key selected when a session starts
    pub initial_key: String,
    /// Horizontal offset added per depth level
    pub indent_step: u32,
    /// Deepest level a route tree may use (top level counts as 1)
    pub max_depth: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            initial_key: "Dashboard".to_string(),
            indent_step: 16,
            max_depth: 3,
        }
    }
}
