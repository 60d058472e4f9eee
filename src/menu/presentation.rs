use std::fmt;

use serde::Serialize;

/// Name reported when the collapse toggle is activated.
pub const TOGGLE_COLLAPSE_NAME: &str = "side_menu_toggle_collapse";
/// Name reported when the documentation entry is activated.
pub const DOCUMENTATION_NAME: &str = "mv_documentation";

/// A render-ready navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub name: String,
    pub label: String,
    pub icon: String,
    pub disabled: bool,
}

impl NavEntry {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        disabled: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            icon: icon.into(),
            disabled,
        }
    }
}

impl fmt::Display for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

/// A section of the navigation list under one header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub label: String,
    pub items: Vec<NavEntry>,
}

/// Everything a renderer needs to draw the side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSnapshot {
    pub width: String,
    pub height: String,
    pub collapsed: bool,
    pub groups: Vec<NavGroup>,
}

/// Entries of all groups in display order.
pub fn flatten(groups: &[NavGroup]) -> impl Iterator<Item = &NavEntry> {
    groups.iter().flat_map(|group| group.items.iter())
}
