use serde::Deserialize;

/// Switches deciding which extra sections the presentation carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiFlags {
    /// Append a trailing section with the collapse toggle.
    pub collapsable: bool,
    /// Show group keys as section headers instead of the placeholder.
    pub group_names_visible: bool,
    /// Append the documentation entry to the last group.
    pub documentation_enabled: bool,
}

impl UiFlags {
    pub fn new(
        collapsable: bool,
        group_names_visible: bool,
        documentation_enabled: bool,
    ) -> Self {
        Self {
            collapsable,
            group_names_visible,
            documentation_enabled,
        }
    }
}

impl Default for UiFlags {
    fn default() -> Self {
        Self::new(true, false, false)
    }
}
