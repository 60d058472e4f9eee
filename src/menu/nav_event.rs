use crate::menu::{
    presentation::{DOCUMENTATION_NAME, TOGGLE_COLLAPSE_NAME},
    state::MenuState,
};

/// A navigation event raised by activating a menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    ToggleCollapse,
    Documentation,
    Root(String),
    SubItem { root: String, name: String },
    Unknown(String),
}

impl NavEvent {
    /// Classifies an activated entry name against the menu's item tree.
    ///
    /// The toggle and documentation names only resolve while their entries
    /// are part of the presentation.
    pub fn resolve(name: &str, menu: &MenuState) -> Self {
        match name {
            TOGGLE_COLLAPSE_NAME if menu.ui_flags.collapsable => {
                return NavEvent::ToggleCollapse;
            }
            DOCUMENTATION_NAME if menu.ui_flags.documentation_enabled => {
                return NavEvent::Documentation;
            }
            _ => {}
        }

        if menu.items.is_root(name) {
            return NavEvent::Root(name.to_string());
        }

        match menu.find_parent(name) {
            Some(root) => NavEvent::SubItem {
                root: root.name.clone(),
                name: name.to_string(),
            },
            None => NavEvent::Unknown(name.to_string()),
        }
    }
}
