use std::collections::HashSet;
use std::fmt;

use crate::menu::item::MenuItem;
use crate::menu::presentation::{DOCUMENTATION_NAME, TOGGLE_COLLAPSE_NAME};
use crate::util::validate_item_name;

/// Error returned when an item tree breaks one of the menu invariants.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuTreeError {
    InvalidName(String),
    DuplicateName(String),
    ReservedName(String),
    NestedTooDeep(String),
}

impl std::error::Error for MenuTreeError {}

impl fmt::Display for MenuTreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuTreeError::InvalidName(name) => write!(
                f,
                "invalid item name `{name}`: must be 1-30 characters of [a-zA-Z0-9_-]"
            ),
            MenuTreeError::DuplicateName(name) => {
                write!(f, "item name `{name}` is used more than once")
            }
            MenuTreeError::ReservedName(name) => {
                write!(f, "item name `{name}` is reserved by the menu")
            }
            MenuTreeError::NestedTooDeep(name) => write!(
                f,
                "sub-item `{name}` has sub-items of its own, only two levels are supported"
            ),
        }
    }
}

/// The two-level item tree owned by a menu.
#[derive(Debug, Clone, Default)]
pub struct ItemsState {
    pub all_items: Vec<MenuItem>,
}

impl ItemsState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { all_items: items }
    }

    /// Checks names and nesting depth of the whole tree.
    pub fn validate(&self) -> Result<(), MenuTreeError> {
        let mut seen = HashSet::new();

        for item in &self.all_items {
            check_name(&item.name, &mut seen)?;

            for sub_item in &item.sub_items {
                check_name(&sub_item.name, &mut seen)?;
                if sub_item.has_sub_items() {
                    return Err(MenuTreeError::NestedTooDeep(
                        sub_item.name.clone(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Finds an item by name, checking each root before its sub-items.
    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.all_items.iter().find_map(|item| {
            if item.name == name {
                Some(item)
            } else {
                item.sub_items.iter().find(|sub| sub.name == name)
            }
        })
    }

    fn find_item_mut(&mut self, name: &str) -> Option<&mut MenuItem> {
        for item in self.all_items.iter_mut() {
            if item.name == name {
                return Some(item);
            }
            if let Some(sub) = item.sub_items.iter_mut().find(|s| s.name == name)
            {
                return Some(sub);
            }
        }
        None
    }

    /// Returns the root owning the sub-item `name`. Roots themselves have
    /// no parent.
    pub fn find_parent(&self, name: &str) -> Option<&MenuItem> {
        self.all_items
            .iter()
            .find(|item| item.sub_items.iter().any(|sub| sub.name == name))
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.all_items.iter().any(|item| item.name == name)
    }

    /// Sets `visible` on the sub-items of `root_name`, or of every root when
    /// `None`. Unknown names are ignored.
    pub fn set_sub_items_visible(
        &mut self,
        root_name: Option<&str>,
        visible: bool,
    ) {
        match root_name {
            Some(name) => {
                if let Some(item) = self.find_item_mut(name) {
                    item.sub_items
                        .iter_mut()
                        .for_each(|sub| sub.visible = visible);
                }
            }
            None => self
                .all_items
                .iter_mut()
                .flat_map(|item| item.sub_items.iter_mut())
                .for_each(|sub| sub.visible = visible),
        }
    }

    /// Distinct group keys in first-seen order.
    pub fn groups(&self) -> Vec<Option<&str>> {
        let mut groups: Vec<Option<&str>> = Vec::new();
        for item in &self.all_items {
            let group = item.group.as_deref();
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    pub fn items_in_group<'a>(
        &'a self,
        group: Option<&'a str>,
    ) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.all_items
            .iter()
            .filter(move |item| item.group.as_deref() == group)
    }
}

fn check_name<'a>(
    name: &'a str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), MenuTreeError> {
    if validate_item_name(name).is_err() {
        return Err(MenuTreeError::InvalidName(name.to_string()));
    }
    if name == TOGGLE_COLLAPSE_NAME || name == DOCUMENTATION_NAME {
        return Err(MenuTreeError::ReservedName(name.to_string()));
    }
    if !seen.insert(name) {
        return Err(MenuTreeError::DuplicateName(name.to_string()));
    }
    Ok(())
}
