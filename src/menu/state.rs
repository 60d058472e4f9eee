use crate::config::MenuConfig;
use crate::menu::{
    item::MenuItem,
    items_state::ItemsState,
    presentation::{
        DOCUMENTATION_NAME, MenuSnapshot, NavEntry, NavGroup,
        TOGGLE_COLLAPSE_NAME,
    },
    ui_flags::UiFlags,
};

/// View state of a collapsible, expandable side menu.
///
/// Owns the item tree and the flags deciding how it is presented. Nothing
/// here fails: unknown names leave the state untouched.
#[derive(Debug, Clone)]
pub struct MenuState {
    pub items: ItemsState,
    pub ui_flags: UiFlags,
    pub config: MenuConfig,

    pub collapsed: bool,
    /// Name of the root whose icon reflects the expansion state.
    pub active_root_item: Option<String>,
    pub root_expanded: bool,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>, ui_flags: UiFlags, config: MenuConfig) -> Self {
        Self {
            items: ItemsState::new(items),
            ui_flags,
            config,
            collapsed: false,
            active_root_item: None,
            root_expanded: false,
        }
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn find_item(&self, name: &str) -> Option<&MenuItem> {
        self.items.find_item(name)
    }

    pub fn find_parent(&self, name: &str) -> Option<&MenuItem> {
        self.items.find_parent(name)
    }

    pub fn set_sub_items_visible(&mut self, root_name: Option<&str>, visible: bool) {
        self.items.set_sub_items_visible(root_name, visible);
    }

    pub fn show_sub_items(&mut self, root_name: &str) {
        self.set_sub_items_visible(Some(root_name), true);
    }

    pub fn hide_all_sub_items(&mut self) {
        self.set_sub_items_visible(None, false);
    }

    /// The name is stored as given; callers resolve it first.
    pub fn set_active_root(&mut self, name: Option<&str>) {
        self.active_root_item = name.map(str::to_string);
    }

    pub fn set_root_expanded(&mut self, expanded: bool) {
        self.root_expanded = expanded;
    }

    pub fn groups(&self) -> Vec<Option<&str>> {
        self.items.groups()
    }

    pub fn items_in_group<'a>(
        &'a self,
        group: Option<&'a str>,
    ) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.items_in_group(group)
    }

    pub fn display_label<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        if self.collapsed {
            self.config.collapsed_item_label.as_str()
        } else {
            item.label.as_str()
        }
    }

    pub fn display_icon<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        if self.collapsed {
            return item.icon.as_str();
        }

        let is_active_root =
            self.active_root_item.as_deref() == Some(item.name.as_str());
        if is_active_root && (self.root_expanded || item.expand_always) {
            item.expanded_icon.as_str()
        } else {
            item.icon.as_str()
        }
    }

    pub fn sub_item_label(&self, item: &MenuItem) -> String {
        format!(" {} {}", self.config.sub_item_bullet, item.label)
    }

    pub fn sub_item_icon<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        if self.collapsed {
            self.config.collapsed_sub_item_icon.as_str()
        } else {
            item.icon.as_str()
        }
    }

    /// Display records of one group. Sub-items are listed after their root
    /// and only depend on their own visibility.
    pub fn presentation_group(&self, group: Option<&str>) -> Vec<NavEntry> {
        let mut entries = Vec::new();

        for item in self.items_in_group(group) {
            if item.visible {
                entries.push(NavEntry::new(
                    item.name.as_str(),
                    self.display_label(item),
                    self.display_icon(item),
                    item.disabled,
                ));
            }

            for sub_item in item.sub_items.iter().filter(|sub| sub.visible) {
                entries.push(NavEntry::new(
                    sub_item.name.as_str(),
                    self.sub_item_label(sub_item),
                    self.sub_item_icon(sub_item),
                    sub_item.disabled,
                ));
            }
        }

        entries
    }

    pub fn presentation(&self) -> Vec<NavGroup> {
        let mut groups: Vec<NavGroup> = self
            .groups()
            .into_iter()
            .map(|group| NavGroup {
                label: self.group_label(group),
                items: self.presentation_group(group),
            })
            .collect();

        if self.ui_flags.documentation_enabled {
            let entry = NavEntry::new(
                DOCUMENTATION_NAME,
                self.config.documentation_label.as_str(),
                self.config.documentation_icon.as_str(),
                false,
            );
            match groups.last_mut() {
                Some(last) => last.items.push(entry),
                None => groups.push(NavGroup {
                    label: self.config.collapsed_group_label.clone(),
                    items: vec![entry],
                }),
            }
        }

        if self.ui_flags.collapsable {
            groups.push(NavGroup {
                label: String::new(),
                items: vec![NavEntry::new(
                    TOGGLE_COLLAPSE_NAME,
                    "",
                    self.collapse_icon(),
                    false,
                )],
            });
        }

        groups
    }

    fn group_label(&self, group: Option<&str>) -> String {
        if self.ui_flags.group_names_visible {
            group.unwrap_or_default().to_string()
        } else {
            self.config.collapsed_group_label.clone()
        }
    }

    pub fn collapse_icon(&self) -> &str {
        self.config.collapse_icons[usize::from(self.collapsed)].as_str()
    }

    /// Width token of the sidebar, e.g. `"205px"`.
    ///
    /// With auto width on and the menu expanded, the width follows the
    /// longest visible label (sub-item labels count two extra characters
    /// for their bullet prefix), clamped to the configured bounds.
    pub fn width(&self) -> String {
        if self.config.auto_width && !self.collapsed {
            let longest = self
                .items
                .all_items
                .iter()
                .filter(|item| item.visible)
                .flat_map(|item| {
                    let own = item.label.chars().count();
                    let subs = item
                        .sub_items
                        .iter()
                        .filter(|sub| sub.visible)
                        .map(|sub| sub.label.chars().count() + 2);
                    std::iter::once(own).chain(subs)
                })
                .max();

            if let Some(longest) = longest {
                let longest = u32::try_from(longest).unwrap_or(u32::MAX);
                let width = self
                    .config
                    .base_width
                    .saturating_add(longest)
                    .max(self.config.min_width)
                    .min(self.config.max_width);
                return format!("{width}px");
            }
        }

        if self.collapsed {
            self.config.collapsed_width.clone()
        } else {
            self.config.expanded_width.clone()
        }
    }

    pub fn height(&self) -> &str {
        self.config.height.as_str()
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            width: self.width(),
            height: self.height().to_string(),
            collapsed: self.collapsed,
            groups: self.presentation(),
        }
    }
}
