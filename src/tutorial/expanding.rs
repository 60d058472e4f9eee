use crate::menu::{nav_event::NavEvent, state::MenuState};
use crate::tutorial::{DOCUMENTATION_PAGE, PageController};

/// Expands the root of an opened sub-page and folds everything else away.
#[derive(Debug)]
pub struct ExpandingController {
    active_page: String,
}

impl ExpandingController {
    pub fn new(start_page: &str) -> Self {
        Self {
            active_page: start_page.to_string(),
        }
    }
}

impl PageController for ExpandingController {
    fn handle(&mut self, event: &NavEvent, menu: &mut MenuState) {
        match event {
            NavEvent::ToggleCollapse => menu.toggle_collapsed(),
            NavEvent::SubItem { root, name } => {
                menu.hide_all_sub_items();
                menu.show_sub_items(root);
                menu.set_active_root(Some(root.as_str()));
                menu.set_root_expanded(true);
                self.active_page = name.clone();
            }
            NavEvent::Root(name) => {
                menu.set_root_expanded(false);
                menu.set_active_root(Some(name.as_str()));
                menu.hide_all_sub_items();
                self.active_page = name.clone();
            }
            NavEvent::Documentation => {
                self.active_page = DOCUMENTATION_PAGE.to_string()
            }
            NavEvent::Unknown(name) => {
                log::warn!("expanding tutorial ignores unknown entry `{name}`");
            }
        }
    }

    fn handles(&self, event: &NavEvent) -> bool {
        !matches!(event, NavEvent::Unknown(_))
    }

    fn active_page(&self) -> &str {
        &self.active_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MenuConfig,
        menu::{presentation::flatten, ui_flags::UiFlags},
        tutorial::{HOME_PAGE, Tutorial},
    };

    fn menu() -> MenuState {
        MenuState::new(
            Tutorial::Expanding.default_items(),
            UiFlags::default(),
            MenuConfig::default(),
        )
    }

    fn visible_entries(menu: &MenuState) -> Vec<(String, String)> {
        flatten(&menu.presentation())
            .map(|e| (e.name.clone(), e.icon.clone()))
            .collect()
    }

    fn open(name: &str, menu: &mut MenuState, controller: &mut ExpandingController) {
        let event = NavEvent::resolve(name, menu);
        controller.handle(&event, menu);
    }

    #[test]
    fn test_opening_sub_page_expands_its_root() {
        let mut menu = menu();
        let mut controller = ExpandingController::new(HOME_PAGE);

        open("subpage2", &mut menu, &mut controller);

        assert_eq!(controller.active_page(), "subpage2");
        assert_eq!(menu.active_root_item.as_deref(), Some("home"));
        assert!(menu.root_expanded);
        assert_eq!(
            visible_entries(&menu),
            vec![
                ("home".to_string(), "ChevronDownMed".to_string()),
                ("subpage".to_string(), "model".to_string()),
                ("subpage2".to_string(), "model".to_string()),
                ("about".to_string(), "cat".to_string()),
                (
                    "side_menu_toggle_collapse".to_string(),
                    "DoubleChevronLeft8".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_opening_root_folds_sub_items() {
        let mut menu = menu();
        let mut controller = ExpandingController::new(HOME_PAGE);

        open("subpage", &mut menu, &mut controller);
        open("about", &mut menu, &mut controller);

        assert_eq!(controller.active_page(), "about");
        assert_eq!(menu.active_root_item.as_deref(), Some("about"));
        assert!(!menu.root_expanded);
        let names: Vec<String> =
            visible_entries(&menu).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["home", "about", "side_menu_toggle_collapse"]);

        open("home", &mut menu, &mut controller);
        let entries = visible_entries(&menu);
        assert_eq!(entries[0].1, "Home");
    }

    #[test]
    fn test_collapse_keeps_expansion_but_hides_visuals() {
        let mut menu = menu();
        let mut controller = ExpandingController::new(HOME_PAGE);

        open("subpage", &mut menu, &mut controller);
        open("side_menu_toggle_collapse", &mut menu, &mut controller);

        assert!(menu.collapsed);
        assert!(menu.root_expanded);
        assert_eq!(controller.active_page(), "subpage");
        let entries = visible_entries(&menu);
        assert_eq!(entries[0].1, "Home");
        assert_eq!(entries[1].1, "DecreaseIndentArrowMirrored");
        assert_eq!(menu.width(), "48px");
    }

    #[test]
    fn test_unknown_entry_changes_nothing() {
        let mut menu = menu();
        let mut controller = ExpandingController::new(HOME_PAGE);
        open("subpage", &mut menu, &mut controller);
        let before = menu.presentation();

        open("nowhere", &mut menu, &mut controller);

        assert_eq!(menu.presentation(), before);
        assert_eq!(controller.active_page(), "subpage");
    }

    #[test]
    fn test_switched_off_entries_change_nothing() {
        let mut menu = MenuState::new(
            Tutorial::Expanding.default_items(),
            UiFlags::new(false, false, false),
            MenuConfig::default(),
        );
        let mut controller = ExpandingController::new(HOME_PAGE);

        open("mv_documentation", &mut menu, &mut controller);
        open("side_menu_toggle_collapse", &mut menu, &mut controller);

        assert_eq!(controller.active_page(), HOME_PAGE);
        assert!(!menu.collapsed);
    }
}
