use crate::menu::{nav_event::NavEvent, state::MenuState};
use crate::tutorial::{DOCUMENTATION_PAGE, PageController};

/// Switches pages and collapses the menu; never expands roots.
#[derive(Debug)]
pub struct CollapsableController {
    active_page: String,
}

impl CollapsableController {
    pub fn new(start_page: &str) -> Self {
        Self {
            active_page: start_page.to_string(),
        }
    }
}

impl PageController for CollapsableController {
    fn handle(&mut self, event: &NavEvent, menu: &mut MenuState) {
        match event {
            NavEvent::ToggleCollapse => menu.toggle_collapsed(),
            NavEvent::Root(name) => self.active_page = name.clone(),
            NavEvent::Documentation => {
                self.active_page = DOCUMENTATION_PAGE.to_string()
            }
            NavEvent::SubItem { .. } | NavEvent::Unknown(_) => {
                log::warn!("collapsable tutorial ignores {event:?}");
            }
        }
    }

    fn handles(&self, event: &NavEvent) -> bool {
        !matches!(event, NavEvent::SubItem { .. } | NavEvent::Unknown(_))
    }

    fn active_page(&self) -> &str {
        &self.active_page
    }
}
