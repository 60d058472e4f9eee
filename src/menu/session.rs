use crate::menu::{
    nav_event::NavEvent,
    presentation::{NavEntry, flatten},
    state::MenuState,
};
use crate::tutorial::{Page, PageController};

#[derive(Debug, PartialEq)]
pub enum MenuMode {
    Normal,
    HelpPopup,
}

/// Everything one running tutorial owns: the menu, its page controller and
/// the cursor over the selectable entries.
pub struct Session {
    pub title: String,
    pub menu: MenuState,
    pub controller: Box<dyn PageController>,

    /// Index into the flattened presentation entries.
    pub cursor: usize,
    pub mode: MenuMode,

    pub should_exit: bool,
}

impl Session {
    pub fn new(
        title: impl Into<String>,
        menu: MenuState,
        controller: Box<dyn PageController>,
    ) -> Self {
        let mut session = Self {
            title: title.into(),
            menu,
            controller,
            cursor: 0,
            mode: MenuMode::Normal,
            should_exit: false,
        };

        let active_page = session.controller.active_page().to_string();
        session.select(&active_page);
        session
    }

    pub fn entries(&self) -> Vec<NavEntry> {
        flatten(&self.menu.presentation()).cloned().collect()
    }

    pub fn selected_entry(&self) -> Option<NavEntry> {
        self.entries().into_iter().nth(self.cursor)
    }

    pub fn active_page(&self) -> &str {
        self.controller.active_page()
    }

    pub fn page(&self) -> Page {
        self.controller.page(&self.menu)
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.entries().len();
        let new_selected = usize::try_from((self.cursor as i32 + delta).max(0))
            .unwrap_or(0);
        self.cursor = new_selected.min(len.saturating_sub(1));
    }

    /// Moves the cursor onto the entry called `name`, if it is displayed.
    pub fn select(&mut self, name: &str) -> bool {
        match self.entries().iter().position(|entry| entry.name == name) {
            Some(idx) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    /// Raises the navigation event for the entry `name` and keeps the cursor
    /// on it when it is still displayed.
    pub fn navigate(&mut self, name: &str) {
        let event = NavEvent::resolve(name, &self.menu);
        log::debug!("navigation event {event:?}");

        self.controller.handle(&event, &mut self.menu);

        if !self.select(name) {
            self.move_selection(0);
        }
    }
}
