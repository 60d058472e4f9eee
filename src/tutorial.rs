//! Tutorial applications driving a side menu
pub mod collapsable;
pub mod expanding;

use clap::ValueEnum;

use crate::menu::{item::MenuItem, nav_event::NavEvent, state::MenuState};

pub use collapsable::CollapsableController;
pub use expanding::ExpandingController;

/// Page shown when the documentation entry is activated.
pub const DOCUMENTATION_PAGE: &str = "documentation";

pub const HOME_PAGE: &str = "home";

/// Content of the main region for the active page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<String>,
    /// Entries reachable from the page itself, e.g. sub-pages.
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub name: String,
    pub label: String,
}

/// Reacts to navigation events by updating the menu and the active page.
pub trait PageController {
    fn handle(&mut self, event: &NavEvent, menu: &mut MenuState);

    /// Whether `handle` acts on `event` rather than ignoring it.
    fn handles(&self, event: &NavEvent) -> bool;

    fn active_page(&self) -> &str;

    fn page(&self, menu: &MenuState) -> Page {
        page_for(self.active_page(), menu)
    }
}

/// The tutorials shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Tutorial {
    /// Menu that collapses to an icon strip.
    Collapsable,
    /// Collapsable menu whose roots expand to show sub-items.
    Expanding,
}

impl Tutorial {
    pub fn title(&self) -> &'static str {
        match self {
            Tutorial::Collapsable => "Side-menu Tutorial: collapsable",
            Tutorial::Expanding => "Side-menu Tutorial: expanding",
        }
    }

    /// Item tree used when no menu file is given.
    pub fn default_items(&self) -> Vec<MenuItem> {
        let about = MenuItem::new("about", "About").group("1").icon("cat");

        match self {
            Tutorial::Collapsable => {
                vec![MenuItem::new("home", "Home").group("1").icon("Home"), about]
            }
            Tutorial::Expanding => vec![
                MenuItem::new("home", "Home").group("1").icon("Home").sub_items(
                    vec![
                        MenuItem::sub_item("subpage", "Subpage").icon("model"),
                        MenuItem::sub_item("subpage2", "Subpage 2")
                            .icon("model"),
                    ],
                ),
                about,
            ],
        }
    }

    pub fn controller(&self, start_page: &str) -> Box<dyn PageController> {
        match self {
            Tutorial::Collapsable => {
                Box::new(CollapsableController::new(start_page))
            }
            Tutorial::Expanding => Box::new(ExpandingController::new(start_page)),
        }
    }
}

/// Builds the page for `name`: the item's label and links to its sub-items.
pub fn page_for(name: &str, menu: &MenuState) -> Page {
    if name == DOCUMENTATION_PAGE {
        return Page {
            title: menu.config.documentation_label.clone(),
            body: vec![
                "Select an entry in the side menu to open its page.".to_string(),
                "Roots with sub-items expand when one of them is opened."
                    .to_string(),
                "The last entry collapses the menu to an icon strip."
                    .to_string(),
            ],
            links: Vec::new(),
        };
    }

    match menu.find_item(name) {
        Some(item) => Page {
            title: item.label.clone(),
            body: vec![item.label.clone()],
            links: item
                .sub_items
                .iter()
                .map(|sub| PageLink {
                    name: sub.name.clone(),
                    label: sub.label.clone(),
                })
                .collect(),
        },
        None => Page {
            title: name.to_string(),
            body: vec![format!("No page named `{name}`")],
            links: Vec::new(),
        },
    }
}
