use crate::menu::{
    action::MenuAction,
    presentation::TOGGLE_COLLAPSE_NAME,
    session::{MenuMode, Session},
};

pub trait ActionDispatcher {
    fn dispatch(&self, action: MenuAction, session: &mut Session);
}

pub struct DefaultActionDispatcher;

impl ActionDispatcher for DefaultActionDispatcher {
    fn dispatch(&self, action: MenuAction, session: &mut Session) {
        log::trace!("dispatching {action:?}");

        match action {
            MenuAction::MoveSelection(delta) => session.move_selection(delta),
            MenuAction::Activate => handle_activate(session),
            MenuAction::OpenLink(idx) => handle_open_link(session, idx),
            MenuAction::ToggleCollapse => {
                if session.menu.ui_flags.collapsable {
                    session.navigate(TOGGLE_COLLAPSE_NAME);
                }
            }
            MenuAction::ToggleHelp => {
                session.mode = match session.mode {
                    MenuMode::Normal => MenuMode::HelpPopup,
                    MenuMode::HelpPopup => MenuMode::Normal,
                };
            }
            MenuAction::Exit => session.should_exit = true,
            MenuAction::Nop => {}
        }
    }
}

fn handle_activate(session: &mut Session) {
    let Some(selection) = session.selected_entry() else {
        return;
    };

    if selection.disabled {
        log::debug!("entry `{}` is disabled", selection.name);
        return;
    }

    session.navigate(&selection.name);
}

fn handle_open_link(session: &mut Session, idx: usize) {
    let Some(link) = session.page().links.into_iter().nth(idx) else {
        return;
    };

    session.navigate(&link.name);
}
