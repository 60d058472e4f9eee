use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::menu::{
    action::MenuAction,
    session::{MenuMode, Session},
};

pub trait EventHandler {
    fn handle_event(&self, event: Event, session: &Session) -> MenuAction;
}

pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {
    fn handle_event(&self, event: Event, session: &Session) -> MenuAction {
        let Event::Key(key) = event else {
            return MenuAction::Nop;
        };

        if key.kind != KeyEventKind::Press {
            return MenuAction::Nop;
        }

        match session.mode {
            MenuMode::HelpPopup => handle_help_popup_key(key),
            MenuMode::Normal => handle_normal_mode_key(key),
        }
    }
}

fn handle_help_popup_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('h' | 'c')) => MenuAction::ToggleHelp,
        (false, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) => {
            MenuAction::ToggleHelp
        }
        _ => MenuAction::Nop,
    }
}

fn handle_normal_mode_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('p')) => MenuAction::MoveSelection(-1),
        (true, KeyCode::Char('n')) => MenuAction::MoveSelection(1),
        (true, KeyCode::Char('b')) => MenuAction::ToggleCollapse,
        (true, KeyCode::Char('h')) => MenuAction::ToggleHelp,
        (true, KeyCode::Char('c')) => MenuAction::Exit,

        (false, KeyCode::Char(c @ '1'..='9')) => {
            MenuAction::OpenLink(c as usize - '1' as usize)
        }
        (false, KeyCode::Up | KeyCode::Char('k')) => {
            MenuAction::MoveSelection(-1)
        }
        (false, KeyCode::Down | KeyCode::Char('j')) => {
            MenuAction::MoveSelection(1)
        }
        (false, KeyCode::Enter | KeyCode::Char(' ')) => MenuAction::Activate,
        (false, KeyCode::Char('q') | KeyCode::Esc) => MenuAction::Exit,

        _ => MenuAction::Nop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MenuConfig,
        menu::{state::MenuState, ui_flags::UiFlags},
        tutorial::{HOME_PAGE, Tutorial},
    };
    use crossterm::event::KeyEventState;

    fn session() -> Session {
        let menu = MenuState::new(
            Tutorial::Expanding.default_items(),
            UiFlags::default(),
            MenuConfig::default(),
        );
        Session::new("test", menu, Tutorial::Expanding.controller(HOME_PAGE))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn handle(event: Event, session: &Session) -> MenuAction {
        DefaultEventHandler.handle_event(event, session)
    }

    #[test]
    fn test_normal_mode_keys() {
        let session = session();
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        assert_eq!(handle(key(KeyCode::Up, none), &session), MenuAction::MoveSelection(-1));
        assert_eq!(handle(key(KeyCode::Char('j'), none), &session), MenuAction::MoveSelection(1));
        assert_eq!(handle(key(KeyCode::Char('n'), ctrl), &session), MenuAction::MoveSelection(1));
        assert_eq!(handle(key(KeyCode::Enter, none), &session), MenuAction::Activate);
        assert_eq!(handle(key(KeyCode::Char('b'), ctrl), &session), MenuAction::ToggleCollapse);
        assert_eq!(handle(key(KeyCode::Char('h'), ctrl), &session), MenuAction::ToggleHelp);
        assert_eq!(handle(key(KeyCode::Char('1'), none), &session), MenuAction::OpenLink(0));
        assert_eq!(handle(key(KeyCode::Char('9'), none), &session), MenuAction::OpenLink(8));
        assert_eq!(handle(key(KeyCode::Esc, none), &session), MenuAction::Exit);
        assert_eq!(handle(key(KeyCode::Char('x'), none), &session), MenuAction::Nop);
    }

    #[test]
    fn test_help_popup_keys() {
        let mut session = session();
        session.mode = MenuMode::HelpPopup;

        assert_eq!(
            handle(key(KeyCode::Esc, KeyModifiers::NONE), &session),
            MenuAction::ToggleHelp
        );
        assert_eq!(
            handle(key(KeyCode::Down, KeyModifiers::NONE), &session),
            MenuAction::Nop
        );
    }

    #[test]
    fn test_non_press_events_are_ignored() {
        let session = session();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle(release, &session), MenuAction::Nop);
        assert_eq!(handle(Event::FocusGained, &session), MenuAction::Nop);
    }
}
