pub mod action;
pub mod action_dispatcher;
pub mod event_handler;
pub mod item;
pub mod items_state;
pub mod nav_event;
pub mod presentation;
pub mod renderer;
pub mod session;
pub mod state;
pub mod ui_flags;

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::menu::{
    action_dispatcher::{ActionDispatcher, DefaultActionDispatcher},
    event_handler::{DefaultEventHandler, EventHandler},
    renderer::{DefaultMenuRenderer, MenuRenderer},
    session::Session,
};

/// Interactive side menu: draws the session and feeds key presses back into
/// it until the user quits.
pub struct Menu<R, E, D>
where
    R: MenuRenderer,
    E: EventHandler,
    D: ActionDispatcher,
{
    pub session: Session,
    renderer: R,
    event_handler: E,
    action_dispatcher: D,
}

impl Menu<DefaultMenuRenderer, DefaultEventHandler, DefaultActionDispatcher> {
    pub fn new(session: Session) -> Self {
        Self::with_parts(
            session,
            DefaultMenuRenderer,
            DefaultEventHandler,
            DefaultActionDispatcher,
        )
    }
}

impl<R, E, D> Menu<R, E, D>
where
    R: MenuRenderer,
    E: EventHandler,
    D: ActionDispatcher,
{
    pub fn with_parts(
        session: Session,
        renderer: R,
        event_handler: E,
        action_dispatcher: D,
    ) -> Self {
        Self {
            session,
            renderer,
            event_handler,
            action_dispatcher,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.session.should_exit {
            terminal.draw(|frame| self.renderer.draw(frame, &self.session))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            let action = self.event_handler.handle_event(event, &self.session);
            self.action_dispatcher.dispatch(action, &mut self.session);
        }

        Ok(())
    }
}
