use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::menu::{
    presentation::NavEntry,
    session::{MenuMode, Session},
};

/// Terminal cells are roughly this many pixels wide.
const PX_PER_COLUMN: u16 = 8;
const MIN_SIDEBAR_COLUMNS: u16 = 3;
const FALLBACK_SIDEBAR_COLUMNS: u16 = 26;

pub trait MenuRenderer {
    fn draw(&mut self, frame: &mut Frame, session: &Session);
}

pub struct DefaultMenuRenderer;

impl MenuRenderer for DefaultMenuRenderer {
    fn draw(&mut self, frame: &mut Frame, session: &Session) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1), // help hint
            ])
            .split(frame.area());

        let width = session.menu.width();
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                size_constraint(
                    &width,
                    Constraint::Length(FALLBACK_SIDEBAR_COLUMNS),
                ),
                Constraint::Min(0),
            ])
            .split(main_chunks[0]);

        let sidebar_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                size_constraint(
                    session.menu.height(),
                    Constraint::Percentage(100),
                ),
                Constraint::Min(0),
            ])
            .split(content_chunks[0]);

        draw_sidebar(frame, session, sidebar_chunks[0]);
        draw_page(frame, session, content_chunks[1]);

        let help_hint = Paragraph::new(
            "↑/↓: Move | Enter: Open | 1-9: Links | C-b: Collapse | C-h: Help | Esc: Quit",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(help_hint, main_chunks[1]);

        if session.mode == MenuMode::HelpPopup {
            draw_help_popup(frame);
        }
    }
}

/// Converts a size token (`"205px"`, `"100%"`) into a layout constraint.
pub fn size_constraint(token: &str, fallback: Constraint) -> Constraint {
    let token = token.trim();

    if let Some(px) = token
        .strip_suffix("px")
        .and_then(|value| value.trim().parse::<u16>().ok())
    {
        return Constraint::Length((px / PX_PER_COLUMN).max(MIN_SIDEBAR_COLUMNS));
    }

    if let Some(percent) = token
        .strip_suffix('%')
        .and_then(|value| value.trim().parse::<u16>().ok())
    {
        return Constraint::Percentage(percent.min(100));
    }

    fallback
}

/// Terminal glyph for an icon name.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "Home" => "⌂",
        "ChevronRightMed" => "›",
        "ChevronDownMed" => "⌄",
        "DoubleChevronLeft8" => "«",
        "DoubleChevronRight8" => "»",
        "DecreaseIndentArrowMirrored" => "↳",
        "Documentation" => "?",
        "cat" => "◆",
        "model" => "▪",
        _ => "•",
    }
}

fn entry_line(entry: &NavEntry) -> String {
    let glyph = icon_glyph(&entry.icon);
    if entry.label.is_empty() {
        glyph.to_string()
    } else {
        format!("{glyph} {}", entry.label)
    }
}

fn draw_sidebar(frame: &mut Frame, session: &Session, area: Rect) {
    let header_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let mut rows = Vec::new();
    let mut cursor_row = None;
    let mut entry_idx = 0;

    for (group_idx, group) in session.menu.presentation().iter().enumerate() {
        if !group.label.is_empty() {
            rows.push(ListItem::new(Line::from(group.label.clone())).style(header_style));
        } else if group_idx > 0 {
            rows.push(ListItem::new(""));
        }

        for entry in &group.items {
            let mut style = Style::default();
            if entry.name == session.active_page() {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if entry.disabled {
                style = style.fg(Color::DarkGray);
            }

            if entry_idx == session.cursor {
                cursor_row = Some(rows.len());
            }
            rows.push(ListItem::new(entry_line(entry)).style(style));
            entry_idx += 1;
        }
    }

    let mut list_state = ListState::default();
    list_state.select(cursor_row);

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_page(frame: &mut Frame, session: &Session, area: Rect) {
    let page = session.page();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} | {}", session.title, page.title));

    let mut lines: Vec<Line> = page.body.into_iter().map(Line::from).collect();

    if !page.links.is_empty() {
        lines.push(Line::from(""));
        lines.extend(page.links.iter().enumerate().map(|(idx, link)| {
            Line::from(format!("[{}] {}", idx + 1, link.label))
                .style(Style::default().fg(Color::Green))
        }));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = create_centered_rect(f.area(), 50, 9);

    f.render_widget(Clear, popup_area);

    let navigation_block = Block::default()
        .title("Navigation")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let menu_block = Block::default()
        .title("Menu")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let navigation_text = vec![
        Line::from("↑/k/C-p  → Previous"),
        Line::from("↓/j/C-n  → Next"),
        Line::from("Enter    → Open"),
        Line::from("1-9      → Page link"),
        Line::from("Esc/q    → Quit"),
    ];

    let menu_text = vec![
        Line::from("C-b → Collapse"),
        Line::from("C-h → Toggle help"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(popup_area);

    f.render_widget(
        Paragraph::new(navigation_text).block(navigation_block),
        chunks[0],
    );
    f.render_widget(Paragraph::new(menu_text).block(menu_block), chunks[1]);
}

fn create_centered_rect(area: Rect, length_x: u16, length_y: u16) -> Rect {
    let vertical =
        Layout::vertical([Constraint::Length(length_y)]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(length_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MenuConfig,
        menu::{state::MenuState, ui_flags::UiFlags},
        tutorial::{HOME_PAGE, Tutorial},
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn session(tutorial: Tutorial) -> Session {
        let menu = MenuState::new(
            tutorial.default_items(),
            UiFlags::default(),
            MenuConfig::default(),
        );
        Session::new(tutorial.title(), menu, tutorial.controller(HOME_PAGE))
    }

    fn render(session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| DefaultMenuRenderer.draw(frame, session))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_size_constraint() {
        let fallback = Constraint::Length(FALLBACK_SIDEBAR_COLUMNS);
        assert_eq!(size_constraint("205px", fallback), Constraint::Length(25));
        assert_eq!(size_constraint("8px", fallback), Constraint::Length(3));
        assert_eq!(size_constraint("100%", fallback), Constraint::Percentage(100));
        assert_eq!(size_constraint("wide", fallback), fallback);
    }

    #[test]
    fn test_draws_labels_and_page() {
        let session = session(Tutorial::Expanding);
        let text = render(&session);
        assert!(text.contains("⌂ Home"));
        assert!(text.contains("◆ About"));
        assert!(text.contains("[1] Subpage"));
        assert!(text.contains("[2] Subpage 2"));
    }

    #[test]
    fn test_expanded_sub_items_are_drawn() {
        let mut session = session(Tutorial::Expanding);
        session.navigate("subpage");
        let text = render(&session);
        assert!(text.contains("⌄ Home"));
        assert!(text.contains("▪  • Subpage 2"));
    }

    #[test]
    fn test_collapsed_menu_hides_labels() {
        let mut session = session(Tutorial::Collapsable);
        session.navigate("side_menu_toggle_collapse");
        let text = render(&session);
        assert!(!text.contains("About"));
        assert!(text.contains("»"));
    }

    #[test]
    fn test_help_popup() {
        let mut session = session(Tutorial::Collapsable);
        session.mode = MenuMode::HelpPopup;
        let text = render(&session);
        assert!(text.contains("Navigation"));
        assert!(text.contains("Toggle help"));
    }
}
