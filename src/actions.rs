use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{Args, Commands, MenuOptions};
use crate::menu::{
    Menu, nav_event::NavEvent, presentation::MenuSnapshot, session::Session,
    state::MenuState,
};
use crate::persistence::{load_menu_items, load_settings};
use crate::tui;
use crate::tutorial::{HOME_PAGE, Tutorial};

/// Output of the `render` command.
#[derive(Debug, Serialize)]
struct RenderOutput<'a> {
    tutorial: &'a str,
    active_page: &'a str,
    menu: MenuSnapshot,
}

pub fn handle(args: Args) -> Result<()> {
    match args.command {
        Commands::Collapsable { options } => {
            run_tutorial(Tutorial::Collapsable, &options)
        }
        Commands::Expanding { options } => {
            run_tutorial(Tutorial::Expanding, &options)
        }
        Commands::Render {
            tutorial,
            events,
            options,
        } => render(tutorial, &events, &options),
        Commands::Completions { shell } => {
            completions(shell);
            Ok(())
        }
    }
}

fn run_tutorial(tutorial: Tutorial, options: &MenuOptions) -> Result<()> {
    let session = build_session(tutorial, options)?;
    log::info!("starting {tutorial:?} tutorial");

    let mut menu = Menu::new(session);
    tui::with_terminal(|terminal| menu.run(terminal))
}

fn render(tutorial: Tutorial, events: &[String], options: &MenuOptions) -> Result<()> {
    let session = render_session(tutorial, events, options)?;

    let output = RenderOutput {
        tutorial: tutorial.title(),
        active_page: session.active_page(),
        menu: session.menu.snapshot(),
    };
    print!("{}", serde_yaml::to_string(&output)?);

    Ok(())
}

fn render_session(
    tutorial: Tutorial,
    events: &[String],
    options: &MenuOptions,
) -> Result<Session> {
    let mut session = build_session(tutorial, options)?;
    for name in events {
        session.navigate(name);
    }
    Ok(session)
}

fn completions(shell: Shell) {
    let mut command = Args::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

/// Builds the menu of `tutorial` from the config files and command-line
/// overrides, then opens the requested start page.
pub fn build_session(tutorial: Tutorial, options: &MenuOptions) -> Result<Session> {
    let settings = load_settings(options.config.as_deref())?;
    let items = match load_menu_items(options.menu.as_deref())? {
        Some(items) => items,
        None => tutorial.default_items(),
    };

    let mut flags = settings.flags;
    flags.documentation_enabled |= options.documentation;
    flags.group_names_visible |= options.show_group_names;

    let mut config = settings.menu;
    config.auto_width &= !options.fixed_width;

    let mut menu = MenuState::new(items, flags, config);
    menu.collapsed = options.collapsed;

    let default_page = menu
        .items
        .all_items
        .first()
        .map(|item| item.name.clone())
        .unwrap_or_else(|| HOME_PAGE.to_string());
    let controller = tutorial.controller(&default_page);
    let mut session = Session::new(tutorial.title(), menu, controller);

    if let Some(start_page) = &options.start_page {
        let event = NavEvent::resolve(start_page, &session.menu);
        if !session.controller.handles(&event) {
            anyhow::bail!(
                "The {tutorial:?} tutorial cannot open start page `{start_page}`"
            );
        }
        session.navigate(start_page);
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_session_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[flags]\ncollapsable = false\n").unwrap();
        let menu_path = dir.path().join("menu.yaml");
        fs::write(
            &menu_path,
            "items:\n  - name: home\n    label: Home\n  - name: about\n    label: About\n",
        )
        .unwrap();

        let options = MenuOptions {
            config: Some(config_path),
            menu: Some(menu_path),
            collapsed: true,
            documentation: true,
            fixed_width: true,
            ..MenuOptions::default()
        };
        let session = build_session(Tutorial::Collapsable, &options).unwrap();

        assert!(session.menu.collapsed);
        assert!(!session.menu.ui_flags.collapsable);
        assert!(session.menu.ui_flags.documentation_enabled);
        assert!(!session.menu.config.auto_width);
        assert_eq!(session.active_page(), HOME_PAGE);
    }

    #[test]
    fn test_build_session_with_menu_file_and_start_page() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();
        let menu_path = dir.path().join("menu.yaml");
        fs::write(
            &menu_path,
            "items:\n  - name: start\n    label: Start\n    sub_items:\n      - name: intro\n        label: Intro\n",
        )
        .unwrap();

        let options = MenuOptions {
            config: Some(config_path.clone()),
            menu: Some(menu_path.clone()),
            ..MenuOptions::default()
        };
        let session = build_session(Tutorial::Expanding, &options).unwrap();
        assert_eq!(session.active_page(), "start");

        let options = MenuOptions {
            config: Some(config_path.clone()),
            menu: Some(menu_path.clone()),
            start_page: Some("intro".to_string()),
            ..MenuOptions::default()
        };
        let session = build_session(Tutorial::Expanding, &options).unwrap();
        assert_eq!(session.active_page(), "intro");
        assert_eq!(session.menu.active_root_item.as_deref(), Some("start"));

        let options = MenuOptions {
            config: Some(config_path),
            menu: Some(menu_path),
            start_page: Some("missing".to_string()),
            ..MenuOptions::default()
        };
        assert!(build_session(Tutorial::Expanding, &options).is_err());
    }

    #[test]
    fn test_render_session_applies_events_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();
        let menu_path = dir.path().join("menu.yaml");
        fs::write(
            &menu_path,
            "items:\n  - name: home\n    label: Home\n    group: \"1\"\n    sub_items:\n      - name: subpage\n        label: Subpage\n  - name: about\n    label: About\n    group: \"1\"\n",
        )
        .unwrap();

        let options = MenuOptions {
            config: Some(config_path),
            menu: Some(menu_path),
            ..MenuOptions::default()
        };
        let events = vec![
            "subpage".to_string(),
            "side_menu_toggle_collapse".to_string(),
        ];
        let session =
            render_session(Tutorial::Expanding, &events, &options).unwrap();

        assert_eq!(session.active_page(), "subpage");
        let snapshot = session.menu.snapshot();
        assert!(snapshot.collapsed);
        assert_eq!(snapshot.width, "48px");
        assert_eq!(snapshot.groups.len(), 2);

        let yaml = serde_yaml::to_string(&snapshot).unwrap();
        assert!(yaml.contains("side_menu_toggle_collapse"));
    }

    #[test]
    fn test_build_session_rejects_start_pages_the_tutorial_ignores() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();
        let menu_path = dir.path().join("menu.yaml");
        fs::write(
            &menu_path,
            "items:\n  - name: home\n    label: Home\n    sub_items:\n      - name: subpage\n        label: Subpage\n",
        )
        .unwrap();

        let options = |start_page: &str| MenuOptions {
            config: Some(config_path.clone()),
            menu: Some(menu_path.clone()),
            start_page: Some(start_page.to_string()),
            ..MenuOptions::default()
        };

        assert!(build_session(Tutorial::Collapsable, &options("subpage")).is_err());
        assert!(build_session(Tutorial::Expanding, &options("subpage")).is_ok());
        assert!(
            build_session(Tutorial::Expanding, &options("mv_documentation"))
                .is_err()
        );

        let session =
            build_session(Tutorial::Collapsable, &options("home")).unwrap();
        assert_eq!(session.active_page(), "home");
    }
}
