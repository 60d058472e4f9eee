//! CLI argument parser
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::tutorial::Tutorial;
use crate::util::validate_item_name;

/// Command-line argument parser for `sidemenu`.
#[derive(Debug, Parser)]
#[command(name = "sidemenu")]
#[command(
    about = "Tutorials for a collapsible, expandable side menu",
    long_about = "sidemenu - Tutorial applications for a side-navigation menu.

Key Features:
 - Collapse the menu to an icon strip and back.
 - Expand a root item to reveal its sub-pages.
 - Load your own item tree and appearance settings.

Examples:
 sidemenu collapsable                   # menu that collapses
 sidemenu expanding -d                  # expanding menu with documentation
 sidemenu render expanding -e subpage   # print the menu after opening subpage

Files (in $SIDEMENU_CONFIG_DIR if set, or ~/.config/sidemenu):
 config.toml  appearance and width settings
 menu.yaml    item tree replacing the tutorial's default items

Use `sidemenu <COMMAND> --help` for more details."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands for `sidemenu`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Run the collapsable menu tutorial",
        long_about = "Open the collapsable tutorial: selecting an entry switches
the page, the last entry collapses the menu to an icon strip.",
        alias = "c"
    )]
    Collapsable {
        #[command(flatten)]
        options: MenuOptions,
    },

    #[command(
        about = "Run the expanding menu tutorial",
        long_about = "Open the expanding tutorial: opening a sub-page expands its
root item and hides the sub-items of every other root.",
        alias = "e"
    )]
    Expanding {
        #[command(flatten)]
        options: MenuOptions,
    },

    #[command(
        about = "Print the menu of a tutorial as YAML",
        long_about = "Apply the given navigation events to a tutorial without
opening the TUI, then print the active page and the menu presentation.",
        alias = "r"
    )]
    Render {
        /// Tutorial to render
        #[arg(value_enum)]
        tutorial: Tutorial,
        /// Entry names to activate, in order
        #[arg(long = "event", short = 'e', value_parser = validate_item_name)]
        events: Vec<String>,
        #[command(flatten)]
        options: MenuOptions,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that builds a menu.
#[derive(Debug, Default, clap::Args)]
pub struct MenuOptions {
    #[clap(long, help = "Path to a config.toml")]
    pub config: Option<PathBuf>,
    #[clap(long, short, help = "Path to a YAML menu file")]
    pub menu: Option<PathBuf>,
    #[clap(long, short, help = "Start with the menu collapsed")]
    pub collapsed: bool,
    #[clap(long, short, help = "Append the documentation entry")]
    pub documentation: bool,
    #[clap(long, short = 'g', help = "Show group names as headers")]
    pub show_group_names: bool,
    #[clap(long, short = 'f', help = "Disable the label-based width")]
    pub fixed_width: bool,
    #[clap(
        long,
        short = 's',
        value_parser = validate_item_name,
        help = "Entry to open on start up"
    )]
    pub start_page: Option<String>,
}
