pub mod actions;
pub mod cli;
pub mod config;
pub mod logging;
pub mod menu;
pub mod persistence;
pub mod tui;
pub mod tutorial;
pub mod util;
