use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use dirs::home_dir;
use serde::Deserialize;

use crate::config::Settings;
use crate::menu::{item::MenuItem, items_state::ItemsState};

const CONFIG_DIR_ENV: &str = "SIDEMENU_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "sidemenu";
const SETTINGS_FILE: &str = "config.toml";
const MENU_FILE: &str = "menu.yaml";
const LOG_FILE: &str = "sidemenu.log";

/// Item tree as written in a menu file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFile {
    items: Vec<ItemDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ItemDef {
    name: String,
    label: String,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    expanded_icon: Option<String>,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    expand_always: bool,
    /// Roots default to visible, sub-items to hidden.
    #[serde(default, alias = "render")]
    visible: Option<bool>,
    #[serde(default)]
    sub_items: Vec<ItemDef>,
}

impl ItemDef {
    fn into_item(self, is_root: bool) -> MenuItem {
        let mut item = if is_root {
            MenuItem::new(self.name, self.label)
        } else {
            MenuItem::sub_item(self.name, self.label)
        };

        item.group = self.group;
        if let Some(icon) = self.icon {
            item.icon = icon;
        }
        if let Some(expanded_icon) = self.expanded_icon {
            item.expanded_icon = expanded_icon;
        }
        item.disabled = self.disabled;
        item.expand_always = self.expand_always;
        if let Some(visible) = self.visible {
            item.visible = visible;
        }
        item.sub_items = self
            .sub_items
            .into_iter()
            .map(|sub| sub.into_item(false))
            .collect();

        item
    }
}

/// Parses and validates a YAML menu file.
pub fn parse_menu_items(data: &str) -> Result<Vec<MenuItem>> {
    let file: MenuFile =
        serde_yaml::from_str(data).context("Failed to parse menu file")?;

    let items = ItemsState::new(
        file.items
            .into_iter()
            .map(|item| item.into_item(true))
            .collect(),
    );
    items.validate()?;

    Ok(items.all_items)
}

/// Loads the item tree from `path`, or from the config directory when no path
/// is given. Returns `None` when there is no menu file to load.
pub fn load_menu_items(path: Option<&Path>) -> Result<Option<Vec<MenuItem>>> {
    let Some(path) = resolve_file(path, MENU_FILE)? else {
        return Ok(None);
    };

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let items = parse_menu_items(&data)
        .with_context(|| format!("Invalid menu file {}", path.display()))?;

    log::info!("loaded {} root items from {}", items.len(), path.display());
    Ok(Some(items))
}

/// Loads `config.toml` from `path`, or from the config directory when no path
/// is given. Missing files give the default settings.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = resolve_file(path, SETTINGS_FILE)? else {
        return Ok(Settings::default());
    };

    let data = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let settings = Settings::from_toml(&data)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    log::info!("loaded settings from {}", path.display());
    Ok(settings)
}

pub fn get_log_file_path() -> Result<PathBuf> {
    let mut path = get_and_ensure_config_dir()?;
    path.push(LOG_FILE);
    Ok(path)
}

/// An explicit path must exist; the default one is optional.
fn resolve_file(path: Option<&Path>, default_name: &str) -> Result<Option<PathBuf>> {
    if let Some(path) = path {
        if !path.is_file() {
            anyhow::bail!("No such file: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let default_path = get_config_dir_path()?.join(default_name);
    Ok(default_path.is_file().then_some(default_path))
}

fn get_and_ensure_config_dir() -> Result<PathBuf> {
    let dir_path = get_config_dir_path()?;
    fs::create_dir_all(&dir_path).with_context(|| {
        format!("Failed to create directory {}", dir_path.display())
    })?;
    Ok(dir_path)
}

fn get_config_dir_path() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let home = home_dir()
        .ok_or_else(|| anyhow::anyhow!("Failed to determine HOME directory"))?;
    Ok(home.join(".config").join(DEFAULT_CONFIG_DIR))
}
