//! Menu appearance and sizing configuration
use serde::Deserialize;

use crate::menu::ui_flags::UiFlags;

/// Icons, labels and width bounds of a side menu.
///
/// Every field has a default, so a config file only needs to name what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Lower bound of the automatic width, in pixels.
    pub min_width: u32,
    /// Upper bound of the automatic width, in pixels.
    pub max_width: u32,
    /// Added to the longest label length when computing the automatic width.
    pub base_width: u32,
    pub collapsed_width: String,
    /// Width used when the automatic width is off or has nothing to measure.
    pub expanded_width: String,
    pub height: String,
    /// Toggle entry icon, `[expanded, collapsed]`.
    pub collapse_icons: [String; 2],
    pub collapsed_item_label: String,
    pub collapsed_group_label: String,
    pub collapsed_sub_item_icon: String,
    pub sub_item_bullet: String,
    pub documentation_label: String,
    pub documentation_icon: String,
    /// Derive the width from the visible labels.
    pub auto_width: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            min_width: 200,
            max_width: 300,
            base_width: 200,
            collapsed_width: "48px".to_string(),
            expanded_width: "210px".to_string(),
            height: "100%".to_string(),
            collapse_icons: [
                "DoubleChevronLeft8".to_string(),
                "DoubleChevronRight8".to_string(),
            ],
            collapsed_item_label: String::new(),
            collapsed_group_label: String::new(),
            collapsed_sub_item_icon: "DecreaseIndentArrowMirrored".to_string(),
            sub_item_bullet: "•".to_string(),
            documentation_label: "Documentation".to_string(),
            documentation_icon: "Documentation".to_string(),
            auto_width: true,
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub menu: MenuConfig,
    pub flags: UiFlags,
}

impl Settings {
    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.flags.collapsable);
        assert_eq!(settings.menu.min_width, 200);
        assert_eq!(settings.menu.sub_item_bullet, "•");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [menu]
            max_width = 260
            auto_width = false
            collapse_icons = ["Left", "Right"]

            [flags]
            documentation_enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.menu.max_width, 260);
        assert!(!settings.menu.auto_width);
        assert_eq!(settings.menu.collapse_icons, ["Left", "Right"]);
        assert_eq!(settings.menu.min_width, 200);
        assert!(settings.flags.documentation_enabled);
        assert!(settings.flags.collapsable);
    }

    #[test]
    fn test_unknown_types_are_rejected() {
        assert!(Settings::from_toml("[menu]\nmin_width = \"wide\"").is_err());
    }
}
