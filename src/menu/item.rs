use std::fmt;

const DEFAULT_ICON: &str = "ChevronRightMed";
const DEFAULT_EXPANDED_ICON: &str = "ChevronDownMed";

/// A single entry of the side menu, possibly owning one level of sub-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Unique identifier, reported back when the entry is activated.
    pub name: String,
    /// Text shown next to the icon.
    pub label: String,
    /// Items sharing a group are displayed together.
    pub group: Option<String>,
    pub icon: String,
    /// Icon used while the item is the expanded active root.
    pub expanded_icon: String,
    /// Forwarded to the renderer only.
    pub disabled: bool,
    /// Treat the item as expanded whenever it is the active root.
    pub expand_always: bool,
    /// Whether the item currently appears in the presentation.
    pub visible: bool,
    pub sub_items: Vec<MenuItem>,
}

impl MenuItem {
    /// Creates a visible top-level item with the default icons.
    ///
    /// # Arguments
    /// * `name` - Identifier of the item, unique within the menu.
    /// * `label` - Text to display.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            group: None,
            icon: DEFAULT_ICON.to_string(),
            expanded_icon: DEFAULT_EXPANDED_ICON.to_string(),
            disabled: false,
            expand_always: false,
            visible: true,
            sub_items: Vec::new(),
        }
    }

    /// Creates a sub-item. Sub-items start hidden until their root is
    /// expanded.
    pub fn sub_item(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(name, label)
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn expanded_icon(mut self, icon: impl Into<String>) -> Self {
        self.expanded_icon = icon.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn expand_always(mut self, expand_always: bool) -> Self {
        self.expand_always = expand_always;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn sub_items(mut self, sub_items: Vec<MenuItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hidden_indicator = if !self.visible { " (hidden)" } else { "" };
        let disabled_indicator = if self.disabled { " (disabled)" } else { "" };

        write!(
            f,
            "{} [{}]{}{}",
            self.label, self.name, hidden_indicator, disabled_indicator
        )
    }
}
