use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ITEM_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{1,30}$").unwrap());

/// Error type returned when a menu item name is invalid.
#[derive(Debug)]
pub struct ItemNameError(String);

impl std::error::Error for ItemNameError {}

impl fmt::Display for ItemNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a menu item name according to the rules:
///
/// - Must be between 1 and 30 characters long.
/// - Can only contain alphanumeric characters, underscores (`_`),
///   and hyphens (`-`).
///
/// # Errors
///
/// Returns an [`ItemNameError`] if the name is invalid.
///
/// # Examples
/// ```
/// # use sidemenu::util::validate_item_name;
/// assert!(validate_item_name("subpage_2").is_ok());
/// assert!(validate_item_name("sub page").is_err());
/// ```
pub fn validate_item_name(name: &str) -> Result<String, ItemNameError> {
    if !ITEM_NAME_RE.is_match(name) {
        Err(ItemNameError(
            "Item name must be 1-30 characters long and only contain [a-zA-Z0-9_-]"
                .into(),
        ))
    } else {
        Ok(name.to_string())
    }
}
