/// Actions produced by key presses and applied by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    MoveSelection(i32),
    /// Activate the entry under the cursor.
    Activate,
    /// Follow the n-th link of the current page.
    OpenLink(usize),
    ToggleCollapse,
    ToggleHelp,
    Exit,
    Nop,
}
