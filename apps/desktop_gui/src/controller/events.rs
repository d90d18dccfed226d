/// Commands posted from the tray thread. The tray never calls into UI state
/// directly: everything funnels through a channel the UI thread drains once
/// per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayCommand {
    ShowPanel,
    HidePanel,
    Quit,
}
