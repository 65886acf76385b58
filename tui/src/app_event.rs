use crossterm::event::KeyEvent;

/// How the picker was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Enter was pressed; holds the formatted date.
    Accepted(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppEvent {
    KeyEvent(KeyEvent),

    /// Request a redraw, e.g. after navigation or a terminal resize.
    Redraw,

    /// Leave the main loop with the given result.
    Exit(Selection),
}
