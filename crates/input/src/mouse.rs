//! Mouse event filtering.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Terminal cell under a left-button press, as `(column, row)`.
///
/// Releases, drags, scrolls and other buttons are ignored.
pub fn left_click(ev: &MouseEvent) -> Option<(u16, u16)> {
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((ev.column, ev.row)),
        _ => None,
    }
}
