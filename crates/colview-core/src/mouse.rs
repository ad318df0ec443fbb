// ABOUTME: Decoded mouse events forwarded to the view.
// ABOUTME: Only position and scroll-wheel direction matter to the layout.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Press(MouseButton),
    WheelUp,
    WheelDown,
}

/// Mouse event in view-relative cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub row: i32,
    pub col: i32,
    pub kind: MouseKind,
}

impl MouseEvent {
    pub fn new(row: i32, col: i32, kind: MouseKind) -> Self {
        Self { row, col, kind }
    }

    /// -1 for wheel up, 1 for wheel down, None for button presses
    pub fn wheel_direction(&self) -> Option<i32> {
        match self.kind {
            MouseKind::WheelUp => Some(-1),
            MouseKind::WheelDown => Some(1),
            MouseKind::Press(_) => None,
        }
    }
}
