/// Keys understood by the scroll engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollKey {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}

impl ScrollKey {
    /// Translate a crossterm key code. Keys the engine has no binding for
    /// return `None`.
    pub fn from_key_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Up => Some(ScrollKey::Up),
            KeyCode::Down => Some(ScrollKey::Down),
            KeyCode::Left => Some(ScrollKey::Left),
            KeyCode::Right => Some(ScrollKey::Right),
            KeyCode::PageUp => Some(ScrollKey::PageUp),
            KeyCode::PageDown => Some(ScrollKey::PageDown),
            KeyCode::Home => Some(ScrollKey::Home),
            KeyCode::End => Some(ScrollKey::End),
            _ => None,
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Only the primary button presses scrollbar parts.
    pub const fn is_primary(self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtButton;
        match button {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}
