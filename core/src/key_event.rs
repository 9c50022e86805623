//! Key events understood by the input session.
//!
//! The session only sees these semantic events. Renderers translate their
//! platform key codes into `KeyEvent`s, either directly or through
//! `KeyEvent::from_key_code` for curses-style integer codes.

/// Curses `KEY_LEFT`.
pub const KEY_LEFT: u32 = 260;
/// Curses `KEY_RIGHT`.
pub const KEY_RIGHT: u32 = 261;
/// Curses `KEY_BACKSPACE`.
pub const KEY_BACKSPACE: u32 = 263;
/// Curses `KEY_RESIZE`.
pub const KEY_RESIZE: u32 = 410;

/// Key event types that the session can process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Space bar (ends the current word)
    Space,
    /// Printable character input (`'!'..='~'`)
    Char(char),
    /// Tab key (cycle the highlighted suggestion)
    Tab,
    /// Enter/Return key (accept the highlighted suggestion)
    Enter,
    /// Backspace key
    Backspace,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Escape key (end the session)
    Escape,
    /// Terminal resize; layout only, ignored by the session
    Resize,
    /// Any key code the renderer could not classify
    Unknown(u32),
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Keep reading events
    Continue,
    /// The user asked to end the session
    Exit,
}

impl KeyResult {
    pub fn should_continue(self) -> bool {
        self == KeyResult::Continue
    }
}

impl KeyEvent {
    /// Map a curses-style key code to an event.
    ///
    /// Ranges are tested in a fixed order: space first, then the printable
    /// range, then the named keys.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            32 => KeyEvent::Space,
            33..=126 => KeyEvent::Char(char::from(code as u8)),
            KEY_RESIZE => KeyEvent::Resize,
            27 => KeyEvent::Escape,
            9 => KeyEvent::Tab,
            10 => KeyEvent::Enter,
            KEY_BACKSPACE | 127 | 8 => KeyEvent::Backspace,
            KEY_LEFT => KeyEvent::Left,
            KEY_RIGHT => KeyEvent::Right,
            other => KeyEvent::Unknown(other),
        }
    }

    /// True for `Char` events inside the printable ASCII range, space excluded.
    pub fn is_printable_char(&self) -> bool {
        matches!(self, KeyEvent::Char(ch) if ('!'..='~').contains(ch))
    }
}
