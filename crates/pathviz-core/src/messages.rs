//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// MouseAction
// ---------------------------------------------------------------------------

/// A mouse action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Middle button pressed.
    Auxiliary,
    /// Secondary (right) button pressed.
    Secondary,
    /// Button released.
    Release,
    /// Pointer moved, with or without a button held.
    Move,
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered by a [`Driver`](crate::Driver).
///
/// Mouse positions are in back-end units (terminal columns/rows, or pixels);
/// translating them to grid cells is the consumer's job.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msg {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse event.
    Mouse { action: MouseAction, pos: Point },
    /// The screen / terminal was resized.
    Screen { width: i32, height: i32 },
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: a key press.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: a mouse event at `(x, y)`.
    pub fn mouse(action: MouseAction, x: i32, y: i32) -> Self {
        Self::Mouse {
            action,
            pos: Point::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            Msg::key(Key::Space),
            Msg::KeyDown { key: Key::Space }
        );
        assert_eq!(
            Msg::mouse(MouseAction::Secondary, 7, 3),
            Msg::Mouse {
                action: MouseAction::Secondary,
                pos: Point::new(7, 3),
            }
        );
    }
}
