//! Keyboard handling for the editable surface
//!
//! Only Tab and Shift+Tab are intercepted. Everything else keeps the
//! surface's native behavior and reaches the widget as an input or
//! selection-change event instead.

use std::fmt;

use crate::messages::{Msg, SurfaceMsg};

/// Modifier keys as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= Self::CTRL.0;
        }
        if shift {
            bits |= Self::SHIFT.0;
        }
        if alt {
            bits |= Self::ALT.0;
        }
        if meta {
            bits |= Self::META.0;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            (self.ctrl(), "ctrl"),
            (self.alt(), "alt"),
            (self.shift(), "shift"),
            (self.meta(), "meta"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", parts.join("+"))
    }
}

/// Keys the surface reports
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Backspace,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Char(char),
}

/// A key-down event on the editable surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Whether the widget consumed a key
///
/// `Handled` means the host must suppress the native default and stop
/// propagation; `Ignored` leaves the event alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Map a key press to a widget message
///
/// Tab with ctrl, alt or meta is left to the host (tab and window switching).
pub fn handle_key(press: &KeyPress) -> (KeyOutcome, Option<Msg>) {
    let mods = press.modifiers;
    match press.key {
        Key::Tab if !mods.ctrl() && !mods.alt() && !mods.meta() => {
            let msg = if mods.shift() {
                SurfaceMsg::Outdent
            } else {
                SurfaceMsg::Indent
            };
            (KeyOutcome::Handled, Some(Msg::Surface(msg)))
        }
        _ => (KeyOutcome::Ignored, None),
    }
}
