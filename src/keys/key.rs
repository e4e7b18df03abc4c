//! Individual keys and their family classification.

use crate::error::{HandctlError, Result};
use std::fmt;
use std::str::FromStr;

/// A single key value.
///
/// Disc directions come first, in clockwise ring order starting at north, so the
/// discriminant of a disc key is its ring index. The trailing marker values are
/// classification tags and never describe a pressed input.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Key {
    DiscN = 0,
    DiscNNE,
    DiscNE,
    DiscENE,
    DiscE,
    DiscESE,
    DiscSE,
    DiscSSE,
    DiscS,
    DiscSSW,
    DiscSW,
    DiscWSW,
    DiscW,
    DiscWNW,
    DiscNW,
    DiscNNW,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadClear,
    KeypadEnter,
    ActionKeyTop,
    ActionKeyBottomLeft,
    ActionKeyBottomRight,
    /// No key at all.
    #[default]
    None,
    /// Tag for a value that is not an input.
    NoneActive,
    /// Tag for "some disc direction".
    DiscActive,
    /// Tag for "some action button".
    ActionKeyActive,
    /// Tag for "some keypad key".
    KeypadActive,
}

/// The four disjoint families a [`Key`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    Disc,
    Keypad,
    Action,
    Marker,
}

impl Key {
    /// Number of compass points on the disc.
    pub const RING_SIZE: usize = 16;

    /// Disc directions in clockwise order, index 0 = north.
    pub const DISC_RING: [Key; Self::RING_SIZE] = [
        Key::DiscN,
        Key::DiscNNE,
        Key::DiscNE,
        Key::DiscENE,
        Key::DiscE,
        Key::DiscESE,
        Key::DiscSE,
        Key::DiscSSE,
        Key::DiscS,
        Key::DiscSSW,
        Key::DiscSW,
        Key::DiscWSW,
        Key::DiscW,
        Key::DiscWNW,
        Key::DiscNW,
        Key::DiscNNW,
    ];

    pub const KEYPAD: [Key; 12] = [
        Key::Keypad0,
        Key::Keypad1,
        Key::Keypad2,
        Key::Keypad3,
        Key::Keypad4,
        Key::Keypad5,
        Key::Keypad6,
        Key::Keypad7,
        Key::Keypad8,
        Key::Keypad9,
        Key::KeypadClear,
        Key::KeypadEnter,
    ];

    pub const ACTION: [Key; 3] = [
        Key::ActionKeyTop,
        Key::ActionKeyBottomLeft,
        Key::ActionKeyBottomRight,
    ];

    pub const MARKERS: [Key; 5] = [
        Key::None,
        Key::NoneActive,
        Key::DiscActive,
        Key::ActionKeyActive,
        Key::KeypadActive,
    ];

    /// Every real input, in declaration order. Markers are excluded.
    pub const INPUTS: [Key; 31] = [
        Key::DiscN,
        Key::DiscNNE,
        Key::DiscNE,
        Key::DiscENE,
        Key::DiscE,
        Key::DiscESE,
        Key::DiscSE,
        Key::DiscSSE,
        Key::DiscS,
        Key::DiscSSW,
        Key::DiscSW,
        Key::DiscWSW,
        Key::DiscW,
        Key::DiscWNW,
        Key::DiscNW,
        Key::DiscNNW,
        Key::Keypad0,
        Key::Keypad1,
        Key::Keypad2,
        Key::Keypad3,
        Key::Keypad4,
        Key::Keypad5,
        Key::Keypad6,
        Key::Keypad7,
        Key::Keypad8,
        Key::Keypad9,
        Key::KeypadClear,
        Key::KeypadEnter,
        Key::ActionKeyTop,
        Key::ActionKeyBottomLeft,
        Key::ActionKeyBottomRight,
    ];

    pub const fn family(self) -> KeyFamily {
        match self as u8 {
            0..=15 => KeyFamily::Disc,
            16..=27 => KeyFamily::Keypad,
            28..=30 => KeyFamily::Action,
            _ => KeyFamily::Marker,
        }
    }

    pub const fn is_disc(self) -> bool {
        matches!(self.family(), KeyFamily::Disc)
    }

    pub const fn is_keypad(self) -> bool {
        matches!(self.family(), KeyFamily::Keypad)
    }

    pub const fn is_action(self) -> bool {
        matches!(self.family(), KeyFamily::Action)
    }

    pub const fn is_marker(self) -> bool {
        matches!(self.family(), KeyFamily::Marker)
    }

    /// The marker tag classifying this key: `DiscActive`, `KeypadActive`,
    /// `ActionKeyActive`, or `NoneActive` for a marker.
    pub const fn marker(self) -> Key {
        match self.family() {
            KeyFamily::Disc => Key::DiscActive,
            KeyFamily::Keypad => Key::KeypadActive,
            KeyFamily::Action => Key::ActionKeyActive,
            KeyFamily::Marker => Key::NoneActive,
        }
    }

    /// Position on the compass ring, or `None` for anything but a disc key.
    pub const fn ring_index(self) -> Option<usize> {
        if self.is_disc() {
            Some(self as usize)
        } else {
            Option::None
        }
    }

    /// Disc direction at `index` on the ring; wraps modulo 16.
    pub const fn from_ring_index(index: usize) -> Key {
        Self::DISC_RING[index % Self::RING_SIZE]
    }

    /// The direction diametrically opposite a disc key.
    pub const fn antipode(self) -> Option<Key> {
        match self.ring_index() {
            Some(index) => Some(Self::from_ring_index(index + Self::RING_SIZE / 2)),
            Option::None => Option::None,
        }
    }

    /// Bit this key occupies in a [`KeySet`](crate::keys::KeySet); zero for markers.
    pub const fn bit(self) -> u32 {
        if self.is_marker() {
            0
        } else {
            1 << (self as u32)
        }
    }

    /// Short display token. Markers have an empty token.
    pub const fn display_token(self) -> &'static str {
        match self {
            Key::DiscN => "n",
            Key::DiscNNE => "nne",
            Key::DiscNE => "ne",
            Key::DiscENE => "ene",
            Key::DiscE => "e",
            Key::DiscESE => "ese",
            Key::DiscSE => "se",
            Key::DiscSSE => "sse",
            Key::DiscS => "s",
            Key::DiscSSW => "ssw",
            Key::DiscSW => "sw",
            Key::DiscWSW => "wsw",
            Key::DiscW => "w",
            Key::DiscWNW => "wnw",
            Key::DiscNW => "nw",
            Key::DiscNNW => "nnw",
            Key::Keypad0 => "0",
            Key::Keypad1 => "1",
            Key::Keypad2 => "2",
            Key::Keypad3 => "3",
            Key::Keypad4 => "4",
            Key::Keypad5 => "5",
            Key::Keypad6 => "6",
            Key::Keypad7 => "7",
            Key::Keypad8 => "8",
            Key::Keypad9 => "9",
            Key::KeypadClear => "clear",
            Key::KeypadEnter => "enter",
            Key::ActionKeyTop => "top",
            Key::ActionKeyBottomLeft => "bl",
            Key::ActionKeyBottomRight => "br",
            Key::None
            | Key::NoneActive
            | Key::DiscActive
            | Key::ActionKeyActive
            | Key::KeypadActive => "",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_token())
    }
}

impl FromStr for Key {
    type Err = HandctlError;

    /// Parse a display token, case-insensitively. Markers have no token and
    /// cannot be parsed.
    fn from_str(token: &str) -> Result<Self> {
        let wanted = token.trim();
        if wanted.is_empty() {
            return Err(HandctlError::unknown_key(token));
        }
        Key::INPUTS
            .iter()
            .copied()
            .find(|key| key.display_token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HandctlError::unknown_key(wanted))
    }
}
