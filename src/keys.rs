//! Key taxonomy: the vocabulary every other module speaks.
//!
//! A [`Key`] is one disc direction, keypad key, action button, or one of the
//! classification markers. A [`KeySet`] is a fixed-width flag word holding any
//! combination of input keys; markers have no bit and can never be stored in one.

pub mod display;
pub mod key;
pub mod set;

pub use display::{display_string, display_string_of, parse_keys, try_display_string_of};
pub use key::{Key, KeyFamily};
pub use set::KeySet;

/// Keypad corner pairs that drive the same four matrix lines when held together.
///
/// Holding both keys of either pair produces the register value of holding both
/// keys of the other pair.
pub const RESERVED_PAIRS: [(Key, Key); 2] = [
    (Key::Keypad1, Key::Keypad9),
    (Key::Keypad3, Key::Keypad7),
];
