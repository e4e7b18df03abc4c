//! Reserved key combinations: presses the keypad matrix cannot tell apart.
//!
//! Holding keys 1 and 9 drives rows 0 and 2 on columns 5 and 7, and so does
//! holding 3 and 7. Both produce [`GHOST_REGISTER`]. Those lines also happen
//! to be the north and south disc contacts and the Top action bridge, so
//! {N, S, Top} reads back as the same register, and adding any of them to a
//! corner pair leaves it unchanged. Adding E, W or either bottom button
//! drives an extra line and makes the register distinct again.
//!
//! A key set is reserved exactly when it encodes to the ghost register, so
//! the byte and key-set answers agree for every decoded register.

use crate::codec::encode;
use crate::keys::{Key, KeySet};

/// Register produced by either reserved keypad pair.
pub const GHOST_REGISTER: u8 = 0xA5;

/// Anything that can be asked whether it is a reserved combination.
pub trait Reservable {
    fn is_reserved(&self) -> bool;
}

impl Reservable for u8 {
    fn is_reserved(&self) -> bool {
        *self == GHOST_REGISTER
    }
}

impl Reservable for KeySet {
    /// True when the held keys drive exactly the ghost register's lines.
    fn is_reserved(&self) -> bool {
        encode(*self) == GHOST_REGISTER
    }
}

impl Reservable for [Key] {
    fn is_reserved(&self) -> bool {
        self.iter().copied().collect::<KeySet>().is_reserved()
    }
}

impl<T: Reservable> Reservable for Option<T> {
    /// A missing value is never reserved.
    fn is_reserved(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_reserved())
    }
}

/// Whether `value` (a register byte, a key set, or a slice of keys) is a
/// reserved combination.
pub fn is_reserved<T: Reservable + ?Sized>(value: &T) -> bool {
    value.is_reserved()
}
