//! Fixed-width set of input keys.

use crate::keys::Key;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Combination of input keys, one bit per [`Key`] discriminant.
    ///
    /// Only the family masks are named here; single keys go in and out through
    /// [`Key`] so iteration can follow declaration order.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeySet: u32 {
        const DISC = 0x0000_FFFF;
        const KEYPAD = 0x0FFF_0000;
        const ACTION = 0x7000_0000;
    }
}

impl KeySet {
    /// Set holding exactly one key (empty for a marker).
    pub const fn of(key: Key) -> Self {
        Self::from_bits_retain(key.bit())
    }

    pub const fn contains_key(self, key: Key) -> bool {
        let bit = key.bit();
        bit != 0 && self.bits() & bit == bit
    }

    pub fn insert_key(&mut self, key: Key) {
        *self |= Self::of(key);
    }

    pub fn remove_key(&mut self, key: Key) {
        *self -= Self::of(key);
    }

    /// Keys in declaration order: disc ring, keypad, action.
    pub fn keys(self) -> impl Iterator<Item = Key> {
        Key::INPUTS
            .into_iter()
            .filter(move |key| self.contains_key(*key))
    }

    pub const fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    pub const fn disc(self) -> Self {
        self.intersection(Self::DISC)
    }

    pub const fn keypad(self) -> Self {
        self.intersection(Self::KEYPAD)
    }

    pub const fn action(self) -> Self {
        self.intersection(Self::ACTION)
    }

    /// Marker tags for every family present, `NoneActive` when the set is empty.
    pub fn markers(self) -> Vec<Key> {
        let mut markers: Vec<Key> = Vec::new();
        for key in self.keys() {
            let marker = key.marker();
            if !markers.contains(&marker) {
                markers.push(marker);
            }
        }
        if markers.is_empty() {
            markers.push(Key::NoneActive);
        }
        markers
    }
}

impl From<Key> for KeySet {
    fn from(key: Key) -> Self {
        Self::of(key)
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut set = KeySet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Key> for KeySet {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert_key(key);
        }
    }
}

impl<const N: usize> From<[Key; N]> for KeySet {
    fn from(keys: [Key; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}
