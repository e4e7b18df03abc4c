//! Disc decoding: register bits 0-4 to compass directions.
//!
//! Each of the 16 directions has a hardware code on the five disc lines. Four
//! primary contacts (S, E, N, W on bits 0-3) and one fine contact (bit 4). A
//! reading matches a direction when every line of the direction's code is
//! driven. Adjacent contacts together match both cardinals plus the direction
//! between them; opposite contacts match only the two cardinals.

use crate::codec::{COLUMN_LINES, DISC_LINES};
use crate::keys::{Key, KeySet};

/// Hardware code of each direction, indexed by ring position (N first,
/// clockwise).
pub const DISC_CODES: [u8; Key::RING_SIZE] = [
    0x04, // N
    0x14, // NNE
    0x16, // NE
    0x06, // ENE
    0x02, // E
    0x12, // ESE
    0x13, // SE
    0x03, // SSE
    0x01, // S
    0x11, // SSW
    0x19, // SW
    0x09, // WSW
    0x08, // W
    0x18, // WNW
    0x1C, // NW
    0x0C, // NNW
];

/// How much of the matching direction set a disc decode reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum DiscMatch {
    /// Only the tightest matches: no direction whose code is contained in
    /// another matching direction's code.
    #[default]
    Partial,
    /// Every direction whose code is contained in the reading.
    AllMatches,
}

/// Hardware code for a disc key, zero for anything else.
pub const fn disc_code(key: Key) -> u8 {
    match key.ring_index() {
        Some(index) => DISC_CODES[index],
        None => 0,
    }
}

const fn covers(reading: u8, code: u8) -> bool {
    reading & code == code
}

/// Ring bits of every direction contained in `reading`.
const fn all_matches(reading: u8) -> u32 {
    let mut bits = 0;
    let mut index = 0;
    while index < Key::RING_SIZE {
        if covers(reading, DISC_CODES[index]) {
            bits |= 1 << index;
        }
        index += 1;
    }
    bits
}

/// Maximal elements of [`all_matches`].
const fn tightest_matches(reading: u8) -> u32 {
    let matches = all_matches(reading);
    let mut bits = 0;
    let mut index = 0;
    while index < Key::RING_SIZE {
        if matches & (1 << index) != 0 {
            let code = DISC_CODES[index];
            let mut dominated = false;
            let mut other = 0;
            while other < Key::RING_SIZE {
                let wider = DISC_CODES[other];
                if matches & (1 << other) != 0 && wider != code && covers(wider, code) {
                    dominated = true;
                }
                other += 1;
            }
            if !dominated {
                bits |= 1 << index;
            }
        }
        index += 1;
    }
    bits
}

/// With exactly one column line driven the low lines are keypad row
/// selectors, not disc contacts.
pub(crate) const fn scanning_keypad_column(register: u8) -> bool {
    (register & COLUMN_LINES).count_ones() == 1
}

/// Disc decode computed from first principles; the table module caches it.
pub(crate) const fn disc_directions(register: u8, mode: DiscMatch) -> KeySet {
    if scanning_keypad_column(register) {
        return KeySet::empty();
    }
    let reading = register & DISC_LINES;
    // Disc keys occupy KeySet bits 0-15 in ring order.
    let bits = match mode {
        DiscMatch::Partial => tightest_matches(reading),
        DiscMatch::AllMatches => all_matches(reading),
    };
    KeySet::from_bits_retain(bits)
}
