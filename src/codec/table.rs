//! Decode tables for all 256 register values, built at compile time.

use crate::codec::compass::{disc_directions, DiscMatch};
use crate::codec::keypad::{action_buttons, keypad_key};
use crate::keys::KeySet;

const REGISTER_VALUES: usize = 256;

type Table = [KeySet; REGISTER_VALUES];

const fn build_disc(mode: DiscMatch) -> Table {
    let mut table = [KeySet::empty(); REGISTER_VALUES];
    let mut register = 0;
    while register < REGISTER_VALUES {
        table[register] = disc_directions(register as u8, mode);
        register += 1;
    }
    table
}

const fn build_keypad() -> Table {
    let mut table = [KeySet::empty(); REGISTER_VALUES];
    let mut register = 0;
    while register < REGISTER_VALUES {
        if let Some(key) = keypad_key(register as u8) {
            table[register] = KeySet::of(key);
        }
        register += 1;
    }
    table
}

const fn build_action() -> Table {
    let mut table = [KeySet::empty(); REGISTER_VALUES];
    let mut register = 0;
    while register < REGISTER_VALUES {
        table[register] = action_buttons(register as u8);
        register += 1;
    }
    table
}

const fn build_decode() -> Table {
    let mut table = [KeySet::empty(); REGISTER_VALUES];
    let mut register = 0;
    while register < REGISTER_VALUES {
        let byte = register as u8;
        let mut keys = disc_directions(byte, DiscMatch::Partial).union(action_buttons(byte));
        if let Some(key) = keypad_key(byte) {
            keys = keys.union(KeySet::of(key));
        }
        table[register] = keys;
        register += 1;
    }
    table
}

pub(crate) static DISC_PARTIAL: Table = build_disc(DiscMatch::Partial);
pub(crate) static DISC_ALL_MATCHES: Table = build_disc(DiscMatch::AllMatches);
pub(crate) static KEYPAD: Table = build_keypad();
pub(crate) static ACTION: Table = build_action();
pub(crate) static DECODE: Table = build_decode();
