//! Register codec: one scan byte to a [`KeySet`] and back.
//!
//! Decoding is a lookup into tables built at compile time, so every function
//! here is total, allocation-free and safe to call from any thread. Encoding
//! ORs together the hardware lines of every key present.
//!
//! The two directions are not inverses. Several registers decode to the same
//! keys (matrix ghosting), and a partial key set may encode to a register that
//! decodes to more keys than were given.

pub mod compass;
pub mod keypad;
mod table;

pub use compass::{disc_code, DiscMatch, DISC_CODES};
pub use keypad::{action_code, keypad_code};

use crate::config::CodecConfig;
use crate::error::{HandctlError, Result};
use crate::keys::{Key, KeySet};
use crate::reserved::is_reserved;
use crate::sensitivity::expand;

/// Disc contact lines, doubling as keypad row selectors.
pub const ROW_LINES: u8 = 0x0F;
/// Fine-position disc line.
pub const FINE_LINE: u8 = 0x10;
/// All five disc lines.
pub const DISC_LINES: u8 = ROW_LINES | FINE_LINE;
/// Keypad column selectors, bridged in pairs by the action buttons.
pub const COLUMN_LINES: u8 = 0xE0;
/// Register value with every line released; the encoding of no input.
pub const IDLE_REGISTER: u8 = 0xFF;

/// Decode a register into every key it reports, using [`DiscMatch::Partial`]
/// for the disc.
pub fn decode(register: u8) -> KeySet {
    table::DECODE[register as usize]
}

/// Decode with a chosen disc match mode.
pub fn decode_with(register: u8, mode: DiscMatch) -> KeySet {
    decode_disc(register, mode) | decode_keypad(register) | decode_action(register)
}

/// Disc directions only.
pub fn decode_disc(register: u8, mode: DiscMatch) -> KeySet {
    match mode {
        DiscMatch::Partial => table::DISC_PARTIAL[register as usize],
        DiscMatch::AllMatches => table::DISC_ALL_MATCHES[register as usize],
    }
}

/// The keypad key, as an empty or single-key set.
pub fn decode_keypad(register: u8) -> KeySet {
    table::KEYPAD[register as usize]
}

/// The keypad key, if exactly one row and one column are driven.
pub fn decode_keypad_key(register: u8) -> Option<Key> {
    decode_keypad(register).keys().next()
}

/// Action buttons only.
pub fn decode_action(register: u8) -> KeySet {
    table::ACTION[register as usize]
}

/// Hardware lines driven by one key. Markers drive nothing.
pub const fn register_code(key: Key) -> u8 {
    disc_code(key) | keypad_code(key) | action_code(key)
}

/// Encode keys into the register they would produce together.
///
/// Keys of different families combine freely. An empty set encodes as
/// [`IDLE_REGISTER`].
pub fn encode(keys: KeySet) -> u8 {
    if keys.is_empty() {
        return IDLE_REGISTER;
    }
    keys.keys().fold(0, |register, key| register | register_code(key))
}

/// [`encode`] for a key set that may be missing; `None` is idle.
pub fn encode_opt(keys: Option<KeySet>) -> u8 {
    keys.map_or(IDLE_REGISTER, encode)
}

/// Parse a register literal: decimal, `0x` hexadecimal or `0b` binary.
///
/// # Errors
/// * `InvalidRegister` when the text is not a number in `0..=255`
pub fn parse_register(text: &str) -> Result<u8> {
    let text = text.trim();
    let lower = text.to_ascii_lowercase();
    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(binary) = lower.strip_prefix("0b") {
        (binary, 2)
    } else {
        (lower.as_str(), 10)
    };
    u8::from_str_radix(digits, radix)
        .map_err(|e| HandctlError::invalid_register(format!("{text:?}: {e}")))
}

/// Everything one register value reports under a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub register: u8,
    /// Keys decoded with the configured disc match mode.
    pub keys: KeySet,
    /// Disc directions widened by the configured sensitivity radius.
    pub disc_window: KeySet,
    /// Whether the register is the keypad ghost value.
    pub reserved: bool,
}

impl Reading {
    pub fn new(register: u8, config: &CodecConfig) -> Self {
        let keys = decode_with(register, config.disc_mode);
        let reading = Self {
            register,
            keys,
            disc_window: expand(keys, config.sensitivity),
            reserved: is_reserved(&register),
        };
        log::trace!("register {:#04x} -> {:?}", register, reading);
        reading
    }
}
