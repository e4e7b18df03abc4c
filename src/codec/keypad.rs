//! Keypad matrix and action-button decoding.
//!
//! The keypad is a 4x3 matrix: bits 0-3 select the row, bits 5-7 the column.
//! The action buttons each bridge two of the three column lines.

use crate::codec::{COLUMN_LINES, ROW_LINES};
use crate::keys::{Key, KeySet};

const COLUMN_SHIFT: u32 = 5;

/// Keypad keys by `[column][row]`, column 0 being bit 5 and row 0 bit 0.
const KEYPAD_GRID: [[Key; 4]; 3] = [
    [Key::Keypad3, Key::Keypad6, Key::Keypad9, Key::KeypadEnter],
    [Key::Keypad2, Key::Keypad5, Key::Keypad8, Key::Keypad0],
    [Key::Keypad1, Key::Keypad4, Key::Keypad7, Key::KeypadClear],
];

/// Column lines bridged by each action button, in [`Key::ACTION`] order.
const ACTION_BRIDGES: [u8; 3] = [
    0xA0, // Top: bits 7 and 5
    0x60, // BottomLeft: bits 6 and 5
    0xC0, // BottomRight: bits 7 and 6
];

/// Row and column lines of a keypad key, zero for anything else.
pub const fn keypad_code(key: Key) -> u8 {
    let mut column = 0;
    while column < KEYPAD_GRID.len() {
        let mut row = 0;
        while row < KEYPAD_GRID[column].len() {
            if KEYPAD_GRID[column][row] as u8 == key as u8 {
                return (1u8 << row) | (1u8 << (column as u32 + COLUMN_SHIFT));
            }
            row += 1;
        }
        column += 1;
    }
    0
}

/// Bridged column lines of an action button, zero for anything else.
pub const fn action_code(key: Key) -> u8 {
    match key {
        Key::ActionKeyTop => ACTION_BRIDGES[0],
        Key::ActionKeyBottomLeft => ACTION_BRIDGES[1],
        Key::ActionKeyBottomRight => ACTION_BRIDGES[2],
        _ => 0,
    }
}

/// The keypad key selected by a one-hot row and a one-hot column, if any.
/// The fine disc line (bit 4) plays no part.
pub(crate) const fn keypad_key(register: u8) -> Option<Key> {
    let rows = register & ROW_LINES;
    let columns = (register & COLUMN_LINES) >> COLUMN_SHIFT;
    if rows.count_ones() != 1 || columns.count_ones() != 1 {
        return None;
    }
    Some(KEYPAD_GRID[columns.trailing_zeros() as usize][rows.trailing_zeros() as usize])
}

/// Action buttons bridged on the column lines: one pair gives that button,
/// all three lines give all three buttons, anything else gives none.
pub(crate) const fn action_buttons(register: u8) -> KeySet {
    let columns = register & COLUMN_LINES;
    let mut bits = 0;
    match columns.count_ones() {
        2 => {
            let mut index = 0;
            while index < ACTION_BRIDGES.len() {
                if ACTION_BRIDGES[index] == columns {
                    bits = Key::ACTION[index].bit();
                }
                index += 1;
            }
        }
        3 => {
            let mut index = 0;
            while index < Key::ACTION.len() {
                bits |= Key::ACTION[index].bit();
                index += 1;
            }
        }
        _ => {}
    }
    KeySet::from_bits_retain(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_codes() {
        let expected = [
            (Key::Keypad1, 0x81),
            (Key::Keypad2, 0x41),
            (Key::Keypad3, 0x21),
            (Key::Keypad4, 0x82),
            (Key::Keypad5, 0x42),
            (Key::Keypad6, 0x22),
            (Key::Keypad7, 0x84),
            (Key::Keypad8, 0x44),
            (Key::Keypad9, 0x24),
            (Key::KeypadClear, 0x88),
            (Key::Keypad0, 0x48),
            (Key::KeypadEnter, 0x28),
        ];
        for (key, code) in expected {
            assert_eq!(keypad_code(key), code, "{key:?}");
            assert_eq!(keypad_key(code), Some(key));
            assert_eq!(keypad_key(code | 0x10), Some(key), "fine line ignored");
        }
        assert_eq!(keypad_code(Key::DiscN), 0);
    }

    #[test]
    fn test_keypad_needs_one_hot_row_and_column() {
        assert_eq!(keypad_key(0x00), None);
        assert_eq!(keypad_key(0x80), None);
        assert_eq!(keypad_key(0x0F), None);
        assert_eq!(keypad_key(0x83), None);
        assert_eq!(keypad_key(0xA1), None);
        assert_eq!(keypad_key(0x90), None);
    }

    #[test]
    fn test_single_action_buttons() {
        assert_eq!(action_buttons(0xA0), KeySet::of(Key::ActionKeyTop));
        assert_eq!(action_buttons(0x60), KeySet::of(Key::ActionKeyBottomLeft));
        assert_eq!(action_buttons(0xC0), KeySet::of(Key::ActionKeyBottomRight));
        assert_eq!(action_buttons(0xBF), KeySet::of(Key::ActionKeyTop));
    }

    #[test]
    fn test_all_three_lines_press_every_button() {
        assert_eq!(action_buttons(0xE0), KeySet::ACTION);
        assert_eq!(action_buttons(0xFF), KeySet::ACTION);
    }

    #[test]
    fn test_one_or_no_column_line_is_no_button() {
        for register in [0x00, 0x20, 0x40, 0x80, 0x1F, 0x81] {
            assert!(action_buttons(register).is_empty(), "{register:#04x}");
        }
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(action_code(Key::ActionKeyTop), 0xA0);
        assert_eq!(action_code(Key::ActionKeyBottomLeft), 0x60);
        assert_eq!(action_code(Key::ActionKeyBottomRight), 0xC0);
        assert_eq!(action_code(Key::Keypad1), 0);
    }
}
