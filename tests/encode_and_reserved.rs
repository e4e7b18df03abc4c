use handctl::codec::{decode, encode, encode_opt, register_code, IDLE_REGISTER};
use handctl::keys::{display_string_of, parse_keys, try_display_string_of, RESERVED_PAIRS};
use handctl::reserved::GHOST_REGISTER;
use handctl::{is_reserved, HandctlError, Key, KeySet};

fn keys(tokens: &str) -> KeySet {
    parse_keys(tokens).expect("valid tokens").into_iter().collect()
}

#[test]
fn encode_literals() {
    assert_eq!(encode(keys("wsw")), 0x09);
    assert_eq!(encode(keys("1+9")), 0xA5);
    assert_eq!(encode(keys("7+3")), 0xA5);
    assert_eq!(encode(keys("bl+s+clear")), 0xE9);
}

#[test]
fn encode_idle_sentinel() {
    assert_eq!(encode(KeySet::empty()), IDLE_REGISTER);
    assert_eq!(encode_opt(None), 0xFF);
    assert_eq!(encode(keys("<none>")), 0xFF);
}

#[test]
fn single_keys_round_trip_through_the_register() {
    for key in Key::INPUTS {
        let register = encode(KeySet::of(key));
        assert_eq!(register, register_code(key));
        assert_eq!(decode(register), KeySet::of(key), "{key:?} via {register:#04x}");
    }
}

#[test]
fn disc_with_action_round_trips() {
    for disc in Key::DISC_RING {
        for action in Key::ACTION {
            let pressed = KeySet::from([disc, action]);
            assert_eq!(decode(encode(pressed)), pressed, "{pressed:?}");
        }
    }
}

#[test]
fn ghost_register_decodes_to_its_aliases() {
    assert_eq!(decode(GHOST_REGISTER), keys("n+s+top"));
    assert_eq!(encode(keys("n+s+top")), GHOST_REGISTER);
}

#[test]
fn reserved_combination_table() {
    let table = [
        ("1+9", true),
        ("3+7", true),
        ("1+3+7+9", true),
        ("1+9+top", true),
        ("3+7+n", true),
        ("1+9+s", true),
        ("1+9+n+s+top", true),
        ("1+9+br", false),
        ("1+9+bl", false),
        ("3+7+e", false),
        ("3+7+w", false),
        ("1+9+5", false),
        ("1+7", false),
        ("9", false),
        ("n+s+top", true),
        ("n+s+top+1", true),
        ("n+s", false),
        ("n+s+bl", false),
        ("<none>", false),
    ];
    for (tokens, reserved) in table {
        assert_eq!(is_reserved(&keys(tokens)), reserved, "{tokens}");
    }
}

#[test]
fn reserved_registers() {
    assert!(is_reserved(&0xA5u8));
    for register in [0x00u8, 0xFF, 0xA7, 0xC5, 0xC7, 0xE5] {
        assert!(!is_reserved(&register), "{register:#04x}");
    }
    let reserved: Vec<u8> = (0..=u8::MAX).filter(|r| is_reserved(r)).collect();
    assert_eq!(reserved, vec![GHOST_REGISTER]);
}

#[test]
fn reserved_agrees_between_register_and_decoded_keys() {
    for register in 0..=u8::MAX {
        let keys = decode(register);
        assert_eq!(
            is_reserved(&register),
            is_reserved(&keys),
            "{register:#04x} decodes to {}",
            display_string_of(keys.keys())
        );
    }
}

#[test]
fn reserved_pairs_share_one_register() {
    let [(a, b), (c, d)] = RESERVED_PAIRS;
    assert_eq!(
        encode(KeySet::from([a, b])),
        encode(KeySet::from([c, d]))
    );
}

#[test]
fn display_strings() {
    assert_eq!(display_string_of([Key::Keypad0, Key::KeypadEnter]), "0+enter");
    assert_eq!(display_string_of(Vec::<Key>::new()), "<none>");
    assert!(matches!(
        try_display_string_of(None::<Vec<Key>>),
        Err(HandctlError::InvalidArgument { .. })
    ));
}
