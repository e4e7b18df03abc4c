//! Disc sensitivity: widening a disc reading to its neighbouring compass points.

use crate::keys::{Key, KeySet};

/// How many ring steps either side of a reading also count as active.
///
/// Built from any signed integer: the sign is dropped and the magnitude is
/// capped at 7, one short of reaching the antipode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "config", serde(from = "i32", into = "i32"))]
pub struct SensitivityRadius(u8);

impl SensitivityRadius {
    pub const MAX_STEPS: u8 = 7;

    pub const fn new(radius: i32) -> Self {
        let magnitude = radius.unsigned_abs();
        if magnitude > Self::MAX_STEPS as u32 {
            Self(Self::MAX_STEPS)
        } else {
            Self(magnitude as u8)
        }
    }

    pub const fn steps(self) -> u8 {
        self.0
    }
}

impl From<i32> for SensitivityRadius {
    fn from(radius: i32) -> Self {
        Self::new(radius)
    }
}

impl From<SensitivityRadius> for i32 {
    fn from(radius: SensitivityRadius) -> Self {
        i32::from(radius.0)
    }
}

/// Disc directions within `radius` steps of any disc key in `nominal`.
///
/// Non-disc keys in `nominal` are ignored. Radius 0 gives back the disc part
/// of `nominal`; the widest radius covers every direction except the
/// antipode of a single reading.
pub fn expand(nominal: KeySet, radius: impl Into<SensitivityRadius>) -> KeySet {
    let steps = radius.into().steps() as usize;
    let mut window = KeySet::empty();
    for index in nominal.keys().filter_map(Key::ring_index) {
        // Walk from index - steps to index + steps without going negative.
        let start = index + Key::RING_SIZE - steps;
        for offset in 0..=2 * steps {
            window.insert_key(Key::from_ring_index(start + offset));
        }
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(keys: &[Key]) -> KeySet {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_radius_clamps_and_drops_sign() {
        assert_eq!(SensitivityRadius::new(0).steps(), 0);
        assert_eq!(SensitivityRadius::new(-3).steps(), 3);
        assert_eq!(SensitivityRadius::new(7).steps(), 7);
        assert_eq!(SensitivityRadius::new(-8).steps(), 7);
        assert_eq!(SensitivityRadius::new(i32::MIN).steps(), 7);
        assert_eq!(i32::from(SensitivityRadius::new(-5)), 5);
    }

    #[test]
    fn test_radius_zero_is_identity() {
        assert_eq!(expand(KeySet::of(Key::DiscS), 0), KeySet::of(Key::DiscS));
    }

    #[test]
    fn test_radius_one_wraps_around_north() {
        assert_eq!(
            expand(KeySet::of(Key::DiscN), 1),
            ring(&[Key::DiscNNW, Key::DiscN, Key::DiscNNE])
        );
    }

    #[test]
    fn test_widest_radius_skips_antipode() {
        let mut expected = KeySet::DISC;
        expected.remove_key(Key::DiscS);
        assert_eq!(expand(KeySet::of(Key::DiscN), 7), expected);
        assert_eq!(expand(KeySet::of(Key::DiscN), -7), expected);
        assert_eq!(expand(KeySet::of(Key::DiscN), 100), expected);
    }

    #[test]
    fn test_ambiguous_reading_unions_windows() {
        let nominal = ring(&[Key::DiscN, Key::DiscS]);
        assert_eq!(
            expand(nominal, 1),
            ring(&[
                Key::DiscNNW,
                Key::DiscN,
                Key::DiscNNE,
                Key::DiscSSE,
                Key::DiscS,
                Key::DiscSSW
            ])
        );
        assert_eq!(expand(nominal, 7), KeySet::DISC);
    }

    #[test]
    fn test_non_disc_keys_are_ignored() {
        let nominal = ring(&[Key::DiscE, Key::Keypad5, Key::ActionKeyTop]);
        assert_eq!(
            expand(nominal, 1),
            ring(&[Key::DiscENE, Key::DiscE, Key::DiscESE])
        );
        assert!(expand(KeySet::of(Key::KeypadEnter), 3).is_empty());
    }

    #[test]
    fn test_output_follows_ring_order() {
        let order: Vec<Key> = expand(KeySet::of(Key::DiscNNW), 2).keys().collect();
        assert_eq!(
            order,
            vec![Key::DiscN, Key::DiscNNE, Key::DiscWNW, Key::DiscNW, Key::DiscNNW]
        );
    }
}
