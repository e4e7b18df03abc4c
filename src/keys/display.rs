//! Human-readable key strings: `"0+enter"`, `"nne+top"`, `"<none>"`.

use crate::error::{HandctlError, Result};
use crate::keys::Key;

/// Placeholder shown for an empty key collection.
pub const NONE_DISPLAY: &str = "<none>";

const SEPARATOR: &str = "+";

/// Display token of a single key; empty for markers.
pub fn display_string(key: Key) -> &'static str {
    key.display_token()
}

/// Join key tokens with `+` in the order given.
///
/// The input order is kept as-is, so `[Keypad0, KeypadEnter]` and
/// `[KeypadEnter, Keypad0]` render differently. Markers have no token and are
/// skipped. A collection with nothing to show renders as `<none>`.
pub fn display_string_of<I>(keys: I) -> String
where
    I: IntoIterator<Item = Key>,
{
    let tokens: Vec<&str> = keys
        .into_iter()
        .map(Key::display_token)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return NONE_DISPLAY.to_string();
    }
    tokens.join(SEPARATOR)
}

/// Like [`display_string_of`], but for a collection that may be missing.
///
/// # Errors
/// * `InvalidArgument` when `keys` is `None`
pub fn try_display_string_of<I>(keys: Option<I>) -> Result<String>
where
    I: IntoIterator<Item = Key>,
{
    keys.map(display_string_of)
        .ok_or_else(|| HandctlError::invalid_argument("key collection is missing"))
}

/// Parse a `+`-joined token string back into keys, keeping their order.
///
/// `<none>` and the empty string parse to an empty list.
///
/// # Errors
/// * `UnknownKey` naming the first token that is not a key
pub fn parse_keys(text: &str) -> Result<Vec<Key>> {
    let text = text.trim();
    if text.is_empty() || text == NONE_DISPLAY {
        return Ok(Vec::new());
    }
    let keys = text
        .split(SEPARATOR)
        .map(str::parse::<Key>)
        .collect::<Result<Vec<_>>>()?;
    log::trace!("parsed {:?} from {:?}", keys, text);
    Ok(keys)
}
