//! Key script parsing.
//!
//! A key script is one line of text standing in for a sequence of key
//! presses. Literal characters are typed as-is; named keys are written in
//! angle brackets:
//!
//! | token      | event                |
//! |------------|----------------------|
//! | `<tab>`    | `KeyEvent::Tab`      |
//! | `<enter>`  | `KeyEvent::Enter`    |
//! | `<bs>`     | `KeyEvent::Backspace`|
//! | `<left>`   | `KeyEvent::Left`     |
//! | `<right>`  | `KeyEvent::Right`    |
//! | `<esc>`    | `KeyEvent::Escape`   |
//! | `<resize>` | `KeyEvent::Resize`   |
//!
//! `<<` types a literal `<`.

use anyhow::{bail, Result};
use typeahead_core::{InputSession, KeyEvent, KeyResult};

/// Parse a key script into events.
///
/// ```
/// use typeahead::parse_key_script;
/// use typeahead_core::{InputSession, KeyEvent, KeyResult};
///
/// let keys = parse_key_script("a b<tab>").unwrap();
/// assert_eq!(
///     keys,
///     vec![KeyEvent::Char('a'), KeyEvent::Space, KeyEvent::Char('b'), KeyEvent::Tab]
/// );
/// ```
pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>> {
    let mut events = Vec::with_capacity(script.len());
    let mut chars = script.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        match ch {
            ' ' => events.push(KeyEvent::Space),
            '<' => {
                if let Some((_, '<')) = chars.peek() {
                    chars.next();
                    events.push(KeyEvent::Char('<'));
                    continue;
                }
                let rest = &script[start + 1..];
                let Some(end) = rest.find('>') else {
                    bail!("unterminated key token at column {}", start + 1);
                };
                let name = &rest[..end];
                events.push(named_key(name)?);
                // skip the token body and the closing '>'
                for _ in 0..name.chars().count() + 1 {
                    chars.next();
                }
            }
            other => events.push(KeyEvent::Char(other)),
        }
    }

    Ok(events)
}

/// Feed `keys` to `session` in order, stopping at the first key that ends it.
pub fn feed_keys(session: &mut InputSession, keys: &[KeyEvent]) -> KeyResult {
    for &key in keys {
        if !session.handle(key).should_continue() {
            return KeyResult::Exit;
        }
    }
    KeyResult::Continue
}

fn named_key(name: &str) -> Result<KeyEvent> {
    let key = match name.to_ascii_lowercase().as_str() {
        "tab" => KeyEvent::Tab,
        "enter" => KeyEvent::Enter,
        "bs" => KeyEvent::Backspace,
        "left" => KeyEvent::Left,
        "right" => KeyEvent::Right,
        "esc" => KeyEvent::Escape,
        "resize" => KeyEvent::Resize,
        _ => bail!("unknown key token <{}>", name),
    };
    Ok(key)
}
