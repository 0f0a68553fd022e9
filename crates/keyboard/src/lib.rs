//! Keyboard handling for BitWorks.
//!
//! Terminals that report key releases let us run our own auto-repeat:
//! a held key fires once after an initial delay and then at a fixed
//! interval until it is released.

mod repeat;

pub use repeat::{is_repeatable, KeyRepeater, RepeatEvent};

use crossterm::event::{KeyCode, KeyEvent, KeyboardEnhancementFlags};

/// Kitty keyboard protocol flags pushed at startup.
///
/// Releases are only reported for keys sent as escape codes, so every key
/// (text, Enter, Tab and Backspace included) must be reported that way or a
/// tapped key would stay held forever.
pub fn enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
}

/// Unshifted character on a US layout key.
fn base_char(c: char) -> char {
    match c {
        '!' => '1',
        '@' => '2',
        '#' => '3',
        '$' => '4',
        '%' => '5',
        '^' => '6',
        '&' => '7',
        '*' => '8',
        '(' => '9',
        ')' => '0',
        '_' => '-',
        '+' => '=',
        '{' => '[',
        '}' => ']',
        '|' => '\\',
        ':' => ';',
        '"' => '\'',
        '<' => ',',
        '>' => '.',
        '?' => '/',
        '~' => '`',
        c => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Whether two key codes refer to the same physical key.
///
/// Characters compare by their unshifted form, so a release reported after
/// Shift went up (`1` for a held `!`, `a` for `A`) still ends the hold.
pub fn same_key(a: KeyCode, b: KeyCode) -> bool {
    match (a, b) {
        (KeyCode::Char(x), KeyCode::Char(y)) => base_char(x) == base_char(y),
        _ => a == b,
    }
}

/// Short human-readable name of a key, used in logs.
pub fn key_name(key: &KeyEvent) -> String {
    match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        code => format!("{:?}", code),
    }
}
