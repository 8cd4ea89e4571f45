// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI.SYS keyboard strings: `ESC [ code ; string p` redefines a key to produce the
//! given string.
//!
//! `code` is one of the scan code strings in [`KEYBOARD_TABLE`] (eg: `0;59` for F1),
//! and `string` is either the ASCII code of a single character (eg: `65`) or text in
//! double quotes (eg: `"dir"`). Most modern terminal emulators ignore this sequence.
//!
//! [`KEYBOARD_TABLE`]: crate::KEYBOARD_TABLE

use crate::{CSI_PARAM_SEPARATOR, CSI_START, KEY_REDEFINE};
use std::fmt::{Display, Formatter, Result};

/// What the redefined key should produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyRedefinitionValue<'a> {
    AsciiCode(u8),
    Text(&'a str),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyRedefinition<'a> {
    key_code: &'a str,
    value: KeyRedefinitionValue<'a>,
}

impl<'a> KeyRedefinition<'a> {
    /// Returns [`None`] if `key_code` is empty (the keyboard table uses an empty string
    /// for "no code defined"), or if the text contains a `"`, which would terminate the
    /// quoted string early.
    #[must_use]
    pub fn new(key_code: &'a str, value: KeyRedefinitionValue<'a>) -> Option<Self> {
        if key_code.is_empty() {
            return None;
        }
        if let KeyRedefinitionValue::Text(text) = value
            && text.contains('"')
        {
            return None;
        }
        Some(Self { key_code, value })
    }

    #[must_use]
    pub fn key_code(&self) -> &'a str { self.key_code }

    #[must_use]
    pub fn value(&self) -> KeyRedefinitionValue<'a> { self.value }
}

impl Display for KeyRedefinition<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let code = self.key_code;
        match self.value {
            KeyRedefinitionValue::AsciiCode(ascii) => write!(
                f,
                "{CSI_START}{code}{CSI_PARAM_SEPARATOR}{ascii}{KEY_REDEFINE}"
            ),
            KeyRedefinitionValue::Text(text) => write!(
                f,
                "{CSI_START}{code}{CSI_PARAM_SEPARATOR}\"{text}\"{KEY_REDEFINE}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ascii_code_value() {
        let it = KeyRedefinition::new("0;59", KeyRedefinitionValue::AsciiCode(65)).unwrap();
        assert_eq!(it.to_string(), "\x1b[0;59;65p");
    }

    #[test]
    fn text_value_is_quoted() {
        let it = KeyRedefinition::new("0;68", KeyRedefinitionValue::Text("dir")).unwrap();
        assert_eq!(it.to_string(), "\x1b[0;68;\"dir\"p");
    }

    #[test]
    fn empty_key_code_is_rejected() {
        assert!(KeyRedefinition::new("", KeyRedefinitionValue::AsciiCode(65)).is_none());
    }

    #[test]
    fn embedded_quote_is_rejected() {
        let value = KeyRedefinitionValue::Text("say \"hi\"");
        assert!(KeyRedefinition::new("0;59", value).is_none());
    }
}
