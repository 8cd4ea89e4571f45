// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The ASCII control characters that terminals act on, with the notations used to type
//! them.
//!
//! - The C escape (eg: `\a`) works in most string literal syntaxes, but `\e` for ESC is
//!   not portable. Prefer the numeric forms ([`AsciiCode::octal`], [`AsciiCode::hex`]).
//! - The Ctrl-Key form maps the byte onto the letter 64 positions up: byte 1 is `^A`,
//!   byte 7 (BEL) is `^G`. This comes from the VT terminals.

use crate::InlineString;
use std::fmt::Write as _;

/// Marks a notation that the character does not have.
pub const ASCII_NOTATION_NONE: &str = "<none>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiCode {
    pub name: &'static str,
    pub byte: u8,
    pub c_escape: &'static str,
    pub ctrl_key: &'static str,
    pub description: &'static str,
}

impl AsciiCode {
    /// Zero padded octal, eg: `033` for ESC.
    #[must_use]
    pub fn octal(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(acc, "{:03o}", self.byte);
        acc
    }

    /// Eg: `0x1B` for ESC.
    #[must_use]
    pub fn hex(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(acc, "{:#04X}", self.byte);
        acc
    }

    #[must_use]
    pub fn as_char(&self) -> char { char::from(self.byte) }
}

#[rustfmt::skip]
pub const ASCII_CODE_TABLE: [AsciiCode; 9] = [
    AsciiCode { name: "BEL", byte: 7,   c_escape: r"\a",  ctrl_key: "^G", description: "Terminal bell" },
    AsciiCode { name: "BS",  byte: 8,   c_escape: r"\b",  ctrl_key: "^H", description: "Backspace" },
    AsciiCode { name: "HT",  byte: 9,   c_escape: r"\t",  ctrl_key: "^I", description: "Horizontal TAB" },
    AsciiCode { name: "LF",  byte: 10,  c_escape: r"\n",  ctrl_key: "^J", description: "Newline (line feed)" },
    AsciiCode { name: "VT",  byte: 11,  c_escape: r"\v",  ctrl_key: "^K", description: "Vertical TAB" },
    AsciiCode { name: "FF",  byte: 12,  c_escape: r"\f",  ctrl_key: "^L", description: "Formfeed (new page)" },
    AsciiCode { name: "CR",  byte: 13,  c_escape: r"\r",  ctrl_key: "^M", description: "Carriage return" },
    AsciiCode { name: "ESC", byte: 27,  c_escape: r"\e",  ctrl_key: "^[", description: "Escape character" },
    AsciiCode { name: "DEL", byte: 127, c_escape: ASCII_NOTATION_NONE, ctrl_key: ASCII_NOTATION_NONE, description: "Delete character" },
];

/// Look up a row by its exact name (eg: `"ESC"`).
#[must_use]
pub fn find_ascii_code(name: &str) -> Option<&'static AsciiCode> {
    ASCII_CODE_TABLE.iter().find(|code| code.name == name)
}

/// Look up a row by its byte value.
#[must_use]
pub fn find_ascii_code_by_byte(byte: u8) -> Option<&'static AsciiCode> {
    ASCII_CODE_TABLE.iter().find(|code| code.byte == byte)
}
