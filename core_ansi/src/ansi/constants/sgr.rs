// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) sequence constants.

use super::CSI_START;
use const_format::concatcp;

/// SGR final byte: `ESC [ ... m`
pub const SGR_END: &str = "m";

/// SGR Reset sequence. Resets all text attributes (color, bold, italic, etc.) to
/// default.
pub const SGR_RESET: &str = concatcp!(CSI_START, SGR_RESET_PARAM, SGR_END);

/// Same as [`SGR_RESET`], as bytes.
pub const SGR_RESET_BYTES: &[u8] = SGR_RESET.as_bytes();

// Attribute parameters.

pub const SGR_RESET_PARAM: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_FAINT: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_BLINK: u16 = 5;
pub const SGR_INVERSE: u16 = 7;
pub const SGR_INVISIBLE: u16 = 8;
pub const SGR_STRIKETHROUGH: u16 = 9;

// Extended color parameters.

/// Extended foreground color: `ESC [ 38 ; 2 ; r ; g ; b m`
pub const SGR_FG_EXTENDED: u16 = 38;
/// Extended background color: `ESC [ 48 ; 2 ; r ; g ; b m`
pub const SGR_BG_EXTENDED: u16 = 48;
/// Color format selector for 24-bit RGB in extended color sequences.
pub const SGR_COLOR_FORMAT_RGB: u16 = 2;
