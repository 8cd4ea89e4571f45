// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Direct ESC (Escape) sequence constants for terminal control.
//!
//! ESC sequences are simple, non-parameterized terminal control codes that predate
//! the more advanced CSI sequences.

/// The ESC control character that starts every sequence in this crate.
pub const ESC_START: &str = "\x1b";

/// The ESC control character as a byte.
pub const ESC_BYTE: u8 = 0x1B;

// Cursor Save/Restore Operations

/// ESC 7 (DECSC): Save cursor position and attributes
pub const DECSC_SAVE_CURSOR: &str = "7";

/// ESC 8 (DECRC): Restore cursor position and attributes
pub const DECRC_RESTORE_CURSOR: &str = "8";

// String introducers.

/// ESC P (DCS): Device Control String
pub const DCS_START: &str = "\x1bP";

/// 8-bit C1 form of DCS.
pub const DCS_C1: u8 = 0x90;

/// ESC ] (OSC): Operating System Command
pub const OSC_START: &str = "\x1b]";

/// 8-bit C1 form of OSC.
pub const OSC_C1: u8 = 0x9D;
