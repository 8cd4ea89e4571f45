// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains the constant values used in CSI (Control Sequence Introducer)
//! sequences, organized by functional category.

// CSI sequence components.

/// CSI sequence start: ESC [
pub const CSI_START: &str = "\x1b[";

/// 8-bit C1 form of CSI. Only meaningful on terminals that accept 8-bit controls.
pub const CSI_C1: u8 = 0x9B;

/// Private mode prefix for CSI sequences: `ESC [ ?`
pub const CSI_PRIVATE_MODE_PREFIX: &str = "?";

/// Screen mode prefix for CSI sequences: `ESC [ =`
pub const CSI_SCREEN_MODE_PREFIX: &str = "=";

/// Parameter separator in CSI sequences (semicolon)
///
/// - `ESC[1;5H` - Cursor position (row 1, column 5)
/// - `ESC[38;2;255;0;0m` - RGB foreground
pub const CSI_PARAM_SEPARATOR: &str = ";";

// Cursor Movement.

/// CSI A: Cursor Up (CUU)
/// Moves cursor up by n lines (default 1)
pub const CUU_CURSOR_UP: &str = "A";

/// CSI B: Cursor Down (CUD)
/// Moves cursor down by n lines (default 1)
pub const CUD_CURSOR_DOWN: &str = "B";

/// CSI C: Cursor Forward/Right (CUF)
/// Moves cursor forward by n columns (default 1)
pub const CUF_CURSOR_FORWARD: &str = "C";

/// CSI D: Cursor Backward/Left (CUB)
/// Moves cursor backward by n columns (default 1)
pub const CUB_CURSOR_BACKWARD: &str = "D";

/// CSI E: Cursor Next Line (CNL)
/// Moves cursor to beginning of line n lines down (default 1)
pub const CNL_CURSOR_NEXT_LINE: &str = "E";

/// CSI F: Cursor Previous Line (CPL)
/// Moves cursor to beginning of line n lines up (default 1)
pub const CPL_CURSOR_PREV_LINE: &str = "F";

/// CSI G: Cursor Horizontal Absolute (CHA)
/// Moves cursor to column n
pub const CHA_CURSOR_COLUMN: &str = "G";

/// CSI H: Cursor Position (CUP)
/// Moves cursor to row n, column m. With no parameters, moves to home.
pub const CUP_CURSOR_POSITION: &str = "H";

/// CSI s: Save cursor position (SCO)
pub const SCOSC_SAVE_CURSOR: &str = "s";

/// CSI u: Restore cursor position (SCO)
pub const SCORC_RESTORE_CURSOR: &str = "u";

// Erasing.

/// CSI J: Erase in Display (ED)
/// 0 = erase from cursor to end of screen (default)
/// 1 = erase from start of screen to cursor
/// 2 = erase entire screen
/// 3 = erase saved lines (scrollback)
pub const ED_ERASE_DISPLAY: &str = "J";

/// CSI K: Erase in Line (EL)
/// 0 = erase from cursor to end of line (default)
/// 1 = erase from start of line to cursor
/// 2 = erase entire line
pub const EL_ERASE_LINE: &str = "K";

// Erase Display Parameters (ED).

/// Erase from cursor to end of screen (default for ED)
pub const ED_ERASE_TO_END: u16 = 0;

/// Erase from start of screen to cursor
pub const ED_ERASE_FROM_START: u16 = 1;

/// Erase entire screen
pub const ED_ERASE_ALL: u16 = 2;

/// Erase saved lines (scrollback buffer)
pub const ED_ERASE_SAVED_LINES: u16 = 3;

// Erase Line Parameters (EL).

/// Erase from cursor to end of line (default for EL)
pub const EL_ERASE_TO_END: u16 = 0;

/// Erase from start of line to cursor
pub const EL_ERASE_FROM_START: u16 = 1;

/// Erase entire line
pub const EL_ERASE_ALL: u16 = 2;

// Modes.

/// CSI h: Set Mode (SM), and DECSET when used with the private mode prefix
pub const SM_SET_MODE: &str = "h";

/// CSI l: Reset Mode (RM), and DECRST when used with the private mode prefix
pub const RM_RESET_MODE: &str = "l";

// Keyboard.

/// CSI p: Redefine a keyboard key (ANSI.SYS)
/// `ESC [ code ; string p`
pub const KEY_REDEFINE: &str = "p";
