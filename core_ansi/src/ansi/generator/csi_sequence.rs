// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parameterized CSI (Control Sequence Introducer) sequences.
//!
//! Numeric parameters are written verbatim. No bounds checking is done: the terminal
//! clamps out of range values however it sees fit.

use crate::{CursorDirection, ScreenMode, CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE,
            CPL_CURSOR_PREV_LINE, CSI_PARAM_SEPARATOR, CSI_SCREEN_MODE_PREFIX, CSI_START,
            CUP_CURSOR_POSITION, RM_RESET_MODE, SM_SET_MODE};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// `ESC [ n {A,B,C,D}`
    CursorMove {
        direction: CursorDirection,
        distance: u16,
    },
    /// `ESC [ line ; column H`, 1-based.
    CursorPosition { line: u16, column: u16 },
    /// `ESC [ H`
    CursorHome,
    /// `ESC [ n E`
    CursorNextLine(u16),
    /// `ESC [ n F`
    CursorPrevLine(u16),
    /// `ESC [ n G`, 1-based.
    CursorColumn(u16),
    /// `ESC [ = n h`
    SetScreenMode(ScreenMode),
    /// `ESC [ = n l`
    ResetScreenMode(ScreenMode),
}

impl Display for CsiSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            CsiSequence::CursorMove { direction, distance } => {
                write!(f, "{CSI_START}{distance}{}", direction.final_byte())
            }
            CsiSequence::CursorPosition { line, column } => {
                write!(f, "{CSI_START}{line}{CSI_PARAM_SEPARATOR}{column}{CUP_CURSOR_POSITION}")
            }
            CsiSequence::CursorHome      => write!(f, "{CSI_START}{CUP_CURSOR_POSITION}"),
            CsiSequence::CursorNextLine(n) => write!(f, "{CSI_START}{n}{CNL_CURSOR_NEXT_LINE}"),
            CsiSequence::CursorPrevLine(n) => write!(f, "{CSI_START}{n}{CPL_CURSOR_PREV_LINE}"),
            CsiSequence::CursorColumn(n)   => write!(f, "{CSI_START}{n}{CHA_CURSOR_COLUMN}"),
            CsiSequence::SetScreenMode(mode) => write!(
                f, "{CSI_START}{CSI_SCREEN_MODE_PREFIX}{}{SM_SET_MODE}", mode.mode_number()
            ),
            CsiSequence::ResetScreenMode(mode) => write!(
                f, "{CSI_START}{CSI_SCREEN_MODE_PREFIX}{}{RM_RESET_MODE}", mode.mode_number()
            ),
        }
    }
}
