// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI_START, CUB_CURSOR_BACKWARD, CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD,
            CUU_CURSOR_UP, DECRC_RESTORE_CURSOR, DECSC_SAVE_CURSOR, ESC_START,
            SCORC_RESTORE_CURSOR, SCOSC_SAVE_CURSOR};
use const_format::concatcp;
use strum_macros::{EnumCount, EnumIter};

/// Distance used by relative cursor movement when none is given.
pub const DEFAULT_CURSOR_DISTANCE: u16 = 1;

/// Relative cursor movement direction. The distance is carried by
/// [`CsiSequence::CursorMove`](crate::CsiSequence::CursorMove).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum CursorDirection {
    Left,
    Right,
    Up,
    Down,
}

impl CursorDirection {
    /// The CSI final byte for this direction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn final_byte(self) -> &'static str {
        match self {
            CursorDirection::Up    => CUU_CURSOR_UP,
            CursorDirection::Down  => CUD_CURSOR_DOWN,
            CursorDirection::Right => CUF_CURSOR_FORWARD,
            CursorDirection::Left  => CUB_CURSOR_BACKWARD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum CursorMemoryOp {
    Save,
    Load,
}

/// Sequence family for saving and restoring the cursor.
///
/// Some terminal emulators support both, with slightly different behavior. DEC
/// (`ESC 7` / `ESC 8`) also saves attributes and is the recommended one, hence the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum CursorMemoryMode {
    #[default]
    Dec,
    Sco,
}

impl CursorMemoryOp {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self, mode: CursorMemoryMode) -> &'static str {
        match (mode, self) {
            (CursorMemoryMode::Dec, CursorMemoryOp::Save) => concatcp!(ESC_START, DECSC_SAVE_CURSOR),
            (CursorMemoryMode::Dec, CursorMemoryOp::Load) => concatcp!(ESC_START, DECRC_RESTORE_CURSOR),
            (CursorMemoryMode::Sco, CursorMemoryOp::Save) => concatcp!(CSI_START, SCOSC_SAVE_CURSOR),
            (CursorMemoryMode::Sco, CursorMemoryOp::Load) => concatcp!(CSI_START, SCORC_RESTORE_CURSOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn direction_final_bytes() {
        assert_eq!(CursorDirection::Up.final_byte(), "A");
        assert_eq!(CursorDirection::Down.final_byte(), "B");
        assert_eq!(CursorDirection::Right.final_byte(), "C");
        assert_eq!(CursorDirection::Left.final_byte(), "D");
    }

    #[test]
    fn cursor_memory_dec() {
        assert_eq!(CursorMemoryOp::Save.as_str(CursorMemoryMode::Dec), "\x1b7");
        assert_eq!(CursorMemoryOp::Load.as_str(CursorMemoryMode::Dec), "\x1b8");
    }

    #[test]
    fn cursor_memory_sco() {
        assert_eq!(CursorMemoryOp::Save.as_str(CursorMemoryMode::Sco), "\x1b[s");
        assert_eq!(CursorMemoryOp::Load.as_str(CursorMemoryMode::Sco), "\x1b[u");
    }

    #[test]
    fn default_mode_is_dec() {
        assert_eq!(CursorMemoryMode::default(), CursorMemoryMode::Dec);
    }
}
