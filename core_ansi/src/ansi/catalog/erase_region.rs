// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI_START, ED_ERASE_ALL, ED_ERASE_DISPLAY, ED_ERASE_FROM_START,
            ED_ERASE_SAVED_LINES, ED_ERASE_TO_END, EL_ERASE_ALL, EL_ERASE_FROM_START,
            EL_ERASE_LINE, EL_ERASE_TO_END};
use const_format::concatcp;
use strum_macros::{EnumCount, EnumIter};

/// Regions that can be erased with ED (`J`) and EL (`K`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum EraseRegion {
    /// Entire screen.
    Screen,
    /// Visible display, from the cursor down (ED with no parameter).
    Display,
    /// Saved lines, aka the scrollback buffer.
    SavedLines,
    /// Entire current line.
    Line,
    CursorToLineEnd,
    CursorToLineStart,
    CursorToScreenEnd,
    CursorToScreenStart,
}

impl EraseRegion {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            EraseRegion::Screen              => concatcp!(CSI_START, ED_ERASE_ALL, ED_ERASE_DISPLAY),
            EraseRegion::Display             => concatcp!(CSI_START, ED_ERASE_DISPLAY),
            EraseRegion::SavedLines          => concatcp!(CSI_START, ED_ERASE_SAVED_LINES, ED_ERASE_DISPLAY),
            EraseRegion::Line                => concatcp!(CSI_START, EL_ERASE_ALL, EL_ERASE_LINE),
            EraseRegion::CursorToLineEnd     => concatcp!(CSI_START, EL_ERASE_TO_END, EL_ERASE_LINE),
            EraseRegion::CursorToLineStart   => concatcp!(CSI_START, EL_ERASE_FROM_START, EL_ERASE_LINE),
            EraseRegion::CursorToScreenEnd   => concatcp!(CSI_START, ED_ERASE_TO_END, ED_ERASE_DISPLAY),
            EraseRegion::CursorToScreenStart => concatcp!(CSI_START, ED_ERASE_FROM_START, ED_ERASE_DISPLAY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(EraseRegion::Screen, "\x1b[2J")]
    #[test_case(EraseRegion::Display, "\x1b[J")]
    #[test_case(EraseRegion::SavedLines, "\x1b[3J")]
    #[test_case(EraseRegion::Line, "\x1b[2K")]
    #[test_case(EraseRegion::CursorToLineEnd, "\x1b[0K")]
    #[test_case(EraseRegion::CursorToLineStart, "\x1b[1K")]
    #[test_case(EraseRegion::CursorToScreenEnd, "\x1b[0J")]
    #[test_case(EraseRegion::CursorToScreenStart, "\x1b[1J")]
    fn sequence(region: EraseRegion, expected: &str) {
        assert_eq!(region.as_str(), expected);
    }
}
