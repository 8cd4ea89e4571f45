// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ALT_SCREEN_BUFFER, CSI_PRIVATE_MODE_PREFIX, CSI_START, DECTCEM_SHOW_CURSOR,
            RM_RESET_MODE, SAVE_SCREEN, SM_SET_MODE};
use const_format::concatcp;
use strum_macros::{EnumCount, EnumIter};

/// DEC private mode toggles for cursor visibility and the alternate screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum PrivateMode {
    InvisibleCursor,
    VisibleCursor,
    SaveScreen,
    LoadScreen,
    EnableAlternativeBuffer,
    DisableAlternativeBuffer,
}

impl PrivateMode {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            PrivateMode::InvisibleCursor          => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, DECTCEM_SHOW_CURSOR, RM_RESET_MODE),
            PrivateMode::VisibleCursor            => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, DECTCEM_SHOW_CURSOR, SM_SET_MODE),
            PrivateMode::SaveScreen               => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, SAVE_SCREEN, SM_SET_MODE),
            PrivateMode::LoadScreen               => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, SAVE_SCREEN, RM_RESET_MODE),
            PrivateMode::EnableAlternativeBuffer  => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, ALT_SCREEN_BUFFER, SM_SET_MODE),
            PrivateMode::DisableAlternativeBuffer => concatcp!(CSI_START, CSI_PRIVATE_MODE_PREFIX, ALT_SCREEN_BUFFER, RM_RESET_MODE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(PrivateMode::InvisibleCursor, "\x1b[?25l")]
    #[test_case(PrivateMode::VisibleCursor, "\x1b[?25h")]
    #[test_case(PrivateMode::SaveScreen, "\x1b[?47h")]
    #[test_case(PrivateMode::LoadScreen, "\x1b[?47l")]
    #[test_case(PrivateMode::EnableAlternativeBuffer, "\x1b[?1049h")]
    #[test_case(PrivateMode::DisableAlternativeBuffer, "\x1b[?1049l")]
    fn sequence(mode: PrivateMode, expected: &str) {
        assert_eq!(mode.as_str(), expected);
    }
}
