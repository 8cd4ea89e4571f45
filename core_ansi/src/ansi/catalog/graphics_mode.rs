// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI_START, SGR_BLINK, SGR_BOLD, SGR_END, SGR_FAINT, SGR_INVERSE,
            SGR_INVISIBLE, SGR_ITALIC, SGR_STRIKETHROUGH, SGR_UNDERLINE};
use const_format::concatcp;
use strum_macros::{EnumCount, EnumIter};

/// Text style attributes. These compose by concatenation, not as a bitmask: see
/// [`apply`](crate::ansi::styled_text::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum GraphicsMode {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Faint,
    Blinking,
    Inverse,
    Invisible,
}

/// Every [`GraphicsMode`] sequence is `ESC [ digit m`.
pub const GRAPHICS_MODE_SEQUENCE_LEN: usize = GraphicsMode::Bold.as_str().len();

impl GraphicsMode {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            GraphicsMode::Bold          => concatcp!(CSI_START, SGR_BOLD, SGR_END),
            GraphicsMode::Faint         => concatcp!(CSI_START, SGR_FAINT, SGR_END),
            GraphicsMode::Italic        => concatcp!(CSI_START, SGR_ITALIC, SGR_END),
            GraphicsMode::Underline     => concatcp!(CSI_START, SGR_UNDERLINE, SGR_END),
            GraphicsMode::Blinking      => concatcp!(CSI_START, SGR_BLINK, SGR_END),
            GraphicsMode::Inverse       => concatcp!(CSI_START, SGR_INVERSE, SGR_END),
            GraphicsMode::Invisible     => concatcp!(CSI_START, SGR_INVISIBLE, SGR_END),
            GraphicsMode::Strikethrough => concatcp!(CSI_START, SGR_STRIKETHROUGH, SGR_END),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(GraphicsMode::Bold, "\x1b[1m")]
    #[test_case(GraphicsMode::Faint, "\x1b[2m")]
    #[test_case(GraphicsMode::Italic, "\x1b[3m")]
    #[test_case(GraphicsMode::Underline, "\x1b[4m")]
    #[test_case(GraphicsMode::Blinking, "\x1b[5m")]
    #[test_case(GraphicsMode::Inverse, "\x1b[7m")]
    #[test_case(GraphicsMode::Invisible, "\x1b[8m")]
    #[test_case(GraphicsMode::Strikethrough, "\x1b[9m")]
    fn sequence(mode: GraphicsMode, expected: &str) {
        assert_eq!(mode.as_str(), expected);
    }

    #[test]
    fn unique_and_fixed_length() {
        let all: HashSet<_> = GraphicsMode::iter().map(GraphicsMode::as_str).collect();
        assert_eq!(all.len(), GraphicsMode::COUNT);
        for mode in GraphicsMode::iter() {
            assert_eq!(mode.as_str().len(), GRAPHICS_MODE_SEQUENCE_LEN);
        }
    }
}
