// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use crate::{CSI_START, SGR_END, SGR_RESET};
use const_format::concatcp;
use strum_macros::{EnumCount, EnumIter};

/// The 8 named colors, the terminal's default color, and reset.
///
/// The same variant is used for both channels. [`Color::fg_str`] and
/// [`Color::bg_str`] map it to disjoint code families (`3x` and `4x`), except for
/// [`Color::Reset`] which is the global `ESC[0m` on both channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
    Reset,
}

impl Color {
    /// Foreground sequence for this color.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fg_str(self) -> &'static str {
        match self {
            Color::Black   => concatcp!(CSI_START, "30", SGR_END),
            Color::Red     => concatcp!(CSI_START, "31", SGR_END),
            Color::Green   => concatcp!(CSI_START, "32", SGR_END),
            Color::Yellow  => concatcp!(CSI_START, "33", SGR_END),
            Color::Blue    => concatcp!(CSI_START, "34", SGR_END),
            Color::Magenta => concatcp!(CSI_START, "35", SGR_END),
            Color::Cyan    => concatcp!(CSI_START, "36", SGR_END),
            Color::White   => concatcp!(CSI_START, "37", SGR_END),
            Color::Default => concatcp!(CSI_START, "39", SGR_END),
            Color::Reset   => SGR_RESET,
        }
    }

    /// Background sequence for this color.
    #[must_use]
    #[rustfmt::skip]
    pub const fn bg_str(self) -> &'static str {
        match self {
            Color::Black   => concatcp!(CSI_START, "40", SGR_END),
            Color::Red     => concatcp!(CSI_START, "41", SGR_END),
            Color::Green   => concatcp!(CSI_START, "42", SGR_END),
            Color::Yellow  => concatcp!(CSI_START, "43", SGR_END),
            Color::Blue    => concatcp!(CSI_START, "44", SGR_END),
            Color::Magenta => concatcp!(CSI_START, "45", SGR_END),
            Color::Cyan    => concatcp!(CSI_START, "46", SGR_END),
            Color::White   => concatcp!(CSI_START, "47", SGR_END),
            Color::Default => concatcp!(CSI_START, "49", SGR_END),
            Color::Reset   => SGR_RESET,
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

    #[test_case(Color::Black, '0')]
    #[test_case(Color::Red, '1')]
    #[test_case(Color::Green, '2')]
    #[test_case(Color::Yellow, '3')]
    #[test_case(Color::Blue, '4')]
    #[test_case(Color::Magenta, '5')]
    #[test_case(Color::Cyan, '6')]
    #[test_case(Color::White, '7')]
    #[test_case(Color::Default, '9')]
    fn named_colors_use_3x_and_4x(color: Color, digit: char) {
        assert_eq!(color.fg_str(), format!("\x1b[3{digit}m"));
        assert_eq!(color.bg_str(), format!("\x1b[4{digit}m"));
    }

    #[test]
    fn reset_is_the_global_reset_on_both_channels() {
        assert_eq!(Color::Reset.fg_str(), "\x1b[0m");
        assert_eq!(Color::Reset.bg_str(), "\x1b[0m");
    }

    #[test]
    fn every_variant_maps_to_a_unique_sequence_per_channel() {
        let fg: HashSet<_> = Color::iter().map(Color::fg_str).collect();
        let bg: HashSet<_> = Color::iter().map(Color::bg_str).collect();
        assert_eq!(fg.len(), Color::COUNT);
        assert_eq!(bg.len(), Color::COUNT);
    }

    #[test]
    fn channels_are_disjoint_except_reset() {
        for fg_color in Color::iter().filter(|it| *it != Color::Reset) {
            for bg_color in Color::iter() {
                assert_ne!(fg_color.fg_str(), bg_color.bg_str());
            }
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        for color in Color::iter() {
            assert_eq!(color.fg_str(), color.fg_str());
            assert_eq!(color.bg_str(), color.bg_str());
        }
    }
}
