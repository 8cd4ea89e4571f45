// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Legacy (ANSI.SYS) screen modes: `ESC [ = n h` to set, `ESC [ = n l` to reset.
//!
//! More info:
//! - <https://gist.github.com/fnky/458719343aabd01cfb17a3a4f7296797#screen-modes>

use crate::{SCREEN_MODE_256_COLOR_320X200_GRAPHICS, SCREEN_MODE_COLOR_320X200_GRAPHICS,
            SCREEN_MODE_COLOR_40X25_TEXT, SCREEN_MODE_COLOR_80X25_TEXT,
            SCREEN_MODE_FOUR_COLOR_320X200_GRAPHICS, SCREEN_MODE_LINE_WRAPPING,
            SCREEN_MODE_MONO_320X200_GRAPHICS, SCREEN_MODE_MONO_40X25_TEXT,
            SCREEN_MODE_MONO_640X200_GRAPHICS, SCREEN_MODE_MONO_640X350_GRAPHICS,
            SCREEN_MODE_MONO_640X480_GRAPHICS, SCREEN_MODE_MONO_80X25_TEXT,
            SCREEN_MODE_SIXTEEN_COLOR_640X200_GRAPHICS,
            SCREEN_MODE_SIXTEEN_COLOR_640X350_GRAPHICS,
            SCREEN_MODE_SIXTEEN_COLOR_640X480_GRAPHICS};
use strum_macros::{EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ScreenMode {
    Mono40x25Text,
    Color40x25Text,
    Mono80x25Text,
    Color80x25Text,
    FourColor320x200Graphics,
    Mono320x200Graphics,
    Mono640x200Graphics,
    Color320x200Graphics,
    SixteenColor640x200Graphics,
    Mono640x350Graphics,
    SixteenColor640x350Graphics,
    Mono640x480Graphics,
    SixteenColor640x480Graphics,
    Color320x200Graphics256,
    /// Not a video mode. It shares the `=` prefix and lives here for compatibility;
    /// it belongs with the line discipline modes and may move there in a future
    /// major version.
    EnableLineWrapping,
}

impl ScreenMode {
    /// The `n` in `ESC [ = n h`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mode_number(self) -> u16 {
        match self {
            ScreenMode::Mono40x25Text               => SCREEN_MODE_MONO_40X25_TEXT,
            ScreenMode::Color40x25Text              => SCREEN_MODE_COLOR_40X25_TEXT,
            ScreenMode::Mono80x25Text               => SCREEN_MODE_MONO_80X25_TEXT,
            ScreenMode::Color80x25Text              => SCREEN_MODE_COLOR_80X25_TEXT,
            ScreenMode::FourColor320x200Graphics    => SCREEN_MODE_FOUR_COLOR_320X200_GRAPHICS,
            ScreenMode::Mono320x200Graphics         => SCREEN_MODE_MONO_320X200_GRAPHICS,
            ScreenMode::Mono640x200Graphics         => SCREEN_MODE_MONO_640X200_GRAPHICS,
            ScreenMode::EnableLineWrapping          => SCREEN_MODE_LINE_WRAPPING,
            ScreenMode::Color320x200Graphics        => SCREEN_MODE_COLOR_320X200_GRAPHICS,
            ScreenMode::SixteenColor640x200Graphics => SCREEN_MODE_SIXTEEN_COLOR_640X200_GRAPHICS,
            ScreenMode::Mono640x350Graphics         => SCREEN_MODE_MONO_640X350_GRAPHICS,
            ScreenMode::SixteenColor640x350Graphics => SCREEN_MODE_SIXTEEN_COLOR_640X350_GRAPHICS,
            ScreenMode::Mono640x480Graphics         => SCREEN_MODE_MONO_640X480_GRAPHICS,
            ScreenMode::SixteenColor640x480Graphics => SCREEN_MODE_SIXTEEN_COLOR_640X480_GRAPHICS,
            ScreenMode::Color320x200Graphics256     => SCREEN_MODE_256_COLOR_320X200_GRAPHICS,
        }
    }

    /// `false` only for [`ScreenMode::EnableLineWrapping`].
    #[must_use]
    pub const fn is_video_mode(self) -> bool {
        !matches!(self, ScreenMode::EnableLineWrapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn mode_numbers_are_unique() {
        let numbers: HashSet<_> = ScreenMode::iter().map(ScreenMode::mode_number).collect();
        assert_eq!(numbers.len(), ScreenMode::COUNT);
    }

    #[test]
    fn mode_numbers_are_in_legacy_range() {
        for mode in ScreenMode::iter() {
            assert!(mode.mode_number() <= 19, "{mode:?}");
        }
    }

    #[test]
    fn line_wrapping_is_not_a_video_mode() {
        assert_eq!(ScreenMode::EnableLineWrapping.mode_number(), 7);
        assert!(!ScreenMode::EnableLineWrapping.is_video_mode());
        assert_eq!(ScreenMode::iter().filter(|it| it.is_video_mode()).count(), 14);
    }
}
