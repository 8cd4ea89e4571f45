// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use crate::{Color, GraphicsMode, CSI_PARAM_SEPARATOR, CSI_START, SGR_BG_EXTENDED,
            SGR_COLOR_FORMAT_RGB, SGR_END, SGR_FG_EXTENDED, SGR_RESET};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Foreground(Color),
    Background(Color),
    Graphics(GraphicsMode),
    /// Not universally supported. Terminals without truecolor either approximate the
    /// color or ignore the sequence.
    ForegroundRgb(u8, u8, u8),
    /// Not universally supported, see [`SgrCode::ForegroundRgb`].
    BackgroundRgb(u8, u8, u8),
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        const SEP: &str = CSI_PARAM_SEPARATOR;
        match *self {
            SgrCode::Reset                  => f.write_str(SGR_RESET),
            SgrCode::Foreground(color)      => f.write_str(color.fg_str()),
            SgrCode::Background(color)      => f.write_str(color.bg_str()),
            SgrCode::Graphics(mode)         => f.write_str(mode.as_str()),
            SgrCode::ForegroundRgb(r, g, b) => write!(
                f, "{CSI_START}{SGR_FG_EXTENDED}{SEP}{SGR_COLOR_FORMAT_RGB}{SEP}{r}{SEP}{g}{SEP}{b}{SGR_END}"
            ),
            SgrCode::BackgroundRgb(r, g, b) => write!(
                f, "{CSI_START}{SGR_BG_EXTENDED}{SEP}{SGR_COLOR_FORMAT_RGB}{SEP}{r}{SEP}{g}{SEP}{b}{SGR_END}"
            ),
        }
    }
}
