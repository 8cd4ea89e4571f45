// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build styled strings: escape sequence prefix(es), then the text, then (for
//! [`apply`] only) a reset.
//!
//! There's an intentional asymmetry here:
//! - [`apply`] always appends [`SGR_RESET`], even with no modes.
//! - [`foreground_color`], [`background_color`], [`foreground_rgb`] and
//!   [`background_rgb`] do **not**. The color bleeds into whatever is printed next, until
//!   something resets it. This lets callers color adjacent spans by concatenation.
//!
//! ```rust
//! use core_ansi::{AnsiStyleExt, Color, GraphicsMode};
//!
//! let title = "Done".apply(&[GraphicsMode::Bold, GraphicsMode::Underline]);
//! assert_eq!(title, "\x1b[1m\x1b[4mDone\x1b[0m");
//!
//! let status = "ok".foreground_color(Color::Green);
//! assert_eq!(status, "\x1b[32mok");
//! ```

use crate::{Color, GRAPHICS_MODE_SEQUENCE_LEN, GraphicsMode, SGR_RESET, SgrCode};

/// Prefix `text` with each mode's sequence, in order, and append [`SGR_RESET`].
///
/// Modes are concatenated, not merged: passing the same mode twice emits its sequence
/// twice.
#[must_use]
pub fn apply(text: &str, modes: &[GraphicsMode]) -> String {
    let capacity =
        text.len() + modes.len() * GRAPHICS_MODE_SEQUENCE_LEN + SGR_RESET.len();
    let mut acc = String::with_capacity(capacity);
    for mode in modes {
        acc.push_str(mode.as_str());
    }
    acc.push_str(text);
    acc.push_str(SGR_RESET);
    acc
}

/// Prefix `text` with the foreground sequence for `color`. No reset is appended.
#[must_use]
pub fn foreground_color(text: &str, color: Color) -> String {
    prefix_with(color.fg_str(), text)
}

/// Prefix `text` with the background sequence for `color`. No reset is appended.
#[must_use]
pub fn background_color(text: &str, color: Color) -> String {
    prefix_with(color.bg_str(), text)
}

/// Caution, 24-bit color is not supported by every terminal.
///
/// Prefix `text` with `ESC[38;2;{r};{g};{b}m`. No reset is appended.
#[must_use]
pub fn foreground_rgb(text: &str, r: u8, g: u8, b: u8) -> String {
    format!("{}{text}", SgrCode::ForegroundRgb(r, g, b))
}

/// Caution, 24-bit color is not supported by every terminal.
///
/// Prefix `text` with `ESC[48;2;{r};{g};{b}m`. No reset is appended.
#[must_use]
pub fn background_rgb(text: &str, r: u8, g: u8, b: u8) -> String {
    format!("{}{text}", SgrCode::BackgroundRgb(r, g, b))
}

fn prefix_with(prefix: &str, text: &str) -> String {
    let mut acc = String::with_capacity(prefix.len() + text.len());
    acc.push_str(prefix);
    acc.push_str(text);
    acc
}

/// Method syntax for the free functions in this module, on anything that derefs to
/// [`str`].
pub trait AnsiStyleExt {
    /// See [`apply`].
    #[must_use]
    fn apply(&self, modes: &[GraphicsMode]) -> String;
    /// See [`foreground_color`].
    #[must_use]
    fn foreground_color(&self, color: Color) -> String;
    /// See [`background_color`].
    #[must_use]
    fn background_color(&self, color: Color) -> String;
    /// See [`foreground_rgb`].
    #[must_use]
    fn foreground_rgb(&self, r: u8, g: u8, b: u8) -> String;
    /// See [`background_rgb`].
    #[must_use]
    fn background_rgb(&self, r: u8, g: u8, b: u8) -> String;
}

impl AnsiStyleExt for str {
    fn apply(&self, modes: &[GraphicsMode]) -> String { apply(self, modes) }

    fn foreground_color(&self, color: Color) -> String { foreground_color(self, color) }

    fn background_color(&self, color: Color) -> String { background_color(self, color) }

    fn foreground_rgb(&self, r: u8, g: u8, b: u8) -> String {
        foreground_rgb(self, r, g, b)
    }

    fn background_rgb(&self, r: u8, g: u8, b: u8) -> String {
        background_rgb(self, r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn apply_single_mode() {
        assert_eq!(apply("hi", &[GraphicsMode::Bold]), "\x1b[1mhi\x1b[0m");
    }

    #[test]
    fn apply_preserves_order() {
        assert_eq!(
            apply("hi", &[GraphicsMode::Bold, GraphicsMode::Italic]),
            "\x1b[1m\x1b[3mhi\x1b[0m"
        );
        assert_eq!(
            apply("hi", &[GraphicsMode::Italic, GraphicsMode::Bold]),
            "\x1b[3m\x1b[1mhi\x1b[0m"
        );
    }

    #[test]
    fn apply_does_not_dedup() {
        assert_eq!(
            apply("x", &[GraphicsMode::Bold, GraphicsMode::Bold]),
            "\x1b[1m\x1b[1mx\x1b[0m"
        );
    }

    #[test]
    fn apply_with_no_modes_still_resets() {
        assert_eq!(apply("plain", &[]), "plain\x1b[0m");
    }

    #[test]
    fn apply_on_empty_text() {
        assert_eq!(apply("", &[GraphicsMode::Inverse]), "\x1b[7m\x1b[0m");
    }

    #[test]
    fn apply_capacity_hint_is_exact_for_graphics_modes() {
        let modes: Vec<_> = GraphicsMode::iter().collect();
        let styled = apply("text", &modes);
        assert_eq!(
            styled.len(),
            "text".len() + modes.len() * GRAPHICS_MODE_SEQUENCE_LEN + SGR_RESET.len()
        );
    }

    #[test]
    fn colors_have_no_trailing_reset() {
        for color in Color::iter() {
            let fg = foreground_color("abc", color);
            assert_eq!(fg, format!("{}abc", color.fg_str()));
            let bg = background_color("abc", color);
            assert_eq!(bg, format!("{}abc", color.bg_str()));
        }
    }

    #[test]
    fn foreground_and_background_digits() {
        assert_eq!(foreground_color("x", Color::Red), "\x1b[31mx");
        assert_eq!(background_color("x", Color::Red), "\x1b[41mx");
        assert_eq!(foreground_color("x", Color::Default), "\x1b[39mx");
        assert_eq!(background_color("x", Color::Default), "\x1b[49mx");
        assert_eq!(background_color("x", Color::Reset), "\x1b[0mx");
    }

    #[test]
    fn rgb_prefixes() {
        assert_eq!(foreground_rgb("x", 1, 2, 3), "\x1b[38;2;1;2;3mx");
        assert_eq!(background_rgb("x", 255, 128, 0), "\x1b[48;2;255;128;0mx");
    }

    #[test]
    fn ext_trait_matches_free_functions() {
        let text = String::from("span");
        assert_eq!(text.apply(&[GraphicsMode::Faint]), apply("span", &[GraphicsMode::Faint]));
        assert_eq!(text.foreground_color(Color::Cyan), foreground_color("span", Color::Cyan));
        assert_eq!(text.background_color(Color::Blue), background_color("span", Color::Blue));
        assert_eq!(text.foreground_rgb(9, 8, 7), foreground_rgb("span", 9, 8, 7));
        assert_eq!(text.background_rgb(9, 8, 7), background_rgb("span", 9, 8, 7));
    }

    #[test]
    fn colors_compose_with_apply() {
        let styled = "warn".foreground_color(Color::Yellow).apply(&[GraphicsMode::Bold]);
        assert_eq!(styled, "\x1b[1m\x1b[33mwarn\x1b[0m");
    }
}
