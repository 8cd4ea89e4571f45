// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal mode numbers, used with [`CSI_PRIVATE_MODE_PREFIX`] and
//! [`CSI_SCREEN_MODE_PREFIX`].
//!
//! [`CSI_PRIVATE_MODE_PREFIX`]: super::CSI_PRIVATE_MODE_PREFIX
//! [`CSI_SCREEN_MODE_PREFIX`]: super::CSI_SCREEN_MODE_PREFIX
//!
//! - DEC private modes are toggled with `ESC [ ? n h` / `ESC [ ? n l`.
//! - Legacy (ANSI.SYS) screen modes are set with `ESC [ = n h` and reset with
//!   `ESC [ = n l`.

// DEC private modes.

/// Text Cursor Enable Mode (DECTCEM) - DEC mode 25
///
/// - When set: Cursor is visible (default)
/// - When reset: Cursor is hidden
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

/// Save / restore screen - DEC mode 47
///
/// - When set: Save the screen contents
/// - When reset: Restore the saved screen contents
pub const SAVE_SCREEN: u16 = 47;

/// Alternate Screen Buffer Mode - DEC mode 1049
///
/// - When set: Use alternate screen buffer (preserves main screen content)
/// - When reset: Use main screen buffer (default)
pub const ALT_SCREEN_BUFFER: u16 = 1049;

// Legacy screen modes.

pub const SCREEN_MODE_MONO_40X25_TEXT: u16 = 0;
pub const SCREEN_MODE_COLOR_40X25_TEXT: u16 = 1;
pub const SCREEN_MODE_MONO_80X25_TEXT: u16 = 2;
pub const SCREEN_MODE_COLOR_80X25_TEXT: u16 = 3;
pub const SCREEN_MODE_FOUR_COLOR_320X200_GRAPHICS: u16 = 4;
pub const SCREEN_MODE_MONO_320X200_GRAPHICS: u16 = 5;
pub const SCREEN_MODE_MONO_640X200_GRAPHICS: u16 = 6;
/// Line wrapping shares the screen mode prefix but is not a video mode.
pub const SCREEN_MODE_LINE_WRAPPING: u16 = 7;
pub const SCREEN_MODE_COLOR_320X200_GRAPHICS: u16 = 13;
pub const SCREEN_MODE_SIXTEEN_COLOR_640X200_GRAPHICS: u16 = 14;
pub const SCREEN_MODE_MONO_640X350_GRAPHICS: u16 = 15;
pub const SCREEN_MODE_SIXTEEN_COLOR_640X350_GRAPHICS: u16 = 16;
pub const SCREEN_MODE_MONO_640X480_GRAPHICS: u16 = 17;
pub const SCREEN_MODE_SIXTEEN_COLOR_640X480_GRAPHICS: u16 = 18;
pub const SCREEN_MODE_256_COLOR_320X200_GRAPHICS: u16 = 19;
