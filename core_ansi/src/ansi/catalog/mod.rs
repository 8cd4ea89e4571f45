// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The escape code catalog: closed sets of semantic terminal operations, each mapped to
//! exactly one escape sequence.
//!
//! Every selector here is an exhaustively matched enum, so there is no "unknown
//! operation" error path. Fixed sequences are available as `&'static str` (via
//! `as_str()` and friends). Parameterized ones (distances, positions, RGB values,
//! screen mode numbers) are rendered by [`SgrCode`] and [`CsiSequence`].
//!
//! | Domain           | Type                | Pattern                        |
//! | :--------------- | :------------------ | :----------------------------- |
//! | Foreground color | [`Color`]           | `ESC[{30-37,39,0}m`            |
//! | Background color | [`Color`]           | `ESC[{40-47,49,0}m`            |
//! | Graphics mode    | [`GraphicsMode`]    | `ESC[{1,2,3,4,5,7,8,9}m`       |
//! | Erase region     | [`EraseRegion`]     | `ESC[{2J,J,3J,2K,0K,1K,0J,1J}` |
//! | Cursor direction | [`CursorDirection`] | `ESC[{n}{A,B,C,D}`             |
//! | Cursor memory    | [`CursorMemoryOp`]  | `ESC7`, `ESC8`, `ESC[s`, `ESC[u` |
//! | Private mode     | [`PrivateMode`]     | `ESC[?{25,47,1049}{h,l}`       |
//! | Screen mode      | [`ScreenMode`]      | `ESC[={0-7,13-19}{h,l}`        |
//!
//! [`SgrCode`]: crate::SgrCode
//! [`CsiSequence`]: crate::CsiSequence

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod color;
mod cursor;
mod erase_region;
mod graphics_mode;
mod private_mode;
mod screen_mode;
mod sequence_introducer;

// Public re-exports (flat API).
pub use color::*;
pub use cursor::*;
pub use erase_region::*;
pub use graphics_mode::*;
pub use private_mode::*;
pub use screen_mode::*;
pub use sequence_introducer::*;
