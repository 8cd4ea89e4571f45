// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The escape sequence vocabulary. Layers, from the bottom up:
//!
//! 1. [`constants`]: raw bytes and parameter numbers.
//! 2. catalog: closed enums that name each terminal capability and resolve to a
//!    `&'static str` sequence ([`Color`], [`GraphicsMode`], [`EraseRegion`], ...).
//! 3. generator: parameterized sequences that are rendered with [`std::fmt::Display`]
//!    ([`SgrCode`], [`CsiSequence`], [`KeyRedefinition`]).
//! 4. [`styled_text`]: wrap text in SGR sequences.
//! 5. [`terminal_output`]: write sequences to an [`OutputDevice`] immediately.
//!
//! [`Color`]: crate::Color
//! [`GraphicsMode`]: crate::GraphicsMode
//! [`EraseRegion`]: crate::EraseRegion
//! [`SgrCode`]: crate::SgrCode
//! [`CsiSequence`]: crate::CsiSequence
//! [`KeyRedefinition`]: crate::KeyRedefinition
//! [`OutputDevice`]: crate::OutputDevice

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Public modules.
pub mod constants;
pub mod styled_text;
pub mod terminal_output;

// Private modules (hide internal structure).
mod catalog;
mod generator;

// Public re-exports (flat API).
pub use catalog::*;
pub use constants::*;
pub use generator::*;
pub use styled_text::AnsiStyleExt;
