// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI sequence generation.
//!
//! ## Key Types
//!
//! - [`SgrCode`] - SGR (Select Graphic Rendition) codes for colors and text styling
//! - [`CsiSequence`] - parameterized CSI sequences for cursor movement and screen modes
//! - [`KeyRedefinition`] - ANSI.SYS keyboard key redefinition

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi_sequence;
mod key_redefinition;
mod sgr_code;

// Public re-exports (flat API).
pub use csi_sequence::*;
pub use key_redefinition::*;
pub use sgr_code::*;
