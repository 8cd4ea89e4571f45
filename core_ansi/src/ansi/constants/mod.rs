// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Centralized ANSI/VT100 escape sequence constants.
//!
//! Constants are grouped by protocol domain:
//! - **csi**: CSI introducer, final bytes for cursor movement, erase and mode commands
//! - **esc**: ESC introducer, DEC cursor save/restore, DCS and OSC introducers
//! - **sgr**: SGR parameter values for colors and graphics modes
//! - **generic**: DEC private mode numbers and legacy screen mode numbers
//!
//! ## Usage
//!
//! ```rust
//! use core_ansi::{CSI_START, SGR_RESET, ESC_START};
//!
//! assert_eq!(CSI_START, "\x1b[");
//! assert_eq!(SGR_RESET, "\x1b[0m");
//! assert_eq!(ESC_START, "\x1b");
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod esc;
mod generic;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use esc::*;
pub use generic::*;
pub use sgr::*;
