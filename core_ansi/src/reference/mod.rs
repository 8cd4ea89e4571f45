// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static lookup data for code that decodes terminal input. Nothing in [`crate::ansi`]
//! depends on these tables.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod ascii_codes;
mod keyboard;

// Public re-exports (flat API).
pub use ascii_codes::*;
pub use keyboard::*;
