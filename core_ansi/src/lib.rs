// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words winsize tcgetwinsize DECSC DECRC

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # core_ansi
//!
//! A complete, typed vocabulary of ANSI / VT escape sequences, plus a safe query for
//! the size of the terminal window. It is meant to sit underneath a TUI framework, so
//! that nothing above it has to hand encode control codes.
//!
//! Every terminal capability is a variant of a closed enum, so there is no "unknown
//! operation" error to handle: if it compiles, the sequence exists.
//!
//! | Layer                 | What it does                                          | Entry points                                         |
//! | :-------------------- | :---------------------------------------------------- | :--------------------------------------------------- |
//! | Catalog               | Name a capability, get its exact bytes                | [`Color`], [`GraphicsMode`], [`EraseRegion`], ...    |
//! | Generators            | Sequences with numeric parameters                     | [`SgrCode`], [`CsiSequence`], [`KeyRedefinition`]    |
//! | Styled text           | Wrap text in SGR sequences                            | [`AnsiStyleExt`], [`mod@styled_text`]                |
//! | Emitters              | Write a sequence to the terminal now                  | [`mod@terminal_output`], [`OutputDevice`]            |
//! | Geometry              | Rows and columns of the terminal on fd 0              | [`query_window_size()`], [`TerminalSize`]            |
//! | Reference tables      | ASCII control codes, ANSI.SYS keyboard scan codes     | [`ASCII_CODE_TABLE`], [`KEYBOARD_TABLE`]             |
//!
//! ## Example
//!
//! ```
//! use core_ansi::{AnsiStyleExt, Color, GraphicsMode, OutputDevice, OutputDeviceExt,
//!                 PrivateMode, terminal_output};
//!
//! let text = "hello".apply(&[GraphicsMode::Bold, GraphicsMode::Underline]);
//! assert_eq!(text, "\x1b[1m\x1b[4mhello\x1b[0m");
//! assert_eq!("hi".foreground_color(Color::Red), "\x1b[31mhi");
//!
//! let (device, mock) = OutputDevice::new_mock();
//! terminal_output::private_mode(&device, PrivateMode::InvisibleCursor);
//! terminal_output::move_cursor_to(&device, 1, 1);
//! assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[?25l\x1b[1;1H");
//! ```
//!
//! ## Logging
//!
//! This crate emits [`tracing`] events but never installs a subscriber. See
//! [`TracingConfig`] to set one up.
//!
//! ## Platform support
//!
//! Unix only (Linux, macOS, the BSDs). The window size query uses termios, and the build
//! fails on other targets.
//!
//! [`mod@styled_text`]: crate::ansi::styled_text
//! [`mod@terminal_output`]: crate::ansi::terminal_output

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod ansi;
pub mod log;
pub mod reference;
pub mod term;
pub mod terminal_io;
pub mod test_fixtures;

mod stack_alloc_types;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use ansi::*;
pub use log::*;
pub use reference::*;
pub use stack_alloc_types::*;
pub use term::*;
pub use terminal_io::*;
pub use test_fixtures::*;
