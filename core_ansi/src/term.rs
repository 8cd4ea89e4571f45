// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words winsize tcgetwinsize ENOTTY

//! Terminal geometry. [`query_window_size`] asks the kernel for the row and column count
//! of the terminal attached to stdin (fd 0), using the [`rustix`] [`tcgetwinsize`]
//! wrapper around the `TIOCGWINSZ` ioctl. The ioctl request number differs between
//! Linux and the BSDs (including macOS); [`rustix`] resolves it per target at compile
//! time.
//!
//! A failed query is always an [`Err`]. Nothing here substitutes a default size; use
//! [`query_window_size_or`] to opt into a fallback explicitly. There are no retries,
//! since a failure means fd 0 is not a terminal or there is no controlling terminal.
//!
//! [`tcgetwinsize`]: fn@rustix::termios::tcgetwinsize

#[cfg(not(unix))]
compile_error!("core_ansi only supports unix targets (the window size query uses termios)");

use rustix::{fd::AsFd, io::Errno};

pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

/// Terminal geometry in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub columns: u16,
    pub rows: u16,
}

/// 80 columns by 24 rows, the VT100 screen.
impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl std::fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Why the window size could not be read.
///
/// | Variant            | Cause                                                  |
/// | :----------------- | :----------------------------------------------------- |
/// | [`NotATerminal`]   | The fd is a pipe, regular file, or `/dev/null`         |
/// | [`QueryFailed`]    | Any other error from the ioctl (eg: `EBADF`)           |
///
/// [`NotATerminal`]: Self::NotATerminal
/// [`QueryFailed`]: Self::QueryFailed
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum WindowSizeError {
    /// The ioctl returned `ENOTTY`.
    #[error("file descriptor is not a terminal")]
    #[diagnostic(
        code(core_ansi::window_size::not_a_terminal),
        help(
            "Input is redirected from a file or pipe. \
             Use `query_window_size_or()` to fall back to a fixed size."
        )
    )]
    NotATerminal,

    #[error("terminal window size query failed: {0}")]
    #[diagnostic(code(core_ansi::window_size::query_failed))]
    QueryFailed(#[source] Errno),
}

impl From<Errno> for WindowSizeError {
    fn from(errno: Errno) -> Self {
        if errno == Errno::NOTTY {
            Self::NotATerminal
        } else {
            Self::QueryFailed(errno)
        }
    }
}

/// Query the size of the terminal attached to stdin (fd 0). This is a single blocking
/// syscall.
///
/// # Errors
///
/// Returns [`WindowSizeError::NotATerminal`] if stdin is not a terminal, and
/// [`WindowSizeError::QueryFailed`] for any other ioctl failure.
pub fn query_window_size() -> Result<TerminalSize, WindowSizeError> {
    query_window_size_of(std::io::stdin())
}

/// Same as [`query_window_size`], for any open fd (eg: stdout, or `/dev/tty`).
///
/// # Errors
///
/// See [`query_window_size`].
pub fn query_window_size_of(fd: impl AsFd) -> Result<TerminalSize, WindowSizeError> {
    match rustix::termios::tcgetwinsize(fd) {
        Ok(winsize) => {
            let size = TerminalSize {
                columns: winsize.ws_col,
                rows: winsize.ws_row,
            };
            tracing::debug!(%size, "queried terminal window size");
            Ok(size)
        }
        Err(errno) => {
            let err = WindowSizeError::from(errno);
            tracing::warn!(%err, "terminal window size query failed");
            Err(err)
        }
    }
}

/// Query the size of the terminal attached to stdin, or return `fallback` if that fails.
#[must_use]
pub fn query_window_size_or(fallback: TerminalSize) -> TerminalSize {
    query_window_size().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;

    #[test]
    fn default_size_is_80x24() {
        let size = TerminalSize::default();
        assert_eq!(size.columns, 80);
        assert_eq!(size.rows, 24);
        assert_eq!(size.to_string(), "80x24");
    }

    #[test]
    fn dev_null_is_not_a_terminal() {
        let file = File::open("/dev/null").unwrap();
        let result = query_window_size_of(&file);
        assert!(matches!(result, Err(WindowSizeError::NotATerminal)));
    }

    #[test]
    fn regular_file_is_not_a_terminal() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let file = File::open(path).unwrap();
        let result = query_window_size_of(&file);
        assert!(matches!(result, Err(WindowSizeError::NotATerminal)));
    }

    #[test]
    fn pipe_is_not_a_terminal() {
        let (reader, _writer) = std::io::pipe().unwrap();
        let result = query_window_size_of(&reader);
        assert!(matches!(result, Err(WindowSizeError::NotATerminal)));
    }

    #[test]
    fn errno_mapping() {
        assert!(matches!(
            WindowSizeError::from(Errno::NOTTY),
            WindowSizeError::NotATerminal
        ));
        assert!(matches!(
            WindowSizeError::from(Errno::BADF),
            WindowSizeError::QueryFailed(Errno::BADF)
        ));
    }

    #[test]
    fn fallback_is_used_only_on_failure() {
        let fallback = TerminalSize {
            columns: 132,
            rows: 43,
        };
        let size = query_window_size_or(fallback);
        match query_window_size() {
            Ok(real) => assert_eq!(size, real),
            Err(_) => assert_eq!(size, fallback),
        }
    }
}
