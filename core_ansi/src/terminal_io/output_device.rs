// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};
use std::sync::{Arc, MutexGuard, PoisonError};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is
/// to use this macro in a separate block scope.
///
/// Usage example:
/// ```
/// use core_ansi::{lock_output_device_as_mut, OutputDevice, LockedOutputDevice};
/// let device = OutputDevice::new_stdout();
/// { // Start a new block scope to avoid deadlock.
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"Hello, world!\n");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The sink that the emitters in [`terminal_output`] write escape sequences to.
/// - It is safe to clone. Clones share the same underlying writer.
/// - Each emitted sequence is written while holding the lock, so sequences from
///   different threads sharing one device are not interleaved mid-sequence. Ordering
///   *between* threads is still up to the caller.
/// - To write to it, see [`Self::lock()`] or the [`lock_output_device_as_mut`] macro.
///
/// [`terminal_output`]: mod@crate::ansi::terminal_output
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self { Self::new_with_writer(std::io::stdout()) }

    #[must_use]
    pub fn new_stderr() -> Self { Self::new_with_writer(std::io::stderr()) }

    /// Wrap any writer, eg: a file, a socket, or a PTY controller.
    #[must_use]
    pub fn new_with_writer(writer: impl std::io::Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(writer)),
            is_mock: false,
        }
    }
}

impl OutputDevice {
    /// Locks the output device for writing. To use it, use the following code:
    ///
    /// ```
    /// use core_ansi::{OutputDevice, LockedOutputDevice};
    ///
    /// let device = OutputDevice::new_stdout();
    /// let mut_ref: LockedOutputDevice<'_> = &mut *device.lock();
    /// let _ = mut_ref.write_all(b"Hello, world!\n");
    /// ```
    ///
    /// A lock poisoned by a panicking thread is recovered, not propagated. The terminal
    /// may then hold a truncated escape sequence.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
