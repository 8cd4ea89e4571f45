// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Direct-effect terminal operations: each function resolves its argument to an escape
//! sequence and writes it to the given [`OutputDevice`] right away, then flushes.
//!
//! There is no return value and no read back. If the write fails (eg: the other end of
//! a pipe went away) the failure is reported as a [`tracing::warn!`] event and the call
//! returns normally; the terminal state is then unknown, exactly as it would be if the
//! terminal had ignored the sequence.
//!
//! Each sequence is written with a single `write_all` while the device is locked, so
//! two threads sharing a device never split each other's sequences. Keeping the overall
//! order meaningful across threads is up to the caller.

use crate::{CsiSequence, CursorDirection, CursorMemoryMode, CursorMemoryOp,
            DEFAULT_CURSOR_DISTANCE, EraseRegion, InlineString, KeyRedefinition,
            OutputDevice, PrivateMode, ScreenMode, lock_output_device_as_mut};
use std::{fmt::{Debug, Display, Write as _},
          io::Write as _};

/// Move the cursor relative to its current position. `distance` defaults to
/// [`DEFAULT_CURSOR_DISTANCE`].
pub fn move_cursor(
    output_device: &OutputDevice,
    direction: CursorDirection,
    distance: Option<u16>,
) {
    let distance = distance.unwrap_or(DEFAULT_CURSOR_DISTANCE);
    write_sequence(
        output_device,
        "move_cursor",
        CsiSequence::CursorMove {
            direction,
            distance,
        },
    );
}

/// Save or restore the cursor position. `mode` defaults to [`CursorMemoryMode::Dec`].
pub fn cursor_memory(
    output_device: &OutputDevice,
    operation: CursorMemoryOp,
    mode: Option<CursorMemoryMode>,
) {
    let mode = mode.unwrap_or_default();
    write_sequence(output_device, "cursor_memory", operation.as_str(mode));
}

/// Move the cursor to the top left corner (`ESC[H`).
pub fn reset_cursor(output_device: &OutputDevice) {
    write_sequence(output_device, "reset_cursor", CsiSequence::CursorHome);
}

/// Move the cursor to `line` (y) and `column` (x). Both are 1-based and are not
/// bounds checked.
pub fn move_cursor_to(output_device: &OutputDevice, line: u16, column: u16) {
    write_sequence(
        output_device,
        "move_cursor_to",
        CsiSequence::CursorPosition { line, column },
    );
}

/// Move the cursor to the start of the line `by` lines down (default 1).
pub fn move_cursor_to_next_line(output_device: &OutputDevice, by: Option<u16>) {
    let by = by.unwrap_or(DEFAULT_CURSOR_DISTANCE);
    write_sequence(
        output_device,
        "move_cursor_to_next_line",
        CsiSequence::CursorNextLine(by),
    );
}

/// Move the cursor to the start of the line `by` lines up (default 1).
pub fn move_cursor_to_previous_line(output_device: &OutputDevice, by: Option<u16>) {
    let by = by.unwrap_or(DEFAULT_CURSOR_DISTANCE);
    write_sequence(
        output_device,
        "move_cursor_to_previous_line",
        CsiSequence::CursorPrevLine(by),
    );
}

/// Move the cursor to `column` (1-based) on the current line.
pub fn move_cursor_to_column(output_device: &OutputDevice, column: u16) {
    write_sequence(
        output_device,
        "move_cursor_to_column",
        CsiSequence::CursorColumn(column),
    );
}

pub fn set_screen_mode(output_device: &OutputDevice, mode: ScreenMode) {
    write_sequence(output_device, "set_screen_mode", CsiSequence::SetScreenMode(mode));
}

pub fn reset_screen_mode(output_device: &OutputDevice, mode: ScreenMode) {
    write_sequence(
        output_device,
        "reset_screen_mode",
        CsiSequence::ResetScreenMode(mode),
    );
}

pub fn erase(output_device: &OutputDevice, region: EraseRegion) {
    write_sequence(output_device, "erase", region.as_str());
}

pub fn private_mode(output_device: &OutputDevice, mode: PrivateMode) {
    write_sequence(output_device, "private_mode", mode.as_str());
}

/// See [`KeyRedefinition`].
pub fn redefine_key(output_device: &OutputDevice, redefinition: KeyRedefinition<'_>) {
    write_sequence(output_device, "redefine_key", redefinition);
}

/// Render `sequence` into a stack buffer, then write it in one go and flush.
fn write_sequence(
    output_device: &OutputDevice,
    operation: &'static str,
    sequence: impl Display + Debug,
) {
    let mut acc = InlineString::new();
    // Writing to an in-memory string only fails if `Display` itself fails.
    if let Err(err) = write!(acc, "{sequence}") {
        tracing::warn!(operation, ?sequence, %err, "failed to render escape sequence");
        return;
    }

    let result = {
        let out = lock_output_device_as_mut!(output_device);
        out.write_all(acc.as_bytes()).and_then(|()| out.flush())
    };

    match result {
        Ok(()) => tracing::trace!(operation, ?sequence, "emitted escape sequence"),
        Err(err) => {
            tracing::warn!(operation, ?sequence, %err, "failed to write escape sequence");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyRedefinitionValue, OutputDeviceExt};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case(CursorDirection::Up, "A")]
    #[test_case(CursorDirection::Down, "B")]
    #[test_case(CursorDirection::Right, "C")]
    #[test_case(CursorDirection::Left, "D")]
    fn move_cursor_defaults_to_one(direction: CursorDirection, final_byte: &str) {
        let (device, mock) = OutputDevice::new_mock();
        move_cursor(&device, direction, None);
        assert_eq!(mock.get_copy_of_buffer_as_string(), format!("\x1b[1{final_byte}"));
    }

    #[test_case(CursorDirection::Up, "A")]
    #[test_case(CursorDirection::Down, "B")]
    #[test_case(CursorDirection::Right, "C")]
    #[test_case(CursorDirection::Left, "D")]
    fn move_cursor_with_distance(direction: CursorDirection, final_byte: &str) {
        let (device, mock) = OutputDevice::new_mock();
        move_cursor(&device, direction, Some(5));
        assert_eq!(mock.get_copy_of_buffer_as_string(), format!("\x1b[5{final_byte}"));
    }

    #[test]
    fn cursor_memory_default_mode_is_dec() {
        for operation in CursorMemoryOp::iter() {
            let (device_default, mock_default) = OutputDevice::new_mock();
            let (device_dec, mock_dec) = OutputDevice::new_mock();
            cursor_memory(&device_default, operation, None);
            cursor_memory(&device_dec, operation, Some(CursorMemoryMode::Dec));
            assert_eq!(
                mock_default.get_copy_of_buffer_as_string(),
                mock_dec.get_copy_of_buffer_as_string()
            );
        }
    }

    #[test]
    fn cursor_memory_sequences() {
        let (device, mock) = OutputDevice::new_mock();
        cursor_memory(&device, CursorMemoryOp::Save, None);
        cursor_memory(&device, CursorMemoryOp::Load, None);
        cursor_memory(&device, CursorMemoryOp::Save, Some(CursorMemoryMode::Sco));
        cursor_memory(&device, CursorMemoryOp::Load, Some(CursorMemoryMode::Sco));
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b7\x1b8\x1b[s\x1b[u");
    }

    #[test]
    fn absolute_positioning() {
        let (device, mock) = OutputDevice::new_mock();
        reset_cursor(&device);
        move_cursor_to(&device, 3, 14);
        move_cursor_to_column(&device, 80);
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[H\x1b[3;14H\x1b[80G");
    }

    #[test]
    fn line_movement_defaults_to_one() {
        let (device, mock) = OutputDevice::new_mock();
        move_cursor_to_next_line(&device, None);
        move_cursor_to_previous_line(&device, None);
        move_cursor_to_next_line(&device, Some(4));
        move_cursor_to_previous_line(&device, Some(2));
        assert_eq!(
            mock.get_copy_of_buffer_as_string(),
            "\x1b[1E\x1b[1F\x1b[4E\x1b[2F"
        );
    }

    #[test]
    fn erase_writes_catalog_sequence_without_newline() {
        for region in EraseRegion::iter() {
            let (device, mock) = OutputDevice::new_mock();
            erase(&device, region);
            assert_eq!(mock.get_copy_of_buffer_as_string(), region.as_str());
        }
    }

    #[test]
    fn private_mode_writes_catalog_sequence() {
        for mode in PrivateMode::iter() {
            let (device, mock) = OutputDevice::new_mock();
            private_mode(&device, mode);
            assert_eq!(mock.get_copy_of_buffer_as_string(), mode.as_str());
        }
    }

    #[test]
    fn screen_mode_set_and_reset() {
        let (device, mock) = OutputDevice::new_mock();
        set_screen_mode(&device, ScreenMode::Color80x25Text);
        reset_screen_mode(&device, ScreenMode::EnableLineWrapping);
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[=3h\x1b[=7l");
    }

    #[test]
    fn redefine_key_writes_sequence() {
        let (device, mock) = OutputDevice::new_mock();
        let redefinition =
            KeyRedefinition::new("0;59", KeyRedefinitionValue::Text("help")).unwrap();
        redefine_key(&device, redefinition);
        assert_eq!(mock.get_copy_of_buffer_as_string(), "\x1b[0;59;\"help\"p");
    }

    #[test]
    fn emitters_produce_no_visible_text() {
        let (device, mock) = OutputDevice::new_mock();
        erase(&device, EraseRegion::Screen);
        reset_cursor(&device);
        private_mode(&device, PrivateMode::InvisibleCursor);
        assert_eq!(mock.get_copy_of_buffer_as_string_strip_ansi(), "");
    }

    #[test]
    fn write_failure_does_not_panic() {
        struct BrokenPipe;
        impl std::io::Write for BrokenPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
        }

        let device = OutputDevice::new_with_writer(BrokenPipe);
        erase(&device, EraseRegion::Line);
        move_cursor(&device, CursorDirection::Up, Some(2));
    }
}
