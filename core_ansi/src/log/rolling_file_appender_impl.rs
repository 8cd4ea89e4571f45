// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// Create a file appender that never rotates, for the given log file path. The file is
/// created (or appended to) right away.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The parent folder can't be created or accessed
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    // A bare file name has an empty parent, meaning the current folder.
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|err| {
            miette::miette!(
                "Can't create log file {} in folder {}: {err}",
                file_name.to_string_lossy(),
                parent.display()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_name_is_an_error() {
        assert!(try_create("/").is_err());
        assert!(try_create("").is_err());
    }

    #[test]
    fn creates_file() {
        let dir = std::env::temp_dir()
            .join(format!("core_ansi_appender_{}", std::process::id()));
        let file_path = dir.join("appender.log");
        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
