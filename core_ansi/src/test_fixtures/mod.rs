// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for testing code that writes to an [`OutputDevice`]. These are public so
//! that downstream crates can assert on the exact bytes they emit.
//!
//! [`OutputDevice`]: crate::OutputDevice

// Attach.
pub mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
