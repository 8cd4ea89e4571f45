// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these sizes. Smaller static allocations are better than
//! larger ones: anything that doesn't fit is [`smallvec::SmallVec::spilled`] on the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Fits every fixed sequence in the catalog, and parameterized ones like
/// `ESC[65535;65535H` or `ESC[38;2;255;255;255m`.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// Stack allocated string storage for escape sequences.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub const INLINE_VEC_SIZE: usize = 256;

/// Stack allocated byte storage, used to capture output in tests.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
