// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI_C1, CSI_START, DCS_C1, DCS_START, ESC_START, OSC_C1, OSC_START};
use strum_macros::{EnumCount, EnumIter};

/// The four ways an escape sequence can start.
///
/// Every sequence this crate generates uses the 7-bit form ([`Self::as_str`]). The
/// single byte C1 form is exposed for reference; many terminals treat those bytes as
/// UTF-8 continuation bytes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum SequenceIntroducer {
    /// `ESC`
    Esc,
    /// Control Sequence Introducer: `ESC [`
    Csi,
    /// Device Control String: `ESC P`
    Dcs,
    /// Operating System Command: `ESC ]`
    Osc,
}

impl SequenceIntroducer {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            SequenceIntroducer::Esc => ESC_START,
            SequenceIntroducer::Csi => CSI_START,
            SequenceIntroducer::Dcs => DCS_START,
            SequenceIntroducer::Osc => OSC_START,
        }
    }

    /// 8-bit C1 equivalent, if there is one. Plain ESC has none.
    #[must_use]
    #[rustfmt::skip]
    pub const fn c1_byte(self) -> Option<u8> {
        match self {
            SequenceIntroducer::Esc => None,
            SequenceIntroducer::Csi => Some(CSI_C1),
            SequenceIntroducer::Dcs => Some(DCS_C1),
            SequenceIntroducer::Osc => Some(OSC_C1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_introducer_starts_with_esc() {
        for it in SequenceIntroducer::iter() {
            assert!(it.as_str().starts_with('\x1b'));
        }
        assert_eq!(SequenceIntroducer::Dcs.as_str(), "\x1bP");
        assert_eq!(SequenceIntroducer::Osc.as_str(), "\x1b]");
    }

    #[test]
    fn c1_bytes() {
        assert_eq!(SequenceIntroducer::Esc.c1_byte(), None);
        assert_eq!(SequenceIntroducer::Csi.c1_byte(), Some(0x9B));
        assert_eq!(SequenceIntroducer::Dcs.c1_byte(), Some(0x90));
        assert_eq!(SequenceIntroducer::Osc.c1_byte(), Some(0x9D));
    }
}
