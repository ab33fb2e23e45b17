use crate::version::Version;

/// Describes how a segment's data bits are interpreted.
///
/// Numeric, alphanumeric, Kanji, and ECI modes are out of scope for this
/// encoder (see spec.md section 1, non-goals); byte mode is the only mode
/// this crate constructs, so this enum carries a single variant rather than
/// branches that [`crate::Segment::make_bytes`] can never reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    Byte,
}

impl SegmentMode {
    /// Returns the 4-bit mode indicator for this mode.
    pub fn mode_bits(self) -> u32 {
        match self {
            SegmentMode::Byte => 0x4,
        }
    }

    /// Returns the bit width of the character count field for a segment in
    /// this mode at the given version: 8 bits for version <= 9, 16 bits for
    /// version >= 10.
    pub fn num_char_count_bits(self, ver: Version) -> u8 {
        match self {
            SegmentMode::Byte => {
                if ver.value() <= 9 {
                    8
                } else {
                    16
                }
            }
        }
    }
}
