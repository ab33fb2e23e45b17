use crate::bit_buffer::BitBuffer;
use crate::segment_mode::SegmentMode;
use crate::version::Version;

/// A byte-mode segment of data in a QR Code symbol.
///
/// Instances of this struct are immutable. Byte mode is the only segment
/// mode this crate constructs (see spec.md section 1, non-goals); a
/// `Segment` always carries [`SegmentMode::Byte`].
#[derive(Clone, PartialEq, Eq)]
pub struct Segment {
    // The mode indicator of this segment. Accessed through mode().
    pub mode: SegmentMode,

    // The length of this segment's unencoded data, in bytes. Not the same
    // as the data's bit length. Accessed through num_chars().
    pub numchars: usize,

    // The data bits of this segment. Accessed through data().
    pub data: Vec<bool>,
}

impl Segment {
    /// Returns a segment representing the given binary data encoded in byte
    /// mode. All input byte slices are acceptable.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bb = BitBuffer(Vec::with_capacity(data.len() * 8));
        for &b in data {
            bb.append_bits(u32::from(b), 8);
        }
        Segment::new(SegmentMode::Byte, data.len(), bb.0)
    }

    /// Creates a new QR Code segment with the given attributes and data.
    ///
    /// The character count (numchars) must agree with the mode and
    /// the bit buffer length, but the constraint isn't checked.
    pub fn new(mode: SegmentMode, numchars: usize, data: Vec<bool>) -> Self {
        Self {
            mode,
            numchars,
            data,
        }
    }

    /// Returns the mode indicator of this segment.
    pub fn mode(&self) -> SegmentMode {
        self.mode
    }

    /// Returns the character count field of this segment.
    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    /// Returns the data bits of this segment.
    pub fn data(&self) -> &Vec<bool> {
        &self.data
    }

    /// Calculates the number of bits needed to encode the given segments at
    /// the given version: `None` if a segment's character count doesn't fit
    /// its length field, or the total overflows `usize`.
    pub fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits: u8 = seg.mode.num_char_count_bits(version);
            if let Some(limit) = 1usize.checked_shl(ccbits.into()) {
                if seg.numchars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + usize::from(ccbits))?;
            result = result.checked_add(seg.data.len())?;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_bytes_round_trips_length_and_bits() {
        let seg = Segment::make_bytes(b"HELLO");
        assert_eq!(seg.num_chars(), 5);
        assert_eq!(seg.data().len(), 5 * 8);
        assert_eq!(seg.mode(), SegmentMode::Byte);
    }

    #[test]
    fn empty_payload_has_zero_data_bits() {
        let seg = Segment::make_bytes(b"");
        assert_eq!(seg.num_chars(), 0);
        assert!(seg.data().is_empty());
    }

    #[test]
    fn get_total_bits_adds_mode_and_count_header() {
        let segs = [Segment::make_bytes(b"AB")];
        let total = Segment::get_total_bits(&segs, Version::new(1)).unwrap();
        // 4 mode bits + 8 count bits (version <= 9) + 16 data bits
        assert_eq!(total, 4 + 8 + 16);
    }
}
