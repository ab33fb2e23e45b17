//! The bit stream assembler (spec.md section 4.1): mode indicator,
//! character count, payload, terminator, bit padding, and byte padding.

use crate::bit_buffer::BitBuffer;
use crate::code_ecc::CodeEcc;
use crate::error::QrError;
use crate::segment::Segment;
use crate::tables;
use crate::version::Version;

/// Assembles the raw byte payload into the pre-ECC data codeword sequence
/// for the given (version, ecl), in byte mode.
///
/// Returns [`QrError::CapacityExceeded`] if the payload does not fit the
/// binary-mode capacity of (version, ecl); this crate never auto-promotes
/// to a larger version (spec.md section 4.1: "no auto-promotion in this
/// spec").
pub fn assemble_codewords(data: &[u8], ver: Version, ecl: CodeEcc) -> Result<Vec<u8>, QrError> {
    let capacity_codewords = tables::num_data_codewords(ver, ecl);
    let capacity_bits = capacity_codewords * 8;

    let seg = Segment::make_bytes(data);
    let data_bits = 4 + usize::from(seg.mode().num_char_count_bits(ver)) + seg.data().len();
    if data_bits > capacity_bits {
        return Err(QrError::CapacityExceeded {
            data_bits,
            capacity_bits,
        });
    }

    let mut bb = BitBuffer(Vec::with_capacity(capacity_bits));
    bb.append_bits(seg.mode().mode_bits(), 4);
    bb.append_bits(
        u32::try_from(seg.num_chars()).expect("byte payload length fits u32"),
        seg.mode().num_char_count_bits(ver),
    );
    bb.0.extend_from_slice(seg.data());

    // Terminator: up to 4 zero bits, truncated if fewer remain before capacity.
    let terminator_len = std::cmp::min(4, capacity_bits - bb.0.len());
    bb.append_bits(0, terminator_len as u8);

    // Bit padding: zero bits up to the next byte boundary.
    let bit_padding_len = bb.0.len().wrapping_neg() & 7;
    bb.append_bits(0, bit_padding_len as u8);
    debug_assert_eq!(bb.0.len() % 8, 0);

    // Byte padding: alternate 0xEC, 0x11 until capacity is reached.
    for &pad_byte in [0xECu32, 0x11].iter().cycle() {
        if bb.0.len() >= capacity_bits {
            break;
        }
        bb.append_bits(pad_byte, 8);
    }

    let mut codewords = vec![0u8; bb.0.len() / 8];
    for (i, &bit) in bb.0.iter().enumerate() {
        codewords[i >> 3] |= u8::from(bit) << (7 - (i & 7));
    }
    Ok(codewords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_just_header_and_padding() {
        let codewords = assemble_codewords(&[], Version::new(1), CodeEcc::Low).unwrap();
        assert_eq!(codewords.len(), tables::num_data_codewords(Version::new(1), CodeEcc::Low));
        // mode=0100, count=00000000 -> first byte is 0x40; terminator fills
        // out the rest of the second byte with zeros.
        assert_eq!(codewords[0], 0x40);
        assert_eq!(codewords[1], 0x00);
        // byte padding starts alternating 0xEC, 0x11 from the third codeword
        assert_eq!(codewords[2], 0xEC);
        assert_eq!(codewords[3], 0x11);
    }

    #[test]
    fn payload_exactly_filling_capacity_has_no_byte_padding() {
        let ver = Version::new(1);
        let ecl = CodeEcc::Low;
        let capacity = tables::num_data_codewords(ver, ecl);
        // byte mode header is 12 bits (4 mode + 8 count) for version <= 9,
        // so the largest payload with no slack for byte padding is capacity - 2 bytes
        // (leaving exactly 4 bits for the terminator and 4 for bit padding).
        let payload = vec![0x41u8; capacity - 2];
        let codewords = assemble_codewords(&payload, ver, ecl).unwrap();
        assert_eq!(codewords.len(), capacity);
        assert!(!codewords.ends_with(&[0xEC]));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let ver = Version::new(1);
        let ecl = CodeEcc::Low;
        let capacity = tables::num_data_codewords(ver, ecl);
        let payload = vec![0u8; capacity + 1];
        assert!(matches!(
            assemble_codewords(&payload, ver, ecl),
            Err(QrError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn sixteen_bit_character_count_is_used_from_version_ten() {
        let ver = Version::new(10);
        let ecl = CodeEcc::Quartile;
        let payload = vec![0u8; 255];
        let codewords = assemble_codewords(&payload, ver, ecl).unwrap();
        // mode nibble 0100, then top 4 bits of a 16-bit count = 0000 (255 = 0x00FF)
        assert_eq!(codewords[0] >> 4, 0x4);
    }
}
