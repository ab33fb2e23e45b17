//! The version parameter table (spec.md section 6): a static, read-only
//! catalogue keyed by (version 1-40, error correction level), embedded as
//! Rust `static` data at build time rather than parsed from a CSV resource
//! at runtime, per the redesign note in spec.md section 9. This eliminates
//! file I/O and the `TableError` path from the hot path entirely.

use crate::code_ecc::CodeEcc;
use crate::version::Version;

// Row 0 of each table is an unused padding row so the version number can
// index directly; it is never read.
#[rustfmt::skip]
pub static ECC_CODEWORDS_PER_BLOCK: [[i16; 41]; 4] = [
    // Low
    [-1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    // Medium
    [-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28],
    // Quartile
    [-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
    // High
    [-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
];

#[rustfmt::skip]
pub static NUM_ERROR_CORRECTION_BLOCKS: [[i16; 41]; 4] = [
    // Low
    [-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25],
    // Medium
    [-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49],
    // Quartile
    [-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68],
    // High
    [-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81],
];

fn table_get(table: &'static [[i16; 41]; 4], ver: Version, ecl: CodeEcc) -> usize {
    table[ecl.ordinal()][usize::from(ver.value())] as usize
}

/// Number of ECC codewords per block, `C` in spec.md section 3.
pub fn ecc_codewords_per_block(ver: Version, ecl: CodeEcc) -> usize {
    table_get(&ECC_CODEWORDS_PER_BLOCK, ver, ecl)
}

/// Number of ECC blocks, `B` in spec.md section 3.
pub fn num_error_correction_blocks(ver: Version, ecl: CodeEcc) -> usize {
    table_get(&NUM_ERROR_CORRECTION_BLOCKS, ver, ecl)
}

/// Returns the ascending list of alignment pattern centre coordinates for a
/// version, per the formula in ISO/IEC 18004 Annex E (equivalent to, and
/// standing in for, a CSV `alignment` column taken as a Cartesian product
/// with itself per spec.md section 6). Empty for version 1.
pub fn alignment_pattern_positions(ver: Version) -> Vec<i32> {
    let v = i32::from(ver.value());
    if v == 1 {
        return vec![];
    }
    let size = ver.size();
    let num_align = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let mut result: Vec<i32> = (0..num_align - 1).map(|i| size - 7 - i * step).collect();
    result.push(6);
    result.reverse();
    result
}

/// Number of data+ECC modules available in the symbol, including remainder
/// bits, after subtracting all function patterns. Not necessarily a
/// multiple of 8. Range [208, 29648].
pub fn num_raw_data_modules(ver: Version) -> usize {
    let v = usize::from(ver.value());
    let mut result: usize = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    debug_assert!((208..=29648).contains(&result));
    result
}

/// Number of 8-bit data codewords (`V.binary` in spec.md, excluding ECC and
/// remainder bits) available at the given version and error correction
/// level.
pub fn num_data_codewords(ver: Version, ecl: CodeEcc) -> usize {
    num_raw_data_modules(ver) / 8
        - ecc_codewords_per_block(ver, ecl) * num_error_correction_blocks(ver, ecl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_1_has_no_alignment_patterns() {
        assert!(alignment_pattern_positions(Version::new(1)).is_empty());
    }

    #[test]
    fn version_7_has_three_alignment_centres() {
        assert_eq!(alignment_pattern_positions(Version::new(7)), vec![6, 22, 38]);
    }

    #[test]
    fn raw_data_modules_within_documented_bounds() {
        for v in 1..=40u8 {
            let n = num_raw_data_modules(Version::new(v));
            assert!((208..=29648).contains(&n));
        }
    }

    #[test]
    fn num_data_codewords_is_smaller_than_raw_modules() {
        let ver = Version::new(5);
        let raw = num_raw_data_modules(ver) / 8;
        let data = num_data_codewords(ver, CodeEcc::High);
        assert!(data < raw);
    }
}
