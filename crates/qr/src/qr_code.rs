use crate::assembler::assemble_codewords;
use crate::bit_buffer::get_bit;
use crate::code_ecc::CodeEcc;
use crate::error::QrError;
use crate::finder_penalty::FinderPenalty;
use crate::image_view::ImageView;
use crate::interleave::add_ecc_and_interleave;
use crate::mask::Mask;
use crate::tables;
use crate::version::Version;
use crate::zigzag::ZigZagWalker;

// For use in penalty_score(), when evaluating which mask is best.
const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// A QR Code symbol: an immutable square grid of dark and light modules,
/// built per spec.md sections 2 and 4.4.
///
/// Construct one with [`QrCode::encode`] (the Surface API in spec.md
/// section 4.5). The version, error correction level, and mask are fixed
/// by the caller; this encoder never auto-promotes the version or
/// auto-selects a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    size: i32,
    ecl: CodeEcc,
    mask: Mask,
    // false = light, true = dark. Immutable once encode() returns.
    modules: Vec<bool>,
    // Function-pattern / format-info / version-info reservation, per the
    // partition invariant in spec.md section 3. Cleared after construction.
    is_function: Vec<bool>,
}

impl QrCode {
    /// Encodes `data` as a QR Code at the given version, error correction
    /// level, and mask (spec.md section 4.5).
    ///
    /// Fails with [`QrError::UnsupportedVersion`], [`QrError::InvalidMask`],
    /// or [`QrError::CapacityExceeded`] before any matrix is built; a failed
    /// call never leaves behind partial state (spec.md section 7).
    pub fn encode(data: &[u8], version: u8, ecl: CodeEcc, mask: u8) -> Result<Self, QrError> {
        let ver = Version::try_new(version)?;
        let msk = Mask::try_new(mask)?;
        let data_codewords = assemble_codewords(data, ver, ecl)?;
        Ok(Self::encode_codewords(ver, ecl, &data_codewords, msk))
    }

    /// Low-level constructor: takes already-assembled data codewords
    /// (spec.md section 4.1's output) and drives ECC, interleaving, and
    /// matrix composition directly. Panics if `data_codewords.len()` does
    /// not match `ver`/`ecl`'s data capacity; callers that went through
    /// [`QrCode::encode`] always satisfy this.
    pub fn encode_codewords(ver: Version, ecl: CodeEcc, data_codewords: &[u8], mask: Mask) -> Self {
        let size = ver.size();
        let mut qr = Self {
            version: ver,
            size,
            ecl,
            mask,
            modules: vec![false; (size * size) as usize],
            is_function: vec![false; (size * size) as usize],
        };

        qr.draw_function_patterns();
        let all_codewords = add_ecc_and_interleave(ver, ecl, data_codewords);
        qr.draw_codewords(&all_codewords);
        qr.apply_mask(mask);
        qr.draw_format_bits(mask);

        qr.is_function.clear();
        qr.is_function.shrink_to_fit();
        qr
    }

    /*---- Accessors ----*/

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn error_correction_level(&self) -> CodeEcc {
        self.ecl
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at (x, y): `true` for dark, `false`
    /// for light. Out-of-bounds coordinates return light.
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y) && self.module(x, y)
    }

    /// Returns a dependency-free bitmap view of this symbol, satisfying the
    /// "image view" half of the Surface API (spec.md section 4.5).
    pub fn to_image_view(&self) -> ImageView<'_> {
        ImageView::new(self.size, &self.modules)
    }

    fn module(&self, x: i32, y: i32) -> bool {
        self.modules[(y * self.size + x) as usize]
    }

    fn module_mut(&mut self, x: i32, y: i32) -> &mut bool {
        &mut self.modules[(y * self.size + x) as usize]
    }

    /*---- Function patterns (spec.md section 4.4.1) ----*/

    fn draw_function_patterns(&mut self) {
        let size = self.size;

        // Timing patterns: row 6 and column 6, alternating dark/light.
        for i in 0..size {
            self.set_function_module(6, i, i % 2 == 0);
            self.set_function_module(i, 6, i % 2 == 0);
        }

        // Finder patterns (with separators) at the three corners.
        self.draw_finder_pattern(3, 3);
        self.draw_finder_pattern(size - 4, 3);
        self.draw_finder_pattern(3, size - 4);

        // Alignment patterns, skipping any footprint overlapping an
        // already-reserved region (this naturally excludes the finder
        // corners without special-casing them).
        let positions = tables::alignment_pattern_positions(self.version);
        for &r in &positions {
            for &c in &positions {
                if self.alignment_footprint_is_free(r, c) {
                    self.draw_alignment_pattern(r, c);
                }
            }
        }

        // Reserve format-info cells (dummy mask; overwritten by draw_format_bits).
        self.draw_format_bits(Mask::M0);
        // Reserve and draw version-info, if applicable.
        self.draw_version();
    }

    fn alignment_footprint_is_free(&self, center_row: i32, center_col: i32) -> bool {
        for dr in -2..=2 {
            for dc in -2..=2 {
                let r = center_row + dr;
                let c = center_col + dc;
                if (0..self.size).contains(&r)
                    && (0..self.size).contains(&c)
                    && self.is_function[(r * self.size + c) as usize]
                {
                    return false;
                }
            }
        }
        true
    }

    // Draws a 9x9 finder pattern (7x7 core plus one-module light separator)
    // centered at (x, y). Coordinates outside the grid are skipped, so this
    // can be called with a center near the edge.
    fn draw_finder_pattern(&mut self, x: i32, y: i32) {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let xx = x + dx;
                let yy = y + dy;
                if (0..self.size).contains(&xx) && (0..self.size).contains(&yy) {
                    let dist = dx.abs().max(dy.abs());
                    self.set_function_module(xx, yy, dist != 2 && dist != 4);
                }
            }
        }
    }

    // Draws a 5x5 alignment pattern centered at (x, y). All modules must be
    // in bounds (callers check via alignment_footprint_is_free).
    fn draw_alignment_pattern(&mut self, x: i32, y: i32) {
        for dy in -2..=2 {
            for dx in -2..=2 {
                self.set_function_module(x + dx, y + dy, dx.abs().max(dy.abs()) != 1);
            }
        }
    }

    fn set_function_module(&mut self, x: i32, y: i32, is_dark: bool) {
        *self.module_mut(x, y) = is_dark;
        self.is_function[(y * self.size + x) as usize] = true;
    }

    /*---- Format and version information (spec.md sections 4.4.4-4.4.5) ----*/

    // Draws both redundant copies of the 15-bit BCH(15,5) format information
    // for the given mask and this symbol's error correction level, including
    // the always-dark module at (8, size - 8).
    fn draw_format_bits(&mut self, mask: Mask) {
        let bits: u32 = {
            let data = u32::from(self.ecl.format_bits() << 3 | mask.value());
            let mut rem = data;
            for _ in 0..10 {
                rem = (rem << 1) ^ ((rem >> 9) * 0x537);
            }
            (data << 10 | rem) ^ 0x5412
        };
        debug_assert_eq!(bits >> 15, 0);

        // Copy A.
        for i in 0..6 {
            self.set_function_module(8, i, get_bit(bits, i));
        }
        self.set_function_module(8, 7, get_bit(bits, 6));
        self.set_function_module(8, 8, get_bit(bits, 7));
        self.set_function_module(7, 8, get_bit(bits, 8));
        for i in 9..15 {
            self.set_function_module(14 - i, 8, get_bit(bits, i));
        }

        // Copy B.
        let size = self.size;
        for i in 0..8 {
            self.set_function_module(size - 1 - i, 8, get_bit(bits, i));
        }
        for i in 8..15 {
            self.set_function_module(8, size - 15 + i, get_bit(bits, i));
        }
        self.set_function_module(8, size - 8, true); // the dark module
    }

    // Draws both 18-bit BCH(18,6) version-info blocks, for version >= 7.
    fn draw_version(&mut self) {
        if self.version.value() < 7 {
            return;
        }
        let bits: u32 = {
            let data = u32::from(self.version.value());
            let mut rem = data;
            for _ in 0..12 {
                rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
            }
            data << 12 | rem
        };
        debug_assert_eq!(bits >> 18, 0);

        for i in 0..18 {
            let bit = get_bit(bits, i);
            let a = self.size - 11 + i % 3;
            let b = i / 3;
            self.set_function_module(a, b, bit);
            self.set_function_module(b, a, bit);
        }
    }

    /*---- Data placement (spec.md section 4.4.2) ----*/

    fn draw_codewords(&mut self, data: &[u8]) {
        let mut bit_index = 0usize;
        for (row, col) in ZigZagWalker::new(self.size) {
            if bit_index >= data.len() * 8 {
                break;
            }
            if self.is_function[(row * self.size + col) as usize] {
                continue;
            }
            let byte = data[bit_index >> 3];
            *self.module_mut(col, row) = get_bit(u32::from(byte), 7 - (bit_index as i32 & 7));
            bit_index += 1;
            // Remainder bits (0-7), if any, are simply never written: those
            // cells stay at their initial light/false value.
        }
        debug_assert_eq!(bit_index, data.len() * 8);
    }

    /*---- Masking (spec.md section 4.4.3) ----*/

    fn apply_mask(&mut self, mask: Mask) {
        for y in 0..self.size {
            for x in 0..self.size {
                let idx = (y * self.size + x) as usize;
                if !self.is_function[idx] && mask.invert(y, x) {
                    self.modules[idx] ^= true;
                }
            }
        }
    }

    /*---- Optional penalty scoring (spec.md section 4.4.3: "MAY") ----*/

    /// Computes the ISO/IEC 18004 penalty score for this symbol's current
    /// module matrix. Not used by [`QrCode::encode`], which always honors
    /// the caller's explicit mask; exposed for callers that want to
    /// evaluate all eight masks themselves and pick the lowest score.
    pub fn penalty_score(&self) -> i32 {
        let mut result = 0i32;
        let size = self.size;

        for y in 0..size {
            let mut run_color = false;
            let mut run_x = 0i32;
            let mut history = FinderPenalty::new(size);
            for x in 0..size {
                if self.module(x, y) == run_color {
                    run_x += 1;
                    if run_x == 5 {
                        result += PENALTY_N1;
                    } else if run_x > 5 {
                        result += 1;
                    }
                } else {
                    history.add_history(run_x);
                    if !run_color {
                        result += history.count_patterns() * PENALTY_N3;
                    }
                    run_color = self.module(x, y);
                    run_x = 1;
                }
            }
            result += history.terminate_and_count(run_color, run_x) * PENALTY_N3;
        }

        for x in 0..size {
            let mut run_color = false;
            let mut run_y = 0i32;
            let mut history = FinderPenalty::new(size);
            for y in 0..size {
                if self.module(x, y) == run_color {
                    run_y += 1;
                    if run_y == 5 {
                        result += PENALTY_N1;
                    } else if run_y > 5 {
                        result += 1;
                    }
                } else {
                    history.add_history(run_y);
                    if !run_color {
                        result += history.count_patterns() * PENALTY_N3;
                    }
                    run_color = self.module(x, y);
                    run_y = 1;
                }
            }
            result += history.terminate_and_count(run_color, run_y) * PENALTY_N3;
        }

        for y in 0..size - 1 {
            for x in 0..size - 1 {
                let color = self.module(x, y);
                if color == self.module(x + 1, y)
                    && color == self.module(x, y + 1)
                    && color == self.module(x + 1, y + 1)
                {
                    result += PENALTY_N2;
                }
            }
        }

        let dark: i32 = self.modules.iter().copied().map(i32::from).sum();
        let total = size * size;
        let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
        result += k * PENALTY_N4;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(data: &[u8], version: u8, ecl: CodeEcc, mask: u8) -> QrCode {
        QrCode::encode(data, version, ecl, mask).unwrap()
    }

    #[test]
    fn version_2_matches_expected_dimension() {
        let qr = encode(b"github.com/nohehf/qrpy", 2, CodeEcc::Low, 0);
        assert_eq!(qr.size(), 25);
    }

    #[test]
    fn version_1_matches_expected_dimension() {
        let qr = encode(b"HELLO", 1, CodeEcc::High, 3);
        assert_eq!(qr.size(), 21);
    }

    #[test]
    fn version_7_draws_version_info_blocks() {
        let data = vec![b'x'; 100];
        let qr = encode(&data, 7, CodeEcc::Medium, 5);
        assert_eq!(qr.size(), 45);
        // Version info occupies a 6x3 block; at least one module in it
        // must be dark for a nonzero version number's BCH code.
        let any_dark = (0..6).any(|r| (0..3).any(|c| qr.get_module(c, r)));
        assert!(any_dark);
    }

    #[test]
    fn version_40_completes_full_pipeline() {
        let data = vec![0u8; 100];
        let qr = encode(&data, 40, CodeEcc::Low, 2);
        assert_eq!(qr.size(), 177);
    }

    #[test]
    fn version_10_handles_sixteen_bit_character_count() {
        let data = vec![0u8; 255];
        let qr = encode(&data, 10, CodeEcc::Quartile, 2);
        assert_eq!(qr.size(), 57);
    }

    #[test]
    fn oversized_payload_is_capacity_exceeded() {
        let capacity = tables::num_data_codewords(Version::new(1), CodeEcc::Low);
        let data = vec![0u8; capacity + 1];
        let err = QrCode::encode(&data, 1, CodeEcc::Low, 0).unwrap_err();
        assert!(matches!(err, QrError::CapacityExceeded { .. }));
    }

    #[test]
    fn invalid_mask_is_rejected() {
        let err = QrCode::encode(b"A", 1, CodeEcc::Low, 8).unwrap_err();
        assert!(matches!(err, QrError::InvalidMask(8)));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let err = QrCode::encode(b"A", 41, CodeEcc::Low, 0).unwrap_err();
        assert!(matches!(err, QrError::UnsupportedVersion(41)));
    }

    #[test]
    fn finder_and_timing_patterns_are_payload_independent() {
        let a = encode(b"short", 3, CodeEcc::Medium, 1);
        let b = encode(b"a completely different and longer payload", 3, CodeEcc::Medium, 1);
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(a.get_module(x, y), b.get_module(x, y));
            }
        }
        for i in 8..(a.size() - 8) {
            assert_eq!(a.get_module(6, i), b.get_module(6, i));
            assert_eq!(a.get_module(i, 6), b.get_module(i, 6));
        }
    }

    #[test]
    fn format_info_copies_agree_and_decode_to_chosen_ecl_and_mask() {
        let qr = encode(b"format check", 5, CodeEcc::Quartile, 6);
        let size = qr.size();
        let copy_a_coords = [
            (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (7, 8), (8, 8), (8, 7), (8, 5), (8, 4),
            (8, 3), (8, 2), (8, 1), (8, 0),
        ];
        let copy_b_coords: Vec<(i32, i32)> = (0..7)
            .map(|i| (8, size - 1 - i))
            .chain((0..8).map(|i| (size - 8 + i, 8)))
            .collect();

        let read = |coords: &[(i32, i32)]| -> u32 {
            let mut bits = 0u32;
            for (i, &(x, y)) in coords.iter().enumerate() {
                if qr.get_module(x, y) {
                    bits |= 1 << i;
                }
            }
            bits
        };

        let a = read(&copy_a_coords);
        let b = read(&copy_b_coords);
        assert_eq!(a, b);

        let unmasked = a ^ 0x5412;
        let ecl_bits = (unmasked >> 13) & 0b11;
        let mask_bits = (unmasked >> 10) & 0b111;
        assert_eq!(ecl_bits, u32::from(CodeEcc::Quartile.format_bits()));
        assert_eq!(mask_bits, 6);
    }
}
