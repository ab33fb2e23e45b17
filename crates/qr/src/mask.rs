use crate::error::QrError;

/// One of the eight QR Code mask patterns, as a tagged enumeration rather
/// than a dynamic dispatch table (spec.md section 9: "re-architect as a
/// tagged enumeration `Mask in {M0..M7}` with a pure function
/// `apply(Mask, row, col) -> bool`, enabling exhaustive case analysis and
/// compile-time dispatch").
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Mask {
    M0,
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M7,
}

impl Mask {
    const ALL: [Mask; 8] = [
        Mask::M0,
        Mask::M1,
        Mask::M2,
        Mask::M3,
        Mask::M4,
        Mask::M5,
        Mask::M6,
        Mask::M7,
    ];

    /// Creates a mask from its index in [0, 7]. Panics if out of range; use
    /// [`Mask::try_new`] at an API boundary instead.
    pub fn new(mask: u8) -> Self {
        Self::try_new(mask).expect("mask value out of range")
    }

    /// Creates a mask from its index, reporting an out-of-range value as
    /// [`QrError::InvalidMask`] instead of panicking.
    pub fn try_new(mask: u8) -> Result<Self, QrError> {
        Self::ALL
            .get(usize::from(mask))
            .copied()
            .ok_or(QrError::InvalidMask(mask))
    }

    /// Returns the value, which is in the range [0, 7].
    pub fn value(self) -> u8 {
        match self {
            Mask::M0 => 0,
            Mask::M1 => 1,
            Mask::M2 => 2,
            Mask::M3 => 3,
            Mask::M4 => 4,
            Mask::M5 => 5,
            Mask::M6 => 6,
            Mask::M7 => 7,
        }
    }

    /// All eight mask patterns, in index order.
    pub fn all() -> [Mask; 8] {
        Self::ALL
    }

    /// Evaluates this mask's predicate at (row, col). A module is inverted
    /// when this returns `true` (spec.md section 4.4.3: "if the predicate
    /// evaluates to 0 the cell value is inverted" — this function already
    /// inverts the sense, so callers XOR directly on `true`).
    ///
    /// Division in mask 4 is integer floor division, matching ISO/IEC 18004
    /// exactly; the "broken" annotation against this formula in the source
    /// this encoder was distilled from refers to that source's use of
    /// floating-point division, not to the formula.
    pub fn invert(self, row: i32, col: i32) -> bool {
        match self {
            Mask::M0 => (row + col) % 2 == 0,
            Mask::M1 => row % 2 == 0,
            Mask::M2 => col % 3 == 0,
            Mask::M3 => (row + col) % 3 == 0,
            Mask::M4 => (row / 2 + col / 3) % 2 == 0,
            Mask::M5 => (row * col) % 2 + (row * col) % 3 == 0,
            Mask::M6 => ((row * col) % 2 + (row * col) % 3) % 2 == 0,
            Mask::M7 => ((row + col) % 2 + (row * col) % 3) % 2 == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Mask::try_new(8).is_err());
        assert!(Mask::try_new(0).is_ok());
        assert!(Mask::try_new(7).is_ok());
    }

    #[test]
    fn value_round_trips_through_try_new() {
        for i in 0..8u8 {
            assert_eq!(Mask::try_new(i).unwrap().value(), i);
        }
    }

    #[test]
    fn mask_four_uses_floor_division() {
        // (0/2 + 4/3) % 2 == (0 + 1) % 2 == 1 != 0 -> not inverted
        assert!(!Mask::M4.invert(0, 4));
        // (2/2 + 0/3) % 2 == (1 + 0) % 2 == 1 != 0 -> not inverted
        assert!(!Mask::M4.invert(2, 0));
        // (0/2 + 0/3) % 2 == 0 -> inverted
        assert!(Mask::M4.invert(0, 0));
    }
}
