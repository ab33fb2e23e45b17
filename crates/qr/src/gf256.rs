use std::sync::OnceLock;

/// GF(256) log/antilog tables, keyed to the primitive polynomial
/// `x^8 + x^4 + x^3 + x^2 + 1` (0x11D) and generator `alpha = 2`, exactly as
/// spec.md section 4.2 requires.
struct Tables {
    /// `exp[i] = alpha^i` for `i` in `0..255`, extended to `0..510` so that
    /// `exp[a] * exp[b]` can be looked up as `exp[(a + b) % 255]` without a
    /// modulo on the hot path.
    exp: [u8; 510],
    /// `log[alpha^i] = i` for nonzero field elements; `log[0]` is unused.
    log: [u8; 256],
}

fn build_tables() -> Tables {
    let mut exp = [0u8; 510];
    let mut log = [0u8; 256];
    let mut x: u32 = 1;
    for i in 0..255usize {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= 0x11D;
        }
    }
    for i in 255..510usize {
        exp[i] = exp[i - 255];
    }
    Tables { exp, log }
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

/// Multiplies two elements of GF(256) modulo the QR Code primitive
/// polynomial 0x11D, using precomputed log/antilog tables.
pub fn multiply(x: u8, y: u8) -> u8 {
    if x == 0 || y == 0 {
        return 0;
    }
    let t = tables();
    let i = usize::from(t.log[usize::from(x)]) + usize::from(t.log[usize::from(y)]);
    t.exp[i]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_absorbing() {
        assert_eq!(multiply(0, 200), 0);
        assert_eq!(multiply(200, 0), 0);
    }

    #[test]
    fn one_is_identity() {
        for x in 0..=255u8 {
            assert_eq!(multiply(1, x), x);
        }
    }

    #[test]
    fn multiplication_is_commutative() {
        assert_eq!(multiply(7, 91), multiply(91, 7));
    }

    #[test]
    fn matches_russian_peasant_reference() {
        fn reference(x: u8, y: u8) -> u8 {
            let mut z: u8 = 0;
            for i in (0..8).rev() {
                z = (z << 1) ^ ((z >> 7) * 0x1D);
                z ^= ((y >> i) & 1) * x;
            }
            z
        }
        for x in (0..=255u8).step_by(17) {
            for y in (0..=255u8).step_by(23) {
                assert_eq!(multiply(x, y), reference(x, y), "x={x} y={y}");
            }
        }
    }
}
