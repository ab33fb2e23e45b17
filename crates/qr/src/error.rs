use thiserror::Error;

use crate::code_ecc::CodeEcc;

/// Errors returned at the encoder's API boundary.
///
/// All of these are detected before any `QrCode` is constructed; a failed
/// call never leaves behind a partially built matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// The payload does not fit the binary-mode capacity of the requested
    /// (version, error correction level) pair.
    #[error("data length = {data_bits} bits, max capacity = {capacity_bits} bits")]
    CapacityExceeded {
        data_bits: usize,
        capacity_bits: usize,
    },

    /// The requested version number is outside [1, 40].
    #[error("version {0} is outside the supported range [1, 40]")]
    UnsupportedVersion(u8),

    /// The requested mask index is outside [0, 7].
    #[error("mask index {0} is outside the supported range [0, 7]")]
    InvalidMask(u8),

    /// A static table row was malformed. The tables shipped with this crate
    /// are exhaustive over (version, ecc) and can never actually produce
    /// this; it is kept in the public enum for a hypothetical pluggable
    /// table source (see spec.md section 7).
    #[error("malformed version table row for version {version}, ecc {ecc:?}")]
    TableError { version: u8, ecc: CodeEcc },
}
