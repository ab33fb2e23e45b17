//! A byte-mode QR Code Model 2 encoder, covering ISO/IEC 18004's bit stream
//! assembly, Reed-Solomon error correction, block interleaving, and module
//! matrix composition.
//!
//! This crate has no knowledge of any output image format: [`QrCode`]
//! exposes its finished module matrix through [`ImageView`], a
//! dependency-free bitmap view. Rasterising that view into PNG (or any
//! other format) is the job of an external collaborator crate such as
//! `qr-image`.
//!
//! Only byte mode is supported — there is no numeric, alphanumeric, or
//! kanji segmentation, and no automatic version/mask selection. Callers
//! choose a version, error correction level, and mask explicitly; a
//! payload that does not fit is reported as [`QrError::CapacityExceeded`]
//! rather than silently promoted to a larger version.
//!
//! # Example
//!
//! ```
//! use qr::{CodeEcc, QrCode};
//!
//! let qr = QrCode::encode(b"hello", 1, CodeEcc::Medium, 0).unwrap();
//! for y in 0..qr.size() {
//!     for x in 0..qr.size() {
//!         let _dark = qr.get_module(x, y);
//!     }
//! }
//! ```

mod assembler;
mod bit_buffer;
mod code_ecc;
mod error;
mod finder_penalty;
mod gf256;
mod image_view;
mod interleave;
mod mask;
mod qr_code;
mod reed_solomon;
mod segment;
mod segment_mode;
mod tables;
mod version;
mod zigzag;

pub use code_ecc::CodeEcc;
pub use error::QrError;
pub use image_view::ImageView;
pub use mask::Mask;
pub use qr_code::QrCode;
pub use version::Version;
