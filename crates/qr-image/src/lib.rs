//! PNG rasterisation for [`qr::QrCode`] module matrices.
//!
//! This crate is the external collaborator spec.md's core encoder defers
//! image encoding to: it knows how to turn a [`qr::ImageView`] into pixels
//! and encode those pixels as PNG, and nothing about bit streams, Reed-
//! Solomon, or matrix composition.

mod error;
mod metadata;

use std::io::Cursor;

use image::imageops::{resize, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma};
use qr::QrCode;

pub use error::{ErrorPayload, QrImageError};
pub use metadata::{EccLevel, QrMetadata};

/// Renders `qr` as a PNG, scaling each module up to a `scale x scale` block
/// of pixels with no quiet zone border.
///
/// Returns [`QrImageError::InvalidRequest`] if `scale` is zero.
pub fn render_png(qr: &QrCode, scale: u32) -> Result<Vec<u8>, QrImageError> {
    render_png_with_quiet_zone(qr, scale, 0)
}

/// Renders `qr` as a PNG, scaling each module up to a `scale x scale` block
/// of pixels and surrounding the symbol with `quiet_zone` modules of white
/// border on every side, per the recommended quiet zone in ISO/IEC 18004.
///
/// Returns [`QrImageError::InvalidRequest`] if `scale` is zero, or if the
/// resulting image would overflow `u32` dimensions.
pub fn render_png_with_quiet_zone(
    qr: &QrCode,
    scale: u32,
    quiet_zone: u32,
) -> Result<Vec<u8>, QrImageError> {
    if scale == 0 {
        return Err(QrImageError::from(Box::new(ErrorPayload::InvalidScale { scale })));
    }

    let view = qr.to_image_view();
    let dimension = view.dimension();
    let bordered = dimension
        .checked_add(quiet_zone.saturating_mul(2))
        .ok_or_else(|| {
            QrImageError::from(Box::new(ErrorPayload::InvalidDimensions {
                quiet_zone,
                width: dimension,
                height: dimension,
            }))
        })?;

    let canvas: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_fn(bordered, bordered, |x, y| {
        let in_quiet_zone = x < quiet_zone
            || y < quiet_zone
            || x >= quiet_zone + dimension
            || y >= quiet_zone + dimension;
        let dark = !in_quiet_zone
            && view.get_pixel((x - quiet_zone) as i32, (y - quiet_zone) as i32);
        Luma([if dark { 0u8 } else { 255u8 }])
    });

    let scaled_side = bordered
        .checked_mul(scale)
        .ok_or_else(|| {
            QrImageError::from(Box::new(ErrorPayload::InvalidDimensions {
                quiet_zone,
                width: bordered,
                height: bordered,
            }))
        })?;
    let resized = resize(&canvas, scaled_side, scaled_side, FilterType::Nearest);

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(resized).write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
