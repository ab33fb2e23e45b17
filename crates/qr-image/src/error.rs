use image::ImageError;
use qr::QrError;
use thiserror::Error;

/// Errors returned by this crate's PNG rasterisation API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrImageError {
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    #[error("qr error: {0}")]
    Qr(#[from] QrError),

    #[error("invalid rasterisation request: {0}")]
    InvalidRequest(#[from] Box<ErrorPayload>),
}

/// Detail behind [`QrImageError::InvalidRequest`], split out so a caller
/// matching on the outer enum doesn't need to know about every rasterisation
/// precondition.
#[derive(Debug, Clone, Error)]
pub enum ErrorPayload {
    #[error("scale must be at least 1 pixel per module, got {scale}")]
    InvalidScale { scale: u32 },

    #[error("quiet zone of {quiet_zone} modules would produce a {width}x{height} image")]
    InvalidDimensions {
        quiet_zone: u32,
        width: u32,
        height: u32,
    },

    #[error("metadata payload is not valid JSON: {0}")]
    InvalidMetadata(String),
}
