use qr::{CodeEcc, QrCode};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorPayload, QrImageError};

/// A serialisable record of the parameters a [`QrCode`] was built with,
/// useful for logging a rasterisation job or attaching a manifest alongside
/// a batch of rendered images; carries no information [`QrCode`] itself
/// doesn't already expose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QrMetadata {
    pub version: u8,
    pub error_correction_level: EccLevel,
    pub mask: u8,
    pub size: i32,
}

/// A serde-friendly mirror of [`CodeEcc`]; [`CodeEcc`] itself intentionally
/// carries no serde impls since the core crate stays free of a serialization
/// dependency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EccLevel {
    Low,
    Medium,
    Quartile,
    High,
}

impl From<CodeEcc> for EccLevel {
    fn from(ecl: CodeEcc) -> Self {
        match ecl {
            CodeEcc::Low => EccLevel::Low,
            CodeEcc::Medium => EccLevel::Medium,
            CodeEcc::Quartile => EccLevel::Quartile,
            CodeEcc::High => EccLevel::High,
        }
    }
}

impl QrMetadata {
    pub fn from_qr_code(qr: &QrCode) -> Self {
        Self {
            version: qr.version().value(),
            error_correction_level: qr.error_correction_level().into(),
            mask: qr.mask().value(),
            size: qr.size(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("QrMetadata always serializes")
    }

    pub fn from_json(s: &str) -> Result<Self, QrImageError> {
        serde_json::from_str(s)
            .map_err(|e| QrImageError::from(Box::new(ErrorPayload::InvalidMetadata(e.to_string()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let qr = QrCode::encode(b"metadata check", 3, CodeEcc::Quartile, 5).unwrap();
        let meta = QrMetadata::from_qr_code(&qr);
        let json = meta.to_json();
        let parsed = QrMetadata::from_json(&json).unwrap();
        assert_eq!(meta, parsed);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = QrMetadata::from_json("not json").unwrap_err();
        assert!(matches!(err, QrImageError::InvalidRequest(_)));
    }
}
