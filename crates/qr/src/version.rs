use crate::error::QrError;

/// A QR Code version number, between 1 and 40 (inclusive).
///
/// The version determines the symbol's side length in modules
/// (`size = version * 4 + 17`) and, together with the error correction
/// level, its data capacity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// Panics if the number is outside the range [1, 40]. Use [`Version::try_new`]
    /// at an API boundary where an out-of-range value should be reported to the
    /// caller instead.
    pub fn new(ver: u8) -> Self {
        assert!(
            (Version::MIN.value()..=Version::MAX.value()).contains(&ver),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Creates a version object, reporting an out-of-range number as
    /// [`QrError::UnsupportedVersion`] instead of panicking.
    pub fn try_new(ver: u8) -> Result<Self, QrError> {
        if (Version::MIN.value()..=Version::MAX.value()).contains(&ver) {
            Ok(Self(ver))
        } else {
            Err(QrError::UnsupportedVersion(ver))
        }
    }

    /// Returns the value, which is in the range [1, 40].
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the side length of the module matrix for this version, in
    /// modules: `17 + 4 * version`, in the range [21, 177].
    pub fn size(self) -> i32 {
        i32::from(self.0) * 4 + 17
    }
}
