//! Core types shared across the ffcrypt library

/// Byte order used when importing or exporting fixed-width integers
///
/// Finite-field values cross the API boundary as fixed-width byte strings
/// whose length equals the byte length of the modulus. The format selects
/// how those bytes are ordered; it never changes the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Most significant byte first (network order)
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

impl NumberFormat {
    /// Human-readable name of the format
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigEndian => "big-endian",
            Self::LittleEndian => "little-endian",
        }
    }
}
