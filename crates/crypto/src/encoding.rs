//! Hex encoding shared by the fixed-width byte types.

use thiserror::Error;

/// Errors from parsing a fixed-width value out of a hex string or byte slice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseBytesError {
    /// The input was not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded input had the wrong length.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Decodes a hex string, with or without a `0x` prefix, into exactly `N` bytes.
pub(crate) fn decode_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], ParseBytesError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s)?;
    copy_fixed(&bytes)
}

/// Copies a slice into a fixed-width array, checking the length.
pub(crate) fn copy_fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], ParseBytesError> {
    bytes
        .try_into()
        .map_err(|_| ParseBytesError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        })
}

/// Implements hex `Display`/`Debug`/`FromStr`, hex-string serde and byte
/// conversions for a newtype over `[u8; $len]`.
macro_rules! impl_hex_bytes {
    ($name:ident, $len:expr) => {
        impl $name {
            /// Builds the value from a slice of exactly the right length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, $crate::encoding::ParseBytesError> {
                $crate::encoding::copy_fixed::<{ $len }>(bytes).map(Self)
            }

            /// Returns the raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns the raw bytes by value.
            pub fn to_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "0x{}", ::hex::encode(self.0))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::encoding::ParseBytesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::encoding::decode_fixed_hex::<{ $len }>(s).map(Self)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                use ::serde::de::Error as DeError;

                let hex_string: String = ::serde::Deserialize::deserialize(deserializer)?;
                hex_string.parse().map_err(DeError::custom)
            }
        }
    };
}

pub(crate) use impl_hex_bytes;
