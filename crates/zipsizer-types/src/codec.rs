//! Compression codec selection.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Levels accepted by both codecs.
const LEVELS: RangeInclusive<u32> = 1..=9;

/// A streaming compression codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    /// DEFLATE in a gzip container.
    #[default]
    Gzip,
    /// bzip2 block-sorting compression.
    Bzip2,
}

impl Codec {
    /// Returns the codec name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }

    /// Returns all supported codecs.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Gzip, Self::Bzip2]
    }

    /// Returns the range of levels this codec accepts.
    #[must_use]
    pub const fn levels(&self) -> RangeInclusive<u32> {
        LEVELS
    }

    /// Returns true if `level` is valid for this codec.
    #[must_use]
    pub fn supports_level(&self, level: u32) -> bool {
        self.levels().contains(&level)
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Codec {
    type Err = CodecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gzip" => Ok(Self::Gzip),
            "bzip2" => Ok(Self::Bzip2),
            _ => Err(CodecParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown codec name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecParseError(String);

impl std::fmt::Display for CodecParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid compression algorithm '{}', expected 'gzip' or 'bzip2'",
            self.0
        )
    }
}

impl std::error::Error for CodecParseError {}
