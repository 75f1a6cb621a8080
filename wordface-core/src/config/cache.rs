//! Persisted weather record
//!
//! The last temperature and condition are written to storage so the face
//! has something to show before the phone answers a weather request.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::text::clamp_into;

/// Magic number to identify a valid weather record
pub const CACHE_MAGIC: u32 = 0x5746_4348; // "WFCH"

/// Current weather record version
pub const CACHE_VERSION: u8 = 1;

/// Longest weather condition kept, in characters
pub const CONDITION_LEN: usize = 31;

/// Upper bound on the encoded size of a [`WeatherCache`]
pub const CACHE_ENCODED_MAX: usize = 64;

/// Errors reading or writing the weather record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CacheError {
    /// Record did not fit the output buffer
    Serialize,
    /// Bytes are not a weather record
    Deserialize,
    /// Magic number mismatch
    InvalidMagic,
    /// Record written by an incompatible version
    UnsupportedVersion,
}

/// Last weather values received
///
/// This struct is serialized to storage using postcard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherCache {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Temperature in °C
    pub temperature: Option<i32>,
    /// Short condition text ("light rain")
    pub condition: Option<String<CONDITION_LEN>>,
}

impl Default for WeatherCache {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherCache {
    /// Create an empty record
    pub const fn new() -> Self {
        Self {
            magic: CACHE_MAGIC,
            version: CACHE_VERSION,
            temperature: None,
            condition: None,
        }
    }

    /// Check that the header matches this build
    pub fn is_valid(&self) -> bool {
        self.magic == CACHE_MAGIC && self.version == CACHE_VERSION
    }

    /// Check whether anything has been recorded
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.condition.is_none()
    }

    /// Store a condition, clamped to [`CONDITION_LEN`] characters
    pub fn set_condition(&mut self, text: &str) {
        let mut condition = String::new();
        clamp_into(&mut condition, text, CONDITION_LEN);
        self.condition = Some(condition);
    }

    /// Serialize into `buffer`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn encode<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], CacheError> {
        postcard::to_slice(self, buffer).map_err(|_| CacheError::Serialize)
    }

    /// Deserialize and validate a stored record
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, CacheError> {
        let cache: WeatherCache =
            postcard::from_bytes(bytes).map_err(|_| CacheError::Deserialize)?;
        if cache.magic != CACHE_MAGIC {
            return Err(CacheError::InvalidMagic);
        }
        if cache.version != CACHE_VERSION {
            return Err(CacheError::UnsupportedVersion);
        }
        Ok(cache)
    }
}
