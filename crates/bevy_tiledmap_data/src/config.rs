//! Configuration for the layer decoder.

use serde::{Deserialize, Serialize};

/// Limits applied while decoding layer data.
///
/// # Example
///
/// ```rust
/// use bevy_tiledmap_data::{DecoderConfig, LayerDecoder};
///
/// // 4 MiB is roughly a 1024x1024 layer
/// let decoder = LayerDecoder::new(DecoderConfig::default().with_max_decoded_bytes(4 << 20));
/// assert_eq!(decoder.config().max_decoded_bytes, 4 << 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Ceiling on the decoded binary size of one layer, 4 bytes per GID.
    ///
    /// Applies to inflated zlib/gzip output, raw base64 output and parsed CSV.
    pub max_decoded_bytes: usize,
}

impl DecoderConfig {
    /// 64 MiB, a little over 16 million tiles.
    pub const DEFAULT_MAX_DECODED_BYTES: usize = 64 * 1024 * 1024;

    /// No ceiling at all. Only use this for trusted maps.
    pub fn unlimited() -> Self {
        Self {
            max_decoded_bytes: usize::MAX,
        }
    }

    pub fn with_max_decoded_bytes(mut self, max_decoded_bytes: usize) -> Self {
        self.max_decoded_bytes = max_decoded_bytes;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_decoded_bytes: Self::DEFAULT_MAX_DECODED_BYTES,
        }
    }
}
