//! Layer data decoding: dispatch, text decoding and GID unpacking.

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, trace};

use crate::compression::decompress;
use crate::config::DecoderConfig;
use crate::error::LayerDataError;
use crate::format::{Compression, DataFormat};
use crate::layer::EncodedLayer;

/// Size of one GID in the binary layout.
pub const GID_SIZE: usize = 4;

/// Turns [`EncodedLayer`]s into flat, row-major GID sequences.
///
/// The decoder holds nothing but its configuration, so one instance can be
/// shared freely between threads and layers.
///
/// # Example
///
/// ```rust
/// use bevy_tiledmap_data::{DecoderConfig, EncodedLayer, LayerDecoder};
///
/// let decoder = LayerDecoder::new(DecoderConfig::default());
/// let layer = EncodedLayer::csv("1,2,\n3,4");
/// assert_eq!(decoder.decode(&layer).unwrap(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerDecoder {
    config: DecoderConfig,
}

impl LayerDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one layer.
    ///
    /// Explicit tile records take precedence: when present, their GIDs are
    /// returned in order and the encoding/compression tags are not looked at.
    /// A layer with neither records nor payload decodes to an empty sequence;
    /// sizing it to the layer's width × height is up to the caller.
    ///
    /// GIDs are returned as stored, flip flags included.
    pub fn decode(&self, layer: &EncodedLayer) -> Result<Vec<u32>, LayerDataError> {
        if !layer.tiles.is_empty() {
            trace!(tiles = layer.tiles.len(), "Using explicit tile records");
            return Ok(layer.tiles.iter().map(|tile| tile.gid).collect());
        }

        let format = layer.format()?;
        let payload = layer.payload.trim();
        if payload.is_empty() {
            trace!(%format, "Layer data is empty");
            return Ok(Vec::new());
        }

        let gids = match format {
            DataFormat::Tiles => return Err(LayerDataError::UnexpectedPayload),
            DataFormat::Csv => self.decode_csv(payload)?,
            DataFormat::Base64(compression) => {
                let compact = strip_whitespace(payload);
                let limit = self.config.max_decoded_bytes;
                // Uncompressed data is the decoded buffer itself, so size it up front
                if compression == Compression::None && base64_decoded_len(&compact) > limit {
                    return Err(LayerDataError::LimitExceeded { limit });
                }

                let packed = STANDARD.decode(compact.as_bytes())?;
                trace!(%format, bytes = packed.len(), "Decoded base64 payload");
                let bytes = decompress(compression, packed, limit)?;
                unpack_gids(&bytes)?
            }
        };

        debug!(%format, gids = gids.len(), "Decoded tile layer data");
        Ok(gids)
    }

    /// Parse comma separated GIDs, one row per line.
    ///
    /// Tiled ends every row but the last with a comma, so a single trailing
    /// comma per line is allowed. Every other field must be a plain decimal
    /// number: empty fields are rejected rather than skipped.
    fn decode_csv(&self, payload: &str) -> Result<Vec<u32>, LayerDataError> {
        let limit = self.config.max_decoded_bytes;
        let rows = payload.lines().map(str::trim).filter(|line| !line.is_empty());

        let mut gids = Vec::new();
        for row in rows {
            let row = row.strip_suffix(',').unwrap_or(row);
            for token in row.split(',') {
                let position = gids.len();
                let gid = parse_gid(token.trim()).ok_or_else(|| LayerDataError::CsvToken {
                    position,
                    token: token.to_string(),
                })?;

                if (gids.len() + 1) * GID_SIZE > limit {
                    return Err(LayerDataError::LimitExceeded { limit });
                }
                gids.push(gid);
            }
        }

        Ok(gids)
    }
}

/// Digits only: no sign, no empty field.
fn parse_gid(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Decode with the default [`DecoderConfig`].
pub fn decode(layer: &EncodedLayer) -> Result<Vec<u32>, LayerDataError> {
    LayerDecoder::default().decode(layer)
}

/// Whitespace is layout only (Tiled indents the payload inside the `<data>`
/// element).
fn strip_whitespace(payload: &str) -> Cow<'_, str> {
    if payload.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(
            payload
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect(),
        )
    } else {
        Cow::Borrowed(payload)
    }
}

/// Exact output size of a padded standard base64 string.
fn base64_decoded_len(compact: &str) -> usize {
    let padding = compact.bytes().rev().take_while(|&b| b == b'=').count().min(2);
    (compact.len() / 4 * 3).saturating_sub(padding)
}

/// Every 4 bytes form one little-endian GID.
fn unpack_gids(bytes: &[u8]) -> Result<Vec<u32>, LayerDataError> {
    let chunks = bytes.chunks_exact(GID_SIZE);
    if !chunks.remainder().is_empty() {
        return Err(LayerDataError::UnalignedData { len: bytes.len() });
    }

    Ok(chunks
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
