//! Raw tile layer data as handed over by the document parser.

use serde::{Deserialize, Serialize};

use crate::error::LayerDataError;
use crate::format::{Compression, DataFormat};

/// The contents of one `<data>` element before decoding.
///
/// `encoding` and `compression` hold the attribute values verbatim (empty when
/// the attribute is absent). `payload` is the element's text body, `tiles` the
/// `<tile>` children used when there is no encoding.
///
/// ```rust
/// use bevy_tiledmap_data::{EncodedLayer, decode};
///
/// let layer = EncodedLayer::csv("1,2\n3,4");
/// assert_eq!(decode(&layer).unwrap(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodedLayer {
    pub encoding: String,
    pub compression: String,
    pub payload: String,
    #[serde(alias = "tile")]
    pub tiles: Vec<TileRecord>,
}

impl EncodedLayer {
    pub fn csv(payload: impl Into<String>) -> Self {
        Self {
            encoding: "csv".to_string(),
            payload: payload.into(),
            ..Default::default()
        }
    }

    pub fn base64(compression: Compression, payload: impl Into<String>) -> Self {
        Self {
            encoding: "base64".to_string(),
            compression: compression.tag().to_string(),
            payload: payload.into(),
            ..Default::default()
        }
    }

    /// Layer made of explicit `<tile>` records.
    pub fn from_tiles(tiles: impl IntoIterator<Item = TileRecord>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn from_gids(gids: impl IntoIterator<Item = u32>) -> Self {
        Self::from_tiles(gids.into_iter().map(TileRecord::new))
    }

    /// Validate the attribute pair.
    pub fn format(&self) -> Result<DataFormat, LayerDataError> {
        DataFormat::from_tags(&self.encoding, &self.compression)
    }

    /// True when neither a payload nor tile records are present.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.payload.trim().is_empty()
    }
}

/// A single `<tile>` element. A missing `gid` attribute means "no tile".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TileRecord {
    pub gid: u32,
}

impl TileRecord {
    pub fn new(gid: u32) -> Self {
        Self { gid }
    }
}
