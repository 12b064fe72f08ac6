//! Decoded tile grid component and GID flag handling.

use bevy::prelude::*;
use thiserror::Error;

/// Bit 31: tile is flipped horizontally.
pub const FLIPPED_HORIZONTALLY_FLAG: u32 = 0x8000_0000;
/// Bit 30: tile is flipped vertically.
pub const FLIPPED_VERTICALLY_FLAG: u32 = 0x4000_0000;
/// Bit 29: tile is flipped anti-diagonally (rotation on orthogonal maps).
pub const FLIPPED_DIAGONALLY_FLAG: u32 = 0x2000_0000;
/// Bit 28: tile is rotated 120° (hexagonal maps only).
pub const ROTATED_HEXAGONAL_120_FLAG: u32 = 0x1000_0000;

/// All flag bits stored in the top of a raw GID.
pub const GID_FLAGS_MASK: u32 = FLIPPED_HORIZONTALLY_FLAG
    | FLIPPED_VERTICALLY_FLAG
    | FLIPPED_DIAGONALLY_FLAG
    | ROTATED_HEXAGONAL_120_FLAG;

/// A non-empty cell with its flip flags split out of the raw GID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerTile {
    /// GID with the flag bits cleared (never 0)
    pub gid: u32,

    /// Horizontal flip flag
    pub flipped_h: bool,

    /// Vertical flip flag
    pub flipped_v: bool,

    /// Diagonal flip flag (used for rotation in some contexts)
    pub flipped_d: bool,

    /// 120° rotation flag for hexagonal maps
    pub rotated_hex_120: bool,
}

impl LayerTile {
    /// Split a raw GID. Returns `None` for empty cells.
    pub fn from_raw(raw: u32) -> Option<Self> {
        let gid = raw & !GID_FLAGS_MASK;
        if gid == 0 {
            return None;
        }

        Some(Self {
            gid,
            flipped_h: raw & FLIPPED_HORIZONTALLY_FLAG != 0,
            flipped_v: raw & FLIPPED_VERTICALLY_FLAG != 0,
            flipped_d: raw & FLIPPED_DIAGONALLY_FLAG != 0,
            rotated_hex_120: raw & ROTATED_HEXAGONAL_120_FLAG != 0,
        })
    }

    /// Reassemble the raw GID, flags included.
    pub fn to_raw(self) -> u32 {
        let mut raw = self.gid;
        if self.flipped_h {
            raw |= FLIPPED_HORIZONTALLY_FLAG;
        }
        if self.flipped_v {
            raw |= FLIPPED_VERTICALLY_FLAG;
        }
        if self.flipped_d {
            raw |= FLIPPED_DIAGONALLY_FLAG;
        }
        if self.rotated_hex_120 {
            raw |= ROTATED_HEXAGONAL_120_FLAG;
        }
        raw
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerShapeError {
    #[error("Layer data has {actual} tiles, expected {expected} for a {width}x{height} layer")]
    Mismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Raw GID grid attached to tile layer entities once their data is decoded.
///
/// GIDs are stored exactly as decoded, flip flags included. Use [`LayerTile`]
/// (via [`TileLayerGids::tile`] or [`TileLayerGids::iter_tiles`]) to get them
/// split out.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_tiledmap_layers::components::TileLayerGids;
/// fn count_flipped(layer_query: Query<&TileLayerGids>) {
///     for layer in layer_query.iter() {
///         let flipped = layer.iter_tiles().filter(|(_, _, tile)| tile.flipped_h).count();
///         info!("{} of {} cells are mirrored", flipped, layer.cell_count());
///     }
/// }
/// ```
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct TileLayerGids {
    /// Layer width in tiles
    pub width: u32,

    /// Layer height in tiles
    pub height: u32,

    /// Flattened grid of raw GIDs: index = y * width + x
    /// 0 = empty tile
    pub gids: Vec<u32>,
}

impl TileLayerGids {
    /// Create a layer with every cell empty.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            gids: vec![0; width as usize * height as usize],
        }
    }

    /// Wrap a decoded GID sequence, checking it matches the layer's shape.
    ///
    /// With `pad_empty`, an empty sequence (a layer saved without data) becomes
    /// an all-empty grid instead of a mismatch.
    pub fn from_gids(
        width: u32,
        height: u32,
        gids: Vec<u32>,
        pad_empty: bool,
    ) -> Result<Self, LayerShapeError> {
        if gids.is_empty() && pad_empty {
            return Ok(Self::empty(width, height));
        }

        let expected = width as usize * height as usize;
        if gids.len() != expected {
            return Err(LayerShapeError::Mismatch {
                width,
                height,
                expected,
                actual: gids.len(),
            });
        }

        Ok(Self { width, height, gids })
    }

    pub fn cell_count(&self) -> usize {
        self.gids.len()
    }

    /// Raw GID at position (returns None if out of bounds).
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.gids.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Tile at position (returns None if out of bounds or empty).
    pub fn tile(&self, x: u32, y: u32) -> Option<LayerTile> {
        self.get(x, y).and_then(LayerTile::from_raw)
    }

    /// Rows of raw GIDs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // width 0 means no cells, chunks(0) would panic
        self.gids.chunks(self.width.max(1) as usize)
    }

    /// Iterate all non-empty tiles with their positions.
    ///
    /// Returns `(x, y, tile)` tuples.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (u32, u32, LayerTile)> + '_ {
        let width = self.width.max(1);
        self.gids.iter().enumerate().filter_map(move |(idx, &raw)| {
            LayerTile::from_raw(raw).map(|tile| {
                let x = idx as u32 % width;
                let y = idx as u32 / width;
                (x, y, tile)
            })
        })
    }
}
