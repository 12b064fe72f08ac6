//! Components for decoded tile layers.

pub mod layer;
pub mod tile;

pub use layer::{EncodedTileLayer, TileLayerDecodeError};
pub use tile::{
    FLIPPED_DIAGONALLY_FLAG, FLIPPED_HORIZONTALLY_FLAG, FLIPPED_VERTICALLY_FLAG, GID_FLAGS_MASK,
    LayerShapeError, LayerTile, ROTATED_HEXAGONAL_120_FLAG, TileLayerGids,
};
