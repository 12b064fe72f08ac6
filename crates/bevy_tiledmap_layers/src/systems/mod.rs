//! Systems for tile layer decoding.

pub mod decode;

pub use decode::{RedecodeTileLayer, TileLayerError, decode_tile_layer, decode_tile_layers};
