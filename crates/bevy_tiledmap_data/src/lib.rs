//! # `bevy_tiledmap_data`
//!
//! Tile layer data decoding for `bevy_tiledmap`. Converts the contents of a
//! Tiled `<data>` element into a flat, row-major sequence of GIDs.
//!
//! **This crate does NOT parse map documents or resolve tilesets** - the
//! document parser hands it the raw `encoding`/`compression` attributes plus
//! the text body or `<tile>` records, and gets plain `u32`s back.
//!
//! ## Supported layouts
//!
//! | encoding | compression      | payload                              |
//! |----------|------------------|--------------------------------------|
//! | (none)   | (none)           | `<tile gid="..."/>` records          |
//! | `csv`    | (none)           | comma separated decimal GIDs         |
//! | `base64` | (none)/`zlib`/`gzip` | little-endian `u32` GIDs         |
//!
//! GIDs keep Tiled's flip flags in their high bits; masking them is up to the
//! caller (`bevy_tiledmap_layers` does it when building tiles).
//!
//! ## Example
//!
//! ```rust
//! use bevy_tiledmap_data::prelude::*;
//!
//! let layer = EncodedLayer::base64(Compression::Zlib, "eJxjYEAFAAAQAAE=");
//! let decoder = LayerDecoder::new(DecoderConfig::default());
//! assert_eq!(decoder.decode(&layer).unwrap(), vec![0, 0, 0, 0]);
//! ```

mod compression;
pub mod config;
pub mod decoder;
pub mod encode;
pub mod error;
pub mod format;
pub mod layer;

pub mod prelude {
    //! Common imports for `bevy_tiledmap_data` users.

    pub use crate::config::DecoderConfig;
    pub use crate::decoder::{LayerDecoder, decode};
    pub use crate::error::{LayerDataError, LayerDataErrorKind};
    pub use crate::format::{Compression, DataFormat};
    pub use crate::layer::{EncodedLayer, TileRecord};
}

pub use config::DecoderConfig;
pub use decoder::{GID_SIZE, LayerDecoder, decode};
pub use encode::{encode_base64, encode_csv};
pub use error::{LayerDataError, LayerDataErrorKind};
pub use format::{Compression, DataFormat};
pub use layer::{EncodedLayer, TileRecord};
