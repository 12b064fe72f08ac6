//! # `bevy_tiledmap_layers`
//!
//! Tile layer decoding for `bevy_tiled`. Turns `EncodedTileLayer` components
//! (raw `<data>` contents plus the layer size) into `TileLayerGids` grids.
//!
//! **This crate does NOT parse map files or spawn tiles** - whatever reads the
//! document spawns layer entities with `EncodedTileLayer`, and rendering or
//! physics plugins consume `TileLayerGids`.
//!
//! ## What it provides
//!
//! 1. **Decoding system**: `decode_tile_layers` in `PreUpdate`, re-running on change
//! 2. **Grid component**: `TileLayerGids` with flip flags split out on access
//! 3. **Events**: `TileLayerDecoded` / `TileLayerDecodeFailed` entity events
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tiledmap_layers::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(TiledmapLayersPlugin::default())
//!         .add_systems(Startup, spawn_layer)
//!         .run();
//! }
//!
//! fn spawn_layer(mut commands: Commands) {
//!     commands
//!         .spawn(EncodedTileLayer::new(
//!             EncodedLayer::base64(Compression::Zlib, "eJxjYEAFAAAQAAE="),
//!             2,
//!             2,
//!         ))
//!         .observe(|trigger: On<TileLayerDecoded>| {
//!             info!("Layer decoded: {:?}", trigger.event().entity);
//!         });
//! }
//! ```

pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_tiledmap_layers` users.

    pub use crate::components::{
        EncodedTileLayer, LayerShapeError, LayerTile, TileLayerDecodeError, TileLayerGids,
    };
    pub use crate::events::{TileLayerDecodeFailed, TileLayerDecoded};
    pub use crate::plugin::{TiledmapLayersConfig, TiledmapLayersPlugin};
    pub use crate::systems::{RedecodeTileLayer, TileLayerError};

    pub use bevy_tiledmap_data::prelude::*;
}

// Re-export plugin types at crate root for convenience
pub use plugin::{TiledmapLayersConfig, TiledmapLayersPlugin};
