//! # bevy_tiledmap_decode
//!
//! Tiled tile layer decoding, with an optional Bevy integration.
//!
//! This is a unified meta-crate that combines the `bevy_tiledmap_*` decoding
//! sub-crates behind feature flags.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_tiledmap_decode::prelude::*;
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
//!     commands.spawn(EncodedTileLayer::new(EncodedLayer::csv("1,2,\n3,4"), 2, 2));
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: Includes the `layers` feature
//! - **layers**: Bevy plugin decoding `EncodedTileLayer` components
//!
//! ## Architecture
//!
//! - **Layer 1** ([`data`]): Pure decoder for csv, base64, zlib and gzip layer data
//! - **Layer 2** ([`layers`], optional): ECS components, decoding system and events
//!
//! Without the `layers` feature nothing here depends on Bevy:
//!
//! ```rust
//! use bevy_tiledmap_decode::data::{EncodedLayer, decode};
//!
//! assert_eq!(decode(&EncodedLayer::csv("5,6")).unwrap(), vec![5, 6]);
//! ```

// Re-export sub-crates for advanced usage
pub use bevy_tiledmap_data as data;

#[cfg(feature = "layers")]
pub use bevy_tiledmap_layers as layers;

/// Unified prelude for `bevy_tiledmap_decode`
pub mod prelude {
    pub use crate::data::prelude::*;

    #[cfg(feature = "layers")]
    pub use crate::layers::prelude::*;
}
