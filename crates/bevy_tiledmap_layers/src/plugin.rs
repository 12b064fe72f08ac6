//! Plugin for `bevy_tiledmap_layers`.

use bevy::prelude::*;
use bevy_tiledmap_data::DecoderConfig;

use crate::systems::decode_tile_layers;

/// Configuration for `TiledmapLayersPlugin`.
///
/// Inserted as a resource, so it can be changed at runtime. Changes apply to
/// layers decoded afterwards; add `RedecodeTileLayer` to refresh existing ones.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tiledmap_data::DecoderConfig;
/// use bevy_tiledmap_layers::{TiledmapLayersConfig, TiledmapLayersPlugin};
///
/// App::new()
///     .add_plugins(TiledmapLayersPlugin::new(TiledmapLayersConfig {
///         decoder: DecoderConfig::default().with_max_decoded_bytes(16 << 20),
///         ..default()
///     }));
/// ```
#[derive(Resource, Debug, Clone)]
pub struct TiledmapLayersConfig {
    /// Limits for the layer data decoder
    pub decoder: DecoderConfig,

    /// Treat a layer with no data at all as width × height empty cells
    /// instead of a shape mismatch (default: true)
    pub pad_empty_layers: bool,
}

impl Default for TiledmapLayersConfig {
    fn default() -> Self {
        Self {
            decoder: DecoderConfig::default(),
            pad_empty_layers: true,
        }
    }
}

/// Plugin that decodes `EncodedTileLayer` components into `TileLayerGids`.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_tiledmap_layers::TiledmapLayersPlugin;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(TiledmapLayersPlugin::default())
///     .run();
/// ```
#[derive(Default)]
pub struct TiledmapLayersPlugin {
    config: TiledmapLayersConfig,
}

impl TiledmapLayersPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: TiledmapLayersConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TiledmapLayersPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        app.register_type::<crate::components::EncodedTileLayer>();
        app.register_type::<crate::components::TileLayerGids>();
        app.register_type::<crate::components::TileLayerDecodeError>();

        // Decode in PreUpdate so user systems see TileLayerGids the same frame
        app.add_systems(PreUpdate, decode_tile_layers);
    }
}
