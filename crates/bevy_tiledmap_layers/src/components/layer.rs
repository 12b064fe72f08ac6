//! Tile layer input and failure components.

use bevy::prelude::*;
use bevy_tiledmap_data::{EncodedLayer, LayerDataErrorKind};

/// Undecoded tile layer data, as read from the map document.
///
/// Insert this on a layer entity and `decode_tile_layers` attaches a
/// [`TileLayerGids`](super::TileLayerGids) (or a [`TileLayerDecodeError`]) in
/// the next `PreUpdate`. Changing the component re-decodes the layer.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_tiledmap_layers::prelude::*;
/// fn spawn_layer(mut commands: Commands) {
///     commands.spawn((
///         Name::new("Ground"),
///         EncodedTileLayer::new(EncodedLayer::csv("1,2,\n3,4"), 2, 2),
///     ));
/// }
/// ```
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct EncodedTileLayer {
    /// The `<data>` element contents
    #[reflect(ignore)]
    pub data: EncodedLayer,

    /// Layer width in tiles
    pub width: u32,

    /// Layer height in tiles
    pub height: u32,
}

impl EncodedTileLayer {
    pub fn new(data: EncodedLayer, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// Attached instead of `TileLayerGids` when a layer could not be decoded.
///
/// Removed again once the layer decodes successfully.
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct TileLayerDecodeError {
    /// Which decoding stage failed, `None` for a layer shape mismatch
    #[reflect(ignore)]
    pub data_kind: Option<LayerDataErrorKind>,

    /// Human readable error
    pub message: String,
}
