//! Events fired as tile layers are decoded.
//!
//! Both are `EntityEvent`s triggered on the layer entity, so they can be
//! observed globally or on a single layer.

use bevy::prelude::*;
use bevy_tiledmap_data::LayerDataErrorKind;

/// Fired when a layer's `TileLayerGids` has been inserted.
///
/// # Example
///
/// ```ignore
/// commands
///     .spawn(EncodedTileLayer::new(data, 32, 32))
///     .observe(|trigger: On<TileLayerDecoded>| {
///         info!("Layer ready with {} tiles", trigger.event().tile_count);
///     });
/// ```
#[derive(EntityEvent, Debug, Clone)]
pub struct TileLayerDecoded {
    /// The layer entity
    #[event_target]
    pub entity: Entity,
    /// Number of non-empty cells
    pub tile_count: usize,
}

/// Fired when a layer's data could not be decoded.
///
/// The layer keeps its `EncodedTileLayer` and gets a `TileLayerDecodeError`;
/// whether that aborts the whole map or just skips the layer is up to the
/// observer.
#[derive(EntityEvent, Debug, Clone)]
pub struct TileLayerDecodeFailed {
    /// The layer entity
    #[event_target]
    pub entity: Entity,
    /// Which decoding stage failed, `None` for a layer shape mismatch
    pub data_kind: Option<LayerDataErrorKind>,
    /// Human readable error
    pub message: String,
}
