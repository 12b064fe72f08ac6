//! Reactive layer decoding system.

use bevy::prelude::*;
use bevy_tiledmap_data::{LayerDataError, LayerDataErrorKind, LayerDecoder};
use thiserror::Error;

use crate::components::{EncodedTileLayer, LayerShapeError, TileLayerDecodeError, TileLayerGids};
use crate::events::{TileLayerDecodeFailed, TileLayerDecoded};
use crate::plugin::TiledmapLayersConfig;

/// Marker component to trigger layer re-decoding.
///
/// Add this component to force the layer to be decoded again even if its
/// `EncodedTileLayer` hasn't changed (e.g. after changing `TiledmapLayersConfig`).
#[derive(Component)]
pub struct RedecodeTileLayer;

#[derive(Debug, Error)]
pub enum TileLayerError {
    #[error(transparent)]
    Data(#[from] LayerDataError),

    #[error(transparent)]
    Shape(#[from] LayerShapeError),
}

impl TileLayerError {
    /// Decoder stage that failed, `None` for shape mismatches.
    pub fn data_kind(&self) -> Option<LayerDataErrorKind> {
        match self {
            Self::Data(error) => Some(error.kind()),
            Self::Shape(_) => None,
        }
    }
}

/// Decode one layer and fit it to its declared size.
pub fn decode_tile_layer(
    decoder: &LayerDecoder,
    layer: &EncodedTileLayer,
    pad_empty: bool,
) -> Result<TileLayerGids, TileLayerError> {
    let gids = decoder.decode(&layer.data)?;
    Ok(TileLayerGids::from_gids(
        layer.width,
        layer.height,
        gids,
        pad_empty,
    )?)
}

/// Reactive system that decodes `EncodedTileLayer` components into `TileLayerGids`.
///
/// Runs in `PreUpdate` before user systems.
///
/// # Triggers
///
/// - `Changed<EncodedTileLayer>` - When layer data is added or replaced (hot reload)
/// - `With<RedecodeTileLayer>` - When manual re-decoding is requested
///
/// A failed layer gets `TileLayerDecodeError` and loses any stale `TileLayerGids`;
/// other layers are unaffected.
pub fn decode_tile_layers(
    config: Res<TiledmapLayersConfig>,
    mut commands: Commands,
    layer_query: Query<
        (Entity, &EncodedTileLayer, Option<&Name>),
        Or<(Changed<EncodedTileLayer>, With<RedecodeTileLayer>)>,
    >,
) {
    let decoder = LayerDecoder::new(config.decoder);

    for (layer_entity, layer, name) in &layer_query {
        let label = name.map_or_else(|| format!("{layer_entity:?}"), |n| n.as_str().to_string());

        match decode_tile_layer(&decoder, layer, config.pad_empty_layers) {
            Ok(gids) => {
                let tile_count = gids.iter_tiles().count();
                debug!(
                    "Decoded tile layer '{}' ({}x{}, {} tiles)",
                    label, gids.width, gids.height, tile_count
                );

                commands
                    .entity(layer_entity)
                    .insert(gids)
                    .remove::<(TileLayerDecodeError, RedecodeTileLayer)>();
                commands
                    .entity(layer_entity)
                    .trigger(move |entity| TileLayerDecoded { entity, tile_count });
            }
            Err(error) => {
                warn!("Failed to decode tile layer '{}': {}", label, error);

                let data_kind = error.data_kind();
                let message = error.to_string();

                commands
                    .entity(layer_entity)
                    .insert(TileLayerDecodeError {
                        data_kind,
                        message: message.clone(),
                    })
                    .remove::<(TileLayerGids, RedecodeTileLayer)>();
                commands.entity(layer_entity).trigger(move |entity| TileLayerDecodeFailed {
                    entity,
                    data_kind,
                    message,
                });
            }
        }
    }
}
