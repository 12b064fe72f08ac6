//! Decodes the same small layer stored in every supported data layout.
//!
//! Run with: `cargo run -p bevy_tiledmap_layers --example decode_layers`

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_tiledmap_layers::prelude::*;

const WIDTH: u32 = 4;
const HEIGHT: u32 = 3;

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(TiledmapLayersPlugin::default())
        .add_systems(Startup, spawn_layers)
        .add_observer(report_decoded)
        .add_observer(report_failed);

    // Startup runs before PreUpdate, so a single update decodes every layer
    app.update();
}

fn spawn_layers(mut commands: Commands) {
    // Second row has a horizontally flipped tile, third a vertically flipped one
    let gids: [u32; 12] = [
        1, 2, 2, 3, //
        4, 0x8000_0005, 5, 6, //
        7, 8, 0x4000_0008, 9,
    ];

    let formats = [
        DataFormat::Tiles,
        DataFormat::Csv,
        DataFormat::Base64(Compression::None),
        DataFormat::Base64(Compression::Zlib),
        DataFormat::Base64(Compression::Gzip),
    ];

    for format in formats {
        match EncodedLayer::encode(format, &gids, WIDTH as usize) {
            Ok(data) => {
                commands.spawn((
                    Name::new(format.to_string()),
                    EncodedTileLayer::new(data, WIDTH, HEIGHT),
                ));
            }
            Err(e) => error!("Failed to encode {} layer: {}", format, e),
        }
    }

    // A zstd layer is valid Tiled, but not something the decoder handles
    commands.spawn((
        Name::new("zstd"),
        EncodedTileLayer::new(
            EncodedLayer {
                encoding: "base64".to_string(),
                compression: "zstd".to_string(),
                payload: "KLUv/QBYFQAA".to_string(),
                ..default()
            },
            WIDTH,
            HEIGHT,
        ),
    ));
}

fn report_decoded(trigger: On<TileLayerDecoded>, layers: Query<(&Name, &TileLayerGids)>) {
    let Ok((name, layer)) = layers.get(trigger.event().entity) else {
        return;
    };

    info!("{}: {} tiles", name, trigger.event().tile_count);
    for (x, y, tile) in layer.iter_tiles().filter(|(_, _, tile)| tile.flipped_h || tile.flipped_v) {
        info!(
            "  ({}, {}) gid {} flipped_h={} flipped_v={}",
            x, y, tile.gid, tile.flipped_h, tile.flipped_v
        );
    }
}

fn report_failed(trigger: On<TileLayerDecodeFailed>) {
    warn!(
        "Layer {:?} skipped ({:?}): {}",
        trigger.event().entity,
        trigger.event().data_kind,
        trigger.event().message
    );
}
