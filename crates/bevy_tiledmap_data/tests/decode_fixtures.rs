//! Layer data captured from maps saved by the Tiled editor.

use bevy_tiledmap_data::prelude::*;

/// An empty 2x2 map, saved once per data layout.
fn empty_2x2_layers() -> Vec<EncodedLayer> {
    vec![
        EncodedLayer::base64(Compression::Zlib, "eJxjYEAFAAAQAAE="),
        EncodedLayer::base64(Compression::Gzip, "H4sIAAAAAAAAA2NgQAUAVUu77BAAAAA="),
        EncodedLayer::base64(Compression::None, "AAAAAAAAAAAAAAAAAAAAAA=="),
        EncodedLayer::csv("0,0\n0,0"),
        EncodedLayer::from_tiles(vec![TileRecord::default(); 4]),
    ]
}

/// 25x25 outdoor map, base64 + zlib. The payload keeps the leading space the
/// editor left in the element body.
const ADVENTURE_ZLIB: &str = " eJztVcsOwzAIS3OH39nu+/9/Wic1kuXYJNp63AHRIoIxj+RorfVTDpBOenyzfVfHKXlp/kd7p/9\
hU/7ufJUv2wNifGzPBQ/MZ5zLy654VHV1vIZv0NkDsDpgj3Mh4jk+6FthBMXnWmCuiofD4Hpmm3k\
/IH83ly4+96OK0QGr6ofijTmjKB/sedUPjoUxcVbVjOM8VPu1mu8UeMOOfXHnMTeeI8c725zbas8\
dZ7WnYXxVPVTfsAaMkcLu7j+15ylE7Zea2YqHwlG+7l59bfJw9w/vdba5Prs8nCT5/MKjesf4rXB\
+iLUzB99qN88rHnfoO3nsvOd/HrV+A9pgE7E=";

#[rustfmt::skip]
const ADVENTURE_GIDS: [u32; 625] = [
    1, 2, 1, 1, 1, 2, 1, 2, 1, 1, 2, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1,
    13, 14, 13, 1, 13, 14, 13, 14, 13, 1, 2, 14, 13, 1, 1, 2, 13, 14, 13, 14, 13, 14, 13, 14, 13,
    1, 2, 1, 1, 2, 2, 1, 2, 1, 1, 2, 2, 1, 13, 13, 14, 2, 56, 1, 2, 1, 2, 1, 2, 1,
    1, 2, 13, 13, 14, 14, 1, 14, 13, 1, 2, 14, 2, 1, 1, 1, 2, 1, 2, 2, 13, 14, 13, 14, 13,
    1, 1, 13, 1, 1, 1, 1, 14, 1, 2, 14, 14, 14, 13, 13, 13, 14, 13, 14, 56, 1, 2, 1, 2, 1,
    13, 13, 14, 1, 1, 1, 1, 14, 1, 2, 13, 14, 13, 13, 1, 2, 1, 1, 1, 1, 13, 14, 13, 14, 13,
    1, 13, 14, 1, 1, 1, 1, 2, 1, 1, 2, 14, 1, 1, 13, 1, 55, 56, 1, 1, 1, 2, 1, 2, 1,
    13, 14, 1, 1, 1, 1, 1, 14, 13, 1, 1, 1, 1, 2, 1, 2, 1, 2, 55, 56, 13, 14, 13, 14, 13,
    1, 1, 2, 1, 1, 1, 1, 1, 1, 13, 13, 13, 13, 1, 1, 1, 1, 1, 2, 2, 13, 2, 1, 2, 1,
    13, 13, 14, 13, 13, 13, 13, 13, 13, 1, 13, 14, 2, 1, 2, 2, 1, 2, 14, 14, 13, 14, 13, 14, 13,
    1, 2, 14, 2, 1, 2, 1, 2, 1, 1, 2, 14, 1, 13, 14, 2, 2, 14, 55, 56, 1, 2, 1, 2, 1,
    1, 2, 1, 2, 2, 2, 13, 14, 13, 1, 2, 1, 13, 13, 14, 14, 14, 2, 1, 2, 13, 14, 13, 14, 13,
    1, 2, 1, 2, 14, 14, 13, 14, 13, 1, 2, 13, 13, 14, 13, 14, 14, 13, 14, 13, 14, 2, 1, 2, 1,
    1, 1, 1, 2, 2, 2, 2, 14, 13, 1, 2, 13, 14, 14, 13, 1, 2, 1, 2, 1, 13, 14, 13, 14, 13,
    1, 1, 13, 14, 14, 14, 14, 14, 1, 1, 1, 13, 14, 2, 1, 2, 55, 56, 14, 13, 14, 2, 1, 2, 1,
    13, 1, 1, 13, 14, 13, 14, 2, 1, 2, 13, 14, 13, 14, 13, 14, 67, 1, 2, 1, 13, 14, 13, 14, 13,
    1, 13, 13, 13, 14, 13, 14, 14, 1, 1, 13, 14, 1, 2, 1, 2, 55, 56, 14, 13, 14, 2, 1, 2, 1,
    13, 13, 13, 13, 13, 13, 13, 14, 1, 13, 13, 14, 13, 14, 13, 14, 67, 1, 2, 1, 13, 14, 13, 14, 13,
    1, 2, 1, 2, 1, 2, 1, 2, 13, 13, 14, 2, 1, 2, 1, 2, 1, 2, 67, 1, 2, 2, 1, 2, 1,
    13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 13, 14, 14, 13, 14, 13,
    1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1,
    13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13,
    1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1,
    13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13, 14, 13,
    1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1,
];

#[test]
fn test_empty_map_every_layout() {
    for layer in empty_2x2_layers() {
        let gids = decode(&layer).unwrap();
        assert_eq!(gids, vec![0, 0, 0, 0], "layer {layer:?}");
    }
}

#[test]
fn test_adventure_map() {
    let layer = EncodedLayer::base64(Compression::Zlib, ADVENTURE_ZLIB);
    let gids = decode(&layer).unwrap();
    assert_eq!(gids.len(), 25 * 25);
    assert_eq!(gids, ADVENTURE_GIDS);
}

#[test]
fn test_adventure_map_reencoded() {
    for format in [
        DataFormat::Csv,
        DataFormat::Base64(Compression::None),
        DataFormat::Base64(Compression::Gzip),
    ] {
        let layer = EncodedLayer::encode(format, &ADVENTURE_GIDS, 25).unwrap();
        assert_eq!(decode(&layer).unwrap(), ADVENTURE_GIDS, "{format}");
    }
}

#[test]
fn test_decoding_is_repeatable() {
    let decoder = LayerDecoder::new(DecoderConfig::default());
    let layer = EncodedLayer::base64(Compression::Zlib, ADVENTURE_ZLIB);

    let first = decoder.decode(&layer).unwrap();
    let second = decoder.decode(&layer).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_decoding() {
    let decoder = LayerDecoder::default();
    let layers = empty_2x2_layers();

    std::thread::scope(|scope| {
        let handles: Vec<_> = layers
            .iter()
            .map(|layer| scope.spawn(move || decoder.decode(layer)))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), vec![0, 0, 0, 0]);
        }
    });
}

#[test]
fn test_adventure_map_over_limit() {
    // 625 GIDs need 2500 bytes
    let decoder = LayerDecoder::new(DecoderConfig::default().with_max_decoded_bytes(2499));
    let layer = EncodedLayer::base64(Compression::Zlib, ADVENTURE_ZLIB);

    let err = decoder.decode(&layer).unwrap_err();
    assert_eq!(err.kind(), LayerDataErrorKind::ResourceLimit);

    let decoder = LayerDecoder::new(DecoderConfig::default().with_max_decoded_bytes(2500));
    assert_eq!(decoder.decode(&layer).unwrap().len(), 625);
}

#[test]
fn test_layer_from_json() {
    let layer: EncodedLayer = serde_json::from_str(
        r#"{"encoding": "base64", "compression": "gzip", "payload": "H4sIAAAAAAAAA2NgQAUAVUu77BAAAAA="}"#,
    )
    .unwrap();
    assert_eq!(decode(&layer).unwrap(), vec![0, 0, 0, 0]);
}
