//! Bounded zlib and gzip decompression.
//!
//! Output buffers never grow past the caller's ceiling: capacity is reserved
//! in steps clamped to the limit, and anything beyond it is reported as
//! [`LayerDataError::LimitExceeded`] instead of being allocated.

use std::io::{self, Read};

use flate2::read::GzDecoder;
use flate2::{Decompress, FlushDecompress, Status};

use crate::error::LayerDataError;
use crate::format::Compression;

/// Step size for output growth and reads.
const CHUNK_SIZE: usize = 16 * 1024;

/// Decompress `input` according to `compression`, producing at most `limit` bytes.
pub(crate) fn decompress(
    compression: Compression,
    input: Vec<u8>,
    limit: usize,
) -> Result<Vec<u8>, LayerDataError> {
    match compression {
        Compression::None => {
            if input.len() > limit {
                return Err(LayerDataError::LimitExceeded { limit });
            }
            Ok(input)
        }
        Compression::Zlib => inflate_zlib(&input, limit),
        Compression::Gzip => read_bounded(GzDecoder::new(input.as_slice()), Compression::Gzip, limit),
    }
}

/// Inflate a zlib stream, requiring it to reach its end marker.
///
/// The low-level inflater is used instead of `ZlibDecoder` so a truncated
/// stream is reported rather than read as a short, valid one.
fn inflate_zlib(input: &[u8], limit: usize) -> Result<Vec<u8>, LayerDataError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::new();

    loop {
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let remaining = &input[consumed..];

        // FlushDecompress::Finish would demand the whole output in one call
        let result = if out.len() < limit {
            let additional = CHUNK_SIZE.min(limit - out.len());
            reserve_bounded(&mut out, additional, limit);
            inflater.decompress_vec(remaining, &mut out, FlushDecompress::None)
        } else {
            // At the ceiling: a single extra byte of output means the stream is too big
            let mut overflow = [0u8; 1];
            let result = inflater.decompress(remaining, &mut overflow, FlushDecompress::None);
            if inflater.total_out() > produced {
                return Err(LayerDataError::LimitExceeded { limit });
            }
            result
        };
        let status = result
            .map_err(|e| corrupt(Compression::Zlib, io::Error::new(io::ErrorKind::InvalidData, e)))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        if inflater.total_in() as usize == consumed && inflater.total_out() == produced {
            return Err(corrupt(
                Compression::Zlib,
                io::Error::new(io::ErrorKind::UnexpectedEof, "truncated zlib stream"),
            ));
        }
    }
}

/// Read a decoder to the end without letting the output exceed `limit` bytes.
fn read_bounded(
    mut reader: impl Read,
    compression: Compression,
    limit: usize,
) -> Result<Vec<u8>, LayerDataError> {
    let mut out = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut chunk) {
            Ok(0) => return Ok(out),
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(corrupt(compression, e)),
        };

        if read > limit - out.len() {
            return Err(LayerDataError::LimitExceeded { limit });
        }

        reserve_bounded(&mut out, read, limit);
        out.extend_from_slice(&chunk[..read]);
    }
}

/// Make room for `additional` bytes, doubling capacity but never past `limit`.
///
/// Callers guarantee `out.len() + additional <= limit`.
fn reserve_bounded(out: &mut Vec<u8>, additional: usize, limit: usize) {
    let needed = out.len() + additional;
    if needed <= out.capacity() {
        return;
    }

    let target = needed.max(out.capacity().saturating_mul(2)).min(limit);
    out.reserve_exact(target - out.len());
}

fn corrupt(compression: Compression, source: io::Error) -> LayerDataError {
    LayerDataError::Decompression {
        compression,
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::{GzEncoder, ZlibEncoder};

    use super::*;
    use crate::config::DecoderConfig;
    use crate::error::LayerDataErrorKind;

    fn no_limit() -> usize {
        DecoderConfig::unlimited().max_decoded_bytes
    }

    fn zlib(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    fn gzip(bytes: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(bytes).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_inflate_zlib() {
        let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
        let out = decompress(Compression::Zlib, zlib(&data), no_limit()).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_inflate_gzip() {
        let data: Vec<u8> = (0..50_000u32).map(|i| (i % 13) as u8).collect();
        let out = decompress(Compression::Gzip, gzip(&data), no_limit()).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_empty_streams() {
        assert!(decompress(Compression::Zlib, zlib(&[]), 0).unwrap().is_empty());
        assert!(decompress(Compression::Gzip, gzip(&[]), 0).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_zlib_is_corrupt() {
        let data = vec![7u8; 4096];
        let mut stream = zlib(&data);
        stream.truncate(stream.len() - 6);

        let err = decompress(Compression::Zlib, stream, no_limit()).unwrap_err();
        assert_eq!(err.kind(), LayerDataErrorKind::Compression);
    }

    #[test]
    fn test_gzip_checksum_mismatch() {
        let mut stream = gzip(&[1, 2, 3, 4, 5, 6, 7, 8]);
        // CRC32 is the first half of the 8-byte trailer
        let crc_index = stream.len() - 8;
        stream[crc_index] ^= 0xFF;

        let err = decompress(Compression::Gzip, stream, no_limit()).unwrap_err();
        assert!(matches!(
            err,
            LayerDataError::Decompression {
                compression: Compression::Gzip,
                ..
            }
        ));
    }

    #[test]
    fn test_gzip_length_mismatch() {
        let mut stream = gzip(&[1, 2, 3, 4, 5, 6, 7, 8]);
        // ISIZE is the last 4 bytes of the trailer
        let size_index = stream.len() - 4;
        stream[size_index] ^= 0x01;

        let err = decompress(Compression::Gzip, stream, no_limit()).unwrap_err();
        assert_eq!(err.kind(), LayerDataErrorKind::Compression);
    }

    #[test]
    fn test_truncated_gzip_is_corrupt() {
        let data = vec![7u8; 4096];
        let mut stream = gzip(&data);
        stream.truncate(stream.len() - 6);

        let err = decompress(Compression::Gzip, stream, no_limit()).unwrap_err();
        assert!(matches!(
            err,
            LayerDataError::Decompression {
                compression: Compression::Gzip,
                ..
            }
        ));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let data = vec![0u8; 1024];
        let out = decompress(Compression::Zlib, zlib(&data), 1024).unwrap();
        assert_eq!(out.len(), 1024);

        let out = decompress(Compression::Gzip, gzip(&data), 1024).unwrap();
        assert_eq!(out.len(), 1024);
    }

    #[test]
    fn test_limit_exceeded() {
        let data = vec![0u8; 1025];

        let err = decompress(Compression::Zlib, zlib(&data), 1024).unwrap_err();
        assert!(matches!(err, LayerDataError::LimitExceeded { limit: 1024 }));

        let err = decompress(Compression::Gzip, gzip(&data), 1024).unwrap_err();
        assert!(matches!(err, LayerDataError::LimitExceeded { limit: 1024 }));

        let err = decompress(Compression::None, data, 1024).unwrap_err();
        assert_eq!(err.kind(), LayerDataErrorKind::ResourceLimit);
    }

    #[test]
    fn test_reserve_never_passes_limit() {
        let mut out = Vec::new();
        for _ in 0..10 {
            let additional = 300.min(1000 - out.len());
            reserve_bounded(&mut out, additional, 1000);
            out.resize(out.len() + additional, 0);
            assert!(out.capacity() <= 1000);
        }
        assert_eq!(out.len(), 1000);
    }
}
