//! Error types for layer data decoding.

use thiserror::Error;

use crate::format::Compression;

/// Coarse classification of a [`LayerDataError`].
///
/// Useful for callers that only care about which stage rejected the layer,
/// e.g. to decide whether to skip a single layer or abort the whole map load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerDataErrorKind {
    /// Malformed text encoding or binary layout.
    Format,
    /// Corrupt, truncated or checksum-failing compressed stream.
    Compression,
    /// Decoded data would exceed the configured size ceiling.
    ResourceLimit,
    /// Encoding/compression tags outside the recognized set.
    UnsupportedMode,
}

#[derive(Debug, Error)]
pub enum LayerDataError {
    #[error("Invalid base64 layer data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid CSV tile id {token:?} at position {position}")]
    CsvToken { position: usize, token: String },

    #[error("Binary layer data is {len} bytes long, which is not a multiple of 4")]
    UnalignedData { len: usize },

    #[error("Layer data has text content but no encoding")]
    UnexpectedPayload,

    #[error("Corrupt {compression} layer data: {source}")]
    Decompression {
        compression: Compression,
        #[source]
        source: std::io::Error,
    },

    #[error("Decoded layer data exceeds the limit of {limit} bytes")]
    LimitExceeded { limit: usize },

    #[error("Unsupported layer data encoding {0:?}")]
    UnsupportedEncoding(String),

    #[error("Unsupported layer data compression {0:?}")]
    UnsupportedCompression(String),

    #[error("Compression {compression:?} cannot be used with encoding {encoding:?}")]
    InvalidCombination {
        encoding: String,
        compression: String,
    },
}

impl LayerDataError {
    /// Which decoding stage produced this error.
    pub fn kind(&self) -> LayerDataErrorKind {
        match self {
            Self::Base64(_)
            | Self::CsvToken { .. }
            | Self::UnalignedData { .. }
            | Self::UnexpectedPayload => LayerDataErrorKind::Format,
            Self::Decompression { .. } => LayerDataErrorKind::Compression,
            Self::LimitExceeded { .. } => LayerDataErrorKind::ResourceLimit,
            Self::UnsupportedEncoding(_)
            | Self::UnsupportedCompression(_)
            | Self::InvalidCombination { .. } => LayerDataErrorKind::UnsupportedMode,
        }
    }
}
