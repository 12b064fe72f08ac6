//! Encoding and compression modes of a `<data>` element.

use std::fmt;
use std::str::FromStr;

use crate::error::LayerDataError;

/// Compression applied to base64-encoded layer data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Decoded bytes are the binary GID buffer.
    #[default]
    None,
    /// zlib-wrapped deflate stream.
    Zlib,
    /// gzip member (header, deflate stream, CRC32 and length trailer).
    Gzip,
}

impl Compression {
    /// The `compression` attribute value Tiled writes for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Zlib => "zlib",
            Self::Gzip => "gzip",
        }
    }
}

impl FromStr for Compression {
    type Err = LayerDataError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "" => Ok(Self::None),
            "zlib" => Ok(Self::Zlib),
            "gzip" => Ok(Self::Gzip),
            other => Err(LayerDataError::UnsupportedCompression(other.to_string())),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("uncompressed"),
            other => f.write_str(other.tag()),
        }
    }
}

/// How a tile layer's data is stored.
///
/// Built from the raw `encoding`/`compression` attribute pair with
/// [`DataFormat::from_tags`], so invalid combinations never reach the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// No encoding: one explicit `<tile gid="..."/>` record per cell.
    Tiles,
    /// Comma separated decimal GIDs.
    Csv,
    /// Base64 text holding little-endian `u32` GIDs, optionally compressed.
    Base64(Compression),
}

impl DataFormat {
    /// Parse the `encoding` and `compression` attribute values.
    ///
    /// Compression is only accepted together with base64 encoding.
    pub fn from_tags(encoding: &str, compression: &str) -> Result<Self, LayerDataError> {
        match encoding {
            "base64" => Ok(Self::Base64(compression.parse()?)),
            "csv" | "" => {
                if compression.parse::<Compression>()? != Compression::None {
                    return Err(LayerDataError::InvalidCombination {
                        encoding: encoding.to_string(),
                        compression: compression.to_string(),
                    });
                }
                Ok(if encoding.is_empty() {
                    Self::Tiles
                } else {
                    Self::Csv
                })
            }
            other => Err(LayerDataError::UnsupportedEncoding(other.to_string())),
        }
    }

    /// The `(encoding, compression)` attribute pair for this format.
    pub fn tags(self) -> (&'static str, &'static str) {
        match self {
            Self::Tiles => ("", ""),
            Self::Csv => ("csv", ""),
            Self::Base64(compression) => ("base64", compression.tag()),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tiles => f.write_str("tiles"),
            Self::Csv => f.write_str("csv"),
            Self::Base64(Compression::None) => f.write_str("base64"),
            Self::Base64(compression) => write!(f, "base64+{}", compression.tag()),
        }
    }
}
