//! GLB binary container format
//!
//! A container is a 12-byte header followed by a sequence of chunks. Each
//! chunk is an 8-byte header (payload length + type tag) and a payload. The
//! document travels in a "JSON" chunk (UTF-8 text) or a "FLA2" chunk (compact
//! FlatBuffers tables); raw buffer payloads travel in "BIN\0" chunks. Chunks
//! with any other tag are skipped.

mod reader;

pub use reader::{chunk_infos, parse_glb_bytes, read_glb, validate_glb_header};

use crate::formats::gltf::Document;

/// "glTF" magic signature (little-endian)
pub const GLB_MAGIC: u32 = 0x46546C67;

/// Supported container version
pub const GLB_VERSION: u32 = 2;

/// Size of the container header (magic + version + total length)
pub const GLB_HEADER_SIZE: usize = 12;

/// Size of each chunk header (payload length + type tag)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// "JSON" chunk type tag (little-endian)
pub const CHUNK_JSON: u32 = 0x4E4F534A;

/// "FLA2" chunk type tag (little-endian)
pub const CHUNK_FLA2: u32 = 0x32414C46;

/// "BIN\0" chunk type tag (little-endian)
pub const CHUNK_BIN: u32 = 0x004E4942;

/// Validated container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    /// Magic signature (always [`GLB_MAGIC`] once validated)
    pub magic: u32,
    /// Container version (always [`GLB_VERSION`] once validated)
    pub version: u32,
    /// Total container length in bytes, including the header
    pub length: u32,
}

/// Classification of a chunk's type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// UTF-8 JSON document chunk
    Json,
    /// Compact FlatBuffers document chunk
    Fla2,
    /// Binary buffer payload chunk
    Bin,
    /// Unrecognized tag, skipped during decoding
    Other(u32),
}

impl ChunkKind {
    /// Classify a raw chunk type tag.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            CHUNK_JSON => Self::Json,
            CHUNK_FLA2 => Self::Fla2,
            CHUNK_BIN => Self::Bin,
            other => Self::Other(other),
        }
    }

    /// Whether this chunk carries the document, in either encoding.
    pub fn is_document(self) -> bool {
        matches!(self, Self::Json | Self::Fla2)
    }
}

/// Location of one chunk's payload within the container
///
/// Offsets index the original input slice and are validated against it before
/// the descriptor is produced, so `offset..offset + length` is always in
/// bounds for the buffer the walk ran over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkInfo {
    /// Byte offset of the payload (past the 8-byte chunk header)
    pub offset: usize,
    /// Payload length in bytes (may be zero)
    pub length: usize,
    /// Chunk type classification
    pub kind: ChunkKind,
}

/// Fully decoded container: the document plus its binary buffer payloads
///
/// `buffers` holds one owned payload per "BIN\0" chunk, in container order.
#[derive(Debug, Clone, PartialEq)]
pub struct GlbContents {
    /// The scene document, from the first JSON or FLA2 chunk
    pub document: Document,
    /// Binary buffer payloads in encounter order
    pub buffers: Vec<Vec<u8>>,
}
