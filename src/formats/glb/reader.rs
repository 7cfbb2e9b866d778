//! GLB container reading and chunk dispatch

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::formats::fla2::parse_fla2_bytes;
use crate::formats::gltf::parse_gltf_json;

use super::{
    CHUNK_HEADER_SIZE, ChunkInfo, ChunkKind, GLB_HEADER_SIZE, GLB_MAGIC, GLB_VERSION,
    GlbContents, GlbHeader,
};

/// Read a GLB container from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, plus any error
/// [`parse_glb_bytes`] produces for the file's contents.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_glb<P: AsRef<Path>>(path: P) -> Result<GlbContents> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_glb_bytes(&buffer)
}

/// Decode a GLB container from bytes into its document and buffer payloads.
///
/// The first JSON or FLA2 chunk, whichever comes first, becomes the document;
/// later document chunks are skipped with a warning. Every "BIN\0" payload is
/// collected in container order. Unrecognized chunk tags are skipped.
///
/// # Errors
///
/// Returns header and chunk-walk errors from [`chunk_infos`],
/// [`Error::MissingDocumentChunk`] if no document chunk exists, and any
/// document decode error from the JSON or FLA2 path.
///
/// [`Error::MissingDocumentChunk`]: crate::Error::MissingDocumentChunk
pub fn parse_glb_bytes(data: &[u8]) -> Result<GlbContents> {
    let chunks = chunk_infos(data)?;

    let mut document = None;
    let mut buffers = Vec::new();

    for (index, chunk) in chunks.iter().enumerate() {
        let payload = &data[chunk.offset..chunk.offset + chunk.length];
        match chunk.kind {
            ChunkKind::Json | ChunkKind::Fla2 => {
                if document.is_some() {
                    tracing::warn!(
                        "skipping extra document chunk {} ({:?}) at offset {}",
                        index,
                        chunk.kind,
                        chunk.offset
                    );
                    continue;
                }
                document = Some(match chunk.kind {
                    ChunkKind::Json => parse_gltf_json(payload)?,
                    _ => parse_fla2_bytes(payload)?,
                });
            }
            ChunkKind::Bin => buffers.push(payload.to_vec()),
            ChunkKind::Other(tag) => {
                tracing::debug!("skipping unknown chunk {} with tag {:#010x}", index, tag);
            }
        }
    }

    let document = document.ok_or(Error::MissingDocumentChunk)?;
    tracing::debug!(
        "decoded GLB: {} chunk(s), {} buffer payload(s)",
        chunks.len(),
        buffers.len()
    );

    Ok(GlbContents { document, buffers })
}

/// Validate the 12-byte container header.
///
/// Checks, in order: input length, magic, version, and that the declared
/// total length matches the input length exactly.
///
/// # Errors
///
/// Returns [`Error::GlbTooShort`], [`Error::InvalidGlbMagic`],
/// [`Error::UnsupportedGlbVersion`], or [`Error::GlbLengthMismatch`].
///
/// [`Error::GlbTooShort`]: crate::Error::GlbTooShort
/// [`Error::InvalidGlbMagic`]: crate::Error::InvalidGlbMagic
/// [`Error::UnsupportedGlbVersion`]: crate::Error::UnsupportedGlbVersion
/// [`Error::GlbLengthMismatch`]: crate::Error::GlbLengthMismatch
pub fn validate_glb_header(data: &[u8]) -> Result<GlbHeader> {
    if data.len() < GLB_HEADER_SIZE {
        return Err(Error::GlbTooShort { length: data.len() });
    }

    let mut cursor = Cursor::new(data);

    let magic = cursor.read_u32::<LittleEndian>()?;
    if magic != GLB_MAGIC {
        return Err(Error::InvalidGlbMagic { found: magic });
    }

    let version = cursor.read_u32::<LittleEndian>()?;
    if version != GLB_VERSION {
        return Err(Error::UnsupportedGlbVersion { version });
    }

    let length = cursor.read_u32::<LittleEndian>()?;
    if length as usize != data.len() {
        return Err(Error::GlbLengthMismatch {
            declared: length,
            actual: data.len(),
        });
    }

    Ok(GlbHeader {
        magic,
        version,
        length,
    })
}

/// Walk the chunk sequence and return a descriptor per chunk.
///
/// Chunks must tile the input exactly: each iteration consumes an 8-byte
/// chunk header plus the declared payload, and the final chunk must end at
/// the container's last byte. Payload alignment is not enforced; a container
/// with unpadded chunks parses as long as its lengths are consistent.
///
/// # Errors
///
/// Returns header errors from [`validate_glb_header`],
/// [`Error::TruncatedChunkHeader`] if a chunk header crosses the end of the
/// input, or [`Error::ChunkOutOfBounds`] if a declared payload does.
///
/// [`Error::TruncatedChunkHeader`]: crate::Error::TruncatedChunkHeader
/// [`Error::ChunkOutOfBounds`]: crate::Error::ChunkOutOfBounds
pub fn chunk_infos(data: &[u8]) -> Result<Vec<ChunkInfo>> {
    validate_glb_header(data)?;

    let mut chunks = Vec::new();
    let mut offset = GLB_HEADER_SIZE;
    let mut cursor = Cursor::new(data);

    while offset < data.len() {
        if data.len() - offset < CHUNK_HEADER_SIZE {
            return Err(Error::TruncatedChunkHeader {
                index: chunks.len(),
                offset,
            });
        }

        cursor.set_position(offset as u64);
        let length = cursor.read_u32::<LittleEndian>()? as usize;
        let tag = cursor.read_u32::<LittleEndian>()?;

        let payload_offset = offset + CHUNK_HEADER_SIZE;
        let payload_end = payload_offset
            .checked_add(length)
            .filter(|end| *end <= data.len())
            .ok_or(Error::ChunkOutOfBounds {
                index: chunks.len(),
                offset: payload_offset,
                length,
                available: data.len(),
            })?;

        let kind = ChunkKind::from_tag(tag);
        tracing::debug!(
            "chunk {}: {:?}, {} byte(s) at offset {}",
            chunks.len(),
            kind,
            length,
            payload_offset
        );

        chunks.push(ChunkInfo {
            offset: payload_offset,
            length,
            kind,
        });
        offset = payload_end;
    }

    Ok(chunks)
}
