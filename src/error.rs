//! Error types for `glbcore`

use thiserror::Error;

/// The error type for `glbcore` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== GLB Container Errors ====================
    /// The input is too short to hold a GLB header.
    #[error("GLB too short: {length} bytes (header requires 12)")]
    GlbTooShort {
        /// Total length of the input in bytes.
        length: usize,
    },

    /// The input does not start with the GLB magic.
    #[error("invalid GLB magic: expected 0x46546C67 (glTF), found {found:#010x}")]
    InvalidGlbMagic {
        /// The magic value found in the header.
        found: u32,
    },

    /// The GLB container version is not supported.
    #[error("unsupported GLB version: {version} (supported: 2)")]
    UnsupportedGlbVersion {
        /// The version number found in the header.
        version: u32,
    },

    /// The header's total-length field does not match the input length.
    #[error("GLB length mismatch: header declares {declared} bytes, input is {actual}")]
    GlbLengthMismatch {
        /// The length declared in the header.
        declared: u32,
        /// The actual input length in bytes.
        actual: usize,
    },

    /// A chunk header starts inside the input but does not fit.
    #[error("truncated chunk header for chunk {index} at offset {offset}")]
    TruncatedChunkHeader {
        /// Zero-based index of the chunk.
        index: usize,
        /// Byte offset where the chunk header starts.
        offset: usize,
    },

    /// A chunk's declared payload extends past the end of the input.
    #[error("chunk {index} payload out of bounds: {length} bytes at offset {offset}, input is {available}")]
    ChunkOutOfBounds {
        /// Zero-based index of the chunk.
        index: usize,
        /// Byte offset where the payload starts.
        offset: usize,
        /// Declared payload length in bytes.
        length: usize,
        /// Total input length in bytes.
        available: usize,
    },

    /// The container holds no JSON or FLA2 document chunk.
    #[error("GLB contains no document chunk (JSON or FLA2)")]
    MissingDocumentChunk,

    // ==================== FLA2 Document Errors ====================
    /// An FLA2 offset or length points outside the chunk payload.
    #[error("FLA2 out-of-bounds read at {path}: need {end} bytes, chunk has {available}")]
    Fla2OutOfBounds {
        /// Path to the field being read, e.g. `accessors[3].max`.
        path: String,
        /// End of the byte range the read required.
        end: usize,
        /// Total bytes available in the chunk payload.
        available: usize,
    },

    /// An FLA2 table's vtable is structurally invalid (placed before the
    /// chunk start, or shorter than its two mandatory size words).
    #[error("malformed FLA2 table at {path}")]
    Fla2MalformedTable {
        /// Path to the table being resolved.
        path: String,
    },

    /// A field the document schema requires is absent from the FLA2 table.
    #[error("FLA2 document missing required field: {path}")]
    Fla2MissingField {
        /// Path to the missing field.
        path: String,
    },

    /// An FLA2 enum field holds a value outside its known set.
    #[error("unknown FLA2 enum value at {path}: {value}")]
    Fla2UnknownEnum {
        /// Path to the enum field.
        path: String,
        /// The value found on the wire.
        value: u32,
    },

    /// An FLA2 index field holds a negative value other than the absent sentinel.
    #[error("negative FLA2 index at {path}: {value}")]
    Fla2NegativeIndex {
        /// Path to the index field.
        path: String,
        /// The value found on the wire.
        value: i32,
    },

    /// A FlexBuffers blob embedded in the FLA2 document could not be decoded.
    #[error("failed to decode value blob at {path}: {message}")]
    Fla2Blob {
        /// Path to the blob field.
        path: String,
        /// The decoder's error message.
        message: String,
    },

    // ==================== JSON Document Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for `glbcore` operations.
pub type Result<T> = std::result::Result<T, Error>;
