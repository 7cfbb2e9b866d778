//! # glbcore
//!
//! A pure-Rust reader for GLB scene containers.
//!
//! ## Supported Formats
//!
//! - **GLB containers** - Chunked binary files carrying a scene document and its binary payloads
//! - **JSON documents** - Plain UTF-8 scene descriptions in the glTF 2.0 schema
//! - **FLA2 documents** - The same schema stored as compact FlatBuffers tables
//!
//! ## Quick Start
//!
//! ### Reading a Container
//!
//! ```no_run
//! use glbcore::formats::glb::read_glb;
//!
//! // Decode the document chunk and collect binary payloads in order
//! let contents = read_glb("model.glb")?;
//! println!("generator: {}", contents.document.asset.generator);
//! println!("{} binary chunks", contents.buffers.len());
//! # Ok::<(), glbcore::Error>(())
//! ```
//!
//! ### Decoding from Memory
//!
//! ```no_run
//! use glbcore::formats::glb::parse_glb_bytes;
//!
//! let data = std::fs::read("model.glb")?;
//! let contents = parse_glb_bytes(&data)?;
//! # Ok::<(), glbcore::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! The prelude provides convenient access to commonly used types:
//!
//! ```
//! use glbcore::prelude::*;
//!
//! // Now you have access to:
//! // - parse_glb_bytes, read_glb, GlbContents
//! // - Document, parse_gltf_json, parse_fla2_bytes
//! // - Error, Result
//! ```

pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::fla2::parse_fla2_bytes;
    pub use crate::formats::glb::{GlbContents, parse_glb_bytes, read_glb};
    pub use crate::formats::gltf::{Document, parse_gltf_json, read_gltf_json};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
