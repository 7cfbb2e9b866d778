//! File format handlers for GLB scene containers
//!
//! The container walk lives in [`glb`]; the two document encodings it can
//! carry live in [`gltf`] (plain JSON) and [`fla2`] (compact FlatBuffers).

pub mod fla2;
pub mod glb;
pub mod gltf;

// Re-export the container entry points
pub use glb::{GlbContents, parse_glb_bytes, read_glb};

// Re-export main document types
pub use fla2::parse_fla2_bytes;
pub use gltf::{Document, parse_gltf_json, read_gltf_json};
