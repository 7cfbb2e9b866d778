//! FLA2 compact document chunks.
//!
//! FLA2 is the binary alternative to the JSON document chunk: the same scene
//! description stored as a FlatBuffers table tree, with attribute maps and
//! material extension trees embedded as FlexBuffers blobs. Decoding walks the
//! tables directly off the chunk payload with bounds checks on every access,
//! so a hostile payload fails with an error instead of a panic.
//!
//! Numeric fields use `-1` as the "absent" sentinel where the JSON form would
//! omit the key. [`parse_fla2_bytes`] reverses those conventions and produces
//! the same [`Document`](crate::formats::gltf::Document) a JSON chunk would.

mod flex;
mod reader;
mod schema;
mod table;

pub use reader::parse_fla2_bytes;
