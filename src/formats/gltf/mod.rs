//! glTF 2.0 document model and text (JSON) document decoding.
//!
//! The [`Document`] types here are the shared output schema: the JSON path
//! deserializes straight into them, and the FLA2 path
//! ([`crate::formats::fla2`]) maps its compact tables into the same types.

pub mod document;
pub mod reader;

pub use document::{
    Accessor, AccessorType, Animation, AnimationChannel, AnimationChannelTarget,
    AnimationSampler, Asset, Buffer, BufferView, Document, Image, Interpolation,
    Material, Mesh, Node, Primitive, Sampler, Scene, Skin, TargetPath, Texture,
};
pub use reader::{parse_gltf_json, read_gltf_json};
