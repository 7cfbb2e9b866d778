//! FLA2 wire schema: field ids, wire defaults, and enum values.
//!
//! The chunk payload is a FlatBuffers-encoded table tree. Field ids below are
//! the decoding contract; a writer may omit any field whose value equals the
//! wire default shown, and the reader reconstructs it. Ids map to vtable
//! voffsets as `4 + 2 * id`.

/// Sentinel stored in index fields to mean "absent".
pub(crate) const ABSENT_INDEX: i32 = -1;

/// Wire default for sampler wrap modes (GL `REPEAT`).
pub(crate) const WRAP_REPEAT: u32 = 10497;

/// Wire default for primitive mode (GL `TRIANGLES`).
pub(crate) const MODE_TRIANGLES: u32 = 4;

/// Valid accessor component types (GL scalar type constants).
pub(crate) const COMPONENT_TYPES: [u32; 6] = [5120, 5121, 5122, 5123, 5125, 5126];

/// Only the low 16 bits of a stored component type are meaningful.
pub(crate) const COMPONENT_TYPE_MASK: u32 = 0xFFFF;

/// Accepted `byteStride` range; values outside it are treated as unset.
pub(crate) const BYTE_STRIDE_MIN: u32 = 4;
pub(crate) const BYTE_STRIDE_MAX: u32 = 252;

/// Root document table.
pub(crate) mod root {
    pub const EXTENSIONS_USED: u16 = 0; // [string]
    pub const EXTENSIONS_REQUIRED: u16 = 1; // [string]
    pub const ACCESSORS: u16 = 2; // [Accessor]
    pub const ANIMATIONS: u16 = 3; // [Animation]
    pub const ASSET: u16 = 4; // Asset, required
    pub const BUFFERS: u16 = 5; // [Buffer]
    pub const BUFFER_VIEWS: u16 = 6; // [BufferView]
    pub const CAMERAS: u16 = 7; // reserved, not decoded
    pub const IMAGES: u16 = 8; // [Image]
    pub const MATERIALS: u16 = 9; // [Material]
    pub const MESHES: u16 = 10; // [Mesh]
    pub const NODES: u16 = 11; // [Node]
    pub const SAMPLERS: u16 = 12; // [Sampler]
    pub const SCENE: u16 = 13; // i32, default -1
    pub const SCENES: u16 = 14; // [Scene]
    pub const SKINS: u16 = 15; // [Skin]
    pub const TEXTURES: u16 = 16; // [Texture]
}

pub(crate) mod accessor {
    pub const BUFFER_VIEW: u16 = 0; // u32
    pub const BYTE_OFFSET: u16 = 1; // u32
    pub const COMPONENT_TYPE: u16 = 2; // u32, low 16 bits used
    pub const NORMALIZED: u16 = 3; // bool
    pub const COUNT: u16 = 4; // u32
    pub const TYPE: u16 = 5; // u8 enum, see `accessor_type`
    pub const MAX: u16 = 6; // [f32]
    pub const MIN: u16 = 7; // [f32]
    pub const SPARSE: u16 = 8; // reserved, not decoded
}

pub(crate) mod animation {
    pub const CHANNELS: u16 = 0; // [AnimationChannel]
    pub const SAMPLERS: u16 = 1; // [AnimationSampler]
}

pub(crate) mod channel {
    pub const SAMPLER: u16 = 0; // u32
    pub const TARGET: u16 = 1; // AnimationChannelTarget, required
}

pub(crate) mod channel_target {
    pub const NODE: u16 = 0; // u32
    pub const PATH: u16 = 1; // u8 enum, see `target_path`
}

pub(crate) mod animation_sampler {
    pub const INPUT: u16 = 0; // u32
    pub const INTERPOLATION: u16 = 1; // u8 enum, see `interpolation`
    pub const OUTPUT: u16 = 2; // u32
}

pub(crate) mod asset {
    pub const GENERATOR: u16 = 0; // string, required
    pub const VERSION: u16 = 1; // string, required
}

pub(crate) mod buffer {
    pub const BYTE_LENGTH: u16 = 0; // u32
    pub const URI: u16 = 1; // string
}

pub(crate) mod buffer_view {
    pub const BUFFER: u16 = 0; // i32, default -1
    pub const BYTE_OFFSET: u16 = 1; // u32
    pub const BYTE_LENGTH: u16 = 2; // u32
    pub const BYTE_STRIDE: u16 = 3; // u32
    pub const TARGET: u16 = 4; // u32, 0 = unset
}

pub(crate) mod image {
    pub const URI: u16 = 0; // string
    pub const MIME_TYPE: u16 = 1; // string
    pub const BUFFER_VIEW: u16 = 2; // i32, default -1
}

pub(crate) mod material {
    pub const EXTENSIONS: u16 = 0; // [u8], FlexBuffers blob
}

pub(crate) mod mesh {
    pub const PRIMITIVES: u16 = 0; // [Primitive]
    pub const WEIGHTS: u16 = 1; // [f32]
}

pub(crate) mod primitive {
    pub const ATTRIBUTES: u16 = 0; // [u8], FlexBuffers blob, required
    pub const INDICES: u16 = 1; // i32, default -1
    pub const MATERIAL: u16 = 2; // i32, default -1
    pub const MODE: u16 = 3; // u32, default 4
    pub const TARGETS: u16 = 4; // reserved, not decoded
}

pub(crate) mod node {
    pub const CAMERA: u16 = 0; // i32, default -1
    pub const CHILDREN: u16 = 1; // [u32]
    pub const SKIN: u16 = 2; // i32, default -1
    pub const MATRIX: u16 = 3; // [f32]
    pub const MESH: u16 = 4; // i32, default -1
    pub const ROTATION: u16 = 5; // [f32]
    pub const SCALE: u16 = 6; // [f32]
    pub const TRANSLATION: u16 = 7; // [f32]
    pub const WEIGHTS: u16 = 8; // [f32]
    pub const NAME: u16 = 9; // string
}

pub(crate) mod sampler {
    pub const MAG_FILTER: u16 = 0; // u32
    pub const MIN_FILTER: u16 = 1; // u32
    pub const WRAP_S: u16 = 2; // u32, default 10497
    pub const WRAP_T: u16 = 3; // u32, default 10497
}

pub(crate) mod scene {
    pub const NODES: u16 = 0; // [u32]
}

pub(crate) mod skin {
    pub const INVERSE_BIND_MATRICES: u16 = 0; // u32
    pub const SKELETON: u16 = 1; // i32, default -1
    pub const JOINTS: u16 = 2; // [u32]
    pub const NAME: u16 = 3; // string
}

pub(crate) mod texture {
    pub const SAMPLER: u16 = 0; // u32
    pub const SOURCE: u16 = 1; // u32
}

/// `Accessor.type` enum values.
pub(crate) mod accessor_type {
    pub const SCALAR: u8 = 0;
    pub const VEC2: u8 = 1;
    pub const VEC3: u8 = 2;
    pub const VEC4: u8 = 3;
    pub const MAT2: u8 = 4;
    pub const MAT3: u8 = 5;
    pub const MAT4: u8 = 6;
}

/// `AnimationChannelTarget.path` enum values.
pub(crate) mod target_path {
    pub const TRANSLATION: u8 = 0;
    pub const ROTATION: u8 = 1;
    pub const SCALE: u8 = 2;
    pub const WEIGHTS: u8 = 3;
}

/// `AnimationSampler.interpolation` enum values.
pub(crate) mod interpolation {
    pub const LINEAR: u8 = 0;
    pub const STEP: u8 = 1;
    pub const CUBICSPLINE: u8 = 2;
}
