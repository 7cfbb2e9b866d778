//! Compact (FLA2) document decoding.
//!
//! Maps the FlatBuffers tables described in [`super::schema`] into the shared
//! [`Document`] types, reproducing the writer's storage conventions: `-1`
//! index sentinels, wire defaults that suppress emission (sampler wrap modes,
//! out-of-range byte strides), sequences that only appear when nonempty, and
//! FlexBuffers blobs for attribute maps and material extensions.

use crate::error::{Error, Result};
use crate::formats::gltf::{
    Accessor, AccessorType, Animation, AnimationChannel, AnimationChannelTarget,
    AnimationSampler, Asset, Buffer, BufferView, Document, Image, Interpolation,
    Material, Mesh, Node, Primitive, Sampler, Scene, Skin, TargetPath, Texture,
};

use super::flex;
use super::schema;
use super::table::Fla2Table;

/// Decode an FLA2 chunk payload into a document.
///
/// # Errors
///
/// Returns [`Error::Fla2OutOfBounds`] or [`Error::Fla2MalformedTable`] when
/// the table structure references bytes outside the payload,
/// [`Error::Fla2MissingField`] when a required field is absent,
/// [`Error::Fla2UnknownEnum`] or [`Error::Fla2NegativeIndex`] when a stored
/// value is outside its documented set, and [`Error::Fla2Blob`] when an
/// embedded value blob cannot be decoded. All errors name the offending
/// field's path, e.g. `accessors[3].componentType`.
///
/// [`Error::Fla2OutOfBounds`]: crate::Error::Fla2OutOfBounds
/// [`Error::Fla2MalformedTable`]: crate::Error::Fla2MalformedTable
/// [`Error::Fla2MissingField`]: crate::Error::Fla2MissingField
/// [`Error::Fla2UnknownEnum`]: crate::Error::Fla2UnknownEnum
/// [`Error::Fla2NegativeIndex`]: crate::Error::Fla2NegativeIndex
/// [`Error::Fla2Blob`]: crate::Error::Fla2Blob
pub fn parse_fla2_bytes(data: &[u8]) -> Result<Document> {
    let root = Fla2Table::root(data, "document")?;

    if root.has_field(schema::root::CAMERAS) {
        tracing::debug!("camera definitions in FLA2 document are not decoded");
    }

    let document = Document {
        asset: map_asset(&root)?,
        extensions_used: string_vector(&root, schema::root::EXTENSIONS_USED, "extensionsUsed")?,
        extensions_required: string_vector(
            &root,
            schema::root::EXTENSIONS_REQUIRED,
            "extensionsRequired",
        )?,
        scene: sentinel_index(
            root.i32_field(schema::root::SCENE, schema::ABSENT_INDEX, "scene")?,
            "scene",
        )?,
        accessors: table_collection(&root, schema::root::ACCESSORS, "accessors", map_accessor)?,
        animations: table_collection(&root, schema::root::ANIMATIONS, "animations", map_animation)?,
        buffers: table_collection(&root, schema::root::BUFFERS, "buffers", map_buffer)?,
        buffer_views: table_collection(
            &root,
            schema::root::BUFFER_VIEWS,
            "bufferViews",
            map_buffer_view,
        )?,
        images: table_collection(&root, schema::root::IMAGES, "images", map_image)?,
        materials: table_collection(&root, schema::root::MATERIALS, "materials", map_material)?,
        meshes: table_collection(&root, schema::root::MESHES, "meshes", map_mesh)?,
        nodes: table_collection(&root, schema::root::NODES, "nodes", map_node)?,
        samplers: table_collection(&root, schema::root::SAMPLERS, "samplers", map_sampler)?,
        scenes: table_collection(&root, schema::root::SCENES, "scenes", map_scene)?,
        skins: table_collection(&root, schema::root::SKINS, "skins", map_skin)?,
        textures: table_collection(&root, schema::root::TEXTURES, "textures", map_texture)?,
    };

    Ok(document)
}

/// `-1` means absent; other negatives are invalid on this field.
fn sentinel_index(value: i32, path: &str) -> Result<Option<u32>> {
    match u32::try_from(value) {
        Ok(index) => Ok(Some(index)),
        Err(_) if value == schema::ABSENT_INDEX => Ok(None),
        Err(_) => Err(Error::Fla2NegativeIndex {
            path: path.to_string(),
            value,
        }),
    }
}

/// A vector-of-tables field, mapped element-wise; empty decodes as absent.
fn table_collection<T>(
    table: &Fla2Table<'_>,
    id: u16,
    path: &str,
    map_element: fn(&Fla2Table<'_>, &str) -> Result<T>,
) -> Result<Option<Vec<T>>> {
    let Some(vector) = table.vector_field(id, path)? else {
        return Ok(None);
    };
    if vector.is_empty() {
        return Ok(None);
    }
    vector.verify_extent(4, path)?;
    let mut items = Vec::with_capacity(vector.len());
    for index in 0..vector.len() {
        let element_path = format!("{path}[{index}]");
        let element = vector.table_at(index, &element_path)?;
        items.push(map_element(&element, &element_path)?);
    }
    Ok(Some(items))
}

fn u32_vector(table: &Fla2Table<'_>, id: u16, path: &str) -> Result<Option<Vec<u32>>> {
    let Some(vector) = table.vector_field(id, path)? else {
        return Ok(None);
    };
    if vector.is_empty() {
        return Ok(None);
    }
    vector.verify_extent(4, path)?;
    let mut values = Vec::with_capacity(vector.len());
    for index in 0..vector.len() {
        values.push(vector.u32_at(index, path)?);
    }
    Ok(Some(values))
}

fn f32_vector(table: &Fla2Table<'_>, id: u16, path: &str) -> Result<Option<Vec<f32>>> {
    let Some(vector) = table.vector_field(id, path)? else {
        return Ok(None);
    };
    if vector.is_empty() {
        return Ok(None);
    }
    vector.verify_extent(4, path)?;
    let mut values = Vec::with_capacity(vector.len());
    for index in 0..vector.len() {
        values.push(vector.f32_at(index, path)?);
    }
    Ok(Some(values))
}

fn string_vector(table: &Fla2Table<'_>, id: u16, path: &str) -> Result<Option<Vec<String>>> {
    let Some(vector) = table.vector_field(id, path)? else {
        return Ok(None);
    };
    if vector.is_empty() {
        return Ok(None);
    }
    vector.verify_extent(4, path)?;
    let mut values = Vec::with_capacity(vector.len());
    for index in 0..vector.len() {
        values.push(vector.str_at(index, path)?);
    }
    Ok(Some(values))
}

fn accessor_type_from(code: u8, path: &str) -> Result<AccessorType> {
    match code {
        schema::accessor_type::SCALAR => Ok(AccessorType::Scalar),
        schema::accessor_type::VEC2 => Ok(AccessorType::Vec2),
        schema::accessor_type::VEC3 => Ok(AccessorType::Vec3),
        schema::accessor_type::VEC4 => Ok(AccessorType::Vec4),
        schema::accessor_type::MAT2 => Ok(AccessorType::Mat2),
        schema::accessor_type::MAT3 => Ok(AccessorType::Mat3),
        schema::accessor_type::MAT4 => Ok(AccessorType::Mat4),
        other => Err(Error::Fla2UnknownEnum {
            path: path.to_string(),
            value: u32::from(other),
        }),
    }
}

fn target_path_from(code: u8, path: &str) -> Result<TargetPath> {
    match code {
        schema::target_path::TRANSLATION => Ok(TargetPath::Translation),
        schema::target_path::ROTATION => Ok(TargetPath::Rotation),
        schema::target_path::SCALE => Ok(TargetPath::Scale),
        schema::target_path::WEIGHTS => Ok(TargetPath::Weights),
        other => Err(Error::Fla2UnknownEnum {
            path: path.to_string(),
            value: u32::from(other),
        }),
    }
}

fn interpolation_from(code: u8, path: &str) -> Result<Interpolation> {
    match code {
        schema::interpolation::LINEAR => Ok(Interpolation::Linear),
        schema::interpolation::STEP => Ok(Interpolation::Step),
        schema::interpolation::CUBICSPLINE => Ok(Interpolation::CubicSpline),
        other => Err(Error::Fla2UnknownEnum {
            path: path.to_string(),
            value: u32::from(other),
        }),
    }
}

fn map_asset(root: &Fla2Table<'_>) -> Result<Asset> {
    let table = root
        .table_field(schema::root::ASSET, "asset")?
        .ok_or_else(|| Error::Fla2MissingField {
            path: "asset".to_string(),
        })?;
    let generator = table
        .str_field(schema::asset::GENERATOR, "asset.generator")?
        .ok_or_else(|| Error::Fla2MissingField {
            path: "asset.generator".to_string(),
        })?;
    let version = table
        .str_field(schema::asset::VERSION, "asset.version")?
        .ok_or_else(|| Error::Fla2MissingField {
            path: "asset.version".to_string(),
        })?;
    Ok(Asset { generator, version })
}

fn map_accessor(table: &Fla2Table<'_>, path: &str) -> Result<Accessor> {
    let field = |name: &str| format!("{path}.{name}");

    let component_type = table.u32_field(
        schema::accessor::COMPONENT_TYPE,
        0,
        &field("componentType"),
    )? & schema::COMPONENT_TYPE_MASK;
    if !schema::COMPONENT_TYPES.contains(&component_type) {
        return Err(Error::Fla2UnknownEnum {
            path: field("componentType"),
            value: component_type,
        });
    }

    let type_code = table.u8_field(
        schema::accessor::TYPE,
        schema::accessor_type::SCALAR,
        &field("type"),
    )?;

    if table.has_field(schema::accessor::SPARSE) {
        tracing::warn!("sparse accessor data at {} is not decoded", path);
    }

    Ok(Accessor {
        buffer_view: Some(table.u32_field(schema::accessor::BUFFER_VIEW, 0, &field("bufferView"))?),
        byte_offset: Some(table.u32_field(schema::accessor::BYTE_OFFSET, 0, &field("byteOffset"))?),
        component_type,
        normalized: table
            .bool_field(schema::accessor::NORMALIZED, false, &field("normalized"))?
            .then_some(true),
        count: table.u32_field(schema::accessor::COUNT, 0, &field("count"))?,
        accessor_type: accessor_type_from(type_code, &field("type"))?,
        max: f32_vector(table, schema::accessor::MAX, &field("max"))?,
        min: f32_vector(table, schema::accessor::MIN, &field("min"))?,
    })
}

fn map_animation(table: &Fla2Table<'_>, path: &str) -> Result<Animation> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Animation {
        channels: table_collection(
            table,
            schema::animation::CHANNELS,
            &field("channels"),
            map_channel,
        )?,
        samplers: table_collection(
            table,
            schema::animation::SAMPLERS,
            &field("samplers"),
            map_animation_sampler,
        )?,
    })
}

fn map_channel(table: &Fla2Table<'_>, path: &str) -> Result<AnimationChannel> {
    let field = |name: &str| format!("{path}.{name}");

    let target = table
        .table_field(schema::channel::TARGET, &field("target"))?
        .ok_or_else(|| Error::Fla2MissingField {
            path: field("target"),
        })?;
    let path_code = target.u8_field(
        schema::channel_target::PATH,
        schema::target_path::TRANSLATION,
        &field("target.path"),
    )?;

    Ok(AnimationChannel {
        sampler: table.u32_field(schema::channel::SAMPLER, 0, &field("sampler"))?,
        target: AnimationChannelTarget {
            node: Some(target.u32_field(
                schema::channel_target::NODE,
                0,
                &field("target.node"),
            )?),
            path: target_path_from(path_code, &field("target.path"))?,
        },
    })
}

fn map_animation_sampler(table: &Fla2Table<'_>, path: &str) -> Result<AnimationSampler> {
    let field = |name: &str| format!("{path}.{name}");
    let interpolation_code = table.u8_field(
        schema::animation_sampler::INTERPOLATION,
        schema::interpolation::LINEAR,
        &field("interpolation"),
    )?;
    Ok(AnimationSampler {
        input: table.u32_field(schema::animation_sampler::INPUT, 0, &field("input"))?,
        interpolation: Some(interpolation_from(
            interpolation_code,
            &field("interpolation"),
        )?),
        output: table.u32_field(schema::animation_sampler::OUTPUT, 0, &field("output"))?,
    })
}

fn map_buffer(table: &Fla2Table<'_>, path: &str) -> Result<Buffer> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Buffer {
        byte_length: table.u32_field(schema::buffer::BYTE_LENGTH, 0, &field("byteLength"))?,
        uri: table
            .str_field(schema::buffer::URI, &field("uri"))?
            .filter(|uri| !uri.is_empty()),
    })
}

fn map_buffer_view(table: &Fla2Table<'_>, path: &str) -> Result<BufferView> {
    let field = |name: &str| format!("{path}.{name}");

    let byte_stride = table.u32_field(schema::buffer_view::BYTE_STRIDE, 0, &field("byteStride"))?;
    let target = table.u32_field(schema::buffer_view::TARGET, 0, &field("target"))?;

    Ok(BufferView {
        buffer: sentinel_index(
            table.i32_field(
                schema::buffer_view::BUFFER,
                schema::ABSENT_INDEX,
                &field("buffer"),
            )?,
            &field("buffer"),
        )?,
        byte_offset: Some(table.u32_field(
            schema::buffer_view::BYTE_OFFSET,
            0,
            &field("byteOffset"),
        )?),
        byte_length: table.u32_field(schema::buffer_view::BYTE_LENGTH, 0, &field("byteLength"))?,
        byte_stride: (schema::BYTE_STRIDE_MIN..=schema::BYTE_STRIDE_MAX)
            .contains(&byte_stride)
            .then_some(byte_stride),
        target: (target != 0).then_some(target),
    })
}

fn map_image(table: &Fla2Table<'_>, path: &str) -> Result<Image> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Image {
        uri: table.str_field(schema::image::URI, &field("uri"))?,
        mime_type: table
            .str_field(schema::image::MIME_TYPE, &field("mimeType"))?
            .filter(|mime| !mime.is_empty()),
        buffer_view: sentinel_index(
            table.i32_field(
                schema::image::BUFFER_VIEW,
                schema::ABSENT_INDEX,
                &field("bufferView"),
            )?,
            &field("bufferView"),
        )?,
    })
}

fn map_material(table: &Fla2Table<'_>, path: &str) -> Result<Material> {
    let field_path = format!("{path}.extensions");
    let extensions = match table.blob_field(schema::material::EXTENSIONS, &field_path)? {
        Some(blob) if !blob.is_empty() => Some(flex::decode_value(blob, &field_path)?),
        _ => None,
    };
    Ok(Material { extensions })
}

fn map_mesh(table: &Fla2Table<'_>, path: &str) -> Result<Mesh> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Mesh {
        // Present even when empty; a mesh always carries a primitive list.
        primitives: table_collection(
            table,
            schema::mesh::PRIMITIVES,
            &field("primitives"),
            map_primitive,
        )?
        .unwrap_or_default(),
        weights: f32_vector(table, schema::mesh::WEIGHTS, &field("weights"))?,
    })
}

fn map_primitive(table: &Fla2Table<'_>, path: &str) -> Result<Primitive> {
    let field = |name: &str| format!("{path}.{name}");

    if table.has_field(schema::primitive::TARGETS) {
        tracing::warn!("morph target data at {} is not decoded", path);
    }

    let attributes_path = field("attributes");
    let blob = table
        .blob_field(schema::primitive::ATTRIBUTES, &attributes_path)?
        .ok_or_else(|| Error::Fla2MissingField {
            path: attributes_path.clone(),
        })?;
    let attributes = flex::decode_value(blob, &attributes_path)?;

    Ok(Primitive {
        attributes,
        indices: sentinel_index(
            table.i32_field(
                schema::primitive::INDICES,
                schema::ABSENT_INDEX,
                &field("indices"),
            )?,
            &field("indices"),
        )?,
        material: sentinel_index(
            table.i32_field(
                schema::primitive::MATERIAL,
                schema::ABSENT_INDEX,
                &field("material"),
            )?,
            &field("material"),
        )?,
        mode: Some(table.u32_field(
            schema::primitive::MODE,
            schema::MODE_TRIANGLES,
            &field("mode"),
        )?),
    })
}

fn map_node(table: &Fla2Table<'_>, path: &str) -> Result<Node> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Node {
        camera: sentinel_index(
            table.i32_field(schema::node::CAMERA, schema::ABSENT_INDEX, &field("camera"))?,
            &field("camera"),
        )?,
        children: u32_vector(table, schema::node::CHILDREN, &field("children"))?,
        skin: sentinel_index(
            table.i32_field(schema::node::SKIN, schema::ABSENT_INDEX, &field("skin"))?,
            &field("skin"),
        )?,
        matrix: f32_vector(table, schema::node::MATRIX, &field("matrix"))?,
        mesh: sentinel_index(
            table.i32_field(schema::node::MESH, schema::ABSENT_INDEX, &field("mesh"))?,
            &field("mesh"),
        )?,
        rotation: f32_vector(table, schema::node::ROTATION, &field("rotation"))?,
        scale: f32_vector(table, schema::node::SCALE, &field("scale"))?,
        translation: f32_vector(table, schema::node::TRANSLATION, &field("translation"))?,
        weights: f32_vector(table, schema::node::WEIGHTS, &field("weights"))?,
        name: table
            .str_field(schema::node::NAME, &field("name"))?
            .filter(|name| !name.is_empty()),
    })
}

fn map_sampler(table: &Fla2Table<'_>, path: &str) -> Result<Sampler> {
    let field = |name: &str| format!("{path}.{name}");
    let wrap_s = table.u32_field(schema::sampler::WRAP_S, schema::WRAP_REPEAT, &field("wrapS"))?;
    let wrap_t = table.u32_field(schema::sampler::WRAP_T, schema::WRAP_REPEAT, &field("wrapT"))?;
    Ok(Sampler {
        mag_filter: Some(table.u32_field(schema::sampler::MAG_FILTER, 0, &field("magFilter"))?),
        min_filter: Some(table.u32_field(schema::sampler::MIN_FILTER, 0, &field("minFilter"))?),
        wrap_s: (wrap_s != schema::WRAP_REPEAT).then_some(wrap_s),
        wrap_t: (wrap_t != schema::WRAP_REPEAT).then_some(wrap_t),
    })
}

fn map_scene(table: &Fla2Table<'_>, path: &str) -> Result<Scene> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Scene {
        // Present even when empty; a scene always carries a node list.
        nodes: u32_vector(table, schema::scene::NODES, &field("nodes"))?.unwrap_or_default(),
    })
}

fn map_skin(table: &Fla2Table<'_>, path: &str) -> Result<Skin> {
    let field = |name: &str| format!("{path}.{name}");
    let skeleton = table.i32_field(
        schema::skin::SKELETON,
        schema::ABSENT_INDEX,
        &field("skeleton"),
    )?;
    Ok(Skin {
        inverse_bind_matrices: Some(table.u32_field(
            schema::skin::INVERSE_BIND_MATRICES,
            0,
            &field("inverseBindMatrices"),
        )?),
        // Any negative skeleton is treated as unset; node ids start at 0.
        skeleton: u32::try_from(skeleton).ok(),
        joints: u32_vector(table, schema::skin::JOINTS, &field("joints"))?.unwrap_or_default(),
        name: table.str_field(schema::skin::NAME, &field("name"))?,
    })
}

fn map_texture(table: &Fla2Table<'_>, path: &str) -> Result<Texture> {
    let field = |name: &str| format!("{path}.{name}");
    Ok(Texture {
        sampler: Some(table.u32_field(schema::texture::SAMPLER, 0, &field("sampler"))?),
        source: Some(table.u32_field(schema::texture::SOURCE, 0, &field("source"))?),
    })
}
