//! Generic value tree decoding.
//!
//! Primitive attribute maps and material extension data travel inside the
//! FLA2 chunk as opaque FlexBuffers blobs. This adapter hands the blob to the
//! `flexbuffers` crate and converts the resulting tree into a
//! [`serde_json::Value`], which the document carries verbatim. Map keys keep
//! their stored order (`serde_json` runs with `preserve_order`). Nesting is
//! capped at [`MAX_DEPTH`] levels so a hostile blob fails with an error
//! instead of exhausting the stack.

use flexbuffers::{FlexBufferType, Reader};
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

/// Deepest value tree accepted, matching serde_json's recursion limit.
const MAX_DEPTH: usize = 128;

/// Decode a FlexBuffers blob into a generic JSON value tree.
pub(crate) fn decode_value(blob: &[u8], path: &str) -> Result<Value> {
    let root = Reader::get_root(blob).map_err(|e| Error::Fla2Blob {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    convert(&root, path, 0)
}

fn convert(reader: &Reader<&[u8]>, path: &str, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::Fla2Blob {
            path: path.to_string(),
            message: format!("value tree deeper than {MAX_DEPTH} levels"),
        });
    }
    match reader.flexbuffer_type() {
        FlexBufferType::Null => Ok(Value::Null),
        FlexBufferType::Bool => Ok(Value::Bool(reader.as_bool())),
        FlexBufferType::Int | FlexBufferType::IndirectInt => Ok(Value::from(reader.as_i64())),
        FlexBufferType::UInt | FlexBufferType::IndirectUInt => Ok(Value::from(reader.as_u64())),
        FlexBufferType::Float | FlexBufferType::IndirectFloat => {
            // JSON has no NaN or infinity; mirror JSON.stringify and emit null.
            Ok(Number::from_f64(reader.as_f64()).map_or(Value::Null, Value::Number))
        }
        FlexBufferType::Key | FlexBufferType::String => {
            Ok(Value::String(reader.as_str().to_string()))
        }
        FlexBufferType::Map => {
            let map = reader.as_map();
            let keys = map.keys_vector();
            let mut out = Map::with_capacity(map.len());
            for index in 0..map.len() {
                let key = keys.idx(index).as_str().to_string();
                let value = convert(&map.idx(index), path, depth + 1)?;
                out.insert(key, value);
            }
            Ok(Value::Object(out))
        }
        FlexBufferType::Blob => Err(Error::Fla2Blob {
            path: path.to_string(),
            message: "unsupported value type Blob".to_string(),
        }),
        other if other.is_vector() => {
            let vector = reader.as_vector();
            let mut out = Vec::with_capacity(vector.len());
            for index in 0..vector.len() {
                out.push(convert(&vector.idx(index), path, depth + 1)?);
            }
            Ok(Value::Array(out))
        }
        other => Err(Error::Fla2Blob {
            path: path.to_string(),
            message: format!("unsupported value type {other:?}"),
        }),
    }
}
