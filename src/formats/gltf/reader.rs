//! Text (JSON) document decoding.

use std::fs;
use std::path::Path;

use crate::error::Result;

use super::document::Document;

/// Parse a UTF-8 JSON document from a byte slice.
///
/// Unknown members are ignored; a document that does not match the schema
/// (missing `asset`, wrong types, invalid UTF-8) fails as a whole.
///
/// # Errors
///
/// Returns [`Error::JsonError`](crate::Error::JsonError) if the bytes are not
/// valid JSON for the document schema.
pub fn parse_gltf_json(data: &[u8]) -> Result<Document> {
    let document = serde_json::from_slice(data)?;
    Ok(document)
}

/// Read a standalone `.gltf` JSON document from disk.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read, or
/// [`Error::JsonError`](crate::Error::JsonError) if it does not parse.
pub fn read_gltf_json<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = fs::read(path)?;
    parse_gltf_json(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parses_minimal_document() {
        let doc =
            parse_gltf_json(br#"{"asset":{"generator":"x","version":"2.0"}}"#).unwrap();
        assert_eq!(doc.asset.generator, "x");
        assert_eq!(doc.asset.version, "2.0");
        assert_eq!(doc.scene, None);
        assert_eq!(doc.accessors, None);
    }

    #[test]
    fn test_parses_collections_and_ignores_unknown_members() {
        let doc = parse_gltf_json(
            br#"{
                "asset": {"generator": "g", "version": "2.0"},
                "scene": 0,
                "scenes": [{"nodes": [0], "extras": {"editor": true}}],
                "nodes": [{"name": "root", "mesh": 0}],
                "unknownTopLevel": 42
            }"#,
        )
        .unwrap();
        assert_eq!(doc.scene, Some(0));
        let scenes = doc.scenes.unwrap();
        assert_eq!(scenes[0].nodes, vec![0]);
        assert_eq!(doc.nodes.unwrap()[0].name.as_deref(), Some("root"));
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        let err = parse_gltf_json(br#"{"scenes":[]}"#).unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = parse_gltf_json(&[0x7b, 0xff, 0xfe, 0x7d]).unwrap_err();
        assert!(matches!(err, Error::JsonError(_)));
    }
}
