//! JSON bridge.
//!
//! Export writes one object per chunk:
//!
//! ```json
//! { "CHUNK_NAME": "W3D_CHUNK_MESH", "CHUNK_ID": 0, "LENGTH": 1234,
//!   "SUBCHUNKS": true, "CHILDREN": [ ... ] }
//! ```
//!
//! Leaves carry either a structured `DATA` object or `RAW_DATA_HEX`.
//! `SUBCHUNKS` is the raw children bit, so a forced wrapper stored with the
//! bit clear exports `SUBCHUNKS: false` together with `CHILDREN`, and a
//! wrapper kept as raw bytes exports `SUBCHUNKS: true` with `RAW_DATA_HEX`.
//! Unframed bytes after the children of a damaged wrapper go to
//! `TRAILING_HEX`.
//!
//! Import is strict about the structural keys (`CHUNK_ID`, `LENGTH`,
//! `SUBCHUNKS`, `CHILDREN`, hex) and lenient inside `DATA`, where problems
//! are collected as warnings.

mod fields;
mod serializers;

pub use fields::JsonFields;
pub use serializers::*;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::chunk::{Chunk, ChunkContext, ChunkData, W3dDocument};
use crate::format::{FramingMode, MICRO_MAX};
use crate::names::{ChunkNames, FileKind};
use crate::util::hex::{decode_payload, encode_payload};
use crate::util::{Error, Result};

pub const SCHEMA_VERSION: i64 = 1;
pub const SCHEMA_VERSION_KEY: &str = "SCHEMA_VERSION";
/// Top-level key used when the tree has no source file name.
pub const DEFAULT_ROOT_KEY: &str = "CHUNKS";

pub const CHUNK_NAME: &str = "CHUNK_NAME";
pub const CHUNK_ID: &str = "CHUNK_ID";
pub const LENGTH: &str = "LENGTH";
pub const SUBCHUNKS: &str = "SUBCHUNKS";
pub const CHILDREN: &str = "CHILDREN";
pub const DATA: &str = "DATA";
pub const RAW_DATA_HEX: &str = "RAW_DATA_HEX";
pub const TRAILING_HEX: &str = "TRAILING_HEX";

/// How leaf payloads are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsonMode {
    /// `DATA` where a lossless converter exists, hex elsewhere.
    #[default]
    StructuredPreferred,
    /// `RAW_DATA_HEX` for every leaf.
    HexOnly,
}

/// Result of a successful import.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub chunks: Vec<Chunk>,
    /// Top-level key, unless it was the default one.
    pub source_name: Option<String>,
    pub warnings: Vec<String>,
}

impl ImportOutcome {
    /// Move the imported tree into a document.
    pub fn into_document(self, kind: FileKind) -> W3dDocument {
        let mut doc = W3dDocument::from_chunks(self.chunks);
        doc.set_source_name(self.source_name);
        doc.set_kind(kind);
        doc
    }
}

// ============================================================================
// Export
// ============================================================================

/// Export a whole document.
pub fn to_json(
    doc: &W3dDocument,
    mode: JsonMode,
    names: &ChunkNames,
    serializers: &SerializerRegistry,
) -> Value {
    let exporter = Exporter {
        mode,
        names,
        serializers,
    };
    let chunks: Vec<Value> = doc
        .chunks()
        .iter()
        .enumerate()
        .map(|(i, c)| exporter.chunk(c, &ChunkContext::top_level(i, doc.kind())))
        .collect();

    let mut root = Map::new();
    root.insert(SCHEMA_VERSION_KEY.into(), json!(SCHEMA_VERSION));
    root.insert(
        doc.source_name().unwrap_or(DEFAULT_ROOT_KEY).to_string(),
        Value::Array(chunks),
    );
    Value::Object(root)
}

/// Export one chunk seen in `ctx`.
pub fn chunk_to_json(
    chunk: &Chunk,
    ctx: &ChunkContext,
    mode: JsonMode,
    names: &ChunkNames,
    serializers: &SerializerRegistry,
) -> Value {
    Exporter {
        mode,
        names,
        serializers,
    }
    .chunk(chunk, ctx)
}

struct Exporter<'a> {
    mode: JsonMode,
    names: &'a ChunkNames,
    serializers: &'a SerializerRegistry,
}

impl Exporter<'_> {
    fn chunk(&self, chunk: &Chunk, ctx: &ChunkContext) -> Value {
        let mut obj = Map::new();
        obj.insert(CHUNK_NAME.into(), json!(self.names.label_in_context(chunk.id(), ctx)));
        obj.insert(CHUNK_ID.into(), json!(chunk.id()));
        obj.insert(LENGTH.into(), json!(chunk.declared_length(ctx.parent_id)));
        obj.insert(SUBCHUNKS.into(), json!(chunk.sub_chunk_flag()));

        match chunk.data() {
            ChunkData::Children(children) => {
                let children: Vec<Value> = children
                    .iter()
                    .enumerate()
                    .map(|(i, c)| self.chunk(c, &ctx.child_of(chunk, i)))
                    .collect();
                obj.insert(CHILDREN.into(), Value::Array(children));
                if !chunk.trailing().is_empty() {
                    obj.insert(TRAILING_HEX.into(), json!(encode_payload(chunk.trailing())));
                }
            }
            ChunkData::Leaf(payload) if chunk.sub_chunk_flag() => {
                obj.insert(RAW_DATA_HEX.into(), json!(encode_payload(payload)));
            }
            ChunkData::Leaf(payload) => match self.structured(chunk.id(), payload, ctx) {
                Some(data) => {
                    obj.insert(DATA.into(), data);
                }
                None => {
                    obj.insert(RAW_DATA_HEX.into(), json!(encode_payload(payload)));
                }
            },
        }
        Value::Object(obj)
    }

    fn structured(&self, id: u32, payload: &[u8], ctx: &ChunkContext) -> Option<Value> {
        if self.mode == JsonMode::HexOnly || ctx.is_micro() {
            return None;
        }
        self.serializers.lookup(id, ctx.parent_id)?.lossless(id, payload)
    }
}

// ============================================================================
// Import
// ============================================================================

/// Import a document written by [`to_json`].
///
/// Any structural problem anywhere in the tree fails the whole import;
/// nothing partial is returned.
pub fn from_json(
    value: &Value,
    mode: JsonMode,
    serializers: &SerializerRegistry,
) -> Result<ImportOutcome> {
    let root = value
        .as_object()
        .ok_or_else(|| Error::InvalidDocument("top level is not an object".into()))?;

    let mut warnings = Vec::new();
    match root.get(SCHEMA_VERSION_KEY) {
        Some(v) => match v.as_i64() {
            Some(SCHEMA_VERSION) => {}
            Some(other) => return Err(Error::UnsupportedSchema(other)),
            None => {
                return Err(Error::InvalidDocument(format!(
                    "{} is not an integer",
                    SCHEMA_VERSION_KEY
                )))
            }
        },
        None => warnings.push(format!(
            "no {}; assuming {}",
            SCHEMA_VERSION_KEY, SCHEMA_VERSION
        )),
    }

    let mut roots = root.iter().filter(|(k, _)| k.as_str() != SCHEMA_VERSION_KEY);
    let (key, list) = roots
        .next()
        .ok_or_else(|| Error::InvalidDocument("no chunk list".into()))?;
    if let Some((extra, _)) = roots.next() {
        return Err(Error::InvalidDocument(format!(
            "more than one chunk list ({} and {})",
            key, extra
        )));
    }
    let list = list
        .as_array()
        .ok_or_else(|| Error::InvalidDocument(format!("{} is not an array", key)))?;

    let mut importer = Importer {
        mode,
        serializers,
        warnings,
    };
    let chunks = list
        .iter()
        .map(|v| importer.chunk(v, None, None))
        .collect::<Result<Vec<_>>>()?;

    for warning in &importer.warnings {
        tracing::warn!("{}", warning);
    }
    Ok(ImportOutcome {
        chunks,
        source_name: (key != DEFAULT_ROOT_KEY).then(|| key.clone()),
        warnings: importer.warnings,
    })
}

/// Import one chunk object seen under the given ancestry.
pub fn chunk_from_json(
    value: &Value,
    parent_id: Option<u32>,
    grandparent_id: Option<u32>,
    mode: JsonMode,
    serializers: &SerializerRegistry,
    warnings: &mut Vec<String>,
) -> Result<Chunk> {
    let mut importer = Importer {
        mode,
        serializers,
        warnings: std::mem::take(warnings),
    };
    let result = importer.chunk(value, parent_id, grandparent_id);
    *warnings = importer.warnings;
    result
}

struct Importer<'a> {
    mode: JsonMode,
    serializers: &'a SerializerRegistry,
    warnings: Vec<String>,
}

impl Importer<'_> {
    fn chunk(
        &mut self,
        value: &Value,
        parent_id: Option<u32>,
        grandparent_id: Option<u32>,
    ) -> Result<Chunk> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::InvalidDocument("chunk entry is not an object".into()))?;

        let id = match obj.get(CHUNK_ID) {
            None => return Err(Error::chunk_field(CHUNK_ID, "is missing")),
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| Error::chunk_field(CHUNK_ID, format!("is not a u32: {}", v)))?,
        };
        let length = match obj.get(LENGTH) {
            None => return Err(Error::chunk_field(LENGTH, "is missing")),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| Error::chunk_field(LENGTH, format!("is not an unsigned integer: {}", v)))?,
        };
        let sub_chunks = match obj.get(SUBCHUNKS) {
            None => return Err(Error::chunk_field(SUBCHUNKS, "is missing")),
            Some(v) => v
                .as_bool()
                .ok_or_else(|| Error::chunk_field(SUBCHUNKS, format!("is not a boolean: {}", v)))?,
        };

        let micro = crate::format::framing_mode(parent_id, grandparent_id) == FramingMode::Micro;
        if micro && id as usize > MICRO_MAX {
            return Err(Error::MicroChunkOverflow {
                id,
                reason: "id does not fit in one byte".into(),
            });
        }

        let mut trailing = Vec::new();
        let data = match obj.get(CHILDREN) {
            Some(Value::Array(children)) => {
                if micro {
                    return Err(Error::chunk_field(CHILDREN, "is not allowed on a micro chunk"));
                }
                let children = children
                    .iter()
                    .map(|c| self.chunk(c, Some(id), parent_id))
                    .collect::<Result<Vec<_>>>()?;
                if let Some(hex) = obj.get(TRAILING_HEX) {
                    trailing = self.hex(hex, id)?;
                }
                ChunkData::Children(children)
            }
            Some(other) => {
                return Err(Error::chunk_field(CHILDREN, format!("is not an array: {}", other)))
            }
            // A wrapper kept as raw bytes has the bit set and a hex payload
            None if sub_chunks => match obj.get(RAW_DATA_HEX) {
                Some(hex) => ChunkData::Leaf(self.hex(hex, id)?),
                None => return Err(Error::chunk_field(CHILDREN, "is missing")),
            },
            None => ChunkData::Leaf(self.payload(obj, id, parent_id, micro)?),
        };

        let chunk = Chunk::from_parts(id, sub_chunks, data).with_trailing(trailing);
        let actual = chunk.declared_length(parent_id) as u64;
        if actual != length {
            self.warnings.push(format!(
                "chunk 0x{:08X}: LENGTH says {} but content is {} bytes; using {}",
                id, length, actual, actual
            ));
        }
        Ok(chunk)
    }

    fn payload(
        &mut self,
        obj: &Map<String, Value>,
        id: u32,
        parent_id: Option<u32>,
        micro: bool,
    ) -> Result<Vec<u8>> {
        if let Some(hex) = obj.get(RAW_DATA_HEX) {
            if obj.contains_key(DATA) {
                self.warnings.push(format!(
                    "chunk 0x{:08X}: both {} and {}; using {}",
                    id, DATA, RAW_DATA_HEX, RAW_DATA_HEX
                ));
            }
            return self.hex(hex, id);
        }

        let Some(data) = obj.get(DATA) else {
            return Err(Error::chunk_field(
                RAW_DATA_HEX,
                format!("is missing on leaf 0x{:08X} and there is no {}", id, DATA),
            ));
        };
        if self.mode == JsonMode::HexOnly || micro {
            return Err(Error::NoImporter(id));
        }
        let serializer = self
            .serializers
            .lookup(id, parent_id)
            .ok_or(Error::NoImporter(id))?;
        let mut fields = JsonFields::new(id, &mut self.warnings);
        Ok((serializer.from_structured)(data, &mut fields))
    }

    fn hex(&self, value: &Value, id: u32) -> Result<Vec<u8>> {
        let text = value.as_str().ok_or_else(|| Error::InvalidHex {
            id,
            reason: "not a string".into(),
        })?;
        decode_payload(id, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ids;
    use crate::structs::{MeshHeader3, Name16, Overlay};
    use glam::Vec3;

    fn sample() -> W3dDocument {
        let header = MeshHeader3 {
            version: 0x0004_0002,
            mesh_name: Name16::new("HULL"),
            num_vertices: 1,
            ..Default::default()
        };
        let mesh = Chunk::wrapper(
            ids::MESH,
            vec![
                Chunk::leaf(ids::MESH_HEADER3, header.to_bytes()),
                Chunk::leaf(ids::VERTICES, crate::structs::encode_array(&[Vec3::new(1.0, 2.0, 3.0)])),
                Chunk::leaf(0x7777, vec![1, 2, 3]),
            ],
        );
        W3dDocument::from_chunks(vec![mesh])
    }

    fn export(doc: &W3dDocument, mode: JsonMode) -> Value {
        to_json(doc, mode, &ChunkNames::builtin(), &SerializerRegistry::builtin())
    }

    #[test]
    fn test_export_shape() {
        let v = export(&sample(), JsonMode::StructuredPreferred);
        assert_eq!(v[SCHEMA_VERSION_KEY], 1);
        let mesh = &v[DEFAULT_ROOT_KEY][0];
        assert_eq!(mesh[CHUNK_NAME], "W3D_CHUNK_MESH");
        assert_eq!(mesh[SUBCHUNKS], true);
        assert_eq!(mesh[LENGTH], 8 + 116 + 8 + 12 + 8 + 3);
        let children = mesh[CHILDREN].as_array().unwrap();
        assert_eq!(children[0][DATA]["MeshName"], "HULL");
        assert_eq!(children[1][DATA]["ITEMS"][0], json!([1.0, 2.0, 3.0]));
        assert_eq!(children[2][RAW_DATA_HEX], "010203");
        assert_eq!(children[2][CHUNK_NAME], "0x00007777");
    }

    #[test]
    fn test_hex_only_never_uses_data() {
        let v = export(&sample(), JsonMode::HexOnly);
        let children = v[DEFAULT_ROOT_KEY][0][CHILDREN].as_array().unwrap();
        assert!(children.iter().all(|c| c.get(DATA).is_none()));
    }

    #[test]
    fn test_roundtrip_both_modes() {
        let doc = sample();
        let registry = SerializerRegistry::builtin();
        for mode in [JsonMode::StructuredPreferred, JsonMode::HexOnly] {
            let outcome = from_json(&export(&doc, mode), mode, &registry).unwrap();
            assert_eq!(outcome.chunks, doc.chunks());
            assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
            assert_eq!(outcome.source_name, None);
        }
    }

    #[test]
    fn test_source_name_is_root_key() {
        let mut doc = sample();
        doc.set_source_name(Some("tank.w3d".into()));
        let v = export(&doc, JsonMode::HexOnly);
        assert!(v.get("tank.w3d").is_some());
        let outcome = from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).unwrap();
        assert_eq!(outcome.source_name.as_deref(), Some("tank.w3d"));
    }

    #[test]
    fn test_missing_length_fails_whole_import() {
        let mut v = export(&sample(), JsonMode::HexOnly);
        v[DEFAULT_ROOT_KEY][0][CHILDREN][1]
            .as_object_mut()
            .unwrap()
            .remove(LENGTH);
        let err = from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidChunkObject { field: "LENGTH", .. }));
    }

    #[test]
    fn test_wrong_typed_structural_fields() {
        for (key, bad) in [(CHUNK_ID, json!("0")), (SUBCHUNKS, json!(1)), (LENGTH, json!(-4))] {
            let mut v = export(&sample(), JsonMode::HexOnly);
            v[DEFAULT_ROOT_KEY][0][key] = bad;
            assert!(from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).is_err());
        }
    }

    #[test]
    fn test_data_without_importer_is_an_error() {
        let registry = SerializerRegistry::builtin();
        let v = export(&sample(), JsonMode::StructuredPreferred);
        // Structured export read back as hex-only has nowhere to put DATA
        assert!(matches!(
            from_json(&v, JsonMode::HexOnly, &registry),
            Err(Error::NoImporter(ids::MESH_HEADER3))
        ));
        assert!(matches!(
            from_json(&v, JsonMode::StructuredPreferred, &SerializerRegistry::empty()),
            Err(Error::NoImporter(_))
        ));
    }

    #[test]
    fn test_bad_hex_is_an_error() {
        let mut v = export(&sample(), JsonMode::HexOnly);
        v[DEFAULT_ROOT_KEY][0][CHILDREN][2][RAW_DATA_HEX] = json!("0102G3");
        assert!(matches!(
            from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()),
            Err(Error::InvalidHex { id: 0x7777, .. })
        ));
        v[DEFAULT_ROOT_KEY][0][CHILDREN][2][RAW_DATA_HEX] = json!("010");
        assert!(from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).is_err());
    }

    #[test]
    fn test_data_type_mismatch_is_a_warning() {
        let registry = SerializerRegistry::builtin();
        let mut v = export(&sample(), JsonMode::StructuredPreferred);
        v[DEFAULT_ROOT_KEY][0][CHILDREN][0][DATA]["NumVertices"] = json!("many");
        let outcome = from_json(&v, JsonMode::StructuredPreferred, &registry).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("NumVertices"));
        let header: MeshHeader3 = outcome.chunks[0].children()[0].read_struct().unwrap();
        assert_eq!(header.num_vertices, 0);
        assert_eq!(header.mesh_name.as_string(), "HULL");
    }

    #[test]
    fn test_length_mismatch_is_a_warning() {
        let mut v = export(&sample(), JsonMode::HexOnly);
        v[DEFAULT_ROOT_KEY][0][LENGTH] = json!(5);
        let outcome = from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.chunks, sample().chunks());
    }

    #[test]
    fn test_subchunks_without_children() {
        let v = json!({ "CHUNKS": [ { "CHUNK_ID": 0, "LENGTH": 0, "SUBCHUNKS": true } ] });
        assert!(from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).is_err());
    }

    #[test]
    fn test_raw_wrapper_and_trailing_bytes_round_trip() {
        // Bit set but kept as bytes, as happens past the nesting limit
        let raw = Chunk::from_parts(ids::MESH, true, ChunkData::Leaf(vec![1, 2, 3]));
        let damaged = Chunk::wrapper(ids::HIERARCHY, vec![Chunk::leaf(ids::PIVOTS, vec![7])])
            .with_trailing(vec![0xEE, 0xFF]);
        let doc = W3dDocument::from_chunks(vec![raw, damaged]);

        for mode in [JsonMode::HexOnly, JsonMode::StructuredPreferred] {
            let v = export(&doc, mode);
            assert_eq!(v[DEFAULT_ROOT_KEY][0][SUBCHUNKS], true);
            assert_eq!(v[DEFAULT_ROOT_KEY][0][RAW_DATA_HEX], "010203");
            assert_eq!(v[DEFAULT_ROOT_KEY][1][TRAILING_HEX], "EEFF");
            assert_eq!(v[DEFAULT_ROOT_KEY][1][LENGTH], 8 + 1 + 2);

            let outcome = from_json(&v, mode, &SerializerRegistry::builtin()).unwrap();
            assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
            assert_eq!(outcome.chunks, doc.chunks());
        }
    }

    #[test]
    fn test_micro_chunks_stay_hex_and_fit_a_byte() {
        let doc = W3dDocument::from_chunks(vec![Chunk::wrapper(
            ids::LEGACY_DATA_WRAPPER,
            vec![Chunk::leaf(ids::TEXTURE_NAME, b"a\0".to_vec())],
        )]);
        let v = export(&doc, JsonMode::StructuredPreferred);
        let micro = &v[DEFAULT_ROOT_KEY][0][CHILDREN][0];
        assert_eq!(micro[RAW_DATA_HEX], "6100");
        assert_eq!(micro[CHUNK_NAME], "MICRO_CHUNK_0x32");

        let mut bad = v.clone();
        bad[DEFAULT_ROOT_KEY][0][CHILDREN][0][CHUNK_ID] = json!(0x1FF);
        assert!(matches!(
            from_json(&bad, JsonMode::HexOnly, &SerializerRegistry::empty()),
            Err(Error::MicroChunkOverflow { id: 0x1FF, .. })
        ));
    }

    #[test]
    fn test_schema_version_checked() {
        let v = json!({ "SCHEMA_VERSION": 2, "CHUNKS": [] });
        assert!(matches!(
            from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()),
            Err(Error::UnsupportedSchema(2))
        ));
        let v = json!({ "CHUNKS": [] });
        let outcome = from_json(&v, JsonMode::HexOnly, &SerializerRegistry::empty()).unwrap();
        assert!(outcome.chunks.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
