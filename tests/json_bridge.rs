//! Integration tests for JSON export and import.

mod common;

use serde_json::{json, Value};
use tempfile::tempdir;
use w3d::format::{ids, parse_chunks, write_chunks, MAX_DEPTH};
use w3d::json::{
    from_json, to_json, ImportOutcome, CHILDREN, CHUNK_ID, DATA, DEFAULT_ROOT_KEY, LENGTH,
    RAW_DATA_HEX, SUBCHUNKS,
};
use w3d::prelude::*;

fn document(bytes: &[u8]) -> W3dDocument {
    let mut doc = W3dDocument::new();
    assert!(doc.load_from_bytes(bytes, None));
    doc
}

fn export(doc: &W3dDocument, mode: JsonMode) -> Value {
    to_json(doc, mode, &ChunkNames::builtin(), &SerializerRegistry::builtin())
}

/// Export, print, re-parse and import.
fn cycle(bytes: &[u8], mode: JsonMode) -> ImportOutcome {
    let text = serde_json::to_string_pretty(&export(&document(bytes), mode)).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    from_json(&value, mode, &SerializerRegistry::builtin()).unwrap()
}

/// Every chunk object in export order.
fn objects(value: &Value) -> Vec<&Value> {
    fn visit<'a>(v: &'a Value, out: &mut Vec<&'a Value>) {
        out.push(v);
        if let Some(children) = v.get(CHILDREN).and_then(Value::as_array) {
            for c in children {
                visit(c, out);
            }
        }
    }
    let mut out = Vec::new();
    for root in value[DEFAULT_ROOT_KEY].as_array().unwrap() {
        visit(root, &mut out);
    }
    out
}

#[test]
fn test_hex_only_round_trips_everything() {
    let bytes = common::asset();
    let outcome = cycle(&bytes, JsonMode::HexOnly);
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert_eq!(write_chunks(&outcome.chunks).unwrap(), bytes);
}

#[test]
fn test_structured_round_trips_everything() {
    for (label, bytes) in common::all() {
        let outcome = cycle(&bytes, JsonMode::StructuredPreferred);
        assert!(outcome.warnings.is_empty(), "{}: {:?}", label, outcome.warnings);
        assert_eq!(write_chunks(&outcome.chunks).unwrap(), bytes, "{}", label);
    }
}

#[test]
fn test_structured_export_uses_data_where_it_can() {
    let value = export(&document(&common::asset()), JsonMode::StructuredPreferred);
    let all = objects(&value);
    let by_id = |id: u32| {
        all.iter()
            .find(|o| o[CHUNK_ID] == json!(id))
            .copied()
            .unwrap_or_else(|| panic!("no chunk 0x{:X}", id))
    };

    let header = by_id(ids::MESH_HEADER3);
    assert_eq!(header[DATA]["MeshName"], "TRI");
    assert_eq!(header[DATA]["NumVertices"], 3);
    assert!(header.get(RAW_DATA_HEX).is_none());

    assert_eq!(by_id(ids::MESH_USER_TEXT)[DATA]["TEXT"], "exported by hand");
    assert_eq!(by_id(ids::PIVOTS)[DATA]["ITEMS"].as_array().unwrap().len(), 2);
    assert_eq!(by_id(0xDEAD_BEEF)[RAW_DATA_HEX], "0102030405");

    // Micro chunks never get DATA, even when their id collides with a known one
    for micro in by_id(ids::LEGACY_DATA_WRAPPER)[CHILDREN].as_array().unwrap() {
        assert!(micro.get(DATA).is_none());
        assert!(micro.get(RAW_DATA_HEX).is_some());
    }

    // A forced wrapper stored without the bit keeps SUBCHUNKS false
    let unflagged = all
        .iter()
        .filter(|o| o[CHUNK_ID] == json!(ids::MESH))
        .find(|o| o[SUBCHUNKS] == json!(false))
        .unwrap();
    assert_eq!(unflagged[CHILDREN].as_array().unwrap().len(), 2);
}

#[test]
fn test_lengths_match_binary() {
    let bytes = common::mesh();
    let value = export(&document(&bytes), JsonMode::HexOnly);
    let root = &value[DEFAULT_ROOT_KEY][0];
    assert_eq!(root[LENGTH], json!(bytes.len() - 8));
}

#[test]
fn test_missing_length_fails_import() {
    let mut value = export(&document(&common::hierarchy()), JsonMode::HexOnly);
    value[DEFAULT_ROOT_KEY][0][CHILDREN][1]
        .as_object_mut()
        .unwrap()
        .remove(LENGTH);
    let result = from_json(&value, JsonMode::HexOnly, &SerializerRegistry::builtin());
    assert!(matches!(result, Err(Error::InvalidChunkObject { field: "LENGTH", .. })));
}

#[test]
fn test_structured_field_mismatch_is_a_warning() {
    let mut value = export(&document(&common::hierarchy()), JsonMode::StructuredPreferred);
    let header = &mut value[DEFAULT_ROOT_KEY][0][CHILDREN][0][DATA];
    header["NumPivots"] = json!("two");
    header.as_object_mut().unwrap().remove("Center");

    let outcome = from_json(&value, JsonMode::StructuredPreferred, &SerializerRegistry::builtin())
        .unwrap();
    assert_eq!(outcome.warnings.len(), 2, "{:?}", outcome.warnings);
    let doc = outcome.into_document(FileKind::Asset);
    let header = doc.get(&"0/0".parse().unwrap()).unwrap();
    assert_eq!(header.payload().unwrap().len(), 36);
}

#[test]
fn test_bad_hex_fails_import() {
    let mut value = export(&document(&common::unknown_leaf()), JsonMode::HexOnly);
    value[DEFAULT_ROOT_KEY][0][RAW_DATA_HEX] = json!("01020");
    assert!(matches!(
        from_json(&value, JsonMode::HexOnly, &SerializerRegistry::builtin()),
        Err(Error::InvalidHex { id: 0xDEAD_BEEF, .. })
    ));

    // Lowercase is fine
    value[DEFAULT_ROOT_KEY][0][RAW_DATA_HEX] = json!("0a0b");
    let outcome = from_json(&value, JsonMode::HexOnly, &SerializerRegistry::builtin()).unwrap();
    assert_eq!(outcome.chunks[0].payload(), Some(&[0x0A, 0x0B][..]));
    // LENGTH still says 5
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_file_name_becomes_root_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tank.w3d");
    std::fs::write(&path, common::sphere()).unwrap();

    let mut doc = W3dDocument::new();
    doc.load_from_file(&path).unwrap();
    let value = export(&doc, JsonMode::StructuredPreferred);
    assert_eq!(value["SCHEMA_VERSION"], 1);
    assert!(value["tank.w3d"].is_array());

    let outcome = from_json(&value, JsonMode::StructuredPreferred, &SerializerRegistry::builtin())
        .unwrap();
    assert_eq!(outcome.source_name.as_deref(), Some("tank.w3d"));
    let rebuilt = outcome.into_document(FileKind::Asset);
    assert_eq!(rebuilt.to_bytes().unwrap(), common::sphere());
}

#[test]
fn test_imported_tree_matches_parsed_tree() {
    let bytes = common::asset();
    let parsed = parse_chunks(&bytes).chunks;
    for mode in [JsonMode::HexOnly, JsonMode::StructuredPreferred] {
        assert_eq!(cycle(&bytes, mode).chunks, parsed);
    }
}

#[test]
fn test_nesting_past_the_depth_limit_round_trips() {
    let mut bytes = common::leaf(ids::MESH_USER_TEXT, b"deep\0");
    for _ in 0..MAX_DEPTH + 2 {
        bytes = common::wrapper(0x0000_0777, &[bytes]);
    }
    let outcome = parse_chunks(&bytes);
    assert!(!outcome.is_clean());
    assert_eq!(write_chunks(&outcome.chunks).unwrap(), bytes);

    for mode in [JsonMode::HexOnly, JsonMode::StructuredPreferred] {
        let imported = cycle(&bytes, mode);
        assert_eq!(write_chunks(&imported.chunks).unwrap(), bytes);
    }
}

#[test]
fn test_damaged_wrapper_survives_json_and_save() {
    // Second child claims more bytes than its wrapper holds
    let mut inner = common::leaf(ids::VERTICES, &[0u8; 12]);
    inner.extend_from_slice(&ids::VERTEX_NORMALS.to_le_bytes());
    inner.extend_from_slice(&64u32.to_le_bytes());
    inner.extend_from_slice(&[5, 6, 7]);
    let bytes = common::frame(ids::MESH, &inner, true);

    let doc = document(&bytes);
    assert!(!doc.diagnostics().is_empty());
    assert_eq!(doc.chunks()[0].children().len(), 1);

    let dir = tempdir().unwrap();
    let path = dir.path().join("damaged.w3d");
    doc.save_to_file(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);

    let outcome = cycle(&bytes, JsonMode::StructuredPreferred);
    assert!(outcome.warnings.is_empty(), "{:?}", outcome.warnings);
    assert_eq!(write_chunks(&outcome.chunks).unwrap(), bytes);
}
