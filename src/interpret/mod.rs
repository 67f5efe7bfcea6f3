//! Field interpreters: chunk payload → list of named, typed, formatted values.
//!
//! Interpreters are plain functions registered per chunk id (or per
//! `(parent, id)` pair for ids whose meaning depends on the parent). Every
//! interpreter returns `Err(message)` instead of reading past the payload;
//! [`FieldInterpreters::interpret`] turns that into a single error entry.

mod animation;
mod enums;
mod hierarchy;
mod material;
mod mesh;
mod micro;
mod objects;

pub use enums::*;

use std::collections::HashMap;
use std::fmt;

use glam::{Quat, Vec2, Vec3};

use crate::chunk::{Chunk, ChunkContext};
use crate::structs::{read_array, read_struct, read_with_tail, Overlay, Rgb, Rgba};

/// One decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Type label, e.g. `uint32`, `float`, `string`, `vector3`.
    pub kind: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }

    /// The single entry produced when a payload cannot be decoded.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", "string", message)
    }

    pub fn is_error(&self) -> bool {
        self.name == "error" && self.kind == "string"
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.kind, self.value)
    }
}

/// Output of an interpreter; `Err` carries the error message.
pub type Fields = Result<Vec<Field>, String>;

/// Interpreter signature: leaf payload plus the chunk's context.
pub type InterpretFn = fn(&[u8], &ChunkContext) -> Fields;

/// Registry of interpreters. Build once with [`builtin`](Self::builtin) and
/// pass by reference.
#[derive(Debug, Clone, Default)]
pub struct FieldInterpreters {
    by_id: HashMap<u32, InterpretFn>,
    by_parent: HashMap<(u32, u32), InterpretFn>,
}

impl FieldInterpreters {
    /// Registry with every built-in interpreter.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        mesh::register(&mut registry);
        material::register(&mut registry);
        hierarchy::register(&mut registry);
        animation::register(&mut registry);
        objects::register(&mut registry);
        registry
    }

    /// Empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Interpret `id` the same way under every parent.
    pub fn register(&mut self, id: u32, f: InterpretFn) {
        self.by_id.insert(id, f);
    }

    /// Interpret `id` this way only when nested directly under `parent_id`.
    pub fn register_under(&mut self, parent_id: u32, id: u32, f: InterpretFn) {
        self.by_parent.insert((parent_id, id), f);
    }

    /// Interpreter for `id` in `ctx`, if any.
    pub fn lookup(&self, id: u32, ctx: &ChunkContext) -> Option<InterpretFn> {
        if ctx.is_micro() {
            return Some(micro::interpret);
        }
        ctx.parent_id
            .and_then(|parent| self.by_parent.get(&(parent, id)))
            .or_else(|| self.by_id.get(&id))
            .copied()
    }

    /// Ids with an interpreter regardless of parent.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_id.keys().copied()
    }

    /// `(parent, id)` pairs with a context-specific interpreter.
    pub fn parent_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.by_parent.keys().copied()
    }

    /// Decode a chunk for display.
    ///
    /// Empty for a missing chunk, a wrapper, or an id nobody interprets.
    /// A payload that does not fit yields exactly one [`Field::error`].
    pub fn interpret(&self, chunk: Option<&Chunk>, ctx: &ChunkContext) -> Vec<Field> {
        let Some(chunk) = chunk else {
            return Vec::new();
        };
        let Some(payload) = chunk.payload() else {
            return Vec::new();
        };
        let Some(f) = self.lookup(chunk.id(), ctx) else {
            return Vec::new();
        };
        match f(payload, ctx) {
            Ok(fields) => fields,
            Err(message) => {
                tracing::debug!("chunk 0x{:08X}: {}", chunk.id(), message);
                vec![Field::error(message)]
            }
        }
    }
}

// ============================================================================
// Shared decoding helpers
// ============================================================================

pub(crate) fn overlay<T: Overlay>(bytes: &[u8]) -> Result<T, String> {
    read_struct(bytes).map_err(|e| e.to_string())
}

pub(crate) fn items<T: Overlay>(bytes: &[u8]) -> Result<Vec<T>, String> {
    read_array(bytes).map_err(|e| e.to_string())
}

pub(crate) fn with_tail<T: Overlay>(bytes: &[u8]) -> Result<(T, &[u8]), String> {
    read_with_tail(bytes).map_err(|e| e.to_string())
}

/// Text of a NUL-terminated payload. The terminator is required.
pub(crate) fn terminated_string(bytes: &[u8]) -> Result<String, String> {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => Ok(String::from_utf8_lossy(&bytes[..end]).into_owned()),
        None if bytes.is_empty() => Err("empty string payload".into()),
        None => Err(format!("string of {} bytes has no terminating NUL", bytes.len())),
    }
}

/// Interpreter for payloads that are a single NUL-terminated string.
fn text(bytes: &[u8], _: &ChunkContext) -> Fields {
    let mut out = FieldList::new();
    out.string("Text", terminated_string(bytes)?);
    out.finish()
}

/// `major.minor` from a packed `major << 16 | minor` word.
pub fn format_version(version: u32) -> String {
    format!("{}.{}", version >> 16, version & 0xFFFF)
}

fn format_vec2(v: Vec2) -> String {
    format!("({}, {})", v.x, v.y)
}

fn format_vec3(v: Vec3) -> String {
    format!("({}, {}, {})", v.x, v.y, v.z)
}

fn format_quat(q: Quat) -> String {
    format!("({}, {}, {}, {})", q.x, q.y, q.z, q.w)
}

/// Builder for interpreter output.
#[derive(Debug, Default)]
pub(crate) struct FieldList(Vec<Field>);

impl FieldList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, kind: &'static str, value: impl Into<String>) {
        self.0.push(Field::new(name, kind, value));
    }

    pub fn u8(&mut self, name: impl Into<String>, v: u8) {
        self.push(name, "uint8", v.to_string());
    }

    pub fn u16(&mut self, name: impl Into<String>, v: u16) {
        self.push(name, "uint16", v.to_string());
    }

    pub fn u32(&mut self, name: impl Into<String>, v: u32) {
        self.push(name, "uint32", v.to_string());
    }

    pub fn i32(&mut self, name: impl Into<String>, v: i32) {
        self.push(name, "int32", v.to_string());
    }

    pub fn f32(&mut self, name: impl Into<String>, v: f32) {
        self.push(name, "float", v.to_string());
    }

    pub fn hex(&mut self, name: impl Into<String>, v: u32) {
        self.push(name, "hex", format!("0x{:08X}", v));
    }

    pub fn string(&mut self, name: impl Into<String>, v: impl Into<String>) {
        self.push(name, "string", v);
    }

    pub fn flag(&mut self, name: impl Into<String>, v: bool) {
        self.push(name, "bool", if v { "true" } else { "false" });
    }

    pub fn version(&mut self, name: impl Into<String>, v: u32) {
        self.push(name, "version", format_version(v));
    }

    pub fn vec2(&mut self, name: impl Into<String>, v: Vec2) {
        self.push(name, "vector2", format_vec2(v));
    }

    pub fn vec3(&mut self, name: impl Into<String>, v: Vec3) {
        self.push(name, "vector3", format_vec3(v));
    }

    pub fn quat(&mut self, name: impl Into<String>, q: Quat) {
        self.push(name, "quaternion", format_quat(q));
    }

    pub fn rgb(&mut self, name: impl Into<String>, c: Rgb) {
        self.push(name, "color", c.to_string());
    }

    pub fn rgba(&mut self, name: impl Into<String>, c: Rgba) {
        self.push(name, "color", c.to_string());
    }

    /// Entry decoded through an ordered name table.
    pub fn enumerated(&mut self, name: impl Into<String>, code: u32, table: &[&str]) {
        self.push(name, "enum", enum_name(table, code));
    }

    /// Entry listing the set flags of `value` restricted to `mask`.
    pub fn flags(&mut self, name: impl Into<String>, value: u32, mask: u32, table: &[(u32, &str)]) {
        self.push(name, "flags", flag_names(value & mask, table));
    }

    pub fn finish(self) -> Fields {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ids;
    use crate::names::FileKind;

    fn interpret(registry: &FieldInterpreters, id: u32, ctx: &ChunkContext, payload: &[u8]) -> Vec<Field> {
        registry.interpret(Some(&Chunk::leaf(id, payload.to_vec())), ctx)
    }

    #[test]
    fn test_every_interpreter_rejects_tiny_payloads() {
        let registry = FieldInterpreters::builtin();
        let top = ChunkContext::top_level(0, FileKind::Asset);
        let mut checked = 0;
        for id in registry.ids().collect::<Vec<_>>() {
            for payload in [&[][..], &[0xAB][..]] {
                let fields = interpret(&registry, id, &top, payload);
                assert_eq!(fields.len(), 1, "id 0x{:X} with {} bytes: {:?}", id, payload.len(), fields);
                assert!(fields[0].is_error(), "id 0x{:X}: {:?}", id, fields);
            }
            checked += 1;
        }
        for (parent, id) in registry.parent_pairs().collect::<Vec<_>>() {
            let ctx = ChunkContext {
                parent_id: Some(parent),
                ..top
            };
            for payload in [&[][..], &[0xAB][..]] {
                let fields = interpret(&registry, id, &ctx, payload);
                assert_eq!(fields.len(), 1, "0x{:X}/0x{:X}: {:?}", parent, id, fields);
                assert!(fields[0].is_error());
            }
            checked += 1;
        }
        assert!(checked > 40);
    }

    #[test]
    fn test_missing_chunk_and_wrapper_are_empty() {
        let registry = FieldInterpreters::builtin();
        let ctx = ChunkContext::default();
        assert!(registry.interpret(None, &ctx).is_empty());
        let mesh = Chunk::wrapper(ids::MESH, vec![]);
        assert!(registry.interpret(Some(&mesh), &ctx).is_empty());
        let unknown = Chunk::leaf(0x7777_0000, vec![1, 2, 3]);
        assert!(registry.interpret(Some(&unknown), &ctx).is_empty());
    }

    #[test]
    fn test_parent_specific_interpreter_wins() {
        let registry = FieldInterpreters::builtin();
        let under_sphere = ChunkContext {
            parent_id: Some(ids::SPHERE),
            ..Default::default()
        };
        let plain = ChunkContext::default();
        let sphere = registry.lookup(1, &under_sphere).unwrap();
        let legacy = registry.lookup(1, &plain).unwrap();
        assert_ne!(sphere as usize, legacy as usize);
    }

    #[test]
    fn test_version_format() {
        assert_eq!(format_version(0x0004_0002), "4.2");
        assert_eq!(format_version(0), "0.0");
    }

    #[test]
    fn test_terminated_string() {
        assert_eq!(terminated_string(b"abc\0junk").unwrap(), "abc");
        assert_eq!(terminated_string(b"\0").unwrap(), "");
        assert!(terminated_string(b"").is_err());
        assert!(terminated_string(b"abc").is_err());
    }
}
