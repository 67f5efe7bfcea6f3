//! Chunk name registry.
//!
//! Maps numeric ids to display labels. Numbers are reused across contexts,
//! so a lookup takes the parent id and the kind of file being viewed:
//!
//! 1. caller overrides
//! 2. the table of the file kind (definition databases only)
//! 3. `(parent, id)` pairs such as the children of spheres and rings
//! 4. the global table
//! 5. the id as hex, e.g. `0xdeadbeef`

mod tables;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chunk::ChunkContext;

/// What kind of file a chunk tree came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Regular W3D asset (`.w3d`, `.wlt`, ...).
    #[default]
    Asset,
    /// Definition database (`.ddb`).
    DefinitionDatabase,
}

impl FileKind {
    /// Guess the kind from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ddb") => Self::DefinitionDatabase,
            _ => Self::Asset,
        }
    }
}

/// Label lookup tables. Build once, pass by reference.
#[derive(Debug, Clone, Default)]
pub struct ChunkNames {
    overrides: HashMap<u32, String>,
    global: HashMap<u32, &'static str>,
    definition_db: HashMap<u32, &'static str>,
    contextual: HashMap<(u32, u32), &'static str>,
}

impl ChunkNames {
    /// Registry with the built-in tables and no overrides.
    pub fn builtin() -> Self {
        Self {
            overrides: HashMap::new(),
            global: tables::GLOBAL.iter().copied().collect(),
            definition_db: tables::DEFINITION_DB.iter().copied().collect(),
            contextual: tables::CONTEXTUAL.iter().copied().collect(),
        }
    }

    /// Registry with no tables at all; every lookup falls back to hex.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder form of [`register_override`](Self::register_override).
    pub fn with_override(mut self, id: u32, label: impl Into<String>) -> Self {
        self.register_override(id, label);
        self
    }

    /// Label `id` the same way everywhere, ahead of every table.
    pub fn register_override(&mut self, id: u32, label: impl Into<String>) {
        self.overrides.insert(id, label.into());
    }

    /// Display label of `id` seen under `parent_id` in a file of `kind`.
    pub fn label(&self, id: u32, parent_id: Option<u32>, kind: FileKind) -> String {
        if let Some(label) = self.overrides.get(&id) {
            return label.clone();
        }
        if kind == FileKind::DefinitionDatabase {
            if let Some(label) = self.definition_db.get(&id) {
                return (*label).to_string();
            }
        }
        if let Some(parent) = parent_id {
            if let Some(label) = self.contextual.get(&(parent, id)) {
                return (*label).to_string();
            }
        }
        if let Some(label) = self.global.get(&id) {
            return (*label).to_string();
        }
        hex_label(id)
    }

    /// Label of a chunk in its full context.
    ///
    /// Micro chunks have their own one-byte id space, so they never match the
    /// asset tables.
    pub fn label_in_context(&self, id: u32, ctx: &ChunkContext) -> String {
        if ctx.is_micro() && !self.overrides.contains_key(&id) {
            return format!("MICRO_CHUNK_0x{:02X}", id);
        }
        self.label(id, ctx.parent_id, ctx.kind)
    }

    /// Number of labels known without overrides.
    pub fn len(&self) -> usize {
        self.global.len() + self.definition_db.len() + self.contextual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0 && self.overrides.is_empty()
    }
}

/// Fallback label for ids no table knows.
pub fn hex_label(id: u32) -> String {
    format!("0x{:08x}", id)
}
