//! # W3D
//!
//! Reader, writer and inspector for the W3D chunk format used by a family of
//! legacy real-time 3D engines.
//!
//! A W3D file is a tree of tagged, length-prefixed chunks. This crate parses
//! it into an owned tree, writes it back bit-identically, decodes known
//! payloads into named fields and converts the whole tree to and from JSON.
//!
//! ## Modules
//!
//! - [`util`] - Errors and hex helpers
//! - [`format`] - Chunk ids, framing rules, binary reader and writer
//! - [`chunk`] - Chunk tree, paths, editing, documents
//! - [`structs`] - Fixed-layout payload records
//! - [`names`] - Chunk id → label registry
//! - [`interpret`] - Payload → display field decoders
//! - [`json`] - JSON export and import
//! - [`validate`] - Batch round-trip checks
//! - [`settings`] - Persistent tool settings
//!
//! ## Example
//!
//! ```ignore
//! use w3d::prelude::*;
//!
//! let mut doc = W3dDocument::new();
//! doc.load_from_file("tank.w3d")?;
//!
//! let names = ChunkNames::builtin();
//! doc.walk(|path, chunk, ctx| {
//!     println!("{} {}", path, names.label_in_context(chunk.id(), ctx));
//! });
//! ```

pub mod util;
pub mod format;
pub mod chunk;
pub mod structs;
pub mod names;
pub mod interpret;
pub mod json;
pub mod validate;
pub mod settings;

// Re-export commonly used types
pub use util::{Error, Result};
pub use chunk::{Chunk, ChunkContext, ChunkPath, W3dDocument};
pub use names::{ChunkNames, FileKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result};
    pub use crate::chunk::{Chunk, ChunkContext, ChunkData, ChunkPath, W3dDocument};
    pub use crate::format::{ids, parse_chunks, write_chunks, FramingMode};
    pub use crate::names::{ChunkNames, FileKind};
    pub use crate::interpret::FieldInterpreters;
    pub use crate::json::{from_json, to_json, JsonMode, SerializerRegistry};
    pub use crate::structs::Overlay;
}
