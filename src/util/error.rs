//! Error types for the W3D library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for W3D operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// A JSON chunk object is missing a structural field or has it with the wrong type
    #[error("Invalid chunk object: {field} {problem}")]
    InvalidChunkObject { field: &'static str, problem: String },

    /// The JSON document itself is not shaped like an export
    #[error("Invalid JSON document: {0}")]
    InvalidDocument(String),

    /// Unsupported JSON schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(i64),

    /// RAW_DATA_HEX could not be decoded
    #[error("Invalid hex payload for chunk 0x{id:08X}: {reason}")]
    InvalidHex { id: u32, reason: String },

    /// A DATA object was given for a chunk id nobody knows how to encode
    #[error("No structured importer registered for chunk 0x{0:08X}")]
    NoImporter(u32),

    /// Micro chunk id or payload does not fit in its one-byte header fields
    #[error("Micro chunk 0x{id:X} cannot be framed: {reason}")]
    MicroChunkOverflow { id: u32, reason: String },

    /// Payload is smaller than the overlay being read from it
    #[error("Payload too small: need {needed} bytes, have {actual}")]
    PayloadTooSmall { needed: usize, actual: usize },

    /// Array element index out of bounds
    #[error("Element index {index} out of bounds (count: {count})")]
    ElementOutOfBounds { index: usize, count: usize },

    /// Chunk path does not resolve to a chunk
    #[error("No chunk at path {0}")]
    InvalidPath(String),

    /// Operation needs a leaf chunk but got a wrapper (or vice versa)
    #[error("Chunk 0x{id:08X} {reason}")]
    WrongChunkKind { id: u32, reason: &'static str },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid chunk object error for a structural field.
    pub fn chunk_field(field: &'static str, problem: impl Into<String>) -> Self {
        Self::InvalidChunkObject {
            field,
            problem: problem.into(),
        }
    }
}

/// Result type alias for W3D operations.
pub type Result<T> = std::result::Result<T, Error>;
