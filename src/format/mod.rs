//! Low-level W3D chunk framing.
//!
//! A W3D file is a flat sequence of chunks; a chunk payload is either raw
//! bytes or, recursively, more chunks.
//!
//! ## Standard chunk
//!
//! ```text
//! +------------------+
//! | Id               |  4 bytes (u32 LE)
//! +------------------+
//! | Length word      |  4 bytes (u32 LE), bit 31 = has children
//! +------------------+
//! | Payload          |  Length & 0x7FFFFFFF bytes
//! +------------------+
//! ```
//!
//! ## Micro chunk
//!
//! Used for the children of a few legacy containers (see [`framing_mode`]).
//!
//! ```text
//! +------+--------+-----------------+
//! | Id   | Length | Payload         |
//! | u8   | u8     | Length bytes    |
//! +------+--------+-----------------+
//! ```

mod framing;
pub mod ids;
mod reader;
mod writer;

pub use framing::*;
pub use reader::*;
pub use writer::*;
