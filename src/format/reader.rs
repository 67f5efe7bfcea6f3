//! Chunk stream reader.
//!
//! Frames a byte buffer into a [`Chunk`] tree. Malformed input never fails the
//! parse: the level that hits a bad header stops, everything framed before it
//! is kept, and a diagnostic is recorded. Inside a wrapper the unframed rest
//! of the payload is kept as [`Chunk::trailing`] so a save loses nothing.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use super::framing::*;
use crate::chunk::{Chunk, ChunkData};

/// Result of framing a byte buffer.
#[derive(Debug, Default, Clone)]
pub struct ParseOutcome {
    /// Top-level chunks, in file order.
    pub chunks: Vec<Chunk>,
    /// Human-readable notes about anything that stopped a level early.
    pub diagnostics: Vec<String>,
}

impl ParseOutcome {
    /// True when every level framed cleanly to its last byte.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a whole W3D file image.
pub fn parse_chunks(data: &[u8]) -> ParseOutcome {
    let mut reader = ChunkReader::default();
    let level = reader.read_level(data, None, None, 0, 0);
    ParseOutcome {
        chunks: level.chunks,
        diagnostics: reader.diagnostics,
    }
}

/// Chunks framed from one nesting level.
struct Level {
    chunks: Vec<Chunk>,
    /// Bytes accounted for by `chunks`.
    consumed: usize,
    /// Whether the level and everything below it framed exactly.
    clean: bool,
}

/// Recursive framer. Holds only the diagnostics gathered so far.
#[derive(Default)]
struct ChunkReader {
    diagnostics: Vec<String>,
}

impl ChunkReader {
    /// Frame one nesting level. `base` is the absolute offset of `bytes`,
    /// used in diagnostics only.
    fn read_level(
        &mut self,
        bytes: &[u8],
        parent_id: Option<u32>,
        grandparent_id: Option<u32>,
        depth: usize,
        base: usize,
    ) -> Level {
        match framing_mode(parent_id, grandparent_id) {
            FramingMode::Standard => self.read_standard(bytes, parent_id, depth, base),
            FramingMode::Micro => self.read_micro(bytes, base),
        }
    }

    fn read_standard(
        &mut self,
        bytes: &[u8],
        parent_id: Option<u32>,
        depth: usize,
        base: usize,
    ) -> Level {
        let mut chunks = Vec::new();
        let mut clean = true;
        let mut consumed = 0;
        let mut cursor = Cursor::new(bytes);

        while (cursor.position() as usize) < bytes.len() {
            let start = cursor.position() as usize;
            let remaining = bytes.len() - start;
            if remaining < CHUNK_HEADER_SIZE {
                self.note(format!(
                    "{} trailing bytes at offset {} are too short for a chunk header",
                    remaining,
                    base + start
                ));
                clean = false;
                break;
            }

            let (id, raw) = match (
                cursor.read_u32::<LittleEndian>(),
                cursor.read_u32::<LittleEndian>(),
            ) {
                (Ok(id), Ok(raw)) => (id, raw),
                _ => {
                    self.note(format!("unreadable chunk header at offset {}", base + start));
                    clean = false;
                    break;
                }
            };

            let (length, flag) = split_length(raw);
            let body = start + CHUNK_HEADER_SIZE;
            let available = bytes.len() - body;

            if length > MAX_CHUNK_LENGTH {
                self.note(format!(
                    "chunk 0x{:08X} at offset {} declares {} bytes, above the {} byte ceiling",
                    id,
                    base + start,
                    length,
                    MAX_CHUNK_LENGTH
                ));
                clean = false;
                break;
            }
            if length as usize > available {
                self.note(format!(
                    "chunk 0x{:08X} at offset {} declares {} bytes but only {} remain",
                    id,
                    base + start,
                    length,
                    available
                ));
                clean = false;
                break;
            }

            let payload = &bytes[body..body + length as usize];
            let chunk = if flag || is_forced_wrapper(id) {
                if depth >= MAX_DEPTH {
                    self.note(format!(
                        "chunk 0x{:08X} at offset {} nests deeper than {} levels, kept as raw bytes",
                        id,
                        base + start,
                        MAX_DEPTH
                    ));
                    clean = false;
                    Chunk::from_parts(id, flag, ChunkData::Leaf(payload.to_vec()))
                } else {
                    self.read_wrapper(id, flag, payload, parent_id, depth, base + body, &mut clean)
                }
            } else {
                Chunk::from_parts(id, false, ChunkData::Leaf(payload.to_vec()))
            };
            chunks.push(chunk);

            // Siblings are found from the header, never from where the child parse stopped.
            consumed = body + length as usize;
            cursor.set_position(consumed as u64);
        }

        Level {
            chunks,
            consumed,
            clean,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn read_wrapper(
        &mut self,
        id: u32,
        flag: bool,
        payload: &[u8],
        parent_id: Option<u32>,
        depth: usize,
        base: usize,
        clean: &mut bool,
    ) -> Chunk {
        if flag {
            let level = self.read_level(payload, Some(id), parent_id, depth + 1, base);
            *clean &= level.clean;
            return Chunk::from_parts(id, true, ChunkData::Children(level.chunks))
                .with_trailing(payload[level.consumed..].to_vec());
        }

        // Forced wrapper with the bit clear: only accept children that account
        // for every payload byte, otherwise the chunk stays a leaf.
        let mut attempt = ChunkReader::default();
        let level = attempt.read_level(payload, Some(id), parent_id, depth + 1, base);
        if level.clean {
            Chunk::from_parts(id, false, ChunkData::Children(level.chunks))
        } else {
            tracing::debug!(
                "chunk 0x{:08X} at offset {} does not frame as children, kept as leaf",
                id,
                base
            );
            Chunk::from_parts(id, false, ChunkData::Leaf(payload.to_vec()))
        }
    }

    fn read_micro(&mut self, bytes: &[u8], base: usize) -> Level {
        let mut chunks = Vec::new();
        let mut cursor = Cursor::new(bytes);

        while (cursor.position() as usize) < bytes.len() {
            let start = cursor.position() as usize;
            let (id, length) = match (cursor.read_u8(), cursor.read_u8()) {
                (Ok(id), Ok(length)) => (id, length as usize),
                _ => {
                    self.note(format!(
                        "micro chunk header at offset {} is truncated",
                        base + start
                    ));
                    return Level {
                        chunks,
                        consumed: start,
                        clean: false,
                    };
                }
            };
            let body = start + MICRO_HEADER_SIZE;
            if body + length > bytes.len() {
                self.note(format!(
                    "micro chunk 0x{:02X} at offset {} declares {} bytes but only {} remain",
                    id,
                    base + start,
                    length,
                    bytes.len() - body
                ));
                return Level {
                    chunks,
                    consumed: start,
                    clean: false,
                };
            }
            chunks.push(Chunk::leaf(u32::from(id), bytes[body..body + length].to_vec()));
            cursor.set_position((body + length) as u64);
        }

        Level {
            chunks,
            consumed: bytes.len(),
            clean: true,
        }
    }

    fn note(&mut self, message: String) {
        tracing::warn!("{}", message);
        self.diagnostics.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ids;

    fn header(id: u32, raw_len: u32) -> Vec<u8> {
        let mut out = id.to_le_bytes().to_vec();
        out.extend_from_slice(&raw_len.to_le_bytes());
        out
    }

    #[test]
    fn test_single_leaf() {
        let mut data = header(ids::MESH_USER_TEXT, 3);
        data.extend_from_slice(b"hi\0");
        let out = parse_chunks(&data);
        assert!(out.is_clean());
        assert_eq!(out.chunks.len(), 1);
        assert_eq!(out.chunks[0].payload().unwrap(), b"hi\0");
    }

    #[test]
    fn test_micro_children_of_data_wrapper() {
        let mut data = header(ids::LEGACY_DATA_WRAPPER, 4);
        data.extend_from_slice(&[0x01, 0x02, 0xAA, 0xBB]);
        let out = parse_chunks(&data);
        assert!(out.is_clean());
        let wrapper = &out.chunks[0];
        assert!(wrapper.has_children());
        assert_eq!(wrapper.children().len(), 1);
        let child = &wrapper.children()[0];
        assert_eq!(child.id(), 1);
        assert_eq!(child.payload().unwrap(), &[0xAA, 0xBB]);
    }

    #[test]
    fn test_micro_overrun_stops_level() {
        let mut data = header(ids::LEGACY_DATA_WRAPPER, 0x8000_0006);
        data.extend_from_slice(&[0x01, 0x01, 0x10, 0x02, 0x09, 0x00]);
        let out = parse_chunks(&data);
        assert!(!out.is_clean());
        assert_eq!(out.chunks[0].children().len(), 1);
    }

    #[test]
    fn test_oversized_length_stops() {
        let mut data = header(ids::MESH_USER_TEXT, 1);
        data.push(0);
        data.extend_from_slice(&header(ids::VERTICES, MAX_CHUNK_LENGTH + 1));
        let out = parse_chunks(&data);
        assert_eq!(out.chunks.len(), 1);
        assert_eq!(out.diagnostics.len(), 1);
    }

    #[test]
    fn test_trailing_bytes_in_payload_do_not_leak() {
        // Hierarchy with one 4-byte child and 3 bytes of padding, then a sibling
        let mut inner = header(ids::HIERARCHY_HEADER, 4);
        inner.extend_from_slice(&[1, 2, 3, 4]);
        inner.extend_from_slice(&[0, 0, 0]);
        let mut data = header(ids::HIERARCHY, 0x8000_0000 | inner.len() as u32);
        data.extend_from_slice(&inner);
        data.extend_from_slice(&header(ids::MESH_USER_TEXT, 1));
        data.push(0);

        let out = parse_chunks(&data);
        assert_eq!(out.chunks.len(), 2);
        assert_eq!(out.chunks[0].children().len(), 1);
        assert_eq!(out.chunks[0].trailing(), &[0, 0, 0]);
        assert_eq!(out.chunks[1].id(), ids::MESH_USER_TEXT);
    }

    #[test]
    fn test_damaged_wrapper_keeps_unframed_bytes() {
        // One good child, then a header that overruns the wrapper
        let mut inner = header(ids::VERTICES, 4);
        inner.extend_from_slice(&[1, 2, 3, 4]);
        inner.extend_from_slice(&header(ids::VERTEX_NORMALS, 0x100));
        inner.extend_from_slice(&[9, 9]);
        let mut data = header(ids::MESH, 0x8000_0000 | inner.len() as u32);
        data.extend_from_slice(&inner);

        let out = parse_chunks(&data);
        assert!(!out.is_clean());
        let mesh = &out.chunks[0];
        assert_eq!(mesh.children().len(), 1);
        assert_eq!(mesh.trailing().len(), 8 + 2);
        assert_eq!(mesh.declared_length(None), inner.len());
        assert_eq!(crate::format::write_chunks(&out.chunks).unwrap(), data);
    }

    #[test]
    fn test_forced_wrapper_falls_back_to_leaf() {
        // MESH without the bit, payload is not a chunk sequence
        let mut data = header(ids::MESH, 5);
        data.extend_from_slice(&[1, 2, 3, 4, 5]);
        let out = parse_chunks(&data);
        assert!(out.is_clean());
        assert!(!out.chunks[0].has_children());
        assert_eq!(out.chunks[0].payload().unwrap().len(), 5);
    }
}
