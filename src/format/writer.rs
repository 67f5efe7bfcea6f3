//! Chunk stream writer.
//!
//! Mirror of the reader: children are serialized into a buffer first so the
//! parent's length word is always computed from what is actually written.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};

use super::framing::*;
use crate::chunk::{Chunk, ChunkData};
use crate::util::{Error, Result};

/// Output stream for chunk data, tracking the write position.
pub struct ChunkWriter<W: Write> {
    writer: W,
    pos: u64,
}

impl ChunkWriter<BufWriter<File>> {
    /// Create a writer for the given file path, truncating it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(BufWriter::with_capacity(1024 * 1024, file)))
    }
}

impl ChunkWriter<Vec<u8>> {
    /// Create an in-memory writer.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> ChunkWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pos: 0 }
    }

    /// Get the current write position.
    #[inline]
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Write a sequence of top-level chunks.
    pub fn write_chunks(&mut self, chunks: &[Chunk]) -> Result<()> {
        for chunk in chunks {
            self.write_chunk(chunk, None, None)?;
        }
        Ok(())
    }

    /// Write one chunk seen under the given parent and grandparent.
    pub fn write_chunk(
        &mut self,
        chunk: &Chunk,
        parent_id: Option<u32>,
        grandparent_id: Option<u32>,
    ) -> Result<()> {
        match framing_mode(parent_id, grandparent_id) {
            FramingMode::Micro => self.write_micro(chunk),
            FramingMode::Standard => self.write_standard(chunk, parent_id),
        }
    }

    fn write_standard(&mut self, chunk: &Chunk, parent_id: Option<u32>) -> Result<()> {
        let children_buf;
        let payload: &[u8] = match chunk.data() {
            ChunkData::Leaf(bytes) => bytes,
            ChunkData::Children(children) => {
                let mut sub = ChunkWriter::buffer();
                for child in children {
                    sub.write_chunk(child, Some(chunk.id()), parent_id)?;
                }
                let mut buf = sub.into_inner();
                buf.extend_from_slice(chunk.trailing());
                children_buf = buf;
                &children_buf
            }
        };

        if payload.len() > LENGTH_MASK as usize {
            return Err(Error::other(format!(
                "chunk 0x{:08X} payload of {} bytes does not fit a length word",
                chunk.id(),
                payload.len()
            )));
        }

        self.writer.write_u32::<LittleEndian>(chunk.id())?;
        self.writer
            .write_u32::<LittleEndian>(join_length(payload.len() as u32, chunk.sub_chunk_flag()))?;
        self.writer.write_all(payload)?;
        self.pos += (CHUNK_HEADER_SIZE + payload.len()) as u64;
        Ok(())
    }

    fn write_micro(&mut self, chunk: &Chunk) -> Result<()> {
        let payload = match chunk.data() {
            ChunkData::Leaf(bytes) => bytes,
            ChunkData::Children(_) => {
                return Err(Error::MicroChunkOverflow {
                    id: chunk.id(),
                    reason: "micro chunks cannot have children".into(),
                })
            }
        };
        if chunk.id() as usize > MICRO_MAX {
            return Err(Error::MicroChunkOverflow {
                id: chunk.id(),
                reason: "id does not fit in one byte".into(),
            });
        }
        if payload.len() > MICRO_MAX {
            return Err(Error::MicroChunkOverflow {
                id: chunk.id(),
                reason: format!("payload of {} bytes does not fit in one byte", payload.len()),
            });
        }

        self.writer.write_u8(chunk.id() as u8)?;
        self.writer.write_u8(payload.len() as u8)?;
        self.writer.write_all(payload)?;
        self.pos += (MICRO_HEADER_SIZE + payload.len()) as u64;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Serialize top-level chunks into a new buffer.
pub fn write_chunks(chunks: &[Chunk]) -> Result<Vec<u8>> {
    let mut writer = ChunkWriter::buffer();
    writer.write_chunks(chunks)?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ids, parse_chunks};

    #[test]
    fn test_leaf_bytes() {
        let bytes = write_chunks(&[Chunk::leaf(0x1F, vec![1, 2, 3])]).unwrap();
        assert_eq!(bytes, vec![0x1F, 0, 0, 0, 3, 0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_wrapper_sets_flag_and_length() {
        let mesh = Chunk::wrapper(ids::MESH, vec![Chunk::leaf(ids::VERTICES, vec![9; 4])]);
        let bytes = write_chunks(&[mesh]).unwrap();
        assert_eq!(&bytes[4..8], &(0x8000_0000u32 | 12).to_le_bytes());
        assert_eq!(bytes.len(), 8 + 8 + 4);
    }

    #[test]
    fn test_micro_framing() {
        let wrapper = Chunk::from_parts(
            ids::LEGACY_DATA_WRAPPER,
            false,
            ChunkData::Children(vec![Chunk::leaf(1, vec![0xAA, 0xBB])]),
        );
        let bytes = write_chunks(&[wrapper]).unwrap();
        let mut expected = ids::LEGACY_DATA_WRAPPER.to_le_bytes().to_vec();
        expected.extend_from_slice(&4u32.to_le_bytes());
        expected.extend_from_slice(&[0x01, 0x02, 0xAA, 0xBB]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_micro_overflow_is_an_error() {
        let wrapper = Chunk::wrapper(ids::LEGACY_DATA_WRAPPER, vec![Chunk::leaf(0x1FF, vec![])]);
        assert!(matches!(write_chunks(&[wrapper]), Err(Error::MicroChunkOverflow { .. })));

        let wrapper = Chunk::wrapper(ids::LEGACY_DATA_WRAPPER, vec![Chunk::leaf(1, vec![0; 300])]);
        assert!(matches!(write_chunks(&[wrapper]), Err(Error::MicroChunkOverflow { .. })));
    }

    #[test]
    fn test_parse_write_identity() {
        let tree = vec![
            Chunk::wrapper(
                ids::SOUNDROBJ,
                vec![Chunk::wrapper(
                    ids::SOUNDROBJ_DEFINITION,
                    vec![Chunk::from_parts(
                        ids::SOUND_RENDER_DEF,
                        false,
                        ChunkData::Children(vec![Chunk::leaf(3, vec![1, 2, 3]), Chunk::leaf(4, vec![])]),
                    )],
                )],
            ),
            Chunk::string(ids::MESH_USER_TEXT, "end"),
        ];
        let bytes = write_chunks(&tree).unwrap();
        let parsed = parse_chunks(&bytes);
        assert!(parsed.is_clean());
        assert_eq!(parsed.chunks, tree);
        assert_eq!(write_chunks(&parsed.chunks).unwrap(), bytes);
    }

    #[test]
    fn test_position_tracking() {
        let mut w = ChunkWriter::buffer();
        w.write_chunks(&[Chunk::leaf(1, vec![0; 10]), Chunk::leaf(2, vec![])]).unwrap();
        assert_eq!(w.pos(), 18 + 8);
    }
}
