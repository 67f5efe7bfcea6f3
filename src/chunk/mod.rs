//! In-memory chunk tree.
//!
//! A [`Chunk`] owns its children outright. There is no parent pointer: the
//! ancestry a chunk needs for framing and labeling is passed down explicitly
//! while walking, or recovered from a [`ChunkPath`] through the owning
//! [`W3dDocument`].

mod context;
mod document;
mod edit;
mod path;

pub use context::*;
pub use document::*;
pub use path::*;

use crate::format::{framed_size, framing_mode};

/// Payload of a chunk: raw bytes or an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkData {
    Leaf(Vec<u8>),
    Children(Vec<Chunk>),
}

/// One framed record of a W3D file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    id: u32,
    /// Children bit as it appears (or will appear) in the length word.
    sub_chunk_flag: bool,
    data: ChunkData,
    /// Bytes after the last child that did not frame as a chunk.
    trailing: Vec<u8>,
}

impl Chunk {
    /// Create a leaf chunk.
    pub fn leaf(id: u32, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            sub_chunk_flag: false,
            data: ChunkData::Leaf(payload.into()),
            trailing: Vec::new(),
        }
    }

    /// Create a wrapper chunk with the children bit set.
    pub fn wrapper(id: u32, children: Vec<Chunk>) -> Self {
        Self {
            id,
            sub_chunk_flag: true,
            data: ChunkData::Children(children),
            trailing: Vec::new(),
        }
    }

    /// Create a leaf holding a NUL-terminated string.
    pub fn string(id: u32, text: &str) -> Self {
        Self::leaf(id, null_terminated(text))
    }

    pub(crate) fn from_parts(id: u32, sub_chunk_flag: bool, data: ChunkData) -> Self {
        Self {
            id,
            sub_chunk_flag,
            data,
            trailing: Vec::new(),
        }
    }

    /// Attach unframed bytes that follow the children. Ignored on leaves.
    pub(crate) fn with_trailing(mut self, trailing: Vec<u8>) -> Self {
        if self.has_children() {
            self.trailing = trailing;
        }
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Children bit written into the length word.
    ///
    /// Usually equal to [`has_children`](Self::has_children); differs for
    /// forced wrappers whose producer left the bit clear.
    #[inline]
    pub fn sub_chunk_flag(&self) -> bool {
        self.sub_chunk_flag
    }

    #[inline]
    pub fn set_sub_chunk_flag(&mut self, flag: bool) {
        self.sub_chunk_flag = flag;
    }

    /// Whether this chunk holds children (and not raw bytes).
    #[inline]
    pub fn has_children(&self) -> bool {
        matches!(self.data, ChunkData::Children(_))
    }

    #[inline]
    pub fn data(&self) -> &ChunkData {
        &self.data
    }

    /// Raw payload of a leaf, `None` for wrappers.
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.data {
            ChunkData::Leaf(bytes) => Some(bytes),
            ChunkData::Children(_) => None,
        }
    }

    /// Raw payload of a leaf, empty for wrappers.
    pub fn payload_or_empty(&self) -> &[u8] {
        self.payload().unwrap_or(&[])
    }

    /// Children of a wrapper, empty for leaves.
    pub fn children(&self) -> &[Chunk] {
        match &self.data {
            ChunkData::Children(children) => children,
            ChunkData::Leaf(_) => &[],
        }
    }

    /// Mutable children of a wrapper, `None` for leaves.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Chunk>> {
        match &mut self.data {
            ChunkData::Children(children) => Some(children),
            ChunkData::Leaf(_) => None,
        }
    }

    /// Bytes kept after the last child of a damaged wrapper, written back
    /// unchanged. Always empty for leaves.
    #[inline]
    pub fn trailing(&self) -> &[u8] {
        &self.trailing
    }

    /// Drop the unframed bytes after the children.
    pub fn clear_trailing(&mut self) {
        self.trailing.clear();
    }

    /// Find the first direct child with the given id.
    pub fn child_by_id(&self, id: u32) -> Option<&Chunk> {
        self.children().iter().find(|c| c.id == id)
    }

    /// Payload length as it would be declared when written under `parent_id`.
    ///
    /// Always derived from the current content; children are measured with the
    /// framing they get inside this chunk.
    pub fn declared_length(&self, parent_id: Option<u32>) -> usize {
        match &self.data {
            ChunkData::Leaf(bytes) => bytes.len(),
            ChunkData::Children(children) => {
                let mode = framing_mode(Some(self.id), parent_id);
                children
                    .iter()
                    .map(|c| framed_size(mode, c.declared_length(Some(self.id))))
                    .sum::<usize>()
                    + self.trailing.len()
            }
        }
    }

    /// Number of chunks in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Chunk::count).sum::<usize>()
    }
}

/// Encode `text` followed by a single NUL.
pub(crate) fn null_terminated(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 1);
    out.extend_from_slice(text.as_bytes());
    out.push(0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ids;

    #[test]
    fn test_leaf_basics() {
        let c = Chunk::leaf(ids::VERTICES, vec![0u8; 24]);
        assert!(!c.has_children());
        assert!(!c.sub_chunk_flag());
        assert_eq!(c.declared_length(Some(ids::MESH)), 24);
        assert!(c.children().is_empty());
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn test_wrapper_length_is_derived() {
        let mut mesh = Chunk::wrapper(
            ids::MESH,
            vec![Chunk::leaf(ids::VERTICES, vec![0u8; 12]), Chunk::leaf(ids::VERTEX_NORMALS, vec![])],
        );
        assert_eq!(mesh.declared_length(None), 8 + 12 + 8);
        mesh.children_mut().unwrap().push(Chunk::string(ids::MESH_USER_TEXT, "hi"));
        assert_eq!(mesh.declared_length(None), 8 + 12 + 8 + 8 + 3);
        assert_eq!(mesh.count(), 4);
    }

    #[test]
    fn test_micro_children_length() {
        let wrapper = Chunk::wrapper(
            ids::LEGACY_DATA_WRAPPER,
            vec![Chunk::leaf(1, vec![0xAA, 0xBB]), Chunk::leaf(2, vec![])],
        );
        assert_eq!(wrapper.declared_length(None), 4 + 2);
    }

    #[test]
    fn test_string_chunk() {
        let c = Chunk::string(ids::TEXTURE_NAME, "rock.tga");
        assert_eq!(c.payload().unwrap(), b"rock.tga\0");
    }
}
