//! Context a chunk is seen in: ancestry, sibling position, file kind.

use super::{Chunk, ChunkPath};
use crate::format::{framing_mode, ids, FramingMode};
use crate::names::FileKind;
use crate::structs::{CompressedAnimHeader, Overlay};

/// Everything about a chunk's surroundings that labels and interpreters use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkContext {
    pub parent_id: Option<u32>,
    pub grandparent_id: Option<u32>,
    /// Index among the parent's children (or among top-level chunks).
    pub sibling_index: usize,
    /// Compressed animation flavor from a sibling header, if any.
    pub flavor: Option<u16>,
    pub kind: FileKind,
}

impl ChunkContext {
    /// Context of the top-level chunk at `index`.
    pub fn top_level(index: usize, kind: FileKind) -> Self {
        Self {
            sibling_index: index,
            kind,
            ..Default::default()
        }
    }

    /// Context of the `index`-th child of `parent`, itself seen in `self`.
    pub fn child_of(&self, parent: &Chunk, index: usize) -> Self {
        Self {
            parent_id: Some(parent.id()),
            grandparent_id: self.parent_id,
            sibling_index: index,
            flavor: sibling_flavor(parent.children()),
            kind: self.kind,
        }
    }

    /// Framing this chunk was (or will be) read and written with.
    #[inline]
    pub fn framing(&self) -> FramingMode {
        framing_mode(self.parent_id, self.grandparent_id)
    }

    #[inline]
    pub fn is_micro(&self) -> bool {
        self.framing() == FramingMode::Micro
    }

    /// Resolve the context of the chunk at `path` within `roots`.
    pub fn resolve(roots: &[Chunk], path: &ChunkPath, kind: FileKind) -> Option<Self> {
        let (&first, rest) = path.indices().split_first()?;
        let mut chunk = roots.get(first)?;
        let mut ctx = Self::top_level(first, kind);
        for &index in rest {
            let child = chunk.children().get(index)?;
            ctx = ctx.child_of(chunk, index);
            chunk = child;
        }
        Some(ctx)
    }
}

fn sibling_flavor(siblings: &[Chunk]) -> Option<u16> {
    siblings
        .iter()
        .find(|c| c.id() == ids::COMPRESSED_ANIMATION_HEADER)
        .and_then(|c| c.payload())
        .and_then(CompressedAnimHeader::from_bytes)
        .map(|h| h.flavor)
}
