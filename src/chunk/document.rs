//! The loaded chunk tree of one file.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use super::{Chunk, ChunkContext, ChunkPath};
use crate::format::{parse_chunks, write_chunks, ChunkWriter};
use crate::names::{ChunkNames, FileKind};
use crate::util::{Error, Result};

/// Top-level chunks of a file plus the little state kept about where they
/// came from.
#[derive(Debug, Clone, Default)]
pub struct W3dDocument {
    chunks: Vec<Chunk>,
    source_name: Option<String>,
    kind: FileKind,
    diagnostics: Vec<String>,
    use_mmap: bool,
}

/// Chunk counts over a whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub total: usize,
    pub wrappers: usize,
    pub leaves: usize,
    pub micro: usize,
    pub max_depth: usize,
    /// Sum of leaf payload sizes.
    pub payload_bytes: usize,
    pub by_label: BTreeMap<String, usize>,
}

impl W3dDocument {
    pub fn new() -> Self {
        Self {
            use_mmap: cfg!(feature = "mmap"),
            ..Default::default()
        }
    }

    /// Document over already built chunks.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks,
            ..Self::new()
        }
    }

    /// Whether file loads go through a memory map.
    pub fn set_use_mmap(&mut self, use_mmap: bool) {
        self.use_mmap = use_mmap && cfg!(feature = "mmap");
    }

    /// Drop every chunk, the source name and the diagnostics.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.source_name = None;
        self.kind = FileKind::default();
        self.diagnostics.clear();
    }

    /// Load a file, replacing whatever was loaded before.
    ///
    /// Returns `Ok(true)` if at least one top-level chunk was read. A file
    /// that stops framing part way keeps everything read up to that point;
    /// see [`diagnostics`](Self::diagnostics).
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        self.clear();

        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        let size = file.metadata()?.len();

        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        let found = if self.use_mmap && size > 0 {
            // Safety: the map is read-only and dropped before this call returns
            let mmap = unsafe { memmap2::Mmap::map(&file) }
                .map_err(|e| Error::MmapFailed(e.to_string()))?;
            self.load_from_bytes(&mmap, name)
        } else {
            let data = std::fs::read(path)?;
            self.load_from_bytes(&data, name)
        };
        self.kind = FileKind::from_path(path);

        tracing::info!(
            "loaded {}: {} top-level chunks, {} bytes{}",
            path.display(),
            self.chunks.len(),
            size,
            if self.diagnostics.is_empty() {
                String::new()
            } else {
                format!(", {} diagnostics", self.diagnostics.len())
            }
        );
        Ok(found)
    }

    /// Parse a file image, replacing whatever was loaded before.
    pub fn load_from_bytes(&mut self, data: &[u8], source_name: Option<String>) -> bool {
        self.clear();
        let outcome = parse_chunks(data);
        self.chunks = outcome.chunks;
        self.diagnostics = outcome.diagnostics;
        self.source_name = source_name;
        !self.chunks.is_empty()
    }

    /// Write the current tree to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = ChunkWriter::create(path)?;
        writer.write_chunks(&self.chunks)?;
        writer.flush()?;
        tracing::info!("saved {}: {} bytes", path.display(), writer.pos());
        Ok(())
    }

    /// Serialize the current tree.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        write_chunks(&self.chunks)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[inline]
    pub fn chunks_mut(&mut self) -> &mut Vec<Chunk> {
        &mut self.chunks
    }

    /// Replace the whole tree, keeping source name and kind.
    pub fn set_chunks(&mut self, chunks: Vec<Chunk>) {
        self.chunks = chunks;
        self.diagnostics.clear();
    }

    #[inline]
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn set_source_name(&mut self, name: Option<String>) {
        self.source_name = name;
    }

    #[inline]
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FileKind) {
        self.kind = kind;
    }

    /// Notes from the last load about levels that stopped early.
    #[inline]
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of chunks at every level.
    pub fn count(&self) -> usize {
        self.chunks.iter().map(Chunk::count).sum()
    }

    // ========================================================================
    // Path addressing
    // ========================================================================

    pub fn get(&self, path: &ChunkPath) -> Option<&Chunk> {
        let (&first, rest) = path.indices().split_first()?;
        let mut chunk = self.chunks.get(first)?;
        for &index in rest {
            chunk = chunk.children().get(index)?;
        }
        Some(chunk)
    }

    pub fn get_mut(&mut self, path: &ChunkPath) -> Option<&mut Chunk> {
        let (&first, rest) = path.indices().split_first()?;
        let mut chunk = self.chunks.get_mut(first)?;
        for &index in rest {
            chunk = chunk.children_mut()?.get_mut(index)?;
        }
        Some(chunk)
    }

    /// Ancestry and sibling context of the chunk at `path`.
    pub fn context(&self, path: &ChunkPath) -> Option<ChunkContext> {
        ChunkContext::resolve(&self.chunks, path, self.kind)
    }

    /// Insert `chunk` as child `index` of `parent` (top level for `None`).
    ///
    /// Returns the path of the inserted chunk.
    pub fn insert(
        &mut self,
        parent: Option<&ChunkPath>,
        index: usize,
        chunk: Chunk,
    ) -> Result<ChunkPath> {
        let siblings = match parent {
            None => &mut self.chunks,
            Some(path) => {
                let owner = self
                    .get_mut(path)
                    .ok_or_else(|| Error::InvalidPath(path.to_string()))?;
                let id = owner.id();
                owner.children_mut().ok_or(Error::WrongChunkKind {
                    id,
                    reason: "holds a payload, not children",
                })?
            }
        };
        if index > siblings.len() {
            return Err(Error::ElementOutOfBounds {
                index,
                count: siblings.len(),
            });
        }
        siblings.insert(index, chunk);
        Ok(match parent {
            None => ChunkPath::root(index),
            Some(path) => path.child(index),
        })
    }

    /// Remove and return the chunk at `path`.
    pub fn remove(&mut self, path: &ChunkPath) -> Result<Chunk> {
        let missing = || Error::InvalidPath(path.to_string());
        let index = path.last().ok_or_else(missing)?;
        let siblings = match path.parent() {
            None => &mut self.chunks,
            Some(parent) => self
                .get_mut(&parent)
                .and_then(Chunk::children_mut)
                .ok_or_else(missing)?,
        };
        if index >= siblings.len() {
            return Err(missing());
        }
        Ok(siblings.remove(index))
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Visit every chunk depth-first, in file order, with its path and context.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&ChunkPath, &Chunk, &ChunkContext),
    {
        for (i, chunk) in self.chunks.iter().enumerate() {
            let ctx = ChunkContext::top_level(i, self.kind);
            walk_chunk(chunk, &ChunkPath::root(i), &ctx, &mut visit);
        }
    }

    /// Counts per label, depth and kind of chunk.
    pub fn stats(&self, names: &ChunkNames) -> TreeStats {
        let mut stats = TreeStats::default();
        self.walk(|path, chunk, ctx| {
            stats.total += 1;
            stats.max_depth = stats.max_depth.max(path.depth());
            if chunk.has_children() {
                stats.wrappers += 1;
            } else {
                stats.leaves += 1;
                stats.payload_bytes += chunk.payload_or_empty().len();
            }
            if ctx.is_micro() {
                stats.micro += 1;
            }
            *stats
                .by_label
                .entry(names.label_in_context(chunk.id(), ctx))
                .or_insert(0) += 1;
        });
        stats
    }
}

fn walk_chunk<F>(chunk: &Chunk, path: &ChunkPath, ctx: &ChunkContext, visit: &mut F)
where
    F: FnMut(&ChunkPath, &Chunk, &ChunkContext),
{
    visit(path, chunk, ctx);
    for (i, child) in chunk.children().iter().enumerate() {
        let child_ctx = ctx.child_of(chunk, i);
        walk_chunk(child, &path.child(i), &child_ctx, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ids;

    fn sample() -> W3dDocument {
        W3dDocument::from_chunks(vec![
            Chunk::wrapper(
                ids::MESH,
                vec![
                    Chunk::leaf(ids::MESH_HEADER3, vec![0u8; 116]),
                    Chunk::leaf(ids::VERTICES, vec![0u8; 24]),
                ],
            ),
            Chunk::wrapper(
                ids::LEGACY_DATA_WRAPPER,
                vec![Chunk::leaf(1, vec![1]), Chunk::leaf(2, vec![2, 3])],
            ),
        ])
    }

    #[test]
    fn test_get_by_path() {
        let doc = sample();
        let path: ChunkPath = "0/1".parse().unwrap();
        assert_eq!(doc.get(&path).unwrap().id(), ids::VERTICES);
        assert!(doc.get(&ChunkPath::from_indices([0, 5])).is_none());
        assert!(doc.get(&ChunkPath::from_indices([0, 1, 0])).is_none());
        assert!(doc.get(&ChunkPath::default()).is_none());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut doc = sample();
        let mesh = ChunkPath::root(0);
        let path = doc
            .insert(Some(&mesh), 1, Chunk::string(ids::MESH_USER_TEXT, "note"))
            .unwrap();
        assert_eq!(path.to_string(), "0/1");
        assert_eq!(doc.get(&mesh).unwrap().children().len(), 3);
        assert_eq!(doc.get(&mesh).unwrap().declared_length(None), 8 + 116 + 8 + 5 + 8 + 24);

        let removed = doc.remove(&path).unwrap();
        assert_eq!(removed.id(), ids::MESH_USER_TEXT);
        assert_eq!(doc.get(&mesh).unwrap().children().len(), 2);

        // Leaves cannot take children
        let leaf = ChunkPath::from_indices([0, 0]);
        assert!(matches!(
            doc.insert(Some(&leaf), 0, Chunk::leaf(1, vec![])),
            Err(Error::WrongChunkKind { .. })
        ));
        assert!(matches!(
            doc.insert(None, 9, Chunk::leaf(1, vec![])),
            Err(Error::ElementOutOfBounds { index: 9, count: 2 })
        ));
        assert!(matches!(
            doc.remove(&ChunkPath::root(7)),
            Err(Error::InvalidPath(_))
        ));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut doc = sample();
        doc.set_source_name(Some("a.w3d".into()));
        doc.clear();
        assert!(doc.is_empty());
        assert!(doc.source_name().is_none());
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn test_load_from_bytes_replaces_tree() {
        let mut doc = sample();
        let bytes = write_chunks(&[Chunk::leaf(ids::MESH_USER_TEXT, b"x\0".to_vec())]).unwrap();
        assert!(doc.load_from_bytes(&bytes, Some("x.w3d".into())));
        assert_eq!(doc.chunks().len(), 1);
        assert_eq!(doc.source_name(), Some("x.w3d"));

        assert!(!doc.load_from_bytes(&[], None));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_walk_and_stats() {
        let doc = sample();
        let mut paths = Vec::new();
        doc.walk(|path, _, _| paths.push(path.to_string()));
        assert_eq!(paths, vec!["0", "0/0", "0/1", "1", "1/0", "1/1"]);

        let stats = doc.stats(&ChunkNames::builtin());
        assert_eq!(stats.total, 6);
        assert_eq!(stats.wrappers, 2);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.micro, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.payload_bytes, 116 + 24 + 1 + 2);
        assert_eq!(stats.by_label.get("W3D_CHUNK_VERTICES"), Some(&1));
        assert_eq!(stats.by_label.get("MICRO_CHUNK_0x01"), Some(&1));
    }
}
