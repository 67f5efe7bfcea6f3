//! Index paths addressing chunks inside a document.

use std::fmt;
use std::str::FromStr;

use crate::util::Error;

/// Sequence of child indices from the document root, e.g. `0/3/1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkPath(Vec<usize>);

impl ChunkPath {
    /// Path to the top-level chunk at `index`.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of steps; 1 for top-level chunks.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of the `index`-th child of this chunk.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Path of the enclosing chunk, `None` for top-level chunks.
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Index of this chunk among its siblings.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }
}

impl fmt::Display for ChunkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", parts.join("/"))
    }
}

impl FromStr for ChunkPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidPath(s.to_string()));
        }
        trimmed
            .split('/')
            .map(|part| part.parse::<usize>().map_err(|_| Error::InvalidPath(s.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let p: ChunkPath = "0/3/1".parse().unwrap();
        assert_eq!(p.indices(), &[0, 3, 1]);
        assert_eq!(p.to_string(), "0/3/1");
        assert_eq!(p.depth(), 3);
        assert_eq!(p.last(), Some(1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ChunkPath>().is_err());
        assert!("0/x".parse::<ChunkPath>().is_err());
    }

    #[test]
    fn test_parent_child() {
        let p = ChunkPath::root(2).child(5);
        assert_eq!(p.parent(), Some(ChunkPath::root(2)));
        assert_eq!(ChunkPath::root(2).parent(), None);
    }
}
