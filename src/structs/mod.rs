//! Binary struct overlays for known chunk payloads.
//!
//! Every overlay is decoded and encoded field by field in little-endian
//! order, so the layout is fixed by code rather than by the host compiler.
//! Structs that carry natural C padding keep the padding bytes as fields, so
//! decoding then encoding returns the original bytes.

mod animation;
mod hierarchy;
mod material;
mod mesh;
mod objects;
mod primitives;

pub use animation::*;
pub use hierarchy::*;
pub use material::*;
pub use mesh::*;
pub use objects::*;
pub use primitives::*;

use std::fmt;
use std::io;

/// A fixed-size little-endian record that can be laid over payload bytes.
pub trait Overlay: Sized + Clone + fmt::Debug {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Decode from the front of `r`, advancing it.
    fn decode(r: &mut &[u8]) -> io::Result<Self>;

    /// Append the encoded form to `out`.
    fn encode(&self, out: &mut Vec<u8>);

    /// Decode from the start of `bytes`, `None` if it is too short.
    fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let mut r = &bytes[..Self::SIZE];
        Self::decode(&mut r).ok()
    }

    /// Encode into a new buffer of exactly [`SIZE`](Self::SIZE) bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::SIZE);
        self.encode(&mut out);
        out
    }
}

/// Why a payload cannot be viewed as a given overlay or array of overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Fewer bytes than one element.
    TooSmall { needed: usize, actual: usize },
    /// Length is not a whole number of elements.
    Misaligned { element: usize, actual: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { needed, actual } => {
                write!(f, "payload too small: need {} bytes, have {}", needed, actual)
            }
            Self::Misaligned { element, actual } => write!(
                f,
                "payload of {} bytes is not a multiple of the {} byte element size",
                actual, element
            ),
        }
    }
}

/// Decode a leading struct.
pub fn read_struct<T: Overlay>(bytes: &[u8]) -> Result<T, LayoutError> {
    T::from_bytes(bytes).ok_or(LayoutError::TooSmall {
        needed: T::SIZE,
        actual: bytes.len(),
    })
}

/// Decode a payload that must be a non-empty whole number of `T`.
pub fn read_array<T: Overlay>(bytes: &[u8]) -> Result<Vec<T>, LayoutError> {
    if bytes.len() < T::SIZE {
        return Err(LayoutError::TooSmall {
            needed: T::SIZE,
            actual: bytes.len(),
        });
    }
    if bytes.len() % T::SIZE != 0 {
        return Err(LayoutError::Misaligned {
            element: T::SIZE,
            actual: bytes.len(),
        });
    }
    Ok(bytes
        .chunks_exact(T::SIZE)
        .filter_map(T::from_bytes)
        .collect())
}

/// Decode a header struct followed by variable trailing data.
pub fn read_with_tail<T: Overlay>(bytes: &[u8]) -> Result<(T, &[u8]), LayoutError> {
    let header = read_struct::<T>(bytes)?;
    Ok((header, &bytes[T::SIZE..]))
}

/// Encode a slice of overlays back to back.
pub fn encode_array<T: Overlay>(items: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(items.len() * T::SIZE);
    for item in items {
        item.encode(&mut out);
    }
    out
}
