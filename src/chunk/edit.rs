//! Payload mutation helpers.
//!
//! Lengths are never stored on a chunk, so every edit here leaves the chunk
//! consistent: the next write derives the length word from the new payload.

use super::{null_terminated, Chunk, ChunkData};
use crate::structs::Overlay;
use crate::util::{Error, Result};

impl Chunk {
    fn leaf_payload_mut(&mut self) -> Result<&mut Vec<u8>> {
        let id = self.id;
        match &mut self.data {
            ChunkData::Leaf(bytes) => Ok(bytes),
            ChunkData::Children(_) => Err(Error::WrongChunkKind {
                id,
                reason: "holds children, not a payload",
            }),
        }
    }

    /// Decode the fixed-size struct at the start of the payload.
    pub fn read_struct<T: Overlay>(&self) -> Result<T> {
        let payload = self.payload().ok_or(Error::WrongChunkKind {
            id: self.id,
            reason: "holds children, not a payload",
        })?;
        T::from_bytes(payload).ok_or(Error::PayloadTooSmall {
            needed: T::SIZE,
            actual: payload.len(),
        })
    }

    /// Run `mutate` over a typed copy of the leading struct and write it back.
    ///
    /// Bytes past the struct are kept as they are.
    pub fn edit_struct<T: Overlay>(&mut self, mutate: impl FnOnce(&mut T)) -> Result<()> {
        let mut value: T = self.read_struct()?;
        mutate(&mut value);
        let payload = self.leaf_payload_mut()?;
        payload[..T::SIZE].copy_from_slice(&value.to_bytes());
        Ok(())
    }

    /// Run `mutate` over element `index` of a payload that is an array of `T`.
    pub fn edit_element<T: Overlay>(
        &mut self,
        index: usize,
        mutate: impl FnOnce(&mut T),
    ) -> Result<()> {
        let payload = self.leaf_payload_mut()?;
        let count = payload.len() / T::SIZE;
        if index >= count {
            return Err(Error::ElementOutOfBounds { index, count });
        }
        let range = index * T::SIZE..(index + 1) * T::SIZE;
        let mut value = T::from_bytes(&payload[range.clone()]).ok_or(Error::PayloadTooSmall {
            needed: T::SIZE,
            actual: payload.len(),
        })?;
        mutate(&mut value);
        payload[range].copy_from_slice(&value.to_bytes());
        Ok(())
    }

    /// Replace the payload with `text` and a terminating NUL.
    pub fn set_string(&mut self, text: &str) -> Result<()> {
        *self.leaf_payload_mut()? = null_terminated(text);
        Ok(())
    }

    /// Replace the whole payload.
    pub fn set_payload(&mut self, payload: impl Into<Vec<u8>>) -> Result<()> {
        *self.leaf_payload_mut()? = payload.into();
        Ok(())
    }

    /// Replace the whole payload with an array of overlays.
    pub fn set_array<T: Overlay>(&mut self, items: &[T]) -> Result<()> {
        let mut bytes = Vec::with_capacity(items.len() * T::SIZE);
        for item in items {
            item.encode(&mut bytes);
        }
        self.set_payload(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ids, write_chunks};
    use crate::structs::{MaterialInfo, Triangle};
    use glam::Vec3;

    #[test]
    fn test_edit_struct_recomputes_length() {
        let mut chunk = Chunk::leaf(ids::MATERIAL_INFO, MaterialInfo::default().to_bytes());
        chunk
            .edit_struct::<MaterialInfo>(|m| {
                m.pass_count = 2;
                m.texture_count = 5;
            })
            .unwrap();
        let info: MaterialInfo = chunk.read_struct().unwrap();
        assert_eq!(info.pass_count, 2);
        assert_eq!(info.texture_count, 5);
        let bytes = write_chunks(&[chunk]).unwrap();
        assert_eq!(&bytes[4..8], &16u32.to_le_bytes());
    }

    #[test]
    fn test_edit_struct_too_small() {
        let mut chunk = Chunk::leaf(ids::MATERIAL_INFO, vec![1, 2]);
        let err = chunk.edit_struct::<MaterialInfo>(|_| {}).unwrap_err();
        assert!(matches!(err, Error::PayloadTooSmall { needed: 16, actual: 2 }));
    }

    #[test]
    fn test_edit_struct_on_wrapper_fails() {
        let mut chunk = Chunk::wrapper(ids::MESH, vec![]);
        assert!(matches!(
            chunk.edit_struct::<MaterialInfo>(|_| {}),
            Err(Error::WrongChunkKind { .. })
        ));
    }

    #[test]
    fn test_set_string_changes_length() {
        let mut chunk = Chunk::string(ids::TEXTURE_NAME, "a.tga");
        chunk.set_string("longer_name.dds").unwrap();
        assert_eq!(chunk.declared_length(None), 16);
        let bytes = write_chunks(&[chunk]).unwrap();
        assert_eq!(&bytes[4..8], &16u32.to_le_bytes());
    }

    #[test]
    fn test_edit_element() {
        let tris = vec![Triangle::default(); 3];
        let mut chunk = Chunk::leaf(ids::TRIANGLES, vec![]);
        chunk.set_array(&tris).unwrap();
        chunk
            .edit_element::<Triangle>(2, |t| {
                t.vindex = [4, 5, 6];
                t.normal = Vec3::Z;
            })
            .unwrap();
        let payload = chunk.payload().unwrap();
        let third = Triangle::from_bytes(&payload[64..]).unwrap();
        assert_eq!(third.vindex, [4, 5, 6]);
        assert_eq!(third.normal, Vec3::Z);
        assert!(matches!(
            chunk.edit_element::<Triangle>(3, |_| {}),
            Err(Error::ElementOutOfBounds { index: 3, count: 3 })
        ));
    }
}
