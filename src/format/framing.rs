//! Framing constants and the contextual framing rules.

use super::ids;

/// Bit in the raw length word signaling that the payload holds child chunks.
pub const SUB_CHUNK_FLAG: u32 = 0x8000_0000;

/// Mask to extract the payload length from the raw length word.
pub const LENGTH_MASK: u32 = 0x7FFF_FFFF;

/// Declared lengths above this are treated as corruption, never allocated.
pub const MAX_CHUNK_LENGTH: u32 = 100_000_000;

/// Size of a standard chunk header (u32 id + u32 length word).
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Size of a micro chunk header (u8 id + u8 length).
pub const MICRO_HEADER_SIZE: usize = 2;

/// Largest id or payload a micro chunk can carry.
pub const MICRO_MAX: usize = u8::MAX as usize;

/// Nesting depth past which wrappers are kept as opaque leaves.
pub const MAX_DEPTH: usize = 64;

/// How the children of a chunk are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramingMode {
    /// u32 id, u32 length word with the children bit, recursive.
    Standard,
    /// u8 id, u8 length, always a leaf.
    Micro,
}

/// Framing used by a chunk whose parent and grandparent have the given ids.
///
/// Top-level chunks pass `None` for both and are always standard.
#[inline]
pub const fn framing_mode(parent_id: Option<u32>, grandparent_id: Option<u32>) -> FramingMode {
    match (parent_id, grandparent_id) {
        (Some(ids::LEGACY_DATA_WRAPPER), _) => FramingMode::Micro,
        (Some(ids::SOUND_RENDER_DEF), Some(ids::SOUNDROBJ_DEFINITION))
        | (Some(ids::SOUND_RENDER_DEF), Some(ids::SOUNDROBJ_DEFINITION_EXT)) => FramingMode::Micro,
        _ => FramingMode::Standard,
    }
}

/// Ids parsed as wrappers even when the children bit is clear.
pub const FORCED_WRAPPERS: &[u32] = &[
    ids::MESH,
    ids::DAMAGE,
    ids::MATERIALS3,
    ids::MATERIAL3,
    ids::MATERIAL3_DC_MAP,
    ids::MATERIAL3_DI_MAP,
    ids::MATERIAL3_SC_MAP,
    ids::MATERIAL3_SI_MAP,
    ids::PRELIT_UNLIT,
    ids::PRELIT_VERTEX,
    ids::PRELIT_LIGHTMAP_MULTI_PASS,
    ids::PRELIT_LIGHTMAP_MULTI_TEXTURE,
    ids::VERTEX_MATERIALS,
    ids::VERTEX_MATERIAL,
    ids::TEXTURES,
    ids::TEXTURE,
    ids::MATERIAL_PASS,
    ids::TEXTURE_STAGE,
    ids::SHADER_MATERIALS,
    ids::SHADER_MATERIAL,
    ids::DEFORM,
    ids::DEFORM_SET,
    ids::DEFORM_KEYFRAME,
    ids::AABTREE,
    ids::HIERARCHY,
    ids::ANIMATION,
    ids::COMPRESSED_ANIMATION,
    ids::MORPH_ANIMATION,
    ids::MORPHANIM_CHANNEL,
    ids::HMODEL,
    ids::LODMODEL,
    ids::COLLECTION,
    ids::LIGHT,
    ids::EMITTER,
    ids::AGGREGATE,
    ids::HLOD,
    ids::HLOD_LOD_ARRAY,
    ids::HLOD_AGGREGATE_ARRAY,
    ids::HLOD_PROXY_ARRAY,
    ids::SPHERE,
    ids::RING,
    ids::LIGHTSCAPE,
    ids::LIGHTSCAPE_LIGHT,
    ids::DAZZLE,
    ids::SOUNDROBJ,
    ids::SOUNDROBJ_DEFINITION,
    ids::SOUNDROBJ_DEFINITION_EXT,
    ids::SHDMESH,
    ids::SHDSUBMESH,
    ids::LEGACY_DATA_WRAPPER,
];

/// Check if `id` is always parsed as a wrapper.
#[inline]
pub fn is_forced_wrapper(id: u32) -> bool {
    FORCED_WRAPPERS.contains(&id)
}

/// Split a raw length word into (payload length, children flag).
#[inline]
pub const fn split_length(raw: u32) -> (u32, bool) {
    (raw & LENGTH_MASK, (raw & SUB_CHUNK_FLAG) != 0)
}

/// Build a raw length word from payload length and children flag.
#[inline]
pub const fn join_length(length: u32, sub_chunks: bool) -> u32 {
    if sub_chunks {
        (length & LENGTH_MASK) | SUB_CHUNK_FLAG
    } else {
        length & LENGTH_MASK
    }
}

/// Bytes a child occupies in its parent's payload, header included.
#[inline]
pub const fn framed_size(mode: FramingMode, payload_len: usize) -> usize {
    match mode {
        FramingMode::Standard => CHUNK_HEADER_SIZE + payload_len,
        FramingMode::Micro => MICRO_HEADER_SIZE + payload_len,
    }
}
