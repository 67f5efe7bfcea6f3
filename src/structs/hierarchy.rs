//! Skeleton, model and level-of-detail payloads.

use std::io;

use glam::{Quat, Vec3};

use super::primitives::*;
use super::Overlay;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HierarchyHeader {
    pub version: u32,
    pub name: Name16,
    pub num_pivots: u32,
    pub center: Vec3,
}

impl Overlay for HierarchyHeader {
    const SIZE: usize = 36;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            num_pivots: get_u32(r)?,
            center: get_vec3(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        put_u32(out, self.num_pivots);
        put_vec3(out, self.center);
    }
}

/// One bone of `PIVOTS`. `parent_idx` is `0xFFFFFFFF` for the root.
#[derive(Clone, Debug, PartialEq)]
pub struct Pivot {
    pub name: Name16,
    pub parent_idx: u32,
    pub translation: Vec3,
    pub euler_angles: Vec3,
    pub rotation: Quat,
}

impl Default for Pivot {
    fn default() -> Self {
        Self {
            name: Name16::default(),
            parent_idx: u32::MAX,
            translation: Vec3::ZERO,
            euler_angles: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Overlay for Pivot {
    const SIZE: usize = 60;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            name: Name16::decode(r)?,
            parent_idx: get_u32(r)?,
            translation: get_vec3(r)?,
            euler_angles: get_vec3(r)?,
            rotation: get_quat(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.name.encode(out);
        put_u32(out, self.parent_idx);
        put_vec3(out, self.translation);
        put_vec3(out, self.euler_angles);
        put_quat(out, self.rotation);
    }
}

/// One entry of `PIVOT_FIXUPS`.
pub type PivotFixup = Matrix3x4;

/// Legacy model header (`HMODEL_HEADER`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HModelHeader {
    pub version: u32,
    pub name: Name16,
    pub hierarchy_name: Name16,
    pub num_connections: u16,
    pub pad: u16,
}

impl Overlay for HModelHeader {
    const SIZE: usize = 40;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            hierarchy_name: Name16::decode(r)?,
            num_connections: get_u16(r)?,
            pad: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        self.hierarchy_name.encode(out);
        put_u16(out, self.num_connections);
        put_u16(out, self.pad);
    }
}

/// Render object bound to a pivot (`NODE`, `COLLISION_NODE`, `SKIN_NODE`, `SHADOW_NODE`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HModelNode {
    pub render_obj_name: Name16,
    pub pivot_idx: u16,
}

impl Overlay for HModelNode {
    const SIZE: usize = 18;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            render_obj_name: Name16::decode(r)?,
            pivot_idx: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.render_obj_name.encode(out);
        put_u16(out, self.pivot_idx);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LodModelHeader {
    pub version: u32,
    pub name: Name16,
    pub num_lods: u16,
    pub pad: u16,
}

impl Overlay for LodModelHeader {
    const SIZE: usize = 24;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            num_lods: get_u16(r)?,
            pad: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        put_u16(out, self.num_lods);
        put_u16(out, self.pad);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lod {
    pub render_obj_name: Name32,
    pub lod_min: f32,
    pub lod_max: f32,
}

impl Overlay for Lod {
    const SIZE: usize = 40;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            render_obj_name: Name32::decode(r)?,
            lod_min: get_f32(r)?,
            lod_max: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.render_obj_name.encode(out);
        put_f32(out, self.lod_min);
        put_f32(out, self.lod_max);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HLodHeader {
    pub version: u32,
    pub lod_count: u32,
    pub name: Name16,
    pub hierarchy_name: Name16,
}

impl Overlay for HLodHeader {
    const SIZE: usize = 40;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            lod_count: get_u32(r)?,
            name: Name16::decode(r)?,
            hierarchy_name: Name16::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.lod_count);
        self.name.encode(out);
        self.hierarchy_name.encode(out);
    }
}

/// Header of one LOD level (or the aggregate/proxy arrays).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HLodArrayHeader {
    pub model_count: u32,
    pub max_screen_size: f32,
}

impl Overlay for HLodArrayHeader {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            model_count: get_u32(r)?,
            max_screen_size: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.model_count);
        put_f32(out, self.max_screen_size);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HLodSubObject {
    pub bone_index: u32,
    pub name: Name32,
}

impl Overlay for HLodSubObject {
    const SIZE: usize = 36;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            bone_index: get_u32(r)?,
            name: Name32::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.bone_index);
        self.name.encode(out);
    }
}
