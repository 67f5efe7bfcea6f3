//! Mesh payloads: headers, triangles, skinning, AABTree.

use std::io;

use byteorder::ReadBytesExt;
use glam::Vec3;

use super::primitives::*;
use super::Overlay;

/// Current mesh header (`MESH_HEADER3`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshHeader3 {
    pub version: u32,
    pub attributes: u32,
    pub mesh_name: Name16,
    pub container_name: Name16,
    pub num_tris: u32,
    pub num_vertices: u32,
    pub num_materials: u32,
    pub num_damage_stages: u32,
    pub sort_level: i32,
    pub prelit_version: u32,
    pub future_count: u32,
    pub vertex_channels: u32,
    pub face_channels: u32,
    pub min: Vec3,
    pub max: Vec3,
    pub sph_center: Vec3,
    pub sph_radius: f32,
}

impl Overlay for MeshHeader3 {
    const SIZE: usize = 116;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            attributes: get_u32(r)?,
            mesh_name: Name16::decode(r)?,
            container_name: Name16::decode(r)?,
            num_tris: get_u32(r)?,
            num_vertices: get_u32(r)?,
            num_materials: get_u32(r)?,
            num_damage_stages: get_u32(r)?,
            sort_level: get_i32(r)?,
            prelit_version: get_u32(r)?,
            future_count: get_u32(r)?,
            vertex_channels: get_u32(r)?,
            face_channels: get_u32(r)?,
            min: get_vec3(r)?,
            max: get_vec3(r)?,
            sph_center: get_vec3(r)?,
            sph_radius: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.attributes);
        self.mesh_name.encode(out);
        self.container_name.encode(out);
        put_u32(out, self.num_tris);
        put_u32(out, self.num_vertices);
        put_u32(out, self.num_materials);
        put_u32(out, self.num_damage_stages);
        put_i32(out, self.sort_level);
        put_u32(out, self.prelit_version);
        put_u32(out, self.future_count);
        put_u32(out, self.vertex_channels);
        put_u32(out, self.face_channels);
        put_vec3(out, self.min);
        put_vec3(out, self.max);
        put_vec3(out, self.sph_center);
        put_f32(out, self.sph_radius);
    }
}

/// Obsolete mesh header (`MESH_HEADER`, id `0x0001` directly under a mesh).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegacyMeshHeader {
    pub version: u32,
    pub mesh_name: Name16,
    pub attributes: u32,
    pub num_tris: u32,
    pub num_quads: u32,
    pub num_sr_tris: u32,
    pub num_pov_tris: u32,
    pub num_pov_quads: u32,
    pub num_vertices: u32,
    pub num_normals: u32,
    pub num_sr_normals: u32,
    pub num_tex_coords: u32,
    pub num_materials: u32,
    pub num_vert_colors: u32,
    pub num_vert_influences: u32,
    pub num_damage_stages: u32,
    pub future_counts: [u32; 5],
    pub lod_min: f32,
    pub lod_max: f32,
    pub min: Vec3,
    pub max: Vec3,
    pub sph_center: Vec3,
    pub sph_radius: f32,
    pub translation: Vec3,
    pub rotation: [f32; 9],
    pub mass_center: Vec3,
    pub inertia: [f32; 9],
    pub volume: f32,
    pub hierarchy_tree_name: Name16,
    pub hierarchy_model_name: Name16,
    pub future_use: [u32; 24],
}

impl Overlay for LegacyMeshHeader {
    const SIZE: usize = 372;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            mesh_name: Name16::decode(r)?,
            attributes: get_u32(r)?,
            num_tris: get_u32(r)?,
            num_quads: get_u32(r)?,
            num_sr_tris: get_u32(r)?,
            num_pov_tris: get_u32(r)?,
            num_pov_quads: get_u32(r)?,
            num_vertices: get_u32(r)?,
            num_normals: get_u32(r)?,
            num_sr_normals: get_u32(r)?,
            num_tex_coords: get_u32(r)?,
            num_materials: get_u32(r)?,
            num_vert_colors: get_u32(r)?,
            num_vert_influences: get_u32(r)?,
            num_damage_stages: get_u32(r)?,
            future_counts: get_u32_array(r)?,
            lod_min: get_f32(r)?,
            lod_max: get_f32(r)?,
            min: get_vec3(r)?,
            max: get_vec3(r)?,
            sph_center: get_vec3(r)?,
            sph_radius: get_f32(r)?,
            translation: get_vec3(r)?,
            rotation: get_f32_array(r)?,
            mass_center: get_vec3(r)?,
            inertia: get_f32_array(r)?,
            volume: get_f32(r)?,
            hierarchy_tree_name: Name16::decode(r)?,
            hierarchy_model_name: Name16::decode(r)?,
            future_use: get_u32_array(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.mesh_name.encode(out);
        put_u32(out, self.attributes);
        put_u32(out, self.num_tris);
        put_u32(out, self.num_quads);
        put_u32(out, self.num_sr_tris);
        put_u32(out, self.num_pov_tris);
        put_u32(out, self.num_pov_quads);
        put_u32(out, self.num_vertices);
        put_u32(out, self.num_normals);
        put_u32(out, self.num_sr_normals);
        put_u32(out, self.num_tex_coords);
        put_u32(out, self.num_materials);
        put_u32(out, self.num_vert_colors);
        put_u32(out, self.num_vert_influences);
        put_u32(out, self.num_damage_stages);
        put_u32_array(out, &self.future_counts);
        put_f32(out, self.lod_min);
        put_f32(out, self.lod_max);
        put_vec3(out, self.min);
        put_vec3(out, self.max);
        put_vec3(out, self.sph_center);
        put_f32(out, self.sph_radius);
        put_vec3(out, self.translation);
        put_f32_array(out, &self.rotation);
        put_vec3(out, self.mass_center);
        put_f32_array(out, &self.inertia);
        put_f32(out, self.volume);
        self.hierarchy_tree_name.encode(out);
        self.hierarchy_model_name.encode(out);
        put_u32_array(out, &self.future_use);
    }
}

/// One triangle of `TRIANGLES`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangle {
    pub vindex: [u32; 3],
    /// Surface type.
    pub attributes: u32,
    pub normal: Vec3,
    pub dist: f32,
}

impl Overlay for Triangle {
    const SIZE: usize = 32;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            vindex: get_u32_array(r)?,
            attributes: get_u32(r)?,
            normal: get_vec3(r)?,
            dist: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32_array(out, &self.vindex);
        put_u32(out, self.attributes);
        put_vec3(out, self.normal);
        put_f32(out, self.dist);
    }
}

/// Per-vertex bone binding of `VERTEX_INFLUENCES`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexInfluence {
    pub bone_idx: [u16; 2],
    pub bone_inf: [u16; 2],
}

impl Overlay for VertexInfluence {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            bone_idx: [get_u16(r)?, get_u16(r)?],
            bone_inf: [get_u16(r)?, get_u16(r)?],
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u16(out, self.bone_idx[0]);
        put_u16(out, self.bone_idx[1]);
        put_u16(out, self.bone_inf[0]);
        put_u16(out, self.bone_inf[1]);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AABTreeHeader {
    pub node_count: u32,
    pub poly_count: u32,
    pub padding: [u32; 6],
}

impl Overlay for AABTreeHeader {
    const SIZE: usize = 32;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            node_count: get_u32(r)?,
            poly_count: get_u32(r)?,
            padding: get_u32_array(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.node_count);
        put_u32(out, self.poly_count);
        put_u32_array(out, &self.padding);
    }
}

/// AABTree node. The high bit of `front_or_poly0` marks a leaf.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AABTreeNode {
    pub min: Vec3,
    pub max: Vec3,
    pub front_or_poly0: u32,
    pub back_or_poly_count: u32,
}

impl AABTreeNode {
    pub const LEAF_FLAG: u32 = 0x8000_0000;

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front_or_poly0 & Self::LEAF_FLAG != 0
    }
}

impl Overlay for AABTreeNode {
    const SIZE: usize = 32;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            min: get_vec3(r)?,
            max: get_vec3(r)?,
            front_or_poly0: get_u32(r)?,
            back_or_poly_count: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_vec3(out, self.min);
        put_vec3(out, self.max);
        put_u32(out, self.front_or_poly0);
        put_u32(out, self.back_or_poly_count);
    }
}

/// Header of a `DEFORM` block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeformHeader {
    pub set_count: u32,
    pub alpha_passes: u32,
    pub reserved: [u32; 3],
}

impl Overlay for DeformHeader {
    const SIZE: usize = 20;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            set_count: get_u32(r)?,
            alpha_passes: get_u32(r)?,
            reserved: get_u32_array(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.set_count);
        put_u32(out, self.alpha_passes);
        put_u32_array(out, &self.reserved);
    }
}

/// Header of a shadow mesh (`SHDMESH_HEADER`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShdMeshHeader {
    pub version: u32,
    pub mesh_flags: u32,
    pub sort_level: i32,
    pub min: Vec3,
    pub max: Vec3,
    pub sph_center: Vec3,
    pub sph_radius: f32,
    pub sub_mesh_count: u8,
    pub pad: [u8; 3],
}

impl Overlay for ShdMeshHeader {
    const SIZE: usize = 56;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            mesh_flags: get_u32(r)?,
            sort_level: get_i32(r)?,
            min: get_vec3(r)?,
            max: get_vec3(r)?,
            sph_center: get_vec3(r)?,
            sph_radius: get_f32(r)?,
            sub_mesh_count: r.read_u8()?,
            pad: [r.read_u8()?, r.read_u8()?, r.read_u8()?],
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.mesh_flags);
        put_i32(out, self.sort_level);
        put_vec3(out, self.min);
        put_vec3(out, self.max);
        put_vec3(out, self.sph_center);
        put_f32(out, self.sph_radius);
        put_u8(out, self.sub_mesh_count);
        out.extend_from_slice(&self.pad);
    }
}
