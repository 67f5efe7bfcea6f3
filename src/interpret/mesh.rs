//! Mesh interpreters.

use glam::{Vec2, Vec3};

use super::*;
use crate::format::ids;
use crate::structs::{
    AABTreeHeader, AABTreeNode, LegacyMeshHeader, MeshHeader3, ShdMeshHeader, Triangle,
    VertexInfluence,
};

pub(super) fn register(r: &mut FieldInterpreters) {
    r.register(ids::MESH_HEADER3, mesh_header3);
    r.register(ids::MESH_HEADER, legacy_mesh_header);
    r.register_under(ids::MESH, ids::MESH_HEADER, legacy_mesh_header);

    for id in [
        ids::VERTICES,
        ids::VERTEX_NORMALS,
        ids::SURRENDER_NORMALS,
        ids::TANGENTS,
        ids::BINORMALS,
        ids::DAMAGE_VERTICES,
    ] {
        r.register(id, vec3_array);
    }
    r.register(ids::TEXCOORDS, texcoords);
    r.register(ids::STAGE_TEXCOORDS, texcoords);
    r.register(ids::TRIANGLES, triangles);
    r.register(ids::PER_TRI_MATERIALS, u16_array);
    r.register(ids::VERTEX_INFLUENCES, influences);

    for id in [
        ids::VERTEX_SHADE_INDICES,
        ids::VERTEX_MATERIAL_IDS,
        ids::SHADER_IDS,
        ids::TEXTURE_IDS,
        ids::SHADER_MATERIAL_ID,
        ids::PER_FACE_TEXCOORD_IDS,
        ids::AABTREE_POLYINDICES,
    ] {
        r.register(id, u32_array);
    }
    for id in [ids::VERTEX_COLORS, ids::DCG, ids::DIG, ids::SCG] {
        r.register(id, color_array);
    }
    for id in [
        ids::MESH_USER_TEXT,
        ids::TEXTURE_NAME,
        ids::VERTEX_MATERIAL_NAME,
        ids::VERTEX_MAPPER_ARGS0,
        ids::VERTEX_MAPPER_ARGS1,
        ids::MATERIAL3_NAME,
        ids::MAP3_FILENAME,
        ids::SHDMESH_NAME,
        ids::SHDMESH_USER_TEXT,
    ] {
        r.register(id, text);
    }

    r.register(ids::AABTREE_HEADER, aabtree_header);
    r.register(ids::AABTREE_NODES, aabtree_nodes);
    r.register(ids::SHDMESH_HEADER, shd_mesh_header);
}

/// Attribute word of a mesh header, one entry per group.
fn mesh_attributes(out: &mut FieldList, attributes: u32) {
    out.hex("Attributes", attributes);
    out.flags("Collision Types", attributes, MESH_COLLISION_MASK, COLLISION_FLAGS);
    for &(bit, name) in MESH_STATE_FLAGS {
        out.flag(name, attributes & bit != 0);
    }
    out.enumerated(
        "Geometry Type",
        (attributes & MESH_GEOMETRY_MASK) >> MESH_GEOMETRY_SHIFT,
        MESH_GEOMETRY_TYPE,
    );
    out.flags("Prelit", attributes, MESH_PRELIT_MASK, MESH_PRELIT_FLAGS);
    let unknown = attributes & !MESH_KNOWN_BITS;
    if unknown != 0 {
        out.push("Other Attribute Bits", "flags", format!("Unknown(0x{:X})", unknown));
    }
}

fn mesh_header3(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: MeshHeader3 = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    mesh_attributes(&mut out, h.attributes);
    out.string("Mesh Name", h.mesh_name.as_string());
    out.string("Container Name", h.container_name.as_string());
    out.u32("Triangle Count", h.num_tris);
    out.u32("Vertex Count", h.num_vertices);
    out.u32("Material Count", h.num_materials);
    out.u32("Damage Stage Count", h.num_damage_stages);
    out.i32("Sort Level", h.sort_level);
    out.version("Prelit Version", h.prelit_version);
    out.u32("Future Count", h.future_count);
    out.flags("Vertex Channels", h.vertex_channels, u32::MAX, VERTEX_CHANNEL_FLAGS);
    out.flags("Face Channels", h.face_channels, u32::MAX, FACE_CHANNEL_FLAGS);
    out.vec3("Min", h.min);
    out.vec3("Max", h.max);
    out.vec3("Sphere Center", h.sph_center);
    out.f32("Sphere Radius", h.sph_radius);
    out.finish()
}

fn legacy_mesh_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: LegacyMeshHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Mesh Name", h.mesh_name.as_string());
    out.hex("Attributes", h.attributes);
    out.u32("Triangle Count", h.num_tris);
    out.u32("Quad Count", h.num_quads);
    out.u32("SR Triangle Count", h.num_sr_tris);
    out.u32("POV Triangle Count", h.num_pov_tris);
    out.u32("POV Quad Count", h.num_pov_quads);
    out.u32("Vertex Count", h.num_vertices);
    out.u32("Normal Count", h.num_normals);
    out.u32("SR Normal Count", h.num_sr_normals);
    out.u32("TexCoord Count", h.num_tex_coords);
    out.u32("Material Count", h.num_materials);
    out.u32("Vertex Color Count", h.num_vert_colors);
    out.u32("Vertex Influence Count", h.num_vert_influences);
    out.u32("Damage Stage Count", h.num_damage_stages);
    out.f32("LOD Min", h.lod_min);
    out.f32("LOD Max", h.lod_max);
    out.vec3("Min", h.min);
    out.vec3("Max", h.max);
    out.vec3("Sphere Center", h.sph_center);
    out.f32("Sphere Radius", h.sph_radius);
    out.vec3("Translation", h.translation);
    out.push("Rotation", "matrix3", format!("{:?}", h.rotation));
    out.vec3("Mass Center", h.mass_center);
    out.push("Inertia", "matrix3", format!("{:?}", h.inertia));
    out.f32("Volume", h.volume);
    out.string("Hierarchy Tree Name", h.hierarchy_tree_name.as_string());
    out.string("Hierarchy Model Name", h.hierarchy_model_name.as_string());
    out.finish()
}

fn vec3_array(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<Vec3> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, v) in values.into_iter().enumerate() {
        out.vec3(format!("[{}]", i), v);
    }
    out.finish()
}

fn texcoords(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<Vec2> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, v) in values.into_iter().enumerate() {
        out.vec2(format!("[{}]", i), v);
    }
    out.finish()
}

fn u32_array(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<u32> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, v) in values.into_iter().enumerate() {
        out.u32(format!("[{}]", i), v);
    }
    out.finish()
}

fn u16_array(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<u16> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, v) in values.into_iter().enumerate() {
        out.u16(format!("[{}]", i), v);
    }
    out.finish()
}

fn color_array(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<Rgba> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, c) in values.into_iter().enumerate() {
        out.rgba(format!("[{}]", i), c);
    }
    out.finish()
}

fn triangles(bytes: &[u8], _: &ChunkContext) -> Fields {
    let tris: Vec<Triangle> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, t) in tris.into_iter().enumerate() {
        out.push(
            format!("Triangle[{}].VIndex", i),
            "uint32[3]",
            format!("{} {} {}", t.vindex[0], t.vindex[1], t.vindex[2]),
        );
        out.enumerated(format!("Triangle[{}].Surface Type", i), t.attributes, SURFACE_TYPE);
        out.vec3(format!("Triangle[{}].Normal", i), t.normal);
        out.f32(format!("Triangle[{}].Dist", i), t.dist);
    }
    out.finish()
}

fn influences(bytes: &[u8], _: &ChunkContext) -> Fields {
    let values: Vec<VertexInfluence> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, v) in values.into_iter().enumerate() {
        out.u16(format!("Influence[{}].Bone", i), v.bone_idx[0]);
        out.u16(format!("Influence[{}].Bone Weight", i), v.bone_inf[0]);
        out.u16(format!("Influence[{}].Extra Bone", i), v.bone_idx[1]);
        out.u16(format!("Influence[{}].Extra Weight", i), v.bone_inf[1]);
    }
    out.finish()
}

fn aabtree_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: AABTreeHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.u32("Node Count", h.node_count);
    out.u32("Poly Count", h.poly_count);
    out.finish()
}

fn aabtree_nodes(bytes: &[u8], _: &ChunkContext) -> Fields {
    let nodes: Vec<AABTreeNode> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, n) in nodes.into_iter().enumerate() {
        out.vec3(format!("Node[{}].Min", i), n.min);
        out.vec3(format!("Node[{}].Max", i), n.max);
        if n.is_leaf() {
            out.u32(
                format!("Node[{}].First Poly", i),
                n.front_or_poly0 & !AABTreeNode::LEAF_FLAG,
            );
            out.u32(format!("Node[{}].Poly Count", i), n.back_or_poly_count);
        } else {
            out.u32(format!("Node[{}].Front", i), n.front_or_poly0);
            out.u32(format!("Node[{}].Back", i), n.back_or_poly_count);
        }
    }
    out.finish()
}

fn shd_mesh_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: ShdMeshHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.hex("Mesh Flags", h.mesh_flags);
    out.i32("Sort Level", h.sort_level);
    out.vec3("Min", h.min);
    out.vec3("Max", h.max);
    out.vec3("Sphere Center", h.sph_center);
    out.f32("Sphere Radius", h.sph_radius);
    out.u8("Sub Mesh Count", h.sub_mesh_count);
    out.finish()
}
