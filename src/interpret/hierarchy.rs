//! Hierarchy, model, LOD and collection interpreters.

use glam::Vec3;

use super::*;
use crate::format::ids;
use crate::structs::{
    CollectionHeader, HLodArrayHeader, HLodHeader, HLodSubObject, HModelHeader, HModelNode,
    HierarchyHeader, Lod, LodModelHeader, Pivot, PivotFixup,
};

pub(super) fn register(r: &mut FieldInterpreters) {
    r.register(ids::HIERARCHY_HEADER, hierarchy_header);
    r.register(ids::PIVOTS, pivots);
    r.register(ids::PIVOT_FIXUPS, pivot_fixups);
    r.register(ids::HMODEL_HEADER, hmodel_header);
    for id in [ids::NODE, ids::COLLISION_NODE, ids::SKIN_NODE, ids::SHADOW_NODE] {
        r.register(id, hmodel_node);
    }
    r.register(ids::LODMODEL_HEADER, lod_model_header);
    r.register(ids::LOD, lod);
    r.register(ids::HLOD_HEADER, hlod_header);
    r.register(ids::HLOD_SUB_OBJECT_ARRAY_HEADER, hlod_array_header);
    r.register(ids::HLOD_SUB_OBJECT, hlod_sub_object);
    r.register(ids::COLLECTION_HEADER, collection_header);
    r.register(ids::COLLECTION_OBJ_NAME, text);
    r.register(ids::POINTS, points);
}

fn hierarchy_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: HierarchyHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.u32("Pivot Count", h.num_pivots);
    out.vec3("Center", h.center);
    out.finish()
}

fn pivots(bytes: &[u8], _: &ChunkContext) -> Fields {
    let pivots: Vec<Pivot> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, p) in pivots.into_iter().enumerate() {
        out.string(format!("Pivot[{}].Name", i), p.name.as_string());
        if p.parent_idx == u32::MAX {
            out.string(format!("Pivot[{}].Parent", i), "None");
        } else {
            out.u32(format!("Pivot[{}].Parent", i), p.parent_idx);
        }
        out.vec3(format!("Pivot[{}].Translation", i), p.translation);
        out.vec3(format!("Pivot[{}].Euler Angles", i), p.euler_angles);
        out.quat(format!("Pivot[{}].Rotation", i), p.rotation);
    }
    out.finish()
}

fn pivot_fixups(bytes: &[u8], _: &ChunkContext) -> Fields {
    let fixups: Vec<PivotFixup> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, f) in fixups.into_iter().enumerate() {
        for (row, r) in f.m.chunks_exact(3).enumerate() {
            out.vec3(format!("Fixup[{}].Row{}", i, row), Vec3::from_slice(r));
        }
    }
    out.finish()
}

fn hmodel_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: HModelHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.string("Hierarchy Name", h.hierarchy_name.as_string());
    out.u16("Connection Count", h.num_connections);
    out.finish()
}

fn hmodel_node(bytes: &[u8], _: &ChunkContext) -> Fields {
    let n: HModelNode = overlay(bytes)?;
    let mut out = FieldList::new();
    out.string("Render Object", n.render_obj_name.as_string());
    out.u16("Pivot", n.pivot_idx);
    out.finish()
}

fn lod_model_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: LodModelHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.u16("LOD Count", h.num_lods);
    out.finish()
}

fn lod(bytes: &[u8], _: &ChunkContext) -> Fields {
    let l: Lod = overlay(bytes)?;
    let mut out = FieldList::new();
    out.string("Render Object", l.render_obj_name.as_string());
    out.f32("LOD Min", l.lod_min);
    out.f32("LOD Max", l.lod_max);
    out.finish()
}

fn hlod_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: HLodHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.u32("LOD Count", h.lod_count);
    out.string("Name", h.name.as_string());
    out.string("Hierarchy Name", h.hierarchy_name.as_string());
    out.finish()
}

fn hlod_array_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: HLodArrayHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.u32("Model Count", h.model_count);
    out.f32("Max Screen Size", h.max_screen_size);
    out.finish()
}

fn hlod_sub_object(bytes: &[u8], _: &ChunkContext) -> Fields {
    let s: HLodSubObject = overlay(bytes)?;
    let mut out = FieldList::new();
    out.u32("Bone Index", s.bone_index);
    out.string("Name", s.name.as_string());
    out.finish()
}

fn collection_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: CollectionHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.u32("Render Object Count", h.render_object_count);
    out.finish()
}

fn points(bytes: &[u8], _: &ChunkContext) -> Fields {
    let points: Vec<Vec3> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, p) in points.into_iter().enumerate() {
        out.vec3(format!("Point[{}]", i), p);
    }
    out.finish()
}
