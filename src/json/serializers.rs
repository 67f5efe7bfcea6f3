//! Structured `DATA` converters for known payloads.
//!
//! A [`Serializer`] is a pair of plain functions: payload bytes to a JSON
//! value, and a JSON value back to payload bytes. Converters for fixed-size
//! overlays come from the generic [`single`], [`array`] and [`text`]
//! adapters over the [`Structured`] trait.

use std::collections::HashMap;

use glam::{Quat, Vec2, Vec3};
use serde_json::{json, Value};

use super::JsonFields;
use crate::format::ids;
use crate::structs::{
    encode_array, read_array, read_struct, AABTreeHeader, AnimHeader, BoxStruct,
    CompressedAnimHeader, HLodArrayHeader, HLodHeader, HLodSubObject, HierarchyHeader,
    MaterialInfo, MeshHeader3, Overlay, Pivot, Rgba, Shader, TextureInfo, Triangle,
    VertexInfluence, VertexMaterial,
};

/// Key holding the elements of an array payload.
pub const ITEMS_KEY: &str = "ITEMS";
/// Key holding the text of a string payload.
pub const TEXT_KEY: &str = "TEXT";

/// Bytes → structured value. `None` when the payload does not have the
/// expected shape.
pub type ToStructuredFn = fn(&[u8]) -> Option<Value>;

/// Structured value → bytes. Never fails; problems become warnings.
pub type FromStructuredFn = fn(&Value, &mut JsonFields) -> Vec<u8>;

/// Converter pair for one chunk type.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    pub to_structured: ToStructuredFn,
    pub from_structured: FromStructuredFn,
}

impl Serializer {
    pub const fn new(to_structured: ToStructuredFn, from_structured: FromStructuredFn) -> Self {
        Self {
            to_structured,
            from_structured,
        }
    }

    /// Structured form of `payload`, only if converting it back yields the
    /// same bytes.
    pub fn lossless(&self, id: u32, payload: &[u8]) -> Option<Value> {
        let value = (self.to_structured)(payload)?;
        let mut scratch = Vec::new();
        let bytes = (self.from_structured)(&value, &mut JsonFields::new(id, &mut scratch));
        if bytes == payload && scratch.is_empty() {
            Some(value)
        } else {
            tracing::debug!("chunk 0x{:08X}: structured form is lossy, keeping hex", id);
            None
        }
    }
}

/// Chunk id → converter. Build once with [`builtin`](Self::builtin).
#[derive(Debug, Clone, Default)]
pub struct SerializerRegistry {
    by_id: HashMap<u32, Serializer>,
}

/// Parents whose children reuse mesh ids for unrelated payloads.
const CONTEXTUAL_PARENTS: [u32; 2] = [ids::SPHERE, ids::RING];

impl SerializerRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in converter.
    pub fn builtin() -> Self {
        let mut r = Self::default();

        r.register(ids::MESH_HEADER3, single::<MeshHeader3>());
        for id in [ids::VERTICES, ids::VERTEX_NORMALS, ids::TANGENTS, ids::BINORMALS] {
            r.register(id, array::<Vec3>());
        }
        r.register(ids::TEXCOORDS, array::<Vec2>());
        r.register(ids::STAGE_TEXCOORDS, array::<Vec2>());
        r.register(ids::TRIANGLES, array::<Triangle>());
        for id in [
            ids::VERTEX_SHADE_INDICES,
            ids::VERTEX_MATERIAL_IDS,
            ids::SHADER_IDS,
            ids::TEXTURE_IDS,
            ids::AABTREE_POLYINDICES,
        ] {
            r.register(id, array::<u32>());
        }
        r.register(ids::VERTEX_INFLUENCES, array::<VertexInfluence>());
        for id in [ids::VERTEX_COLORS, ids::DCG, ids::DIG, ids::SCG] {
            r.register(id, array::<Rgba>());
        }
        r.register(ids::AABTREE_HEADER, single::<AABTreeHeader>());

        r.register(ids::MATERIAL_INFO, single::<MaterialInfo>());
        r.register(ids::VERTEX_MATERIAL_INFO, single::<VertexMaterial>());
        r.register(ids::SHADERS, array::<Shader>());
        r.register(ids::TEXTURE_INFO, single::<TextureInfo>());

        r.register(ids::HIERARCHY_HEADER, single::<HierarchyHeader>());
        r.register(ids::PIVOTS, array::<Pivot>());
        r.register(ids::ANIMATION_HEADER, single::<AnimHeader>());
        r.register(ids::COMPRESSED_ANIMATION_HEADER, single::<CompressedAnimHeader>());
        r.register(ids::HLOD_HEADER, single::<HLodHeader>());
        r.register(ids::HLOD_SUB_OBJECT_ARRAY_HEADER, single::<HLodArrayHeader>());
        r.register(ids::HLOD_SUB_OBJECT, single::<HLodSubObject>());
        r.register(ids::BOX, single::<BoxStruct>());

        for id in [
            ids::MESH_USER_TEXT,
            ids::TEXTURE_NAME,
            ids::VERTEX_MATERIAL_NAME,
            ids::VERTEX_MAPPER_ARGS0,
            ids::VERTEX_MAPPER_ARGS1,
            ids::COLLECTION_OBJ_NAME,
            ids::MORPHANIM_POSENAME,
            ids::DAZZLE_NAME,
            ids::DAZZLE_TYPENAME,
            ids::SHDMESH_NAME,
            ids::SHDMESH_USER_TEXT,
        ] {
            r.register(id, text());
        }
        r
    }

    pub fn register(&mut self, id: u32, serializer: Serializer) {
        self.by_id.insert(id, serializer);
    }

    /// Converter for `id` seen under `parent_id`.
    pub fn lookup(&self, id: u32, parent_id: Option<u32>) -> Option<&Serializer> {
        if parent_id.is_some_and(|p| CONTEXTUAL_PARENTS.contains(&p)) {
            return None;
        }
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

// ============================================================================
// Generic adapters
// ============================================================================

/// An overlay with a JSON form.
pub trait Structured: Overlay {
    fn to_value(&self) -> Value;
    fn from_value(value: &Value, f: &mut JsonFields) -> Self;
}

/// Converter for a payload that is exactly one `T`.
pub fn single<T: Structured>() -> Serializer {
    fn to<T: Structured>(bytes: &[u8]) -> Option<Value> {
        if bytes.len() != T::SIZE {
            return None;
        }
        read_struct::<T>(bytes).ok().map(|v| v.to_value())
    }
    fn from<T: Structured>(value: &Value, f: &mut JsonFields) -> Vec<u8> {
        T::from_value(value, f).to_bytes()
    }
    Serializer::new(to::<T>, from::<T>)
}

/// Converter for a payload that is one or more `T`, as `{"ITEMS": [...]}`.
pub fn array<T: Structured>() -> Serializer {
    fn to<T: Structured>(bytes: &[u8]) -> Option<Value> {
        let items = read_array::<T>(bytes).ok()?;
        let values: Vec<Value> = items.iter().map(Structured::to_value).collect();
        Some(json!({ "ITEMS": values }))
    }
    fn from<T: Structured>(value: &Value, f: &mut JsonFields) -> Vec<u8> {
        let items: Vec<T> = match f.field(value, ITEMS_KEY) {
            Some(Value::Array(values)) => values.iter().map(|v| T::from_value(v, f)).collect(),
            Some(_) => {
                f.warn(ITEMS_KEY, "is not an array; using no items");
                Vec::new()
            }
            None => Vec::new(),
        };
        encode_array(&items)
    }
    Serializer::new(to::<T>, from::<T>)
}

/// Converter for a NUL-terminated string payload, as `{"TEXT": "..."}`.
///
/// Only payloads that are valid UTF-8 followed by exactly one NUL qualify.
pub fn text() -> Serializer {
    fn to(bytes: &[u8]) -> Option<Value> {
        let (&last, body) = bytes.split_last()?;
        if last != 0 || body.contains(&0) {
            return None;
        }
        let text = std::str::from_utf8(body).ok()?;
        Some(json!({ "TEXT": text }))
    }
    fn from(value: &Value, f: &mut JsonFields) -> Vec<u8> {
        let mut bytes = f.string(value, TEXT_KEY).into_bytes();
        bytes.push(0);
        bytes
    }
    Serializer::new(to, from)
}

// ============================================================================
// Structured forms
// ============================================================================

fn vec2_json(v: Vec2) -> Value {
    json!([v.x, v.y])
}

fn vec3_json(v: Vec3) -> Value {
    json!([v.x, v.y, v.z])
}

fn quat_json(q: Quat) -> Value {
    json!([q.x, q.y, q.z, q.w])
}

impl Structured for u32 {
    fn to_value(&self) -> Value {
        json!(self)
    }
    fn from_value(value: &Value, f: &mut JsonFields) -> Self {
        f.u32_value(value, ITEMS_KEY)
    }
}

impl Structured for Vec2 {
    fn to_value(&self) -> Value {
        vec2_json(*self)
    }
    fn from_value(value: &Value, f: &mut JsonFields) -> Self {
        Vec2::from_array(f.float_array(value, ITEMS_KEY))
    }
}

impl Structured for Vec3 {
    fn to_value(&self) -> Value {
        vec3_json(*self)
    }
    fn from_value(value: &Value, f: &mut JsonFields) -> Self {
        Vec3::from_array(f.float_array(value, ITEMS_KEY))
    }
}

impl Structured for Rgba {
    fn to_value(&self) -> Value {
        json!([self.r, self.g, self.b, self.a])
    }
    fn from_value(value: &Value, f: &mut JsonFields) -> Self {
        f.rgba_value(value, ITEMS_KEY)
    }
}

impl Structured for MeshHeader3 {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "Attributes": self.attributes,
            "MeshName": self.mesh_name.as_string(),
            "ContainerName": self.container_name.as_string(),
            "NumTris": self.num_tris,
            "NumVertices": self.num_vertices,
            "NumMaterials": self.num_materials,
            "NumDamageStages": self.num_damage_stages,
            "SortLevel": self.sort_level,
            "PrelitVersion": self.prelit_version,
            "FutureCounts": self.future_count,
            "VertexChannels": self.vertex_channels,
            "FaceChannels": self.face_channels,
            "Min": vec3_json(self.min),
            "Max": vec3_json(self.max),
            "SphCenter": vec3_json(self.sph_center),
            "SphRadius": self.sph_radius,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            attributes: f.u32(v, "Attributes"),
            mesh_name: f.name(v, "MeshName"),
            container_name: f.name(v, "ContainerName"),
            num_tris: f.u32(v, "NumTris"),
            num_vertices: f.u32(v, "NumVertices"),
            num_materials: f.u32(v, "NumMaterials"),
            num_damage_stages: f.u32(v, "NumDamageStages"),
            sort_level: f.i32(v, "SortLevel"),
            prelit_version: f.u32(v, "PrelitVersion"),
            future_count: f.u32(v, "FutureCounts"),
            vertex_channels: f.u32(v, "VertexChannels"),
            face_channels: f.u32(v, "FaceChannels"),
            min: f.vec3(v, "Min"),
            max: f.vec3(v, "Max"),
            sph_center: f.vec3(v, "SphCenter"),
            sph_radius: f.f32(v, "SphRadius"),
        }
    }
}

impl Structured for Triangle {
    fn to_value(&self) -> Value {
        json!({
            "VIndex": self.vindex,
            "Attributes": self.attributes,
            "Normal": vec3_json(self.normal),
            "Dist": self.dist,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        let vindex = match f.field(v, "VIndex") {
            Some(Value::Array(items)) if items.len() == 3 => {
                [0, 1, 2].map(|i| f.u32_value(&items[i], "VIndex"))
            }
            Some(_) => {
                f.warn("VIndex", "expected 3 indices; using zeros");
                [0; 3]
            }
            None => [0; 3],
        };
        Self {
            vindex,
            attributes: f.u32(v, "Attributes"),
            normal: f.vec3(v, "Normal"),
            dist: f.f32(v, "Dist"),
        }
    }
}

impl Structured for VertexInfluence {
    fn to_value(&self) -> Value {
        json!({ "BoneIdx": self.bone_idx, "BoneInf": self.bone_inf })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        let mut pair = |key: &str| match f.field(v, key) {
            Some(Value::Array(items)) if items.len() == 2 => {
                [f.u16_value(&items[0], key), f.u16_value(&items[1], key)]
            }
            Some(_) => {
                f.warn(key, "expected 2 values; using zeros");
                [0; 2]
            }
            None => [0; 2],
        };
        let bone_idx = pair("BoneIdx");
        let bone_inf = pair("BoneInf");
        Self { bone_idx, bone_inf }
    }
}

impl Structured for AABTreeHeader {
    fn to_value(&self) -> Value {
        json!({ "NodeCount": self.node_count, "PolyCount": self.poly_count })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            node_count: f.u32(v, "NodeCount"),
            poly_count: f.u32(v, "PolyCount"),
            padding: [0; 6],
        }
    }
}

impl Structured for MaterialInfo {
    fn to_value(&self) -> Value {
        json!({
            "PassCount": self.pass_count,
            "VertexMaterialCount": self.vertex_material_count,
            "ShaderCount": self.shader_count,
            "TextureCount": self.texture_count,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            pass_count: f.u32(v, "PassCount"),
            vertex_material_count: f.u32(v, "VertexMaterialCount"),
            shader_count: f.u32(v, "ShaderCount"),
            texture_count: f.u32(v, "TextureCount"),
        }
    }
}

impl Structured for VertexMaterial {
    fn to_value(&self) -> Value {
        let rgb = |c: crate::structs::Rgb| json!([c.r, c.g, c.b]);
        json!({
            "Attributes": self.attributes,
            "Ambient": rgb(self.ambient),
            "Diffuse": rgb(self.diffuse),
            "Specular": rgb(self.specular),
            "Emissive": rgb(self.emissive),
            "Shininess": self.shininess,
            "Opacity": self.opacity,
            "Translucency": self.translucency,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            attributes: f.u32(v, "Attributes"),
            ambient: f.rgb(v, "Ambient"),
            diffuse: f.rgb(v, "Diffuse"),
            specular: f.rgb(v, "Specular"),
            emissive: f.rgb(v, "Emissive"),
            shininess: f.f32(v, "Shininess"),
            opacity: f.f32(v, "Opacity"),
            translucency: f.f32(v, "Translucency"),
        }
    }
}

impl Structured for Shader {
    fn to_value(&self) -> Value {
        json!({
            "DepthCompare": self.depth_compare,
            "DepthMask": self.depth_mask,
            "ColorMask": self.color_mask,
            "DestBlend": self.dest_blend,
            "FogFunc": self.fog_func,
            "PriGradient": self.pri_gradient,
            "SecGradient": self.sec_gradient,
            "SrcBlend": self.src_blend,
            "Texturing": self.texturing,
            "DetailColorFunc": self.detail_color_func,
            "DetailAlphaFunc": self.detail_alpha_func,
            "ShaderPreset": self.shader_preset,
            "AlphaTest": self.alpha_test,
            "PostDetailColorFunc": self.post_detail_color_func,
            "PostDetailAlphaFunc": self.post_detail_alpha_func,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            depth_compare: f.u8(v, "DepthCompare"),
            depth_mask: f.u8(v, "DepthMask"),
            color_mask: f.u8(v, "ColorMask"),
            dest_blend: f.u8(v, "DestBlend"),
            fog_func: f.u8(v, "FogFunc"),
            pri_gradient: f.u8(v, "PriGradient"),
            sec_gradient: f.u8(v, "SecGradient"),
            src_blend: f.u8(v, "SrcBlend"),
            texturing: f.u8(v, "Texturing"),
            detail_color_func: f.u8(v, "DetailColorFunc"),
            detail_alpha_func: f.u8(v, "DetailAlphaFunc"),
            shader_preset: f.u8(v, "ShaderPreset"),
            alpha_test: f.u8(v, "AlphaTest"),
            post_detail_color_func: f.u8(v, "PostDetailColorFunc"),
            post_detail_alpha_func: f.u8(v, "PostDetailAlphaFunc"),
            pad: 0,
        }
    }
}

impl Structured for TextureInfo {
    fn to_value(&self) -> Value {
        json!({
            "Attributes": self.attributes,
            "AnimType": self.anim_type,
            "FrameCount": self.frame_count,
            "FrameRate": self.frame_rate,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            attributes: f.u16(v, "Attributes"),
            anim_type: f.u16(v, "AnimType"),
            frame_count: f.u32(v, "FrameCount"),
            frame_rate: f.f32(v, "FrameRate"),
        }
    }
}

impl Structured for HierarchyHeader {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "Name": self.name.as_string(),
            "NumPivots": self.num_pivots,
            "Center": vec3_json(self.center),
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            name: f.name(v, "Name"),
            num_pivots: f.u32(v, "NumPivots"),
            center: f.vec3(v, "Center"),
        }
    }
}

impl Structured for Pivot {
    fn to_value(&self) -> Value {
        json!({
            "Name": self.name.as_string(),
            "ParentIdx": self.parent_idx,
            "Translation": vec3_json(self.translation),
            "EulerAngles": vec3_json(self.euler_angles),
            "Rotation": quat_json(self.rotation),
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            name: f.name(v, "Name"),
            parent_idx: f.u32(v, "ParentIdx"),
            translation: f.vec3(v, "Translation"),
            euler_angles: f.vec3(v, "EulerAngles"),
            rotation: f.quat(v, "Rotation"),
        }
    }
}

impl Structured for AnimHeader {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "Name": self.name.as_string(),
            "HierarchyName": self.hierarchy_name.as_string(),
            "NumFrames": self.num_frames,
            "FrameRate": self.frame_rate,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            name: f.name(v, "Name"),
            hierarchy_name: f.name(v, "HierarchyName"),
            num_frames: f.u32(v, "NumFrames"),
            frame_rate: f.u32(v, "FrameRate"),
        }
    }
}

impl Structured for CompressedAnimHeader {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "Name": self.name.as_string(),
            "HierarchyName": self.hierarchy_name.as_string(),
            "NumFrames": self.num_frames,
            "FrameRate": self.frame_rate,
            "Flavor": self.flavor,
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            name: f.name(v, "Name"),
            hierarchy_name: f.name(v, "HierarchyName"),
            num_frames: f.u32(v, "NumFrames"),
            frame_rate: f.u16(v, "FrameRate"),
            flavor: f.u16(v, "Flavor"),
        }
    }
}

impl Structured for HLodHeader {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "LodCount": self.lod_count,
            "Name": self.name.as_string(),
            "HierarchyName": self.hierarchy_name.as_string(),
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            lod_count: f.u32(v, "LodCount"),
            name: f.name(v, "Name"),
            hierarchy_name: f.name(v, "HierarchyName"),
        }
    }
}

impl Structured for HLodArrayHeader {
    fn to_value(&self) -> Value {
        json!({ "ModelCount": self.model_count, "MaxScreenSize": self.max_screen_size })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            model_count: f.u32(v, "ModelCount"),
            max_screen_size: f.f32(v, "MaxScreenSize"),
        }
    }
}

impl Structured for HLodSubObject {
    fn to_value(&self) -> Value {
        json!({ "BoneIndex": self.bone_index, "Name": self.name.as_string() })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            bone_index: f.u32(v, "BoneIndex"),
            name: f.name(v, "Name"),
        }
    }
}

impl Structured for BoxStruct {
    fn to_value(&self) -> Value {
        json!({
            "Version": self.version,
            "Attributes": self.attributes,
            "Name": self.name.as_string(),
            "Color": [self.color.r, self.color.g, self.color.b],
            "Center": vec3_json(self.center),
            "Extent": vec3_json(self.extent),
        })
    }
    fn from_value(v: &Value, f: &mut JsonFields) -> Self {
        Self {
            version: f.u32(v, "Version"),
            attributes: f.u32(v, "Attributes"),
            name: f.name(v, "Name"),
            color: f.rgb(v, "Color"),
            center: f.vec3(v, "Center"),
            extent: f.vec3(v, "Extent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Name16;

    #[test]
    fn test_single_roundtrip_and_shape_check() {
        let s = single::<HierarchyHeader>();
        let h = HierarchyHeader {
            version: 0x0004_0001,
            name: Name16::new("TANK"),
            num_pivots: 3,
            center: Vec3::new(1.0, 2.0, 0.5),
        };
        let bytes = h.to_bytes();
        let value = s.lossless(ids::HIERARCHY_HEADER, &bytes).unwrap();
        assert_eq!(value["Name"], "TANK");
        assert_eq!(value["NumPivots"], 3);
        // One byte too many is not a hierarchy header
        let mut longer = bytes.clone();
        longer.push(0);
        assert!((s.to_structured)(&longer).is_none());
    }

    #[test]
    fn test_garbage_after_name_is_lossy() {
        let mut h = HierarchyHeader::default();
        h.name.0 = *b"AB\0garbage\0\0\0\0\0\0";
        let s = single::<HierarchyHeader>();
        assert!((s.to_structured)(&h.to_bytes()).is_some());
        assert!(s.lossless(ids::HIERARCHY_HEADER, &h.to_bytes()).is_none());
    }

    #[test]
    fn test_array_items() {
        let s = array::<u32>();
        let bytes = encode_array(&[1u32, 2, 0xFFFF_FFFF]);
        let value = s.lossless(ids::SHADER_IDS, &bytes).unwrap();
        assert_eq!(value, json!({ "ITEMS": [1, 2, 4294967295u32] }));
        assert!((s.to_structured)(&[1, 2, 3]).is_none());
        assert!((s.to_structured)(&[]).is_none());
    }

    #[test]
    fn test_text_requires_single_terminator() {
        let s = text();
        assert_eq!((s.to_structured)(b"rock.tga\0").unwrap(), json!({ "TEXT": "rock.tga" }));
        assert!((s.to_structured)(b"rock.tga").is_none());
        assert!((s.to_structured)(b"a\0b\0").is_none());
        assert!((s.to_structured)(b"").is_none());
        let mut warnings = Vec::new();
        let bytes = (s.from_structured)(&json!({ "TEXT": 5 }), &mut JsonFields::new(0x32, &mut warnings));
        assert_eq!(bytes, vec![0]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_contextual_parents_have_no_serializers() {
        let r = SerializerRegistry::builtin();
        assert!(r.lookup(ids::VERTICES, Some(ids::MESH)).is_some());
        assert!(r.lookup(ids::VERTICES, Some(ids::SPHERE)).is_none());
        assert!(r.len() >= 15);
    }

    #[test]
    fn test_float_values_survive() {
        let s = array::<Vec3>();
        let bytes = encode_array(&[Vec3::new(0.1, -3.75, 1e-7)]);
        assert!(s.lossless(ids::VERTICES, &bytes).is_some());
    }
}
