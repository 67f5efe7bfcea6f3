//! Material, shader and texture interpreters.

use glam::{Vec2, Vec3};

use super::*;
use crate::format::ids;
use crate::structs::{
    payload_string, MaterialInfo, Shader, ShaderMaterialHeader, ShaderPropertyHeader, TextureInfo,
    VertexMaterial,
};

pub(super) fn register(r: &mut FieldInterpreters) {
    r.register(ids::MATERIAL_INFO, material_info);
    r.register(ids::VERTEX_MATERIAL_INFO, vertex_material_info);
    r.register(ids::SHADERS, shaders);
    r.register(ids::TEXTURE_INFO, texture_info);
    r.register(ids::SHADER_MATERIAL_HEADER, shader_material_header);
    r.register(ids::SHADER_MATERIAL_PROPERTY, shader_material_property);
}

fn material_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let m: MaterialInfo = overlay(bytes)?;
    let mut out = FieldList::new();
    out.u32("Pass Count", m.pass_count);
    out.u32("Vertex Material Count", m.vertex_material_count);
    out.u32("Shader Count", m.shader_count);
    out.u32("Texture Count", m.texture_count);
    out.finish()
}

fn vertex_material_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let m: VertexMaterial = overlay(bytes)?;
    let mut out = FieldList::new();
    out.hex("Attributes", m.attributes);
    out.flags("Flags", m.attributes, 0xFF, VERTEX_MATERIAL_FLAGS);
    out.enumerated("Stage0 Mapping", m.stage0_mapping(), STAGE_MAPPING);
    out.enumerated("Stage1 Mapping", m.stage1_mapping(), STAGE_MAPPING);
    out.enumerated("PSX Translucency", m.psx_translucency(), PSX_TRANSLUCENCY);
    out.flag(
        "PSX No RT Lighting",
        m.attributes & VertexMaterial::PSX_NO_RT_LIGHTING != 0,
    );
    out.rgb("Ambient", m.ambient);
    out.rgb("Diffuse", m.diffuse);
    out.rgb("Specular", m.specular);
    out.rgb("Emissive", m.emissive);
    out.f32("Shininess", m.shininess);
    out.f32("Opacity", m.opacity);
    out.f32("Translucency", m.translucency);
    out.finish()
}

fn shaders(bytes: &[u8], _: &ChunkContext) -> Fields {
    let shaders: Vec<Shader> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, s) in shaders.into_iter().enumerate() {
        let p = format!("Shader[{}]", i);
        out.enumerated(format!("{}.Depth Compare", p), s.depth_compare.into(), DEPTH_COMPARE);
        out.enumerated(format!("{}.Depth Mask", p), s.depth_mask.into(), DEPTH_MASK);
        out.u8(format!("{}.Color Mask", p), s.color_mask);
        out.enumerated(format!("{}.Dest Blend", p), s.dest_blend.into(), DEST_BLEND);
        out.u8(format!("{}.Fog Func", p), s.fog_func);
        out.enumerated(format!("{}.Pri Gradient", p), s.pri_gradient.into(), PRI_GRADIENT);
        out.enumerated(format!("{}.Sec Gradient", p), s.sec_gradient.into(), SEC_GRADIENT);
        out.enumerated(format!("{}.Src Blend", p), s.src_blend.into(), SRC_BLEND);
        out.enumerated(format!("{}.Texturing", p), s.texturing.into(), TEXTURING);
        out.enumerated(
            format!("{}.Detail Color Func", p),
            s.detail_color_func.into(),
            DETAIL_COLOR_FUNC,
        );
        out.enumerated(
            format!("{}.Detail Alpha Func", p),
            s.detail_alpha_func.into(),
            DETAIL_ALPHA_FUNC,
        );
        out.enumerated(format!("{}.Preset", p), s.shader_preset.into(), SHADER_PRESET);
        out.enumerated(format!("{}.Alpha Test", p), s.alpha_test.into(), ALPHA_TEST);
        out.enumerated(
            format!("{}.Post Detail Color Func", p),
            s.post_detail_color_func.into(),
            DETAIL_COLOR_FUNC,
        );
        out.enumerated(
            format!("{}.Post Detail Alpha Func", p),
            s.post_detail_alpha_func.into(),
            DETAIL_ALPHA_FUNC,
        );
    }
    out.finish()
}

fn texture_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let t: TextureInfo = overlay(bytes)?;
    let attributes = u32::from(t.attributes);
    let mut out = FieldList::new();
    out.flags("Flags", attributes, 0x3F, TEXTURE_FLAGS);
    out.enumerated(
        "Mip Levels",
        u32::from((t.attributes & TextureInfo::MIP_LEVELS_MASK) >> TextureInfo::MIP_LEVELS_SHIFT),
        TEXTURE_MIP_LEVELS,
    );
    out.enumerated(
        "Hint",
        u32::from((t.attributes & TextureInfo::HINT_MASK) >> TextureInfo::HINT_SHIFT),
        TEXTURE_HINT,
    );
    out.flag("Bumpmap", t.attributes & TextureInfo::TYPE_BUMPMAP != 0);
    out.enumerated("Anim Type", t.anim_type.into(), TEXTURE_ANIM_TYPE);
    out.u32("Frame Count", t.frame_count);
    out.f32("Frame Rate", t.frame_rate);
    out.finish()
}

fn shader_material_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: ShaderMaterialHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.u8("Version", h.version);
    out.string("Type Name", h.type_name.as_string());
    out.u32("Reserved", h.reserved);
    out.finish()
}

/// Property header, `name_length` bytes of name, then a value whose shape
/// depends on the property type.
fn shader_material_property(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (h, rest): (ShaderPropertyHeader, _) = with_tail(bytes)?;
    let name_len = h.name_length as usize;
    if rest.len() < name_len {
        return Err(format!(
            "property name needs {} bytes, {} left",
            name_len,
            rest.len()
        ));
    }
    let (name, value) = rest.split_at(name_len);

    let mut out = FieldList::new();
    out.enumerated("Type", h.property_type, SHADER_PROPERTY_TYPE);
    out.string("Name", payload_string(name));
    match h.property_type {
        ShaderPropertyHeader::TEXTURE => {
            let (len, text): (u32, _) = with_tail(value)?;
            let len = len as usize;
            if text.len() < len {
                return Err(format!("texture name needs {} bytes, {} left", len, text.len()));
            }
            out.string("Value", payload_string(&text[..len]));
        }
        ShaderPropertyHeader::FLOAT => out.f32("Value", overlay(value)?),
        ShaderPropertyHeader::VECTOR2 => out.vec2("Value", overlay::<Vec2>(value)?),
        ShaderPropertyHeader::VECTOR3 => out.vec3("Value", overlay::<Vec3>(value)?),
        ShaderPropertyHeader::VECTOR4 => {
            let v = value
                .get(..16)
                .ok_or_else(|| format!("vector4 property needs 16 bytes, {} left", value.len()))?;
            let v: Vec<f32> = items(v)?;
            out.push("Value", "vector4", format!("({}, {}, {}, {})", v[0], v[1], v[2], v[3]));
        }
        ShaderPropertyHeader::INT => {
            let v: u32 = overlay(value)?;
            out.i32("Value", v as i32);
        }
        ShaderPropertyHeader::BOOL => match value.first() {
            Some(&b) => out.flag("Value", b != 0),
            None => return Err("bool property has no value byte".into()),
        },
        other => out.push("Value", "bytes", format!("{} bytes of type {}", value.len(), other)),
    }
    out.finish()
}
