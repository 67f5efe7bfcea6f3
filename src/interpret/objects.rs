//! Primitive, light, emitter, aggregate and other render object interpreters.

use super::*;
use crate::format::ids::{self, ring, sphere};
use crate::structs::{
    AggregateHeader, AggregateInfo, AggregateSubobject, Attenuation, BoxStruct, EmitterHeader,
    EmitterInfo, LightStruct, NullObject, RingStruct, ScalarKey, Shader, SoundRObjHeader,
    SphereStruct, SpotLight, Vec2Key, Vec3Key, VectorKey,
};

pub(super) fn register(r: &mut FieldInterpreters) {
    r.register(ids::BOX, box_object);
    r.register(ids::NULL_OBJECT, null_object);

    r.register_under(ids::SPHERE, sphere::DEF, sphere_def);
    r.register_under(ids::SPHERE, sphere::COLOR_CHANNEL, vec3_keys);
    r.register_under(ids::SPHERE, sphere::ALPHA_CHANNEL, scalar_keys);
    r.register_under(ids::SPHERE, sphere::SCALE_CHANNEL, vec3_keys);
    r.register_under(ids::SPHERE, sphere::VECTOR_CHANNEL, vector_keys);

    r.register_under(ids::RING, ring::DEF, ring_def);
    r.register_under(ids::RING, ring::COLOR_CHANNEL, vec3_keys);
    r.register_under(ids::RING, ring::ALPHA_CHANNEL, scalar_keys);
    r.register_under(ids::RING, ring::INNER_SCALE_CHANNEL, vec2_keys);
    r.register_under(ids::RING, ring::OUTER_SCALE_CHANNEL, vec2_keys);

    r.register(ids::LIGHT_INFO, light_info);
    r.register(ids::SPOT_LIGHT_INFO, spot_light_info);
    r.register(ids::NEAR_ATTENUATION, attenuation);
    r.register(ids::FAR_ATTENUATION, attenuation);

    r.register(ids::EMITTER_HEADER, emitter_header);
    r.register(ids::EMITTER_INFO, emitter_info);

    r.register(ids::AGGREGATE_HEADER, aggregate_header);
    r.register(ids::AGGREGATE_INFO, aggregate_info);

    r.register(ids::SOUNDROBJ_HEADER, sound_header);
    r.register(ids::DAZZLE_NAME, text);
    r.register(ids::DAZZLE_TYPENAME, text);
}

fn box_object(bytes: &[u8], _: &ChunkContext) -> Fields {
    let b: BoxStruct = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", b.version);
    out.flags("Flags", b.attributes, 0x3, BOX_FLAGS);
    out.flags(
        "Collision Types",
        b.attributes,
        BoxStruct::COLLISION_TYPE_MASK,
        COLLISION_FLAGS,
    );
    out.string("Name", b.name.as_string());
    out.rgb("Color", b.color);
    out.vec3("Center", b.center);
    out.vec3("Extent", b.extent);
    out.finish()
}

fn null_object(bytes: &[u8], _: &ChunkContext) -> Fields {
    let n: NullObject = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", n.version);
    out.hex("Attributes", n.attributes);
    out.string("Name", n.name.as_string());
    out.finish()
}

fn shader_summary(out: &mut FieldList, s: &Shader) {
    out.enumerated("Shader.Src Blend", s.src_blend.into(), SRC_BLEND);
    out.enumerated("Shader.Dest Blend", s.dest_blend.into(), DEST_BLEND);
    out.enumerated("Shader.Depth Compare", s.depth_compare.into(), DEPTH_COMPARE);
    out.enumerated("Shader.Texturing", s.texturing.into(), TEXTURING);
}

fn sphere_def(bytes: &[u8], _: &ChunkContext) -> Fields {
    let s: SphereStruct = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", s.version);
    out.flags("Flags", s.attributes, u32::MAX, PRIMITIVE_FLAGS);
    out.string("Name", s.name.as_string());
    out.vec3("Center", s.center);
    out.vec3("Extent", s.extent);
    out.f32("Animation Duration", s.anim_duration);
    out.vec3("Default Color", s.default_color);
    out.f32("Default Alpha", s.default_alpha);
    out.vec3("Default Scale", s.default_scale);
    out.quat("Default Vector Angle", s.default_vector.angle);
    out.f32("Default Vector Intensity", s.default_vector.intensity);
    out.string("Texture", s.texture_name.as_string());
    shader_summary(&mut out, &s.shader);
    out.finish()
}

fn ring_def(bytes: &[u8], _: &ChunkContext) -> Fields {
    let r: RingStruct = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", r.version);
    out.flags("Flags", r.attributes, u32::MAX, PRIMITIVE_FLAGS);
    out.string("Name", r.name.as_string());
    out.vec3("Center", r.center);
    out.vec3("Extent", r.extent);
    out.f32("Animation Duration", r.anim_duration);
    out.vec3("Default Color", r.default_color);
    out.f32("Default Alpha", r.default_alpha);
    out.vec2("Default Inner Scale", r.default_inner_scale);
    out.vec2("Default Outer Scale", r.default_outer_scale);
    out.vec2("Inner Extent", r.inner_extent);
    out.vec2("Outer Extent", r.outer_extent);
    out.string("Texture", r.texture_name.as_string());
    shader_summary(&mut out, &r.shader);
    out.i32("Texture Tile Count", r.texture_tile_count);
    out.finish()
}

fn vec3_keys(bytes: &[u8], _: &ChunkContext) -> Fields {
    let keys: Vec<Vec3Key> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, k) in keys.into_iter().enumerate() {
        out.vec3(format!("Key[{}].Value", i), k.value);
        out.f32(format!("Key[{}].Time", i), k.time);
    }
    out.finish()
}

fn vec2_keys(bytes: &[u8], _: &ChunkContext) -> Fields {
    let keys: Vec<Vec2Key> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, k) in keys.into_iter().enumerate() {
        out.vec2(format!("Key[{}].Value", i), k.value);
        out.f32(format!("Key[{}].Time", i), k.time);
    }
    out.finish()
}

fn scalar_keys(bytes: &[u8], _: &ChunkContext) -> Fields {
    let keys: Vec<ScalarKey> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, k) in keys.into_iter().enumerate() {
        out.f32(format!("Key[{}].Value", i), k.value);
        out.f32(format!("Key[{}].Time", i), k.time);
    }
    out.finish()
}

fn vector_keys(bytes: &[u8], _: &ChunkContext) -> Fields {
    let keys: Vec<VectorKey> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, k) in keys.into_iter().enumerate() {
        out.quat(format!("Key[{}].Angle", i), k.value.angle);
        out.f32(format!("Key[{}].Intensity", i), k.value.intensity);
        out.f32(format!("Key[{}].Time", i), k.time);
    }
    out.finish()
}

fn light_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let l: LightStruct = overlay(bytes)?;
    let mut out = FieldList::new();
    out.enumerated("Type", l.attributes & LightStruct::TYPE_MASK, LIGHT_TYPE);
    out.flags("Flags", l.attributes, !LightStruct::TYPE_MASK, LIGHT_FLAGS);
    out.rgb("Ambient", l.ambient);
    out.rgb("Diffuse", l.diffuse);
    out.rgb("Specular", l.specular);
    out.f32("Intensity", l.intensity);
    out.finish()
}

fn spot_light_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let s: SpotLight = overlay(bytes)?;
    let mut out = FieldList::new();
    out.vec3("Direction", s.direction);
    out.f32("Angle", s.angle);
    out.f32("Exponent", s.exponent);
    out.finish()
}

fn attenuation(bytes: &[u8], _: &ChunkContext) -> Fields {
    let a: Attenuation = overlay(bytes)?;
    let mut out = FieldList::new();
    out.f32("Start", a.start);
    out.f32("End", a.end);
    out.finish()
}

fn emitter_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: EmitterHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.finish()
}

fn emitter_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let e: EmitterInfo = overlay(bytes)?;
    let mut out = FieldList::new();
    out.string("Texture", e.texture_filename.as_string());
    out.f32("Start Size", e.start_size);
    out.f32("End Size", e.end_size);
    out.f32("Lifetime", e.lifetime);
    out.f32("Emission Rate", e.emission_rate);
    out.f32("Max Emissions", e.max_emissions);
    out.f32("Velocity Random", e.velocity_random);
    out.f32("Position Random", e.position_random);
    out.f32("Fade Time", e.fade_time);
    out.f32("Gravity", e.gravity);
    out.f32("Elasticity", e.elasticity);
    out.vec3("Velocity", e.velocity);
    out.vec3("Acceleration", e.acceleration);
    out.rgba("Start Color", e.start_color);
    out.rgba("End Color", e.end_color);
    out.finish()
}

fn aggregate_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: AggregateHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.finish()
}

/// Info struct followed by exactly `subobject_count` subobject records.
fn aggregate_info(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (info, tail): (AggregateInfo, _) = with_tail(bytes)?;
    let expected = info.subobject_count as usize * AggregateSubobject::SIZE;
    if tail.len() != expected {
        return Err(format!(
            "{} subobjects need {} bytes, have {}",
            info.subobject_count,
            expected,
            tail.len()
        ));
    }
    let mut out = FieldList::new();
    out.string("Base Model", info.base_model_name.as_string());
    out.u32("Subobject Count", info.subobject_count);
    if !tail.is_empty() {
        let subobjects: Vec<AggregateSubobject> = items(tail)?;
        for (i, s) in subobjects.into_iter().enumerate() {
            out.string(format!("Subobject[{}].Name", i), s.subobject_name.as_string());
            out.string(format!("Subobject[{}].Bone", i), s.bone_name.as_string());
        }
    }
    out.finish()
}

fn sound_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: SoundRObjHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.hex("Flags", h.flags);
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::Name32;

    fn value<'a>(fields: &'a [Field], name: &str) -> &'a str {
        &fields.iter().find(|f| f.name == name).unwrap().value
    }

    #[test]
    fn test_aggregate_tail_must_match_count() {
        let info = AggregateInfo {
            base_model_name: Name32::new("BASE"),
            subobject_count: 1,
        };
        let sub = AggregateSubobject {
            subobject_name: Name32::new("GUN"),
            bone_name: Name32::new("BARREL"),
        };
        let mut bytes = info.to_bytes();
        assert!(aggregate_info(&bytes, &ChunkContext::default()).is_err());
        bytes.extend(sub.to_bytes());
        let fields = aggregate_info(&bytes, &ChunkContext::default()).unwrap();
        assert_eq!(value(&fields, "Subobject[0].Bone"), "BARREL");
    }

    #[test]
    fn test_light_type_and_flags() {
        let l = LightStruct {
            attributes: 3 | LightStruct::CAST_SHADOWS,
            intensity: 0.5,
            ..Default::default()
        };
        let fields = light_info(&l.to_bytes(), &ChunkContext::default()).unwrap();
        assert_eq!(value(&fields, "Type"), "Spot");
        assert_eq!(value(&fields, "Flags"), "Cast Shadows");
    }

    #[test]
    fn test_ring_and_sphere_channels_differ() {
        let key = Vec2Key::default().to_bytes();
        assert_eq!(vec2_keys(&key, &ChunkContext::default()).unwrap().len(), 2);
        // 12 bytes do not make whole Vec3 keys
        assert!(vec3_keys(&key, &ChunkContext::default()).is_err());
    }

    #[test]
    fn test_box_flags() {
        let b = BoxStruct {
            attributes: BoxStruct::ORIENTED | 0x20,
            name: Name32::new("BOUNDINGBOX"),
            ..Default::default()
        };
        let fields = box_object(&b.to_bytes(), &ChunkContext::default()).unwrap();
        assert_eq!(value(&fields, "Flags"), "Oriented");
        assert_eq!(value(&fields, "Collision Types"), "Projectile");
        assert_eq!(value(&fields, "Name"), "BOUNDINGBOX");
    }
}
