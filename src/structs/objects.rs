//! Render object payloads: primitives, lights, emitters, aggregates, sounds.

use std::io;

use glam::{Quat, Vec2, Vec3};

use super::material::Shader;
use super::primitives::*;
use super::Overlay;

// ============================================================================
// Collision boxes and null objects
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxStruct {
    pub version: u32,
    pub attributes: u32,
    pub name: Name32,
    pub color: Rgb,
    pub center: Vec3,
    pub extent: Vec3,
}

impl BoxStruct {
    pub const ORIENTED: u32 = 0x0000_0001;
    pub const ALIGNED: u32 = 0x0000_0002;
    pub const COLLISION_TYPE_MASK: u32 = 0x0000_0FF0;
}

impl Overlay for BoxStruct {
    const SIZE: usize = 68;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            attributes: get_u32(r)?,
            name: Name32::decode(r)?,
            color: Rgb::decode(r)?,
            center: get_vec3(r)?,
            extent: get_vec3(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.attributes);
        self.name.encode(out);
        self.color.encode(out);
        put_vec3(out, self.center);
        put_vec3(out, self.extent);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NullObject {
    pub version: u32,
    pub attributes: u32,
    pub pad: [u32; 2],
    pub name: Name32,
}

impl Overlay for NullObject {
    const SIZE: usize = 48;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            attributes: get_u32(r)?,
            pad: get_u32_array(r)?,
            name: Name32::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.attributes);
        put_u32_array(out, &self.pad);
        self.name.encode(out);
    }
}

// ============================================================================
// Sphere and ring primitives
// ============================================================================

/// Orientation plus intensity, used by sphere vector channels.
#[derive(Clone, Debug, PartialEq)]
pub struct AlphaVector {
    pub angle: Quat,
    pub intensity: f32,
}

impl Default for AlphaVector {
    fn default() -> Self {
        Self {
            angle: Quat::IDENTITY,
            intensity: 0.0,
        }
    }
}

impl Overlay for AlphaVector {
    const SIZE: usize = 20;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            angle: get_quat(r)?,
            intensity: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_quat(out, self.angle);
        put_f32(out, self.intensity);
    }
}

/// Sphere definition (id `0x0001` under a sphere).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereStruct {
    pub version: u32,
    pub attributes: u32,
    pub name: Name32,
    pub center: Vec3,
    pub extent: Vec3,
    pub anim_duration: f32,
    pub default_color: Vec3,
    pub default_alpha: f32,
    pub default_scale: Vec3,
    pub default_vector: AlphaVector,
    pub texture_name: Name32,
    pub shader: Shader,
}

impl Overlay for SphereStruct {
    const SIZE: usize = 164;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            attributes: get_u32(r)?,
            name: Name32::decode(r)?,
            center: get_vec3(r)?,
            extent: get_vec3(r)?,
            anim_duration: get_f32(r)?,
            default_color: get_vec3(r)?,
            default_alpha: get_f32(r)?,
            default_scale: get_vec3(r)?,
            default_vector: AlphaVector::decode(r)?,
            texture_name: Name32::decode(r)?,
            shader: Shader::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.attributes);
        self.name.encode(out);
        put_vec3(out, self.center);
        put_vec3(out, self.extent);
        put_f32(out, self.anim_duration);
        put_vec3(out, self.default_color);
        put_f32(out, self.default_alpha);
        put_vec3(out, self.default_scale);
        self.default_vector.encode(out);
        self.texture_name.encode(out);
        self.shader.encode(out);
    }
}

/// Ring definition (id `0x0001` under a ring).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingStruct {
    pub version: u32,
    pub attributes: u32,
    pub name: Name32,
    pub center: Vec3,
    pub extent: Vec3,
    pub anim_duration: f32,
    pub default_color: Vec3,
    pub default_alpha: f32,
    pub default_inner_scale: Vec2,
    pub default_outer_scale: Vec2,
    pub inner_extent: Vec2,
    pub outer_extent: Vec2,
    pub texture_name: Name32,
    pub shader: Shader,
    pub texture_tile_count: i32,
}

impl Overlay for RingStruct {
    const SIZE: usize = 168;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            attributes: get_u32(r)?,
            name: Name32::decode(r)?,
            center: get_vec3(r)?,
            extent: get_vec3(r)?,
            anim_duration: get_f32(r)?,
            default_color: get_vec3(r)?,
            default_alpha: get_f32(r)?,
            default_inner_scale: get_vec2(r)?,
            default_outer_scale: get_vec2(r)?,
            inner_extent: get_vec2(r)?,
            outer_extent: get_vec2(r)?,
            texture_name: Name32::decode(r)?,
            shader: Shader::decode(r)?,
            texture_tile_count: get_i32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        put_u32(out, self.attributes);
        self.name.encode(out);
        put_vec3(out, self.center);
        put_vec3(out, self.extent);
        put_f32(out, self.anim_duration);
        put_vec3(out, self.default_color);
        put_f32(out, self.default_alpha);
        put_vec2(out, self.default_inner_scale);
        put_vec2(out, self.default_outer_scale);
        put_vec2(out, self.inner_extent);
        put_vec2(out, self.outer_extent);
        self.texture_name.encode(out);
        self.shader.encode(out);
        put_i32(out, self.texture_tile_count);
    }
}

/// Color or scale key of a primitive channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vec3Key {
    pub value: Vec3,
    pub time: f32,
}

impl Overlay for Vec3Key {
    const SIZE: usize = 16;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            value: get_vec3(r)?,
            time: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_vec3(out, self.value);
        put_f32(out, self.time);
    }
}

/// Alpha key of a primitive channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarKey {
    pub value: f32,
    pub time: f32,
}

impl Overlay for ScalarKey {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            value: get_f32(r)?,
            time: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_f32(out, self.value);
        put_f32(out, self.time);
    }
}

/// Inner or outer scale key of a ring channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vec2Key {
    pub value: Vec2,
    pub time: f32,
}

impl Overlay for Vec2Key {
    const SIZE: usize = 12;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            value: get_vec2(r)?,
            time: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_vec2(out, self.value);
        put_f32(out, self.time);
    }
}

/// Vector key of a sphere channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorKey {
    pub value: AlphaVector,
    pub time: f32,
}

impl Overlay for VectorKey {
    const SIZE: usize = 24;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            value: AlphaVector::decode(r)?,
            time: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.value.encode(out);
        put_f32(out, self.time);
    }
}

// ============================================================================
// Lights
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightStruct {
    pub attributes: u32,
    pub unused: u32,
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub intensity: f32,
}

impl LightStruct {
    pub const TYPE_MASK: u32 = 0x0000_00FF;
    pub const CAST_SHADOWS: u32 = 0x0000_0100;
}

impl Overlay for LightStruct {
    const SIZE: usize = 24;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            attributes: get_u32(r)?,
            unused: get_u32(r)?,
            ambient: Rgb::decode(r)?,
            diffuse: Rgb::decode(r)?,
            specular: Rgb::decode(r)?,
            intensity: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.attributes);
        put_u32(out, self.unused);
        self.ambient.encode(out);
        self.diffuse.encode(out);
        self.specular.encode(out);
        put_f32(out, self.intensity);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpotLight {
    pub direction: Vec3,
    pub angle: f32,
    pub exponent: f32,
}

impl Overlay for SpotLight {
    const SIZE: usize = 20;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            direction: get_vec3(r)?,
            angle: get_f32(r)?,
            exponent: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_vec3(out, self.direction);
        put_f32(out, self.angle);
        put_f32(out, self.exponent);
    }
}

/// Near or far attenuation range.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attenuation {
    pub start: f32,
    pub end: f32,
}

impl Overlay for Attenuation {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            start: get_f32(r)?,
            end: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_f32(out, self.start);
        put_f32(out, self.end);
    }
}

// ============================================================================
// Emitters
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitterHeader {
    pub version: u32,
    pub name: Name16,
}

impl Overlay for EmitterHeader {
    const SIZE: usize = 20;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
    }
}

/// Legacy particle settings (`EMITTER_INFO`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmitterInfo {
    pub texture_filename: FixedName<260>,
    pub start_size: f32,
    pub end_size: f32,
    pub lifetime: f32,
    pub emission_rate: f32,
    pub max_emissions: f32,
    pub velocity_random: f32,
    pub position_random: f32,
    pub fade_time: f32,
    pub gravity: f32,
    pub elasticity: f32,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub start_color: Rgba,
    pub end_color: Rgba,
}

impl Overlay for EmitterInfo {
    const SIZE: usize = 332;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            texture_filename: FixedName::decode(r)?,
            start_size: get_f32(r)?,
            end_size: get_f32(r)?,
            lifetime: get_f32(r)?,
            emission_rate: get_f32(r)?,
            max_emissions: get_f32(r)?,
            velocity_random: get_f32(r)?,
            position_random: get_f32(r)?,
            fade_time: get_f32(r)?,
            gravity: get_f32(r)?,
            elasticity: get_f32(r)?,
            velocity: get_vec3(r)?,
            acceleration: get_vec3(r)?,
            start_color: Rgba::decode(r)?,
            end_color: Rgba::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.texture_filename.encode(out);
        put_f32(out, self.start_size);
        put_f32(out, self.end_size);
        put_f32(out, self.lifetime);
        put_f32(out, self.emission_rate);
        put_f32(out, self.max_emissions);
        put_f32(out, self.velocity_random);
        put_f32(out, self.position_random);
        put_f32(out, self.fade_time);
        put_f32(out, self.gravity);
        put_f32(out, self.elasticity);
        put_vec3(out, self.velocity);
        put_vec3(out, self.acceleration);
        self.start_color.encode(out);
        self.end_color.encode(out);
    }
}

// ============================================================================
// Aggregates, collections, sound objects
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateHeader {
    pub version: u32,
    pub name: Name16,
}

impl Overlay for AggregateHeader {
    const SIZE: usize = 20;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
    }
}

/// Base model plus the number of attached sub-objects that follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateInfo {
    pub base_model_name: Name32,
    pub subobject_count: u32,
}

impl Overlay for AggregateInfo {
    const SIZE: usize = 36;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            base_model_name: Name32::decode(r)?,
            subobject_count: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.base_model_name.encode(out);
        put_u32(out, self.subobject_count);
    }
}

/// One attached sub-object following an [`AggregateInfo`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggregateSubobject {
    pub subobject_name: Name32,
    pub bone_name: Name32,
}

impl Overlay for AggregateSubobject {
    const SIZE: usize = 64;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            subobject_name: Name32::decode(r)?,
            bone_name: Name32::decode(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        self.subobject_name.encode(out);
        self.bone_name.encode(out);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionHeader {
    pub version: u32,
    pub name: Name16,
    pub render_object_count: u32,
    pub pad: [u32; 2],
}

impl Overlay for CollectionHeader {
    const SIZE: usize = 32;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            render_object_count: get_u32(r)?,
            pad: get_u32_array(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        put_u32(out, self.render_object_count);
        put_u32_array(out, &self.pad);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SoundRObjHeader {
    pub version: u32,
    pub name: Name16,
    pub flags: u32,
    pub padding: [u32; 8],
}

impl Overlay for SoundRObjHeader {
    const SIZE: usize = 56;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            flags: get_u32(r)?,
            padding: get_u32_array(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        put_u32(out, self.flags);
        put_u32_array(out, &self.padding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_encoding() {
        assert_eq!(BoxStruct::default().to_bytes().len(), BoxStruct::SIZE);
        assert_eq!(NullObject::default().to_bytes().len(), NullObject::SIZE);
        assert_eq!(AlphaVector::default().to_bytes().len(), AlphaVector::SIZE);
        assert_eq!(SphereStruct::default().to_bytes().len(), SphereStruct::SIZE);
        assert_eq!(RingStruct::default().to_bytes().len(), RingStruct::SIZE);
        assert_eq!(Vec3Key::default().to_bytes().len(), Vec3Key::SIZE);
        assert_eq!(ScalarKey::default().to_bytes().len(), ScalarKey::SIZE);
        assert_eq!(Vec2Key::default().to_bytes().len(), Vec2Key::SIZE);
        assert_eq!(VectorKey::default().to_bytes().len(), VectorKey::SIZE);
        assert_eq!(LightStruct::default().to_bytes().len(), LightStruct::SIZE);
        assert_eq!(SpotLight::default().to_bytes().len(), SpotLight::SIZE);
        assert_eq!(Attenuation::default().to_bytes().len(), Attenuation::SIZE);
        assert_eq!(EmitterHeader::default().to_bytes().len(), EmitterHeader::SIZE);
        assert_eq!(EmitterInfo::default().to_bytes().len(), EmitterInfo::SIZE);
        assert_eq!(AggregateHeader::default().to_bytes().len(), AggregateHeader::SIZE);
        assert_eq!(AggregateInfo::default().to_bytes().len(), AggregateInfo::SIZE);
        assert_eq!(AggregateSubobject::default().to_bytes().len(), AggregateSubobject::SIZE);
        assert_eq!(CollectionHeader::default().to_bytes().len(), CollectionHeader::SIZE);
        assert_eq!(SoundRObjHeader::default().to_bytes().len(), SoundRObjHeader::SIZE);
    }

    #[test]
    fn test_emitter_texture_name() {
        let info = EmitterInfo {
            texture_filename: FixedName::new("smoke.tga"),
            lifetime: 2.0,
            ..Default::default()
        };
        let bytes = info.to_bytes();
        let parsed = EmitterInfo::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.texture_filename.as_string(), "smoke.tga");
        assert_eq!(&bytes[268..272], &2.0f32.to_le_bytes());
    }
}
