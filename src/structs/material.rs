//! Material payloads: vertex materials, shaders, textures, shader materials.

use std::io;

use byteorder::ReadBytesExt;

use super::primitives::*;
use super::Overlay;

/// Counts at the top of a mesh's material block (`MATERIAL_INFO`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialInfo {
    pub pass_count: u32,
    pub vertex_material_count: u32,
    pub shader_count: u32,
    pub texture_count: u32,
}

impl Overlay for MaterialInfo {
    const SIZE: usize = 16;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            pass_count: get_u32(r)?,
            vertex_material_count: get_u32(r)?,
            shader_count: get_u32(r)?,
            texture_count: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.pass_count);
        put_u32(out, self.vertex_material_count);
        put_u32(out, self.shader_count);
        put_u32(out, self.texture_count);
    }
}

/// Fixed-function lighting material (`VERTEX_MATERIAL_INFO`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexMaterial {
    /// Flags, stage mappings and PSX bits.
    pub attributes: u32,
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    pub emissive: Rgb,
    pub shininess: f32,
    pub opacity: f32,
    pub translucency: f32,
}

impl VertexMaterial {
    pub const USE_DEPTH_CUE: u32 = 0x0000_0001;
    pub const ARGB_EMISSIVE_ONLY: u32 = 0x0000_0002;
    pub const COPY_SPECULAR_TO_DIFFUSE: u32 = 0x0000_0004;
    pub const DEPTH_CUE_TO_ALPHA: u32 = 0x0000_0008;
    pub const STAGE0_MAPPING_MASK: u32 = 0x00FF_0000;
    pub const STAGE0_MAPPING_SHIFT: u32 = 16;
    pub const STAGE1_MAPPING_MASK: u32 = 0x0000_FF00;
    pub const STAGE1_MAPPING_SHIFT: u32 = 8;
    pub const PSX_TRANS_MASK: u32 = 0x0700_0000;
    pub const PSX_TRANS_SHIFT: u32 = 24;
    pub const PSX_NO_RT_LIGHTING: u32 = 0x0800_0000;

    /// Texture coordinate mapper code of stage 0.
    #[inline]
    pub fn stage0_mapping(&self) -> u32 {
        (self.attributes & Self::STAGE0_MAPPING_MASK) >> Self::STAGE0_MAPPING_SHIFT
    }

    /// Texture coordinate mapper code of stage 1.
    #[inline]
    pub fn stage1_mapping(&self) -> u32 {
        (self.attributes & Self::STAGE1_MAPPING_MASK) >> Self::STAGE1_MAPPING_SHIFT
    }

    #[inline]
    pub fn psx_translucency(&self) -> u32 {
        (self.attributes & Self::PSX_TRANS_MASK) >> Self::PSX_TRANS_SHIFT
    }
}

impl Overlay for VertexMaterial {
    const SIZE: usize = 32;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            attributes: get_u32(r)?,
            ambient: Rgb::decode(r)?,
            diffuse: Rgb::decode(r)?,
            specular: Rgb::decode(r)?,
            emissive: Rgb::decode(r)?,
            shininess: get_f32(r)?,
            opacity: get_f32(r)?,
            translucency: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.attributes);
        self.ambient.encode(out);
        self.diffuse.encode(out);
        self.specular.encode(out);
        self.emissive.encode(out);
        put_f32(out, self.shininess);
        put_f32(out, self.opacity);
        put_f32(out, self.translucency);
    }
}

/// Render state block, one per entry of `SHADERS`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shader {
    pub depth_compare: u8,
    pub depth_mask: u8,
    pub color_mask: u8,
    pub dest_blend: u8,
    pub fog_func: u8,
    pub pri_gradient: u8,
    pub sec_gradient: u8,
    pub src_blend: u8,
    pub texturing: u8,
    pub detail_color_func: u8,
    pub detail_alpha_func: u8,
    pub shader_preset: u8,
    pub alpha_test: u8,
    pub post_detail_color_func: u8,
    pub post_detail_alpha_func: u8,
    pub pad: u8,
}

impl Overlay for Shader {
    const SIZE: usize = 16;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            depth_compare: r.read_u8()?,
            depth_mask: r.read_u8()?,
            color_mask: r.read_u8()?,
            dest_blend: r.read_u8()?,
            fog_func: r.read_u8()?,
            pri_gradient: r.read_u8()?,
            sec_gradient: r.read_u8()?,
            src_blend: r.read_u8()?,
            texturing: r.read_u8()?,
            detail_color_func: r.read_u8()?,
            detail_alpha_func: r.read_u8()?,
            shader_preset: r.read_u8()?,
            alpha_test: r.read_u8()?,
            post_detail_color_func: r.read_u8()?,
            post_detail_alpha_func: r.read_u8()?,
            pad: r.read_u8()?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[
            self.depth_compare,
            self.depth_mask,
            self.color_mask,
            self.dest_blend,
            self.fog_func,
            self.pri_gradient,
            self.sec_gradient,
            self.src_blend,
            self.texturing,
            self.detail_color_func,
            self.detail_alpha_func,
            self.shader_preset,
            self.alpha_test,
            self.post_detail_color_func,
            self.post_detail_alpha_func,
            self.pad,
        ]);
    }
}

/// Texture animation and sampling options (`TEXTURE_INFO`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureInfo {
    pub attributes: u16,
    pub anim_type: u16,
    pub frame_count: u32,
    pub frame_rate: f32,
}

impl TextureInfo {
    pub const PUBLISH: u16 = 0x0001;
    pub const RESIZE_OBSOLETE: u16 = 0x0002;
    pub const NO_LOD: u16 = 0x0004;
    pub const CLAMP_U: u16 = 0x0008;
    pub const CLAMP_V: u16 = 0x0010;
    pub const ALPHA_BITMAP: u16 = 0x0020;
    pub const MIP_LEVELS_MASK: u16 = 0x00C0;
    pub const MIP_LEVELS_SHIFT: u16 = 6;
    pub const HINT_MASK: u16 = 0x0F00;
    pub const HINT_SHIFT: u16 = 8;
    pub const TYPE_BUMPMAP: u16 = 0x1000;
}

impl Overlay for TextureInfo {
    const SIZE: usize = 12;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            attributes: get_u16(r)?,
            anim_type: get_u16(r)?,
            frame_count: get_u32(r)?,
            frame_rate: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u16(out, self.attributes);
        put_u16(out, self.anim_type);
        put_u32(out, self.frame_count);
        put_f32(out, self.frame_rate);
    }
}

/// Header of a programmable shader material (`SHADER_MATERIAL_HEADER`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderMaterialHeader {
    pub version: u8,
    pub type_name: Name32,
    pub pad: [u8; 3],
    pub reserved: u32,
}

impl Overlay for ShaderMaterialHeader {
    const SIZE: usize = 40;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: r.read_u8()?,
            type_name: Name32::decode(r)?,
            pad: [r.read_u8()?, r.read_u8()?, r.read_u8()?],
            reserved: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u8(out, self.version);
        self.type_name.encode(out);
        out.extend_from_slice(&self.pad);
        put_u32(out, self.reserved);
    }
}

/// Leading part of a `SHADER_MATERIAL_PROPERTY`; the name and value follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShaderPropertyHeader {
    pub property_type: u32,
    pub name_length: u32,
}

impl ShaderPropertyHeader {
    pub const TEXTURE: u32 = 1;
    pub const FLOAT: u32 = 2;
    pub const VECTOR2: u32 = 3;
    pub const VECTOR3: u32 = 4;
    pub const VECTOR4: u32 = 5;
    pub const INT: u32 = 6;
    pub const BOOL: u32 = 7;
}

impl Overlay for ShaderPropertyHeader {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            property_type: get_u32(r)?,
            name_length: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.property_type);
        put_u32(out, self.name_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_encoding() {
        assert_eq!(MaterialInfo::default().to_bytes().len(), MaterialInfo::SIZE);
        assert_eq!(VertexMaterial::default().to_bytes().len(), VertexMaterial::SIZE);
        assert_eq!(Shader::default().to_bytes().len(), Shader::SIZE);
        assert_eq!(TextureInfo::default().to_bytes().len(), TextureInfo::SIZE);
        assert_eq!(
            ShaderMaterialHeader::default().to_bytes().len(),
            ShaderMaterialHeader::SIZE
        );
        assert_eq!(
            ShaderPropertyHeader::default().to_bytes().len(),
            ShaderPropertyHeader::SIZE
        );
    }

    #[test]
    fn test_stage_mappings() {
        let vm = VertexMaterial {
            attributes: 0x0802_0100 | VertexMaterial::USE_DEPTH_CUE,
            ..Default::default()
        };
        assert_eq!(vm.stage0_mapping(), 2);
        assert_eq!(vm.stage1_mapping(), 1);
        assert_eq!(vm.psx_translucency(), 0);
        assert_ne!(vm.attributes & VertexMaterial::PSX_NO_RT_LIGHTING, 0);
    }

    #[test]
    fn test_shader_byte_order() {
        let mut bytes = [0u8; 16];
        bytes[0] = 3;
        bytes[3] = 5;
        bytes[15] = 0x77;
        let shader = Shader::from_bytes(&bytes).unwrap();
        assert_eq!(shader.depth_compare, 3);
        assert_eq!(shader.dest_blend, 5);
        assert_eq!(shader.pad, 0x77);
        assert_eq!(shader.to_bytes(), bytes);
    }
}
