//! Name tables for enumerated codes and bit flags.

/// Name of `code` in an ordered table, `Unknown(code)` past its end.
pub fn enum_name(table: &[&str], code: u32) -> String {
    table
        .get(code as usize)
        .map(|s| (*s).to_string())
        .unwrap_or_else(|| format!("Unknown({})", code))
}

/// Names of the set flags in `value`, joined with `|`.
///
/// Bits not covered by `table` are listed as `Unknown(0x..)`; no bits at all
/// gives `None`.
pub fn flag_names(value: u32, table: &[(u32, &str)]) -> String {
    let mut names = Vec::new();
    let mut known = 0u32;
    for &(bit, name) in table {
        known |= bit;
        if value & bit == bit && bit != 0 {
            names.push(name.to_string());
        }
    }
    let unknown = value & !known;
    if unknown != 0 {
        names.push(format!("Unknown(0x{:X})", unknown));
    }
    if names.is_empty() {
        "None".into()
    } else {
        names.join(" | ")
    }
}

// ============================================================================
// Shader render states
// ============================================================================

pub const DEPTH_COMPARE: &[&str] = &[
    "Pass Never",
    "Pass Less",
    "Pass Equal",
    "Pass Less or Equal",
    "Pass Greater",
    "Pass Not Equal",
    "Pass Greater or Equal",
    "Pass Always",
];

pub const DEPTH_MASK: &[&str] = &["Write Disable", "Write Enable"];

pub const DEST_BLEND: &[&str] = &[
    "Zero",
    "One",
    "Src Color",
    "One Minus Src Color",
    "Src Alpha",
    "One Minus Src Alpha",
    "Src Color Prefog",
];

pub const SRC_BLEND: &[&str] = &["Zero", "One", "Src Alpha", "One Minus Src Alpha"];

pub const PRI_GRADIENT: &[&str] = &["Disable", "Modulate", "Add", "Bump-Environment"];

pub const SEC_GRADIENT: &[&str] = &["Disable", "Enable"];

pub const TEXTURING: &[&str] = &["Disable", "Enable"];

pub const ALPHA_TEST: &[&str] = &["Alpha Test Disable", "Alpha Test Enable"];

pub const DETAIL_COLOR_FUNC: &[&str] = &[
    "Disable",
    "Detail",
    "Scale",
    "InvScale",
    "Add",
    "Sub",
    "SubR",
    "Blend",
    "DetailBlend",
];

pub const DETAIL_ALPHA_FUNC: &[&str] = &["Disable", "Detail", "Scale", "InvScale"];

pub const SHADER_PRESET: &[&str] = &[
    "Opaque",
    "Additive",
    "Alpha",
    "Multiplicative",
    "Screen",
    "Detail",
];

// ============================================================================
// Materials and textures
// ============================================================================

pub const STAGE_MAPPING: &[&str] = &[
    "UV",
    "Environment",
    "Cheap Environment",
    "Screen",
    "Linear Offset",
    "Silhouette",
    "Scale",
    "Grid",
    "Rotate",
    "Sine Linear Offset",
    "Step Linear Offset",
    "Zigzag Linear Offset",
    "WS Classic Environment",
    "WS Environment",
    "Grid Classic Environment",
    "Grid Environment",
    "Random",
    "Edge",
    "Bump Environment",
];

pub const PSX_TRANSLUCENCY: &[&str] = &["None", "100%", "50%", "25%", "Minus 100%"];

pub const VERTEX_MATERIAL_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "Use Depth Cue"),
    (0x0000_0002, "ARGB Emissive Only"),
    (0x0000_0004, "Copy Specular To Diffuse"),
    (0x0000_0008, "Depth Cue To Alpha"),
];

pub const TEXTURE_FLAGS: &[(u32, &str)] = &[
    (0x0001, "Publish"),
    (0x0002, "Resize Obsolete"),
    (0x0004, "No LOD"),
    (0x0008, "Clamp U"),
    (0x0010, "Clamp V"),
    (0x0020, "Alpha Bitmap"),
];

pub const TEXTURE_MIP_LEVELS: &[&str] = &["All", "2", "3", "4"];

pub const TEXTURE_HINT: &[&str] = &["Base", "Emissive", "Environment", "Shiny Mask"];

pub const TEXTURE_ANIM_TYPE: &[&str] = &["Loop", "Ping Pong", "Once", "Manual"];

pub const SHADER_PROPERTY_TYPE: &[&str] = &[
    "Unknown",
    "Texture",
    "Float",
    "Vector2",
    "Vector3",
    "Vector4",
    "Int",
    "Bool",
];

// ============================================================================
// Meshes
// ============================================================================

pub const COLLISION_FLAGS: &[(u32, &str)] = &[
    (0x0000_0010, "Physical"),
    (0x0000_0020, "Projectile"),
    (0x0000_0040, "Vis"),
    (0x0000_0080, "Camera"),
    (0x0000_0100, "Vehicle"),
];

pub const MESH_COLLISION_MASK: u32 = 0x0000_0FF0;
pub const MESH_GEOMETRY_MASK: u32 = 0x00FF_0000;
pub const MESH_GEOMETRY_SHIFT: u32 = 16;
pub const MESH_PRELIT_MASK: u32 = 0x0F00_0000;

pub const MESH_STATE_FLAGS: &[(u32, &str)] = &[
    (0x0000_1000, "Hidden"),
    (0x0000_2000, "Two Sided"),
    (0x0000_4000, "Obsolete Lightmapped"),
    (0x0000_8000, "Cast Shadow"),
    (0x1000_0000, "Shatterable"),
    (0x2000_0000, "NPatchable"),
];

pub const MESH_GEOMETRY_TYPE: &[&str] = &[
    "Normal",
    "Camera Aligned",
    "Skin",
    "Obsolete Shadow",
    "AABox",
    "OBBox",
    "Camera Oriented",
];

pub const MESH_PRELIT_FLAGS: &[(u32, &str)] = &[
    (0x0100_0000, "Unlit"),
    (0x0200_0000, "Vertex"),
    (0x0400_0000, "Lightmap Multi Pass"),
    (0x0800_0000, "Lightmap Multi Texture"),
];

/// Every bit some mesh attribute group claims.
pub const MESH_KNOWN_BITS: u32 = MESH_COLLISION_MASK
    | 0x0000_F000
    | MESH_GEOMETRY_MASK
    | MESH_PRELIT_MASK
    | 0x3000_0000;

pub const VERTEX_CHANNEL_FLAGS: &[(u32, &str)] = &[
    (0x0001, "Location"),
    (0x0002, "Normal"),
    (0x0004, "TexCoord"),
    (0x0008, "Color"),
    (0x0010, "Bone Id"),
];

pub const FACE_CHANNEL_FLAGS: &[(u32, &str)] = &[(0x0001, "Face")];

pub const SURFACE_TYPE: &[&str] = &[
    "Light Metal",
    "Heavy Metal",
    "Water",
    "Sand",
    "Dirt",
    "Mud",
    "Grass",
    "Wood",
    "Concrete",
    "Flesh",
    "Rock",
    "Snow",
    "Ice",
    "Default",
    "Glass",
    "Cloth",
    "Tiberium Field",
    "Foliage Permeable",
    "Glass Permeable",
    "Ice Permeable",
    "Cloth Permeable",
    "Electrical",
    "Flammable",
    "Steam",
    "Electrical Permeable",
    "Flammable Permeable",
    "Steam Permeable",
    "Water Permeable",
    "Tiberium Water",
    "Tiberium Water Permeable",
    "Underwater Dirt",
    "Underwater Tiberium Dirt",
];

// ============================================================================
// Animation
// ============================================================================

pub const ANIM_CHANNEL_TYPE: &[&str] = &["X", "Y", "Z", "XR", "YR", "ZR", "Q"];

pub const TIMECODED_CHANNEL_TYPE: &[&str] = &["X", "Y", "Z", "Q"];

pub const BIT_CHANNEL_TYPE: &[&str] = &["Visibility", "Timecoded Visibility"];

pub const COMPRESSED_FLAVOR: &[&str] = &["Timecoded", "Adaptive Delta"];

pub const MOTION_FLAVOR: &[&str] = &["Timecoded", "Adaptive Delta 4", "Adaptive Delta 8"];

// ============================================================================
// Render objects
// ============================================================================

pub const BOX_FLAGS: &[(u32, &str)] = &[(0x0000_0001, "Oriented"), (0x0000_0002, "Aligned")];

pub const LIGHT_TYPE: &[&str] = &["Unknown", "Point", "Directional", "Spot"];

pub const LIGHT_FLAGS: &[(u32, &str)] = &[(0x0000_0100, "Cast Shadows")];

pub const PRIMITIVE_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "Camera Aligned"),
    (0x0000_0002, "Looping"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_out_of_range() {
        assert_eq!(enum_name(DEPTH_MASK, 1), "Write Enable");
        assert_eq!(enum_name(DEPTH_MASK, 2), "Unknown(2)");
        assert_eq!(enum_name(SURFACE_TYPE, 31), "Underwater Tiberium Dirt");
        assert_eq!(enum_name(SURFACE_TYPE, 200), "Unknown(200)");
    }

    #[test]
    fn test_flag_names() {
        assert_eq!(flag_names(0, COLLISION_FLAGS), "None");
        assert_eq!(flag_names(0x30, COLLISION_FLAGS), "Physical | Projectile");
        assert_eq!(flag_names(0x210, COLLISION_FLAGS), "Physical | Unknown(0x200)");
    }

    #[test]
    fn test_mesh_known_bits() {
        assert_eq!(MESH_KNOWN_BITS, 0x3FFF_FFF0);
    }
}
