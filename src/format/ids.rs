//! Numeric chunk identifiers.
//!
//! Ids are not unique across contexts: `0x0001` is a legacy mesh header at the
//! top of a mesh, but the definition chunk inside a sphere or ring primitive,
//! and `0x0100` is a hierarchy at the top level but a sound render definition
//! inside a sound object definition.

// ============================================================================
// Mesh
// ============================================================================

pub const MESH: u32 = 0x0000_0000;
pub const MESH_HEADER: u32 = 0x0000_0001;
pub const VERTICES: u32 = 0x0000_0002;
pub const VERTEX_NORMALS: u32 = 0x0000_0003;
pub const SURRENDER_NORMALS: u32 = 0x0000_0004;
pub const TEXCOORDS: u32 = 0x0000_0005;
pub const O_MATERIALS: u32 = 0x0000_0006;
pub const O_TRIANGLES: u32 = 0x0000_0007;
pub const O_QUADRANGLES: u32 = 0x0000_0008;
pub const O_SURRENDER_TRIANGLES: u32 = 0x0000_0009;
pub const O_POV_TRIANGLES: u32 = 0x0000_000A;
pub const O_POV_QUADRANGLES: u32 = 0x0000_000B;
pub const MESH_USER_TEXT: u32 = 0x0000_000C;
pub const VERTEX_COLORS: u32 = 0x0000_000D;
pub const VERTEX_INFLUENCES: u32 = 0x0000_000E;
pub const DAMAGE: u32 = 0x0000_000F;
pub const DAMAGE_HEADER: u32 = 0x0000_0010;
pub const DAMAGE_VERTICES: u32 = 0x0000_0011;
pub const DAMAGE_COLORS: u32 = 0x0000_0012;
pub const DAMAGE_MATERIALS: u32 = 0x0000_0013;
pub const O_MATERIALS2: u32 = 0x0000_0014;
pub const MATERIALS3: u32 = 0x0000_0015;
pub const MATERIAL3: u32 = 0x0000_0016;
pub const MATERIAL3_NAME: u32 = 0x0000_0017;
pub const MATERIAL3_INFO: u32 = 0x0000_0018;
pub const MATERIAL3_DC_MAP: u32 = 0x0000_0019;
pub const MAP3_FILENAME: u32 = 0x0000_001A;
pub const MAP3_INFO: u32 = 0x0000_001B;
pub const MATERIAL3_DI_MAP: u32 = 0x0000_001C;
pub const MATERIAL3_SC_MAP: u32 = 0x0000_001D;
pub const MATERIAL3_SI_MAP: u32 = 0x0000_001E;
pub const MESH_HEADER3: u32 = 0x0000_001F;
pub const TRIANGLES: u32 = 0x0000_0020;
pub const PER_TRI_MATERIALS: u32 = 0x0000_0021;
pub const VERTEX_SHADE_INDICES: u32 = 0x0000_0022;
pub const PRELIT_UNLIT: u32 = 0x0000_0023;
pub const PRELIT_VERTEX: u32 = 0x0000_0024;
pub const PRELIT_LIGHTMAP_MULTI_PASS: u32 = 0x0000_0025;
pub const PRELIT_LIGHTMAP_MULTI_TEXTURE: u32 = 0x0000_0026;
pub const MATERIAL_INFO: u32 = 0x0000_0028;
pub const SHADERS: u32 = 0x0000_0029;
pub const VERTEX_MATERIALS: u32 = 0x0000_002A;
pub const VERTEX_MATERIAL: u32 = 0x0000_002B;
pub const VERTEX_MATERIAL_NAME: u32 = 0x0000_002C;
pub const VERTEX_MATERIAL_INFO: u32 = 0x0000_002D;
pub const VERTEX_MAPPER_ARGS0: u32 = 0x0000_002E;
pub const VERTEX_MAPPER_ARGS1: u32 = 0x0000_002F;
pub const TEXTURES: u32 = 0x0000_0030;
pub const TEXTURE: u32 = 0x0000_0031;
pub const TEXTURE_NAME: u32 = 0x0000_0032;
pub const TEXTURE_INFO: u32 = 0x0000_0033;
pub const MATERIAL_PASS: u32 = 0x0000_0038;
pub const VERTEX_MATERIAL_IDS: u32 = 0x0000_0039;
pub const SHADER_IDS: u32 = 0x0000_003A;
pub const DCG: u32 = 0x0000_003B;
pub const DIG: u32 = 0x0000_003C;
pub const SCG: u32 = 0x0000_003E;
pub const SHADER_MATERIAL_ID: u32 = 0x0000_003F;
pub const TEXTURE_STAGE: u32 = 0x0000_0048;
pub const TEXTURE_IDS: u32 = 0x0000_0049;
pub const STAGE_TEXCOORDS: u32 = 0x0000_004A;
pub const PER_FACE_TEXCOORD_IDS: u32 = 0x0000_004B;
pub const SHADER_MATERIALS: u32 = 0x0000_0050;
pub const SHADER_MATERIAL: u32 = 0x0000_0051;
pub const SHADER_MATERIAL_HEADER: u32 = 0x0000_0052;
pub const SHADER_MATERIAL_PROPERTY: u32 = 0x0000_0053;
pub const DEFORM: u32 = 0x0000_0058;
pub const DEFORM_SET: u32 = 0x0000_0059;
pub const DEFORM_KEYFRAME: u32 = 0x0000_005A;
pub const DEFORM_DATA: u32 = 0x0000_005B;
pub const TANGENTS: u32 = 0x0000_0060;
pub const BINORMALS: u32 = 0x0000_0061;
pub const PS2_SHADERS: u32 = 0x0000_0080;
pub const AABTREE: u32 = 0x0000_0090;
pub const AABTREE_HEADER: u32 = 0x0000_0091;
pub const AABTREE_POLYINDICES: u32 = 0x0000_0092;
pub const AABTREE_NODES: u32 = 0x0000_0093;

// ============================================================================
// Hierarchy and animation
// ============================================================================

pub const HIERARCHY: u32 = 0x0000_0100;
pub const HIERARCHY_HEADER: u32 = 0x0000_0101;
pub const PIVOTS: u32 = 0x0000_0102;
pub const PIVOT_FIXUPS: u32 = 0x0000_0103;
pub const ANIMATION: u32 = 0x0000_0200;
pub const ANIMATION_HEADER: u32 = 0x0000_0201;
pub const ANIMATION_CHANNEL: u32 = 0x0000_0202;
pub const BIT_CHANNEL: u32 = 0x0000_0203;
pub const COMPRESSED_ANIMATION: u32 = 0x0000_0280;
pub const COMPRESSED_ANIMATION_HEADER: u32 = 0x0000_0281;
pub const COMPRESSED_ANIMATION_CHANNEL: u32 = 0x0000_0282;
pub const COMPRESSED_BIT_CHANNEL: u32 = 0x0000_0283;
pub const COMPRESSED_ANIMATION_MOTION_CHANNEL: u32 = 0x0000_0284;
pub const MORPH_ANIMATION: u32 = 0x0000_02C0;
pub const MORPHANIM_HEADER: u32 = 0x0000_02C1;
pub const MORPHANIM_CHANNEL: u32 = 0x0000_02C2;
pub const MORPHANIM_POSENAME: u32 = 0x0000_02C3;
pub const MORPHANIM_KEYDATA: u32 = 0x0000_02C4;
pub const MORPHANIM_PIVOTCHANNELDATA: u32 = 0x0000_02C5;

// ============================================================================
// Models, LODs, collections
// ============================================================================

pub const HMODEL: u32 = 0x0000_0300;
pub const HMODEL_HEADER: u32 = 0x0000_0301;
pub const NODE: u32 = 0x0000_0302;
pub const COLLISION_NODE: u32 = 0x0000_0303;
pub const SKIN_NODE: u32 = 0x0000_0304;
pub const HMODEL_AUX_DATA: u32 = 0x0000_0305;
pub const SHADOW_NODE: u32 = 0x0000_0306;
pub const LODMODEL: u32 = 0x0000_0400;
pub const LODMODEL_HEADER: u32 = 0x0000_0401;
pub const LOD: u32 = 0x0000_0402;
pub const COLLECTION: u32 = 0x0000_0420;
pub const COLLECTION_HEADER: u32 = 0x0000_0421;
pub const COLLECTION_OBJ_NAME: u32 = 0x0000_0422;
pub const PLACEHOLDER: u32 = 0x0000_0423;
pub const TRANSFORM_NODE: u32 = 0x0000_0424;
pub const POINTS: u32 = 0x0000_0440;

// ============================================================================
// Lights, emitters, aggregates
// ============================================================================

pub const LIGHT: u32 = 0x0000_0460;
pub const LIGHT_INFO: u32 = 0x0000_0461;
pub const SPOT_LIGHT_INFO: u32 = 0x0000_0462;
pub const NEAR_ATTENUATION: u32 = 0x0000_0463;
pub const FAR_ATTENUATION: u32 = 0x0000_0464;
pub const EMITTER: u32 = 0x0000_0500;
pub const EMITTER_HEADER: u32 = 0x0000_0501;
pub const EMITTER_USER_DATA: u32 = 0x0000_0502;
pub const EMITTER_INFO: u32 = 0x0000_0503;
pub const EMITTER_INFOV2: u32 = 0x0000_0504;
pub const EMITTER_PROPS: u32 = 0x0000_0505;
pub const EMITTER_LINE_PROPERTIES: u32 = 0x0000_0509;
pub const EMITTER_ROTATION_KEYFRAMES: u32 = 0x0000_050A;
pub const EMITTER_FRAME_KEYFRAMES: u32 = 0x0000_050B;
pub const EMITTER_BLUR_TIME_KEYFRAMES: u32 = 0x0000_050C;
pub const AGGREGATE: u32 = 0x0000_0600;
pub const AGGREGATE_HEADER: u32 = 0x0000_0601;
pub const AGGREGATE_INFO: u32 = 0x0000_0602;
pub const TEXTURE_REPLACER_INFO: u32 = 0x0000_0603;
pub const AGGREGATE_CLASS_INFO: u32 = 0x0000_0604;

// ============================================================================
// HLOD
// ============================================================================

pub const HLOD: u32 = 0x0000_0700;
pub const HLOD_HEADER: u32 = 0x0000_0701;
pub const HLOD_LOD_ARRAY: u32 = 0x0000_0702;
pub const HLOD_SUB_OBJECT_ARRAY_HEADER: u32 = 0x0000_0703;
pub const HLOD_SUB_OBJECT: u32 = 0x0000_0704;
pub const HLOD_AGGREGATE_ARRAY: u32 = 0x0000_0705;
pub const HLOD_PROXY_ARRAY: u32 = 0x0000_0706;

// ============================================================================
// Primitives and misc render objects
// ============================================================================

pub const BOX: u32 = 0x0000_0740;
pub const SPHERE: u32 = 0x0000_0741;
pub const RING: u32 = 0x0000_0742;
pub const NULL_OBJECT: u32 = 0x0000_0750;
pub const LIGHTSCAPE: u32 = 0x0000_0800;
pub const LIGHTSCAPE_LIGHT: u32 = 0x0000_0801;
pub const LIGHT_TRANSFORM: u32 = 0x0000_0802;
pub const DAZZLE: u32 = 0x0000_0900;
pub const DAZZLE_NAME: u32 = 0x0000_0901;
pub const DAZZLE_TYPENAME: u32 = 0x0000_0902;
pub const SOUNDROBJ: u32 = 0x0000_0A00;
pub const SOUNDROBJ_HEADER: u32 = 0x0000_0A01;
pub const SOUNDROBJ_DEFINITION: u32 = 0x0000_0A02;
pub const SOUNDROBJ_DEFINITION_EXT: u32 = 0x0000_0A03;
pub const SHDMESH: u32 = 0x0000_0B00;
pub const SHDMESH_NAME: u32 = 0x0000_0B01;
pub const SHDMESH_HEADER: u32 = 0x0000_0B02;
pub const SHDMESH_USER_TEXT: u32 = 0x0000_0B03;
pub const SHDSUBMESH: u32 = 0x0000_0B20;

// ============================================================================
// Contextual ids (same number, different meaning under a specific parent)
// ============================================================================

/// Children of a sphere primitive.
pub mod sphere {
    pub const DEF: u32 = 0x0001;
    pub const COLOR_CHANNEL: u32 = 0x0002;
    pub const ALPHA_CHANNEL: u32 = 0x0003;
    pub const SCALE_CHANNEL: u32 = 0x0004;
    pub const VECTOR_CHANNEL: u32 = 0x0005;
}

/// Children of a ring primitive.
pub mod ring {
    pub const DEF: u32 = 0x0001;
    pub const COLOR_CHANNEL: u32 = 0x0002;
    pub const ALPHA_CHANNEL: u32 = 0x0003;
    pub const INNER_SCALE_CHANNEL: u32 = 0x0004;
    pub const OUTER_SCALE_CHANNEL: u32 = 0x0005;
}

/// Sound render definition, only meaningful inside a sound object definition.
pub const SOUND_RENDER_DEF: u32 = 0x0000_0100;

/// Legacy wrapper whose children are always micro chunks.
pub const LEGACY_DATA_WRAPPER: u32 = 0x0315_0809;
