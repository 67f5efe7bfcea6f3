//! Built-in label tables.

use crate::format::ids::{self, ring, sphere};

/// Labels that do not depend on context.
pub(super) const GLOBAL: &[(u32, &str)] = &[
    (ids::MESH, "W3D_CHUNK_MESH"),
    (ids::MESH_HEADER, "W3D_CHUNK_MESH_HEADER"),
    (ids::VERTICES, "W3D_CHUNK_VERTICES"),
    (ids::VERTEX_NORMALS, "W3D_CHUNK_VERTEX_NORMALS"),
    (ids::SURRENDER_NORMALS, "W3D_CHUNK_SURRENDER_NORMALS"),
    (ids::TEXCOORDS, "W3D_CHUNK_TEXCOORDS"),
    (ids::O_MATERIALS, "O_W3D_CHUNK_MATERIALS"),
    (ids::O_TRIANGLES, "O_W3D_CHUNK_TRIANGLES"),
    (ids::O_QUADRANGLES, "O_W3D_CHUNK_QUADRANGLES"),
    (ids::O_SURRENDER_TRIANGLES, "O_W3D_CHUNK_SURRENDER_TRIANGLES"),
    (ids::O_POV_TRIANGLES, "O_W3D_CHUNK_POV_TRIANGLES"),
    (ids::O_POV_QUADRANGLES, "O_W3D_CHUNK_POV_QUADRANGLES"),
    (ids::MESH_USER_TEXT, "W3D_CHUNK_MESH_USER_TEXT"),
    (ids::VERTEX_COLORS, "W3D_CHUNK_VERTEX_COLORS"),
    (ids::VERTEX_INFLUENCES, "W3D_CHUNK_VERTEX_INFLUENCES"),
    (ids::DAMAGE, "W3D_CHUNK_DAMAGE"),
    (ids::DAMAGE_HEADER, "W3D_CHUNK_DAMAGE_HEADER"),
    (ids::DAMAGE_VERTICES, "W3D_CHUNK_DAMAGE_VERTICES"),
    (ids::DAMAGE_COLORS, "W3D_CHUNK_DAMAGE_COLORS"),
    (ids::DAMAGE_MATERIALS, "W3D_CHUNK_DAMAGE_MATERIALS"),
    (ids::O_MATERIALS2, "O_W3D_CHUNK_MATERIALS2"),
    (ids::MATERIALS3, "W3D_CHUNK_MATERIALS3"),
    (ids::MATERIAL3, "W3D_CHUNK_MATERIAL3"),
    (ids::MATERIAL3_NAME, "W3D_CHUNK_MATERIAL3_NAME"),
    (ids::MATERIAL3_INFO, "W3D_CHUNK_MATERIAL3_INFO"),
    (ids::MATERIAL3_DC_MAP, "W3D_CHUNK_MATERIAL3_DC_MAP"),
    (ids::MAP3_FILENAME, "W3D_CHUNK_MAP3_FILENAME"),
    (ids::MAP3_INFO, "W3D_CHUNK_MAP3_INFO"),
    (ids::MATERIAL3_DI_MAP, "W3D_CHUNK_MATERIAL3_DI_MAP"),
    (ids::MATERIAL3_SC_MAP, "W3D_CHUNK_MATERIAL3_SC_MAP"),
    (ids::MATERIAL3_SI_MAP, "W3D_CHUNK_MATERIAL3_SI_MAP"),
    (ids::MESH_HEADER3, "W3D_CHUNK_MESH_HEADER3"),
    (ids::TRIANGLES, "W3D_CHUNK_TRIANGLES"),
    (ids::PER_TRI_MATERIALS, "W3D_CHUNK_PER_TRI_MATERIALS"),
    (ids::VERTEX_SHADE_INDICES, "W3D_CHUNK_VERTEX_SHADE_INDICES"),
    (ids::PRELIT_UNLIT, "W3D_CHUNK_PRELIT_UNLIT"),
    (ids::PRELIT_VERTEX, "W3D_CHUNK_PRELIT_VERTEX"),
    (ids::PRELIT_LIGHTMAP_MULTI_PASS, "W3D_CHUNK_PRELIT_LIGHTMAP_MULTI_PASS"),
    (ids::PRELIT_LIGHTMAP_MULTI_TEXTURE, "W3D_CHUNK_PRELIT_LIGHTMAP_MULTI_TEXTURE"),
    (ids::MATERIAL_INFO, "W3D_CHUNK_MATERIAL_INFO"),
    (ids::SHADERS, "W3D_CHUNK_SHADERS"),
    (ids::VERTEX_MATERIALS, "W3D_CHUNK_VERTEX_MATERIALS"),
    (ids::VERTEX_MATERIAL, "W3D_CHUNK_VERTEX_MATERIAL"),
    (ids::VERTEX_MATERIAL_NAME, "W3D_CHUNK_VERTEX_MATERIAL_NAME"),
    (ids::VERTEX_MATERIAL_INFO, "W3D_CHUNK_VERTEX_MATERIAL_INFO"),
    (ids::VERTEX_MAPPER_ARGS0, "W3D_CHUNK_VERTEX_MAPPER_ARGS0"),
    (ids::VERTEX_MAPPER_ARGS1, "W3D_CHUNK_VERTEX_MAPPER_ARGS1"),
    (ids::TEXTURES, "W3D_CHUNK_TEXTURES"),
    (ids::TEXTURE, "W3D_CHUNK_TEXTURE"),
    (ids::TEXTURE_NAME, "W3D_CHUNK_TEXTURE_NAME"),
    (ids::TEXTURE_INFO, "W3D_CHUNK_TEXTURE_INFO"),
    (ids::MATERIAL_PASS, "W3D_CHUNK_MATERIAL_PASS"),
    (ids::VERTEX_MATERIAL_IDS, "W3D_CHUNK_VERTEX_MATERIAL_IDS"),
    (ids::SHADER_IDS, "W3D_CHUNK_SHADER_IDS"),
    (ids::DCG, "W3D_CHUNK_DCG"),
    (ids::DIG, "W3D_CHUNK_DIG"),
    (ids::SCG, "W3D_CHUNK_SCG"),
    (ids::SHADER_MATERIAL_ID, "W3D_CHUNK_SHADER_MATERIAL_ID"),
    (ids::TEXTURE_STAGE, "W3D_CHUNK_TEXTURE_STAGE"),
    (ids::TEXTURE_IDS, "W3D_CHUNK_TEXTURE_IDS"),
    (ids::STAGE_TEXCOORDS, "W3D_CHUNK_STAGE_TEXCOORDS"),
    (ids::PER_FACE_TEXCOORD_IDS, "W3D_CHUNK_PER_FACE_TEXCOORD_IDS"),
    (ids::SHADER_MATERIALS, "W3D_CHUNK_SHADER_MATERIALS"),
    (ids::SHADER_MATERIAL, "W3D_CHUNK_SHADER_MATERIAL"),
    (ids::SHADER_MATERIAL_HEADER, "W3D_CHUNK_SHADER_MATERIAL_HEADER"),
    (ids::SHADER_MATERIAL_PROPERTY, "W3D_CHUNK_SHADER_MATERIAL_PROPERTY"),
    (ids::DEFORM, "W3D_CHUNK_DEFORM"),
    (ids::DEFORM_SET, "W3D_CHUNK_DEFORM_SET"),
    (ids::DEFORM_KEYFRAME, "W3D_CHUNK_DEFORM_KEYFRAME"),
    (ids::DEFORM_DATA, "W3D_CHUNK_DEFORM_DATA"),
    (ids::TANGENTS, "W3D_CHUNK_TANGENTS"),
    (ids::BINORMALS, "W3D_CHUNK_BINORMALS"),
    (ids::PS2_SHADERS, "W3D_CHUNK_PS2_SHADERS"),
    (ids::AABTREE, "W3D_CHUNK_AABTREE"),
    (ids::AABTREE_HEADER, "W3D_CHUNK_AABTREE_HEADER"),
    (ids::AABTREE_POLYINDICES, "W3D_CHUNK_AABTREE_POLYINDICES"),
    (ids::AABTREE_NODES, "W3D_CHUNK_AABTREE_NODES"),
    (ids::HIERARCHY, "W3D_CHUNK_HIERARCHY"),
    (ids::HIERARCHY_HEADER, "W3D_CHUNK_HIERARCHY_HEADER"),
    (ids::PIVOTS, "W3D_CHUNK_PIVOTS"),
    (ids::PIVOT_FIXUPS, "W3D_CHUNK_PIVOT_FIXUPS"),
    (ids::ANIMATION, "W3D_CHUNK_ANIMATION"),
    (ids::ANIMATION_HEADER, "W3D_CHUNK_ANIMATION_HEADER"),
    (ids::ANIMATION_CHANNEL, "W3D_CHUNK_ANIMATION_CHANNEL"),
    (ids::BIT_CHANNEL, "W3D_CHUNK_BIT_CHANNEL"),
    (ids::COMPRESSED_ANIMATION, "W3D_CHUNK_COMPRESSED_ANIMATION"),
    (ids::COMPRESSED_ANIMATION_HEADER, "W3D_CHUNK_COMPRESSED_ANIMATION_HEADER"),
    (ids::COMPRESSED_ANIMATION_CHANNEL, "W3D_CHUNK_COMPRESSED_ANIMATION_CHANNEL"),
    (ids::COMPRESSED_BIT_CHANNEL, "W3D_CHUNK_COMPRESSED_BIT_CHANNEL"),
    (ids::COMPRESSED_ANIMATION_MOTION_CHANNEL, "W3D_CHUNK_COMPRESSED_ANIMATION_MOTION_CHANNEL"),
    (ids::MORPH_ANIMATION, "W3D_CHUNK_MORPH_ANIMATION"),
    (ids::MORPHANIM_HEADER, "W3D_CHUNK_MORPHANIM_HEADER"),
    (ids::MORPHANIM_CHANNEL, "W3D_CHUNK_MORPHANIM_CHANNEL"),
    (ids::MORPHANIM_POSENAME, "W3D_CHUNK_MORPHANIM_POSENAME"),
    (ids::MORPHANIM_KEYDATA, "W3D_CHUNK_MORPHANIM_KEYDATA"),
    (ids::MORPHANIM_PIVOTCHANNELDATA, "W3D_CHUNK_MORPHANIM_PIVOTCHANNELDATA"),
    (ids::HMODEL, "W3D_CHUNK_HMODEL"),
    (ids::HMODEL_HEADER, "W3D_CHUNK_HMODEL_HEADER"),
    (ids::NODE, "W3D_CHUNK_NODE"),
    (ids::COLLISION_NODE, "W3D_CHUNK_COLLISION_NODE"),
    (ids::SKIN_NODE, "W3D_CHUNK_SKIN_NODE"),
    (ids::HMODEL_AUX_DATA, "OBSOLETE_W3D_CHUNK_HMODEL_AUX_DATA"),
    (ids::SHADOW_NODE, "OBSOLETE_W3D_CHUNK_SHADOW_NODE"),
    (ids::LODMODEL, "W3D_CHUNK_LODMODEL"),
    (ids::LODMODEL_HEADER, "W3D_CHUNK_LODMODEL_HEADER"),
    (ids::LOD, "W3D_CHUNK_LOD"),
    (ids::COLLECTION, "W3D_CHUNK_COLLECTION"),
    (ids::COLLECTION_HEADER, "W3D_CHUNK_COLLECTION_HEADER"),
    (ids::COLLECTION_OBJ_NAME, "W3D_CHUNK_COLLECTION_OBJ_NAME"),
    (ids::PLACEHOLDER, "W3D_CHUNK_PLACEHOLDER"),
    (ids::TRANSFORM_NODE, "W3D_CHUNK_TRANSFORM_NODE"),
    (ids::POINTS, "W3D_CHUNK_POINTS"),
    (ids::LIGHT, "W3D_CHUNK_LIGHT"),
    (ids::LIGHT_INFO, "W3D_CHUNK_LIGHT_INFO"),
    (ids::SPOT_LIGHT_INFO, "W3D_CHUNK_SPOT_LIGHT_INFO"),
    (ids::NEAR_ATTENUATION, "W3D_CHUNK_NEAR_ATTENUATION"),
    (ids::FAR_ATTENUATION, "W3D_CHUNK_FAR_ATTENUATION"),
    (ids::EMITTER, "W3D_CHUNK_EMITTER"),
    (ids::EMITTER_HEADER, "W3D_CHUNK_EMITTER_HEADER"),
    (ids::EMITTER_USER_DATA, "W3D_CHUNK_EMITTER_USER_DATA"),
    (ids::EMITTER_INFO, "W3D_CHUNK_EMITTER_INFO"),
    (ids::EMITTER_INFOV2, "W3D_CHUNK_EMITTER_INFOV2"),
    (ids::EMITTER_PROPS, "W3D_CHUNK_EMITTER_PROPS"),
    (ids::EMITTER_LINE_PROPERTIES, "W3D_CHUNK_EMITTER_LINE_PROPERTIES"),
    (ids::EMITTER_ROTATION_KEYFRAMES, "W3D_CHUNK_EMITTER_ROTATION_KEYFRAMES"),
    (ids::EMITTER_FRAME_KEYFRAMES, "W3D_CHUNK_EMITTER_FRAME_KEYFRAMES"),
    (ids::EMITTER_BLUR_TIME_KEYFRAMES, "W3D_CHUNK_EMITTER_BLUR_TIME_KEYFRAMES"),
    (ids::AGGREGATE, "W3D_CHUNK_AGGREGATE"),
    (ids::AGGREGATE_HEADER, "W3D_CHUNK_AGGREGATE_HEADER"),
    (ids::AGGREGATE_INFO, "W3D_CHUNK_AGGREGATE_INFO"),
    (ids::TEXTURE_REPLACER_INFO, "W3D_CHUNK_TEXTURE_REPLACER_INFO"),
    (ids::AGGREGATE_CLASS_INFO, "W3D_CHUNK_AGGREGATE_CLASS_INFO"),
    (ids::HLOD, "W3D_CHUNK_HLOD"),
    (ids::HLOD_HEADER, "W3D_CHUNK_HLOD_HEADER"),
    (ids::HLOD_LOD_ARRAY, "W3D_CHUNK_HLOD_LOD_ARRAY"),
    (ids::HLOD_SUB_OBJECT_ARRAY_HEADER, "W3D_CHUNK_HLOD_SUB_OBJECT_ARRAY_HEADER"),
    (ids::HLOD_SUB_OBJECT, "W3D_CHUNK_HLOD_SUB_OBJECT"),
    (ids::HLOD_AGGREGATE_ARRAY, "W3D_CHUNK_HLOD_AGGREGATE_ARRAY"),
    (ids::HLOD_PROXY_ARRAY, "W3D_CHUNK_HLOD_PROXY_ARRAY"),
    (ids::BOX, "W3D_CHUNK_BOX"),
    (ids::SPHERE, "W3D_CHUNK_SPHERE"),
    (ids::RING, "W3D_CHUNK_RING"),
    (ids::NULL_OBJECT, "W3D_CHUNK_NULL_OBJECT"),
    (ids::LIGHTSCAPE, "W3D_CHUNK_LIGHTSCAPE"),
    (ids::LIGHTSCAPE_LIGHT, "W3D_CHUNK_LIGHTSCAPE_LIGHT"),
    (ids::LIGHT_TRANSFORM, "W3D_CHUNK_LIGHT_TRANSFORM"),
    (ids::DAZZLE, "W3D_CHUNK_DAZZLE"),
    (ids::DAZZLE_NAME, "W3D_CHUNK_DAZZLE_NAME"),
    (ids::DAZZLE_TYPENAME, "W3D_CHUNK_DAZZLE_TYPENAME"),
    (ids::SOUNDROBJ, "W3D_CHUNK_SOUNDROBJ"),
    (ids::SOUNDROBJ_HEADER, "W3D_CHUNK_SOUNDROBJ_HEADER"),
    (ids::SOUNDROBJ_DEFINITION, "W3D_CHUNK_SOUNDROBJ_DEFINITION"),
    (ids::SOUNDROBJ_DEFINITION_EXT, "W3D_CHUNK_SOUNDROBJ_DEFINITION_EXT"),
    (ids::SHDMESH, "W3D_CHUNK_SHDMESH"),
    (ids::SHDMESH_NAME, "W3D_CHUNK_SHDMESH_NAME"),
    (ids::SHDMESH_HEADER, "W3D_CHUNK_SHDMESH_HEADER"),
    (ids::SHDMESH_USER_TEXT, "W3D_CHUNK_SHDMESH_USER_TEXT"),
    (ids::SHDSUBMESH, "W3D_CHUNK_SHDSUBMESH"),
    (ids::LEGACY_DATA_WRAPPER, "W3D_CHUNK_LEGACY_DATA"),
];

/// Labels of ids nested under a specific parent, keyed by `(parent, id)`.
pub(super) const CONTEXTUAL: &[((u32, u32), &str)] = &[
    ((ids::SPHERE, sphere::DEF), "W3D_CHUNK_SPHERE_DEF"),
    ((ids::SPHERE, sphere::COLOR_CHANNEL), "W3D_CHUNK_SPHERE_COLOR_CHANNEL"),
    ((ids::SPHERE, sphere::ALPHA_CHANNEL), "W3D_CHUNK_SPHERE_ALPHA_CHANNEL"),
    ((ids::SPHERE, sphere::SCALE_CHANNEL), "W3D_CHUNK_SPHERE_SCALE_CHANNEL"),
    ((ids::SPHERE, sphere::VECTOR_CHANNEL), "W3D_CHUNK_SPHERE_VECTOR_CHANNEL"),
    ((ids::RING, ring::DEF), "W3D_CHUNK_RING_DEF"),
    ((ids::RING, ring::COLOR_CHANNEL), "W3D_CHUNK_RING_COLOR_CHANNEL"),
    ((ids::RING, ring::ALPHA_CHANNEL), "W3D_CHUNK_RING_ALPHA_CHANNEL"),
    ((ids::RING, ring::INNER_SCALE_CHANNEL), "W3D_CHUNK_RING_INNER_SCALE_CHANNEL"),
    ((ids::RING, ring::OUTER_SCALE_CHANNEL), "W3D_CHUNK_RING_OUTER_SCALE_CHANNEL"),
    ((ids::MESH, ids::MESH_HEADER), "W3D_CHUNK_MESH_HEADER (legacy)"),
    ((ids::SOUNDROBJ_DEFINITION, ids::SOUND_RENDER_DEF), "W3D_CHUNK_SOUND_RENDER_DEF"),
    ((ids::SOUNDROBJ_DEFINITION_EXT, ids::SOUND_RENDER_DEF), "W3D_CHUNK_SOUND_RENDER_DEF_EXT"),
];

/// Definition database ids. These files reuse small numbers for their own
/// record types, so none of the asset labels apply.
pub(super) const DEFINITION_DB: &[(u32, &str)] = &[
    (0x0000_0001, "DDB_VARIABLES"),
    (0x0000_0100, "DDB_DEFINITIONS"),
    (0x0000_0101, "DDB_DEFINITION"),
    (0x0000_0102, "DDB_DEFINITION_VARIABLES"),
    (0x0000_0200, "DDB_FACTORIES"),
    (0x0000_0300, "DDB_PRESETS"),
    (0x0000_0400, "DDB_TWIDDLERS"),
];
