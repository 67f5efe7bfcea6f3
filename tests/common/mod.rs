//! Hand-framed W3D byte streams shared by the integration tests.
//!
//! Everything here is built from raw little-endian bytes, never through the
//! crate's writer, so a round trip compares against an independent encoding.

#![allow(dead_code)]

use w3d::format::ids;

/// Standard chunk with the children bit clear.
pub fn leaf(id: u32, payload: &[u8]) -> Vec<u8> {
    frame(id, payload, false)
}

/// Standard chunk whose payload is the concatenation of `children`.
pub fn wrapper(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    frame(id, &children.concat(), true)
}

/// Standard chunk holding children but with the children bit clear.
pub fn unflagged_wrapper(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    frame(id, &children.concat(), false)
}

pub fn frame(id: u32, payload: &[u8], sub_chunks: bool) -> Vec<u8> {
    let mut length = payload.len() as u32;
    if sub_chunks {
        length |= 0x8000_0000;
    }
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(&id.to_le_bytes());
    out.extend_from_slice(&length.to_le_bytes());
    out.extend_from_slice(payload);
    out
}

/// One-byte id, one-byte length.
pub fn micro(id: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![id, payload.len() as u8];
    out.extend_from_slice(payload);
    out
}

/// NUL-terminated string payload.
pub fn cstr(text: &str) -> Vec<u8> {
    let mut out = text.as_bytes().to_vec();
    out.push(0);
    out
}

/// Fixed-width name field, NUL padded.
pub fn name<const N: usize>(text: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let n = text.len().min(N - 1);
    out[..n].copy_from_slice(&text.as_bytes()[..n]);
    out
}

fn floats(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

// ============================================================================
// Fixtures
// ============================================================================

/// A triangle mesh: header, vertices, normals, triangles, user text, a
/// vertex material and a texture.
pub fn mesh() -> Vec<u8> {
    let mut header = Vec::new();
    header.extend_from_slice(&words(&[0x0004_0002, 0]));
    header.extend_from_slice(&name::<16>("TRI"));
    header.extend_from_slice(&name::<16>("TANK"));
    header.extend_from_slice(&words(&[1, 3, 1, 0])); // tris, verts, materials, damage
    header.extend_from_slice(&0i32.to_le_bytes()); // sort level
    header.extend_from_slice(&words(&[0, 0, 1, 0])); // prelit, future, vertex ch, face ch
    header.extend_from_slice(&floats(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0])); // min, max
    header.extend_from_slice(&floats(&[0.5, 0.5, 0.0, 0.75])); // sphere
    assert_eq!(header.len(), 116);

    let vertices = floats(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    let normals = floats(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);

    let mut triangle = words(&[0, 1, 2, 13]); // indices, surface type
    triangle.extend_from_slice(&floats(&[0.0, 0.0, 1.0, 0.0])); // normal, distance
    assert_eq!(triangle.len(), 32);

    let material_info = words(&[1, 1, 1, 0]); // passes, vertex materials, shaders, textures

    let mut vertex_material = words(&[0]);
    vertex_material.extend_from_slice(&[255, 255, 255, 0]); // ambient
    vertex_material.extend_from_slice(&[200, 200, 200, 0]); // diffuse
    vertex_material.extend_from_slice(&[0, 0, 0, 0]); // specular
    vertex_material.extend_from_slice(&[0, 0, 0, 0]); // emissive
    vertex_material.extend_from_slice(&floats(&[1.0, 1.0, 0.0])); // shininess, opacity, translucency
    assert_eq!(vertex_material.len(), 32);

    wrapper(
        ids::MESH,
        &[
            leaf(ids::MESH_HEADER3, &header),
            leaf(ids::MESH_USER_TEXT, &cstr("exported by hand")),
            leaf(ids::VERTICES, &vertices),
            leaf(ids::VERTEX_NORMALS, &normals),
            leaf(ids::TRIANGLES, &triangle),
            leaf(ids::VERTEX_SHADE_INDICES, &words(&[0, 1, 2])),
            leaf(ids::MATERIAL_INFO, &material_info),
            wrapper(
                ids::VERTEX_MATERIALS,
                &[wrapper(
                    ids::VERTEX_MATERIAL,
                    &[
                        leaf(ids::VERTEX_MATERIAL_NAME, &cstr("Mat")),
                        leaf(ids::VERTEX_MATERIAL_INFO, &vertex_material),
                    ],
                )],
            ),
            wrapper(
                ids::TEXTURES,
                &[wrapper(ids::TEXTURE, &[leaf(ids::TEXTURE_NAME, &cstr("tank.tga"))])],
            ),
        ],
    )
}

/// Hierarchy with a root pivot and one child pivot.
pub fn hierarchy() -> Vec<u8> {
    let mut header = words(&[0x0004_0001]);
    header.extend_from_slice(&name::<16>("TANK"));
    header.extend_from_slice(&words(&[2]));
    header.extend_from_slice(&floats(&[0.0, 0.0, 0.0]));
    assert_eq!(header.len(), 36);

    let pivot = |label: &str, parent: u32| {
        let mut p = name::<16>(label).to_vec();
        p.extend_from_slice(&parent.to_le_bytes());
        p.extend_from_slice(&floats(&[1.0, 2.0, 3.0])); // translation
        p.extend_from_slice(&floats(&[0.0, 0.0, 0.0])); // euler
        p.extend_from_slice(&floats(&[0.0, 0.0, 0.0, 1.0])); // rotation
        p
    };
    let mut pivots = pivot("ROOTTRANSFORM", u32::MAX);
    pivots.extend(pivot("TURRET", 0));
    assert_eq!(pivots.len(), 120);

    wrapper(
        ids::HIERARCHY,
        &[leaf(ids::HIERARCHY_HEADER, &header), leaf(ids::PIVOTS, &pivots)],
    )
}

/// Uncompressed animation with one float channel and one bit channel.
pub fn animation() -> Vec<u8> {
    let mut header = words(&[0x0004_0001]);
    header.extend_from_slice(&name::<16>("IDLE"));
    header.extend_from_slice(&name::<16>("TANK"));
    header.extend_from_slice(&words(&[4, 15])); // frames, rate
    assert_eq!(header.len(), 44);

    let mut channel = Vec::new();
    channel.extend_from_slice(&0u16.to_le_bytes()); // first frame
    channel.extend_from_slice(&3u16.to_le_bytes()); // last frame
    channel.extend_from_slice(&1u16.to_le_bytes()); // vector len
    channel.extend_from_slice(&0u16.to_le_bytes()); // flags
    channel.extend_from_slice(&1u16.to_le_bytes()); // pivot
    channel.extend_from_slice(&0u16.to_le_bytes()); // pad
    channel.extend_from_slice(&floats(&[0.0, 0.25, 0.5, 1.0]));

    let mut bits = Vec::new();
    bits.extend_from_slice(&0u16.to_le_bytes());
    bits.extend_from_slice(&3u16.to_le_bytes());
    bits.extend_from_slice(&0u16.to_le_bytes()); // flags
    bits.extend_from_slice(&1u16.to_le_bytes()); // pivot
    bits.push(1); // default
    bits.push(0b0000_0101);

    wrapper(
        ids::ANIMATION,
        &[
            leaf(ids::ANIMATION_HEADER, &header),
            leaf(ids::ANIMATION_CHANNEL, &channel),
            leaf(ids::BIT_CHANNEL, &bits),
        ],
    )
}

/// Compressed (timecoded) animation.
pub fn compressed_animation() -> Vec<u8> {
    let mut header = words(&[0x0004_0001]);
    header.extend_from_slice(&name::<16>("RUN"));
    header.extend_from_slice(&name::<16>("TANK"));
    header.extend_from_slice(&words(&[2]));
    header.extend_from_slice(&15u16.to_le_bytes()); // rate
    header.extend_from_slice(&0u16.to_le_bytes()); // flavor: timecoded
    assert_eq!(header.len(), 44);

    let mut channel = words(&[2]); // keys
    channel.extend_from_slice(&1u16.to_le_bytes()); // pivot
    channel.push(1); // vector len
    channel.push(0); // flags
    channel.extend_from_slice(&words(&[0, 0.5f32.to_bits(), 1, 1.0f32.to_bits()]));

    wrapper(
        ids::COMPRESSED_ANIMATION,
        &[
            leaf(ids::COMPRESSED_ANIMATION_HEADER, &header),
            leaf(ids::COMPRESSED_ANIMATION_CHANNEL, &channel),
        ],
    )
}

/// HLOD with one LOD holding one sub-object.
pub fn hlod() -> Vec<u8> {
    let mut header = words(&[0x0001_0000, 1]);
    header.extend_from_slice(&name::<16>("TANK"));
    header.extend_from_slice(&name::<16>("TANK"));
    assert_eq!(header.len(), 40);

    let mut array_header = words(&[1]);
    array_header.extend_from_slice(&0.0f32.to_le_bytes());

    let mut sub_object = words(&[1]);
    sub_object.extend_from_slice(&name::<32>("TANK.TRI"));
    assert_eq!(sub_object.len(), 36);

    wrapper(
        ids::HLOD,
        &[
            leaf(ids::HLOD_HEADER, &header),
            wrapper(
                ids::HLOD_LOD_ARRAY,
                &[
                    leaf(ids::HLOD_SUB_OBJECT_ARRAY_HEADER, &array_header),
                    leaf(ids::HLOD_SUB_OBJECT, &sub_object),
                ],
            ),
        ],
    )
}

/// Sphere primitive: a definition and one key channel.
pub fn sphere() -> Vec<u8> {
    let mut def = vec![0u8; 164];
    def[..4].copy_from_slice(&0x0001_0000u32.to_le_bytes());
    def[8..8 + 32].copy_from_slice(&name::<32>("Shockwave"));

    let mut keys = Vec::new();
    for (frame, v) in [(0u32, 1.0f32), (10, 2.0)] {
        keys.extend_from_slice(&floats(&[v, v, v]));
        keys.extend_from_slice(&frame.to_le_bytes());
    }

    wrapper(
        ids::SPHERE,
        &[
            leaf(ids::sphere::DEF, &def),
            leaf(ids::sphere::COLOR_CHANNEL, &keys),
        ],
    )
}

/// Legacy data wrapper holding micro chunks.
pub fn data_wrapper() -> Vec<u8> {
    wrapper(
        ids::LEGACY_DATA_WRAPPER,
        &[micro(1, &[0xAA, 0xBB]), micro(2, &cstr("boom")), micro(7, &[])],
    )
}

/// Sound render object whose render definition holds micro chunks.
pub fn sound_object() -> Vec<u8> {
    let mut header = words(&[0x0001_0000]);
    header.extend_from_slice(&name::<16>("Engine"));
    header.extend_from_slice(&[0u8; 36]);

    let definition = wrapper(
        ids::SOUNDROBJ_DEFINITION,
        &[wrapper(
            ids::SOUND_RENDER_DEF,
            &[micro(3, &cstr("engine.wav")), micro(4, &words(&[100]))],
        )],
    );
    wrapper(ids::SOUNDROBJ, &[leaf(ids::SOUNDROBJ_HEADER, &header), definition])
}

/// A mesh stored with the children bit clear.
pub fn unflagged_mesh() -> Vec<u8> {
    unflagged_wrapper(
        ids::MESH,
        &[leaf(ids::MESH_USER_TEXT, &cstr("old exporter")), leaf(ids::VERTICES, &[0u8; 12])],
    )
}

/// A leaf of an id nobody knows.
pub fn unknown_leaf() -> Vec<u8> {
    leaf(0xDEAD_BEEF, &[1, 2, 3, 4, 5])
}

/// Every fixture, labeled.
pub fn all() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("mesh", mesh()),
        ("hierarchy", hierarchy()),
        ("animation", animation()),
        ("compressed_animation", compressed_animation()),
        ("hlod", hlod()),
        ("sphere", sphere()),
        ("data_wrapper", data_wrapper()),
        ("sound_object", sound_object()),
        ("unflagged_mesh", unflagged_mesh()),
        ("unknown_leaf", unknown_leaf()),
    ]
}

/// All fixtures back to back, as one file.
pub fn asset() -> Vec<u8> {
    all().into_iter().flat_map(|(_, bytes)| bytes).collect()
}
