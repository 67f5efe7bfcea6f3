//! Building blocks shared by the payload overlays.

use std::fmt;
use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use glam::{Quat, Vec2, Vec3};

use super::Overlay;

// ============================================================================
// Field helpers
// ============================================================================

#[inline]
pub(crate) fn put_u8(out: &mut Vec<u8>, v: u8) {
    out.push(v);
}

#[inline]
pub(crate) fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub(crate) fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub(crate) fn put_i32(out: &mut Vec<u8>, v: i32) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub(crate) fn put_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

#[inline]
pub(crate) fn get_u16(r: &mut &[u8]) -> io::Result<u16> {
    r.read_u16::<LittleEndian>()
}

#[inline]
pub(crate) fn get_u32(r: &mut &[u8]) -> io::Result<u32> {
    r.read_u32::<LittleEndian>()
}

#[inline]
pub(crate) fn get_i32(r: &mut &[u8]) -> io::Result<i32> {
    r.read_i32::<LittleEndian>()
}

#[inline]
pub(crate) fn get_f32(r: &mut &[u8]) -> io::Result<f32> {
    r.read_f32::<LittleEndian>()
}

pub(crate) fn get_u32_array<const N: usize>(r: &mut &[u8]) -> io::Result<[u32; N]> {
    let mut values = [0u32; N];
    for v in values.iter_mut() {
        *v = get_u32(r)?;
    }
    Ok(values)
}

pub(crate) fn put_u32_array(out: &mut Vec<u8>, values: &[u32]) {
    for v in values {
        put_u32(out, *v);
    }
}

pub(crate) fn get_f32_array<const N: usize>(r: &mut &[u8]) -> io::Result<[f32; N]> {
    let mut values = [0f32; N];
    for v in values.iter_mut() {
        *v = get_f32(r)?;
    }
    Ok(values)
}

pub(crate) fn put_f32_array(out: &mut Vec<u8>, values: &[f32]) {
    for v in values {
        put_f32(out, *v);
    }
}

pub(crate) fn get_vec2(r: &mut &[u8]) -> io::Result<Vec2> {
    Ok(Vec2::new(get_f32(r)?, get_f32(r)?))
}

pub(crate) fn put_vec2(out: &mut Vec<u8>, v: Vec2) {
    put_f32(out, v.x);
    put_f32(out, v.y);
}

pub(crate) fn get_vec3(r: &mut &[u8]) -> io::Result<Vec3> {
    Ok(Vec3::new(get_f32(r)?, get_f32(r)?, get_f32(r)?))
}

pub(crate) fn put_vec3(out: &mut Vec<u8>, v: Vec3) {
    put_f32(out, v.x);
    put_f32(out, v.y);
    put_f32(out, v.z);
}

pub(crate) fn get_quat(r: &mut &[u8]) -> io::Result<Quat> {
    Ok(Quat::from_xyzw(get_f32(r)?, get_f32(r)?, get_f32(r)?, get_f32(r)?))
}

pub(crate) fn put_quat(out: &mut Vec<u8>, q: Quat) {
    put_f32(out, q.x);
    put_f32(out, q.y);
    put_f32(out, q.z);
    put_f32(out, q.w);
}

// ============================================================================
// Scalar and vector overlays (used for plain arrays)
// ============================================================================

impl Overlay for u32 {
    const SIZE: usize = 4;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_u32(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, *self);
    }
}

impl Overlay for u16 {
    const SIZE: usize = 2;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_u16(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_u16(out, *self);
    }
}

impl Overlay for f32 {
    const SIZE: usize = 4;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_f32(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_f32(out, *self);
    }
}

impl Overlay for Vec2 {
    const SIZE: usize = 8;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_vec2(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_vec2(out, *self);
    }
}

impl Overlay for Vec3 {
    const SIZE: usize = 12;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_vec3(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_vec3(out, *self);
    }
}

impl Overlay for Quat {
    const SIZE: usize = 16;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        get_quat(r)
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_quat(out, *self);
    }
}

// ============================================================================
// Colors
// ============================================================================

/// 8-bit RGB color with a padding byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub pad: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, pad: 0 }
    }
}

impl Overlay for Rgb {
    const SIZE: usize = 4;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            r: r.read_u8()?,
            g: r.read_u8()?,
            b: r.read_u8()?,
            pad: r.read_u8()?,
        })
    }
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.r, self.g, self.b, self.pad]);
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Overlay for Rgba {
    const SIZE: usize = 4;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            r: r.read_u8()?,
            g: r.read_u8()?,
            b: r.read_u8()?,
            a: r.read_u8()?,
        })
    }
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.r, self.g, self.b, self.a]);
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// ============================================================================
// Fixed-length names
// ============================================================================

/// Character buffer of `N` bytes holding a NUL-terminated name.
///
/// The raw bytes are kept, including anything after the terminator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedName<const N: usize>(pub [u8; N]);

/// 16-byte name field.
pub type Name16 = FixedName<16>;
/// 32-byte name field.
pub type Name32 = FixedName<32>;

impl<const N: usize> FixedName<N> {
    /// Name from `text`, truncated to `N` bytes and zero-filled.
    pub fn new(text: &str) -> Self {
        let mut buf = [0u8; N];
        let len = text.len().min(N);
        buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self(buf)
    }

    /// Text up to the first NUL, or the whole buffer if there is none.
    pub fn as_string(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }

    #[inline]
    pub fn bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub(crate) fn decode(r: &mut &[u8]) -> io::Result<Self> {
        let mut buf = [0u8; N];
        r.read_exact(&mut buf)?;
        Ok(Self(buf))
    }

    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.0);
    }
}

impl<const N: usize> Default for FixedName<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> fmt::Debug for FixedName<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_string())
    }
}

impl<const N: usize> fmt::Display for FixedName<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Text of a NUL-terminated string payload, up to the first NUL.
pub fn payload_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

// ============================================================================
// Matrices
// ============================================================================

/// Row-major 4x3 transform (rotation rows plus translation row).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3x4 {
    pub m: [f32; 12],
}

impl Overlay for Matrix3x4 {
    const SIZE: usize = 48;
    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self { m: get_f32_array(r)? })
    }
    fn encode(&self, out: &mut Vec<u8>) {
        put_f32_array(out, &self.m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_name_stops_at_nul() {
        let mut raw = [0u8; 16];
        raw[..3].copy_from_slice(b"Box");
        raw[4..8].copy_from_slice(b"junk");
        let name = Name16::from_bytes_raw(raw);
        assert_eq!(name.as_string(), "Box");
        // Garbage after the terminator survives re-encoding
        let mut out = Vec::new();
        name.encode(&mut out);
        assert_eq!(&out[4..8], b"junk");
    }

    #[test]
    fn test_fixed_name_without_terminator() {
        let name = Name16::new("ABCDEFGHIJKLMNOPQRST");
        assert_eq!(name.as_string(), "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn test_payload_string() {
        assert_eq!(payload_string(b"tex.tga\0\x01\x02"), "tex.tga");
        assert_eq!(payload_string(b"no_nul"), "no_nul");
        assert_eq!(payload_string(b""), "");
    }

    #[test]
    fn test_rgb_roundtrip_keeps_pad() {
        let bytes = [1u8, 2, 3, 0xEE];
        let c = Rgb::from_bytes(&bytes).unwrap();
        assert_eq!(c.pad, 0xEE);
        assert_eq!(c.to_bytes(), bytes);
    }

    #[test]
    fn test_vec3_le() {
        let v = Vec3::from_bytes(&[0, 0, 0x80, 0x3F, 0, 0, 0, 0x40, 0, 0, 0x40, 0x40]).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    impl<const N: usize> FixedName<N> {
        fn from_bytes_raw(raw: [u8; N]) -> Self {
            Self(raw)
        }
    }
}
