//! Animation payloads: raw, compressed and morph animation.
//!
//! Channel chunks are a fixed header followed by variable key data; the
//! headers below cover only the fixed part.

use std::io;

use byteorder::ReadBytesExt;

use super::primitives::*;
use super::Overlay;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimHeader {
    pub version: u32,
    pub name: Name16,
    pub hierarchy_name: Name16,
    pub num_frames: u32,
    pub frame_rate: u32,
}

impl Overlay for AnimHeader {
    const SIZE: usize = 44;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            hierarchy_name: Name16::decode(r)?,
            num_frames: get_u32(r)?,
            frame_rate: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        self.hierarchy_name.encode(out);
        put_u32(out, self.num_frames);
        put_u32(out, self.frame_rate);
    }
}

/// Fixed part of `ANIMATION_CHANNEL`; `f32` key data follows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimChannelHeader {
    pub first_frame: u16,
    pub last_frame: u16,
    pub vector_len: u16,
    /// Channel type (X, Y, Z, XR, YR, ZR, Q).
    pub flags: u16,
    pub pivot: u16,
    pub pad: u16,
}

impl Overlay for AnimChannelHeader {
    const SIZE: usize = 12;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            first_frame: get_u16(r)?,
            last_frame: get_u16(r)?,
            vector_len: get_u16(r)?,
            flags: get_u16(r)?,
            pivot: get_u16(r)?,
            pad: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u16(out, self.first_frame);
        put_u16(out, self.last_frame);
        put_u16(out, self.vector_len);
        put_u16(out, self.flags);
        put_u16(out, self.pivot);
        put_u16(out, self.pad);
    }
}

/// Fixed part of `BIT_CHANNEL`; packed bits follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitChannelHeader {
    pub first_frame: u16,
    pub last_frame: u16,
    pub flags: u16,
    pub pivot: u16,
    pub default_val: u8,
}

impl Overlay for BitChannelHeader {
    const SIZE: usize = 9;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            first_frame: get_u16(r)?,
            last_frame: get_u16(r)?,
            flags: get_u16(r)?,
            pivot: get_u16(r)?,
            default_val: r.read_u8()?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u16(out, self.first_frame);
        put_u16(out, self.last_frame);
        put_u16(out, self.flags);
        put_u16(out, self.pivot);
        put_u8(out, self.default_val);
    }
}

/// Header of a compressed animation. `flavor` selects how the sibling
/// channel chunks are laid out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressedAnimHeader {
    pub version: u32,
    pub name: Name16,
    pub hierarchy_name: Name16,
    pub num_frames: u32,
    pub frame_rate: u16,
    pub flavor: u16,
}

impl CompressedAnimHeader {
    pub const FLAVOR_TIMECODED: u16 = 0;
    pub const FLAVOR_ADAPTIVE_DELTA: u16 = 1;
}

impl Overlay for CompressedAnimHeader {
    const SIZE: usize = 44;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            hierarchy_name: Name16::decode(r)?,
            num_frames: get_u32(r)?,
            frame_rate: get_u16(r)?,
            flavor: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        self.hierarchy_name.encode(out);
        put_u32(out, self.num_frames);
        put_u16(out, self.frame_rate);
        put_u16(out, self.flavor);
    }
}

/// Fixed part of a timecoded compressed channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeCodedChannelHeader {
    pub num_time_codes: u32,
    pub pivot: u16,
    pub vector_len: u8,
    pub flags: u8,
}

impl Overlay for TimeCodedChannelHeader {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            num_time_codes: get_u32(r)?,
            pivot: get_u16(r)?,
            vector_len: r.read_u8()?,
            flags: r.read_u8()?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.num_time_codes);
        put_u16(out, self.pivot);
        put_u8(out, self.vector_len);
        put_u8(out, self.flags);
    }
}

/// Fixed part of an adaptive-delta compressed channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdaptiveDeltaChannelHeader {
    pub num_frames: u32,
    pub pivot: u16,
    pub vector_len: u8,
    pub flags: u8,
    pub scale: f32,
}

impl Overlay for AdaptiveDeltaChannelHeader {
    const SIZE: usize = 12;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            num_frames: get_u32(r)?,
            pivot: get_u16(r)?,
            vector_len: r.read_u8()?,
            flags: r.read_u8()?,
            scale: get_f32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.num_frames);
        put_u16(out, self.pivot);
        put_u8(out, self.vector_len);
        put_u8(out, self.flags);
        put_f32(out, self.scale);
    }
}

/// Fixed part of `COMPRESSED_BIT_CHANNEL`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeCodedBitChannelHeader {
    pub num_time_codes: u32,
    pub pivot: u16,
    pub flags: u8,
    pub default_val: u8,
}

impl Overlay for TimeCodedBitChannelHeader {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            num_time_codes: get_u32(r)?,
            pivot: get_u16(r)?,
            flags: r.read_u8()?,
            default_val: r.read_u8()?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.num_time_codes);
        put_u16(out, self.pivot);
        put_u8(out, self.flags);
        put_u8(out, self.default_val);
    }
}

/// Fixed part of `COMPRESSED_ANIMATION_MOTION_CHANNEL`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MotionChannelHeader {
    pub zero: u8,
    pub flavor: u8,
    pub vector_len: u8,
    pub flags: u8,
    pub num_time_codes: u16,
    pub pivot: u16,
}

impl Overlay for MotionChannelHeader {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            zero: r.read_u8()?,
            flavor: r.read_u8()?,
            vector_len: r.read_u8()?,
            flags: r.read_u8()?,
            num_time_codes: get_u16(r)?,
            pivot: get_u16(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.zero, self.flavor, self.vector_len, self.flags]);
        put_u16(out, self.num_time_codes);
        put_u16(out, self.pivot);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MorphAnimHeader {
    pub version: u32,
    pub name: Name16,
    pub hierarchy_name: Name16,
    pub frame_count: u32,
    pub frame_rate: f32,
    pub channel_count: u32,
}

impl Overlay for MorphAnimHeader {
    const SIZE: usize = 48;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            version: get_u32(r)?,
            name: Name16::decode(r)?,
            hierarchy_name: Name16::decode(r)?,
            frame_count: get_u32(r)?,
            frame_rate: get_f32(r)?,
            channel_count: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.version);
        self.name.encode(out);
        self.hierarchy_name.encode(out);
        put_u32(out, self.frame_count);
        put_f32(out, self.frame_rate);
        put_u32(out, self.channel_count);
    }
}

/// One entry of `MORPHANIM_KEYDATA`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MorphAnimKey {
    pub morph_frame: u32,
    pub pose_frame: u32,
}

impl Overlay for MorphAnimKey {
    const SIZE: usize = 8;

    fn decode(r: &mut &[u8]) -> io::Result<Self> {
        Ok(Self {
            morph_frame: get_u32(r)?,
            pose_frame: get_u32(r)?,
        })
    }

    fn encode(&self, out: &mut Vec<u8>) {
        put_u32(out, self.morph_frame);
        put_u32(out, self.pose_frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_encoding() {
        assert_eq!(AnimHeader::default().to_bytes().len(), AnimHeader::SIZE);
        assert_eq!(AnimChannelHeader::default().to_bytes().len(), AnimChannelHeader::SIZE);
        assert_eq!(BitChannelHeader::default().to_bytes().len(), BitChannelHeader::SIZE);
        assert_eq!(
            CompressedAnimHeader::default().to_bytes().len(),
            CompressedAnimHeader::SIZE
        );
        assert_eq!(
            TimeCodedChannelHeader::default().to_bytes().len(),
            TimeCodedChannelHeader::SIZE
        );
        assert_eq!(
            AdaptiveDeltaChannelHeader::default().to_bytes().len(),
            AdaptiveDeltaChannelHeader::SIZE
        );
        assert_eq!(
            TimeCodedBitChannelHeader::default().to_bytes().len(),
            TimeCodedBitChannelHeader::SIZE
        );
        assert_eq!(MotionChannelHeader::default().to_bytes().len(), MotionChannelHeader::SIZE);
        assert_eq!(MorphAnimHeader::default().to_bytes().len(), MorphAnimHeader::SIZE);
        assert_eq!(MorphAnimKey::default().to_bytes().len(), MorphAnimKey::SIZE);
    }

    #[test]
    fn test_compressed_flavor_is_last_field() {
        let header = CompressedAnimHeader {
            flavor: CompressedAnimHeader::FLAVOR_ADAPTIVE_DELTA,
            frame_rate: 30,
            ..Default::default()
        };
        let bytes = header.to_bytes();
        assert_eq!(&bytes[40..42], &30u16.to_le_bytes());
        assert_eq!(&bytes[42..44], &1u16.to_le_bytes());
    }
}
