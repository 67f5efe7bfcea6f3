//! Animation interpreters.
//!
//! Compressed channels have no flavor of their own; it comes from the
//! `COMPRESSED_ANIMATION_HEADER` among their siblings (see
//! [`ChunkContext::flavor`]).

use super::*;
use crate::format::ids;
use crate::structs::{
    AdaptiveDeltaChannelHeader, AnimChannelHeader, AnimHeader, BitChannelHeader,
    CompressedAnimHeader, MorphAnimHeader, MorphAnimKey, MotionChannelHeader,
    TimeCodedBitChannelHeader, TimeCodedChannelHeader,
};

pub(super) fn register(r: &mut FieldInterpreters) {
    r.register(ids::ANIMATION_HEADER, anim_header);
    r.register(ids::ANIMATION_CHANNEL, anim_channel);
    r.register(ids::BIT_CHANNEL, bit_channel);
    r.register(ids::COMPRESSED_ANIMATION_HEADER, compressed_header);
    r.register(ids::COMPRESSED_ANIMATION_CHANNEL, compressed_channel);
    r.register(ids::COMPRESSED_BIT_CHANNEL, compressed_bit_channel);
    r.register(ids::COMPRESSED_ANIMATION_MOTION_CHANNEL, motion_channel);
    r.register(ids::MORPHANIM_HEADER, morph_header);
    r.register(ids::MORPHANIM_KEYDATA, morph_keys);
    r.register(ids::MORPHANIM_POSENAME, text);
}

fn anim_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: AnimHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.string("Hierarchy Name", h.hierarchy_name.as_string());
    out.u32("Frame Count", h.num_frames);
    out.u32("Frame Rate", h.frame_rate);
    out.finish()
}

/// Channel header followed by `vector_len` floats per frame.
fn anim_channel(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (h, data): (AnimChannelHeader, _) = with_tail(bytes)?;
    let mut out = FieldList::new();
    out.u16("First Frame", h.first_frame);
    out.u16("Last Frame", h.last_frame);
    out.u16("Vector Length", h.vector_len);
    out.enumerated("Channel Type", h.flags.into(), ANIM_CHANNEL_TYPE);
    out.u16("Pivot", h.pivot);
    if data.is_empty() {
        return out.finish();
    }
    let values: Vec<f32> = items(data)?;
    let width = usize::from(h.vector_len);
    if width == 0 || values.len() % width != 0 {
        return Err(format!(
            "{} floats are not whole frames of {}",
            values.len(),
            width
        ));
    }
    let frames = usize::from(h.last_frame.saturating_sub(h.first_frame)) + 1;
    if values.len() / width != frames {
        return Err(format!(
            "frames {}..={} need {} rows, have {}",
            h.first_frame,
            h.last_frame,
            frames,
            values.len() / width
        ));
    }
    for (frame, row) in values.chunks_exact(width).enumerate() {
        let text = row.iter().map(f32::to_string).collect::<Vec<_>>().join(", ");
        out.push(format!("Frame[{}]", frame), "float[]", text);
    }
    out.finish()
}

/// Header followed by one bit per frame, LSB first.
fn bit_channel(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (h, bits): (BitChannelHeader, _) = with_tail(bytes)?;
    let frames = usize::from(h.last_frame.saturating_sub(h.first_frame)) + 1;
    if bits.len() * 8 < frames {
        return Err(format!(
            "{} frames need {} bytes of bits, have {}",
            frames,
            frames.div_ceil(8),
            bits.len()
        ));
    }
    let mut out = FieldList::new();
    out.u16("First Frame", h.first_frame);
    out.u16("Last Frame", h.last_frame);
    out.enumerated("Channel Type", h.flags.into(), BIT_CHANNEL_TYPE);
    out.u16("Pivot", h.pivot);
    out.flag("Default Value", h.default_val != 0);
    let visible: String = (0..frames)
        .map(|i| if bits[i / 8] & (1 << (i % 8)) != 0 { '1' } else { '0' })
        .collect();
    out.push("Bits", "bits", visible);
    out.finish()
}

fn compressed_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: CompressedAnimHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.string("Hierarchy Name", h.hierarchy_name.as_string());
    out.u32("Frame Count", h.num_frames);
    out.u16("Frame Rate", h.frame_rate);
    out.enumerated("Flavor", h.flavor.into(), COMPRESSED_FLAVOR);
    out.finish()
}

fn compressed_channel(bytes: &[u8], ctx: &ChunkContext) -> Fields {
    match ctx.flavor {
        Some(CompressedAnimHeader::FLAVOR_TIMECODED) => timecoded_channel(bytes),
        Some(CompressedAnimHeader::FLAVOR_ADAPTIVE_DELTA) => adaptive_delta_channel(bytes),
        Some(other) => Err(format!("unknown compressed animation flavor {}", other)),
        None => Err("no compressed animation header among siblings".into()),
    }
}

/// Time codes then values, all 32-bit words.
fn timecoded_channel(bytes: &[u8]) -> Fields {
    let (h, data): (TimeCodedChannelHeader, _) = with_tail(bytes)?;
    if data.len() % 4 != 0 {
        return Err(format!("{} data bytes are not whole words", data.len()));
    }
    let mut out = FieldList::new();
    out.push("Flavor", "enum", "Timecoded");
    out.u32("Time Code Count", h.num_time_codes);
    out.u16("Pivot", h.pivot);
    out.u8("Vector Length", h.vector_len);
    out.enumerated("Channel Type", h.flags.into(), TIMECODED_CHANNEL_TYPE);
    out.u32("Data Words", (data.len() / 4) as u32);
    out.finish()
}

fn adaptive_delta_channel(bytes: &[u8]) -> Fields {
    let (h, data): (AdaptiveDeltaChannelHeader, _) = with_tail(bytes)?;
    let mut out = FieldList::new();
    out.push("Flavor", "enum", "Adaptive Delta");
    out.u32("Frame Count", h.num_frames);
    out.u16("Pivot", h.pivot);
    out.u8("Vector Length", h.vector_len);
    out.enumerated("Channel Type", h.flags.into(), TIMECODED_CHANNEL_TYPE);
    out.f32("Scale", h.scale);
    out.u32("Data Bytes", data.len() as u32);
    out.finish()
}

fn compressed_bit_channel(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (h, data): (TimeCodedBitChannelHeader, _) = with_tail(bytes)?;
    let codes: Vec<u32> = if data.is_empty() { Vec::new() } else { items(data)? };
    let mut out = FieldList::new();
    out.u32("Time Code Count", h.num_time_codes);
    out.u16("Pivot", h.pivot);
    out.enumerated("Channel Type", h.flags.into(), BIT_CHANNEL_TYPE);
    out.flag("Default Value", h.default_val != 0);
    for (i, code) in codes.into_iter().enumerate() {
        // High bit carries the state, the rest is the frame
        out.push(
            format!("Key[{}]", i),
            "timecode",
            format!("frame {} = {}", code & 0x7FFF_FFFF, code >> 31),
        );
    }
    out.finish()
}

fn motion_channel(bytes: &[u8], _: &ChunkContext) -> Fields {
    let (h, data): (MotionChannelHeader, _) = with_tail(bytes)?;
    let mut out = FieldList::new();
    out.enumerated("Flavor", h.flavor.into(), MOTION_FLAVOR);
    out.u8("Vector Length", h.vector_len);
    out.enumerated("Channel Type", h.flags.into(), TIMECODED_CHANNEL_TYPE);
    out.u16("Time Code Count", h.num_time_codes);
    out.u16("Pivot", h.pivot);
    out.u32("Data Bytes", data.len() as u32);
    out.finish()
}

fn morph_header(bytes: &[u8], _: &ChunkContext) -> Fields {
    let h: MorphAnimHeader = overlay(bytes)?;
    let mut out = FieldList::new();
    out.version("Version", h.version);
    out.string("Name", h.name.as_string());
    out.string("Hierarchy Name", h.hierarchy_name.as_string());
    out.u32("Frame Count", h.frame_count);
    out.f32("Frame Rate", h.frame_rate);
    out.u32("Channel Count", h.channel_count);
    out.finish()
}

fn morph_keys(bytes: &[u8], _: &ChunkContext) -> Fields {
    let keys: Vec<MorphAnimKey> = items(bytes)?;
    let mut out = FieldList::new();
    for (i, k) in keys.into_iter().enumerate() {
        out.push(
            format!("Key[{}]", i),
            "morph key",
            format!("frame {} -> pose {}", k.morph_frame, k.pose_frame),
        );
    }
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(fields: &'a [Field], name: &str) -> &'a str {
        &fields.iter().find(|f| f.name == name).unwrap().value
    }

    fn ctx_with_flavor(flavor: Option<u16>) -> ChunkContext {
        ChunkContext {
            parent_id: Some(ids::COMPRESSED_ANIMATION),
            flavor,
            ..Default::default()
        }
    }

    #[test]
    fn test_channel_frames() {
        let h = AnimChannelHeader {
            first_frame: 0,
            last_frame: 1,
            vector_len: 1,
            flags: 6,
            ..Default::default()
        };
        let mut bytes = h.to_bytes();
        bytes.extend(0.5f32.to_le_bytes());
        bytes.extend(1.0f32.to_le_bytes());
        let fields = anim_channel(&bytes, &ChunkContext::default()).unwrap();
        assert_eq!(value(&fields, "Channel Type"), "Q");
        assert_eq!(value(&fields, "Frame[1]"), "1");

        bytes.push(0);
        assert!(anim_channel(&bytes, &ChunkContext::default()).is_err());
    }

    #[test]
    fn test_channel_rejects_partial_and_missing_frames() {
        let h = AnimChannelHeader {
            first_frame: 0,
            last_frame: 1,
            vector_len: 3,
            ..Default::default()
        };
        let with_floats = |values: &[f32]| {
            let mut bytes = h.to_bytes();
            for v in values {
                bytes.extend(v.to_le_bytes());
            }
            bytes
        };
        let ctx = ChunkContext::default();

        // Last row would hold one float of three
        assert!(anim_channel(&with_floats(&[1.0, 2.0, 3.0, 4.0]), &ctx).is_err());
        // Whole rows, but one frame short of 0..=1
        assert!(anim_channel(&with_floats(&[1.0, 2.0, 3.0]), &ctx).is_err());

        let fields = anim_channel(&with_floats(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), &ctx).unwrap();
        assert_eq!(value(&fields, "Frame[0]"), "1, 2, 3");
        assert_eq!(value(&fields, "Frame[1]"), "4, 5, 6");
    }

    #[test]
    fn test_bit_channel_needs_enough_bits() {
        let h = BitChannelHeader {
            first_frame: 0,
            last_frame: 9,
            ..Default::default()
        };
        let mut bytes = h.to_bytes();
        bytes.push(0b0000_0101);
        assert!(bit_channel(&bytes, &ChunkContext::default()).is_err());
        bytes.push(0b10);
        let fields = bit_channel(&bytes, &ChunkContext::default()).unwrap();
        assert_eq!(value(&fields, "Bits"), "1010000001");
    }

    #[test]
    fn test_compressed_channel_follows_sibling_flavor() {
        let h = AdaptiveDeltaChannelHeader {
            num_frames: 30,
            vector_len: 4,
            flags: 3,
            scale: 0.25,
            ..Default::default()
        };
        let bytes = h.to_bytes();

        let fields = compressed_channel(&bytes, &ctx_with_flavor(Some(1))).unwrap();
        assert_eq!(value(&fields, "Flavor"), "Adaptive Delta");
        assert_eq!(value(&fields, "Scale"), "0.25");
        assert_eq!(value(&fields, "Channel Type"), "Q");

        let fields = compressed_channel(&bytes, &ctx_with_flavor(Some(0))).unwrap();
        assert_eq!(value(&fields, "Flavor"), "Timecoded");
        assert_eq!(value(&fields, "Time Code Count"), "30");

        assert!(compressed_channel(&bytes, &ctx_with_flavor(None)).is_err());
        assert!(compressed_channel(&bytes, &ctx_with_flavor(Some(7))).is_err());
    }
}
