//! Hex helpers for raw payload dumps.

use super::{Error, Result};

/// Encode payload bytes as uppercase hex, the form written to `RAW_DATA_HEX`.
pub fn encode_payload(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Decode a `RAW_DATA_HEX` string (either case) for the chunk `id`.
pub fn decode_payload(id: u32, text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(Error::InvalidHex {
            id,
            reason: format!("odd length {}", text.len()),
        });
    }
    ::hex::decode(text).map_err(|e| Error::InvalidHex {
        id,
        reason: e.to_string(),
    })
}

/// Short preview of a payload for display, e.g. `0A 0B 0C ... (120 bytes)`.
pub fn preview(bytes: &[u8], max: usize) -> String {
    let shown: Vec<String> = bytes.iter().take(max).map(|b| format!("{:02X}", b)).collect();
    if bytes.len() > max {
        format!("{} ... ({} bytes)", shown.join(" "), bytes.len())
    } else {
        shown.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_upper() {
        assert_eq!(encode_payload(&[0xAA, 0x01, 0xff]), "AA01FF");
        assert_eq!(encode_payload(&[]), "");
    }

    #[test]
    fn test_decode_either_case() {
        assert_eq!(decode_payload(1, "aa01FF").unwrap(), vec![0xAA, 0x01, 0xFF]);
    }

    #[test]
    fn test_decode_rejects_odd_and_garbage() {
        assert!(matches!(decode_payload(7, "ABC"), Err(Error::InvalidHex { id: 7, .. })));
        assert!(matches!(decode_payload(7, "ZZ"), Err(Error::InvalidHex { .. })));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview(&[1, 2], 4), "01 02");
        assert_eq!(preview(&[1, 2, 3], 2), "01 02 ... (3 bytes)");
    }
}
