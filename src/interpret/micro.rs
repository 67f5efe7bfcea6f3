//! Micro chunks carry no known structure; show what framing tells us.

use super::*;
use crate::util::hex::preview;

/// Bytes shown in the data preview.
const PREVIEW: usize = 16;

pub(super) fn interpret(bytes: &[u8], ctx: &ChunkContext) -> Fields {
    let mut out = FieldList::new();
    out.u32("Index", ctx.sibling_index as u32);
    out.u32("Length", bytes.len() as u32);
    out.push("Data", "hex", preview(bytes, PREVIEW));
    if let Some(text) = printable(bytes) {
        out.string("Text", text);
    }
    out.finish()
}

/// The payload as text when it is a NUL-terminated run of printable ASCII.
fn printable(bytes: &[u8]) -> Option<String> {
    let (&last, body) = bytes.split_last()?;
    if last != 0 || body.is_empty() {
        return None;
    }
    body.iter()
        .all(|b| b.is_ascii_graphic() || *b == b' ')
        .then(|| String::from_utf8_lossy(body).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_preview() {
        let ctx = ChunkContext::default();
        let fields = interpret(&[0xDE, 0xAD], &ctx).unwrap();
        assert_eq!(fields[1].value, "2");
        assert_eq!(fields[2].value, "DE AD");
        assert_eq!(fields.len(), 3);

        let fields = interpret(b"tank\0", &ctx).unwrap();
        assert_eq!(fields[3].value, "tank");

        let fields = interpret(&[0u8; 20], &ctx).unwrap();
        assert!(fields[2].value.ends_with("... (20 bytes)"));
        assert!(interpret(&[], &ctx).unwrap().len() == 3);
    }
}
