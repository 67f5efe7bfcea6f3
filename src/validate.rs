//! Batch round-trip validation.
//!
//! Each file goes through three independent cycles, all compared against
//! the original bytes:
//!
//! - binary: parse, write
//! - hex JSON: parse, export hex-only, print, re-parse text, import, write
//! - structured JSON: the same with structured-preferred export
//!
//! Files are processed one after another through a single document that is
//! cleared before each file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::chunk::W3dDocument;
use crate::format::write_chunks;
use crate::json::{from_json, to_json, JsonMode, SerializerRegistry};
use crate::names::{ChunkNames, FileKind};
use crate::util::{Error, Result};

/// Extensions picked up by [`RoundTripValidator::validate_dir`].
pub const W3D_EXTENSIONS: &[&str] = &["w3d", "wlt", "wht", "wtm", "ddb"];

/// Outcome for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub chunk_count: usize,
    pub binary_ok: bool,
    pub hex_json_ok: bool,
    pub structured_json_ok: bool,
    /// Parse diagnostics, import warnings and mismatch details.
    pub messages: Vec<String>,
}

impl FileReport {
    /// All three cycles reproduced the input.
    pub fn passed(&self) -> bool {
        self.binary_ok && self.hex_json_ok && self.structured_json_ok
    }
}

/// Reusable validator holding the registries and the working document.
#[derive(Debug)]
pub struct RoundTripValidator {
    names: ChunkNames,
    serializers: SerializerRegistry,
    doc: W3dDocument,
}

impl Default for RoundTripValidator {
    fn default() -> Self {
        Self::new(ChunkNames::builtin(), SerializerRegistry::builtin())
    }
}

impl RoundTripValidator {
    pub fn new(names: ChunkNames, serializers: SerializerRegistry) -> Self {
        Self {
            names,
            serializers,
            doc: W3dDocument::new(),
        }
    }

    /// Validate one file image.
    pub fn validate_bytes(&mut self, path: impl Into<PathBuf>, data: &[u8]) -> FileReport {
        let path = path.into();
        let mut report = FileReport {
            path: path.clone(),
            ..Default::default()
        };

        self.doc.clear();
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        if !self.doc.load_from_bytes(data, name) {
            report.messages.push("no chunks read".into());
        }
        self.doc.set_kind(FileKind::from_path(&path));
        report.chunk_count = self.doc.count();
        report.messages.extend(self.doc.diagnostics().iter().cloned());

        report.binary_ok = check("binary", self.doc.to_bytes(), data, &mut report.messages);
        report.hex_json_ok = check(
            "hex JSON",
            self.json_cycle(JsonMode::HexOnly, &mut report.messages),
            data,
            &mut report.messages,
        );
        report.structured_json_ok = check(
            "structured JSON",
            self.json_cycle(JsonMode::StructuredPreferred, &mut report.messages),
            data,
            &mut report.messages,
        );

        self.doc.clear();
        if report.passed() {
            tracing::debug!("{}: ok ({} chunks)", path.display(), report.chunk_count);
        } else {
            tracing::warn!("{}: round trip failed", path.display());
        }
        report
    }

    /// Validate one file on disk.
    pub fn validate_file(&mut self, path: impl AsRef<Path>) -> Result<FileReport> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Ok(self.validate_bytes(path, &data))
    }

    /// Validate every W3D file directly inside `dir`, in name order.
    ///
    /// A file that cannot be read gets a failed report instead of stopping
    /// the batch.
    pub fn validate_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<FileReport>> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::FileNotFound(dir.to_path_buf()),
                _ => Error::Io(e),
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && has_w3d_extension(p))
            .collect();
        files.sort();

        tracing::info!("validating {} files in {}", files.len(), dir.display());
        let reports = files
            .into_iter()
            .map(|path| match self.validate_file(&path) {
                Ok(report) => report,
                Err(e) => FileReport {
                    messages: vec![e.to_string()],
                    path,
                    ..Default::default()
                },
            })
            .collect();
        Ok(reports)
    }

    fn json_cycle(&self, mode: JsonMode, messages: &mut Vec<String>) -> Result<Vec<u8>> {
        let value = to_json(&self.doc, mode, &self.names, &self.serializers);
        let text = serde_json::to_string(&value)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let outcome = from_json(&value, mode, &self.serializers)?;
        messages.extend(outcome.warnings);
        write_chunks(&outcome.chunks)
    }
}

/// Validate one file with the built-in registries.
pub fn validate_file(path: impl AsRef<Path>) -> Result<FileReport> {
    RoundTripValidator::default().validate_file(path)
}

/// Validate a directory with the built-in registries.
pub fn validate_dir(dir: impl AsRef<Path>) -> Result<Vec<FileReport>> {
    RoundTripValidator::default().validate_dir(dir)
}

fn has_w3d_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| W3D_EXTENSIONS.iter().any(|w| ext.eq_ignore_ascii_case(w)))
}

/// Compare a rebuilt image with the original, noting the first difference.
fn check(stage: &str, rebuilt: Result<Vec<u8>>, original: &[u8], messages: &mut Vec<String>) -> bool {
    let rebuilt = match rebuilt {
        Ok(bytes) => bytes,
        Err(e) => {
            messages.push(format!("{}: {}", stage, e));
            return false;
        }
    };
    if rebuilt == original {
        return true;
    }
    let offset = rebuilt
        .iter()
        .zip(original)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| rebuilt.len().min(original.len()));
    messages.push(format!(
        "{}: output differs at byte {} ({} bytes written, {} expected)",
        stage,
        offset,
        rebuilt.len(),
        original.len()
    ));
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Chunk;
    use crate::format::ids;

    fn image() -> Vec<u8> {
        write_chunks(&[
            Chunk::wrapper(
                ids::MESH,
                vec![
                    Chunk::string(ids::MESH_USER_TEXT, "hello"),
                    Chunk::leaf(ids::VERTICES, vec![0u8; 12]),
                ],
            ),
            Chunk::wrapper(ids::LEGACY_DATA_WRAPPER, vec![Chunk::leaf(3, vec![9, 9])]),
        ])
        .unwrap()
    }

    #[test]
    fn test_clean_image_passes() {
        let mut v = RoundTripValidator::default();
        let report = v.validate_bytes("a.w3d", &image());
        assert!(report.passed(), "{:?}", report.messages);
        assert_eq!(report.chunk_count, 5);
        assert!(report.messages.is_empty());
    }

    #[test]
    fn test_trailing_garbage_fails_binary() {
        let mut data = image();
        data.extend_from_slice(&[1, 2, 3]);
        let report = RoundTripValidator::default().validate_bytes("b.w3d", &data);
        assert!(!report.binary_ok);
        assert!(!report.passed());
        assert!(report.messages.iter().any(|m| m.contains("binary")));
    }

    #[test]
    fn test_state_does_not_leak_between_files() {
        let mut v = RoundTripValidator::default();
        let mut bad = image();
        bad.truncate(bad.len() - 1);
        assert!(!v.validate_bytes("bad.w3d", &bad).passed());
        let report = v.validate_bytes("good.w3d", &image());
        assert!(report.passed(), "{:?}", report.messages);
    }

    #[test]
    fn test_first_difference_offset() {
        let mut messages = Vec::new();
        assert!(!check("x", Ok(vec![1, 2, 4]), &[1, 2, 3], &mut messages));
        assert!(messages[0].contains("byte 2"));
        assert!(check("x", Ok(vec![5]), &[5], &mut messages));
    }

    #[test]
    fn test_extension_filter() {
        assert!(has_w3d_extension(Path::new("tank.W3D")));
        assert!(has_w3d_extension(Path::new("objects.ddb")));
        assert!(!has_w3d_extension(Path::new("notes.txt")));
        assert!(!has_w3d_extension(Path::new("w3d")));
    }
}
