//! Lenient field reader for structured `DATA` objects.
//!
//! Every accessor returns a value. A missing key, wrong JSON type or
//! out-of-range number is recorded as a warning and replaced by the type's
//! default, so one bad field never aborts an import.

use std::fmt;

use glam::{Quat, Vec2, Vec3};
use serde_json::Value;

use crate::structs::{FixedName, Rgb, Rgba};

/// Reads typed values out of one chunk's `DATA` object, collecting warnings.
pub struct JsonFields<'a> {
    chunk_id: u32,
    warnings: &'a mut Vec<String>,
}

impl<'a> JsonFields<'a> {
    pub fn new(chunk_id: u32, warnings: &'a mut Vec<String>) -> Self {
        Self { chunk_id, warnings }
    }

    /// Record a problem with `key`.
    pub fn warn(&mut self, key: &str, problem: impl fmt::Display) {
        self.warnings
            .push(format!("chunk 0x{:08X}: DATA.{} {}", self.chunk_id, key, problem));
    }

    /// Member `key` of `obj`, warning when it is absent.
    pub fn field<'v>(&mut self, obj: &'v Value, key: &str) -> Option<&'v Value> {
        let Some(map) = obj.as_object() else {
            self.warn(key, format!("parent is {}, not an object", kind(obj)));
            return None;
        };
        let value = map.get(key);
        if value.is_none() {
            self.warn(key, "is missing; using default");
        }
        value
    }

    fn uint(&mut self, obj: &Value, key: &str, max: u64) -> u64 {
        let Some(v) = self.field(obj, key) else {
            return 0;
        };
        self.uint_value(v, key, max)
    }

    fn uint_value(&mut self, v: &Value, key: &str, max: u64) -> u64 {
        match v.as_u64() {
            Some(n) if n <= max => n,
            Some(n) => {
                self.warn(key, format!("value {} out of range (max {}); using 0", n, max));
                0
            }
            None => {
                self.warn(key, format!("expected unsigned integer, got {}; using 0", kind(v)));
                0
            }
        }
    }

    pub fn u8(&mut self, obj: &Value, key: &str) -> u8 {
        self.uint(obj, key, u8::MAX.into()) as u8
    }

    pub fn u16(&mut self, obj: &Value, key: &str) -> u16 {
        self.uint(obj, key, u16::MAX.into()) as u16
    }

    pub fn u32(&mut self, obj: &Value, key: &str) -> u32 {
        self.uint(obj, key, u32::MAX.into()) as u32
    }

    /// An array element that must be an unsigned 32-bit integer.
    pub fn u32_value(&mut self, v: &Value, what: &str) -> u32 {
        self.uint_value(v, what, u32::MAX.into()) as u32
    }

    pub fn u16_value(&mut self, v: &Value, what: &str) -> u16 {
        self.uint_value(v, what, u16::MAX.into()) as u16
    }

    pub fn i32(&mut self, obj: &Value, key: &str) -> i32 {
        let Some(v) = self.field(obj, key) else {
            return 0;
        };
        match v.as_i64().map(i32::try_from) {
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                self.warn(key, "out of range for int32; using 0");
                0
            }
            None => {
                self.warn(key, format!("expected integer, got {}; using 0", kind(v)));
                0
            }
        }
    }

    pub fn f32(&mut self, obj: &Value, key: &str) -> f32 {
        match self.field(obj, key) {
            Some(v) => self.f32_value(v, key),
            None => 0.0,
        }
    }

    pub fn f32_value(&mut self, v: &Value, what: &str) -> f32 {
        match v.as_f64() {
            Some(n) => n as f32,
            None => {
                self.warn(what, format!("expected number, got {}; using 0", kind(v)));
                0.0
            }
        }
    }

    pub fn string(&mut self, obj: &Value, key: &str) -> String {
        match self.field(obj, key) {
            Some(Value::String(s)) => s.clone(),
            Some(v) => {
                let got = kind(v);
                self.warn(key, format!("expected string, got {}; using \"\"", got));
                String::new()
            }
            None => String::new(),
        }
    }

    /// Fixed-width name field; longer text is truncated with a warning.
    pub fn name<const N: usize>(&mut self, obj: &Value, key: &str) -> FixedName<N> {
        let text = self.string(obj, key);
        if text.len() > N {
            self.warn(key, format!("is {} bytes, truncated to fit {}", text.len(), N));
        }
        FixedName::new(&text)
    }

    /// `N` numbers given as a JSON array.
    pub fn floats<const N: usize>(&mut self, obj: &Value, key: &str) -> [f32; N] {
        match self.field(obj, key) {
            Some(v) => self.float_array(v, key),
            None => [0.0; N],
        }
    }

    pub fn float_array<const N: usize>(&mut self, v: &Value, what: &str) -> [f32; N] {
        let mut out = [0.0; N];
        match v.as_array() {
            Some(items) if items.len() == N => {
                for (slot, item) in out.iter_mut().zip(items) {
                    *slot = self.f32_value(item, what);
                }
            }
            Some(items) => {
                self.warn(what, format!("expected {} numbers, got {}; using zeros", N, items.len()))
            }
            None => self.warn(what, format!("expected array, got {}; using zeros", kind(v))),
        }
        out
    }

    pub fn bytes<const N: usize>(&mut self, obj: &Value, key: &str) -> [u8; N] {
        match self.field(obj, key) {
            Some(v) => self.byte_array(v, key),
            None => [0; N],
        }
    }

    pub fn byte_array<const N: usize>(&mut self, v: &Value, what: &str) -> [u8; N] {
        let mut out = [0u8; N];
        match v.as_array() {
            Some(items) if items.len() == N => {
                for (slot, item) in out.iter_mut().zip(items) {
                    *slot = self.uint_value(item, what, u8::MAX.into()) as u8;
                }
            }
            Some(items) => {
                self.warn(what, format!("expected {} bytes, got {}; using zeros", N, items.len()))
            }
            None => self.warn(what, format!("expected array, got {}; using zeros", kind(v))),
        }
        out
    }

    pub fn vec2(&mut self, obj: &Value, key: &str) -> Vec2 {
        Vec2::from_array(self.floats(obj, key))
    }

    pub fn vec3(&mut self, obj: &Value, key: &str) -> Vec3 {
        Vec3::from_array(self.floats(obj, key))
    }

    /// Quaternion as `[x, y, z, w]`.
    pub fn quat(&mut self, obj: &Value, key: &str) -> Quat {
        Quat::from_array(self.floats(obj, key))
    }

    /// Color as `[r, g, b]`.
    pub fn rgb(&mut self, obj: &Value, key: &str) -> Rgb {
        let [r, g, b] = self.bytes(obj, key);
        Rgb::new(r, g, b)
    }

    pub fn rgba_value(&mut self, v: &Value, what: &str) -> Rgba {
        let [r, g, b, a] = self.byte_array(v, what);
        Rgba { r, g, b, a }
    }
}

/// JSON type name for warnings.
fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_mismatch_warns_and_defaults() {
        let mut warnings = Vec::new();
        let mut f = JsonFields::new(0x1F, &mut warnings);
        let obj = json!({ "A": "seven", "B": 7, "C": 70000, "D": [1, 2] });
        assert_eq!(f.u32(&obj, "A"), 0);
        assert_eq!(f.u32(&obj, "B"), 7);
        assert_eq!(f.u16(&obj, "C"), 0);
        assert_eq!(f.vec3(&obj, "D"), Vec3::ZERO);
        assert_eq!(f.f32(&obj, "MISSING"), 0.0);
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("0x0000001F"));
        assert!(warnings[0].contains("DATA.A"));
    }

    #[test]
    fn test_names_and_colors() {
        let mut warnings = Vec::new();
        let mut f = JsonFields::new(0, &mut warnings);
        let obj = json!({ "N": "TURRET", "C": [255, 0, 16], "X": [1, 2, 3, 300] });
        assert_eq!(f.name::<16>(&obj, "N").as_string(), "TURRET");
        assert_eq!(f.rgb(&obj, "C"), Rgb::new(255, 0, 16));
        let c = f.rgba_value(&obj["X"], "X");
        assert_eq!((c.r, c.a), (1, 0));
        assert_eq!(warnings.len(), 1);
    }
}
