//! [`JsonEncoder`] — serializes a [`JsonValue`] tree to UTF-8 JSON text.
//!
//! Compact by default; [`JsonEncoder::with_indent`] switches to a multi-line
//! layout with one key/element per line.

use crate::error::JsonError;
use crate::value::JsonValue;

pub struct JsonEncoder {
    out: Vec<u8>,
    indent: Option<usize>,
    depth: usize,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    /// Compact encoder: no extraneous whitespace.
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            indent: None,
            depth: 0,
        }
    }

    /// Pretty encoder: each nesting level indented by `width` more spaces.
    pub fn with_indent(width: usize) -> Self {
        Self {
            out: Vec::new(),
            indent: Some(width),
            depth: 0,
        }
    }

    pub fn encode(&mut self, value: &JsonValue) -> Result<String, JsonError> {
        self.out.clear();
        self.depth = 0;
        self.write_any(value)?;
        String::from_utf8(std::mem::take(&mut self.out)).map_err(|_| JsonError::InvalidUtf8)
    }

    fn write_any(&mut self, value: &JsonValue) -> Result<(), JsonError> {
        match value {
            JsonValue::Null => self.out.extend_from_slice(b"null"),
            JsonValue::Bool(true) => self.out.extend_from_slice(b"true"),
            JsonValue::Bool(false) => self.out.extend_from_slice(b"false"),
            JsonValue::Number(n) => self.write_number(*n)?,
            JsonValue::Str(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr)?,
            JsonValue::Object(obj) => self.write_obj(obj)?,
        }
        Ok(())
    }

    fn write_number(&mut self, n: f64) -> Result<(), JsonError> {
        if !n.is_finite() {
            return Err(JsonError::UnsupportedNumber(n));
        }
        // Integral doubles render without a fractional part; everything else
        // uses the shortest representation that round-trips.
        let s = if n.fract() == 0.0 && n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            format!("{}", n)
        };
        self.out.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();

        // Fast path: printable ASCII without quotes or backslashes.
        let plain = bytes
            .iter()
            .all(|&b| (32..127).contains(&b) && b != b'"' && b != b'\\');
        if plain {
            self.out.reserve(bytes.len() + 2);
            self.out.push(b'"');
            self.out.extend_from_slice(bytes);
            self.out.push(b'"');
            return;
        }

        // Fall back to serde_json for proper escaping.
        let escaped = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.out.extend_from_slice(escaped.as_bytes());
    }

    fn write_arr(&mut self, arr: &[JsonValue]) -> Result<(), JsonError> {
        if arr.is_empty() {
            self.out.extend_from_slice(b"[]");
            return Ok(());
        }
        self.out.push(b'[');
        self.depth += 1;
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.newline_indent();
            self.write_any(item)?;
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(b']');
        Ok(())
    }

    fn write_obj(&mut self, obj: &[(String, JsonValue)]) -> Result<(), JsonError> {
        if obj.is_empty() {
            self.out.extend_from_slice(b"{}");
            return Ok(());
        }
        self.out.push(b'{');
        self.depth += 1;
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.newline_indent();
            self.write_str(key);
            self.out.push(b':');
            if self.indent.is_some() {
                self.out.push(b' ');
            }
            self.write_any(val)?;
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(b'}');
        Ok(())
    }

    /// In pretty mode, break the line and indent to the current depth.
    /// No-op when compact.
    fn newline_indent(&mut self) {
        if let Some(width) = self.indent {
            self.out.push(b'\n');
            let pad = width * self.depth;
            self.out.reserve(pad);
            for _ in 0..pad {
                self.out.push(b' ');
            }
        }
    }
}
