//! [`JsonDecoder`] — recursive-descent JSON decoder producing [`JsonValue`].
//!
//! Works on raw bytes with a cursor; string escape sequences are resolved
//! through serde_json on the slow path only.

use crate::error::JsonError;
use crate::value::JsonValue;

pub struct JsonDecoder {
    data: Vec<u8>,
    x: usize,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonDecoder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            x: 0,
        }
    }

    /// Decode a complete JSON document.
    ///
    /// Anything other than whitespace after the top-level value is an error;
    /// no partial result is returned on failure.
    pub fn decode(&mut self, input: &[u8]) -> Result<JsonValue, JsonError> {
        self.data = input.to_vec();
        self.x = 0;
        let value = self.read_any()?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(JsonError::TrailingData(self.x));
        }
        Ok(value)
    }

    fn read_any(&mut self) -> Result<JsonValue, JsonError> {
        self.skip_whitespace();
        let x = self.x;
        match self.peek() {
            Some(b'"') => Ok(JsonValue::Str(self.read_str()?)),
            Some(b'[') => self.read_arr(),
            Some(b'{') => self.read_obj(),
            Some(b't') => self.read_literal(b"true").map(|_| JsonValue::Bool(true)),
            Some(b'f') => self.read_literal(b"false").map(|_| JsonValue::Bool(false)),
            Some(b'n') => self.read_literal(b"null").map(|_| JsonValue::Null),
            Some(c) if c.is_ascii_digit() || c == b'-' => self.read_num(),
            _ => Err(JsonError::Invalid(x)),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn read_literal(&mut self, lit: &[u8]) -> Result<(), JsonError> {
        let end = self.x + lit.len();
        if end > self.data.len() || &self.data[self.x..end] != lit {
            return Err(JsonError::Invalid(self.x));
        }
        self.x = end;
        Ok(())
    }

    fn read_num(&mut self) -> Result<JsonValue, JsonError> {
        let start = self.x;
        let data = &self.data;
        let len = data.len();
        let mut x = self.x;

        // sign, integer digits, fraction, exponent
        if x < len && data[x] == b'-' {
            x += 1;
        }
        while x < len && data[x].is_ascii_digit() {
            x += 1;
        }
        if x < len && data[x] == b'.' {
            x += 1;
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        if x < len && (data[x] == b'e' || data[x] == b'E') {
            x += 1;
            if x < len && (data[x] == b'+' || data[x] == b'-') {
                x += 1;
            }
            while x < len && data[x].is_ascii_digit() {
                x += 1;
            }
        }
        self.x = x;

        let s = std::str::from_utf8(&data[start..x]).map_err(|_| JsonError::InvalidUtf8)?;
        let n: f64 = s.parse().map_err(|_| JsonError::Invalid(start))?;
        // Literals that overflow f64 cannot be re-encoded, reject them here.
        if !n.is_finite() {
            return Err(JsonError::Invalid(start));
        }
        Ok(JsonValue::Number(n))
    }

    fn read_str(&mut self) -> Result<String, JsonError> {
        if self.peek() != Some(b'"') {
            return Err(JsonError::Invalid(self.x));
        }
        self.x += 1; // opening quote
        let x0 = self.x;
        let x1 = find_ending_quote(&self.data, x0)?;
        let s = decode_json_string(&self.data[x0..x1])?;
        self.x = x1 + 1; // closing quote
        Ok(s)
    }

    fn read_arr(&mut self) -> Result<JsonValue, JsonError> {
        self.x += 1; // '['
        let mut arr = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.x += 1;
            return Ok(JsonValue::Array(arr));
        }
        loop {
            arr.push(self.read_any()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b']') => {
                    self.x += 1;
                    return Ok(JsonValue::Array(arr));
                }
                Some(b',') => self.x += 1,
                _ => return Err(JsonError::Invalid(self.x)),
            }
        }
    }

    fn read_obj(&mut self) -> Result<JsonValue, JsonError> {
        self.x += 1; // '{'
        let mut entries: Vec<(String, JsonValue)> = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            return Ok(JsonValue::Object(entries));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(JsonError::Invalid(self.x));
            }
            let key = self.read_str()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(JsonError::Invalid(self.x));
            }
            self.x += 1;
            let val = self.read_any()?;
            // Duplicate keys: the last occurrence wins, keeping the
            // first occurrence's position.
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, slot)) => *slot = val,
                None => entries.push((key, val)),
            }
            self.skip_whitespace();
            match self.peek() {
                Some(b'}') => {
                    self.x += 1;
                    return Ok(JsonValue::Object(entries));
                }
                Some(b',') => self.x += 1,
                _ => return Err(JsonError::Invalid(self.x)),
            }
        }
    }
}

/// Find the position of the closing `"` of a string token.
///
/// `x` must point to the first byte after the opening quote. Backslash
/// escapes are honored, so `\"` does not terminate the string.
fn find_ending_quote(data: &[u8], mut x: usize) -> Result<usize, JsonError> {
    let len = data.len();
    let mut escaped = false;
    while x < len {
        let ch = data[x];
        if escaped {
            escaped = false;
        } else if ch == b'\\' {
            escaped = true;
        } else if ch == b'"' {
            return Ok(x);
        }
        x += 1;
    }
    Err(JsonError::Invalid(x))
}

/// Decode a JSON string body (between the quotes) handling escape sequences.
fn decode_json_string(bytes: &[u8]) -> Result<String, JsonError> {
    // Fast path: no backslash
    if !bytes.contains(&b'\\') {
        return std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| JsonError::InvalidUtf8);
    }
    // Wrap in quotes and let serde_json resolve the escapes.
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    quoted.extend_from_slice(bytes);
    quoted.push(b'"');
    let s: String = serde_json::from_slice(&quoted)?;
    Ok(s)
}
