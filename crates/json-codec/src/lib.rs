//! Minimal JSON tree codec.
//!
//! Decode UTF-8 text into a [`JsonValue`] tree, mutate fields in place with
//! [`JsonValue::get`] / [`JsonValue::set`], and encode back to text either
//! compactly or pretty-printed.
//!
//! ```
//! use json_codec::{decode, encode};
//!
//! let mut doc = decode(r#"{"winner":false}"#).unwrap();
//! doc.set("winner", true).unwrap();
//! assert_eq!(encode(&doc).unwrap(), r#"{"winner":true}"#);
//! ```

mod decoder;
mod encoder;
mod error;
mod value;

pub use decoder::JsonDecoder;
pub use encoder::JsonEncoder;
pub use error::JsonError;
pub use value::JsonValue;

/// Decode a complete JSON document.
pub fn decode(text: &str) -> Result<JsonValue, JsonError> {
    JsonDecoder::new().decode(text.as_bytes())
}

/// Encode a value compactly (no extraneous whitespace).
pub fn encode(value: &JsonValue) -> Result<String, JsonError> {
    JsonEncoder::new().encode(value)
}

/// Encode a value with `width` spaces of indentation per nesting level.
pub fn encode_pretty(value: &JsonValue, width: usize) -> Result<String, JsonError> {
    JsonEncoder::with_indent(width).encode(value)
}
