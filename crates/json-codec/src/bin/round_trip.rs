//! Decode a fixed document, read a field, flip another, and print the
//! compact and pretty re-encodings.

use json_codec::{decode, encode, encode_pretty, JsonError};

const DOC: &str = r#"{"name":"Joe","age":42,"scores":[31.4,29.9,35.7],"winner":false}"#;

fn main() -> Result<(), JsonError> {
    let mut doc = decode(DOC)?;

    if let Some(name) = doc.get("name")?.and_then(|v| v.as_str()) {
        println!("{name}");
    }

    doc.set("winner", true)?;

    println!("{}", encode(&doc)?);
    println!("{}", encode_pretty(&doc, 2)?);
    Ok(())
}
