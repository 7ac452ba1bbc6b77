// README content decoding.
// Turns the API's Base64 `content` field back into Markdown text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decode a Base64 `content` payload into UTF-8 Markdown.
///
/// The API line-wraps the Base64, so ASCII whitespace is stripped before
/// decoding. The bytes are interpreted as UTF-8, so multi-byte sequences
/// (emoji included) survive intact. The result is Markdown source, ready
/// for whatever renderer the caller uses.
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| Error::Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| Error::Decode(e.to_string()))
}

/// Extract and decode the `content` field of a README response value.
///
/// `None` means there is nothing to show (no README, or a value without a
/// `content` string). `Some(Err(..))` is a decode failure the caller
/// should report in place without abandoning the rest of the page.
pub fn markdown_from_response(readme: &Value) -> Option<Result<String>> {
    let content = readme.get("content")?.as_str()?;
    Some(decode_content(content))
}
