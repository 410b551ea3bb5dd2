//! Base64 data URIs for report photos.

use base64::prelude::*;

use crate::shared::validation::DATA_URI_REGEX;

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, BASE64_STANDARD.encode(bytes))
}

/// Split a data URI into its MIME type and decoded bytes.
/// `None` when the text is not a base64 data URI or the payload does not decode.
pub fn decode_data_uri(data_uri: &str) -> Option<(String, Vec<u8>)> {
    let caps = DATA_URI_REGEX.captures(data_uri)?;
    let bytes = BASE64_STANDARD.decode(&caps["payload"]).ok()?;
    Some((caps["mime"].to_string(), bytes))
}
