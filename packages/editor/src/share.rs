//! # Share Links
//!
//! A design is shared as `<origin>/#/?data=<payload>`, where the payload is
//! the compact page JSON compressed with LZ-String's URI-component alphabet
//! (`A-Za-z0-9+-$`). That alphabet needs no further escaping, and links made
//! by the browser front end decode here unchanged.

use crate::errors::EditorError;
use crate::id_generator::IdGenerator;
use crate::model::Page;
use crate::serializer::{to_compact_json, DocumentShape};

/// Route prefix placed between the origin and the payload
pub const SHARE_ROUTE: &str = "/#/?data=";

pub fn compress(json: &str) -> String {
    lz_str::compress_to_encoded_uri_component(json)
}

pub fn decompress(payload: &str) -> Result<String, EditorError> {
    let wide = lz_str::decompress_from_encoded_uri_component(payload).ok_or(EditorError::Decompress)?;
    String::from_utf16(&wide).map_err(|_| EditorError::Decompress)
}

/// Build the share URL for a page collection
pub fn share_url(origin: &str, pages: &[Page]) -> Result<String, EditorError> {
    let json = to_compact_json(pages)?;
    Ok(format!("{}{}{}", origin.trim_end_matches('/'), SHARE_ROUTE, compress(&json)))
}

/// Extract the `data` query value from a share URL
pub fn share_payload(url: &str) -> Option<&str> {
    let (_, query) = url.rsplit_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("data="))
        .filter(|payload| !payload.is_empty())
}

/// Decode a payload into pages, applying the import shape rules
pub fn pages_from_payload(payload: &str, ids: &mut dyn IdGenerator) -> Result<Vec<Page>, EditorError> {
    let json = decompress(payload)?;
    let value = serde_json::from_str(&json)?;
    Ok(DocumentShape::recognize(value)?.into_pages(ids))
}
