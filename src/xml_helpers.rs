//! Small quick-xml helpers shared by the markup loader.
//!
//! All functions ignore namespace prefixes and decode entities, so
//! `<h:td h:class="a&amp;b">` reads as a `td` with class `a&b`.

use quick_xml::events::{BytesStart, BytesText};

use crate::error::Result;

/// Get the local element name as a lowercase string.
///
/// Returns empty string if not valid UTF-8.
#[inline]
pub fn local_name_string(e: &BytesStart) -> String {
    let bytes = e.local_name();
    std::str::from_utf8(bytes.as_ref())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Every attribute as `(local name, decoded value)`, in source order.
pub fn attr_pairs(e: &BytesStart) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let name = std::str::from_utf8(attr.key.local_name().as_ref())
            .unwrap_or("")
            .to_string();
        if name.is_empty() {
            continue;
        }
        let value = attr.unescape_value()?.into_owned();
        pairs.push((name, value));
    }
    Ok(pairs)
}

/// Decoded text content of a text event.
pub fn text_string(t: &BytesText) -> Result<String> {
    Ok(t.unescape()?.into_owned())
}
