//! Outbound map-service links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::store::StoreRecord;

pub const DEFAULT_MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Map search link for `record`'s street address, city and state.
///
/// `base` is appended to verbatim; the query is a single encoded path segment.
#[must_use]
pub fn map_search_url(base: &str, record: &StoreRecord) -> String {
    let query = [
        record.address_line1.as_str(),
        record.city.as_str(),
        record.state_name.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ");

    format!("{base}{}", utf8_percent_encode(&query, URI_COMPONENT))
}
