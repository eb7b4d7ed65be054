// TimeLog Viewer - core/query.rs
//
// Query-string and URL construction for the `/logs` endpoint.
// Core layer: pure string building, no I/O.

use crate::core::model::LogFilter;
use crate::util::constants;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a query value: everything except the RFC 3986
/// unreserved set, so ISO dates and plain names pass through untouched.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build `employee=..&project=..&date=..` from the non-empty filter fields.
///
/// Order is fixed (employee, project, date). Values are percent-encoded.
/// An empty filter yields an empty string, without a leading `?`.
pub fn build_query_string(filter: &LogFilter) -> String {
    filter
        .active_pairs()
        .into_iter()
        .map(|(key, value)| {
            format!(
                "{key}={}",
                utf8_percent_encode(value, QUERY_VALUE_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Full request URL: `<base>/logs` plus `?<query>` when any filter is set.
pub fn build_logs_url(base_url: &str, filter: &LogFilter) -> String {
    let mut url = format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        constants::LOGS_PATH
    );
    let query = build_query_string(filter);
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}
