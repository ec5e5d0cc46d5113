//! URL encoding for index names used as path segments.
//!
//! Index names are user-supplied and end up as a single path segment, so
//! characters that would change the URL structure are percent-encoded.
//!
//! # Example
//!
//! ```
//! use harness_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("logs/2024"), "logs%2F2024");
//! assert_eq!(encode_path_segment("logs-*"), "logs-*");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in an index path segment.
///
/// `,` and `*` are left alone: the cluster accepts comma-separated index lists
/// and wildcards in this position.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
