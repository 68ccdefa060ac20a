//! Track `Location` URIs
//!
//! Libraries store locations as `file://localhost/<path>` URIs. Matching only
//! needs the percent-decoded last segment of the URI path, so any parseable
//! URI is accepted whatever its scheme or host. Writing produces the fixed
//! scheme and host from a resolved disk path.

use crate::error::{RekonError, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Scheme and host every rewritten location starts with
pub const LOCATION_PREFIX: &str = "file://localhost/";

/// Bytes escaped when a disk path is written into a location
///
/// `#` and `?` would start a fragment or query, and a bare `%` would be
/// decoded on the next read.
const PATH_ESCAPES: &AsciiSet = &CONTROLS.add(b'%').add(b'#').add(b'?');

/// File name (final path segment) of a `Location` URI, percent-decoded
///
/// Fails only when `location` is not a URI at all. A path ending in `/`
/// yields its last non-empty segment; a path with none yields `""`.
pub fn location_file_name(location: &str) -> Result<String> {
    let url = Url::parse(location)
        .map_err(|e| RekonError::invalid_location(location, e.to_string()))?;

    let segment = url
        .path()
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default();

    Ok(percent_decode_str(segment).decode_utf8_lossy().into_owned())
}

/// Build a `Location` URI for a resolved disk path
///
/// Backslashes are normalized to forward slashes. An absolute path's leading
/// `/` is folded into the prefix rather than doubled.
pub fn location_for_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let relative = path.strip_prefix('/').unwrap_or(&path);
    format!("{LOCATION_PREFIX}{}", utf8_percent_encode(relative, PATH_ESCAPES))
}
