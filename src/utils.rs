//! Small helpers shared across the crawler.
//!
//! - Literal origin/path joining for every URL the crawler builds
//! - String truncation for log output

/// Join a site origin and a path by plain concatenation.
///
/// No escaping, validation or slash normalization happens here: the
/// exported URLs must match the source markup byte for byte. Callers that
/// need a separator pass it as part of `path`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(join_origin("https://a.b", "/img/x.jpg"), "https://a.b/img/x.jpg");
/// assert_eq!(join_origin("https://a.b", "//x"), "https://a.b//x");
/// ```
pub fn join_origin(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len());
    url.push_str(base);
    url.push_str(path);
    url
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) and
/// suffixed with the number of dropped bytes.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
