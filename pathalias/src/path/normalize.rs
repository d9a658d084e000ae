//! Path string normalization.
//!
//! These functions work on path *strings*, not on `std::path::Path`, because
//! inputs arrive in either separator style regardless of the host platform
//! and may carry alias qualifiers or drive letters that the platform's own
//! path parser would misread. Everything here is pure: no filesystem access.

/// Separator used for every path the registry stores or returns.
pub const SEPARATOR: char = '/';

/// Replace each run of `/` and `\` characters with a single `separator`.
///
/// # Examples
///
/// ```
/// use pathalias::path::normalize::unify_separators;
///
/// assert_eq!(unify_separators(r"C:\\server//www\/file.txt", '/'), "C:/server/www/file.txt");
/// assert_eq!(unify_separators("a/b", '\\'), r"a\b");
/// ```
#[must_use]
pub fn unify_separators(path: &str, separator: char) -> String {
    let mut unified = String::with_capacity(path.len());
    let mut in_run = false;

    for ch in path.chars() {
        if is_separator(ch) {
            if !in_run {
                unified.push(separator);
                in_run = true;
            }
        } else {
            unified.push(ch);
            in_run = false;
        }
    }

    unified
}

/// Detect the absolute-path prefix of `path`.
///
/// After separators are unified to `/`, a prefix is an optional run of ASCII
/// letters followed by `:`, then one or two slashes. This covers `/`,
/// `C:/` and protocol-like heads such as `phar://`. A virtual reference
/// (`alias:file`) has no prefix because no slash follows the colon.
///
/// # Examples
///
/// ```
/// use pathalias::path::normalize::prefix;
///
/// assert_eq!(prefix("/srv/www").as_deref(), Some("/"));
/// assert_eq!(prefix(r"P:\\Folder\").as_deref(), Some("P:/"));
/// assert_eq!(prefix("folder/file.txt"), None);
/// assert_eq!(prefix("default:folder/file.txt"), None);
/// ```
#[must_use]
pub fn prefix(path: &str) -> Option<String> {
    let unified = unify_separators(path, SEPARATOR);
    let len = unified_prefix_len(&unified)?;
    Some(unified[..len].to_string())
}

/// Normalize a path string.
///
/// Separators are unified, the prefix (see [`prefix`]) is kept at the head,
/// empty and `.` segments are dropped, and each `..` removes the segment
/// before it. A `..` with nothing left to remove is discarded. The result
/// uses `separator` throughout and never ends with a separator unless it is
/// the bare prefix.
///
/// The function is idempotent: cleaning a cleaned path with the same
/// separator returns it unchanged.
///
/// # Examples
///
/// ```
/// use pathalias::path::normalize::clean;
///
/// assert_eq!(clean("../test/path/folder/", '/'), "test/path/folder");
/// assert_eq!(clean(r"..\../test///path/\/\folder/\", '/'), "test/path/folder");
/// assert_eq!(clean("/srv/www/./assets/../app.css", '/'), "/srv/www/app.css");
/// assert_eq!(clean(r"C:\server\..\www", '/'), "C:/www");
/// ```
#[must_use]
pub fn clean(path: &str, separator: char) -> String {
    let unified = unify_separators(path, SEPARATOR);
    let prefix_len = unified_prefix_len(&unified).unwrap_or(0);
    let (head, rest) = unified.split_at(prefix_len);

    let mut tokens: Vec<&str> = Vec::new();
    for part in rest.split(SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => {
                tokens.pop();
            }
            _ => tokens.push(part),
        }
    }

    let mut cleaned = String::with_capacity(unified.len());
    for ch in head.chars() {
        cleaned.push(if ch == SEPARATOR { separator } else { ch });
    }
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            cleaned.push(separator);
        }
        cleaned.push_str(token);
    }
    cleaned
}

/// Check whether a path ends in a "go up" token (`/..` or `/../`).
///
/// Such paths are only accepted into the registry once the filesystem can
/// canonicalize them.
///
/// # Examples
///
/// ```
/// use pathalias::path::normalize::has_parent_suffix;
///
/// assert!(has_parent_suffix("/srv/www/.."));
/// assert!(has_parent_suffix(r"C:\srv\www\..\..\"));
/// assert!(!has_parent_suffix("/srv/../www"));
/// ```
#[must_use]
pub fn has_parent_suffix(path: &str) -> bool {
    let unified = unify_separators(path, SEPARATOR);
    unified.ends_with("/..") || unified.ends_with("/../")
}

/// Strip leading `/` and `\` characters.
#[must_use]
pub fn trim_leading_separators(path: &str) -> &str {
    path.trim_start_matches(is_separator)
}

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

/// Length of the `^([A-Za-z]+:)?//?` match on an already unified path.
fn unified_prefix_len(unified: &str) -> Option<usize> {
    let bytes = unified.as_bytes();

    let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    let mut pos = if letters > 0 && bytes.get(letters) == Some(&b':') {
        letters + 1
    } else {
        0
    };

    if bytes.get(pos) != Some(&b'/') {
        return None;
    }
    pos += 1;
    if bytes.get(pos) == Some(&b'/') {
        pos += 1;
    }
    Some(pos)
}
