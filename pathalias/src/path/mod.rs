//! Path string handling for alias-qualified references.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize::clean`] turns any mix of `/` and `\` separators into one
//! style, collapses `.` and `..` segments, and keeps an absolute prefix
//! (`/`, `C:/`, `scheme://`) intact at the head:
//!
//! ```
//! use pathalias::path::normalize::clean;
//!
//! assert_eq!(clean(r"C:\server\.\test.dev\..\www\", '/'), "C:/server/www");
//! ```
//!
//! ## References
//!
//! A reference is `alias:subpath` (virtual) or a plain path (literal). See
//! [`Reference`] and [`reference::is_virtual`] for the exact rules, including
//! how drive letters are told apart from aliases.
//!
//! ## Collaborators
//!
//! Filesystem checks go through [`FilesystemProbe`] and URL bases come from
//! [`BaseUrlProvider`], so the resolution logic itself stays free of I/O.

pub mod normalize;
pub mod probe;
pub mod reference;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use probe::{BaseUrlProvider, FilesystemProbe, OsProbe, StaticBaseUrl};
pub use reference::{Reference, DEFAULT_ALIAS};
