//! Target-header scope filter
//!
//! Only the spans of input that originate from the GL family of
//! headers contribute to the binding; everything pulled in transitively
//! (libc, platform headers) is skipped.

/// Header filenames whose content becomes part of the binding
pub const TARGET_HEADERS: [&str; 4] = ["gl.h", "glu.h", "glfw3.h", "glext.h"];

/// Moving window over the input: lines are eligible only while the
/// current origin is one of the target headers.
#[derive(Debug, Default)]
pub struct ScopeFilter {
    in_scope: bool,
}

impl ScopeFilter {
    pub fn new() -> Self {
        Self { in_scope: false }
    }

    /// Recompute the window for a new origin path
    pub fn enter(&mut self, origin: &str) {
        self.in_scope = is_target_header(origin);
    }

    /// Whether lines from the current origin should be processed
    pub fn in_scope(&self) -> bool {
        self.in_scope
    }
}

/// Check whether the final path component names a target header.
///
/// The match is case-sensitive and exact; both separator styles are
/// accepted since MinGW emits backslash paths.
pub fn is_target_header(path: &str) -> bool {
    let filename = path.rsplit(['/', '\\']).next().unwrap_or(path);
    TARGET_HEADERS.contains(&filename)
}
