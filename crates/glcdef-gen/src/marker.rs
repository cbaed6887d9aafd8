//! GNU line-marker parsing
//!
//! A preprocessor run with `-E` records where each chunk of its output
//! came from using markers of the form `# 123 "/usr/include/GL/gl.h"`,
//! optionally followed by entry/exit flags. The tracker keeps the most
//! recent path so the rest of the pipeline knows which header the
//! current lines belong to.

use regex::Regex;

/// Tracks which source file the current input lines came from
pub struct OriginTracker {
    pattern: Regex,
    origin: Option<String>,
}

impl OriginTracker {
    pub fn new() -> Self {
        Self {
            // Flags after the quoted path are tolerated and ignored
            pattern: Regex::new(r#"^# \d+ "([^"]*)""#).unwrap(),
            origin: None,
        }
    }

    /// Interpret `line` as a location marker.
    ///
    /// Returns the new origin when the line is a marker. Lines that do
    /// not match the marker shape leave the origin untouched and return
    /// `None`; they are ordinary lines, not errors.
    pub fn observe(&mut self, line: &str) -> Option<&str> {
        let caps = self.pattern.captures(line)?;
        self.origin = Some(caps[1].to_string());
        self.origin.as_deref()
    }

    /// Path of the file the current lines originate from
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl Default for OriginTracker {
    fn default() -> Self {
        Self::new()
    }
}
