//! glcdef Generator
//!
//! Streams preprocessed C text from the OpenGL family of headers and
//! collects everything a LuaJIT `ffi.cdef` binding needs: sanitized
//! declarations plus a table of symbolic constants the Lua runtime
//! cannot evaluate on its own.
//!
//! ## Modules
//!
//! - `marker` - GNU line-marker parsing and origin tracking
//! - `scope` - target-header window over the input
//! - `defines` - symbolic constant resolution
//! - `sanitize` - attribute stripping for declaration lines
//! - `emit` - artifact serialization

pub mod defines;
pub mod emit;
pub mod marker;
pub mod sanitize;
pub mod scope;

use std::io::BufRead;

use glcdef_core::{DefineMap, InvalidDefine, Result};
use tracing::debug;

use crate::defines::DefineResolver;
use crate::marker::OriginTracker;
use crate::scope::ScopeFilter;

/// Everything collected during one pass over the input
#[derive(Debug, Default, Clone)]
pub struct Binding {
    /// Sanitized declaration lines, in encounter order
    pub cdefs: Vec<String>,
    /// Resolved defines; iteration is in name order
    pub defines: DefineMap,
    /// Defines that could not be resolved (non-fatal)
    pub invalid: Vec<InvalidDefine>,
}

/// Single-pass generator over preprocessed header text
pub struct Generator {
    origin: OriginTracker,
    scope: ScopeFilter,
    resolver: DefineResolver,
}

impl Generator {
    /// Create a generator for the default target header set
    pub fn new() -> Self {
        Self {
            origin: OriginTracker::new(),
            scope: ScopeFilter::new(),
            resolver: DefineResolver::new(),
        }
    }

    /// Consume the whole input stream and collect the binding.
    ///
    /// Each line is classified exactly once: location markers move the
    /// origin, directives go to the define resolver, everything else
    /// becomes declaration text. Lines outside the target headers are
    /// dropped, directives included.
    pub fn run(mut self, input: impl BufRead) -> Result<Binding> {
        let mut cdefs = Vec::new();

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(origin) = self.origin.observe(line) {
                self.scope.enter(origin);
                debug!("origin {:?}, in scope: {}", origin, self.scope.in_scope());
                continue;
            }

            if !self.scope.in_scope() {
                continue;
            }

            if line.starts_with('#') {
                // Defines are resolved; any other directive is dropped.
                self.resolver.observe(line);
                continue;
            }

            cdefs.push(sanitize::strip_attributes(line));
        }

        let (defines, invalid) = self.resolver.finish();
        Ok(Binding {
            cdefs,
            defines,
            invalid,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_dropped() {
        let input = "# 1 \"gl.h\"\n\n   \nvoid glEnd(void);\n";
        let binding = Generator::new().run(input.as_bytes()).unwrap();
        assert_eq!(binding.cdefs, ["void glEnd(void);"]);
    }

    #[test]
    fn test_nothing_collected_before_first_marker() {
        let input = "#define GL_X 1\nvoid glNope(void);\n";
        let binding = Generator::new().run(input.as_bytes()).unwrap();
        assert!(binding.cdefs.is_empty());
        assert!(binding.defines.is_empty());
        assert!(binding.invalid.is_empty());
    }

    #[test]
    fn test_unknown_directives_dropped_silently() {
        let input = "# 1 \"gl.h\"\n#pragma once\n#define GL_NO_VALUE\n#if 0\n";
        let binding = Generator::new().run(input.as_bytes()).unwrap();
        assert!(binding.cdefs.is_empty());
        assert!(binding.defines.is_empty());
        assert!(binding.invalid.is_empty());
    }

    #[test]
    fn test_declarations_keep_internal_whitespace() {
        let input = "# 1 \"gl.h\"\ntypedef unsigned int   GLenum;\n";
        let binding = Generator::new().run(input.as_bytes()).unwrap();
        assert_eq!(binding.cdefs, ["typedef unsigned int   GLenum;"]);
    }
}
