//! Symbolic constant resolution
//!
//! Reduces `#define NAME VALUE` directives to literal tokens the Lua
//! side can evaluate: plain integers, hex literals, aliases of earlier
//! defines, and two sentinel constants with fixed rewrites. Everything
//! else is reported, unless the name is known to be safe to drop.

use glcdef_core::{DefineMap, InvalidDefine};
use regex::Regex;
use tracing::debug;

/// Macro names whose values are unrepresentable but safe to omit
pub const DEFINE_WHITELIST: [&str; 6] = [
    "GLAPI",
    "APIENTRY",
    "GLU_TESS_MAX_COORD",
    "gluErrorStringWIN",
    "WINGDIAPI",
    "CALLBACK",
];

/// GL_TIMEOUT_IGNORED's 64-bit sentinel; LuaJIT parses the ull suffix
const TIMEOUT_SENTINEL: &str = "0xFFFFFFFFFFFFFFFFull";
/// GL_INVALID_INDEX's 32-bit sentinel; the unsigned suffix has to go
const INVALID_INDEX_SENTINEL: &str = "0xFFFFFFFFu";

/// Resolves define directives into literal name/value pairs
pub struct DefineResolver {
    define_pattern: Regex,
    number_pattern: Regex,
    hex_pattern: Regex,
    defines: DefineMap,
    invalid: Vec<InvalidDefine>,
}

impl DefineResolver {
    pub fn new() -> Self {
        Self {
            define_pattern: Regex::new(r"^#define\s+(\S+)\s+(\S+)$").unwrap(),
            number_pattern: Regex::new(r"^-?[0-9]+$").unwrap(),
            hex_pattern: Regex::new(r"^0x[0-9a-fA-F]+$").unwrap(),
            defines: DefineMap::new(),
            invalid: Vec::new(),
        }
    }

    /// Inspect a directive line; resolves it when it has the two-token
    /// `#define NAME VALUE` shape, ignores it otherwise.
    pub fn observe(&mut self, line: &str) {
        if let Some(caps) = self.define_pattern.captures(line) {
            let name = caps[1].to_string();
            let value = caps[2].to_string();
            self.resolve(&name, &value);
        }
    }

    /// Resolve one define and record the outcome.
    ///
    /// Later defines of the same name overwrite earlier ones. An alias
    /// is a single lookup against entries already resolved, so a chain
    /// only resolves if the input defines its links in textual order.
    pub fn resolve(&mut self, name: &str, value: &str) {
        if let Some(resolved) = self.defines.get(value).cloned() {
            self.defines.insert(name.to_string(), resolved);
        } else if self.number_pattern.is_match(value) || self.hex_pattern.is_match(value) {
            self.defines.insert(name.to_string(), value.to_string());
        } else if value == TIMEOUT_SENTINEL {
            self.defines.insert(name.to_string(), value.to_string());
        } else if value == INVALID_INDEX_SENTINEL {
            self.defines
                .insert(name.to_string(), "0xFFFFFFFF".to_string());
        } else if DEFINE_WHITELIST.contains(&name) {
            debug!("skipping whitelisted define {}", name);
        } else {
            debug!("cannot resolve #define {} {}", name, value);
            self.invalid.push(InvalidDefine {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Hand the accumulated results over for emission.
    pub fn finish(self) -> (DefineMap, Vec<InvalidDefine>) {
        (self.defines, self.invalid)
    }
}

impl Default for DefineResolver {
    fn default() -> Self {
        Self::new()
    }
}
