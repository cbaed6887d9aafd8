//! Artifact serialization
//!
//! The segment is parsed structurally by its consumer, so the framing
//! comments, the cdef wrapper and the table syntax are all fixed.

use std::io::Write;

use glcdef_core::Result;

use crate::Binding;

const BEGIN_MARKER: &str = "--[[ BEGIN AUTOGENERATED SEGMENT ]]";
const END_MARKER: &str = "--[[ END AUTOGENERATED SEGMENT ]]";
const CDEF_OPEN: &str = "local glc; do require('ffi').cdef [[";
const CDEF_CLOSE: &str = "\t]]; glc = {";
const TABLE_CLOSE: &str = "} end";

/// Write the complete artifact for a finished binding.
///
/// Declarations appear in encounter order; defines in ascending name
/// order (the map iterates sorted).
pub fn write_artifact(out: &mut impl Write, binding: &Binding) -> Result<()> {
    writeln!(out, "{}", BEGIN_MARKER)?;
    writeln!(out, "{}", CDEF_OPEN)?;
    for line in &binding.cdefs {
        writeln!(out, "\t{}", line)?;
    }
    writeln!(out, "{}", CDEF_CLOSE)?;
    for (name, value) in &binding.defines {
        writeln!(out, "\t['{}'] = {},", name, value)?;
    }
    writeln!(out, "{}", TABLE_CLOSE)?;
    writeln!(out, "{}", END_MARKER)?;
    Ok(())
}

/// Render the artifact to a string.
pub fn render(binding: &Binding) -> Result<String> {
    let mut buf = Vec::new();
    write_artifact(&mut buf, binding)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
