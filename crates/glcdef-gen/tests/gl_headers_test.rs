//! End-to-end tests over realistic preprocessor output
//!
//! Feeds the generator the kind of text `cpp -E` produces over the GL
//! headers and checks the emitted segment byte for byte.

use std::io::{BufReader, Write};

use glcdef_gen::{emit, Generator};
use pretty_assertions::assert_eq;

const PREPROCESSED: &str = r#"# 1 "demo.c"
# 1 "/usr/include/GL/gl.h" 1
#define GL_FOO 1
#define GL_BAR GL_FOO
void glFoo(void);
# 12 "other.h" 1
#define GL_BAZ 2
int unrelated(void);
# 40 "/usr/include/GL/gl.h" 2
void glBar(void);
"#;

const EXPECTED: &str = "--[[ BEGIN AUTOGENERATED SEGMENT ]]
local glc; do require('ffi').cdef [[
\tvoid glFoo(void);
\tvoid glBar(void);
\t]]; glc = {
\t['GL_BAR'] = 1,
\t['GL_FOO'] = 1,
} end
--[[ END AUTOGENERATED SEGMENT ]]
";

#[test]
fn test_window_over_target_headers() {
    let binding = Generator::new().run(PREPROCESSED.as_bytes()).unwrap();

    assert_eq!(binding.cdefs, ["void glFoo(void);", "void glBar(void);"]);
    assert_eq!(binding.defines.get("GL_FOO").map(String::as_str), Some("1"));
    assert_eq!(binding.defines.get("GL_BAR").map(String::as_str), Some("1"));
    assert!(!binding.defines.contains_key("GL_BAZ"));
    assert!(binding.invalid.is_empty());

    assert_eq!(emit::render(&binding).unwrap(), EXPECTED);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let first = emit::render(&Generator::new().run(PREPROCESSED.as_bytes()).unwrap()).unwrap();
    let second = emit::render(&Generator::new().run(PREPROCESSED.as_bytes()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_file_input_matches_stream_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PREPROCESSED.as_bytes()).unwrap();
    let reopened = file.reopen().unwrap();

    let binding = Generator::new().run(BufReader::new(reopened)).unwrap();
    assert_eq!(emit::render(&binding).unwrap(), EXPECTED);
}

#[test]
fn test_attribute_heavy_windows_header() {
    let input = r#"# 3 "c:\mingw\include\GL\glext.h"
GLAPI void __attribute__((__stdcall__)) glDrawArraysEXT(GLenum mode, GLint first, GLsizei count);
#define GL_INVALID_INDEX 0xFFFFFFFFu
#define GL_TIMEOUT_IGNORED 0xFFFFFFFFFFFFFFFFull
#define APIENTRY __stdcall
#define GL_VERSION_4_6 1
"#;
    let binding = Generator::new().run(input.as_bytes()).unwrap();

    assert_eq!(
        binding.cdefs,
        ["GLAPI void glDrawArraysEXT(GLenum mode, GLint first, GLsizei count);"]
    );
    assert_eq!(binding.defines["GL_INVALID_INDEX"], "0xFFFFFFFF");
    assert_eq!(binding.defines["GL_TIMEOUT_IGNORED"], "0xFFFFFFFFFFFFFFFFull");
    assert_eq!(binding.defines["GL_VERSION_4_6"], "1");
    assert!(!binding.defines.contains_key("APIENTRY"));
    assert!(binding.invalid.is_empty());
}

#[test]
fn test_unresolved_defines_reported_in_encounter_order() {
    let input = r#"# 1 "glu.h"
#define GLU_VERSION_STRING gluGetString
#define GLU_WEIRD (1.5F)
#define GLU_TRUE 1
"#;
    let binding = Generator::new().run(input.as_bytes()).unwrap();

    assert_eq!(binding.defines["GLU_TRUE"], "1");
    let reported: Vec<String> = binding.invalid.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        reported,
        [
            "Invalid define: GLU_VERSION_STRING gluGetString",
            "Invalid define: GLU_WEIRD (1.5F)",
        ]
    );
}
