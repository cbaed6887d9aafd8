//! Declaration sanitizer
//!
//! Headers preprocessed on Windows tack `__attribute__((__stdcall__))`
//! onto every API entry point, and Linux headers use the visibility
//! attribute instead; LuaJIT's C parser accepts neither. Both are cut
//! out of declaration lines, which are otherwise passed through
//! untouched.

/// Calling-convention annotation (MinGW)
const STDCALL_ATTR: &str = "__attribute__((__stdcall__)) ";
/// Symbol-visibility annotation (Linux)
const VISIBILITY_ATTR: &str = r#"__attribute__((visibility("default"))) "#;

/// Remove every occurrence of the attribute annotations.
pub fn strip_attributes(line: &str) -> String {
    line.replace(STDCALL_ATTR, "").replace(VISIBILITY_ATTR, "")
}
