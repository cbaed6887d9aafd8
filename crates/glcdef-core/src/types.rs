//! Data types collected by the binding generator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved defines keyed by macro name.
///
/// A `BTreeMap` keeps iteration in ascending name order, which is the
/// order the emitted mapping table requires.
pub type DefineMap = BTreeMap<String, String>;

/// A define whose value could not be reduced to a literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidDefine {
    /// Macro name as it appeared in the directive
    pub name: String,
    /// The value token the resolver rejected
    pub value: String,
}

impl std::fmt::Display for InvalidDefine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid define: {} {}", self.name, self.value)
    }
}
