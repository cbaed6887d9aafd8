//! glcdef Core
//!
//! Core types shared by the glcdef binding generator.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
