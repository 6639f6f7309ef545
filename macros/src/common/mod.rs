// Common utilities for the user-facing macros
//
// This module contains:
// - parse_utils: attribute flag parsing

mod parse_utils;

pub use parse_utils::*;
