//! Page-level components.

pub mod console;
