//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`panels`, `submission`, `data`, `queue`,
//! `graph`) so individual components depend on small focused models, and
//! panel initialization tracking lives in one controller instead of
//! free-standing loaded flags.

pub mod data;
pub mod graph;
pub mod panels;
pub mod queue;
pub mod submission;
