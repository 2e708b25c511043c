//! Host commands
//!
//! These commands bridge a frontend to the Rust core. The page state
//! lives in Rust; every command answers with a fresh view of it.

pub mod forms;
pub mod navigation;
