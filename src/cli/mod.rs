//! Shared CLI plumbing for the `lz8s` and `lz8dec` binaries: display-level
//! state, usage text and argument parsing.

pub mod args;
pub mod constants;
pub mod help;
pub mod report;
