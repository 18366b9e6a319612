//! Food calculator tools
//!
//! Tool implementations backing the MCP server. Each validates its raw
//! parameters and calls into the calculator.

pub mod quantities;
pub mod recipes;
pub mod status;
