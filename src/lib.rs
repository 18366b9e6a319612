//! Food Calculator Library
//!
//! Raw food quantities for a number of people, from fixed per-person norms.

pub mod build_info;
pub mod calculator;
pub mod mcp;
pub mod norms;
pub mod tools;
