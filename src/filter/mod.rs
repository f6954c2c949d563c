// file: src/filter/mod.rs
// description: size filter module exports
// reference: internal module structure

pub mod size;

pub use size::{SizeFilter, parse_size_kb};
