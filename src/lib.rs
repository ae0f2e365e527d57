#![doc = include_str!("../README.md")]

// Type variants and shape-dimension expressions
pub mod types;

// Shape algebra: dimension evaluation, broadcasting, axis-0 concatenation
pub mod shape;

// Relation functions invoked by the type solver
pub mod relation;

pub mod error;

// entry point
pub mod prelude;
