//! Terminal presentation for the `stitch` binary
//!
//! Views return rendered strings; commands decide where they are printed.

pub mod blocks;
pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
