//! Property tests for Stitch.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "round-trips".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/resolver.rs"]
mod resolver;

#[path = "properties/snapshot.rs"]
mod snapshot;
