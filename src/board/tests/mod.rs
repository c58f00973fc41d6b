//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and move legality
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta search
//! - `proptest.rs` - Property-based tests

mod perft;
