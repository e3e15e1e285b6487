//! Comprehensive catalog test suite.
//!
//! End-to-end coverage of the public `Catalog` surface: record lifecycle,
//! query semantics, persistence behavior, concurrency guarantees, and the
//! save/load round-trip property.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test catalog_comprehensive
//! ```


mod concurrency;
mod lifecycle;
mod persistence;
