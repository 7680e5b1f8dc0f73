//! Property-based tests for TTRPG Names
//!
//! This module contains property-based tests using the proptest framework.
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `name_data_props`: Tests for dataset sampling and lookup
//!   - Batch sizes match the request whenever the pools are populated
//!   - Empty pools and mismatched options generate nothing
//!   - Character/location discrimination is consistent
//!   - Generated names can always be described
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod name_data_props;
