// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! This module re-exports the `approx` assertion macro for float comparison,
//! which properly handles floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;
