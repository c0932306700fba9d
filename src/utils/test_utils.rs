//! Test utilities for machine testing.
