//! End-to-end sentence scenarios
//!
//! The full public surface composed into the example sentences the system
//! exists to produce.
