//! Utility helpers for `merkle-drop`.

pub mod parallel;

pub use parallel::{parallelism_enabled, set_parallelism, ParallelismGuard};
