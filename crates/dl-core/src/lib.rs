//! # dl-core
//!
//! Core types, error definitions, and settings for datelib.
//!
//! This crate provides the foundational pieces shared by the other crates in
//! the workspace: primitive type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, and the process-wide [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (default weekend).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years (a day-count year fraction).
pub type Time = Real;

/// Signed calendar-year number.
pub type Year = i32;

/// Signed count of days, as returned by date differences and day counts.
pub type DayCount = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedDefaultWeekend, Settings};
