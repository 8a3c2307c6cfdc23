#![forbid(unsafe_code)]

//! Core sizing primitives for the panekit splitter engine.
//!
//! This crate holds the leaf types the engine builds on:
//!
//! - [`SizeValue`]: declared pane sizing resolved once at initialization,
//!   replacing repeated attribute-string sniffing with a typed union.
//! - [`units`]: sign-preserving pixel/percent conversion with explicit
//!   degenerate-geometry fallbacks.
//! - [`SplitterOptions`]: validated host-level configuration (axis,
//!   alignment, RTL, divider thickness, keyboard step, persistence flags).
//!
//! Everything here is pure data and total functions; nothing panics on
//! malformed or degenerate input.

pub mod config;
pub mod units;
pub mod value;

pub use config::{Align, Axis, OptionsError, SplitterOptions};
pub use units::{sanitize, to_percent, to_pixels};
pub use value::SizeValue;
