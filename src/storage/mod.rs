//! # Storage Module
//!
//! Persistent player data: counters and settings kept between sessions.

pub mod preferences;

pub use preferences::*;
