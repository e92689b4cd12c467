// sensfilter-core/src/engines/mod.rs
//! This module contains the scanning strategy implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `ScanEngine` trait, so a filter can switch strategy without touching the
//! query layer built on top of it.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod aho_corasick;
pub mod greedy;
