// sensfilter/src/lib.rs
//! # sensfilter CLI Application
//!
//! This crate provides the command-line front end for the `sensfilter-core`
//! matcher: argument parsing, vocabulary assembly, and the `check`, `find`,
//! `replace` and `remove` commands.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
