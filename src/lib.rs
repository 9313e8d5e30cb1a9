//! Employee payroll roster with an interactive menu-driven CLI.
//!
//! This crate keeps a session-scoped roster of developers and managers,
//! calculates each employee's total salary with exact decimal arithmetic,
//! and drives the roster through a line-oriented menu interface that works
//! over any `BufRead`/`Write` pair.

#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod models;
