//! Core data models for the payroll system.
//!
//! This module contains the employee records and the roster they live on.

mod employee;
mod roster;

pub use employee::{Developer, Employee, Manager};
pub use roster::Roster;
