//! The in-memory employee roster.

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// An ordered, append-only collection of employee records.
///
/// Employees are listed in the order they were added; there is no removal.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{Developer, Roster};
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(Developer::new("Alice", Decimal::from(70000), Decimal::from(10000)));
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster.employees()[0].name(), "Alice");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee record at the end of the roster.
    pub fn add(&mut self, employee: impl Into<Employee>) {
        self.employees.push(employee.into());
    }

    /// Returns the employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns an iterator over the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees on the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees have been added.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
