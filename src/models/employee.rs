//! Employee models and salary calculation.
//!
//! This module defines the two concrete employee kinds (developers and
//! managers) and the [`Employee`] sum type that unifies them for roster
//! storage. Salary calculation dispatches on the kind: a developer is
//! paid base salary plus bonus, a manager base salary plus incentives.
//!
//! All monetary fields are guarded: an assignment is ignored, and the
//! previous value kept, when the amount is negative or would make the
//! variant's total salary unrepresentable. No error is signalled either
//! way. The same policy applies at construction, where "previous value"
//! means zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A salaried developer, paid a base salary plus a bonus.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Developer;
/// use rust_decimal::Decimal;
///
/// let developer = Developer::new("Alice", Decimal::from(70000), Decimal::from(10000));
/// assert_eq!(developer.calculate_salary(), Decimal::from(80000));
/// assert_eq!(developer.details(), "Name: Alice, Base Salary: ₹70000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    name: String,
    base_salary: Decimal,
    bonus: Decimal,
}

impl Developer {
    /// Creates a developer record.
    ///
    /// The amounts are assigned through the same guarded path as the
    /// setters: a `base_salary` or `bonus` that is negative, or that would
    /// make the total salary unrepresentable, is ignored and the field
    /// stays at zero. The name is stored as given.
    pub fn new(name: impl Into<String>, base_salary: Decimal, bonus: Decimal) -> Self {
        let mut developer = Self {
            name: name.into(),
            base_salary: Decimal::ZERO,
            bonus: Decimal::ZERO,
        };
        developer.set_base_salary(base_salary);
        developer.set_bonus(bonus);
        developer
    }

    /// Returns the developer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Updates the name. An empty string is ignored.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            warn!("ignoring empty employee name");
            return;
        }
        self.name = name;
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Updates the base salary. A negative amount, or one that would make
    /// the total salary unrepresentable, is ignored.
    pub fn set_base_salary(&mut self, amount: Decimal) {
        if amount < Decimal::ZERO {
            warn!(%amount, "ignoring negative base salary");
            return;
        }
        if amount.checked_add(self.bonus).is_none() {
            warn!(%amount, "ignoring base salary that would overflow the total");
            return;
        }
        self.base_salary = amount;
    }

    /// Returns the bonus.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    /// Updates the bonus. A negative amount, or one that would make the
    /// total salary unrepresentable, is ignored.
    pub fn set_bonus(&mut self, amount: Decimal) {
        if amount < Decimal::ZERO {
            warn!(%amount, "ignoring negative bonus");
            return;
        }
        if amount.checked_add(self.base_salary).is_none() {
            warn!(%amount, "ignoring bonus that would overflow the total");
            return;
        }
        self.bonus = amount;
    }

    /// Calculates the total salary: base salary plus bonus.
    ///
    /// The guarded setters keep the pair's sum representable, so the
    /// addition never overflows.
    pub fn calculate_salary(&self) -> Decimal {
        self.base_salary + self.bonus
    }

    /// Returns the details line: name and base salary.
    pub fn details(&self) -> String {
        format!("Name: {}, Base Salary: ₹{}", self.name, self.base_salary)
    }
}

/// A salaried manager, paid a base salary plus incentives.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::Manager;
/// use rust_decimal::Decimal;
///
/// let manager = Manager::new("Bob", Decimal::from(90000), Decimal::from(15000));
/// assert_eq!(manager.calculate_salary(), Decimal::from(105000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    name: String,
    base_salary: Decimal,
    incentives: Decimal,
}

impl Manager {
    /// Creates a manager record.
    ///
    /// The amounts are assigned through the same guarded path as the
    /// setters: a `base_salary` or `incentives` that is negative, or that
    /// would make the total salary unrepresentable, is ignored and the
    /// field stays at zero. The name is stored as given.
    pub fn new(name: impl Into<String>, base_salary: Decimal, incentives: Decimal) -> Self {
        let mut manager = Self {
            name: name.into(),
            base_salary: Decimal::ZERO,
            incentives: Decimal::ZERO,
        };
        manager.set_base_salary(base_salary);
        manager.set_incentives(incentives);
        manager
    }

    /// Returns the manager's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Updates the name. An empty string is ignored.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            warn!("ignoring empty employee name");
            return;
        }
        self.name = name;
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Updates the base salary. A negative amount, or one that would make
    /// the total salary unrepresentable, is ignored.
    pub fn set_base_salary(&mut self, amount: Decimal) {
        if amount < Decimal::ZERO {
            warn!(%amount, "ignoring negative base salary");
            return;
        }
        if amount.checked_add(self.incentives).is_none() {
            warn!(%amount, "ignoring base salary that would overflow the total");
            return;
        }
        self.base_salary = amount;
    }

    /// Returns the incentives.
    pub fn incentives(&self) -> Decimal {
        self.incentives
    }

    /// Updates the incentives. A negative amount, or one that would make
    /// the total salary unrepresentable, is ignored.
    pub fn set_incentives(&mut self, amount: Decimal) {
        if amount < Decimal::ZERO {
            warn!(%amount, "ignoring negative incentives");
            return;
        }
        if amount.checked_add(self.base_salary).is_none() {
            warn!(%amount, "ignoring incentives that would overflow the total");
            return;
        }
        self.incentives = amount;
    }

    /// Calculates the total salary: base salary plus incentives.
    ///
    /// The guarded setters keep the pair's sum representable, so the
    /// addition never overflows.
    pub fn calculate_salary(&self) -> Decimal {
        self.base_salary + self.incentives
    }

    /// Returns the details line: name and base salary.
    pub fn details(&self) -> String {
        format!("Name: {}, Base Salary: ₹{}", self.name, self.base_salary)
    }
}

/// An employee record as stored on the roster.
///
/// This is a closed sum over the two concrete kinds; salary calculation
/// and detail rendering dispatch to the wrapped record. Adding a new kind
/// means adding a variant here and handling it in the match arms below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Employee {
    /// A developer, paid base salary plus bonus.
    Developer(Developer),
    /// A manager, paid base salary plus incentives.
    Manager(Manager),
}

impl Employee {
    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        match self {
            Employee::Developer(developer) => developer.name(),
            Employee::Manager(manager) => manager.name(),
        }
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        match self {
            Employee::Developer(developer) => developer.base_salary(),
            Employee::Manager(manager) => manager.base_salary(),
        }
    }

    /// Calculates the total salary for the wrapped record.
    pub fn calculate_salary(&self) -> Decimal {
        match self {
            Employee::Developer(developer) => developer.calculate_salary(),
            Employee::Manager(manager) => manager.calculate_salary(),
        }
    }

    /// Returns the details line: name and base salary.
    pub fn details(&self) -> String {
        match self {
            Employee::Developer(developer) => developer.details(),
            Employee::Manager(manager) => manager.details(),
        }
    }
}

impl From<Developer> for Employee {
    fn from(developer: Developer) -> Self {
        Employee::Developer(developer)
    }
}

impl From<Manager> for Employee {
    fn from(manager: Manager) -> Self {
        Employee::Manager(manager)
    }
}
