//! Step-by-step employee construction
//!
//! [`EmployeeBuilder`] collects fields fluently and dispatches on the chosen
//! [`EmployeeKind`] at `build()`. The four universal fields (id, name,
//! department, base salary) must be set or `build()` fails; variant fields
//! fall back to defaults where a valid default exists (empty tech stack,
//! junior seniority, zero sales volume). A manager's bonus has no valid
//! default and must be set; an unset commission rate defaults to zero and is
//! then rejected by the (0, 1] rate validation.

use crate::employee::{Employee, EmployeeKind, Seniority};
use crate::errors::{DomainError, DomainResult};

/// Fluent builder for every employee variant
///
/// ```rust
/// use hr_domain::{EmployeeBuilder, EmployeeKind};
///
/// let manager = EmployeeBuilder::new()
///     .kind(EmployeeKind::Manager)
///     .id(1)
///     .name("Olena")
///     .department("Development")
///     .base_salary(7000.0)
///     .bonus(2000.0)
///     .build()
///     .unwrap();
/// assert_eq!(manager.calculate_salary(), 9000.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    kind: Option<EmployeeKind>,
    id: Option<u32>,
    name: Option<String>,
    department: Option<String>,
    base_salary: Option<f64>,
    bonus: Option<f64>,
    tech_stack: Option<Vec<String>>,
    seniority: Option<Seniority>,
    commission_rate: Option<f64>,
    sales_volume: Option<f64>,
}

impl EmployeeBuilder {
    /// Start an empty builder; the variant defaults to a plain employee
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the employee variant to build
    pub fn kind(mut self, kind: EmployeeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the employee id (required)
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the name (required)
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Set the department label (required)
    pub fn department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    /// Set the base salary (required)
    pub fn base_salary(mut self, base_salary: f64) -> Self {
        self.base_salary = Some(base_salary);
        self
    }

    /// Set a manager's bonus
    pub fn bonus(mut self, bonus: f64) -> Self {
        self.bonus = Some(bonus);
        self
    }

    /// Set a developer's tech stack
    pub fn tech_stack(mut self, tech_stack: Vec<String>) -> Self {
        self.tech_stack = Some(tech_stack);
        self
    }

    /// Set a developer's seniority level
    pub fn seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = Some(seniority);
        self
    }

    /// Set a salesperson's commission rate
    pub fn commission_rate(mut self, commission_rate: f64) -> Self {
        self.commission_rate = Some(commission_rate);
        self
    }

    /// Set a salesperson's sales volume
    pub fn sales_volume(mut self, sales_volume: f64) -> Self {
        self.sales_volume = Some(sales_volume);
        self
    }

    fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
        value.ok_or_else(|| DomainError::validation(format!("{field} must be set before build")))
    }

    /// Dispatch on the chosen kind and construct the validated employee
    pub fn build(self) -> DomainResult<Employee> {
        let id = Self::required(self.id, "id")?;
        let name = Self::required(self.name, "name")?;
        let department = Self::required(self.department, "department")?;
        let base_salary = Self::required(self.base_salary, "base salary")?;

        match self.kind.unwrap_or(EmployeeKind::Employee) {
            EmployeeKind::Employee => Employee::staff(id, &name, &department, base_salary),
            EmployeeKind::Manager => Employee::manager(
                id,
                &name,
                &department,
                base_salary,
                Self::required(self.bonus, "bonus")?,
            ),
            EmployeeKind::Developer => Employee::developer(
                id,
                &name,
                &department,
                base_salary,
                self.tech_stack.unwrap_or_default(),
                self.seniority.unwrap_or(Seniority::Junior),
            ),
            EmployeeKind::Salesperson => Employee::salesperson(
                id,
                &name,
                &department,
                base_salary,
                self.commission_rate.unwrap_or(0.0),
                self.sales_volume.unwrap_or(0.0),
            ),
        }
    }
}
