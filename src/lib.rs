//! # HR Domain
//!
//! An employee management domain model: validated entities, aggregates, and
//! JSON/CSV reporting.
//!
//! The building blocks, leaves first:
//! - **Validation**: pure field validators every constructor and setter
//!   funnels through, so invalid values never reach stored state
//! - **Employee**: a role-variant entity (plain employee, manager, developer,
//!   salesperson), each computing its salary differently
//! - **Comparators**: named total-order comparisons for external sorting
//! - **Roster**: one ordered, duplicate-free-by-id membership component,
//!   shared by departments (ownership) and project teams (aggregation)
//! - **Department** / **Project**: named rosters with lookup, aggregation,
//!   and serialization; projects add identity, deadline, and status
//! - **Company**: the aggregate root with cross-cutting queries (global
//!   search, transfers, overload detection, payroll cost, per-department
//!   stats) and file export
//! - **Factory / Builder**: explicit per-variant construction boundaries for
//!   loosely-typed input
//! - **Storage**: an explicitly passed data-directory handle for JSON dumps
//!   and CSV reports (`data/json/...`, `data/csv/...`)
//!
//! Everything is single-threaded and synchronous; all failures surface as
//! [`DomainError`] to the immediate caller, and mutating operations either
//! fully succeed or leave state unchanged.
//!
//! ## Example
//!
//! ```rust
//! use hr_domain::{Company, Department, Employee, Seniority};
//!
//! # fn main() -> hr_domain::DomainResult<()> {
//! let mut company = Company::new("TechInnovations")?;
//! company.add_department(Department::new("Development")?)?;
//!
//! company.add_employee(
//!     Employee::manager(1, "Olena", "Development", 7000.0, 2000.0)?,
//!     "Development",
//! )?;
//! company.add_employee(
//!     Employee::developer(
//!         2,
//!         "Taras",
//!         "Development",
//!         5000.0,
//!         vec!["Python".to_string(), "SQL".to_string()],
//!         Seniority::Senior,
//!     )?,
//!     "Development",
//! )?;
//!
//! assert_eq!(company.calculate_total_monthly_cost(), 19000.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod company;
pub mod comparators;
mod department;
mod employee;
mod errors;
mod factory;
mod identifiers;
mod project;
mod roster;
mod storage;
pub mod validation;

pub use builder::EmployeeBuilder;
pub use company::{Company, DepartmentStats, ProjectBudgetAnalysis};
pub use department::Department;
pub use employee::{Employee, EmployeeKind, EmployeeRole, Seniority};
pub use errors::{DomainError, DomainResult};
pub use factory::{
    CompanyFactory, DeveloperParams, EmployeeParams, ManagerParams, ProjectParams,
    SalesCompanyFactory, SalespersonParams, TechCompanyFactory,
};
pub use identifiers::{EmployeeId, ProjectId};
pub use project::{Project, ProjectStatus};
pub use roster::Roster;
pub use storage::DataDir;
