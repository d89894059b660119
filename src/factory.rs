//! Construction boundaries: per-variant parameter structs and company factories
//!
//! Loosely-typed input (JSON parameter bags, form data) deserializes into an
//! explicit params struct per employee variant, so a missing required field
//! fails at the boundary with a decode error instead of deep inside a
//! constructor. `build()` then runs the same validation as the entity
//! constructors.

use crate::company::Company;
use crate::department::Department;
use crate::employee::{Employee, Seniority};
use crate::errors::DomainResult;
use crate::project::{Project, ProjectStatus};
use serde::Deserialize;

/// Parameters for a plain employee
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeParams {
    /// Employee id, positive
    pub id: u32,
    /// Employee name
    pub name: String,
    /// Department label
    pub department: String,
    /// Base salary, non-negative
    pub base_salary: f64,
}

impl EmployeeParams {
    /// Construct the validated employee
    pub fn build(&self) -> DomainResult<Employee> {
        Employee::staff(self.id, &self.name, &self.department, self.base_salary)
    }
}

/// Parameters for a manager
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerParams {
    /// Employee id, positive
    pub id: u32,
    /// Employee name
    pub name: String,
    /// Department label
    pub department: String,
    /// Base salary, non-negative
    pub base_salary: f64,
    /// Monthly bonus, positive
    pub bonus: f64,
}

impl ManagerParams {
    /// Construct the validated manager
    pub fn build(&self) -> DomainResult<Employee> {
        Employee::manager(
            self.id,
            &self.name,
            &self.department,
            self.base_salary,
            self.bonus,
        )
    }
}

/// Parameters for a developer
#[derive(Debug, Clone, Deserialize)]
pub struct DeveloperParams {
    /// Employee id, positive
    pub id: u32,
    /// Employee name
    pub name: String,
    /// Department label
    pub department: String,
    /// Base salary, non-negative
    pub base_salary: f64,
    /// Technologies, each non-empty
    pub tech_stack: Vec<String>,
    /// Seniority level
    pub seniority_level: Seniority,
}

impl DeveloperParams {
    /// Construct the validated developer
    pub fn build(&self) -> DomainResult<Employee> {
        Employee::developer(
            self.id,
            &self.name,
            &self.department,
            self.base_salary,
            self.tech_stack.clone(),
            self.seniority_level,
        )
    }
}

/// Parameters for a salesperson
#[derive(Debug, Clone, Deserialize)]
pub struct SalespersonParams {
    /// Employee id, positive
    pub id: u32,
    /// Employee name
    pub name: String,
    /// Department label
    pub department: String,
    /// Base salary, non-negative
    pub base_salary: f64,
    /// Commission rate in (0, 1]
    pub commission_rate: f64,
    /// Sales volume, non-negative
    pub sales_volume: f64,
}

impl SalespersonParams {
    /// Construct the validated salesperson
    pub fn build(&self) -> DomainResult<Employee> {
        Employee::salesperson(
            self.id,
            &self.name,
            &self.department,
            self.base_salary,
            self.commission_rate,
            self.sales_volume,
        )
    }
}

/// Parameters for a project, statuses and dates still in string form
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectParams {
    /// Project id, positive
    pub project_id: u32,
    /// Project name
    pub name: String,
    /// Project description
    pub description: String,
    /// Deadline, ISO `YYYY-MM-DD`
    pub deadline: String,
    /// Status name; defaults to `planning`
    #[serde(default = "ProjectParams::default_status")]
    pub status: String,
}

impl ProjectParams {
    fn default_status() -> String {
        "planning".to_string()
    }

    /// Parse the status and construct the validated project
    pub fn build(&self) -> DomainResult<Project> {
        let status: ProjectStatus = self.status.parse()?;
        Project::new(
            self.project_id,
            &self.name,
            &self.description,
            &self.deadline,
            status,
        )
    }
}

/// Abstract factory assembling a pre-seeded company
pub trait CompanyFactory {
    /// Create a company with this factory's standard departments and projects
    fn create_company(&self, name: &str) -> DomainResult<Company>;
}

/// Seeds a technology company: Development and QA departments plus two
/// platform projects
#[derive(Debug, Clone, Copy, Default)]
pub struct TechCompanyFactory;

impl CompanyFactory for TechCompanyFactory {
    fn create_company(&self, name: &str) -> DomainResult<Company> {
        let mut company = Company::new(name)?;
        company.add_department(Department::new("Development")?)?;
        company.add_department(Department::new("QA")?)?;
        company.add_project(Project::new(
            101,
            "AI Platform",
            "AI system development",
            "2026-12-31",
            ProjectStatus::Planning,
        )?)?;
        company.add_project(Project::new(
            102,
            "Web Portal",
            "Customer-facing web portal",
            "2026-09-30",
            ProjectStatus::Planning,
        )?)?;
        Ok(company)
    }
}

/// Seeds a sales company: Sales and Marketing departments plus two
/// commerce projects
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesCompanyFactory;

impl CompanyFactory for SalesCompanyFactory {
    fn create_company(&self, name: &str) -> DomainResult<Company> {
        let mut company = Company::new(name)?;
        company.add_department(Department::new("Sales")?)?;
        company.add_department(Department::new("Marketing")?)?;
        company.add_project(Project::new(
            201,
            "Vending",
            "Vending network rollout",
            "2026-12-31",
            ProjectStatus::Planning,
        )?)?;
        company.add_project(Project::new(
            202,
            "Marketplace",
            "Online marketplace launch",
            "2026-09-30",
            ProjectStatus::Planning,
        )?)?;
        Ok(company)
    }
}
