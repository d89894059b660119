//! Company aggregate root composing departments and projects
//!
//! The company owns its departments and projects exclusively. Employee ids
//! are unique company-wide at add-time, project ids are unique across the
//! company, and a department or project with members cannot be removed.
//! Cross-cutting queries (global search, overload detection, payroll cost,
//! per-department stats) and file export all live here.

use crate::comparators;
use crate::department::Department;
use crate::employee::{Employee, EmployeeKind};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{EmployeeId, ProjectId};
use crate::project::{Project, ProjectStatus};
use crate::storage::DataDir;
use crate::validation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Per-department snapshot returned by [`Company::get_department_stats`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStats {
    /// Number of employees in the department
    pub employee_count: usize,
    /// Employee count per concrete kind
    pub employee_types: IndexMap<EmployeeKind, usize>,
    /// Sum of computed salaries over the department
    pub total_salary: f64,
}

/// Summary returned by [`Company::get_project_budget_analysis`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectBudgetAnalysis {
    /// Number of projects in the company
    pub total_projects: usize,
    /// Sum of every project's team salary cost
    pub total_budget: f64,
}

/// The company aggregate
///
/// Serializes as `{"name": ..., "departments": [...], "projects": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "CompanyRecord", try_from = "CompanyRecord")]
pub struct Company {
    name: String,
    departments: Vec<Department>,
    projects: Vec<Project>,
}

impl Company {
    /// Create an empty company with a validated name
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validation::non_empty_string(name, "company name")?,
            departments: Vec::new(),
            projects: Vec::new(),
        })
    }

    /// The company's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the company
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validation::non_empty_string(name, "company name")?;
        Ok(())
    }

    /// The departments in registration order
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// The projects in registration order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn department_index(&self, name: &str) -> Option<usize> {
        self.departments.iter().position(|d| d.name() == name)
    }

    fn project_index(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id() == id)
    }

    /// Register a department; the name must be unique within the company
    /// so that removal and transfers by name stay unambiguous
    pub fn add_department(&mut self, department: Department) -> DomainResult<()> {
        if self.department_index(department.name()).is_some() {
            return Err(DomainError::validation(format!(
                "department {:?} already exists",
                department.name()
            )));
        }
        self.departments.push(department);
        Ok(())
    }

    /// Remove a department by name; fails if it is not registered or if its
    /// roster is non-empty (employees would be orphaned)
    pub fn remove_department(&mut self, name: &str) -> DomainResult<Department> {
        let index = self
            .department_index(name)
            .ok_or_else(|| DomainError::DepartmentNotFound {
                name: name.to_string(),
            })?;
        if !self.departments[index].roster().is_empty() {
            return Err(DomainError::validation(format!(
                "cannot remove department {name:?}: it still has employees"
            )));
        }
        Ok(self.departments.remove(index))
    }

    /// Register a project; fails on a duplicate project id
    pub fn add_project(&mut self, project: Project) -> DomainResult<()> {
        if self.project_index(project.id()).is_some() {
            return Err(DomainError::DuplicateId {
                entity: "project",
                id: project.id().get(),
            });
        }
        self.projects.push(project);
        Ok(())
    }

    /// Remove a project by id; fails if it is not registered or if its team
    /// is non-empty
    pub fn remove_project(&mut self, id: ProjectId) -> DomainResult<Project> {
        let index = self
            .project_index(id)
            .ok_or(DomainError::ProjectNotFound { id: id.get() })?;
        if !self.projects[index].team().is_empty() {
            return Err(DomainError::validation(format!(
                "cannot remove project {id}: its team is not empty"
            )));
        }
        Ok(self.projects.remove(index))
    }

    /// Hire an employee into a department, enforcing company-wide employee
    /// id uniqueness before the department add
    pub fn add_employee(&mut self, employee: Employee, department: &str) -> DomainResult<()> {
        if self.find_employee_by_id(employee.id()).is_some() {
            return Err(DomainError::DuplicateId {
                entity: "employee",
                id: employee.id().get(),
            });
        }
        let index = self
            .department_index(department)
            .ok_or_else(|| DomainError::DepartmentNotFound {
                name: department.to_string(),
            })?;
        self.departments[index].add_employee(employee)
    }

    /// Every employee in the company, deduplicated by id
    ///
    /// Order is department registration order, then roster insertion order;
    /// the first occurrence of an id wins.
    pub fn get_all_employees(&self) -> Vec<&Employee> {
        let mut seen = HashSet::new();
        let mut all = Vec::new();
        for department in &self.departments {
            for employee in department.roster() {
                if seen.insert(employee.id()) {
                    all.push(employee);
                }
            }
        }
        all
    }

    /// Look up an employee anywhere in the company
    pub fn find_employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.departments
            .iter()
            .find_map(|d| d.find_employee_by_id(id))
    }

    /// Move an employee between two registered departments
    ///
    /// Fails if either department is unknown or the employee is not in the
    /// source department. The employee is added to the target before being
    /// removed from the source, so a duplicate-id failure in the target
    /// leaves both departments unchanged.
    pub fn transfer_employee(
        &mut self,
        id: EmployeeId,
        from_department: &str,
        to_department: &str,
    ) -> DomainResult<()> {
        let from = self
            .department_index(from_department)
            .ok_or_else(|| DomainError::DepartmentNotFound {
                name: from_department.to_string(),
            })?;
        let to = self
            .department_index(to_department)
            .ok_or_else(|| DomainError::DepartmentNotFound {
                name: to_department.to_string(),
            })?;
        let mut employee = self.departments[from]
            .find_employee_by_id(id)
            .cloned()
            .ok_or(DomainError::EmployeeNotFound { id: id.get() })?;
        employee.set_department(to_department)?;
        self.departments[to].add_employee(employee)?;
        self.departments[from].remove_employee(id)?;
        Ok(())
    }

    /// Sum of computed salaries over all (deduplicated) employees
    pub fn calculate_total_monthly_cost(&self) -> f64 {
        comparators::sum_salaries(self.get_all_employees())
    }

    /// Per-department employee counts, kind breakdown, and salary totals
    pub fn get_department_stats(&self) -> IndexMap<String, DepartmentStats> {
        self.departments
            .iter()
            .map(|d| {
                (
                    d.name().to_string(),
                    DepartmentStats {
                        employee_count: d.size(),
                        employee_types: d.get_employee_count_by_type(),
                        total_salary: d.calculate_total_salary(),
                    },
                )
            })
            .collect()
    }

    /// Project count and the combined salary cost of every project team
    pub fn get_project_budget_analysis(&self) -> ProjectBudgetAnalysis {
        ProjectBudgetAnalysis {
            total_projects: self.projects.len(),
            total_budget: self
                .projects
                .iter()
                .map(Project::calculate_team_budget)
                .sum(),
        }
    }

    fn overloaded_ids(&self) -> HashSet<EmployeeId> {
        let mut counts: IndexMap<EmployeeId, usize> = IndexMap::new();
        for project in &self.projects {
            for member in project.team() {
                *counts.entry(member.id()).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n >= 2)
            .map(|(id, _)| id)
            .collect()
    }

    /// Employees whose id appears in at least two project teams
    pub fn find_overloaded_employees(&self) -> Vec<&Employee> {
        let overloaded = self.overloaded_ids();
        self.get_all_employees()
            .into_iter()
            .filter(|e| overloaded.contains(&e.id()))
            .collect()
    }

    /// Whether an employee is free to take on another project, i.e. not in
    /// the overloaded set
    pub fn check_employee_availability(&self, id: EmployeeId) -> bool {
        !self.overloaded_ids().contains(&id)
    }

    /// Put an employee on a project's team
    ///
    /// Fails if either id is unknown; a duplicate team membership fails the
    /// same way as [`Project::add_team_member`].
    pub fn assign_employee_to_project(
        &mut self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> DomainResult<()> {
        let employee = self
            .find_employee_by_id(employee_id)
            .cloned()
            .ok_or(DomainError::EmployeeNotFound {
                id: employee_id.get(),
            })?;
        let index = self
            .project_index(project_id)
            .ok_or(DomainError::ProjectNotFound {
                id: project_id.get(),
            })?;
        self.projects[index].add_team_member(employee)
    }

    /// Take an employee off a project's team
    ///
    /// Fails if the project is unknown or the employee is not on its team.
    pub fn remove_employee_from_project(
        &mut self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> DomainResult<()> {
        let index = self
            .project_index(project_id)
            .ok_or(DomainError::ProjectNotFound {
                id: project_id.get(),
            })?;
        self.projects[index].remove_team_member(employee_id)?;
        Ok(())
    }

    /// Projects currently in the given status, in registration order
    pub fn get_projects_by_status(&self, status: ProjectStatus) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.status() == status)
            .collect()
    }

    /// Save the company as `{name, departments, projects}` under `<data>/json`
    pub fn save_to_file(&self, data: &DataDir, filename: &str) -> DomainResult<()> {
        data.write_json(filename, self)
    }

    /// Load a company saved with [`Company::save_to_file`]
    pub fn load_from_file(data: &DataDir, filename: &str) -> DomainResult<Self> {
        data.read_json(filename)
    }

    /// Export the employee report under `<data>/csv`
    ///
    /// Columns: ID, Name, Department, Type, BaseSalary, TotalSalary.
    pub fn export_employees_csv(&self, data: &DataDir, filename: &str) -> DomainResult<()> {
        let rows = self
            .get_all_employees()
            .into_iter()
            .map(|e| {
                vec![
                    e.id().to_string(),
                    e.name().to_string(),
                    e.department().to_string(),
                    e.kind().to_string(),
                    e.base_salary().to_string(),
                    e.calculate_salary().to_string(),
                ]
            })
            .collect::<Vec<_>>();
        data.write_csv(
            filename,
            &["ID", "Name", "Department", "Type", "BaseSalary", "TotalSalary"],
            &rows,
        )
    }

    /// Export the project report under `<data>/csv`
    ///
    /// Columns: ProjectID, Name, Status, Deadline, TeamSize, TeamBudget.
    pub fn export_projects_csv(&self, data: &DataDir, filename: &str) -> DomainResult<()> {
        let rows = self
            .projects
            .iter()
            .map(|p| {
                vec![
                    p.id().to_string(),
                    p.name().to_string(),
                    p.status().to_string(),
                    p.deadline().to_string(),
                    p.team_size().to_string(),
                    p.calculate_team_budget().to_string(),
                ]
            })
            .collect::<Vec<_>>();
        data.write_csv(
            filename,
            &["ProjectID", "Name", "Status", "Deadline", "TeamSize", "TeamBudget"],
            &rows,
        )
    }
}

/// Wire shape of a company
#[derive(Debug, Serialize, Deserialize)]
struct CompanyRecord {
    name: String,
    departments: Vec<Department>,
    projects: Vec<Project>,
}

impl From<Company> for CompanyRecord {
    fn from(company: Company) -> Self {
        Self {
            name: company.name,
            departments: company.departments,
            projects: company.projects,
        }
    }
}

impl TryFrom<CompanyRecord> for Company {
    type Error = DomainError;

    fn try_from(record: CompanyRecord) -> DomainResult<Self> {
        let mut company = Company::new(&record.name)?;
        for department in record.departments {
            company.add_department(department)?;
        }
        for project in record.projects {
            company.add_project(project)?;
        }
        Ok(company)
    }
}
