//! Department entity: a named, ordered roster of employees

use crate::employee::{Employee, EmployeeKind};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::EmployeeId;
use crate::roster::Roster;
use crate::storage::DataDir;
use crate::validation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A department with an ordered, duplicate-free employee roster
///
/// Serializes as `{"name": ..., "employees": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "DepartmentRecord", try_from = "DepartmentRecord")]
pub struct Department {
    name: String,
    roster: Roster,
}

impl Department {
    /// Create an empty department with a validated name
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validation::non_empty_string(name, "department name")?,
            roster: Roster::new(),
        })
    }

    /// The department's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the department
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validation::non_empty_string(name, "department name")?;
        Ok(())
    }

    /// Add an employee; fails on a duplicate id, leaving the roster unchanged
    pub fn add_employee(&mut self, employee: Employee) -> DomainResult<()> {
        self.roster.add(employee)
    }

    /// Remove an employee by id, returning it; fails if absent
    pub fn remove_employee(&mut self, id: EmployeeId) -> DomainResult<Employee> {
        self.roster.remove(id)
    }

    /// Look up an employee by id
    pub fn find_employee_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.roster.find(id)
    }

    /// The department's roster
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of employees in the department
    pub fn size(&self) -> usize {
        self.roster.size()
    }

    /// Sum of computed salaries over the roster
    pub fn calculate_total_salary(&self) -> f64 {
        self.roster.total_salary()
    }

    /// Employee count per concrete kind
    pub fn get_employee_count_by_type(&self) -> IndexMap<EmployeeKind, usize> {
        self.roster.count_by_kind()
    }

    /// Save the department as `{name, employees}` under `<data>/json`
    pub fn save_to_file(&self, data: &DataDir, filename: &str) -> DomainResult<()> {
        data.write_json(filename, self)
    }

    /// Load a department saved with [`Department::save_to_file`]
    pub fn load_from_file(data: &DataDir, filename: &str) -> DomainResult<Self> {
        data.read_json(filename)
    }
}

/// Wire shape of a department
#[derive(Debug, Serialize, Deserialize)]
struct DepartmentRecord {
    name: String,
    employees: Roster,
}

impl From<Department> for DepartmentRecord {
    fn from(dept: Department) -> Self {
        Self {
            name: dept.name,
            employees: dept.roster,
        }
    }
}

impl TryFrom<DepartmentRecord> for Department {
    type Error = DomainError;

    fn try_from(record: DepartmentRecord) -> DomainResult<Self> {
        Ok(Self {
            name: validation::non_empty_string(&record.name, "department name")?,
            roster: record.employees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Seniority;

    fn dept_with_two() -> Department {
        let mut dept = Department::new("Development").unwrap();
        dept.add_employee(Employee::manager(1, "Olena", "Development", 7000.0, 2000.0).unwrap())
            .unwrap();
        dept.add_employee(
            Employee::developer(
                2,
                "Taras",
                "Development",
                5000.0,
                vec!["Python".to_string(), "SQL".to_string()],
                Seniority::Senior,
            )
            .unwrap(),
        )
        .unwrap();
        dept
    }

    #[test]
    fn name_is_validated() {
        assert!(Department::new("  ").is_err());
        let mut dept = Department::new("QA").unwrap();
        assert!(dept.set_name("").is_err());
        assert_eq!(dept.name(), "QA");
    }

    #[test]
    fn totals_and_counts() {
        let dept = dept_with_two();
        assert_eq!(dept.calculate_total_salary(), 19000.0);
        let counts = dept.get_employee_count_by_type();
        assert_eq!(counts[&EmployeeKind::Manager], 1);
        assert_eq!(counts[&EmployeeKind::Developer], 1);
        assert_eq!(dept.size(), 2);
    }

    #[test]
    fn duplicate_add_leaves_roster_unchanged() {
        let mut dept = dept_with_two();
        let dup = Employee::staff(1, "Impostor", "Development", 100.0).unwrap();
        assert!(dept.add_employee(dup).is_err());
        assert_eq!(dept.size(), 2);
        let id = EmployeeId::new(1).unwrap();
        assert_eq!(dept.find_employee_by_id(id).unwrap().name(), "Olena");
    }

    #[test]
    fn json_round_trip() {
        let dept = dept_with_two();
        let json = serde_json::to_string(&dept).unwrap();
        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dept);
    }

    #[test]
    fn file_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let data = DataDir::new(tmp.path());
        let dept = dept_with_two();
        dept.save_to_file(&data, "development.json").unwrap();
        let back = Department::load_from_file(&data, "development.json").unwrap();
        assert_eq!(back, dept);
    }
}
