//! Project entity with a team roster, deadline, and status

use crate::employee::Employee;
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::{EmployeeId, ProjectId};
use crate::roster::Roster;
use crate::storage::DataDir;
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Not yet started
    Planning,
    /// In progress
    Active,
    /// Finished successfully
    Completed,
    /// Abandoned
    Cancelled,
}

impl ProjectStatus {
    /// Lowercase name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the project can no longer change
    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }
}

impl FromStr for ProjectStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim() {
            "planning" => Ok(ProjectStatus::Planning),
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project with its own identity and an aggregated team roster
///
/// The team holds employees whose lifetime is independent of the project;
/// membership follows the same uniqueness rules as a department roster.
/// Serializes as `{"project_id", "name", "description", "deadline",
/// "status", "team"}` with the deadline as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ProjectRecord", try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    deadline: NaiveDate,
    status: ProjectStatus,
    team: Roster,
}

impl Project {
    /// Create a project with an empty team
    ///
    /// The deadline is an ISO `YYYY-MM-DD` string; a malformed date fails
    /// validation.
    pub fn new(
        id: u32,
        name: &str,
        description: &str,
        deadline: &str,
        status: ProjectStatus,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: ProjectId::new(id)?,
            name: validation::non_empty_string(name, "project name")?,
            description: validation::non_empty_string(description, "project description")?,
            deadline: validation::deadline(deadline)?,
            status,
            team: Roster::new(),
        })
    }

    /// The project's id
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// The project's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the project
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validation::non_empty_string(name, "project name")?;
        Ok(())
    }

    /// The project's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Change the description
    pub fn set_description(&mut self, description: &str) -> DomainResult<()> {
        self.description = validation::non_empty_string(description, "project description")?;
        Ok(())
    }

    /// The project's deadline
    pub fn deadline(&self) -> NaiveDate {
        self.deadline
    }

    /// Change the deadline from an ISO `YYYY-MM-DD` string
    pub fn set_deadline(&mut self, deadline: &str) -> DomainResult<()> {
        self.deadline = validation::deadline(deadline)?;
        Ok(())
    }

    /// The project's status
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Change the status
    pub fn change_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }

    /// The team roster
    pub fn team(&self) -> &Roster {
        &self.team
    }

    /// Add a team member; fails on a duplicate id, leaving the team unchanged
    pub fn add_team_member(&mut self, employee: Employee) -> DomainResult<()> {
        self.team.add(employee)
    }

    /// Remove a team member by id, returning it; fails if absent
    pub fn remove_team_member(&mut self, id: EmployeeId) -> DomainResult<Employee> {
        self.team.remove(id)
    }

    /// Look up a team member by id
    pub fn find_team_member(&self, id: EmployeeId) -> Option<&Employee> {
        self.team.find(id)
    }

    /// Number of team members
    pub fn team_size(&self) -> usize {
        self.team.size()
    }

    /// Sum of computed salaries over the team
    pub fn calculate_team_budget(&self) -> f64 {
        self.team.total_salary()
    }

    /// Multi-line human-readable summary of the project and its team
    pub fn info(&self) -> String {
        let team = self
            .team
            .iter()
            .map(Employee::info)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Project: {}\nId: {}\nDescription: {}\nDeadline: {}\nStatus: {}\nTeam:\n{}",
            self.name, self.id, self.description, self.deadline, self.status, team
        )
    }

    /// Save the project as a JSON document under `<data>/json`
    pub fn save_to_file(&self, data: &DataDir, filename: &str) -> DomainResult<()> {
        data.write_json(filename, self)
    }

    /// Load a project saved with [`Project::save_to_file`]
    pub fn load_from_file(data: &DataDir, filename: &str) -> DomainResult<Self> {
        data.read_json(filename)
    }
}

/// Wire shape of a project
#[derive(Debug, Serialize, Deserialize)]
struct ProjectRecord {
    project_id: ProjectId,
    name: String,
    description: String,
    deadline: NaiveDate,
    status: ProjectStatus,
    team: Roster,
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            project_id: project.id,
            name: project.name,
            description: project.description,
            deadline: project.deadline,
            status: project.status,
            team: project.team,
        }
    }
}

impl TryFrom<ProjectRecord> for Project {
    type Error = DomainError;

    fn try_from(record: ProjectRecord) -> DomainResult<Self> {
        Ok(Self {
            id: record.project_id,
            name: validation::non_empty_string(&record.name, "project name")?,
            description: validation::non_empty_string(&record.description, "project description")?,
            deadline: record.deadline,
            status: record.status,
            team: record.team,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new(
            101,
            "AI Platform",
            "Build the AI platform",
            "2026-12-31",
            ProjectStatus::Planning,
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_fields() {
        assert!(Project::new(0, "P", "D", "2026-01-01", ProjectStatus::Planning).is_err());
        assert!(Project::new(101, "", "D", "2026-01-01", ProjectStatus::Planning).is_err());
        assert!(Project::new(101, "P", "", "2026-01-01", ProjectStatus::Planning).is_err());
        assert!(Project::new(101, "P", "D", "soon", ProjectStatus::Planning).is_err());
    }

    #[test]
    fn status_parses_or_fails_with_invalid_status() {
        assert_eq!(
            "active".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Active
        );
        let err = "invalid_status".parse::<ProjectStatus>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatus(s) if s == "invalid_status"));
    }

    #[test]
    fn terminal_statuses() {
        assert!(!ProjectStatus::Planning.is_terminal());
        assert!(!ProjectStatus::Active.is_terminal());
        assert!(ProjectStatus::Completed.is_terminal());
        assert!(ProjectStatus::Cancelled.is_terminal());
    }

    #[test]
    fn team_membership_is_unique_by_id() {
        let mut proj = project();
        proj.add_team_member(Employee::staff(1, "A", "QA", 100.0).unwrap())
            .unwrap();
        let err = proj
            .add_team_member(Employee::staff(1, "B", "QA", 200.0).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId { .. }));
        assert_eq!(proj.team_size(), 1);
    }

    #[test]
    fn budget_sums_computed_salaries() {
        let mut proj = project();
        proj.add_team_member(Employee::manager(1, "A", "Dev", 7000.0, 2000.0).unwrap())
            .unwrap();
        proj.add_team_member(
            Employee::salesperson(3, "C", "Sales", 4000.0, 0.15, 50000.0).unwrap(),
        )
        .unwrap();
        assert_eq!(proj.calculate_team_budget(), 20500.0);
    }

    #[test]
    fn serializes_with_iso_deadline_and_lowercase_status() {
        let value = serde_json::to_value(project()).unwrap();
        assert_eq!(value["project_id"], 101);
        assert_eq!(value["deadline"], "2026-12-31");
        assert_eq!(value["status"], "planning");
        assert!(value["team"].as_array().unwrap().is_empty());
    }

    #[test]
    fn json_round_trip_with_team() {
        let mut proj = project();
        proj.change_status(ProjectStatus::Active);
        proj.add_team_member(Employee::staff(5, "E", "QA", 1000.0).unwrap())
            .unwrap();
        let json = serde_json::to_string(&proj).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, proj);
    }

    #[test]
    fn info_lists_the_team() {
        let mut proj = project();
        proj.add_team_member(Employee::staff(5, "Eva", "QA", 1000.0).unwrap())
            .unwrap();
        let info = proj.info();
        assert!(info.contains("Project: AI Platform"));
        assert!(info.contains("Status: planning"));
        assert!(info.contains("Eva"));
    }
}
