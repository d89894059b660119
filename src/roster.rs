//! Ordered, duplicate-free employee membership
//!
//! [`Roster`] is the one membership component in the crate: departments use
//! it for their employees and projects for their teams. Members keep
//! insertion order; identity is the employee id, and a second add of the
//! same id fails without touching the list.

use crate::comparators;
use crate::employee::{Employee, EmployeeKind};
use crate::errors::{DomainError, DomainResult};
use crate::identifiers::EmployeeId;
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// An ordered employee list, unique by employee id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Employee>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member; fails with [`DomainError::DuplicateId`] if an employee
    /// with the same id is already present, leaving the roster unchanged
    pub fn add(&mut self, employee: Employee) -> DomainResult<()> {
        if self.contains(employee.id()) {
            return Err(DomainError::DuplicateId {
                entity: "employee",
                id: employee.id().get(),
            });
        }
        self.members.push(employee);
        Ok(())
    }

    /// Remove the member with the given id, returning it; fails with
    /// [`DomainError::EmployeeNotFound`] if absent
    pub fn remove(&mut self, id: EmployeeId) -> DomainResult<Employee> {
        let index = self
            .members
            .iter()
            .position(|e| e.id() == id)
            .ok_or(DomainError::EmployeeNotFound { id: id.get() })?;
        Ok(self.members.remove(index))
    }

    /// Look up a member by id
    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.members.iter().find(|e| e.id() == id)
    }

    /// Look up a member by id for mutation
    pub fn find_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.members.iter_mut().find(|e| e.id() == id)
    }

    /// Whether an employee with the given id is a member
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.find(id).is_some()
    }

    /// Number of members
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The member at a position in insertion order
    pub fn member_at(&self, index: usize) -> Option<&Employee> {
        self.members.get(index)
    }

    /// Iterate over members in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.members.iter()
    }

    /// Sum of computed salaries over all members
    pub fn total_salary(&self) -> f64 {
        comparators::sum_salaries(&self.members)
    }

    /// Member count per employee kind, keyed by the kind's wire name in
    /// first-seen order
    pub fn count_by_kind(&self) -> IndexMap<EmployeeKind, usize> {
        let mut counts = IndexMap::new();
        for member in &self.members {
            *counts.entry(member.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let members = Vec::<Employee>::deserialize(deserializer)?;
        let mut roster = Roster::new();
        for employee in members {
            roster.add(employee).map_err(D::Error::custom)?;
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: u32, name: &str) -> Employee {
        Employee::staff(id, name, "QA", 1000.0).unwrap()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(staff(3, "C")).unwrap();
        roster.add(staff(1, "A")).unwrap();
        roster.add(staff(2, "B")).unwrap();
        let ids: Vec<u32> = roster.iter().map(|e| e.id().get()).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(roster.member_at(1).unwrap().name(), "A");
    }

    #[test]
    fn duplicate_id_is_rejected_without_mutation() {
        let mut roster = Roster::new();
        roster.add(staff(1, "A")).unwrap();
        let err = roster.add(staff(1, "Other")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::DuplicateId {
                entity: "employee",
                id: 1
            }
        ));
        assert_eq!(roster.size(), 1);
        assert_eq!(roster.find(EmployeeId::new(1).unwrap()).unwrap().name(), "A");
    }

    #[test]
    fn remove_requires_presence() {
        let mut roster = Roster::new();
        roster.add(staff(1, "A")).unwrap();
        let id = EmployeeId::new(1).unwrap();
        let removed = roster.remove(id).unwrap();
        assert_eq!(removed.name(), "A");
        assert!(roster.is_empty());
        assert!(matches!(
            roster.remove(id),
            Err(DomainError::EmployeeNotFound { id: 1 })
        ));
    }

    #[test]
    fn counts_members_by_kind() {
        let mut roster = Roster::new();
        roster.add(staff(1, "A")).unwrap();
        roster
            .add(Employee::manager(2, "B", "QA", 2000.0, 500.0).unwrap())
            .unwrap();
        roster.add(staff(3, "C")).unwrap();
        let counts = roster.count_by_kind();
        assert_eq!(counts[&EmployeeKind::Employee], 2);
        assert_eq!(counts[&EmployeeKind::Manager], 1);
    }

    #[test]
    fn deserialization_rechecks_uniqueness() {
        let json = r#"[
            {"type": "Employee", "id": 1, "name": "A", "department": "QA", "base_salary": 100.0},
            {"type": "Employee", "id": 1, "name": "B", "department": "QA", "base_salary": 200.0}
        ]"#;
        assert!(serde_json::from_str::<Roster>(json).is_err());
    }
}
