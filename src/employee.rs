//! Employee entity with role variants and salary computation
//!
//! An [`Employee`] is an entity identified by [`EmployeeId`]; its identity
//! never changes after construction, while every other field mutates only
//! through re-validating setters. The role variant determines how the
//! computed salary is derived from the base salary.
//!
//! Wire format is the flat mapping described in the crate docs: common
//! fields plus the variant-specific ones, discriminated by a `type` tag.
//! Records without a tag are accepted for compatibility with hand-written
//! fixtures; the variant is then inferred from which keys are present and a
//! data-integrity warning is logged.

use crate::errors::{DomainError, DomainResult};
use crate::identifiers::EmployeeId;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seniority level of a developer
///
/// The level scales the developer's base salary:
///
/// ```rust
/// use hr_domain::Seniority;
///
/// assert_eq!(Seniority::Junior.coefficient(), 1.0);
/// assert_eq!(Seniority::Middle.coefficient(), 1.5);
/// assert_eq!(Seniority::Senior.coefficient(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    /// Entry level
    Junior,
    /// Mid level
    Middle,
    /// Senior level
    Senior,
}

impl Seniority {
    /// Salary multiplier for this level
    pub fn coefficient(self) -> f64 {
        match self {
            Seniority::Junior => 1.0,
            Seniority::Middle => 1.5,
            Seniority::Senior => 2.0,
        }
    }

    /// Lowercase name as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Middle => "middle",
            Seniority::Senior => "senior",
        }
    }
}

impl FromStr for Seniority {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim() {
            "junior" => Ok(Seniority::Junior),
            "middle" => Ok(Seniority::Middle),
            "senior" => Ok(Seniority::Senior),
            other => Err(DomainError::validation(format!(
                "seniority level must be one of junior, middle, senior (got {other:?})"
            ))),
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete employee variant, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeKind {
    /// Plain employee, salary is the base salary
    Employee,
    /// Manager with a fixed bonus
    Manager,
    /// Developer with a tech stack and seniority level
    Developer,
    /// Salesperson on commission
    Salesperson,
}

impl EmployeeKind {
    /// Discriminator string used in serialized records and type counts
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeKind::Employee => "Employee",
            EmployeeKind::Manager => "Manager",
            EmployeeKind::Developer => "Developer",
            EmployeeKind::Salesperson => "Salesperson",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific data of an employee
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeRole {
    /// No extra fields
    Staff,
    /// Fixed monthly bonus on top of the base salary
    Manager {
        /// Bonus amount, positive
        bonus: f64,
    },
    /// Base salary scaled by the seniority coefficient
    Developer {
        /// Technologies the developer works with
        tech_stack: Vec<String>,
        /// Seniority level
        seniority: Seniority,
    },
    /// Base salary plus commission on sales
    Salesperson {
        /// Commission rate in (0, 1]
        commission_rate: f64,
        /// Sales volume, non-negative
        sales_volume: f64,
    },
}

impl EmployeeRole {
    /// The wire discriminator for this role
    pub fn kind(&self) -> EmployeeKind {
        match self {
            EmployeeRole::Staff => EmployeeKind::Employee,
            EmployeeRole::Manager { .. } => EmployeeKind::Manager,
            EmployeeRole::Developer { .. } => EmployeeKind::Developer,
            EmployeeRole::Salesperson { .. } => EmployeeKind::Salesperson,
        }
    }
}

/// An employee entity
///
/// Identity (`id`) is immutable; all other fields mutate through setters
/// that re-run the same validation as construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    base_salary: f64,
    role: EmployeeRole,
}

impl Employee {
    fn with_role(
        id: u32,
        name: &str,
        department: &str,
        base_salary: f64,
        role: EmployeeRole,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: EmployeeId::new(id)?,
            name: validation::non_empty_string(name, "name")?,
            department: validation::non_empty_string(department, "department")?,
            base_salary: validation::non_negative_number(base_salary, "base salary")?,
            role,
        })
    }

    /// Create a plain employee; salary equals the base salary
    pub fn staff(id: u32, name: &str, department: &str, base_salary: f64) -> DomainResult<Self> {
        Self::with_role(id, name, department, base_salary, EmployeeRole::Staff)
    }

    /// Create a manager with a positive bonus
    pub fn manager(
        id: u32,
        name: &str,
        department: &str,
        base_salary: f64,
        bonus: f64,
    ) -> DomainResult<Self> {
        let bonus = validation::positive_number(bonus, "bonus")?;
        Self::with_role(id, name, department, base_salary, EmployeeRole::Manager { bonus })
    }

    /// Create a developer with a tech stack and seniority level
    pub fn developer(
        id: u32,
        name: &str,
        department: &str,
        base_salary: f64,
        tech_stack: Vec<String>,
        seniority: Seniority,
    ) -> DomainResult<Self> {
        let tech_stack = validation::tech_stack(&tech_stack)?;
        Self::with_role(
            id,
            name,
            department,
            base_salary,
            EmployeeRole::Developer { tech_stack, seniority },
        )
    }

    /// Create a salesperson with a commission rate in (0, 1] and a
    /// non-negative sales volume
    pub fn salesperson(
        id: u32,
        name: &str,
        department: &str,
        base_salary: f64,
        commission_rate: f64,
        sales_volume: f64,
    ) -> DomainResult<Self> {
        let commission_rate = validation::commission_rate(commission_rate)?;
        let sales_volume = validation::non_negative_number(sales_volume, "sales volume")?;
        Self::with_role(
            id,
            name,
            department,
            base_salary,
            EmployeeRole::Salesperson { commission_rate, sales_volume },
        )
    }

    /// The employee's id
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// The employee's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the employee
    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validation::non_empty_string(name, "name")?;
        Ok(())
    }

    /// The department label the employee is filed under
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Relabel the employee's department
    pub fn set_department(&mut self, department: &str) -> DomainResult<()> {
        self.department = validation::non_empty_string(department, "department")?;
        Ok(())
    }

    /// The base salary before any role-specific adjustment
    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    /// Change the base salary
    pub fn set_base_salary(&mut self, base_salary: f64) -> DomainResult<()> {
        self.base_salary = validation::non_negative_number(base_salary, "base salary")?;
        Ok(())
    }

    /// The role variant with its data
    pub fn role(&self) -> &EmployeeRole {
        &self.role
    }

    /// The wire discriminator for this employee
    pub fn kind(&self) -> EmployeeKind {
        self.role.kind()
    }

    /// Change a manager's bonus; fails for other variants
    pub fn set_bonus(&mut self, value: f64) -> DomainResult<()> {
        let value = validation::positive_number(value, "bonus")?;
        match &mut self.role {
            EmployeeRole::Manager { bonus } => {
                *bonus = value;
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a manager",
                self.id
            ))),
        }
    }

    /// Replace a developer's tech stack; fails for other variants
    pub fn set_tech_stack(&mut self, value: Vec<String>) -> DomainResult<()> {
        let value = validation::tech_stack(&value)?;
        match &mut self.role {
            EmployeeRole::Developer { tech_stack, .. } => {
                *tech_stack = value;
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a developer",
                self.id
            ))),
        }
    }

    /// Append one technology to a developer's stack; fails for other variants
    pub fn add_technology(&mut self, tech: &str) -> DomainResult<()> {
        let tech = validation::non_empty_string(tech, "technology")?;
        match &mut self.role {
            EmployeeRole::Developer { tech_stack, .. } => {
                tech_stack.push(tech);
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a developer",
                self.id
            ))),
        }
    }

    /// Change a developer's seniority level; fails for other variants
    pub fn set_seniority(&mut self, level: Seniority) -> DomainResult<()> {
        match &mut self.role {
            EmployeeRole::Developer { seniority, .. } => {
                *seniority = level;
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a developer",
                self.id
            ))),
        }
    }

    /// Change a salesperson's commission rate; fails for other variants
    pub fn set_commission_rate(&mut self, value: f64) -> DomainResult<()> {
        let value = validation::commission_rate(value)?;
        match &mut self.role {
            EmployeeRole::Salesperson { commission_rate, .. } => {
                *commission_rate = value;
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a salesperson",
                self.id
            ))),
        }
    }

    /// Change a salesperson's sales volume; fails for other variants
    pub fn set_sales_volume(&mut self, value: f64) -> DomainResult<()> {
        let value = validation::non_negative_number(value, "sales volume")?;
        match &mut self.role {
            EmployeeRole::Salesperson { sales_volume, .. } => {
                *sales_volume = value;
                Ok(())
            }
            _ => Err(DomainError::validation(format!(
                "employee {} is not a salesperson",
                self.id
            ))),
        }
    }

    /// Computed salary for this employee
    ///
    /// - Employee: base salary
    /// - Manager: base + bonus
    /// - Developer: base × seniority coefficient
    /// - Salesperson: base + sales volume × commission rate
    pub fn calculate_salary(&self) -> f64 {
        match &self.role {
            EmployeeRole::Staff => self.base_salary,
            EmployeeRole::Manager { bonus } => self.base_salary + bonus,
            EmployeeRole::Developer { seniority, .. } => {
                self.base_salary * seniority.coefficient()
            }
            EmployeeRole::Salesperson {
                commission_rate,
                sales_volume,
            } => self.base_salary + sales_volume * commission_rate,
        }
    }

    /// Identity comparison: two employees are the same iff their ids match
    pub fn equals_by_id(&self, other: &Employee) -> bool {
        self.id == other.id
    }

    /// Human-readable summary including the computed salary
    pub fn info(&self) -> String {
        let mut line = format!(
            "{} [id: {}, name: {}, department: {}, base salary: {}",
            self.kind(),
            self.id,
            self.name,
            self.department,
            self.base_salary
        );
        match &self.role {
            EmployeeRole::Staff => {}
            EmployeeRole::Manager { bonus } => {
                line.push_str(&format!(", bonus: {bonus}"));
            }
            EmployeeRole::Developer { tech_stack, seniority } => {
                line.push_str(&format!(
                    ", tech stack: [{}], seniority: {seniority}",
                    tech_stack.join(", ")
                ));
            }
            EmployeeRole::Salesperson {
                commission_rate,
                sales_volume,
            } => {
                line.push_str(&format!(
                    ", commission rate: {commission_rate}, sales volume: {sales_volume}"
                ));
            }
        }
        line.push(']');
        format!("{line}\nTotal salary: {}", self.calculate_salary())
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (id {}, {})",
            self.kind(),
            self.name,
            self.id,
            self.department
        )
    }
}

/// Flat wire shape of an employee record
#[derive(Debug, Serialize, Deserialize)]
struct EmployeeRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<EmployeeKind>,
    id: u32,
    name: String,
    department: String,
    base_salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seniority_level: Option<Seniority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    commission_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sales_volume: Option<f64>,
}

impl From<&Employee> for EmployeeRecord {
    fn from(emp: &Employee) -> Self {
        let mut record = EmployeeRecord {
            kind: Some(emp.kind()),
            id: emp.id.get(),
            name: emp.name.clone(),
            department: emp.department.clone(),
            base_salary: emp.base_salary,
            bonus: None,
            tech_stack: None,
            seniority_level: None,
            commission_rate: None,
            sales_volume: None,
        };
        match &emp.role {
            EmployeeRole::Staff => {}
            EmployeeRole::Manager { bonus } => record.bonus = Some(*bonus),
            EmployeeRole::Developer { tech_stack, seniority } => {
                record.tech_stack = Some(tech_stack.clone());
                record.seniority_level = Some(*seniority);
            }
            EmployeeRole::Salesperson {
                commission_rate,
                sales_volume,
            } => {
                record.commission_rate = Some(*commission_rate);
                record.sales_volume = Some(*sales_volume);
            }
        }
        record
    }
}

impl EmployeeRecord {
    /// Legacy fallback for records without a `type` tag: infer the variant
    /// from which keys are present (`bonus` wins over `tech_stack` over
    /// `commission_rate`, matching historical fixture behavior).
    fn sniff_kind(&self) -> EmployeeKind {
        if self.bonus.is_some() {
            EmployeeKind::Manager
        } else if self.tech_stack.is_some() {
            EmployeeKind::Developer
        } else if self.commission_rate.is_some() {
            EmployeeKind::Salesperson
        } else {
            EmployeeKind::Employee
        }
    }

    fn require<T>(value: Option<T>, kind: EmployeeKind, field: &str) -> DomainResult<T> {
        value.ok_or_else(|| {
            DomainError::validation(format!("{kind} record is missing field {field:?}"))
        })
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = DomainError;

    fn try_from(record: EmployeeRecord) -> DomainResult<Self> {
        let kind = match record.kind {
            Some(kind) => kind,
            None => {
                let inferred = record.sniff_kind();
                tracing::warn!(
                    id = record.id,
                    inferred = %inferred,
                    "employee record has no type tag; inferring variant from field presence"
                );
                inferred
            }
        };
        match kind {
            EmployeeKind::Employee => {
                Employee::staff(record.id, &record.name, &record.department, record.base_salary)
            }
            EmployeeKind::Manager => Employee::manager(
                record.id,
                &record.name,
                &record.department,
                record.base_salary,
                EmployeeRecord::require(record.bonus, kind, "bonus")?,
            ),
            EmployeeKind::Developer => Employee::developer(
                record.id,
                &record.name,
                &record.department,
                record.base_salary,
                EmployeeRecord::require(record.tech_stack, kind, "tech_stack")?,
                EmployeeRecord::require(record.seniority_level, kind, "seniority_level")?,
            ),
            EmployeeKind::Salesperson => Employee::salesperson(
                record.id,
                &record.name,
                &record.department,
                record.base_salary,
                EmployeeRecord::require(record.commission_rate, kind, "commission_rate")?,
                EmployeeRecord::require(record.sales_volume, kind, "sales_volume")?,
            ),
        }
    }
}

impl Serialize for Employee {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        EmployeeRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Employee {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = EmployeeRecord::deserialize(deserializer)?;
        Employee::try_from(record).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn manager() -> Employee {
        Employee::manager(1, "Olena", "Development", 7000.0, 2000.0).unwrap()
    }

    fn developer() -> Employee {
        Employee::developer(
            2,
            "Taras",
            "Development",
            5000.0,
            vec!["Python".to_string(), "SQL".to_string()],
            Seniority::Senior,
        )
        .unwrap()
    }

    fn salesperson() -> Employee {
        Employee::salesperson(3, "Iryna", "Sales", 4000.0, 0.15, 50000.0).unwrap()
    }

    #[test]
    fn construction_keeps_the_given_id() {
        let emp = Employee::staff(42, "Bob", "QA", 1000.0).unwrap();
        assert_eq!(emp.id(), 42);
        assert!(Employee::staff(0, "Bob", "QA", 1000.0).is_err());
    }

    #[test]
    fn construction_validates_every_field() {
        assert!(Employee::staff(1, "", "QA", 1000.0).is_err());
        assert!(Employee::staff(1, "Bob", " ", 1000.0).is_err());
        assert!(Employee::staff(1, "Bob", "QA", -1.0).is_err());
        assert!(Employee::manager(1, "Bob", "QA", 1000.0, 0.0).is_err());
        assert!(Employee::developer(
            1,
            "Bob",
            "QA",
            1000.0,
            vec!["".to_string()],
            Seniority::Junior
        )
        .is_err());
        assert!(Employee::salesperson(1, "Bob", "QA", 1000.0, 1.5, 0.0).is_err());
        assert!(Employee::salesperson(1, "Bob", "QA", 1000.0, 0.1, -5.0).is_err());
    }

    #[test]
    fn salary_by_variant() {
        assert_eq!(manager().calculate_salary(), 9000.0);
        assert_eq!(developer().calculate_salary(), 10000.0);
        assert_eq!(salesperson().calculate_salary(), 11500.0);
        let staff = Employee::staff(4, "Bob", "QA", 1234.5).unwrap();
        assert_eq!(staff.calculate_salary(), 1234.5);
    }

    #[test_case(Seniority::Junior, 5000.0 ; "junior keeps base")]
    #[test_case(Seniority::Middle, 7500.0 ; "middle scales by 1.5")]
    #[test_case(Seniority::Senior, 10000.0 ; "senior scales by 2.0")]
    fn developer_salary_scales_with_seniority(level: Seniority, expected: f64) {
        let dev = Employee::developer(9, "Dev", "Development", 5000.0, vec![], level).unwrap();
        assert_eq!(dev.calculate_salary(), expected);
    }

    #[test]
    fn setters_revalidate() {
        let mut emp = manager();
        assert!(emp.set_name("").is_err());
        assert_eq!(emp.name(), "Olena");

        emp.set_name("  Olena K. ").unwrap();
        assert_eq!(emp.name(), "Olena K.");

        assert!(emp.set_base_salary(-100.0).is_err());
        assert_eq!(emp.base_salary(), 7000.0);

        assert!(emp.set_bonus(-1.0).is_err());
        emp.set_bonus(2500.0).unwrap();
        assert_eq!(emp.calculate_salary(), 9500.0);
    }

    #[test]
    fn variant_setters_reject_wrong_variant() {
        let mut emp = manager();
        assert!(emp.set_seniority(Seniority::Senior).is_err());
        assert!(emp.set_commission_rate(0.2).is_err());

        let mut dev = developer();
        assert!(dev.set_bonus(100.0).is_err());
        dev.add_technology("Rust").unwrap();
        assert!(dev.add_technology("  ").is_err());
        match dev.role() {
            EmployeeRole::Developer { tech_stack, .. } => {
                assert_eq!(tech_stack, &["Python", "SQL", "Rust"]);
            }
            other => panic!("unexpected role: {other:?}"),
        }
    }

    #[test]
    fn identity_comparison_ignores_other_fields() {
        let a = Employee::staff(5, "Alice", "QA", 100.0).unwrap();
        let b = Employee::manager(5, "Bob", "Sales", 200.0, 50.0).unwrap();
        assert!(a.equals_by_id(&b));
        assert!(!a.equals_by_id(&developer()));
    }

    #[test]
    fn serialization_is_tagged_and_flat() {
        let value = serde_json::to_value(salesperson()).unwrap();
        assert_eq!(value["type"], "Salesperson");
        assert_eq!(value["id"], 3);
        assert_eq!(value["commission_rate"], 0.15);
        assert_eq!(value["sales_volume"], 50000.0);
        assert!(value.get("bonus").is_none());
        assert!(value.get("tech_stack").is_none());
    }

    #[test]
    fn round_trip_preserves_identity_and_salary() {
        for emp in [
            Employee::staff(10, "Bob", "QA", 3000.0).unwrap(),
            manager(),
            developer(),
            salesperson(),
        ] {
            let json = serde_json::to_string(&emp).unwrap();
            let back: Employee = serde_json::from_str(&json).unwrap();
            assert!(back.equals_by_id(&emp));
            assert_eq!(back.calculate_salary(), emp.calculate_salary());
            assert_eq!(back, emp);
        }
    }

    #[test]
    fn untagged_records_fall_back_to_sniffing() {
        let legacy = r#"{
            "id": 7, "name": "Max", "department": "Development",
            "base_salary": 5000.0,
            "tech_stack": ["Go"], "seniority_level": "middle"
        }"#;
        let emp: Employee = serde_json::from_str(legacy).unwrap();
        assert_eq!(emp.kind(), EmployeeKind::Developer);
        assert_eq!(emp.calculate_salary(), 7500.0);

        let legacy = r#"{"id": 8, "name": "Eva", "department": "HR", "base_salary": 2000.0}"#;
        let emp: Employee = serde_json::from_str(legacy).unwrap();
        assert_eq!(emp.kind(), EmployeeKind::Employee);
    }

    #[test]
    fn tagged_record_missing_variant_field_is_an_error() {
        let bad = r#"{"type": "Manager", "id": 1, "name": "A", "department": "B", "base_salary": 100.0}"#;
        let err = serde_json::from_str::<Employee>(bad).unwrap_err();
        assert!(err.to_string().contains("bonus"));
    }

    #[test]
    fn deserialization_validates_fields() {
        let bad = r#"{"type": "Employee", "id": 1, "name": "", "department": "B", "base_salary": 100.0}"#;
        assert!(serde_json::from_str::<Employee>(bad).is_err());
        let bad =
            r#"{"type": "Salesperson", "id": 1, "name": "A", "department": "B", "base_salary": 100.0, "commission_rate": 2.0, "sales_volume": 10.0}"#;
        assert!(serde_json::from_str::<Employee>(bad).is_err());
    }

    #[test]
    fn seniority_parses_from_strings() {
        assert_eq!("senior".parse::<Seniority>().unwrap(), Seniority::Senior);
        assert!("principal".parse::<Seniority>().is_err());
    }

    #[test]
    fn info_mentions_the_computed_salary() {
        let info = manager().info();
        assert!(info.contains("Manager"));
        assert!(info.contains("bonus: 2000"));
        assert!(info.ends_with("Total salary: 9000"));
    }
}
