//! Total-order comparison helpers over employees
//!
//! Named comparison functions for use with `sort_by` and friends, plus
//! [`sum_salaries`] for aggregate payroll sums. Salary comparisons use the
//! computed salary, not the base salary, and order highest first (report
//! convention).

use crate::employee::Employee;
use std::cmp::Ordering;

/// Compare employees alphabetically by name
pub fn by_name(a: &Employee, b: &Employee) -> Ordering {
    a.name().cmp(b.name())
}

/// Compare employees by computed salary, highest first
pub fn by_salary(a: &Employee, b: &Employee) -> Ordering {
    b.calculate_salary().total_cmp(&a.calculate_salary())
}

/// Compare employees by department label, then by name within a department
pub fn by_department_then_name(a: &Employee, b: &Employee) -> Ordering {
    a.department()
        .cmp(b.department())
        .then_with(|| by_name(a, b))
}

/// Sum the computed salaries of any sequence of employees
pub fn sum_salaries<'a, I>(employees: I) -> f64
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees
        .into_iter()
        .map(Employee::calculate_salary)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Seniority;

    fn sample() -> Vec<Employee> {
        vec![
            Employee::manager(1, "Olena", "Development", 7000.0, 2000.0).unwrap(),
            Employee::developer(2, "Taras", "Development", 5000.0, vec![], Seniority::Senior)
                .unwrap(),
            Employee::salesperson(3, "Iryna", "Sales", 4000.0, 0.15, 50000.0).unwrap(),
        ]
    }

    #[test]
    fn sorts_by_name() {
        let mut emps = sample();
        emps.sort_by(by_name);
        let names: Vec<_> = emps.iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["Iryna", "Olena", "Taras"]);
    }

    #[test]
    fn sorts_by_computed_salary_descending() {
        let mut emps = sample();
        emps.sort_by(by_salary);
        let salaries: Vec<_> = emps.iter().map(Employee::calculate_salary).collect();
        assert_eq!(salaries, [11500.0, 10000.0, 9000.0]);
    }

    #[test]
    fn sorts_by_department_then_name() {
        let mut emps = sample();
        emps.sort_by(by_department_then_name);
        let order: Vec<_> = emps
            .iter()
            .map(|e| (e.department().to_string(), e.name().to_string()))
            .collect();
        assert_eq!(
            order,
            [
                ("Development".to_string(), "Olena".to_string()),
                ("Development".to_string(), "Taras".to_string()),
                ("Sales".to_string(), "Iryna".to_string()),
            ]
        );
    }

    #[test]
    fn sums_computed_salaries() {
        assert_eq!(sum_salaries(&sample()), 30500.0);
        assert_eq!(sum_salaries([]), 0.0);
    }
}
