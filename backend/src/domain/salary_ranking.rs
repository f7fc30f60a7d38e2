//! Salary aggregations over the employee directory.
//!
//! Employees without a positive reported salary take no part in either
//! ranking.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::Employee;

/// Sentinel returned by [`highest_salary`] when no salary is known.
pub const NO_SALARY: i64 = -1;

/// Number of names returned by [`top_earning_names`].
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Highest salary among `employees`, or [`NO_SALARY`].
///
/// # Examples
/// ```
/// use employee_gateway::domain::{highest_salary, NO_SALARY};
///
/// assert_eq!(highest_salary(&[]), NO_SALARY);
/// ```
#[must_use]
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .filter_map(ranked_salary)
        .max()
        .map_or(NO_SALARY, i64::from)
}

/// Names of the best-paid employees, highest salary first.
///
/// At most [`TOP_EARNERS_LIMIT`] names are returned. Equal salaries keep
/// directory order, so when a tie straddles the cut-off the earlier employee
/// is kept. Memory stays bounded by the limit regardless of directory size.
#[must_use]
pub fn top_earning_names(employees: &[Employee]) -> Vec<String> {
    let mut heap: BinaryHeap<Reverse<RankedEarner<'_>>> =
        BinaryHeap::with_capacity(TOP_EARNERS_LIMIT + 1);

    for (position, employee) in employees.iter().enumerate() {
        let Some(salary) = ranked_salary(employee) else {
            continue;
        };
        heap.push(Reverse(RankedEarner {
            salary,
            position,
            name: employee.name.as_str(),
        }));
        if heap.len() > TOP_EARNERS_LIMIT {
            heap.pop();
        }
    }

    // Ascending order of `Reverse` is descending rank.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(earner)| earner.name.to_owned())
        .collect()
}

fn ranked_salary(employee: &Employee) -> Option<i32> {
    employee.salary.filter(|salary| *salary > 0)
}

/// Heap entry ranked by salary, then by earliest directory position.
#[derive(Debug, PartialEq, Eq)]
struct RankedEarner<'a> {
    salary: i32,
    position: usize,
    name: &'a str,
}

impl Ord for RankedEarner<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.salary
            .cmp(&other.salary)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for RankedEarner<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
