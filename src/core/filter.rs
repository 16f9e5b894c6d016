use super::models::Employee;

/// Case-insensitive substring match against full name, email, and department.
/// An empty query matches everything.
pub fn matches_search(employee: &Employee, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();

    if employee.full_name().to_lowercase().contains(&query) {
        return true;
    }
    if employee.email.to_lowercase().contains(&query) {
        return true;
    }

    employee
        .department
        .as_deref()
        .map(|department| department.to_lowercase().contains(&query))
        .unwrap_or(false)
}

/// Evaluates all three filter inputs as a conjunction and returns the
/// matching subset in input order. An empty filter set means "no constraint";
/// a record missing a department or rating never matches a non-empty set for
/// that field. Pure function, recomputed in full on every input change.
pub fn apply_filters(
    employees: &[Employee],
    query: &str,
    departments: &[String],
    ratings: &[u8],
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| {
            let matches_department = departments.is_empty()
                || employee
                    .department
                    .as_deref()
                    .is_some_and(|department| departments.iter().any(|d| d == department));

            let matches_rating =
                ratings.is_empty() || employee.rating.is_some_and(|rating| ratings.contains(&rating));

            matches_search(employee, query) && matches_department && matches_rating
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32, name: &str, email: &str, department: Option<&str>, rating: Option<u8>) -> Employee {
        let (first, last) = name.split_once(' ').unwrap();
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            department: department.map(str::to_string),
            rating,
            ..Default::default()
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Ida Strom", "ida@corp.test", Some("Engineering"), Some(5)),
            employee(2, "Marco Vela", "marco@corp.test", Some("Sales"), Some(2)),
            employee(3, "Jun Park", "jun@corp.test", None, None),
            employee(4, "Tessa Idan", "tessa@corp.test", Some("Design"), Some(4)),
        ]
    }

    fn ids(employees: &[Employee]) -> Vec<u32> {
        employees.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_inputs_return_full_list_in_order() {
        let roster = roster();
        let result = apply_filters(&roster, "", &[], &[]);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn result_is_always_a_subset() {
        let roster = roster();
        let queries = ["", "id", "corp", "zzz"];
        let department_sets: [&[String]; 2] = [&[], &["Engineering".to_string()]];
        let rating_sets: [&[u8]; 2] = [&[], &[2, 5]];

        for query in queries {
            for departments in department_sets {
                for ratings in rating_sets {
                    let result = apply_filters(&roster, query, departments, ratings);
                    assert!(result.iter().all(|e| roster.iter().any(|r| r.id == e.id)));
                }
            }
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let roster = roster();
        let once = apply_filters(&roster, "corp", &[], &[4, 5]);
        let twice = apply_filters(&roster, "corp", &[], &[4, 5]);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn query_matches_name_email_and_department_case_insensitively() {
        let roster = roster();
        // Substring of "Ida Strom" and of "Tessa Idan".
        assert_eq!(ids(&apply_filters(&roster, "IDA", &[], &[])), vec![1, 4]);
        // Email only.
        assert_eq!(ids(&apply_filters(&roster, "marco@", &[], &[])), vec![2]);
        // Department.
        assert_eq!(ids(&apply_filters(&roster, "engineer", &[], &[])), vec![1]);
        assert!(apply_filters(&roster, "no such person", &[], &[]).is_empty());
    }

    #[test]
    fn department_filter_selects_only_members() {
        let roster = vec![
            employee(1, "A One", "a@corp.test", Some("Engineering"), Some(5)),
            employee(2, "B Two", "b@corp.test", Some("Sales"), Some(2)),
        ];
        let result = apply_filters(&roster, "", &["Engineering".to_string()], &[]);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn missing_fields_never_match_non_empty_sets() {
        let roster = roster();
        let by_department = apply_filters(&roster, "", &["Engineering".to_string(), "Sales".to_string()], &[]);
        assert!(!ids(&by_department).contains(&3));

        let by_rating = apply_filters(&roster, "", &[], &[1, 2, 3, 4, 5]);
        assert!(!ids(&by_rating).contains(&3));
    }

    #[test]
    fn all_filters_apply_conjunctively() {
        let roster = roster();
        let result = apply_filters(&roster, "tessa", &["Design".to_string()], &[4]);
        assert_eq!(ids(&result), vec![4]);

        // Same query, wrong rating.
        assert!(apply_filters(&roster, "tessa", &["Design".to_string()], &[1]).is_empty());
    }
}
