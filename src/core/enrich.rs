use rand::Rng;

use super::models::Employee;

/// Departments assigned when the upstream record carries none.
pub const DEPARTMENTS: &[&str] =
    &["Engineering", "Marketing", "Sales", "HR", "Finance", "Product", "Design"];

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Fills `department` and `rating` on a freshly fetched record. Fields that
/// already hold a value are left untouched, so running this again on an
/// ingested record is a no-op — assignments are never re-rolled.
pub fn enrich(employee: &mut Employee) {
    let mut rng = rand::rng();

    if employee.department.is_none() {
        let upstream = employee.company.as_ref().and_then(|company| company.department.clone());
        employee.department = Some(upstream.unwrap_or_else(|| {
            DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())].to_string()
        }));
    }

    if employee.rating.is_none() {
        employee.rating = Some(rng.random_range(MIN_RATING..=MAX_RATING));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Company;

    #[test]
    fn fills_missing_fields() {
        let mut employee = Employee { id: 1, ..Default::default() };
        enrich(&mut employee);

        let department = employee.department.as_deref().unwrap();
        assert!(DEPARTMENTS.contains(&department));
        let rating = employee.rating.unwrap();
        assert!((MIN_RATING..=MAX_RATING).contains(&rating));
    }

    #[test]
    fn prefers_upstream_company_department() {
        let mut employee = Employee {
            id: 2,
            company: Some(Company {
                title: Some("Clerk".into()),
                department: Some("Legal".into()),
            }),
            ..Default::default()
        };
        enrich(&mut employee);
        assert_eq!(employee.department.as_deref(), Some("Legal"));
    }

    #[test]
    fn never_rerolls_assigned_fields() {
        let mut employee = Employee { id: 3, ..Default::default() };
        enrich(&mut employee);
        let department = employee.department.clone();
        let rating = employee.rating;

        for _ in 0..50 {
            enrich(&mut employee);
        }
        assert_eq!(employee.department, department);
        assert_eq!(employee.rating, rating);
    }

    #[test]
    fn rating_stays_in_range() {
        for id in 0..100 {
            let mut employee = Employee { id, ..Default::default() };
            enrich(&mut employee);
            let rating = employee.rating.unwrap();
            assert!((MIN_RATING..=MAX_RATING).contains(&rating), "rating {rating} out of range");
        }
    }
}
