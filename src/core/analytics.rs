//! Chart aggregations. Each helper is a pure function over the employee list
//! (the bookmark ones also take the bookmark snapshots) and recomputes from
//! scratch on every call; inputs are tens of records.

use super::models::Employee;

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRating {
    pub department: String,
    pub average_rating: f32,
    pub employee_count: usize,
}

/// Mean rating and headcount per department, ordered by descending mean with
/// the department name as tie-break. Records without a department are
/// excluded; an unrated record counts toward headcount with a rating of 0.
pub fn department_ratings(employees: &[Employee]) -> Vec<DepartmentRating> {
    let mut groups: Vec<(String, u32, usize)> = Vec::new();

    for employee in employees {
        let Some(department) = employee.department.as_deref() else { continue };
        let rating = u32::from(employee.rating.unwrap_or(0));

        match groups.iter_mut().find(|(name, _, _)| name == department) {
            Some((_, total, count)) => {
                *total += rating;
                *count += 1;
            }
            None => groups.push((department.to_string(), rating, 1)),
        }
    }

    let mut ratings: Vec<DepartmentRating> = groups
        .into_iter()
        .map(|(department, total, count)| DepartmentRating {
            department,
            average_rating: total as f32 / count as f32,
            employee_count: count,
        })
        .collect();

    ratings.sort_by(|a, b| {
        b.average_rating
            .total_cmp(&a.average_rating)
            .then_with(|| a.department.cmp(&b.department))
    });

    ratings
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeBucket {
    pub label: &'static str,
    pub min: u32,
    pub max: Option<u32>,
    pub count: usize,
}

// Fixed boundaries, inclusive on both ends; the last bucket is open-ended so
// every age lands in exactly one bucket.
const AGE_RANGES: &[(&str, u32, Option<u32>)] = &[
    ("18-25", 18, Some(25)),
    ("26-35", 26, Some(35)),
    ("36-45", 36, Some(45)),
    ("46-55", 46, Some(55)),
    ("56+", 56, None),
];

/// Headcount per fixed age range, always returned in the listed bucket order.
pub fn age_distribution(employees: &[Employee]) -> Vec<AgeBucket> {
    let mut buckets: Vec<AgeBucket> = AGE_RANGES
        .iter()
        .map(|&(label, min, max)| AgeBucket { label, min, max, count: 0 })
        .collect();

    for employee in employees {
        let slot = buckets
            .iter_mut()
            .find(|b| employee.age >= b.min && b.max.is_none_or(|max| employee.age <= max));
        if let Some(bucket) = slot {
            bucket.count += 1;
        }
    }

    buckets
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
}

/// Exactly five buckets for ratings 1–5 in ascending order. Records with no
/// rating or one outside 1–5 are excluded.
pub fn rating_histogram(employees: &[Employee]) -> Vec<RatingBucket> {
    let mut counts = [0usize; 5];

    for employee in employees {
        if let Some(rating @ 1..=5) = employee.rating {
            counts[usize::from(rating) - 1] += 1;
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(index, &count)| RatingBucket { rating: index as u8 + 1, count })
        .collect()
}

/// Rating counts over the bookmark snapshots only, descending by rating and
/// with empty buckets dropped (the bookmark-trends pie shows only observed
/// ratings).
pub fn bookmark_rating_histogram(bookmarks: &[Employee]) -> Vec<RatingBucket> {
    let mut histogram: Vec<RatingBucket> =
        rating_histogram(bookmarks).into_iter().filter(|bucket| bucket.count > 0).collect();
    histogram.sort_by(|a, b| b.rating.cmp(&a.rating));
    histogram
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: String,
    pub bookmarked: usize,
    pub total: usize,
    pub percentage: f32,
}

/// Bookmarked-vs-total headcount per department, for every department
/// observed among `employees`, in first-appearance order. Zero-bookmark
/// departments stay in.
pub fn department_shares(employees: &[Employee], bookmarks: &[Employee]) -> Vec<DepartmentShare> {
    let mut shares: Vec<DepartmentShare> = Vec::new();

    for employee in employees {
        let Some(department) = employee.department.as_deref() else { continue };
        let bookmarked = bookmarks.iter().any(|bookmark| bookmark.id == employee.id);

        match shares.iter_mut().find(|share| share.department == department) {
            Some(share) => {
                share.total += 1;
                share.bookmarked += usize::from(bookmarked);
            }
            None => shares.push(DepartmentShare {
                department: department.to_string(),
                bookmarked: usize::from(bookmarked),
                total: 1,
                percentage: 0.0,
            }),
        }
    }

    for share in &mut shares {
        share.percentage = share.bookmarked as f32 / share.total as f32 * 100.0;
    }

    shares
}

/// The chart-facing variant: zero-bookmark departments dropped, ordered by
/// descending bookmark count (department name as tie-break).
pub fn nonzero_department_shares(
    employees: &[Employee],
    bookmarks: &[Employee],
) -> Vec<DepartmentShare> {
    let mut shares: Vec<DepartmentShare> = department_shares(employees, bookmarks)
        .into_iter()
        .filter(|share| share.bookmarked > 0)
        .collect();
    shares.sort_by(|a, b| {
        b.bookmarked.cmp(&a.bookmarked).then_with(|| a.department.cmp(&b.department))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32, age: u32, department: Option<&str>, rating: Option<u8>) -> Employee {
        Employee {
            id,
            age,
            department: department.map(str::to_string),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn department_ratings_order_and_means() {
        let roster = vec![
            employee(1, 30, Some("Sales"), Some(2)),
            employee(2, 31, Some("Engineering"), Some(5)),
            employee(3, 32, Some("Engineering"), Some(3)),
            employee(4, 33, None, Some(5)),
        ];

        let ratings = department_ratings(&roster);
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].department, "Engineering");
        assert_eq!(ratings[0].average_rating, 4.0);
        assert_eq!(ratings[0].employee_count, 2);
        assert_eq!(ratings[1].department, "Sales");
        assert_eq!(ratings[1].average_rating, 2.0);
    }

    #[test]
    fn department_rating_ties_break_on_name() {
        let roster = vec![
            employee(1, 30, Some("Sales"), Some(3)),
            employee(2, 31, Some("Design"), Some(3)),
        ];
        let ratings = department_ratings(&roster);
        assert_eq!(ratings[0].department, "Design");
        assert_eq!(ratings[1].department, "Sales");
    }

    #[test]
    fn age_buckets_cover_spec_scenario() {
        let roster = vec![
            employee(1, 20, None, None),
            employee(2, 30, None, None),
            employee(3, 45, None, None),
            employee(4, 60, None, None),
        ];

        let buckets = age_distribution(&roster);
        let counts: Vec<(&str, usize)> = buckets.iter().map(|b| (b.label, b.count)).collect();
        assert_eq!(
            counts,
            vec![("18-25", 1), ("26-35", 1), ("36-45", 1), ("46-55", 0), ("56+", 1)]
        );
    }

    #[test]
    fn age_buckets_are_inclusive_and_unbounded_above() {
        let roster = vec![
            employee(1, 25, None, None),
            employee(2, 26, None, None),
            employee(3, 101, None, None),
        ];
        let buckets = age_distribution(&roster);
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[4].count, 1);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn rating_histogram_excludes_missing_and_out_of_range() {
        let roster = vec![
            employee(1, 30, None, Some(5)),
            employee(2, 31, None, Some(5)),
            employee(3, 32, None, Some(1)),
            employee(4, 33, None, None),
            employee(5, 34, None, Some(9)),
        ];

        let histogram = rating_histogram(&roster);
        assert_eq!(histogram.len(), 5);
        assert_eq!(histogram[0], RatingBucket { rating: 1, count: 1 });
        assert_eq!(histogram[4], RatingBucket { rating: 5, count: 2 });
        assert_eq!(histogram.iter().map(|b| b.count).sum::<usize>(), 3);
    }

    #[test]
    fn bookmark_rating_histogram_descends_and_drops_empty() {
        let bookmarks = vec![
            employee(1, 30, None, Some(3)),
            employee(2, 31, None, Some(5)),
            employee(3, 32, None, Some(5)),
        ];

        let histogram = bookmark_rating_histogram(&bookmarks);
        assert_eq!(
            histogram,
            vec![RatingBucket { rating: 5, count: 2 }, RatingBucket { rating: 3, count: 1 }]
        );
    }

    #[test]
    fn department_shares_keep_zero_bookmark_departments() {
        let roster = vec![
            employee(1, 30, Some("Engineering"), Some(4)),
            employee(2, 31, Some("Engineering"), Some(3)),
            employee(3, 32, Some("Sales"), Some(2)),
        ];
        let bookmarks = vec![roster[0].clone()];

        let shares = department_shares(&roster, &bookmarks);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].department, "Engineering");
        assert_eq!(shares[0].bookmarked, 1);
        assert_eq!(shares[0].total, 2);
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].department, "Sales");
        assert_eq!(shares[1].bookmarked, 0);
    }

    #[test]
    fn nonzero_shares_drop_and_sort() {
        let roster = vec![
            employee(1, 30, Some("Engineering"), Some(4)),
            employee(2, 31, Some("Sales"), Some(3)),
            employee(3, 32, Some("Sales"), Some(2)),
            employee(4, 33, Some("Design"), Some(5)),
        ];
        let bookmarks = vec![roster[1].clone(), roster[2].clone(), roster[0].clone()];

        let shares = nonzero_department_shares(&roster, &bookmarks);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].department, "Sales");
        assert_eq!(shares[0].bookmarked, 2);
        assert_eq!(shares[1].department, "Engineering");
    }
}
