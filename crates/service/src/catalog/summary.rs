use std::collections::BTreeMap;

use models::duration::{DurationUnit, ParsedDuration};
use models::CatalogRecord;
use serde::Serialize;

/// Statistics derived from the current collection; never cached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub featured_category: &'static str,
    /// Records whose category equals `featured_category` exactly.
    pub featured_count: usize,
    pub categories: BTreeMap<String, usize>,
    /// Mean over durations that could be read, in `duration_unit`.
    pub average_duration: Option<f64>,
    pub duration_unit: DurationUnit,
}

pub fn summarize<'a, R, I>(records: I) -> Summary
where
    R: CatalogRecord,
    I: IntoIterator<Item = &'a R>,
{
    let mut total = 0;
    let mut featured_count = 0;
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    let mut duration_sum = 0.0;
    let mut duration_count = 0usize;

    for record in records {
        total += 1;
        if record.category() == R::FEATURED_CATEGORY {
            featured_count += 1;
        }
        *categories.entry(record.category().to_string()).or_default() += 1;
        if let Some(d) = ParsedDuration::parse(record.duration()) {
            duration_sum += d.in_unit(R::DURATION_UNIT);
            duration_count += 1;
        }
    }

    let average_duration = (duration_count > 0).then(|| duration_sum / duration_count as f64);

    Summary {
        total,
        featured_category: R::FEATURED_CATEGORY,
        featured_count,
        categories,
        average_duration,
        duration_unit: R::DURATION_UNIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::seed::{seed_courses, seed_services};
    use models::Course;

    #[test]
    fn seeded_course_summary() {
        let courses = seed_courses();
        let s = summarize(&courses);
        assert_eq!(s.total, 8);
        assert_eq!(s.featured_category, "Health");
        assert_eq!(s.featured_count, 2);
        assert_eq!(s.categories.get("Counselling"), Some(&2));
        assert_eq!(s.categories.get("ICT"), Some(&1));
        assert_eq!(s.duration_unit, DurationUnit::Months);
        // 3+3+18+12+6+6+18+3 over 8, "1–2 years" counted as 18 months
        let avg = s.average_duration.unwrap();
        assert!((avg - 8.625).abs() < 1e-9, "{avg}");
    }

    #[test]
    fn seeded_service_summary() {
        let services = seed_services();
        let s = summarize(&services);
        assert_eq!(s.total, 6);
        assert_eq!(s.featured_category, "Mental Health");
        assert_eq!(s.featured_count, 1);
        assert_eq!(s.categories.len(), 6);
        let avg = s.average_duration.unwrap();
        assert!((avg - 55.0).abs() < 1e-9, "{avg}");
    }

    #[test]
    fn featured_count_is_exact_match() {
        let mut courses = seed_courses();
        courses[0].category = "health".into();
        courses[1].category = "Health Sciences".into();
        assert_eq!(summarize(&courses).featured_count, 0);
    }

    #[test]
    fn unreadable_durations_are_skipped() {
        let mut courses = seed_courses();
        for c in courses.iter_mut() {
            c.duration = "self-paced".into();
        }
        assert_eq!(summarize(&courses).average_duration, None);
    }

    #[test]
    fn empty_collection() {
        let s = summarize::<Course, _>(&Vec::new());
        assert_eq!(s.total, 0);
        assert_eq!(s.featured_count, 0);
        assert!(s.categories.is_empty());
        assert_eq!(s.average_duration, None);
    }
}
