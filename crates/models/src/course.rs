use serde::{Deserialize, Serialize};

use crate::duration::DurationUnit;
use crate::record::CatalogRecord;
use crate::validation::{FieldErrors, Validate};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub fee: String,
    pub category: String,
}

/// Add/edit form payload for a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub category: String,
}

impl Validate for CourseInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Course name is required");
        errors.require("description", &self.description, "Description is required");
        errors.require("duration", &self.duration, "Duration is required");
        errors.require("fee", &self.fee, "Fee is required");
        errors.require("category", &self.category, "Category is required");
        errors.into_result()
    }
}

impl CatalogRecord for Course {
    type Input = CourseInput;

    const KIND: &'static str = "course";
    const LABEL: &'static str = "Course";
    const FEATURED_CATEGORY: &'static str = "Health";
    const DURATION_UNIT: DurationUnit = DurationUnit::Months;

    fn id(&self) -> u64 { self.id }
    fn name(&self) -> &str { &self.name }
    fn category(&self) -> &str { &self.category }
    fn duration(&self) -> &str { &self.duration }

    fn from_input(id: u64, input: CourseInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            duration: input.duration,
            fee: input.fee,
            category: input.category,
        }
    }

    fn to_input(&self) -> CourseInput {
        CourseInput {
            name: self.name.clone(),
            description: self.description.clone(),
            duration: self.duration.clone(),
            fee: self.fee.clone(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CourseInput {
        CourseInput {
            name: "Test".into(),
            description: "D".into(),
            duration: "1 month".into(),
            fee: "KES 100".into(),
            category: "ICT".into(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn every_empty_field_is_reported() {
        let errors = CourseInput::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("name"), Some("Course name is required"));
        assert_eq!(errors.get("fee"), Some("Fee is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
    }

    #[test]
    fn single_empty_field_is_reported_alone() {
        let input = CourseInput { duration: "".into(), ..valid() };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("duration"), Some("Duration is required"));
    }

    #[test]
    fn whitespace_only_name_is_accepted() {
        let input = CourseInput { name: " ".into(), ..valid() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_round_trips_through_record() {
        let course = Course::from_input(42, valid());
        assert_eq!(course.id, 42);
        assert_eq!(course.to_input(), valid());
    }

    #[test]
    fn missing_json_fields_deserialize_as_empty() {
        let input: CourseInput = serde_json::from_str(r#"{"name":"Only name"}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(!errors.contains("name"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn matches_name_or_category_case_insensitively() {
        let course = Course::from_input(1, valid());
        assert!(course.matches("test"));
        assert!(course.matches("ict"));
        assert!(course.matches(""));
        assert!(!course.matches("month"));
    }
}
