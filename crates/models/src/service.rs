use serde::{Deserialize, Serialize};

use crate::duration::DurationUnit;
use crate::record::CatalogRecord;
use crate::validation::{FieldErrors, Validate};

/// A counselling or support service offered by the college.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub category: String,
}

impl Validate for ServiceInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Service name is required");
        errors.require("description", &self.description, "Description is required");
        errors.require("price", &self.price, "Price is required");
        errors.require("duration", &self.duration, "Duration is required");
        errors.require("category", &self.category, "Category is required");
        errors.into_result()
    }
}

impl CatalogRecord for Service {
    type Input = ServiceInput;

    const KIND: &'static str = "service";
    const LABEL: &'static str = "Service";
    const FEATURED_CATEGORY: &'static str = "Mental Health";
    const DURATION_UNIT: DurationUnit = DurationUnit::Minutes;

    fn id(&self) -> u64 { self.id }
    fn name(&self) -> &str { &self.name }
    fn category(&self) -> &str { &self.category }
    fn duration(&self) -> &str { &self.duration }

    fn from_input(id: u64, input: ServiceInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            duration: input.duration,
            category: input.category,
        }
    }

    fn to_input(&self) -> ServiceInput {
        ServiceInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            duration: self.duration.clone(),
            category: self.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_required_instead_of_fee() {
        let input = ServiceInput {
            name: "Walk-in Counselling".into(),
            description: "Same-day sessions".into(),
            price: "".into(),
            duration: "30 minutes".into(),
            category: "Mental Health".into(),
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price"), Some("Price is required"));
    }

    #[test]
    fn empty_name_uses_service_message() {
        let errors = ServiceInput::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Service name is required"));
        assert_eq!(errors.len(), 5);
    }
}
