use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::duration::DurationUnit;
use crate::validation::Validate;

/// A flat admin-managed record with a numeric id and descriptive text.
///
/// Courses and services share this shape; the list manager, summary and
/// HTTP handlers are written once against this trait.
pub trait CatalogRecord:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Form payload: every field except the id.
    type Input: Validate + Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Lowercase kind used in logs and metric labels.
    const KIND: &'static str;
    /// Capitalised label used in notification titles.
    const LABEL: &'static str;
    /// Category counted separately in the summary.
    const FEATURED_CATEGORY: &'static str;
    /// Unit in which the summary reports the average duration.
    const DURATION_UNIT: DurationUnit;

    fn id(&self) -> u64;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn duration(&self) -> &str;

    fn from_input(id: u64, input: Self::Input) -> Self;
    fn to_input(&self) -> Self::Input;

    /// Case-insensitive substring match on name or category.
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name().to_lowercase().contains(needle)
            || self.category().to_lowercase().contains(needle)
    }
}
