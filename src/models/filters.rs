use serde::{Deserialize, Serialize};

use super::{DietaryTag, Difficulty};

/// Inclusive cook-time window in minutes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookTimeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for CookTimeRange {
    fn default() -> Self {
        Self { min: 0, max: 180 }
    }
}

impl CookTimeRange {
    /// Returns true when `minutes` falls within [min, max], bounds included
    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }
}

/// Filter constraints for the inclusive (typed-ingredient) search
///
/// Every field is defaultable: an empty dietary or difficulty set means "no
/// constraint", and the cook-time window defaults to [0, 180].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchFilters {
    /// Required dietary tags; a recipe must carry ALL of them
    #[serde(default)]
    pub dietary: Vec<DietaryTag>,
    /// Accepted difficulty levels; empty accepts any
    #[serde(default)]
    pub difficulty: Vec<Difficulty>,
    #[serde(default)]
    pub cook_time: CookTimeRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        let range = CookTimeRange::default();
        assert_eq!(range.min, 0);
        assert_eq!(range.max, 180);
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = CookTimeRange::default();
        assert!(range.contains(0));
        assert!(range.contains(180));
        assert!(!range.contains(181));

        let tight = CookTimeRange { min: 20, max: 40 };
        assert!(tight.contains(20));
        assert!(tight.contains(40));
        assert!(!tight.contains(19));
        assert!(!tight.contains(41));
    }

    #[test]
    fn test_filters_deserialize_with_defaults() {
        let filters: SearchFilters = serde_json::from_str("{}").unwrap();
        assert!(filters.dietary.is_empty());
        assert!(filters.difficulty.is_empty());
        assert_eq!(filters.cook_time, CookTimeRange::default());
    }
}
