use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How involved a recipe is to prepare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Dietary classification tags attached to a recipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    DairyFree,
    Keto,
}

/// A single ingredient within a recipe
///
/// Names are matched case-insensitively by the ranking engine; amount and
/// category are display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Ingredient name (e.g. "Tomato")
    pub name: String,
    /// Quantity as authored (e.g. "2 cloves")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Coarse grouping (e.g. "produce", "dairy")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Ingredient {
    /// Creates an ingredient with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: None,
            category: None,
        }
    }

    /// Creates an ingredient with a name and an amount
    pub fn with_amount(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: Some(amount.into()),
            category: None,
        }
    }
}

/// A recipe in the catalog
///
/// Instances are created once at startup and never mutated afterwards; `id`
/// is unique across the catalog (enforced at load time).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier within the catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Total cook time in minutes
    pub cook_time: u32,
    /// Number of servings the recipe yields
    pub servings: u32,
    /// Calories per serving
    pub calories: u32,
    /// Protein per serving, grams
    pub protein: u32,
    /// Carbohydrates per serving, grams
    pub carbs: u32,
    /// Fat per serving, grams
    pub fat: u32,
    pub difficulty: Difficulty,
    pub dietary: Vec<DietaryTag>,
    /// Ordered ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Ingredient name -> acceptable substitutes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, Vec<String>>,
}

/// A recipe decorated with ranking results
///
/// Produced fresh on every ranking call and discarded once the caller has
/// consumed it; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeMatch<'a> {
    pub recipe: &'a Recipe,
    /// Ranking score; 100 means a full match in either mode
    pub match_score: f64,
    /// Number of requested ingredients this recipe matched
    pub matched_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_serialization() {
        let json = serde_json::to_string(&Difficulty::Easy).unwrap();
        assert_eq!(json, "\"easy\"");

        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);
    }

    #[test]
    fn test_dietary_tag_serialization() {
        let json = serde_json::to_string(&DietaryTag::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");

        let parsed: DietaryTag = serde_json::from_str("\"dairy-free\"").unwrap();
        assert_eq!(parsed, DietaryTag::DairyFree);
    }

    #[test]
    fn test_ingredient_constructors() {
        let plain = Ingredient::named("Tomato");
        assert_eq!(plain.name, "Tomato");
        assert!(plain.amount.is_none());

        let measured = Ingredient::with_amount("Garlic", "2 cloves");
        assert_eq!(measured.amount.as_deref(), Some("2 cloves"));
    }
}
