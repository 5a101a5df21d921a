mod filters;
mod recipe;

pub use filters::{CookTimeRange, SearchFilters};
pub use recipe::{DietaryTag, Difficulty, Ingredient, Recipe, RecipeMatch};
