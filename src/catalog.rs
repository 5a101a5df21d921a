use std::collections::HashMap;
use std::collections::HashSet;

use thiserror::Error;

use crate::models::{DietaryTag, Difficulty, Ingredient, Recipe};

/// Error types for catalog construction
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate recipe id in catalog: {0}")]
    DuplicateId(String),
}

/// The fixed, read-only recipe collection
///
/// Built once at startup and shared immutably for the life of the process.
/// Queries always observe the same recipes in the same order.
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Creates a catalog, rejecting duplicate recipe ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(Self { recipes })
    }

    /// The catalog shipped with the service
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_recipes())
    }

    /// All recipes in stable catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the catalog
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Looks up a recipe by id
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Union of ingredient names across all recipes
    ///
    /// Deduplicated case-sensitively as authored, in first-seen order.
    pub fn all_ingredients(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for recipe in &self.recipes {
            for ingredient in &recipe.ingredients {
                if seen.insert(ingredient.name.as_str()) {
                    names.push(ingredient.name.clone());
                }
            }
        }
        names
    }
}

fn builtin_recipes() -> Vec<Recipe> {
    use DietaryTag::*;
    use Difficulty::*;

    vec![
        Recipe {
            id: "1".into(),
            name: "Spaghetti Pomodoro".into(),
            description: "Classic pasta tossed in a bright garlic and tomato sauce.".into(),
            cook_time: 25,
            servings: 4,
            calories: 420,
            protein: 13,
            carbs: 72,
            fat: 9,
            difficulty: Easy,
            dietary: vec![Vegetarian],
            ingredients: vec![
                Ingredient::with_amount("Pasta", "400 g"),
                Ingredient::with_amount("Tomato", "6, ripe"),
                Ingredient::with_amount("Garlic", "3 cloves"),
                Ingredient::with_amount("Olive Oil", "3 tbsp"),
                Ingredient::with_amount("Basil", "a handful"),
            ],
            steps: vec![
                "Bring a large pot of salted water to a boil and cook the pasta until al dente.".into(),
                "Meanwhile, warm the olive oil and gently fry the sliced garlic.".into(),
                "Add chopped tomatoes and simmer for 10 minutes.".into(),
                "Toss the drained pasta through the sauce with torn basil.".into(),
            ],
            substitutions: HashMap::from([
                ("Pasta".into(), vec!["Gluten-Free Pasta".into(), "Zucchini Noodles".into()]),
            ]),
        },
        Recipe {
            id: "2".into(),
            name: "Garlic Butter Salmon".into(),
            description: "Pan-seared salmon fillets finished with lemon garlic butter.".into(),
            cook_time: 20,
            servings: 2,
            calories: 510,
            protein: 38,
            carbs: 3,
            fat: 36,
            difficulty: Medium,
            dietary: vec![GlutenFree, Keto],
            ingredients: vec![
                Ingredient::with_amount("Salmon", "2 fillets"),
                Ingredient::with_amount("Garlic", "4 cloves"),
                Ingredient::with_amount("Butter", "50 g"),
                Ingredient::with_amount("Lemon", "1"),
            ],
            steps: vec![
                "Pat the fillets dry and season well.".into(),
                "Sear skin-side down in a hot pan for 4 minutes.".into(),
                "Flip, add butter and garlic, and baste for 3 more minutes.".into(),
                "Finish with a squeeze of lemon.".into(),
            ],
            substitutions: HashMap::from([
                ("Butter".into(), vec!["Ghee".into(), "Olive Oil".into()]),
            ]),
        },
        Recipe {
            id: "3".into(),
            name: "Chicken Fried Rice".into(),
            description: "Weeknight fried rice with chicken, egg, and vegetables.".into(),
            cook_time: 30,
            servings: 4,
            calories: 480,
            protein: 27,
            carbs: 58,
            fat: 14,
            difficulty: Medium,
            dietary: vec![DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Rice", "3 cups, cooked"),
                Ingredient::with_amount("Chicken", "300 g"),
                Ingredient::with_amount("Egg", "2"),
                Ingredient::with_amount("Carrot", "1, diced"),
                Ingredient::with_amount("Onion", "1"),
                Ingredient::with_amount("Garlic", "2 cloves"),
            ],
            steps: vec![
                "Stir-fry the chicken in a very hot wok and set aside.".into(),
                "Scramble the eggs, then add onion, carrot, and garlic.".into(),
                "Add the rice and chicken and toss over high heat.".into(),
                "Season with soy sauce and serve.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "4".into(),
            name: "Creamy Mushroom Omelette".into(),
            description: "Soft omelette folded over sautéed mushrooms and cheese.".into(),
            cook_time: 15,
            servings: 1,
            calories: 390,
            protein: 24,
            carbs: 6,
            fat: 30,
            difficulty: Easy,
            dietary: vec![Vegetarian, GlutenFree],
            ingredients: vec![
                Ingredient::with_amount("Egg", "3"),
                Ingredient::with_amount("Mushroom", "100 g"),
                Ingredient::with_amount("Cheese", "40 g"),
                Ingredient::with_amount("Milk", "2 tbsp"),
                Ingredient::with_amount("Butter", "1 tbsp"),
            ],
            steps: vec![
                "Sauté the mushrooms in butter until golden and set aside.".into(),
                "Whisk the eggs with milk and a pinch of salt.".into(),
                "Cook the eggs gently, then fill with mushrooms and cheese.".into(),
                "Fold and slide onto a plate.".into(),
            ],
            substitutions: HashMap::from([
                ("Milk".into(), vec!["Oat Milk".into(), "Almond Milk".into()]),
            ]),
        },
        Recipe {
            id: "5".into(),
            name: "Roasted Vegetable Medley".into(),
            description: "Sheet-pan potatoes, carrots, and peppers with olive oil and herbs.".into(),
            cook_time: 45,
            servings: 4,
            calories: 260,
            protein: 5,
            carbs: 42,
            fat: 9,
            difficulty: Easy,
            dietary: vec![Vegetarian, Vegan, GlutenFree, DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Potato", "500 g"),
                Ingredient::with_amount("Carrot", "3"),
                Ingredient::with_amount("Onion", "2, quartered"),
                Ingredient::with_amount("Bell Peppers", "2"),
                Ingredient::with_amount("Olive Oil", "4 tbsp"),
            ],
            steps: vec![
                "Heat the oven to 200°C.".into(),
                "Chop all vegetables into even chunks.".into(),
                "Toss with olive oil, salt, and herbs on a sheet pan.".into(),
                "Roast for 40 minutes, turning once.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "6".into(),
            name: "Garden Salad with Honey Lemon Dressing".into(),
            description: "Crisp lettuce and vegetables under a sweet citrus dressing.".into(),
            cook_time: 10,
            servings: 2,
            calories: 180,
            protein: 3,
            carbs: 20,
            fat: 11,
            difficulty: Easy,
            dietary: vec![Vegetarian, GlutenFree, DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Lettuce", "1 head"),
                Ingredient::with_amount("Tomato", "2"),
                Ingredient::with_amount("Carrot", "1, ribboned"),
                Ingredient::with_amount("Honey", "1 tbsp"),
                Ingredient::with_amount("Lemon", "1, juiced"),
                Ingredient::with_amount("Olive Oil", "2 tbsp"),
            ],
            steps: vec![
                "Tear the lettuce and arrange with tomato and carrot.".into(),
                "Whisk honey, lemon juice, and olive oil into a dressing.".into(),
                "Dress the salad just before serving.".into(),
            ],
            substitutions: HashMap::from([
                ("Honey".into(), vec!["Maple Syrup".into()]),
            ]),
        },
        Recipe {
            id: "7".into(),
            name: "Broccoli Cheddar Soup".into(),
            description: "Velvety broccoli soup thickened with sharp cheddar.".into(),
            cook_time: 40,
            servings: 4,
            calories: 340,
            protein: 15,
            carbs: 22,
            fat: 22,
            difficulty: Medium,
            dietary: vec![Vegetarian],
            ingredients: vec![
                Ingredient::with_amount("Broccoli", "2 heads"),
                Ingredient::with_amount("Cheese", "150 g, cheddar"),
                Ingredient::with_amount("Milk", "500 ml"),
                Ingredient::with_amount("Onion", "1"),
                Ingredient::with_amount("Garlic", "2 cloves"),
            ],
            steps: vec![
                "Soften the onion and garlic in a large pot.".into(),
                "Add broccoli florets and stock and simmer until tender.".into(),
                "Blend until smooth, then stir in milk and cheese off the heat.".into(),
                "Season and serve with crusty bread.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "8".into(),
            name: "Spinach and Ricotta Stuffed Shells".into(),
            description: "Jumbo pasta shells baked in tomato sauce with a spinach filling.".into(),
            cook_time: 60,
            servings: 6,
            calories: 450,
            protein: 21,
            carbs: 55,
            fat: 16,
            difficulty: Hard,
            dietary: vec![Vegetarian],
            ingredients: vec![
                Ingredient::with_amount("Pasta", "24 jumbo shells"),
                Ingredient::with_amount("Spinach", "300 g"),
                Ingredient::with_amount("Cheese", "250 g, ricotta"),
                Ingredient::with_amount("Tomato Sauce", "700 ml"),
                Ingredient::with_amount("Garlic", "3 cloves"),
            ],
            steps: vec![
                "Parboil the shells and wilt the spinach with garlic.".into(),
                "Mix the spinach with ricotta and fill each shell.".into(),
                "Arrange over tomato sauce in a baking dish.".into(),
                "Cover and bake at 190°C for 35 minutes.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "9".into(),
            name: "Herb Roast Chicken".into(),
            description: "Whole roasted chicken over garlicky potatoes and lemon.".into(),
            cook_time: 90,
            servings: 6,
            calories: 560,
            protein: 45,
            carbs: 30,
            fat: 28,
            difficulty: Hard,
            dietary: vec![GlutenFree, DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Chicken", "1 whole, ~1.8 kg"),
                Ingredient::with_amount("Potato", "800 g"),
                Ingredient::with_amount("Garlic", "1 head"),
                Ingredient::with_amount("Lemon", "1"),
                Ingredient::with_amount("Olive Oil", "3 tbsp"),
            ],
            steps: vec![
                "Heat the oven to 190°C and season the bird inside and out.".into(),
                "Stuff with the lemon and half the garlic.".into(),
                "Scatter potatoes and remaining garlic around the tin.".into(),
                "Roast for 75 minutes, resting 15 before carving.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "10".into(),
            name: "Veggie Stir Fry".into(),
            description: "Crunchy mixed vegetables flash-fried and served over rice.".into(),
            cook_time: 20,
            servings: 2,
            calories: 310,
            protein: 9,
            carbs: 52,
            fat: 8,
            difficulty: Easy,
            dietary: vec![Vegetarian, Vegan, GlutenFree, DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Broccoli", "1 head"),
                Ingredient::with_amount("Carrot", "2"),
                Ingredient::with_amount("Bell Peppers", "1"),
                Ingredient::with_amount("Mushroom", "150 g"),
                Ingredient::with_amount("Garlic", "2 cloves"),
                Ingredient::with_amount("Rice", "2 cups, cooked"),
            ],
            steps: vec![
                "Cut all vegetables into bite-sized pieces.".into(),
                "Stir-fry the hardest vegetables first over fierce heat.".into(),
                "Add garlic and sauce in the final minute.".into(),
                "Serve immediately over rice.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "11".into(),
            name: "Shakshuka".into(),
            description: "Eggs poached in a spiced tomato and pepper sauce.".into(),
            cook_time: 35,
            servings: 3,
            calories: 320,
            protein: 17,
            carbs: 18,
            fat: 20,
            difficulty: Medium,
            dietary: vec![Vegetarian, GlutenFree, DairyFree],
            ingredients: vec![
                Ingredient::with_amount("Egg", "6"),
                Ingredient::with_amount("Tomato", "8, chopped"),
                Ingredient::with_amount("Onion", "1"),
                Ingredient::with_amount("Bell Peppers", "1"),
                Ingredient::with_amount("Garlic", "3 cloves"),
                Ingredient::with_amount("Olive Oil", "2 tbsp"),
            ],
            steps: vec![
                "Soften onion and peppers in olive oil.".into(),
                "Add garlic, spices, and tomatoes and simmer until thick.".into(),
                "Make wells and crack in the eggs.".into(),
                "Cover and cook until the whites are just set.".into(),
            ],
            substitutions: HashMap::new(),
        },
        Recipe {
            id: "12".into(),
            name: "Honey Glazed Carrots".into(),
            description: "Tender carrots lacquered in a honey butter glaze.".into(),
            cook_time: 25,
            servings: 4,
            calories: 150,
            protein: 2,
            carbs: 24,
            fat: 6,
            difficulty: Easy,
            dietary: vec![Vegetarian, GlutenFree],
            ingredients: vec![
                Ingredient::with_amount("Carrot", "600 g"),
                Ingredient::with_amount("Honey", "2 tbsp"),
                Ingredient::with_amount("Butter", "30 g"),
            ],
            steps: vec![
                "Simmer the carrots until just tender.".into(),
                "Drain, then return to the pan with butter and honey.".into(),
                "Toss over medium heat until glossy.".into(),
            ],
            substitutions: HashMap::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = RecipeCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_recipe_ids_unique() {
        let catalog = RecipeCatalog::builtin().unwrap();
        let mut ids = HashSet::new();
        for recipe in catalog.recipes() {
            assert!(ids.insert(recipe.id.clone()), "duplicate id {}", recipe.id);
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut recipes = builtin_recipes();
        recipes[1].id = recipes[0].id.clone();
        let result = RecipeCatalog::new(recipes);
        assert!(matches!(result, Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_stable_order() {
        let catalog = RecipeCatalog::builtin().unwrap();
        let first: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
        let second: Vec<&str> = catalog.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_ingredients_union() {
        let catalog = RecipeCatalog::builtin().unwrap();
        let names = catalog.all_ingredients();

        // No duplicates
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());

        // Shared ingredients appear once, as authored
        assert_eq!(names.iter().filter(|n| *n == "Garlic").count(), 1);
        assert!(names.contains(&"Tomato Sauce".to_string()));
        assert!(names.contains(&"Bell Peppers".to_string()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RecipeCatalog::builtin().unwrap();
        assert_eq!(catalog.get("1").unwrap().name, "Spaghetti Pomodoro");
        assert!(catalog.get("999").is_none());
    }
}
