use std::cmp::Ordering;

use crate::models::{Recipe, RecipeMatch, SearchFilters};

/// Ranking policy for a matching request
///
/// The two strategies intentionally diverge: `Inclusive` is broad discovery
/// ("show me anything I can cook with some of these"), `AllRequired` is the
/// strict image flow ("what can I make with exactly what was detected").
/// They share one matching primitive; only exclusion policy and the score
/// formula differ.
pub enum RankStrategy<'a> {
    /// Weighted partial matching over typed/selected ingredients, with
    /// dietary/difficulty/cook-time filters
    Inclusive {
        selected: &'a [String],
        filters: &'a SearchFilters,
    },
    /// Every detected ingredient must be covered by the recipe
    AllRequired { detected: &'a [String] },
}

/// Scores, filters, and ranks catalog recipes under the given strategy
///
/// Pure and re-entrant: reads only its inputs, so identical calls against an
/// unmodified catalog return identical ordered output.
pub fn rank<'a>(recipes: &'a [Recipe], strategy: RankStrategy<'_>) -> Vec<RecipeMatch<'a>> {
    match strategy {
        RankStrategy::Inclusive { selected, filters } => {
            rank_inclusive(recipes, selected, filters)
        }
        RankStrategy::AllRequired { detected } => rank_all_required(recipes, detected),
    }
}

/// Case-insensitive symmetric match: equal, contains, or contained-by
fn names_match(recipe_name: &str, requested: &str) -> bool {
    let recipe_name = recipe_name.to_lowercase();
    let requested = requested.to_lowercase();
    recipe_name == requested || recipe_name.contains(&requested) || requested.contains(&recipe_name)
}

/// Directional variant: the recipe ingredient equals or contains the
/// requested name. Used only for the all-required bonus count.
fn name_covers(recipe_name: &str, requested: &str) -> bool {
    let recipe_name = recipe_name.to_lowercase();
    let requested = requested.to_lowercase();
    recipe_name == requested || recipe_name.contains(&requested)
}

fn by_score_descending(a: &RecipeMatch, b: &RecipeMatch) -> Ordering {
    b.match_score
        .partial_cmp(&a.match_score)
        .unwrap_or(Ordering::Equal)
}

fn rank_inclusive<'a>(
    recipes: &'a [Recipe],
    selected: &[String],
    filters: &SearchFilters,
) -> Vec<RecipeMatch<'a>> {
    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .iter()
        .map(|recipe| {
            let mut match_score = 0.0;
            let mut matched_count = 0;

            for requested in selected {
                let found = recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| names_match(&ingredient.name, requested));
                if found {
                    matched_count += 1;
                    match_score += 100.0 / selected.len() as f64;
                }
            }

            RecipeMatch {
                recipe,
                match_score,
                matched_count,
            }
        })
        .filter(|entry| {
            // An empty selection must not filter by match count.
            if !selected.is_empty() && entry.matched_count == 0 {
                return false;
            }
            // Every requested dietary tag must be present.
            if !filters.dietary.is_empty()
                && !filters
                    .dietary
                    .iter()
                    .all(|tag| entry.recipe.dietary.contains(tag))
            {
                return false;
            }
            if !filters.difficulty.is_empty()
                && !filters.difficulty.contains(&entry.recipe.difficulty)
            {
                return false;
            }
            filters.cook_time.contains(entry.recipe.cook_time)
        })
        .collect();

    // With nothing selected, catalog order is left untouched.
    if !selected.is_empty() {
        matches.sort_by(by_score_descending);
    }
    matches
}

fn rank_all_required<'a>(recipes: &'a [Recipe], detected: &[String]) -> Vec<RecipeMatch<'a>> {
    if detected.is_empty() {
        return recipes
            .iter()
            .map(|recipe| RecipeMatch {
                recipe,
                match_score: 0.0,
                matched_count: 0,
            })
            .collect();
    }

    let mut matches: Vec<RecipeMatch<'a>> = recipes
        .iter()
        .filter_map(|recipe| {
            let covers_all = detected.iter().all(|requested| {
                recipe
                    .ingredients
                    .iter()
                    .any(|ingredient| names_match(&ingredient.name, requested))
            });
            if !covers_all {
                return None;
            }

            // Every (recipe ingredient, detected name) covering pair adds a
            // bonus on top of the base score, so corroborated recipes can
            // exceed 100.
            let additional_matches: usize = recipe
                .ingredients
                .iter()
                .map(|ingredient| {
                    detected
                        .iter()
                        .filter(|requested| name_covers(&ingredient.name, requested))
                        .count()
                })
                .sum();

            Some(RecipeMatch {
                recipe,
                match_score: 100.0 + 5.0 * additional_matches as f64,
                matched_count: detected.len(),
            })
        })
        .collect();

    matches.sort_by(by_score_descending);
    matches
}
