use std::collections::HashSet;

use super::histogram::{ColorBucket, ColorHistogram};

/// Color evidence an ingredient's presence is inferred from
///
/// The label lists are carried configuration: only the six named labels with
/// a proxy rule below can ever fire; the remaining labels (hex strings,
/// "golden", "pink") are inert, which leaves some entries undetectable by
/// image.
pub struct IngredientPattern {
    pub ingredient: &'static str,
    pub colors: &'static [&'static str],
}

/// Fixed ingredient pattern table
pub const INGREDIENT_PATTERNS: &[IngredientPattern] = &[
    IngredientPattern { ingredient: "Potato", colors: &["brown", "8b4513", "a0522d"] },
    IngredientPattern { ingredient: "Tomato", colors: &["red", "ff0000", "ff4444"] },
    IngredientPattern { ingredient: "Chicken", colors: &["yellow", "ffff00", "ffcc99"] },
    IngredientPattern { ingredient: "Broccoli", colors: &["green", "00ff00", "228b22"] },
    IngredientPattern { ingredient: "Carrot", colors: &["orange", "ff8c00", "ffa500"] },
    IngredientPattern { ingredient: "Garlic", colors: &["white", "ffffff", "f5f5f5"] },
    IngredientPattern { ingredient: "Onion", colors: &["yellow", "golden", "ff00ff"] },
    IngredientPattern { ingredient: "Lettuce", colors: &["green", "00ff00", "90ee90"] },
    IngredientPattern { ingredient: "Cheese", colors: &["yellow", "ffff00", "ffd700"] },
    IngredientPattern { ingredient: "Egg", colors: &["white", "ffffff", "fffacd"] },
    IngredientPattern { ingredient: "Mushroom", colors: &["brown", "8b4513", "d2691e"] },
    IngredientPattern { ingredient: "Spinach", colors: &["green", "006400", "228b22"] },
    IngredientPattern { ingredient: "Pepper", colors: &["red", "ff0000", "ff6347"] },
    IngredientPattern { ingredient: "Bell Peppers", colors: &["red", "ff0000", "ff6347"] },
    IngredientPattern { ingredient: "OliveOil", colors: &["golden", "ffd700", "daa520"] },
    IngredientPattern { ingredient: "Salmon", colors: &["pink", "ff69b4", "ffb6c1"] },
    IngredientPattern { ingredient: "Rice", colors: &["white", "ffffff", "f5f5dc"] },
    IngredientPattern { ingredient: "Pasta", colors: &["yellow", "ffff00", "ffd700"] },
    IngredientPattern { ingredient: "Milk", colors: &["white", "ffffff", "f0f8ff"] },
    IngredientPattern { ingredient: "Honey", colors: &["golden", "ffd700", "daa520"] },
    IngredientPattern { ingredient: "Lemon", colors: &["yellow", "ffff00", "ffd700"] },
];

/// Whether a declared color label is evidenced by the histogram
///
/// Only these six labels have a proxy rule; every other label never fires.
/// Red additionally accepts orange evidence, and orange accepts yellow.
fn color_evidence(color: &str, histogram: &ColorHistogram) -> bool {
    match color {
        "red" => histogram.contains(ColorBucket::Red) || histogram.contains(ColorBucket::Orange),
        "green" => histogram.contains(ColorBucket::Green),
        "orange" => {
            histogram.contains(ColorBucket::Orange) || histogram.contains(ColorBucket::Yellow)
        }
        "yellow" => histogram.contains(ColorBucket::Yellow),
        "white" => histogram.contains(ColorBucket::White),
        "brown" => histogram.contains(ColorBucket::Brown),
        _ => false,
    }
}

/// Maps a histogram to candidate ingredient names
///
/// Candidates are restricted to names that exist in the catalog (exact,
/// case-sensitive); table entries the catalog does not contain are silently
/// skipped. An empty result is a valid "nothing detected" outcome, not an
/// error.
pub fn detect_candidates(
    histogram: &ColorHistogram,
    catalog_ingredients: &[String],
) -> Vec<String> {
    let catalog: HashSet<&str> = catalog_ingredients.iter().map(String::as_str).collect();

    let mut detected = Vec::new();
    for pattern in INGREDIENT_PATTERNS {
        if !catalog.contains(pattern.ingredient) {
            continue;
        }
        if detected.iter().any(|d: &String| d == pattern.ingredient) {
            continue;
        }
        if pattern
            .colors
            .iter()
            .any(|color| color_evidence(color, histogram))
        {
            detected.push(pattern.ingredient.to_string());
        }
    }
    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn histogram_with(buckets: &[ColorBucket]) -> ColorHistogram {
        let mut histogram = ColorHistogram::default();
        for &bucket in buckets {
            histogram.record(bucket);
        }
        histogram
    }

    #[test]
    fn test_red_histogram_detects_red_patterns() {
        let histogram = histogram_with(&[ColorBucket::Red]);
        let detected = detect_candidates(
            &histogram,
            &catalog(&["Tomato", "Bell Peppers", "Garlic"]),
        );
        assert_eq!(detected, vec!["Tomato", "Bell Peppers"]);
    }

    #[test]
    fn test_orange_satisfies_red_proxy() {
        // Red patterns accept orange evidence; yellow-only patterns do not.
        let histogram = histogram_with(&[ColorBucket::Orange]);
        let detected = detect_candidates(
            &histogram,
            &catalog(&["Tomato", "Carrot", "Lemon"]),
        );
        assert_eq!(detected, vec!["Tomato", "Carrot"]);
    }

    #[test]
    fn test_yellow_satisfies_orange_proxy() {
        let histogram = histogram_with(&[ColorBucket::Yellow]);
        let detected = detect_candidates(&histogram, &catalog(&["Carrot", "Lemon"]));
        assert_eq!(detected, vec!["Carrot", "Lemon"]);
    }

    #[test]
    fn test_candidates_restricted_to_catalog() {
        let histogram = histogram_with(&[ColorBucket::Red]);
        // "Pepper" is in the table but not this catalog; "Tomato" is absent too.
        let detected = detect_candidates(&histogram, &catalog(&["Bell Peppers"]));
        assert_eq!(detected, vec!["Bell Peppers"]);
    }

    #[test]
    fn test_empty_histogram_detects_nothing() {
        let detected = detect_candidates(
            &ColorHistogram::default(),
            &catalog(&["Tomato", "Garlic", "Broccoli"]),
        );
        assert!(detected.is_empty());
    }

    #[test]
    fn test_labels_without_proxy_rule_never_fire() {
        // Salmon ("pink") and Honey ("golden") declare no rule-backed label,
        // so they stay undetectable even with every bucket populated.
        let histogram = histogram_with(&ColorBucket::ALL);
        let detected = detect_candidates(&histogram, &catalog(&["Salmon", "Honey"]));
        assert!(detected.is_empty());
    }

    #[test]
    fn test_output_subset_of_catalog() {
        let histogram = histogram_with(&ColorBucket::ALL);
        let names = catalog(&["Tomato", "Garlic", "Rice", "Spinach", "Mushroom"]);
        let detected = detect_candidates(&histogram, &names);

        assert!(!detected.is_empty());
        for name in &detected {
            assert!(names.contains(name));
        }
    }
}
