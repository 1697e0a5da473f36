//! Substitute suggestions for ingredients flagged during a scan.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::scan::entities::Ingredient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SafeAlternative {
    pub name: String,
    pub category: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAlternatives {
    pub ingredient: String,
    pub alternatives: Vec<SafeAlternative>,
}

struct AlternativeRule {
    /// Rule applies when any of these allergens was selected.
    allergens: &'static [&'static str],
    /// ...and the lowercased ingredient name contains one of these.
    keywords: &'static [&'static str],
    suggestions: &'static [(&'static str, &'static str, &'static str)],
}

const RULES: &[AlternativeRule] = &[
    AlternativeRule {
        allergens: &["dairy", "alpha-gal"],
        keywords: &["milk", "dairy"],
        suggestions: &[
            ("Almond Milk", "Plant-Based Milk", "Dairy-free alternative"),
            ("Oat Milk", "Plant-Based Milk", "Creamy, dairy-free option"),
            ("Coconut Milk", "Plant-Based Milk", "Rich, dairy-free alternative"),
        ],
    },
    AlternativeRule {
        allergens: &["dairy", "alpha-gal"],
        keywords: &["butter"],
        suggestions: &[
            ("Vegan Butter", "Plant-Based Spread", "Dairy-free butter substitute"),
            ("Coconut Oil", "Cooking Oil", "Natural, plant-based fat"),
            ("Olive Oil", "Cooking Oil", "Healthy, dairy-free option"),
        ],
    },
    AlternativeRule {
        allergens: &["dairy", "alpha-gal"],
        keywords: &["cheese"],
        suggestions: &[
            ("Cashew Cheese", "Plant-Based Cheese", "Creamy, dairy-free cheese"),
            ("Nutritional Yeast", "Seasoning", "Cheesy flavor without dairy"),
        ],
    },
    AlternativeRule {
        allergens: &["dairy", "alpha-gal"],
        keywords: &["gelatin"],
        suggestions: &[
            ("Agar-Agar", "Plant-Based Gelling Agent", "Seaweed-based gelatin substitute"),
            ("Pectin", "Fruit-Based Gelling Agent", "Plant-derived thickener"),
        ],
    },
    AlternativeRule {
        allergens: &["gluten"],
        keywords: &["wheat", "flour"],
        suggestions: &[
            ("Rice Flour", "Gluten-Free Flour", "Versatile, gluten-free option"),
            ("Almond Flour", "Gluten-Free Flour", "Nutrient-rich alternative"),
            ("Coconut Flour", "Gluten-Free Flour", "High-fiber, gluten-free"),
        ],
    },
    AlternativeRule {
        allergens: &["soy"],
        keywords: &["soy"],
        suggestions: &[
            ("Coconut Aminos", "Soy-Free Sauce", "Soy sauce alternative"),
            ("Sunflower Lecithin", "Emulsifier", "Soy lecithin substitute"),
        ],
    },
    AlternativeRule {
        allergens: &["nuts", "peanuts"],
        keywords: &["peanut", "nut"],
        suggestions: &[
            ("Sunflower Seed Butter", "Seed Butter", "Nut-free spread"),
            ("Tahini", "Seed Butter", "Sesame-based, nut-free"),
        ],
    },
];

/// Substitutes for one ingredient, given the allergens the user selected.
///
/// Only ingredients the model tied to at least one allergen get suggestions.
pub fn safe_alternatives<S: AsRef<str>>(
    ingredient: &Ingredient,
    allergen_ids: &[S],
) -> Vec<SafeAlternative> {
    let flagged = ingredient
        .allergen_ids
        .as_ref()
        .is_some_and(|ids| !ids.is_empty());
    if !flagged {
        return Vec::new();
    }

    let name = ingredient.name.to_lowercase();
    let selected = |id: &str| allergen_ids.iter().any(|s| s.as_ref() == id);

    RULES
        .iter()
        .filter(|rule| rule.allergens.iter().any(|&id| selected(id)))
        .filter(|rule| rule.keywords.iter().any(|&keyword| name.contains(keyword)))
        .flat_map(|rule| rule.suggestions.iter())
        .map(|(alternative, category, reason)| SafeAlternative {
            name: alternative.to_string(),
            category: category.to_string(),
            reason: reason.to_string(),
        })
        .collect()
}

/// Suggestions for every unsafe ingredient of a scan, in ingredient order.
///
/// Ingredients without suggestions are left out; a repeated name is reported once.
pub fn safe_alternatives_for_scan<S: AsRef<str>>(
    ingredients: &[Ingredient],
    allergen_ids: &[S],
) -> Vec<IngredientAlternatives> {
    let mut result: Vec<IngredientAlternatives> = Vec::new();

    for ingredient in ingredients.iter().filter(|i| i.is_unsafe()) {
        if result.iter().any(|r| r.ingredient == ingredient.name) {
            continue;
        }

        let alternatives = safe_alternatives(ingredient, allergen_ids);
        if !alternatives.is_empty() {
            result.push(IngredientAlternatives {
                ingredient: ingredient.name.clone(),
                alternatives,
            });
        }
    }

    result
}
