use crate::domain::{
    allergen::registry::AllergenRegistry,
    ingredient_check::{
        classifier::IngredientClassifier,
        entities::{IngredientClassificationResult, SafetyStatus},
    },
    scan::entities::{
        CrossCheckReport, Ingredient, IngredientDisagreement, ScanResult, ScanSummary,
    },
};

/// Scan verdict from model ingredients: unsafe beats caution beats safe.
pub fn determine_overall_safety(ingredients: &[Ingredient]) -> SafetyStatus {
    if ingredients.iter().any(Ingredient::is_unsafe) {
        SafetyStatus::Unsafe
    } else if ingredients.iter().any(Ingredient::needs_caution) {
        SafetyStatus::Caution
    } else {
        SafetyStatus::Safe
    }
}

/// Re-runs the keyword classifier over the names the model returned.
///
/// Only English names are meaningful here, the keyword lists being English.
pub fn cross_check<S: AsRef<str>>(
    classifier: IngredientClassifier<'_>,
    ingredients: &[Ingredient],
    allergen_ids: &[S],
) -> CrossCheckReport {
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    let deterministic = classifier.analyze_ingredients(&names, allergen_ids);

    let disagreements = ingredients
        .iter()
        .zip(&deterministic.ingredients)
        .filter(|(model, checked)| model.status() != checked.status)
        .map(|(model, checked)| IngredientDisagreement {
            ingredient: model.name.clone(),
            model_status: model.status(),
            deterministic_status: checked.status,
            matched_allergens: checked.matched_allergens.clone(),
        })
        .collect();

    CrossCheckReport {
        deterministic_safety: deterministic.overall_safety,
        disagreements,
    }
}

/// Turns a keyword classification into the scan ingredient shape.
///
/// Matched allergen names are mapped back to their ids through the registry.
pub fn ingredient_from_classification(
    result: &IngredientClassificationResult,
    registry: &AllergenRegistry,
) -> Ingredient {
    let allergen_ids: Vec<String> = registry
        .list_all()
        .iter()
        .filter(|allergen| result.matched_allergens.contains(&allergen.name))
        .map(|allergen| allergen.id.clone())
        .collect();
    let is_allergen = !result.matched_allergens.is_empty();

    Ingredient {
        name: result.ingredient.clone(),
        is_mammal_based: allergen_ids.iter().any(|id| id == "alpha-gal"),
        category: None,
        explanation: result.explanation.clone(),
        requires_caution: Some(result.requires_caution),
        allergen_ids: Some(allergen_ids),
        is_allergen: Some(is_allergen),
    }
}

impl From<&ScanResult> for ScanSummary {
    fn from(scan: &ScanResult) -> Self {
        let title = match scan.status {
            SafetyStatus::Safe => "Safe to Consume",
            SafetyStatus::Caution => "Caution Required",
            SafetyStatus::Unsafe => "Not Safe",
        };
        let unsafe_count = scan.ingredients.iter().filter(|i| i.is_unsafe()).count();
        let caution_count = scan
            .ingredients
            .iter()
            .filter(|i| !i.is_unsafe() && i.needs_caution())
            .count();

        Self {
            title: title.to_string(),
            status: scan.status,
            product_name: scan.product_name.clone(),
            ingredient_count: scan.ingredients.len(),
            unsafe_count,
            caution_count,
        }
    }
}

/// Shareable plain-text result: status, product, then the unsafe and caution names.
pub fn share_text(scan: &ScanResult) -> String {
    let (emoji, status) = match scan.status {
        SafetyStatus::Safe => ("✅", "SAFE"),
        SafetyStatus::Caution => ("⚠️", "CAUTION"),
        SafetyStatus::Unsafe => ("❌", "UNSAFE"),
    };

    let mut text = format!("AlphaGo Scan Result {emoji}\n\n");
    if let Some(product_name) = &scan.product_name {
        text.push_str(&format!("Product: {product_name}\n"));
    }
    text.push_str(&format!("Status: {status}\n"));
    text.push_str(&format!(
        "Ingredients analyzed: {}\n\n",
        scan.ingredients.len()
    ));

    let unsafe_names: Vec<&str> = scan
        .ingredients
        .iter()
        .filter(|i| i.is_unsafe())
        .map(|i| i.name.as_str())
        .collect();
    let caution_names: Vec<&str> = scan
        .ingredients
        .iter()
        .filter(|i| !i.is_unsafe() && i.needs_caution())
        .map(|i| i.name.as_str())
        .collect();

    for (heading, names) in [
        ("❌ Unsafe Ingredients", unsafe_names),
        ("⚠️ Caution Required", caution_names),
    ] {
        if names.is_empty() {
            continue;
        }
        text.push_str(&format!("{heading} ({}):\n", names.len()));
        for name in names {
            text.push_str(&format!("  • {name}\n"));
        }
        text.push('\n');
    }

    text.push_str("\nScanned with AlphaGo - Allergen-Safe Scanning");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            is_mammal_based: false,
            category: None,
            explanation: None,
            requires_caution: None,
            allergen_ids: None,
            is_allergen: None,
        }
    }

    #[test]
    fn test_determine_overall_safety() {
        let water = ingredient("water");
        let mut flavors = ingredient("natural flavors");
        flavors.requires_caution = Some(true);
        let mut gelatin = ingredient("gelatin");
        gelatin.is_mammal_based = true;

        assert_eq!(determine_overall_safety(&[]), SafetyStatus::Safe);
        assert_eq!(
            determine_overall_safety(&[water.clone()]),
            SafetyStatus::Safe
        );
        assert_eq!(
            determine_overall_safety(&[water.clone(), flavors.clone()]),
            SafetyStatus::Caution
        );
        assert_eq!(
            determine_overall_safety(&[flavors, water, gelatin]),
            SafetyStatus::Unsafe
        );
    }

    #[test]
    fn test_cross_check_flags_missed_allergen() {
        let registry = AllergenRegistry::builtin().unwrap();
        let ingredients = vec![ingredient("water"), ingredient("gelatin")];

        let report = cross_check(
            IngredientClassifier::new(&registry),
            &ingredients,
            &["alpha-gal"],
        );

        assert_eq!(report.deterministic_safety, SafetyStatus::Unsafe);
        assert!(!report.agrees());
        assert_eq!(report.disagreements.len(), 1);
        let gelatin = &report.disagreements[0];
        assert_eq!(gelatin.ingredient, "gelatin");
        assert_eq!(gelatin.model_status, SafetyStatus::Safe);
        assert_eq!(gelatin.deterministic_status, SafetyStatus::Unsafe);
        assert_eq!(gelatin.matched_allergens, vec!["Alpha-Gal"]);
    }

    #[test]
    fn test_cross_check_agreement() {
        let registry = AllergenRegistry::builtin().unwrap();
        let mut gelatin = ingredient("gelatin");
        gelatin.is_allergen = Some(true);

        let report = cross_check(
            IngredientClassifier::new(&registry),
            &[ingredient("salt"), gelatin],
            &["alpha-gal"],
        );
        assert!(report.agrees());
    }

    #[test]
    fn test_ingredient_from_classification_maps_ids() {
        let registry = AllergenRegistry::builtin().unwrap();
        let result = IngredientClassifier::new(&registry).classify("milk", &["dairy", "alpha-gal"]);
        let ingredient = ingredient_from_classification(&result, &registry);

        assert_eq!(
            ingredient.allergen_ids,
            Some(vec!["alpha-gal".to_string(), "dairy".to_string()])
        );
        assert!(ingredient.is_mammal_based);
        assert_eq!(ingredient.status(), SafetyStatus::Unsafe);
    }

    #[test]
    fn test_summary_counts() {
        let mut gelatin = ingredient("gelatin");
        gelatin.is_allergen = Some(true);
        gelatin.requires_caution = Some(true);
        let mut flavors = ingredient("natural flavors");
        flavors.requires_caution = Some(true);

        let scan = ScanResult::new(
            SafetyStatus::Unsafe,
            vec![gelatin, flavors, ingredient("water")],
            Some("Gummies".to_string()),
            vec!["alpha-gal".to_string()],
        );
        let summary = ScanSummary::from(&scan);

        assert_eq!(summary.title, "Not Safe");
        assert_eq!(summary.ingredient_count, 3);
        assert_eq!(summary.unsafe_count, 1);
        assert_eq!(summary.caution_count, 1);
        assert_eq!(summary.product_name.as_deref(), Some("Gummies"));
    }

    #[test]
    fn test_summary_titles() {
        let safe = ScanResult::new(SafetyStatus::Safe, vec![], None, vec![]);
        assert_eq!(ScanSummary::from(&safe).title, "Safe to Consume");

        let caution = ScanResult::new(SafetyStatus::Caution, vec![], None, vec![]);
        assert_eq!(ScanSummary::from(&caution).title, "Caution Required");
    }

    #[test]
    fn test_share_text_lists_flagged_ingredients() {
        let mut gelatin = ingredient("gelatin");
        gelatin.is_mammal_based = true;
        gelatin.requires_caution = Some(true);
        let mut flavors = ingredient("natural flavors");
        flavors.requires_caution = Some(true);

        let scan = ScanResult::new(
            SafetyStatus::Unsafe,
            vec![ingredient("sugar"), gelatin, flavors],
            Some("Fruit Gummies".to_string()),
            vec!["alpha-gal".to_string()],
        );

        assert_eq!(
            share_text(&scan),
            "AlphaGo Scan Result ❌\n\n\
             Product: Fruit Gummies\n\
             Status: UNSAFE\n\
             Ingredients analyzed: 3\n\n\
             ❌ Unsafe Ingredients (1):\n  • gelatin\n\n\
             ⚠️ Caution Required (1):\n  • natural flavors\n\n\
             \nScanned with AlphaGo - Allergen-Safe Scanning"
        );
    }

    #[test]
    fn test_share_text_for_safe_scan_without_product() {
        let scan = ScanResult::new(SafetyStatus::Safe, vec![ingredient("water")], None, vec![]);

        assert_eq!(
            share_text(&scan),
            "AlphaGo Scan Result ✅\n\nStatus: SAFE\nIngredients analyzed: 1\n\n\
             \nScanned with AlphaGo - Allergen-Safe Scanning"
        );
    }
}
