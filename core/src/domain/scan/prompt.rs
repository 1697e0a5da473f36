use std::fmt::Write as _;

use crate::domain::{allergen::entities::AllergenDefinition, scan::value_objects::OutputLanguage};

/// Where the ingredient list comes from, as worded in the instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSource {
    Image,
    Text,
}

impl PromptSource {
    fn describe(&self) -> &str {
        match self {
            PromptSource::Image => "the image",
            PromptSource::Text => "the label text below",
        }
    }
}

/// One block per selected allergen, listing what to avoid and what to double check.
pub fn build_allergen_context(allergens: &[&AllergenDefinition]) -> String {
    let mut context = String::new();

    for allergen in allergens {
        let _ = write!(context, "\n\n{} ALLERGY:\n", allergen.name.to_uppercase());
        let _ = writeln!(context, "Description: {}", allergen.description);
        let _ = writeln!(
            context,
            "Common ingredients to avoid: {}",
            allergen.common_ingredients.join(", ")
        );
        let _ = writeln!(
            context,
            "Caution ingredients (verify source): {}",
            allergen.caution_ingredients.join(", ")
        );
    }

    context
}

/// Full scan prompt: allergen context, instructions and the expected JSON shape.
///
/// For text scans the label text is appended after the JSON shape.
pub fn build_scan_prompt(
    allergens: &[&AllergenDefinition],
    language: OutputLanguage,
    source: PromptSource,
    label_text: Option<&str>,
) -> String {
    let language = language.display_name();
    let mut prompt = build_allergen_context(allergens);

    let _ = write!(
        prompt,
        r#"

IMPORTANT INSTRUCTIONS:
1. Extract ALL ingredients from {source}, regardless of language
2. Translate each ingredient to English for allergen checking
3. Check against the allergen lists above
4. Translate all output to {language}

Respond with ONLY valid JSON:
{{
  "productName": "product name in {language}",
  "ingredients": [
    {{
      "name": "ingredient name in {language}",
      "isMammalBased": false,
      "category": "category in {language}",
      "explanation": "explanation in {language}",
      "requiresCaution": false,
      "allergenIds": ["allergen ids"],
      "isAllergen": false
    }}
  ],
  "overallSafety": "safe" or "unsafe" or "caution"
}}"#,
        source = source.describe(),
    );

    if let Some(text) = label_text {
        let _ = write!(prompt, "\n\nLABEL TEXT:\n{}", text.trim());
    }

    prompt
}
