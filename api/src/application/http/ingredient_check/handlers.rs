pub mod analyze_ingredients;
pub mod analyze_label_text;
pub mod classify_ingredient;
pub mod suggest_keywords;
