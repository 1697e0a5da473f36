#[derive(Debug, Clone)]
pub struct ClassifyIngredientInput {
    pub ingredient_name: String,
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub ingredients: Vec<String>,
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AnalyzeLabelTextInput {
    pub label_text: String,
    pub allergen_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SuggestKeywordsInput {
    pub prefix: String,
    pub limit: usize,
}
