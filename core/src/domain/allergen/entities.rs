use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergenDefinition {
    #[schema(example = "alpha-gal")]
    pub id: String,
    #[schema(example = "Alpha-Gal")]
    pub name: String,
    pub description: String,
    /// Keywords whose presence is a definite match.
    pub common_ingredients: Vec<String>,
    /// Keywords whose presence needs the source verified.
    pub caution_ingredients: Vec<String>,
}

impl AllergenDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        common_ingredients: &[&str],
        caution_ingredients: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            common_ingredients: common_ingredients.iter().map(|s| s.to_string()).collect(),
            caution_ingredients: caution_ingredients.iter().map(|s| s.to_string()).collect(),
        }
    }
}
