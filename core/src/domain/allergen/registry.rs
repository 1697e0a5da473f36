use std::collections::HashMap;

use crate::domain::{
    allergen::{catalog::builtin_allergens, entities::AllergenDefinition},
    common::entities::app_errors::CoreError,
    ingredient_check::normalizer::normalize,
};

/// A definition together with its keyword lists already normalized.
#[derive(Debug, Clone)]
pub(crate) struct RegisteredAllergen {
    pub(crate) definition: AllergenDefinition,
    pub(crate) common_keywords: Vec<String>,
    pub(crate) caution_keywords: Vec<String>,
}

impl From<AllergenDefinition> for RegisteredAllergen {
    fn from(definition: AllergenDefinition) -> Self {
        let common_keywords = definition
            .common_ingredients
            .iter()
            .map(|k| normalize(k))
            .collect();
        let caution_keywords = definition
            .caution_ingredients
            .iter()
            .map(|k| normalize(k))
            .collect();

        Self {
            definition,
            common_keywords,
            caution_keywords,
        }
    }
}

/// Read-only lookup table of allergen definitions.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct AllergenRegistry {
    entries: Vec<RegisteredAllergen>,
    definitions: Vec<AllergenDefinition>,
    by_id: HashMap<String, usize>,
}

impl AllergenRegistry {
    /// Builds a registry from custom definitions, rejecting duplicate ids.
    pub fn new(definitions: Vec<AllergenDefinition>) -> Result<Self, CoreError> {
        let mut by_id = HashMap::with_capacity(definitions.len());

        for (index, definition) in definitions.iter().enumerate() {
            if by_id.insert(definition.id.clone(), index).is_some() {
                return Err(CoreError::InvalidInput(format!(
                    "duplicate allergen id: {}",
                    definition.id
                )));
            }
        }

        let entries = definitions
            .iter()
            .cloned()
            .map(RegisteredAllergen::from)
            .collect();

        Ok(Self {
            entries,
            definitions,
            by_id,
        })
    }

    /// The table shipped with the application, validated like any custom table.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::new(builtin_allergens())
    }

    pub fn get_by_id(&self, id: &str) -> Option<&AllergenDefinition> {
        self.by_id.get(id).map(|&index| &self.definitions[index])
    }

    pub fn list_all(&self) -> &[AllergenDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub(crate) fn entry(&self, id: &str) -> Option<&RegisteredAllergen> {
        self.by_id.get(id).map(|&index| &self.entries[index])
    }
}
