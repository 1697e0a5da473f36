use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    allergen::registry::AllergenRegistry, ingredient_check::normalizer::normalize,
    ingredient_index::trie::IngredientTrie,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum KeywordLevel {
    Common,
    Caution,
}

/// Which allergen lists a keyword, and on which list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KeywordSource {
    pub allergen_id: String,
    pub level: KeywordLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KeywordSuggestion {
    pub keyword: String,
    pub sources: Vec<KeywordSource>,
}

pub type KeywordIndex = IngredientTrie<Vec<KeywordSource>>;

/// Indexes every common and caution keyword of the registry.
///
/// A keyword shared by several allergens keeps one source per allergen, in registry order.
/// When an allergen lists the keyword on both lists, the source is `Common`.
pub fn build_keyword_index(registry: &AllergenRegistry) -> KeywordIndex {
    let mut keywords: BTreeMap<String, Vec<KeywordSource>> = BTreeMap::new();

    for allergen in registry.list_all() {
        let lists = [
            (&allergen.common_ingredients, KeywordLevel::Common),
            (&allergen.caution_ingredients, KeywordLevel::Caution),
        ];

        for (list, level) in lists {
            for keyword in list {
                let sources = keywords.entry(normalize(keyword)).or_default();

                match sources.iter_mut().find(|s| s.allergen_id == allergen.id) {
                    // Common wins, as it does in the classifier.
                    Some(source) => source.level = source.level.min(level),
                    None => sources.push(KeywordSource {
                        allergen_id: allergen.id.clone(),
                        level,
                    }),
                }
            }
        }
    }

    IngredientTrie::from_entries(keywords)
}

/// Keywords starting with `prefix`, ordered alphabetically, at most `limit` of them.
pub fn suggest_keywords(index: &KeywordIndex, prefix: &str, limit: usize) -> Vec<KeywordSuggestion> {
    index
        .search_by_prefix_with_keys(prefix)
        .into_iter()
        .take(limit)
        .map(|(keyword, sources)| KeywordSuggestion {
            keyword,
            sources: sources.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_both_lists() {
        let registry = AllergenRegistry::builtin().unwrap();
        let index = build_keyword_index(&registry);

        let gelatin = index.search("gelatin").unwrap();
        assert!(gelatin.contains(&KeywordSource {
            allergen_id: "alpha-gal".to_string(),
            level: KeywordLevel::Common,
        }));

        let flavors = index.search("Natural Flavors").unwrap();
        assert!(flavors.iter().all(|s| s.level == KeywordLevel::Caution));
        assert!(flavors.len() > 1);
    }

    #[test]
    fn test_one_source_per_allergen() {
        let registry = AllergenRegistry::builtin().unwrap();
        let index = build_keyword_index(&registry);

        for keyword in ["stearic acid", "glycerin"] {
            let alpha_gal: Vec<&KeywordSource> = index
                .search(keyword)
                .unwrap()
                .iter()
                .filter(|s| s.allergen_id == "alpha-gal")
                .collect();
            assert_eq!(
                alpha_gal,
                vec![&KeywordSource {
                    allergen_id: "alpha-gal".to_string(),
                    level: KeywordLevel::Common,
                }],
                "{keyword}"
            );
        }

        let mut keys = Vec::new();
        for suggestion in suggest_keywords(&index, "", usize::MAX) {
            keys.clear();
            for source in &suggestion.sources {
                assert!(
                    !keys.contains(&source.allergen_id),
                    "{} lists {} twice",
                    suggestion.keyword,
                    source.allergen_id
                );
                keys.push(source.allergen_id.clone());
            }
        }
    }

    #[test]
    fn test_keywords_are_normalized_keys() {
        let registry = AllergenRegistry::builtin().unwrap();
        let index = build_keyword_index(&registry);

        assert!(index.contains("brewers yeast"));
        assert!(index.contains("brewer's yeast"));
    }

    #[test]
    fn test_suggest_is_sorted_and_limited() {
        let registry = AllergenRegistry::builtin().unwrap();
        let index = build_keyword_index(&registry);

        let suggestions = suggest_keywords(&index, "WHEAT", 3);
        let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["wheat", "wheat bran", "wheat flour"]);

        assert!(suggest_keywords(&index, "zzz", 10).is_empty());
        assert!(suggest_keywords(&index, "wheat", 0).is_empty());
    }
}
