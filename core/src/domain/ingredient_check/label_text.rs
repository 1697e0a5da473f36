use std::sync::LazyLock;

use regex::Regex;

static ANNOTATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)|\[[^\]]*\]|\{[^}]*\}|\*").expect("valid annotation pattern")
});

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;]").expect("valid separator pattern"));

/// Splits a printed ingredient list into individual ingredient names.
///
/// Parenthesised, bracketed and braced annotations and `*` marks are dropped before
/// splitting on commas and semicolons.
pub fn parse_ingredients_from_text(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let cleaned = ANNOTATIONS.replace_all(text, "");

    SEPARATORS
        .split(&cleaned)
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_commas_and_semicolons() {
        let parsed = parse_ingredients_from_text("water, sugar; salt,gelatin");
        assert_eq!(parsed, vec!["water", "sugar", "salt", "gelatin"]);
    }

    #[test]
    fn test_drops_annotations() {
        let parsed = parse_ingredients_from_text(
            "milk (pasteurized), soy lecithin [emulsifier], natural flavors*, cocoa {fair trade}",
        );
        assert_eq!(
            parsed,
            vec!["milk", "soy lecithin", "natural flavors", "cocoa"]
        );
    }

    #[test]
    fn test_commas_inside_annotations_do_not_split() {
        let parsed = parse_ingredients_from_text("chocolate (sugar, cocoa butter), salt");
        assert_eq!(parsed, vec!["chocolate", "salt"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_ingredients_from_text("").is_empty());
        assert!(parse_ingredients_from_text("  ,, ; ").is_empty());
    }
}
