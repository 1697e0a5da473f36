//! Built-in allergen table shipped with the application.

use super::entities::AllergenDefinition;

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    common: &'static [&'static str],
    caution: &'static [&'static str],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "alpha-gal",
        name: "Alpha-Gal",
        description: "Food allergy to red meat and other products from mammals",
        common: &[
            "gelatin", "lard", "tallow", "beef fat", "pork fat", "whey", "casein", "lactose",
            "milk", "cream", "butter", "cheese", "stearic acid", "glycerin", "glycerol",
            "magnesium stearate", "collagen", "keratin", "rennet", "beef", "pork", "lamb",
            "deer", "goat", "bison", "veal",
        ],
        caution: &[
            "carrageenan", "natural flavors", "mono and diglycerides", "vitamin d3",
            "stearic acid", "glycerin",
        ],
    },
    CatalogEntry {
        id: "dairy",
        name: "Dairy",
        description: "Allergy to milk and dairy products",
        common: &[
            "milk", "cream", "butter", "cheese", "yogurt", "whey", "casein", "lactose", "ghee",
            "buttermilk", "sour cream", "cottage cheese", "cream cheese", "milk powder",
            "nonfat dry milk", "milk solids", "curds", "custard", "half and half", "ice cream",
            "pudding", "lactalbumin", "lactoglobulin",
        ],
        caution: &[
            "natural flavors", "caramel color", "high protein flour", "lactic acid", "lactate",
        ],
    },
    CatalogEntry {
        id: "nuts",
        name: "Tree Nuts",
        description: "Allergy to tree nuts",
        common: &[
            "almond", "cashew", "walnut", "pecan", "pistachio", "hazelnut", "macadamia",
            "brazil nut", "pine nut", "chestnut", "beechnut", "butternut", "chinquapin",
            "ginkgo nut", "hickory nut", "nut butter", "nut oil", "nut flour", "marzipan",
            "nougat", "praline", "gianduja", "nut paste",
        ],
        caution: &["natural flavors", "artificial flavors", "natural nut extract"],
    },
    CatalogEntry {
        id: "peanuts",
        name: "Peanuts",
        description: "Allergy to peanuts (legume)",
        common: &[
            "peanut", "peanut butter", "peanut oil", "peanut flour", "groundnut", "goober",
            "beer nuts", "monkey nuts", "arachis oil", "ground nuts", "mixed nuts",
        ],
        caution: &["natural flavors", "artificial flavors"],
    },
    CatalogEntry {
        id: "gluten",
        name: "Gluten/Celiac",
        description: "Sensitivity to gluten found in wheat, barley, and rye",
        common: &[
            "wheat", "barley", "rye", "malt", "brewer's yeast", "wheat starch", "wheat flour",
            "durum", "semolina", "spelt", "kamut", "farro", "bulgur", "couscous", "seitan",
            "wheat germ", "wheat bran", "triticale", "einkorn", "farina", "graham flour",
            "matzo", "wheat protein", "hydrolyzed wheat protein",
        ],
        caution: &[
            "modified food starch", "natural flavors", "caramel color", "dextrin",
            "maltodextrin", "glucose syrup", "brown rice syrup", "soy sauce", "oats",
        ],
    },
    CatalogEntry {
        id: "soy",
        name: "Soy",
        description: "Allergy to soybeans and soy products",
        common: &[
            "soy", "soybean", "soy sauce", "soy milk", "tofu", "tempeh", "edamame", "miso",
            "natto", "soy protein", "soy lecithin", "soy flour", "soy oil",
            "textured vegetable protein", "tvp", "soy nuts", "soybean oil",
            "hydrolyzed soy protein",
        ],
        caution: &[
            "natural flavors", "artificial flavors", "vegetable oil", "vegetable broth",
            "vegetable starch",
        ],
    },
    CatalogEntry {
        id: "eggs",
        name: "Eggs",
        description: "Allergy to eggs",
        common: &[
            "egg", "egg white", "egg yolk", "egg powder", "albumin", "egg albumin", "globulin",
            "livetin", "lysozyme", "ovalbumin", "ovomucin", "ovomucoid", "ovovitellin",
            "mayonnaise", "meringue", "eggnog", "surimi",
        ],
        caution: &["natural flavors", "lecithin", "simplesse"],
    },
    CatalogEntry {
        id: "fish",
        name: "Fish",
        description: "Allergy to fish",
        common: &[
            "fish", "salmon", "tuna", "cod", "halibut", "bass", "flounder", "anchovies",
            "sardines", "tilapia", "catfish", "haddock", "pollock", "trout", "mahi mahi",
            "snapper", "fish sauce", "fish oil", "fish gelatin", "worcestershire sauce",
            "caesar dressing", "imitation crab",
        ],
        caution: &["natural flavors", "omega-3 supplements", "dha", "fish stock"],
    },
    CatalogEntry {
        id: "shellfish",
        name: "Shellfish",
        description: "Allergy to crustaceans and mollusks",
        common: &[
            "shrimp", "crab", "lobster", "crayfish", "prawns", "clam", "oyster", "mussel",
            "scallop", "squid", "octopus", "cuttlefish", "barnacle", "krill", "langoustine",
            "shellfish stock", "shellfish extract", "surimi", "glucosamine", "chitosan",
        ],
        caution: &[
            "natural flavors", "seafood flavoring", "fish stock", "bouillabaisse",
        ],
    },
    CatalogEntry {
        id: "sesame",
        name: "Sesame",
        description: "Allergy to sesame seeds",
        common: &[
            "sesame", "sesame seed", "sesame oil", "tahini", "sesame paste", "sesame flour",
            "sesamol", "sesamum indicum", "benne", "gingelly", "til", "halvah", "hummus",
            "baba ghanoush",
        ],
        caution: &["natural flavors", "spices", "flavoring"],
    },
    CatalogEntry {
        id: "corn",
        name: "Corn",
        description: "Allergy to corn and corn products",
        common: &[
            "corn", "cornmeal", "cornstarch", "corn flour", "corn syrup",
            "high fructose corn syrup", "corn oil", "popcorn", "hominy", "masa", "polenta",
            "grits", "maize", "corn chips", "tortilla", "dextrose", "maltodextrin", "dextrin",
            "glucose syrup",
        ],
        caution: &[
            "natural flavors", "modified food starch", "vegetable oil", "citric acid",
            "xanthan gum", "caramel color", "baking powder", "powdered sugar",
            "vanilla extract",
        ],
    },
    CatalogEntry {
        id: "sulfites",
        name: "Sulfites",
        description: "Sensitivity to sulfur-based preservatives",
        common: &[
            "sulfur dioxide", "sodium sulfite", "sodium bisulfite", "potassium bisulfite",
            "sodium metabisulfite", "potassium metabisulfite", "sulfiting agents",
        ],
        caution: &[
            "dried fruits", "wine", "beer", "pickled foods", "vinegar", "fruit juices",
            "molasses",
        ],
    },
    CatalogEntry {
        id: "mustard",
        name: "Mustard",
        description: "Allergy to mustard seeds and products",
        common: &[
            "mustard", "mustard seed", "mustard powder", "mustard oil", "dijon mustard",
            "yellow mustard", "brown mustard", "mustard greens", "prepared mustard",
            "mustard flour",
        ],
        caution: &["spices", "curry powder", "natural flavors", "seasonings"],
    },
    CatalogEntry {
        id: "legumes",
        name: "Legumes",
        description: "Allergy to beans, lentils, and other legumes",
        common: &[
            "chickpea", "lentil", "black bean", "kidney bean", "pinto bean", "navy bean",
            "lima bean", "green bean", "pea", "lupin", "carob", "fenugreek", "tamarind",
            "bean flour", "pea protein",
        ],
        caution: &["vegetable protein", "natural flavors", "guar gum"],
    },
    CatalogEntry {
        id: "pork",
        name: "Pork",
        description: "Allergy or avoidance of pork products",
        common: &[
            "pork", "ham", "bacon", "sausage", "pepperoni", "prosciutto", "pancetta",
            "pork fat", "lard", "pork gelatin", "chitlins", "pork rinds",
        ],
        caution: &["gelatin", "natural flavors", "enzymes", "pepsin"],
    },
    CatalogEntry {
        id: "beef",
        name: "Beef",
        description: "Allergy or avoidance of beef products",
        common: &[
            "beef", "steak", "ground beef", "beef broth", "beef stock", "beef tallow",
            "beef fat", "beef gelatin", "veal", "beef extract",
        ],
        caution: &["gelatin", "natural flavors", "tallow", "suet"],
    },
    CatalogEntry {
        id: "chicken",
        name: "Chicken",
        description: "Allergy to chicken and poultry",
        common: &[
            "chicken", "chicken broth", "chicken stock", "chicken fat", "chicken powder",
            "poultry seasoning", "chicken extract",
        ],
        caution: &["natural flavors", "poultry fat", "stock"],
    },
    CatalogEntry {
        id: "garlic",
        name: "Garlic",
        description: "Allergy or intolerance to garlic",
        common: &[
            "garlic", "garlic powder", "garlic salt", "garlic oil", "garlic extract",
            "roasted garlic", "garlic paste", "minced garlic",
        ],
        caution: &["natural flavors", "spices", "seasonings"],
    },
    CatalogEntry {
        id: "onion",
        name: "Onion",
        description: "Allergy or intolerance to onions",
        common: &[
            "onion", "onion powder", "onion salt", "onion oil", "onion extract",
            "dried onion", "caramelized onion", "shallot", "scallion", "leek", "chives",
        ],
        caution: &["natural flavors", "spices", "seasonings"],
    },
    CatalogEntry {
        id: "nightshades",
        name: "Nightshades",
        description: "Sensitivity to nightshade vegetables",
        common: &[
            "tomato", "potato", "eggplant", "bell pepper", "chili pepper", "cayenne",
            "paprika", "goji berry", "tomatillo", "pepino", "tobacco", "potato starch",
        ],
        caution: &["natural flavors", "spices", "modified food starch"],
    },
    CatalogEntry {
        id: "citrus",
        name: "Citrus",
        description: "Allergy to citrus fruits",
        common: &[
            "orange", "lemon", "lime", "grapefruit", "tangerine", "mandarin", "clementine",
            "citric acid", "citrus oil", "lemon juice", "orange juice", "lime juice",
            "citrus peel", "zest",
        ],
        caution: &["natural flavors", "ascorbic acid", "vitamin c"],
    },
    CatalogEntry {
        id: "strawberry",
        name: "Strawberry",
        description: "Allergy to strawberries",
        common: &[
            "strawberry", "strawberry juice", "strawberry puree", "strawberry extract",
            "strawberry flavoring",
        ],
        caution: &["natural flavors", "artificial flavors", "berry flavoring"],
    },
    CatalogEntry {
        id: "banana",
        name: "Banana",
        description: "Allergy to bananas",
        common: &[
            "banana", "banana puree", "banana extract", "banana flavoring", "plantain",
        ],
        caution: &["natural flavors", "artificial flavors"],
    },
    CatalogEntry {
        id: "kiwi",
        name: "Kiwi",
        description: "Allergy to kiwi fruit",
        common: &["kiwi", "kiwifruit", "kiwi juice", "kiwi extract"],
        caution: &["natural flavors", "tropical fruit flavoring"],
    },
    CatalogEntry {
        id: "avocado",
        name: "Avocado",
        description: "Allergy to avocados",
        common: &["avocado", "avocado oil", "guacamole", "avocado puree"],
        caution: &["natural flavors"],
    },
];

/// Materializes the built-in table in registry order.
pub fn builtin_allergens() -> Vec<AllergenDefinition> {
    CATALOG
        .iter()
        .map(|entry| {
            AllergenDefinition::new(
                entry.id,
                entry.name,
                entry.description,
                entry.common,
                entry.caution,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_25_entries() {
        assert_eq!(builtin_allergens().len(), 25);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let allergens = builtin_allergens();
        let ids: HashSet<&str> = allergens.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), allergens.len());
    }

    #[test]
    fn test_catalog_starts_with_alpha_gal() {
        let allergens = builtin_allergens();
        assert_eq!(allergens[0].id, "alpha-gal");
        assert_eq!(allergens[0].name, "Alpha-Gal");
        assert!(allergens[0].common_ingredients.contains(&"gelatin".to_string()));
    }

    #[test]
    fn test_no_entry_has_an_empty_keyword() {
        for allergen in builtin_allergens() {
            assert!(
                allergen
                    .common_ingredients
                    .iter()
                    .chain(allergen.caution_ingredients.iter())
                    .all(|k| !k.trim().is_empty()),
                "{} has an empty keyword",
                allergen.id
            );
        }
    }
}
