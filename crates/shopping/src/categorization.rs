use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Aisle an ingredient is shopped in
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Protein,
    Produce,
    #[strum(serialize = "Spices & Oil")]
    SpicesAndOil,
    #[strum(serialize = "Grains & Legumes")]
    GrainsAndLegumes,
    Pantry,
}

/// Keyword rules checked in order; the first rule with a matching keyword wins.
const RULES: [(Category, &[&str]); 4] = [
    (Category::Protein, &["paneer", "tofu", "yogurt", "soya"]),
    (
        Category::Produce,
        &["onion", "tomato", "spinach", "pepper", "vegetable"],
    ),
    (
        Category::SpicesAndOil,
        &["oil", "spice", "masala", "salt", "turmeric"],
    ),
    (
        Category::GrainsAndLegumes,
        &["lentil", "bean", "chickpea", "dal", "oats", "flour"],
    ),
];

/// Categorization Service
///
/// Stateless domain service mapping a free-form ingredient line such as
/// "2 tomatoes, pureed" to a shopping category by case-insensitive keyword
/// containment. Anything without a keyword lands in `Pantry`.
pub struct CategorizationService;

impl CategorizationService {
    pub fn categorize(ingredient: &str) -> Category {
        let normalized = ingredient.to_lowercase();

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Pantry)
    }
}
