use std::collections::HashSet;

use fitveg_daylog::DayLog;

use crate::ShoppingListItem;

/// Ingredient Aggregation Service
///
/// Stateless domain service turning the meals of a window of day logs into
/// a shopping list. Ingredient lines are kept verbatim: two lines are the
/// same item only when they are byte-for-byte equal.
pub struct IngredientAggregationService;

impl IngredientAggregationService {
    /// Ingredient lines of every lunch then dinner, in day order, first occurrence kept
    pub fn collect(logs: &[DayLog]) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut ingredients = Vec::new();

        for recipe_id in logs.iter().flat_map(|log| log.recipe_ids()) {
            let Some(recipe) = fitveg_recipe::find(recipe_id) else {
                tracing::warn!(recipe_id, "skipping unknown recipe");
                continue;
            };

            for ingredient in recipe.ingredients {
                if seen.insert(*ingredient) {
                    ingredients.push(*ingredient);
                }
            }
        }

        ingredients
    }

    /// Unchecked items sorted by category label; stable, so each category keeps first-seen order
    pub fn aggregate(logs: &[DayLog]) -> Vec<ShoppingListItem> {
        let mut list = Self::collect(logs)
            .into_iter()
            .map(ShoppingListItem::new)
            .collect::<Vec<_>>();
        list.sort_by(|a, b| a.category.cmp(&b.category));

        list
    }
}
