pub mod aggregation;
pub mod categorization;
mod command;
mod item;
mod query;

pub use aggregation::IngredientAggregationService;
pub use categorization::{CategorizationService, Category};
pub use command::*;
pub use item::*;
pub use query::*;
