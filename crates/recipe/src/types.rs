use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, PartialEq)]
pub struct Recipe {
    pub id: u32,
    pub name: &'static str,
    pub category: RecipeCategory,
    pub protein_source: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
}
