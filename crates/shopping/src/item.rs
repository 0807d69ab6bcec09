use bitcode::{Decode, Encode};

use crate::CategorizationService;

#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub ingredient: String,
    pub category: String,
    pub checked: bool,
}

impl ShoppingListItem {
    pub fn new(ingredient: impl Into<String>) -> Self {
        let ingredient = ingredient.into();
        let category = CategorizationService::categorize(&ingredient).to_string();

        Self {
            ingredient,
            category,
            checked: false,
        }
    }
}

/// Items of one category along with their position in the full list
#[derive(Debug, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<(usize, &'a ShoppingListItem)>,
}

/// Group a list by category, in order of first appearance
pub fn grouped(list: &[ShoppingListItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

    for (idx, item) in list.iter().enumerate() {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push((idx, item)),
            None => groups.push(CategoryGroup {
                category: &item.category,
                items: vec![(idx, item)],
            }),
        }
    }

    groups
}

pub fn checked_count(list: &[ShoppingListItem]) -> usize {
    list.iter().filter(|item| item.checked).count()
}
