use crate::{Recipe, RecipeCategory};

static RECIPES: [Recipe; 15] = [
    Recipe {
        id: 1,
        name: "Masala Oats",
        category: RecipeCategory::Breakfast,
        protein_source: "Oats + Peanuts",
        ingredients: &[
            "1 cup rolled oats",
            "1 small onion, chopped",
            "1 tomato, chopped",
            "1/4 tsp turmeric",
            "1 tbsp roasted peanuts",
            "1 tsp oil",
            "Salt to taste",
        ],
        instructions: &[
            "Heat oil and saute onion until soft.",
            "Add tomato, turmeric and salt; cook for 2 minutes.",
            "Stir in oats with 2 cups of water and simmer for 5 minutes.",
            "Top with roasted peanuts and serve hot.",
        ],
    },
    Recipe {
        id: 2,
        name: "Paneer Bhurji Wrap",
        category: RecipeCategory::Breakfast,
        protein_source: "Paneer",
        ingredients: &[
            "150g paneer, crumbled",
            "1 small onion, chopped",
            "1 green bell pepper, diced",
            "1/2 tsp garam masala",
            "2 whole wheat rotis",
            "1 tsp oil",
        ],
        instructions: &[
            "Heat oil and cook onion and bell pepper for 3 minutes.",
            "Add crumbled paneer and garam masala; stir for 2 minutes.",
            "Fill the rotis with the bhurji and roll tightly.",
        ],
    },
    Recipe {
        id: 3,
        name: "Greek Yogurt Berry Bowl",
        category: RecipeCategory::Breakfast,
        protein_source: "Greek Yogurt",
        ingredients: &[
            "200g Greek yogurt",
            "1/2 cup mixed berries",
            "1 tbsp chia seeds",
            "1 tsp honey",
        ],
        instructions: &[
            "Spoon the yogurt into a bowl.",
            "Top with berries and chia seeds.",
            "Drizzle with honey.",
        ],
    },
    Recipe {
        id: 4,
        name: "Moong Dal Chilla",
        category: RecipeCategory::Breakfast,
        protein_source: "Moong Dal",
        ingredients: &[
            "1 cup moong dal, soaked overnight",
            "1 small onion, chopped",
            "1 green chili",
            "Fresh coriander",
            "1 tsp oil",
            "Salt to taste",
        ],
        instructions: &[
            "Blend the soaked dal with chili and a little water into a batter.",
            "Stir in onion, coriander and salt.",
            "Spread a ladle of batter on a hot oiled pan and cook both sides.",
        ],
    },
    Recipe {
        id: 5,
        name: "Tofu Scramble",
        category: RecipeCategory::Breakfast,
        protein_source: "Tofu",
        ingredients: &[
            "200g firm tofu",
            "Handful of spinach",
            "1/4 tsp turmeric",
            "1/2 tsp black pepper",
            "1 tsp olive oil",
        ],
        instructions: &[
            "Crumble the tofu with a fork.",
            "Heat oil, add tofu, turmeric and pepper and cook for 4 minutes.",
            "Fold in spinach until wilted.",
        ],
    },
    Recipe {
        id: 6,
        name: "Rajma Chawal",
        category: RecipeCategory::Lunch,
        protein_source: "Kidney Beans",
        ingredients: &[
            "1 cup kidney beans, soaked",
            "1 onion, finely chopped",
            "2 tomatoes, pureed",
            "1 tsp ginger garlic paste",
            "1 tsp rajma masala",
            "1 cup brown rice",
            "1 tbsp oil",
        ],
        instructions: &[
            "Pressure cook the soaked beans until soft.",
            "Fry onion and ginger garlic paste in oil until golden.",
            "Add tomato puree and masala; cook until oil separates.",
            "Add beans with their liquid and simmer for 15 minutes.",
            "Serve over cooked brown rice.",
        ],
    },
    Recipe {
        id: 7,
        name: "Chickpea Salad",
        category: RecipeCategory::Lunch,
        protein_source: "Chickpeas",
        ingredients: &[
            "1 can chickpeas, drained",
            "1 cucumber, diced",
            "1 tomato, diced",
            "1/2 red onion, sliced",
            "Lemon juice",
            "1 tbsp olive oil",
            "Salt to taste",
        ],
        instructions: &[
            "Combine chickpeas, cucumber, tomato and onion in a bowl.",
            "Whisk lemon juice, olive oil and salt.",
            "Toss the salad with the dressing and rest for 10 minutes.",
        ],
    },
    Recipe {
        id: 8,
        name: "Palak Paneer",
        category: RecipeCategory::Lunch,
        protein_source: "Paneer",
        ingredients: &[
            "Paneer cubes",
            "2 bunches spinach",
            "Chopped onion",
            "1 tomato, chopped",
            "1 tsp garam masala",
            "1 tbsp oil",
        ],
        instructions: &[
            "Blanch spinach and blend into a smooth puree.",
            "Saute onion and tomato in oil until soft.",
            "Add spinach puree and garam masala; simmer for 5 minutes.",
            "Fold in paneer cubes and heat through.",
        ],
    },
    Recipe {
        id: 9,
        name: "Soya Chunk Pulao",
        category: RecipeCategory::Lunch,
        protein_source: "Soya Chunks",
        ingredients: &[
            "1 cup soya chunks",
            "1 cup basmati rice",
            "1 cup mixed vegetables",
            "1 onion, sliced",
            "1 tsp whole spices",
            "1 tbsp oil",
        ],
        instructions: &[
            "Soak soya chunks in hot water for 10 minutes and squeeze dry.",
            "Fry whole spices and onion in oil.",
            "Add vegetables, soya chunks and rinsed rice with 2 cups water.",
            "Cover and cook until the rice is done.",
        ],
    },
    Recipe {
        id: 10,
        name: "Dal Tadka",
        category: RecipeCategory::Lunch,
        protein_source: "Lentils",
        ingredients: &[
            "Red lentils",
            "Turmeric powder",
            "Chopped onion",
            "1 tomato, chopped",
            "1 tsp cumin seeds",
            "1 tbsp ghee",
            "Salt to taste",
        ],
        instructions: &[
            "Boil lentils with turmeric and salt until soft.",
            "Heat ghee, add cumin seeds, onion and tomato.",
            "Pour the tadka over the dal and simmer for 2 minutes.",
        ],
    },
    Recipe {
        id: 11,
        name: "Tofu Stir Fry",
        category: RecipeCategory::Dinner,
        protein_source: "Tofu",
        ingredients: &[
            "200g firm tofu, cubed",
            "1 red bell pepper, sliced",
            "1 cup broccoli florets",
            "1 tbsp soy sauce",
            "1 tsp sesame oil",
            "1 tsp grated ginger",
        ],
        instructions: &[
            "Pan fry tofu in sesame oil until golden and set aside.",
            "Stir fry broccoli, bell pepper and ginger for 3 minutes.",
            "Return tofu, add soy sauce and toss to coat.",
        ],
    },
    Recipe {
        id: 12,
        name: "Chana Masala",
        category: RecipeCategory::Dinner,
        protein_source: "Chickpeas",
        ingredients: &[
            "1 cup chickpeas, soaked",
            "1 onion, finely chopped",
            "2 tomatoes, pureed",
            "1 tsp chana masala",
            "1 tbsp oil",
            "Fresh coriander",
        ],
        instructions: &[
            "Pressure cook the chickpeas until tender.",
            "Fry onion in oil, add tomato puree and chana masala.",
            "Add chickpeas and simmer for 15 minutes.",
            "Garnish with coriander.",
        ],
    },
    Recipe {
        id: 13,
        name: "Paneer Tikka",
        category: RecipeCategory::Dinner,
        protein_source: "Paneer",
        ingredients: &[
            "200g paneer, cubed",
            "1/2 cup hung curd yogurt",
            "1 green bell pepper, cubed",
            "1 onion, cubed",
            "1 tsp tikka masala",
            "Lemon juice",
        ],
        instructions: &[
            "Marinate paneer and vegetables in yogurt, masala and lemon juice for 30 minutes.",
            "Thread onto skewers.",
            "Grill or bake at 220C for 15 minutes, turning once.",
        ],
    },
    Recipe {
        id: 14,
        name: "Lentil Soup",
        category: RecipeCategory::Dinner,
        protein_source: "Lentils",
        ingredients: &[
            "1 cup brown lentils",
            "1 carrot, diced",
            "1 celery stalk, diced",
            "Chopped onion",
            "1 tsp olive oil",
            "4 cups vegetable stock",
        ],
        instructions: &[
            "Saute onion, carrot and celery in olive oil.",
            "Add lentils and stock and bring to a boil.",
            "Simmer for 25 minutes until lentils are tender.",
        ],
    },
    Recipe {
        id: 15,
        name: "Besan Cheela with Mint Chutney",
        category: RecipeCategory::Dinner,
        protein_source: "Chickpea Flour",
        ingredients: &[
            "1 cup besan flour",
            "1 tomato, finely chopped",
            "Fresh mint leaves",
            "1/2 cup curd",
            "1 tsp oil",
        ],
        instructions: &[
            "Whisk besan with water, tomato and a pinch of salt into a thin batter.",
            "Cook ladlefuls on a hot oiled pan until crisp on both sides.",
            "Blend mint with curd for the chutney and serve alongside.",
        ],
    },
];

pub fn all() -> &'static [Recipe] {
    &RECIPES
}

pub fn find(id: u32) -> Option<&'static Recipe> {
    RECIPES.iter().find(|recipe| recipe.id == id)
}

/// Like [`find`] but reports an unknown id as not found
pub fn load(id: u32) -> fitveg_shared::Result<&'static Recipe> {
    match find(id) {
        Some(recipe) => Ok(recipe),
        None => fitveg_shared::not_found!("recipe {id} not found"),
    }
}

pub fn by_category(category: RecipeCategory) -> impl Iterator<Item = &'static Recipe> {
    RECIPES
        .iter()
        .filter(move |recipe| recipe.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::VariantArray;

    #[test]
    fn test_catalog_has_fifteen_unique_ids() {
        let ids = all().iter().map(|r| r.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), 15);
        assert!(ids.iter().all(|id| (1..=15).contains(id)));
    }

    #[test]
    fn test_every_recipe_has_ingredients_and_steps() {
        for recipe in all() {
            assert!(!recipe.ingredients.is_empty(), "{}", recipe.name);
            assert!(!recipe.instructions.is_empty(), "{}", recipe.name);
        }
    }

    #[test]
    fn test_find_and_load() {
        assert_eq!(find(8).map(|r| r.name), Some("Palak Paneer"));
        assert!(find(0).is_none());
        assert!(find(16).is_none());

        let err = load(99).unwrap_err();
        assert!(matches!(err, fitveg_shared::Error::NotFound(_)));
    }

    #[test]
    fn test_by_category_partitions_catalog() {
        let total: usize = RecipeCategory::VARIANTS
            .iter()
            .map(|category| by_category(*category).count())
            .sum();
        assert_eq!(total, all().len());
        assert!(by_category(RecipeCategory::Lunch).all(|r| r.category == RecipeCategory::Lunch));
    }

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("Dinner".parse::<RecipeCategory>().unwrap(), RecipeCategory::Dinner);
        assert_eq!("lunch".parse::<RecipeCategory>().unwrap(), RecipeCategory::Lunch);
        assert_eq!(RecipeCategory::Breakfast.to_string(), "breakfast");
        assert!("brunch".parse::<RecipeCategory>().is_err());
    }
}
