//! Fixed demonstration dataset used to bootstrap an empty catalog.

#[derive(Debug, Clone, Copy)]
pub struct SeedRecipe {
    pub dish_name: &'static str,
    pub cooking_time_minutes: i32,
    pub ingredients: &'static str,
    pub description: &'static str,
    pub views_count: i32,
}

pub const SEED_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        dish_name: "Хачапури по-аджарски",
        cooking_time_minutes: 45,
        ingredients: "мука: 500г, сыр сулугуни: 400г, яйцо: 2шт, масло сливочное: 50г",
        description: "Лодочка из теста с сыром и яйцом сверху.",
        views_count: 450,
    },
    SeedRecipe {
        dish_name: "Хинкали",
        cooking_time_minutes: 60,
        ingredients: "мясной фарш: 1кг, лук: 200г, кизма: 1ч.л., тесто: 1кг",
        description: "Сочные мясные пельмени с хвостиком.",
        views_count: 500,
    },
    SeedRecipe {
        dish_name: "Чахохбили",
        cooking_time_minutes: 50,
        ingredients: "курица: 1кг, помидоры: 800г, лук: 300г, хмели-сунели: 2ст.л.",
        description: "Тушеная курица в томатном соусе.",
        views_count: 300,
    },
    SeedRecipe {
        dish_name: "Сациви",
        cooking_time_minutes: 120,
        ingredients: "курица: 1.5кг, орехи грецкие: 300г, чеснок: 4зуб., хмели-сунели: 2ст.л.",
        description: "Курица в ореховом соусе.",
        views_count: 350,
    },
    SeedRecipe {
        dish_name: "Лобио",
        cooking_time_minutes: 90,
        ingredients: "фасоль красная: 500г, орехи: 100г, лук: 150г, коряндр: пучок",
        description: "Густая фасолевая похлебка с орехами.",
        views_count: 300,
    },
    SeedRecipe {
        dish_name: "Шашлык по-грузински",
        cooking_time_minutes: 40,
        ingredients: "свинина: 1.5кг, лук: 500г, вино красное: 200мл, хмели-сунели: 2ст.л.",
        description: "Маринованный шашлык на мангале.",
        views_count: 320,
    },
    SeedRecipe {
        dish_name: "Аджапсандали",
        cooking_time_minutes: 60,
        ingredients: "баклажаны: 500г, перец болг.: 400г, помидоры: 500г, чеснок: 5зуб.",
        description: "Овощное рагу баклажанов и перца.",
        views_count: 250,
    },
    SeedRecipe {
        dish_name: "Ткемали",
        cooking_time_minutes: 30,
        ingredients: "сливы терн: 1кг, чеснок: 5зуб., коряндр: 1ч.л., укроп: пучок",
        description: "Кислый соус из слив.",
        views_count: 350,
    },
    SeedRecipe {
        dish_name: "Мцвади",
        cooking_time_minutes: 35,
        ingredients: "говядина: 1кг, сало: 100г, соль: по вкусу, перец: по вкусу",
        description: "Простой мясной шашлык.",
        views_count: 250,
    },
    SeedRecipe {
        dish_name: "Пхали из шпината",
        cooking_time_minutes: 25,
        ingredients: "шпинат: 600г, орехи: 150г, чеснок: 3зуб., грецкие орехи: 100г",
        description: "Ореховая паста из зелени.",
        views_count: 100,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_recipe;
    use std::collections::HashSet;

    #[test]
    fn test_seed_has_ten_unique_dishes() {
        let names: HashSet<&str> = SEED_RECIPES.iter().map(|r| r.dish_name).collect();
        assert_eq!(SEED_RECIPES.len(), 10);
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_seed_recipes_are_valid() {
        for recipe in SEED_RECIPES {
            validate_recipe(
                recipe.dish_name,
                recipe.cooking_time_minutes,
                recipe.ingredients,
            )
            .unwrap();
        }
    }
}
