use cookbook_core::Searchable;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::recipes_data)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub recipe_id: i32,
    pub dish_name: String,
    pub cooking_time_minutes: i32,
    pub ingredients: String,
    pub description: Option<String>,
    pub views_count: i32,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipes_data)]
pub struct NewRecipe<'a> {
    pub dish_name: &'a str,
    pub cooking_time_minutes: i32,
    pub ingredients: &'a str,
    pub description: Option<&'a str>,
    pub views_count: i32,
}

impl Searchable for Recipe {
    fn recipe_id(&self) -> i32 {
        self.recipe_id
    }

    fn dish_name(&self) -> &str {
        &self.dish_name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
