use crate::error::ValidationError;

/// Checks the caller-supplied fields of a new recipe before it reaches the store.
///
/// Description is free-form and may be empty.
pub fn validate_recipe(
    dish_name: &str,
    cooking_time_minutes: i32,
    ingredients: &str,
) -> Result<(), ValidationError> {
    if dish_name.trim().is_empty() {
        return Err(ValidationError::EmptyField("dish_name"));
    }

    if ingredients.trim().is_empty() {
        return Err(ValidationError::EmptyField("ingredients"));
    }

    if cooking_time_minutes < 0 {
        return Err(ValidationError::NegativeCookingTime(cooking_time_minutes));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_recipe() {
        assert_eq!(validate_recipe("Лобио", 90, "фасоль: 500г"), Ok(()));
    }

    #[test]
    fn test_zero_cooking_time_is_allowed() {
        assert_eq!(validate_recipe("Салат", 0, "огурцы"), Ok(()));
    }

    #[test]
    fn test_blank_dish_name() {
        assert_eq!(
            validate_recipe("   ", 10, "water"),
            Err(ValidationError::EmptyField("dish_name"))
        );
    }

    #[test]
    fn test_blank_ingredients() {
        assert_eq!(
            validate_recipe("Tea", 5, "\t\n"),
            Err(ValidationError::EmptyField("ingredients"))
        );
    }

    #[test]
    fn test_negative_cooking_time() {
        assert_eq!(
            validate_recipe("Tea", -1, "water"),
            Err(ValidationError::NegativeCookingTime(-1))
        );
    }
}
