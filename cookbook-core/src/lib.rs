pub mod error;
pub mod search;
pub mod seed;
pub mod validation;

pub use error::{SearchError, ValidationError};
pub use search::{
    fold_case, hybrid_search, like_pattern, merge_unique, normalize_query, LiteralMatcher, RecipeSource,
    Searchable, FALLBACK_THRESHOLD,
};
pub use seed::{SeedRecipe, SEED_RECIPES};
pub use validation::validate_recipe;
