pub mod health;
pub mod recipes;

use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Cookbook",
            description = "Recipe catalog: popularity-ranked listing, detail views and search"
        ),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![health::ApiDoc::openapi(), recipes::ApiDoc::openapi()];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = openapi();
        for path in [
            "/health",
            "/recipes",
            "/recipes/{recipe_id}",
            "/recipes/search/{query}",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }

        let schemas = &spec.components.as_ref().unwrap().schemas;
        for schema in ["ErrorResponse", "RecipeSummary", "RecipeResponse", "CreateRecipeRequest"] {
            assert!(schemas.contains_key(schema), "missing schema {schema}");
        }
    }
}
