//! Recipe ingredient tools

use serde::Serialize;

use super::quantities::FormattedResponse;
use crate::calculator::{
    format_recipe_ingredients as render_recipes, format_single_recipe, list_available_recipes,
    scale_recipe_ingredients, specific_recipe, CalcError, CalcResult, Headcount,
    IngredientRecord, OutputFormat, RecipeQuantities, Rendered, ScaledRecipes,
};

/// Response for calculate_recipe_ingredients
#[derive(Debug, Serialize)]
pub struct RecipeIngredientsResponse {
    pub people: u32,
    pub recipes: ScaledRecipes,
}

/// One recipe with an optional rendered view
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub quantities: RecipeQuantities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Rendered<IngredientRecord>>,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<String>,
    pub total: usize,
}

pub fn calculate_recipe_ingredients(people: i64) -> CalcResult<RecipeIngredientsResponse> {
    let headcount = Headcount::new(people)?;
    Ok(RecipeIngredientsResponse {
        people: headcount.get(),
        recipes: scale_recipe_ingredients(headcount),
    })
}

pub fn format_recipe_ingredients(
    people: i64,
    format: &str,
) -> CalcResult<FormattedResponse<IngredientRecord>> {
    let headcount = Headcount::new(people)?;
    let format: OutputFormat = format.parse()?;
    let recipes = scale_recipe_ingredients(headcount);

    Ok(FormattedResponse {
        people: headcount.get(),
        format: format.as_str(),
        content: render_recipes(&recipes, format),
    })
}

/// One recipe's ingredients; `Ok(None)` when no recipe has that exact name
pub fn get_recipe_quantities(
    people: i64,
    recipe: &str,
    format: Option<&str>,
) -> CalcResult<Option<RecipeDetail>> {
    let headcount = Headcount::new(people)?;
    if recipe.is_empty() {
        return Err(CalcError::MissingName("Recipe"));
    }
    let format: Option<OutputFormat> = format.map(str::parse::<OutputFormat>).transpose()?;

    Ok(specific_recipe(headcount, recipe).map(|quantities| RecipeDetail {
        content: format.map(|f| format_single_recipe(&quantities, f)),
        quantities,
    }))
}

pub fn list_recipes() -> ListRecipesResponse {
    let recipes = list_available_recipes();
    ListRecipesResponse {
        total: recipes.len(),
        recipes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_recipe_ingredients() {
        let response = calculate_recipe_ingredients(50).unwrap();
        assert_eq!(response.recipes["Huevos revueltos"]["Huevos"], 75.0);
        assert!(calculate_recipe_ingredients(0).is_err());
    }

    #[test]
    fn test_format_recipe_ingredients() {
        let response = format_recipe_ingredients(10, "markdown").unwrap();
        assert_eq!(response.format, "markdown");
        assert!(response
            .content
            .as_text()
            .unwrap()
            .starts_with("**👨‍🍳 INGREDIENTES POR PREPARACIÓN**"));
        assert!(matches!(
            format_recipe_ingredients(10, "docx"),
            Err(CalcError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_get_recipe_quantities() {
        let detail = get_recipe_quantities(20, "Picadillo", None).unwrap().unwrap();
        assert_eq!(detail.quantities.ingredients["Carne molida"], 2.0);
        assert!(detail.content.is_none());

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["recipe"], "Picadillo");
        assert_eq!(json["headcount"], 20);
        assert!(json.get("content").is_none());

        let detail = get_recipe_quantities(20, "Picadillo", Some("text"))
            .unwrap()
            .unwrap();
        let text = detail.content.unwrap();
        assert!(text.as_text().unwrap().starts_with("🍳 PICADILLO - 20 PERSONAS"));
    }

    #[test]
    fn test_get_recipe_quantities_not_found_and_errors() {
        assert_eq!(
            get_recipe_quantities(20, "Paella", None).map(|r| r.is_none()),
            Ok(true)
        );
        assert_eq!(
            get_recipe_quantities(20, "", None).map(|r| r.is_none()),
            Err(CalcError::MissingName("Recipe"))
        );
        assert!(matches!(
            get_recipe_quantities(20, "Picadillo", Some("rtf")),
            Err(CalcError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_list_recipes() {
        let response = list_recipes();
        assert_eq!(response.total, 10);
        assert_eq!(response.recipes[0], "Arroz blanco");
    }
}
