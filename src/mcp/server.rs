//! Food Calculator MCP Server Implementation
//!
//! Exposes the calculator operations as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::calculator::CalcError;
use crate::tools::status::StatusTracker;
use crate::tools::{quantities, recipes};

/// Food Calculator MCP Service
#[derive(Clone)]
pub struct FoodCalcService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<FoodCalcService>,
}

impl FoodCalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for FoodCalcService {
    fn default() -> Self {
        Self::new()
    }
}

/// Bad input is the caller's fault, so it maps to invalid params
fn calc_error(e: CalcError) -> McpError {
    tracing::warn!("Rejected tool call: {}", e);
    McpError::invalid_params(e.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

fn default_format() -> String { "text".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PeopleParams {
    /// Number of people to feed (whole number, at least 1)
    pub people: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatParams {
    /// Number of people to feed (whole number, at least 1)
    pub people: i64,
    /// Output format: text, markdown, html or list (default text)
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ProductQuantityParams {
    /// Number of people to feed (whole number, at least 1)
    pub people: i64,
    /// Exact product name, e.g. "Arroz blanco"
    pub product: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeQuantitiesParams {
    /// Number of people to feed (whole number, at least 1)
    pub people: i64,
    /// Exact recipe name, e.g. "Huevos revueltos"
    pub recipe: String,
    /// Optional output format for a rendered view: text, markdown, html or list
    pub format: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FoodCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the food calculator including build info, loaded norm tables, and process information")]
    async fn food_calc_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for using the food calculator tools. Call this when unsure which tool or parameters to use.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Products ---

    #[tool(description = "Calculate raw quantities of every product for a number of people: kilograms for mass products, units for countable products")]
    fn calculate_quantities(&self, Parameters(p): Parameters<PeopleParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("calculate_quantities for {} people", p.people);
        let result = quantities::calculate_quantities(p.people).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Calculate product quantities grouped by category and render them as text, markdown, html or a list of records")]
    fn format_quantities(&self, Parameters(p): Parameters<FormatParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("format_quantities for {} people as {}", p.people, p.format);
        let result = quantities::format_quantities(p.people, &p.format).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Get the quantity of a single product for a number of people (exact name match)")]
    fn get_product_quantity(&self, Parameters(p): Parameters<ProductQuantityParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("get_product_quantity '{}' for {} people", p.product, p.people);
        match quantities::get_product_quantity(p.people, &p.product).map_err(calc_error)? {
            Some(found) => json_result(&found),
            None => json_result(&serde_json::json!({
                "error": "Product not found",
                "product": p.product,
            })),
        }
    }

    #[tool(description = "List every available product name, sorted alphabetically")]
    fn list_products(&self) -> Result<CallToolResult, McpError> {
        json_result(&quantities::list_products())
    }

    #[tool(description = "Calculate liters of soft drink for a number of people (8 fl oz per person)")]
    fn calculate_soft_drink(&self, Parameters(p): Parameters<PeopleParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("calculate_soft_drink for {} people", p.people);
        let result = quantities::calculate_soft_drink(p.people).map_err(calc_error)?;
        json_result(&result)
    }

    // --- Recipes ---

    #[tool(description = "Calculate ingredient quantities of every preparation for a number of people")]
    fn calculate_recipe_ingredients(&self, Parameters(p): Parameters<PeopleParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("calculate_recipe_ingredients for {} people", p.people);
        let result = recipes::calculate_recipe_ingredients(p.people).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Calculate ingredients of every preparation and render them as text, markdown, html or a list of records (alphabetical order)")]
    fn format_recipe_ingredients(&self, Parameters(p): Parameters<FormatParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("format_recipe_ingredients for {} people as {}", p.people, p.format);
        let result = recipes::format_recipe_ingredients(p.people, &p.format).map_err(calc_error)?;
        json_result(&result)
    }

    #[tool(description = "Get the ingredients of a single preparation for a number of people (exact name match), optionally rendered in a format")]
    fn get_recipe_quantities(&self, Parameters(p): Parameters<RecipeQuantitiesParams>) -> Result<CallToolResult, McpError> {
        tracing::info!("get_recipe_quantities '{}' for {} people", p.recipe, p.people);
        let result = recipes::get_recipe_quantities(p.people, &p.recipe, p.format.as_deref())
            .map_err(calc_error)?;
        match result {
            Some(detail) => json_result(&detail),
            None => json_result(&serde_json::json!({
                "error": "Recipe not found",
                "recipe": p.recipe,
            })),
        }
    }

    #[tool(description = "List every available preparation name, sorted alphabetically")]
    fn list_recipes(&self) -> Result<CallToolResult, McpError> {
        json_result(&recipes::list_recipes())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FoodCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "food_calc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Food Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Food Calculator - raw food quantities for a number of people from fixed per-person norms. \
                 Call usage_instructions first if unsure. \
                 Products: calculate_quantities, format_quantities, get_product_quantity, list_products. \
                 Recipes: calculate_recipe_ingredients, format_recipe_ingredients, get_recipe_quantities, list_recipes. \
                 Drinks: calculate_soft_drink. Status: food_calc_status. \
                 Names are exact matches, people must be a whole number of at least 1."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: CallToolResult) -> String {
        let value = serde_json::to_value(&result).unwrap();
        value["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_calculate_quantities_tool() {
        let service = FoodCalcService::new();
        let result = service
            .calculate_quantities(Parameters(PeopleParams { people: 50 }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&text_of(result)).unwrap();
        assert_eq!(json["total_people"], 50);
        assert_eq!(json["mass_kg"]["Arroz blanco"], 5.0);
        assert_eq!(json["unit_counts"]["Huevo"], 100.0);
    }

    #[test]
    fn test_invalid_people_is_rejected() {
        let service = FoodCalcService::new();
        assert!(service
            .calculate_quantities(Parameters(PeopleParams { people: 0 }))
            .is_err());
        assert!(service
            .format_quantities(Parameters(FormatParams {
                people: 5,
                format: "pdf".to_string(),
            }))
            .is_err());
    }

    #[test]
    fn test_product_not_found_is_not_an_error() {
        let service = FoodCalcService::new();
        let result = service
            .get_product_quantity(Parameters(ProductQuantityParams {
                people: 10,
                product: "Producto Inexistente".to_string(),
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&text_of(result)).unwrap();
        assert_eq!(json["error"], "Product not found");
    }

    #[test]
    fn test_recipe_tool_with_format() {
        let service = FoodCalcService::new();
        let result = service
            .get_recipe_quantities(Parameters(RecipeQuantitiesParams {
                people: 50,
                recipe: "Huevos revueltos".to_string(),
                format: Some("list".to_string()),
            }))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&text_of(result)).unwrap();
        assert_eq!(json["ingredients"]["Huevos"], 75.0);
        assert!(json["content"].is_array());
    }

    #[test]
    fn test_server_info() {
        let info = FoodCalcService::new().get_info();
        assert_eq!(info.server_info.name, "food_calc");
    }
}
