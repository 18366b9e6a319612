//! Quantity calculation module
//!
//! Scales the norm tables to a headcount and renders the results.

pub mod categorizer;
pub mod error;
pub mod formatter;
pub mod lookup;
pub mod scaler;
pub mod units;

pub use categorizer::{categorize, categorize_with, CategorySection};
pub use error::{CalcError, CalcResult};
pub use formatter::{
    format_products, format_recipe_ingredients, format_single_recipe, IngredientRecord,
    OutputFormat, ProductRecord, Rendered,
};
pub use lookup::{
    list_available_products, list_available_recipes, specific_product, specific_recipe,
    ProductQuantity, RecipeQuantities,
};
pub use scaler::{
    calculate_soft_drink, scale_products, scale_recipe, scale_recipe_ingredients, Headcount,
    ScaledProducts, ScaledRecipes,
};
pub use units::{format_quantity, round_to, UnitClass};
