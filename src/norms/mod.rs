//! Consumption norm tables
//!
//! Static, read-only per-person norms for products and recipes, plus the
//! display categories used to group products.

mod categories;
mod products;
mod recipes;

pub use categories::{category_of, Category, CATEGORIES, UNIT_CATEGORY_LABEL};
pub use products::{ProductNorm, UnitNorm, PRODUCT_NORMS, UNIT_NORMS};
pub use recipes::{find_recipe, ingredient_unit, IngredientNorm, RecipeNorm, RECIPE_NORMS};
