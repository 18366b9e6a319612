//! Rendering of scaled results
//!
//! Text, markdown and html share the same content and ordering and only
//! differ in how headers are emphasized. The list format yields records in
//! the same traversal order as the text layouts.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::categorizer::categorize;
use super::error::{CalcError, CalcResult};
use super::lookup::RecipeQuantities;
use super::scaler::{ScaledProducts, ScaledRecipes};
use super::units::{format_quantity, UnitClass};
use crate::norms::ingredient_unit;

/// Output format selected by a format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Markdown,
    Html,
    List,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::List => "list",
        }
    }

    fn bold(&self, s: &str) -> String {
        match self {
            OutputFormat::Markdown => format!("**{}**", s),
            OutputFormat::Html => format!("<b>{}</b>", s),
            OutputFormat::Text | OutputFormat::List => s.to_string(),
        }
    }

    fn italic(&self, s: &str) -> String {
        match self {
            OutputFormat::Markdown => format!("*{}*", s),
            OutputFormat::Html => format!("<i>{}</i>", s),
            OutputFormat::Text | OutputFormat::List => s.to_string(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CalcError;

    /// Accepts the Spanish tags `texto` and `lista` as aliases
    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "texto" => Ok(OutputFormat::Text),
            "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "list" | "lista" => Ok(OutputFormat::List),
            _ => Err(CalcError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered result: a single string or a list of records
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rendered<R> {
    Text(String),
    Records(Vec<R>),
}

impl<R> Rendered<R> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(s) => Some(s),
            Rendered::Records(_) => None,
        }
    }

    pub fn records(&self) -> Option<&[R]> {
        match self {
            Rendered::Text(_) => None,
            Rendered::Records(r) => Some(r),
        }
    }
}

/// One product line of the list format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub category: String,
    pub product: String,
    pub quantity: f64,
    pub unit: UnitClass,
}

/// One ingredient line of the list format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientRecord {
    pub recipe: String,
    pub ingredient: String,
    pub quantity: f64,
    pub unit: UnitClass,
}

fn item_line(name: &str, quantity: f64, unit: UnitClass) -> String {
    format!("  • {}: {} {}", name, format_quantity(quantity), unit.label())
}

/// Unit of a recipe ingredient, from the recipe table when it is listed there
fn resolve_unit(recipe: &str, ingredient: &str) -> UnitClass {
    ingredient_unit(recipe, ingredient).unwrap_or_else(|| UnitClass::infer_from_name(ingredient))
}

/// Render scaled products
pub fn format_products(scaled: &ScaledProducts, format: OutputFormat) -> Rendered<ProductRecord> {
    tracing::debug!("Formatting products for {} people as {}", scaled.total_people, format);
    let sections = categorize(scaled);

    if format == OutputFormat::List {
        let records = sections
            .iter()
            .flat_map(|section| {
                section.entries.iter().map(move |(name, quantity)| ProductRecord {
                    category: section.label.to_string(),
                    product: name.to_string(),
                    quantity: *quantity,
                    unit: section.unit,
                })
            })
            .collect();
        return Rendered::Records(records);
    }

    let mut lines = Vec::new();
    lines.push(format.bold(&format!("📊 CANTIDADES PARA {} PERSONAS", scaled.total_people)));
    lines.push(format!("{}\n", format.italic("(Producto crudo)")));

    for section in &sections {
        lines.push(format!("\n{}", format.bold(section.label)));
        for (name, quantity) in &section.entries {
            lines.push(item_line(name, *quantity, section.unit));
        }
    }

    Rendered::Text(lines.join("\n"))
}

fn ingredient_records(recipe: &str, ingredients: &BTreeMap<String, f64>) -> Vec<IngredientRecord> {
    ingredients
        .iter()
        .map(|(ingredient, quantity)| IngredientRecord {
            recipe: recipe.to_string(),
            ingredient: ingredient.clone(),
            quantity: *quantity,
            unit: resolve_unit(recipe, ingredient),
        })
        .collect()
}

/// Render every scaled recipe; recipes and ingredients in alphabetical order
pub fn format_recipe_ingredients(
    recipes: &ScaledRecipes,
    format: OutputFormat,
) -> Rendered<IngredientRecord> {
    tracing::debug!("Formatting {} recipes as {}", recipes.len(), format);

    if format == OutputFormat::List {
        let records = recipes
            .iter()
            .flat_map(|(recipe, ingredients)| ingredient_records(recipe, ingredients))
            .collect();
        return Rendered::Records(records);
    }

    let mut lines = Vec::new();
    lines.push(format!("{}\n", format.bold("👨‍🍳 INGREDIENTES POR PREPARACIÓN")));

    for (recipe, ingredients) in recipes {
        lines.push(format!("\n{}", format.bold(&format!("{}:", recipe))));
        for (ingredient, quantity) in ingredients {
            lines.push(item_line(ingredient, *quantity, resolve_unit(recipe, ingredient)));
        }
    }

    Rendered::Text(lines.join("\n"))
}

/// Render a single recipe looked up for a headcount
pub fn format_single_recipe(
    recipe: &RecipeQuantities,
    format: OutputFormat,
) -> Rendered<IngredientRecord> {
    if format == OutputFormat::List {
        return Rendered::Records(ingredient_records(&recipe.recipe, &recipe.ingredients));
    }

    let mut lines = Vec::new();
    let header = format!(
        "🍳 {} - {} PERSONAS",
        recipe.recipe.to_uppercase(),
        recipe.headcount
    );
    lines.push(format!("{}\n", format.bold(&header)));

    for (ingredient, quantity) in &recipe.ingredients {
        let unit = resolve_unit(&recipe.recipe, ingredient);
        if format == OutputFormat::Markdown {
            lines.push(format!(
                "  • **{}:** {} {}",
                ingredient,
                format_quantity(*quantity),
                unit.label()
            ));
        } else {
            lines.push(item_line(ingredient, *quantity, unit));
        }
    }

    Rendered::Text(lines.join("\n"))
}
