//! Single product and single recipe lookups
//!
//! Names are matched exactly (case and accents included). A missing name is
//! reported as `None`, not as an error.

use std::collections::BTreeMap;

use serde::Serialize;

use super::scaler::{scale_products, scale_recipe_ingredients, Headcount};
use super::units::UnitClass;
use crate::norms::RECIPE_NORMS;

/// Quantity of one product for a headcount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductQuantity {
    pub product: String,
    pub quantity: f64,
    pub unit: UnitClass,
}

/// Ingredients of one recipe for a headcount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeQuantities {
    pub recipe: String,
    pub headcount: u32,
    pub ingredients: BTreeMap<String, f64>,
}

/// Look up one product, mass products first
pub fn specific_product(headcount: Headcount, name: &str) -> Option<ProductQuantity> {
    let scaled = scale_products(headcount);

    if let Some(kg) = scaled.mass_kg.get(name) {
        return Some(ProductQuantity {
            product: name.to_string(),
            quantity: *kg,
            unit: UnitClass::Mass,
        });
    }

    scaled.unit_counts.get(name).map(|units| ProductQuantity {
        product: name.to_string(),
        quantity: *units,
        unit: UnitClass::Count,
    })
}

/// All product names, mass and countable, sorted
pub fn list_available_products() -> Vec<String> {
    let scaled = scale_products(Headcount::ONE);
    let mut products: Vec<String> = scaled
        .mass_kg
        .into_keys()
        .chain(scaled.unit_counts.into_keys())
        .collect();
    products.sort();
    products
}

/// Look up one recipe
pub fn specific_recipe(headcount: Headcount, name: &str) -> Option<RecipeQuantities> {
    let mut recipes = scale_recipe_ingredients(headcount);

    recipes.remove(name).map(|ingredients| RecipeQuantities {
        recipe: name.to_string(),
        headcount: headcount.get(),
        ingredients,
    })
}

/// All recipe names, sorted
pub fn list_available_recipes() -> Vec<String> {
    let mut recipes: Vec<String> = RECIPE_NORMS.iter().map(|r| r.name.to_string()).collect();
    recipes.sort();
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::norms::{PRODUCT_NORMS, UNIT_NORMS};

    fn people(n: i64) -> Headcount {
        Headcount::new(n).unwrap()
    }

    #[test]
    fn test_specific_mass_product() {
        let rice = specific_product(people(50), "Arroz blanco").unwrap();
        assert_eq!(rice.product, "Arroz blanco");
        assert_eq!(rice.quantity, 5.0);
        assert_eq!(rice.unit, UnitClass::Mass);
    }

    #[test]
    fn test_specific_unit_product() {
        let eggs = specific_product(people(50), "Huevo").unwrap();
        assert_eq!(eggs.quantity, 100.0);
        assert_eq!(eggs.unit, UnitClass::Count);
    }

    #[test]
    fn test_unknown_product_not_found() {
        assert!(specific_product(people(10), "Producto Inexistente").is_none());
        assert!(specific_product(people(10), "arroz blanco").is_none());
        assert!(specific_product(people(10), "Higado").is_none());
    }

    #[test]
    fn test_list_available_products() {
        let products = list_available_products();
        assert_eq!(products.len(), PRODUCT_NORMS.len() + UNIT_NORMS.len());
        let mut sorted = products.clone();
        sorted.sort();
        assert_eq!(products, sorted);
        assert_eq!(products.first().map(String::as_str), Some("Albóndiga"));
    }

    #[test]
    fn test_every_listed_product_resolves() {
        for product in list_available_products() {
            assert!(
                specific_product(people(3), &product).is_some(),
                "{} not found",
                product
            );
        }
    }

    #[test]
    fn test_specific_recipe() {
        let recipe = specific_recipe(people(50), "Huevos revueltos").unwrap();
        assert_eq!(recipe.recipe, "Huevos revueltos");
        assert_eq!(recipe.headcount, 50);
        assert_eq!(recipe.ingredients["Huevos"], 75.0);
        assert_eq!(recipe.ingredients.len(), 4);
        assert!(specific_recipe(people(50), "Huevos fritos").is_none());
    }

    #[test]
    fn test_list_available_recipes() {
        let recipes = list_available_recipes();
        assert_eq!(recipes.len(), 10);
        assert_eq!(recipes[0], "Arroz blanco");
        assert_eq!(recipes[9], "Viandas hervidas (Papa/Yuca/Boniato)");
        for name in &recipes {
            assert!(specific_recipe(Headcount::ONE, name).is_some());
        }
    }
}
