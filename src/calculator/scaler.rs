//! Scaling of per-person norms to a headcount
//!
//! Every function here is a pure transform over the static norm tables; results
//! are rebuilt on each call.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{CalcError, CalcResult};
use super::units::{
    round_to, UnitClass, COUNT_DECIMALS, MASS_DECIMALS, ML_PER_FL_OZ, ML_PER_LITER,
    RECIPE_DECIMALS, SOFT_DRINK_DECIMALS,
};
use crate::norms::{RecipeNorm, PRODUCT_NORMS, RECIPE_NORMS, UNIT_NORMS};

/// Fluid ounces of soft drink served per person
pub const SOFT_DRINK_FL_OZ_PER_PERSON: f64 = 8.0;

/// Number of people to feed, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Headcount(u32);

impl Headcount {
    pub const ONE: Headcount = Headcount(1);

    /// Validate a raw number of people
    pub fn new(people: i64) -> CalcResult<Self> {
        if people < 1 {
            return Err(CalcError::InvalidHeadcount(people.to_string()));
        }
        u32::try_from(people)
            .map(Headcount)
            .map_err(|_| CalcError::InvalidHeadcount(people.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i64> for Headcount {
    type Error = CalcError;

    fn try_from(people: i64) -> CalcResult<Self> {
        Headcount::new(people)
    }
}

impl FromStr for Headcount {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let people: i64 = s
            .trim()
            .parse()
            .map_err(|_| CalcError::InvalidHeadcount(s.to_string()))?;
        Headcount::new(people)
    }
}

impl fmt::Display for Headcount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product quantities for a headcount
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledProducts {
    pub total_people: u32,
    /// Mass products in kilograms
    pub mass_kg: BTreeMap<String, f64>,
    /// Countable products in units
    pub unit_counts: BTreeMap<String, f64>,
}

/// Recipe name -> ingredient name -> scaled quantity
pub type ScaledRecipes = BTreeMap<String, BTreeMap<String, f64>>;

/// Scale a single per-person norm, converting base units to display units
fn scale_norm(per_person: f64, headcount: Headcount, unit: UnitClass) -> f64 {
    per_person * headcount.as_f64() / unit.base_units_per_display_unit()
}

/// Scale every product norm to the given headcount
pub fn scale_products(headcount: Headcount) -> ScaledProducts {
    let mass_kg = PRODUCT_NORMS
        .iter()
        .map(|norm| {
            let kg = scale_norm(norm.grams_per_person, headcount, UnitClass::Mass);
            (norm.name.to_string(), round_to(kg, MASS_DECIMALS))
        })
        .collect();

    let unit_counts = UNIT_NORMS
        .iter()
        .map(|norm| {
            let units = scale_norm(norm.units_per_person, headcount, UnitClass::Count);
            (norm.name.to_string(), round_to(units, COUNT_DECIMALS))
        })
        .collect();

    tracing::debug!(
        "Scaled {} products for {} people",
        PRODUCT_NORMS.len() + UNIT_NORMS.len(),
        headcount
    );

    ScaledProducts {
        total_people: headcount.get(),
        mass_kg,
        unit_counts,
    }
}

/// Scale the ingredients of one recipe.
///
/// Mass and volume ingredients are divided by 1000 (g -> kg, ml -> L);
/// count ingredients are multiplied by the headcount only.
pub fn scale_recipe(recipe: &RecipeNorm, headcount: Headcount) -> BTreeMap<String, f64> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let quantity = scale_norm(ingredient.per_person, headcount, ingredient.unit);
            (ingredient.name.to_string(), round_to(quantity, RECIPE_DECIMALS))
        })
        .collect()
}

/// Scale every recipe to the given headcount
pub fn scale_recipe_ingredients(headcount: Headcount) -> ScaledRecipes {
    let recipes: ScaledRecipes = RECIPE_NORMS
        .iter()
        .map(|recipe| (recipe.name.to_string(), scale_recipe(recipe, headcount)))
        .collect();

    tracing::debug!("Scaled {} recipes for {} people", recipes.len(), headcount);
    recipes
}

/// Liters of soft drink for the given headcount (8 fl oz per person)
pub fn calculate_soft_drink(headcount: Headcount) -> f64 {
    let ml_per_person = SOFT_DRINK_FL_OZ_PER_PERSON * ML_PER_FL_OZ;
    let liters_per_person = ml_per_person / ML_PER_LITER;
    round_to(headcount.as_f64() * liters_per_person, SOFT_DRINK_DECIMALS)
}
