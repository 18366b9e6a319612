//! Unit classes and conversion constants
//!
//! Norms are stored in base units (grams, milliliters, units) and displayed
//! in kilograms, liters or units.

use serde::{Deserialize, Serialize};

/// Measurement class of a product or ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Stored in grams, displayed in kilograms
    #[serde(rename = "kg")]
    Mass,
    /// Stored in milliliters, displayed in liters
    #[serde(rename = "litros")]
    Volume,
    /// Stored and displayed as a count
    #[serde(rename = "unidades")]
    Count,
}

impl UnitClass {
    /// Display label used by every formatter
    pub fn label(&self) -> &'static str {
        match self {
            UnitClass::Mass => "kg",
            UnitClass::Volume => "litros",
            UnitClass::Count => "unidades",
        }
    }

    /// Parse a display label
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "kg" => Some(UnitClass::Mass),
            "litros" => Some(UnitClass::Volume),
            "unidades" => Some(UnitClass::Count),
            _ => None,
        }
    }

    /// How many stored base units make one displayed unit
    pub fn base_units_per_display_unit(&self) -> f64 {
        match self {
            UnitClass::Mass => G_PER_KG,
            UnitClass::Volume => ML_PER_LITER,
            UnitClass::Count => 1.0,
        }
    }

    /// Classify an ingredient by its name.
    ///
    /// Exactly "Huevos" is a count, anything containing "Agua" or "Vinagre"
    /// is a liquid, everything else is a mass. Only used for ingredients
    /// that are not in the recipe table.
    pub fn infer_from_name(name: &str) -> Self {
        if name == "Huevos" {
            UnitClass::Count
        } else if name.contains("Agua") || name.contains("Vinagre") {
            UnitClass::Volume
        } else {
            UnitClass::Mass
        }
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per fluid ounce (US)
pub const ML_PER_FL_OZ: f64 = 29.5735;

// ============================================================================
// Precision
// ============================================================================

/// Decimals kept for product masses (kg)
pub const MASS_DECIMALS: usize = 3;
/// Decimals kept for product unit counts
pub const COUNT_DECIMALS: usize = 1;
/// Decimals kept for every recipe ingredient
pub const RECIPE_DECIMALS: usize = 3;
/// Decimals kept for the soft drink volume (liters)
pub const SOFT_DRINK_DECIMALS: usize = 2;

/// Round to a fixed number of decimals.
///
/// Goes through exact decimal formatting so that the result is the nearest
/// representable value to the correctly rounded decimal.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Render a quantity the way results are displayed: shortest decimal that
/// round-trips, with a trailing ".0" on whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
