//! Status and usage tools
//!
//! Provides runtime status information about the food calculator service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::norms::{CATEGORIES, PRODUCT_NORMS, RECIPE_NORMS, UNIT_NORMS};

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# Food Calculator Instructions

Computes how much raw food to buy for a group, from fixed per-person norms.

## Parameters

- `people`: whole number of people, at least 1. Anything else is rejected.
- `format`: one of `text`, `markdown`, `html`, `list` (`texto` and `lista` are accepted too).
  `list` returns structured records; the others return a single string.
- `product` / `recipe`: exact name, including accents and capitalization.
  Call `list_products` or `list_recipes` first if unsure.

## Tools

| Tool | Purpose |
|------|---------|
| `calculate_quantities` | All products: kilograms for mass products, units for countable ones |
| `format_quantities` | Same, grouped by category and rendered in a format |
| `get_product_quantity` | One product |
| `list_products` | Every product name, sorted |
| `calculate_recipe_ingredients` | Ingredients of every preparation |
| `format_recipe_ingredients` | Same, rendered in a format |
| `get_recipe_quantities` | One preparation, optionally rendered |
| `list_recipes` | Every preparation name, sorted |
| `calculate_soft_drink` | Liters of soft drink (8 fl oz per person) |

## Units

- Products: `kg` or `unidades`.
- Recipe ingredients: `kg`, `litros` (water, vinegar) or `unidades` (eggs).
- Quantities are for raw product.

## Not Found

An unknown product or recipe name returns `{"error": "... not found"}` rather than failing.
"#;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct FoodCalcStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Loaded norm tables
    pub product_count: usize,
    pub unit_product_count: usize,
    pub category_count: usize,
    pub recipe_count: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FoodCalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FoodCalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            product_count: PRODUCT_NORMS.len(),
            unit_product_count: UNIT_NORMS.len(),
            category_count: CATEGORIES.len(),
            recipe_count: RECIPE_NORMS.len(),
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
