//! Recipe norms
//!
//! Per-person ingredient quantities for the basic preparations. Mass
//! ingredients are in grams, liquids in milliliters and countable
//! ingredients in units; each entry carries its unit class explicitly.

use crate::calculator::UnitClass;

/// One ingredient of a recipe, per person
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientNorm {
    pub name: &'static str,
    pub per_person: f64,
    pub unit: UnitClass,
}

const fn mass(name: &'static str, grams: f64) -> IngredientNorm {
    IngredientNorm {
        name,
        per_person: grams,
        unit: UnitClass::Mass,
    }
}

const fn volume(name: &'static str, milliliters: f64) -> IngredientNorm {
    IngredientNorm {
        name,
        per_person: milliliters,
        unit: UnitClass::Volume,
    }
}

const fn count(name: &'static str, units: f64) -> IngredientNorm {
    IngredientNorm {
        name,
        per_person: units,
        unit: UnitClass::Count,
    }
}

/// A named preparation and its ingredients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeNorm {
    pub name: &'static str,
    pub ingredients: &'static [IngredientNorm],
}

impl RecipeNorm {
    pub fn ingredient(&self, name: &str) -> Option<&'static IngredientNorm> {
        self.ingredients.iter().find(|i| i.name == name)
    }
}

pub static RECIPE_NORMS: &[RecipeNorm] = &[
    RecipeNorm {
        name: "Arroz blanco",
        ingredients: &[
            mass("Arroz", 100.0),
            volume("Agua", 200.0),
            mass("Aceite", 5.0),
            mass("Sal", 2.0),
        ],
    },
    RecipeNorm {
        name: "Arroz moro",
        ingredients: &[
            mass("Arroz crudo", 52.0),
            mass("Frijol seco", 26.0),
            volume("Agua", 150.0),
            mass("Aceite", 3.0),
            mass("Cebolla", 10.0),
            mass("Ajo", 2.0),
            mass("Pimiento", 5.0),
            mass("Sal", 1.5),
        ],
    },
    RecipeNorm {
        name: "Frijoles negros",
        ingredients: &[
            mass("Frijoles (secos)", 45.0),
            volume("Agua", 180.0),
            mass("Aceite", 3.0),
            mass("Cebolla", 15.0),
            mass("Ajo", 3.0),
            mass("Pimiento", 10.0),
            mass("Sal", 2.0),
            mass("Comino", 0.5),
        ],
    },
    RecipeNorm {
        name: "Pollo frito",
        ingredients: &[
            mass("Pollo (crudo)", 250.0),
            mass("Aceite para freír", 50.0),
            mass("Sal", 2.0),
            mass("Ajo", 2.0),
            mass("Limón", 10.0),
        ],
    },
    RecipeNorm {
        name: "Picadillo",
        ingredients: &[
            mass("Carne molida", 100.0),
            mass("Aceite", 5.0),
            mass("Cebolla", 20.0),
            mass("Ajo", 3.0),
            mass("Pimiento", 15.0),
            mass("Tomate", 30.0),
            mass("Sal", 1.5),
            mass("Comino", 0.5),
        ],
    },
    RecipeNorm {
        name: "Espaguetis Napolitanos",
        ingredients: &[
            mass("Espaguetis (secos)", 75.0),
            volume("Agua", 150.0),
            mass("Salsa de tomate", 40.0),
            mass("Aceite", 5.0),
            mass("Cebolla", 15.0),
            mass("Ajo", 2.0),
            mass("Sal", 2.0),
            mass("Queso rallado", 58.0),
        ],
    },
    RecipeNorm {
        name: "Plátanos maduros fritos",
        ingredients: &[
            mass("Plátano maduro", 150.0),
            mass("Aceite para freír", 30.0),
            mass("Sal (opcional)", 0.5),
        ],
    },
    RecipeNorm {
        name: "Viandas hervidas (Papa/Yuca/Boniato)",
        ingredients: &[
            mass("Vianda (papa/yuca/boniato)", 150.0),
            volume("Agua", 200.0),
            mass("Sal", 2.0),
        ],
    },
    RecipeNorm {
        name: "Ensalada de col",
        ingredients: &[
            mass("Col", 150.0),
            mass("Tomate", 50.0),
            mass("Cebolla", 20.0),
            mass("Aceite", 5.0),
            volume("Vinagre", 3.0),
            mass("Sal", 1.0),
        ],
    },
    RecipeNorm {
        name: "Huevos revueltos",
        ingredients: &[
            // Per-person unit count, scaled without the gram/ml division.
            count("Huevos", 1.5),
            mass("Aceite", 3.0),
            mass("Cebolla", 10.0),
            mass("Sal", 1.0),
        ],
    },
];

/// Find a recipe by exact name
pub fn find_recipe(name: &str) -> Option<&'static RecipeNorm> {
    RECIPE_NORMS.iter().find(|r| r.name == name)
}

/// Unit class of an ingredient as declared in the recipe table
pub fn ingredient_unit(recipe: &str, ingredient: &str) -> Option<UnitClass> {
    find_recipe(recipe)
        .and_then(|r| r.ingredient(ingredient))
        .map(|i| i.unit)
}
