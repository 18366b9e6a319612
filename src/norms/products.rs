//! Product norms
//!
//! Raw (uncooked) product quantities per person. Mass products are stored in
//! grams, countable products in units.

use serde::Serialize;

/// Grams of a product consumed by one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductNorm {
    pub name: &'static str,
    pub grams_per_person: f64,
}

impl ProductNorm {
    const fn new(name: &'static str, grams_per_person: f64) -> Self {
        Self {
            name,
            grams_per_person,
        }
    }
}

/// Units of a countable product consumed by one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitNorm {
    pub name: &'static str,
    pub units_per_person: f64,
}

impl UnitNorm {
    const fn new(name: &'static str, units_per_person: f64) -> Self {
        Self {
            name,
            units_per_person,
        }
    }
}

pub static PRODUCT_NORMS: &[ProductNorm] = &[
    ProductNorm::new("Arroz blanco", 100.0),
    ProductNorm::new("Arroz moro", 52.0),
    ProductNorm::new("Arroz con leche", 10.0),
    ProductNorm::new("Frijoles", 45.0),
    ProductNorm::new("Carne de cerdo/Fricasé sin hueso", 160.0),
    ProductNorm::new("Carne de cerdo/Fricasé con hueso", 250.0),
    ProductNorm::new("Pollo/Menudo para sopa", 40.0),
    ProductNorm::new("Pollo", 250.0),
    ProductNorm::new("Picadillo", 100.0),
    ProductNorm::new("Picadillo para albóndiga", 100.0),
    ProductNorm::new("Albóndiga", 86.0),
    ProductNorm::new("Jamón meriendas", 45.0),
    ProductNorm::new("Jamón desayuno", 15.0),
    ProductNorm::new("Pescado frito", 140.0),
    ProductNorm::new("Pescado aporreado", 100.0),
    ProductNorm::new("Carne de res en salsa", 140.0),
    ProductNorm::new("Carne de res en ropa vieja", 140.0),
    ProductNorm::new("Hígado", 140.0),
    ProductNorm::new("Espaguetis Napolitanos", 75.0),
    ProductNorm::new("Espaguetis para ensalada", 17.0),
    ProductNorm::new("Croquetas (3u)", 120.0),
    ProductNorm::new("Croquetas (4u)", 100.0),
    ProductNorm::new("Hamburguesa de pollo c/queso", 130.0),
    ProductNorm::new("Plátano", 150.0),
    ProductNorm::new("Papa", 150.0),
    ProductNorm::new("Boniato", 150.0),
    ProductNorm::new("Calabaza", 150.0),
    ProductNorm::new("Yuca", 150.0),
    ProductNorm::new("Tomate", 150.0),
    ProductNorm::new("Col", 150.0),
    ProductNorm::new("Natilla", 19.2),
    ProductNorm::new("Gelatina", 19.2),
    ProductNorm::new("Dulces de latas", 55.0),
    ProductNorm::new("Queso para meriendas", 45.0),
    ProductNorm::new("Queso para desayuno (Gouda)", 15.0),
    ProductNorm::new("Queso para espaguetis", 58.0),
    ProductNorm::new("Mantequilla", 8.0),
    ProductNorm::new("Mayonesa", 8.0),
];

pub static UNIT_NORMS: &[UnitNorm] = &[
    UnitNorm::new("Huevo", 2.0),
    UnitNorm::new("Huevo revuelto", 1.5),
    UnitNorm::new("Huevo tortilla", 2.0),
    UnitNorm::new("Rodajas de piña", 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(PRODUCT_NORMS.len(), 38);
        assert_eq!(UNIT_NORMS.len(), 4);
    }

    #[test]
    fn test_names_unique_across_tables() {
        let mut seen = HashSet::new();
        for name in PRODUCT_NORMS
            .iter()
            .map(|n| n.name)
            .chain(UNIT_NORMS.iter().map(|n| n.name))
        {
            assert!(seen.insert(name), "duplicate product name: {}", name);
        }
    }

    #[test]
    fn test_norms_non_negative() {
        assert!(PRODUCT_NORMS.iter().all(|n| n.grams_per_person >= 0.0));
        assert!(UNIT_NORMS.iter().all(|n| n.units_per_person >= 0.0));
    }
}
