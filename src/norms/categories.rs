//! Display categories
//!
//! Categories and their members are kept in declaration order; the
//! formatters depend on that order rather than on alphabetical order.

/// A named group of mass products used for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub members: &'static [&'static str],
}

impl Category {
    const fn new(label: &'static str, members: &'static [&'static str]) -> Self {
        Self { label, members }
    }

    pub fn contains(&self, product: &str) -> bool {
        self.members.iter().any(|member| *member == product)
    }
}

/// Label of the synthetic category holding countable products
pub const UNIT_CATEGORY_LABEL: &str = "🥚 PRODUCTOS POR UNIDADES";

pub static CATEGORIES: &[Category] = &[
    Category::new(
        "🍚 ARROCES",
        &["Arroz blanco", "Arroz moro", "Arroz con leche"],
    ),
    Category::new("🫘 GRANOS", &["Frijoles"]),
    Category::new(
        "🍖 CARNES Y AVES",
        &[
            "Carne de cerdo/Fricasé sin hueso",
            "Carne de cerdo/Fricasé con hueso",
            "Pollo/Menudo para sopa",
            "Pollo",
            "Carne de res en salsa",
            "Carne de res en ropa vieja",
            "Hígado",
        ],
    ),
    Category::new(
        "🍔 PICADILLOS Y ELABORADOS",
        &[
            "Picadillo",
            "Picadillo para albóndiga",
            "Albóndiga",
            "Croquetas (3u)",
            "Croquetas (4u)",
            "Hamburguesa de pollo c/queso",
        ],
    ),
    Category::new("🐟 PESCADO", &["Pescado frito", "Pescado aporreado"]),
    Category::new("🥓 EMBUTIDOS", &["Jamón meriendas", "Jamón desayuno"]),
    Category::new(
        "🍝 PASTAS",
        &["Espaguetis Napolitanos", "Espaguetis para ensalada"],
    ),
    Category::new(
        "🥔 VIANDAS",
        &["Plátano", "Papa", "Boniato", "Calabaza", "Yuca"],
    ),
    Category::new("🥗 VEGETALES", &["Tomate", "Col"]),
    Category::new("🍮 POSTRES", &["Natilla", "Gelatina", "Dulces de latas"]),
    Category::new(
        "🧀 LÁCTEOS",
        &[
            "Queso para meriendas",
            "Queso para desayuno (Gouda)",
            "Queso para espaguetis",
            "Mantequilla",
        ],
    ),
    Category::new("🥫 CONDIMENTOS", &["Mayonesa"]),
];

/// Find the category a product is displayed under
pub fn category_of(product: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.contains(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::norms::PRODUCT_NORMS;

    #[test]
    fn test_members_exist_in_product_table() {
        for category in CATEGORIES {
            for member in category.members {
                assert!(
                    PRODUCT_NORMS.iter().any(|n| n.name == *member),
                    "{} lists unknown product {}",
                    category.label,
                    member
                );
            }
        }
    }

    #[test]
    fn test_product_in_at_most_one_category() {
        for norm in PRODUCT_NORMS {
            let count = CATEGORIES.iter().filter(|c| c.contains(norm.name)).count();
            assert!(count <= 1, "{} is in {} categories", norm.name, count);
        }
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("Frijoles").map(|c| c.label), Some("🫘 GRANOS"));
        assert_eq!(category_of("Mayonesa").map(|c| c.label), Some("🥫 CONDIMENTOS"));
        assert!(category_of("Huevo").is_none());
        assert!(category_of("frijoles").is_none());
    }

    #[test]
    fn test_category_order() {
        let labels: Vec<&str> = CATEGORIES.iter().map(|c| c.label).collect();
        assert_eq!(labels.first(), Some(&"🍚 ARROCES"));
        assert_eq!(labels.last(), Some(&"🥫 CONDIMENTOS"));
        assert_eq!(labels.len(), 12);
    }
}
