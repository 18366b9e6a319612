//! Grouping of scaled products into display sections

use super::scaler::ScaledProducts;
use super::units::UnitClass;
use crate::norms::{Category, CATEGORIES, UNIT_CATEGORY_LABEL};

/// One display section with its entries in display order
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection<'a> {
    pub label: &'static str,
    pub unit: UnitClass,
    pub entries: Vec<(&'a str, f64)>,
}

/// Group scaled products using the reference category table
pub fn categorize(scaled: &ScaledProducts) -> Vec<CategorySection<'_>> {
    categorize_with(CATEGORIES, scaled)
}

/// Group scaled products using the given category table.
///
/// Mass sections follow the table order and each member list's order;
/// sections with no scaled member are dropped. Countable products follow
/// as one final section sorted by name. Mass products that belong to no
/// category are left out.
pub fn categorize_with<'a>(
    categories: &[Category],
    scaled: &'a ScaledProducts,
) -> Vec<CategorySection<'a>> {
    let mut sections: Vec<CategorySection<'a>> = categories
        .iter()
        .filter_map(|category| {
            let entries: Vec<(&'a str, f64)> = category
                .members
                .iter()
                .filter_map(|member| {
                    scaled
                        .mass_kg
                        .get_key_value(*member)
                        .map(|(name, kg)| (name.as_str(), *kg))
                })
                .collect();

            if entries.is_empty() {
                None
            } else {
                Some(CategorySection {
                    label: category.label,
                    unit: UnitClass::Mass,
                    entries,
                })
            }
        })
        .collect();

    // BTreeMap iteration is already sorted by name
    if !scaled.unit_counts.is_empty() {
        sections.push(CategorySection {
            label: UNIT_CATEGORY_LABEL,
            unit: UnitClass::Count,
            entries: scaled
                .unit_counts
                .iter()
                .map(|(name, units)| (name.as_str(), *units))
                .collect(),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::scaler::{scale_products, Headcount};
    use std::collections::BTreeMap;

    fn sample(mass: &[(&str, f64)], units: &[(&str, f64)]) -> ScaledProducts {
        ScaledProducts {
            total_people: 1,
            mass_kg: mass.iter().map(|(n, q)| (n.to_string(), *q)).collect(),
            unit_counts: units.iter().map(|(n, q)| (n.to_string(), *q)).collect(),
        }
    }

    #[test]
    fn test_reference_sections() {
        let scaled = scale_products(Headcount::new(50).unwrap());
        let sections = categorize(&scaled);
        assert_eq!(sections.len(), CATEGORIES.len() + 1);
        assert_eq!(sections[0].label, "🍚 ARROCES");
        assert_eq!(
            sections[0].entries,
            vec![("Arroz blanco", 5.0), ("Arroz moro", 2.6), ("Arroz con leche", 0.5)]
        );
        let last = sections.last().unwrap();
        assert_eq!(last.label, UNIT_CATEGORY_LABEL);
        assert_eq!(last.unit, UnitClass::Count);
    }

    #[test]
    fn test_declared_member_order_kept() {
        let scaled = scale_products(Headcount::ONE);
        let sections = categorize(&scaled);
        let viandas = sections.iter().find(|s| s.label == "🥔 VIANDAS").unwrap();
        let names: Vec<&str> = viandas.entries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Plátano", "Papa", "Boniato", "Calabaza", "Yuca"]);
    }

    #[test]
    fn test_unit_section_sorted() {
        let scaled = sample(&[], &[("Zanahoria", 1.0), ("Huevo", 2.0), ("Limón", 3.0)]);
        let sections = categorize(&scaled);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            sections[0].entries,
            vec![("Huevo", 2.0), ("Limón", 3.0), ("Zanahoria", 1.0)]
        );
    }

    #[test]
    fn test_empty_categories_and_unknown_products_dropped() {
        let scaled = sample(&[("Frijoles", 0.9), ("Caviar", 1.0)], &[]);
        let sections = categorize(&scaled);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, "🫘 GRANOS");
        assert_eq!(sections[0].entries, vec![("Frijoles", 0.9)]);
    }

    #[test]
    fn test_custom_table() {
        let table = [Category {
            label: "POSTRES",
            members: &["Gelatina", "Natilla"],
        }];
        let scaled = ScaledProducts {
            total_people: 1,
            mass_kg: BTreeMap::from([("Natilla".to_string(), 0.019), ("Gelatina".to_string(), 0.02)]),
            unit_counts: BTreeMap::new(),
        };
        let sections = categorize_with(&table, &scaled);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].entries, vec![("Gelatina", 0.02), ("Natilla", 0.019)]);
    }
}
