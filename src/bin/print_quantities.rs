//! Print the shopping quantities for a headcount
//!
//! Usage: print_quantities [PEOPLE] [FORMAT]

use food_calc::calculator::{
    calculate_soft_drink, format_products, format_quantity, format_recipe_ingredients,
    scale_products, scale_recipe_ingredients, specific_product, Headcount, OutputFormat,
    Rendered,
};
use serde::Serialize;

fn print_rendered<R: Serialize>(rendered: &Rendered<R>) -> Result<(), serde_json::Error> {
    match rendered {
        Rendered::Text(text) => println!("{}", text),
        Rendered::Records(records) => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let people: Headcount = args.next().as_deref().unwrap_or("50").parse()?;
    let format: OutputFormat = args.next().as_deref().unwrap_or("text").parse()?;

    print_rendered(&format_products(&scale_products(people), format))?;

    if let Some(rice) = specific_product(people, "Arroz blanco") {
        println!();
        println!(
            "Para {} personas necesitas: {} {} de {}",
            people,
            format_quantity(rice.quantity),
            rice.unit.label(),
            rice.product
        );
    }

    println!();
    print_rendered(&format_recipe_ingredients(&scale_recipe_ingredients(people), format))?;

    println!();
    println!(
        "🥤 Refresco: {} litros",
        format_quantity(calculate_soft_drink(people))
    );

    Ok(())
}
