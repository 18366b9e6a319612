//! Product quantity tools

use serde::Serialize;

use crate::calculator::{
    self, format_products, list_available_products, scale_products, specific_product, CalcError,
    CalcResult, Headcount, OutputFormat, ProductQuantity, ProductRecord, Rendered,
    ScaledProducts,
};
use crate::calculator::scaler::SOFT_DRINK_FL_OZ_PER_PERSON;

/// Rendered output of a format tool
#[derive(Debug, Serialize)]
pub struct FormattedResponse<R> {
    pub people: u32,
    pub format: &'static str,
    pub content: Rendered<R>,
}

/// Response for list_products
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<String>,
    pub total: usize,
}

/// Response for calculate_soft_drink
#[derive(Debug, Serialize)]
pub struct SoftDrinkResponse {
    pub people: u32,
    pub fl_oz_per_person: f64,
    pub liters: f64,
}

pub fn calculate_quantities(people: i64) -> CalcResult<ScaledProducts> {
    let headcount = Headcount::new(people)?;
    Ok(scale_products(headcount))
}

pub fn format_quantities(people: i64, format: &str) -> CalcResult<FormattedResponse<ProductRecord>> {
    let headcount = Headcount::new(people)?;
    let format: OutputFormat = format.parse()?;
    let scaled = scale_products(headcount);

    Ok(FormattedResponse {
        people: headcount.get(),
        format: format.as_str(),
        content: format_products(&scaled, format),
    })
}

/// Quantity of one product; `Ok(None)` when no product has that exact name
pub fn get_product_quantity(people: i64, product: &str) -> CalcResult<Option<ProductQuantity>> {
    let headcount = Headcount::new(people)?;
    if product.is_empty() {
        return Err(CalcError::MissingName("Product"));
    }
    Ok(specific_product(headcount, product))
}

pub fn list_products() -> ListProductsResponse {
    let products = list_available_products();
    ListProductsResponse {
        total: products.len(),
        products,
    }
}

pub fn calculate_soft_drink(people: i64) -> CalcResult<SoftDrinkResponse> {
    let headcount = Headcount::new(people)?;
    Ok(SoftDrinkResponse {
        people: headcount.get(),
        fl_oz_per_person: SOFT_DRINK_FL_OZ_PER_PERSON,
        liters: calculator::calculate_soft_drink(headcount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_quantities_rejects_zero() {
        assert!(matches!(
            calculate_quantities(0),
            Err(CalcError::InvalidHeadcount(_))
        ));
        assert_eq!(calculate_quantities(4).unwrap().total_people, 4);
    }

    #[test]
    fn test_format_quantities() {
        let response = format_quantities(50, "texto").unwrap();
        assert_eq!(response.format, "text");
        assert!(response
            .content
            .as_text()
            .unwrap()
            .starts_with("📊 CANTIDADES PARA 50 PERSONAS"));

        assert!(matches!(
            format_quantities(50, "pdf"),
            Err(CalcError::UnknownFormat(_))
        ));
        assert!(matches!(
            format_quantities(-1, "pdf"),
            Err(CalcError::InvalidHeadcount(_))
        ));
    }

    #[test]
    fn test_formatted_list_serializes_as_array() {
        let response = format_quantities(2, "list").unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["content"].is_array());
        assert_eq!(json["format"], "list");
        assert_eq!(json["people"], 2);
    }

    #[test]
    fn test_get_product_quantity() {
        let found = get_product_quantity(10, "Pollo").unwrap().unwrap();
        assert_eq!(found.quantity, 2.5);
        assert_eq!(get_product_quantity(10, "Producto Inexistente"), Ok(None));
        assert_eq!(
            get_product_quantity(10, ""),
            Err(CalcError::MissingName("Product"))
        );
    }

    #[test]
    fn test_list_products() {
        let response = list_products();
        assert_eq!(response.total, 42);
        assert_eq!(response.products.len(), response.total);
    }

    #[test]
    fn test_soft_drink() {
        let response = calculate_soft_drink(50).unwrap();
        assert_eq!(response.liters, 11.83);
        assert_eq!(response.fl_oz_per_person, 8.0);
    }
}
