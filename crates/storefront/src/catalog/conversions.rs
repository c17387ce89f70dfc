//! Conversion of raw catalog records into domain types.

use pocket_bazaar_core::{CurrencyCode, Price, Product, ProductId};
use rust_decimal::Decimal;
use url::Url;

use super::CatalogError;
use super::wire::ProductRecord;

/// Validate and convert a raw record into a domain [`Product`].
///
/// The catalog publishes bare numeric prices; USD is the catalog's
/// currency. Prices must convert to a non-negative decimal and the image
/// must be a parseable URL.
pub(super) fn convert_product(record: ProductRecord) -> Result<Product, CatalogError> {
    let amount = Decimal::try_from(record.price).map_err(|e| {
        CatalogError::Malformed(format!(
            "product {}: price {}: {e}",
            record.id, record.price
        ))
    })?;

    if amount.is_sign_negative() {
        return Err(CatalogError::Malformed(format!(
            "product {}: negative price {}",
            record.id, record.price
        )));
    }

    Url::parse(&record.image).map_err(|e| {
        CatalogError::Malformed(format!("product {}: image url: {e}", record.id))
    })?;

    Ok(Product {
        id: ProductId::new(record.id),
        title: record.title,
        description: record.description,
        price: Price::new(amount, CurrencyCode::USD),
        image: record.image,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(json: &str) -> ProductRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_convert_valid_record() {
        let record = record(
            r#"{
                "id": 1,
                "title": "Shirt",
                "price": 9.99,
                "description": "A shirt",
                "image": "https://example.com/shirt.png",
                "category": "clothing"
            }"#,
        );

        let product = convert_product(record).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.price.display(), "$9.99");
        assert_eq!(product.image, "https://example.com/shirt.png");
    }

    #[test]
    fn test_convert_rejects_negative_price() {
        let record = record(
            r#"{"id": 2, "title": "Mug", "price": -1.5,
                "description": "", "image": "https://example.com/mug.png"}"#,
        );

        let err = convert_product(record).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
        assert!(err.to_string().contains("product 2"));
    }

    #[test]
    fn test_convert_rejects_invalid_image_url() {
        let record = record(
            r#"{"id": 3, "title": "Hat", "price": 4.0,
                "description": "", "image": "not a url"}"#,
        );

        let err = convert_product(record).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let result: Result<ProductRecord, _> =
            serde_json::from_str(r#"{"id": 4, "title": "No price"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_catalog_array() {
        let records: Vec<ProductRecord> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "Shirt", "price": 9.99,
                 "description": "A shirt", "image": "https://example.com/1.png"},
                {"id": 2, "title": "Mug", "price": 4.5,
                 "description": "A mug", "image": "https://example.com/2.png"}
            ]"#,
        )
        .unwrap();

        let products: Vec<Product> = records
            .into_iter()
            .map(convert_product)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price.display(), "$4.50");
    }
}
