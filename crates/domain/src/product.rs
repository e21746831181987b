//! Product — the record type served by the `m1` service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::Record;

/// A catalogue product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Caller-supplied fields of a [`Product`]. Missing fields take their
/// defaults (empty name, zero price).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewProduct {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl NewProduct {
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Record for Product {
    type Draft = NewProduct;

    const COLLECTION: &'static str = "products";

    fn from_draft(id: RecordId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Records every `m1` process starts with: Apple at 0.5 and Banana at 0.3.
#[must_use]
pub fn seed_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Apple", Decimal::new(5, 1)),
        NewProduct::new("Banana", Decimal::new(3, 1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_with_pascal_case_fields() {
        let product = Product::from_draft(
            RecordId::new(3),
            NewProduct::new("Cherry", Decimal::new(12, 1)),
        );
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"Id":3,"Name":"Cherry","Price":1.2}"#);
    }

    #[test]
    fn should_default_missing_fields() {
        let draft: NewProduct = serde_json::from_str("{}").unwrap();
        assert_eq!(draft, NewProduct::default());
        assert!(draft.name.is_empty());
        assert_eq!(draft.price, Decimal::ZERO);
    }

    #[test]
    fn should_ignore_supplied_id() {
        let draft: NewProduct =
            serde_json::from_str(r#"{"Id":999,"Name":"X","Price":1}"#).unwrap();
        assert_eq!(draft.name, "X");
        assert_eq!(draft.price, Decimal::ONE);
    }

    #[test]
    fn should_parse_decimal_price() {
        let draft: NewProduct =
            serde_json::from_str(r#"{"Name":"Cherry","Price":1.2}"#).unwrap();
        assert_eq!(draft.price, Decimal::new(12, 1));
    }

    #[test]
    fn should_keep_every_price_digit() {
        for raw in [
            "0.1234567890123456789",
            "12345678901234567.89",
            "1",
            "79228162514264337593543950335",
        ] {
            let draft: NewProduct =
                serde_json::from_str(&format!(r#"{{"Name":"P","Price":{raw}}}"#)).unwrap();
            assert_eq!(draft.price.to_string(), raw);

            let product = Product::from_draft(RecordId::new(1), draft);
            let json = serde_json::to_string(&product).unwrap();
            assert_eq!(json, format!(r#"{{"Id":1,"Name":"P","Price":{raw}}}"#));
        }
    }

    #[test]
    fn should_reject_price_of_wrong_type() {
        let result: Result<NewProduct, _> =
            serde_json::from_str(r#"{"Name":"X","Price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_seed_apple_and_banana() {
        let seed = seed_products();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].name, "Apple");
        assert_eq!(seed[0].price.to_string(), "0.5");
        assert_eq!(seed[1].name, "Banana");
        assert_eq!(seed[1].price.to_string(), "0.3");
    }

    #[test]
    fn should_serve_under_products_collection() {
        assert_eq!(Product::COLLECTION, "products");
    }
}
