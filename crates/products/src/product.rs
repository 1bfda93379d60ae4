use serde::{Deserialize, Serialize};

use productos_core::{DomainError, DomainResult, ProductId};

/// A persisted product.
///
/// The identifier is assigned by the store on first save and is never
/// rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Overwrite name and price from `payload`, keeping this product's identifier.
    ///
    /// Any identifier carried by the payload is ignored.
    pub fn apply_changes(self, payload: &ProductPayload) -> ProductDraft {
        ProductDraft {
            id: Some(self.id),
            name: payload.name.clone(),
            price: payload.price,
        }
    }
}

/// Request body accepted by create and update.
///
/// Every field is optional on the wire; missing values are judged by the
/// store when the resulting draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A product that has not been saved yet, or is about to be saved again.
///
/// `id == None` means the store assigns a fresh identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Build a draft for creation. The payload identifier is dropped.
    pub fn for_create(payload: ProductPayload) -> Self {
        Self {
            id: None,
            name: payload.name,
            price: payload.price,
        }
    }

    /// Check the field constraints shared by every store.
    ///
    /// Name must be present and not blank; price must be present and finite.
    pub fn validate(&self) -> DomainResult<(&str, f64)> {
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(DomainError::validation("name must not be blank")),
            None => return Err(DomainError::validation("name must not be null")),
        };

        let price = match self.price {
            Some(price) if price.is_finite() => price,
            Some(_) => return Err(DomainError::validation("price must be a finite number")),
            None => return Err(DomainError::validation("price must not be null")),
        };

        Ok((name, price))
    }

    /// Validate and materialise the draft under `id`.
    pub fn into_product(self, id: ProductId) -> DomainResult<Product> {
        let (name, price) = self.validate()?;
        Ok(Product::new(id, name, price))
    }
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: Some(product.name),
            price: Some(product.price),
        }
    }
}
