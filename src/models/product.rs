//! Product catalog.
//!
//! Product types are identified by their index into the catalog. The
//! catalog is immutable for the run and shared by every entity.

use serde::{Deserialize, Serialize};

/// Product type index.
pub type ProductType = usize;

/// Per-type unit weights.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    weights: Vec<u32>,
}

impl ProductCatalog {
    /// Creates a catalog from unit weights, one per product type.
    pub fn new(weights: Vec<u32>) -> Self {
        Self { weights }
    }

    /// Number of product types.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the catalog has no product types.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Unit weight of a product type.
    ///
    /// # Panics
    /// If `product` is not a catalog index.
    #[inline]
    pub fn weight(&self, product: ProductType) -> u32 {
        self.weights[product]
    }

    /// All unit weights in type order.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Total weight of a per-type unit vector.
    pub fn load_weight(&self, units: &[u32]) -> u64 {
        units
            .iter()
            .zip(&self.weights)
            .map(|(&n, &w)| u64::from(n) * u64::from(w))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_basics() {
        let catalog = ProductCatalog::new(vec![100, 5, 450]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.weight(1), 5);
        assert_eq!(catalog.weights(), &[100, 5, 450]);
    }

    #[test]
    fn test_load_weight() {
        let catalog = ProductCatalog::new(vec![100, 5, 450]);
        assert_eq!(catalog.load_weight(&[1, 2, 0]), 110);
        assert_eq!(catalog.load_weight(&[0, 0, 0]), 0);
    }
}
