//! Input validation for delivery problems.
//!
//! Checks structural integrity of a problem before simulating. Detects:
//! - Empty or zero-weight catalogs
//! - Stock/demand vectors that disagree with the catalog size
//! - Entity ids that do not match their index
//! - Fleets with nowhere to start
//! - Zero payload

use crate::models::{Problem, ProductType};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The catalog has no product types.
    EmptyCatalog,
    /// A product type weighs nothing.
    ZeroWeight,
    /// A stock or demand vector has the wrong length.
    VectorLengthMismatch,
    /// An entity id differs from its index.
    IdMismatch,
    /// Drones exist but there is no start position.
    MissingStart,
    /// Drones cannot carry anything.
    ZeroPayload,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem.
///
/// Checks:
/// 1. The catalog is non-empty and every weight is positive
/// 2. Every warehouse stock vector has one entry per product type
/// 3. Every order demand vector has one entry per product type
/// 4. Warehouse and order ids equal their index
/// 5. Drones have a start position (explicit or warehouse 0)
/// 6. Payload is positive when drones exist
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();
    let products = problem.product_count();

    if problem.catalog.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no product types",
        ));
    }
    for (p, &w) in problem.catalog.weights().iter().enumerate() {
        if w == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroWeight,
                format!("Product type {p} has zero weight"),
            ));
        }
    }

    for (i, wh) in problem.warehouses.iter().enumerate() {
        if wh.id != i {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                format!("Warehouse at index {i} has id {}", wh.id),
            ));
        }
        if wh.stock.len() != products {
            errors.push(ValidationError::new(
                ValidationErrorKind::VectorLengthMismatch,
                format!(
                    "Warehouse {i} stocks {} product types, catalog has {products}",
                    wh.stock.len()
                ),
            ));
        }
    }

    for (i, order) in problem.orders.iter().enumerate() {
        if order.id != i {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                format!("Order at index {i} has id {}", order.id),
            ));
        }
        if order.demand.len() != products {
            errors.push(ValidationError::new(
                ValidationErrorKind::VectorLengthMismatch,
                format!(
                    "Order {i} demands {} product types, catalog has {products}",
                    order.demand.len()
                ),
            ));
        }
    }

    if problem.drone_count > 0 {
        if problem.start_position().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingStart,
                "Drones have no start position and there is no warehouse",
            ));
        }
        if problem.payload == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroPayload,
                "Drone payload is zero",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Product types too heavy for a single drone to ever carry.
///
/// Not an error: orders for these types never get served. Drones keep
/// committing empty loads for the first such order they scan, which blocks
/// the greedy pickup scan for every order behind it.
pub fn unreachable_products(problem: &Problem) -> Vec<ProductType> {
    problem
        .catalog
        .weights()
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w > problem.payload)
        .map(|(p, _)| p)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::models::{Order, ProductCatalog, Warehouse};

    fn sample_problem() -> Problem {
        Problem::new(2, 100, 50, ProductCatalog::new(vec![10, 20]))
            .with_warehouse(Position::new(0, 0), vec![5, 5])
            .with_order(Position::new(3, 3), vec![1, 2])
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let problem = Problem::new(0, 10, 10, ProductCatalog::new(vec![]));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCatalog));
    }

    #[test]
    fn test_zero_weight() {
        let mut problem = sample_problem();
        problem.catalog = ProductCatalog::new(vec![10, 0]);
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroWeight && e.message.contains('1')));
    }

    #[test]
    fn test_vector_length_mismatch() {
        let problem = sample_problem()
            .with_warehouse(Position::new(1, 1), vec![1])
            .with_order(Position::new(2, 2), vec![1, 1, 1]);
        let errors = validate_problem(&problem).unwrap_err();
        let mismatches = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::VectorLengthMismatch)
            .count();
        assert_eq!(mismatches, 2);
    }

    #[test]
    fn test_id_mismatch() {
        let mut problem = sample_problem();
        problem
            .warehouses
            .push(Warehouse::new(7, Position::new(1, 1), vec![0, 0]));
        problem
            .orders
            .insert(0, Order::new(1, Position::new(2, 2), vec![0, 1]));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IdMismatch && e.message.contains("Warehouse")));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IdMismatch && e.message.contains("Order")));
    }

    #[test]
    fn test_missing_start() {
        let problem = Problem::new(1, 10, 10, ProductCatalog::new(vec![1]));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingStart));

        let ok = problem.with_start(Position::new(0, 0));
        assert!(validate_problem(&ok).is_ok());
    }

    #[test]
    fn test_zero_payload() {
        let mut problem = sample_problem();
        problem.payload = 0;
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroPayload));
    }

    #[test]
    fn test_multiple_errors() {
        let mut problem = Problem::new(1, 10, 0, ProductCatalog::new(vec![]));
        problem
            .orders
            .push(Order::new(3, Position::new(0, 0), vec![1]));
        let errors = validate_problem(&problem).unwrap_err();
        assert!(errors.len() >= 4);
    }

    #[test]
    fn test_unreachable_products() {
        let problem = Problem::new(1, 10, 15, ProductCatalog::new(vec![10, 16, 15, 40]));
        assert_eq!(unreachable_products(&problem), vec![1, 3]);
    }
}
