//! Problem file reader.
//!
//! Line-oriented format of whitespace-separated integers:
//!
//! ```text
//! rows cols drones turns payload
//! P
//! w_0 .. w_{P-1}
//! W
//! r c            } per warehouse
//! s_0 .. s_{P-1} }
//! O
//! r c            } per order
//! L              }
//! t_1 .. t_L     }
//! ```
//!
//! Warehouse and order ids are their positions in the file. Order demand
//! vectors are tallies of the listed item types.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use super::LoadError;
use crate::geometry::Position;
use crate::models::{Order, Problem, ProductCatalog, Warehouse};

/// Reads and parses a problem file.
pub fn read_problem(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_problem(&text)
}

/// Parses a problem from its text form.
///
/// # Example
/// ```
/// use drone_dispatch::io::parse_problem;
///
/// let text = "10 10 2 50 100\n2\n10 20\n1\n0 0\n5 5\n1\n3 3\n2\n1 1\n";
/// let problem = parse_problem(text).unwrap();
/// assert_eq!(problem.drone_count, 2);
/// assert_eq!(problem.orders[0].demand, vec![0, 2]);
/// ```
pub fn parse_problem(text: &str) -> Result<Problem, LoadError> {
    let mut lines = Lines::new(text);

    let [rows, cols, drones, turns, payload] = lines.fixed::<u32, 5>()?;
    let [product_count] = lines.fixed::<usize, 1>()?;
    let weights = lines.exact::<u32>(product_count)?;
    let catalog = ProductCatalog::new(weights);

    let [warehouse_count] = lines.fixed::<usize, 1>()?;
    let mut warehouses = Vec::with_capacity(warehouse_count);
    for id in 0..warehouse_count {
        let position = lines.position()?;
        let stock = lines.exact::<u32>(product_count)?;
        warehouses.push(Warehouse::new(id, position, stock));
    }

    let [order_count] = lines.fixed::<usize, 1>()?;
    let mut orders = Vec::with_capacity(order_count);
    for id in 0..order_count {
        let position = lines.position()?;
        let [item_count] = lines.fixed::<usize, 1>()?;
        let items = lines.exact::<usize>(item_count)?;
        let line = lines.line_number;
        if let Some(&bad) = items.iter().find(|&&t| t >= product_count) {
            return Err(LoadError::UnknownProduct {
                line,
                product: bad,
                product_count,
            });
        }
        orders.push(Order::from_items(id, position, &items, product_count));
    }

    let mut problem = Problem::new(drones as usize, turns, payload, catalog).with_grid(rows, cols);
    problem.warehouses = warehouses;
    problem.orders = orders;
    Ok(problem)
}

/// Line cursor that skips blank lines and tracks 1-based line numbers.
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Result<&'a str, LoadError> {
        for line in self.inner.by_ref() {
            self.line_number += 1;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
        Err(LoadError::UnexpectedEof {
            line: self.line_number,
        })
    }

    /// Parses every field of the next line, expecting exactly `n`.
    fn exact<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>, LoadError> {
        if n == 0 {
            // An empty list may be written as a blank line or omitted.
            return Ok(Vec::new());
        }
        let line = self.next_line()?;
        let values = line
            .split_whitespace()
            .map(|field| {
                field.parse::<T>().map_err(|_| LoadError::InvalidNumber {
                    line: self.line_number,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<T>, _>>()?;
        if values.len() != n {
            return Err(LoadError::FieldCount {
                line: self.line_number,
                expected: n,
                found: values.len(),
            });
        }
        Ok(values)
    }

    fn fixed<T: FromStr, const N: usize>(&mut self) -> Result<[T; N], LoadError> {
        let values = self.exact::<T>(N)?;
        let line = self.line_number;
        values
            .try_into()
            .map_err(|v: Vec<T>| LoadError::FieldCount {
                line,
                expected: N,
                found: v.len(),
            })
    }

    fn position(&mut self) -> Result<Position, LoadError> {
        let [row, col] = self.fixed::<i32, 2>()?;
        Ok(Position::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
100 100 3 50 500
3
100 5 450
2
0 0
5 1 0
5 5
0 10 2
3
1 1
2
2 0
3 3
3
0 0 0
5 6
1
2
";

    #[test]
    fn test_parse_sample() {
        let p = parse_problem(SAMPLE).unwrap();
        assert_eq!(p.rows, 100);
        assert_eq!(p.cols, 100);
        assert_eq!(p.drone_count, 3);
        assert_eq!(p.horizon, 50);
        assert_eq!(p.payload, 500);
        assert_eq!(p.catalog.weights(), &[100, 5, 450]);

        assert_eq!(p.warehouses.len(), 2);
        assert_eq!(p.warehouses[1].id, 1);
        assert_eq!(p.warehouses[1].position, Position::new(5, 5));
        assert_eq!(p.warehouses[1].stock, vec![0, 10, 2]);

        assert_eq!(p.orders.len(), 3);
        assert_eq!(p.orders[0].demand, vec![1, 0, 1]);
        assert_eq!(p.orders[1].demand, vec![3, 0, 0]);
        assert_eq!(p.orders[2].position, Position::new(5, 6));
        assert_eq!(p.orders[2].demand, vec![0, 0, 1]);
        assert_eq!(p.start_position(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_parse_twice_gives_equal_problems() {
        let a = parse_problem(SAMPLE).unwrap();
        let b = parse_problem(SAMPLE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncated_input() {
        let text = "100 100 3 50 500\n3\n100 5 450\n2\n0 0\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_invalid_number() {
        let text = "100 100 x 50 500\n";
        let err = parse_problem(text).unwrap_err();
        match err {
            LoadError::InvalidNumber { line, value } => {
                assert_eq!(line, 1);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_count() {
        let text = "100 100 3 50\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::FieldCount {
                line: 1,
                expected: 5,
                found: 4
            }
        ));
    }

    #[test]
    fn test_unknown_product() {
        let text = "10 10 1 10 10\n1\n1\n1\n0 0\n1\n1\n1 1\n1\n4\n";
        let err = parse_problem(text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownProduct {
                line: 10,
                product: 4,
                product_count: 1
            }
        ));
    }

    #[test]
    fn test_read_problem_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let p = read_problem(file.path()).unwrap();
        assert_eq!(p.orders.len(), 3);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_problem(dir.path().join("missing.in")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
