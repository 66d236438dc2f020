//! Grid positions and travel-time arithmetic.
//!
//! Travel between two cells takes the Euclidean distance rounded up to
//! the next whole turn. A move cannot finish in fractional time.

use serde::{Deserialize, Serialize};

/// A cell on the delivery grid.
///
/// Grid dimensions are advisory; positions are not bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Travel time to `other` in turns.
    #[inline]
    pub fn distance_to(&self, other: &Position) -> u32 {
        distance(*self, *other)
    }
}

/// Integer travel time between two positions.
///
/// Returns 0 for identical positions, otherwise `ceil(sqrt(dr² + dc²))`,
/// saturating at `u32::MAX`.
///
/// # Example
/// ```
/// use drone_dispatch::geometry::{distance, Position};
///
/// assert_eq!(distance(Position::new(0, 0), Position::new(3, 4)), 5);
/// assert_eq!(distance(Position::new(0, 0), Position::new(1, 1)), 2);
/// ```
pub fn distance(a: Position, b: Position) -> u32 {
    if a == b {
        return 0;
    }
    // Differences fit in 33 bits, so their squares sum exactly in u128.
    let dr = (i64::from(a.row) - i64::from(b.row)).unsigned_abs();
    let dc = (i64::from(a.col) - i64::from(b.col)).unsigned_abs();
    let squared = u128::from(dr) * u128::from(dr) + u128::from(dc) * u128::from(dc);
    (squared as f64).sqrt().ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identity() {
        let p = Position::new(17, -4);
        assert_eq!(distance(p, p), 0);
    }

    #[test]
    fn test_distance_exact() {
        assert_eq!(distance(Position::new(0, 0), Position::new(0, 2)), 2);
        assert_eq!(distance(Position::new(1, 1), Position::new(4, 5)), 5);
    }

    #[test]
    fn test_distance_rounds_up() {
        // sqrt(2) ≈ 1.414 → 2
        assert_eq!(distance(Position::new(0, 0), Position::new(1, 1)), 2);
        // sqrt(5) ≈ 2.236 → 3
        assert_eq!(distance(Position::new(0, 0), Position::new(1, 2)), 3);
    }

    #[test]
    fn test_distance_symmetric_and_ceiling() {
        for r in -6..6 {
            for c in -6..6 {
                let a = Position::new(0, 0);
                let b = Position::new(r, c);
                let d = distance(a, b);
                assert_eq!(d, distance(b, a));
                let euclid = f64::from(r * r + c * c).sqrt();
                assert!(f64::from(d) >= euclid);
                assert!(f64::from(d) < euclid + 1.0);
            }
        }
    }

    #[test]
    fn test_distance_extreme_positions() {
        let lo = Position::new(i32::MIN, i32::MIN);
        let hi = Position::new(i32::MAX, i32::MAX);
        // 2^32 * sqrt(2) does not fit in u32.
        assert_eq!(distance(lo, hi), u32::MAX);
        assert_eq!(distance(hi, lo), u32::MAX);
        assert_eq!(
            distance(Position::new(i32::MIN, 0), Position::new(i32::MAX, 0)),
            u32::MAX
        );
        let d = distance(Position::new(0, 0), Position::new(i32::MAX, 0));
        assert!(d >= i32::MAX as u32);
    }

    #[test]
    fn test_distance_to_method() {
        let a = Position::new(2, 3);
        assert_eq!(a.distance_to(&Position::new(2, 10)), 7);
    }
}
