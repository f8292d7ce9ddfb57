//! Mapping between the letters `A-Z`, `a-z` and curve points.
//!
//! The table holds the first [`ALPHABET_SIZE`] valid points in discovery order:
//! indices 0-25 are `A`-`Z`, indices 26-51 are `a`-`z`. Because the letter assignment
//! depends on that order, point discovery must be deterministic.
//!
//! Encoding misses are not errors. A character outside the alphabet has no point
//! (`None`), and a point that is not in the table decodes to [`UNKNOWN_SYMBOL`].

use std::collections::HashSet;

use log::debug;

use crate::curve::{Curve, Point};
use crate::error::{Error, Result};

/// Number of symbols the table must hold: 26 uppercase plus 26 lowercase letters.
pub const ALPHABET_SIZE: usize = 52;

/// Marker returned when a point has no table entry.
pub const UNKNOWN_SYMBOL: char = '?';

const UPPERCASE_OFFSET: usize = 0;
const LOWERCASE_OFFSET: usize = 26;

/// A source of valid curve points.
///
/// Implementations must be deterministic: two calls on the same curve return the same
/// points in the same order.
pub trait PointSource {
    /// Collect up to `max_points` distinct affine points on `curve`.
    fn collect_points(&self, curve: &Curve, max_points: usize) -> Vec<Point>;
}

/// Brute-force search over every `(x, y)` in `[0, p) x [0, p)`, x outer and y inner.
///
/// O(p^2), which is fine for the small moduli this crate targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl PointSource for ExhaustiveSearch {
    fn collect_points(&self, curve: &Curve, max_points: usize) -> Vec<Point> {
        let p = curve.modulus();
        let mut points = Vec::with_capacity(max_points);
        if max_points == 0 {
            return points;
        }

        for x in 0..p {
            for y in 0..p {
                if curve.is_valid_point(x, y) {
                    points.push(Point::Coord { x, y });
                    if points.len() >= max_points {
                        return points;
                    }
                }
            }
        }
        points
    }
}

/// Letter-indexed table of curve points. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointTable {
    points: Vec<Point>,
}

impl PointTable {
    /// Build the table by exhaustive search.
    ///
    /// # Errors
    /// [`Error::InsufficientPoints`] if the curve has fewer than [`ALPHABET_SIZE`]
    /// affine points. A short table is never returned.
    pub fn build(curve: &Curve) -> Result<Self> {
        Self::build_with(curve, &ExhaustiveSearch)
    }

    /// Build the table from any [`PointSource`].
    ///
    /// # Errors
    /// Besides [`Error::InsufficientPoints`], a source that yields the identity or the
    /// same point twice fails with [`Error::InvalidCurve`], and one that yields an
    /// off-curve point fails with [`Error::PointNotOnCurve`].
    pub fn build_with<S: PointSource + ?Sized>(curve: &Curve, source: &S) -> Result<Self> {
        let points = source.collect_points(curve, ALPHABET_SIZE);
        debug!(
            "collected {} of {} table points for p = {}",
            points.len(),
            ALPHABET_SIZE,
            curve.modulus()
        );

        if points.len() < ALPHABET_SIZE {
            return Err(Error::InsufficientPoints {
                found: points.len(),
                required: ALPHABET_SIZE,
            });
        }
        let points: Vec<Point> = points.into_iter().take(ALPHABET_SIZE).collect();
        let mut seen = HashSet::with_capacity(ALPHABET_SIZE);
        for point in &points {
            if !seen.insert(*point) {
                return Err(Error::InvalidCurve(format!(
                    "point source yielded {} more than once",
                    point
                )));
            }
            match *point {
                Point::Infinity => {
                    return Err(Error::InvalidCurve(
                        "point source yielded the point at infinity".to_string(),
                    ))
                }
                Point::Coord { x, y } if !curve.contains(point) => {
                    return Err(Error::PointNotOnCurve { x, y })
                }
                Point::Coord { .. } => {}
            }
        }

        Ok(PointTable { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map a letter to its point, or `None` for anything outside `A-Z`, `a-z`.
    pub fn char_to_point(&self, c: char) -> Option<Point> {
        let index = match c {
            'A'..='Z' => UPPERCASE_OFFSET + (c as usize - 'A' as usize),
            'a'..='z' => LOWERCASE_OFFSET + (c as usize - 'a' as usize),
            _ => return None,
        };
        self.points.get(index).copied()
    }

    /// Map a point back to its letter, or [`UNKNOWN_SYMBOL`] if it is not in the table.
    pub fn point_to_char(&self, point: &Point) -> char {
        self.points
            .iter()
            .position(|candidate| candidate == point)
            .and_then(index_to_char)
            .unwrap_or(UNKNOWN_SYMBOL)
    }
}

fn index_to_char(index: usize) -> Option<char> {
    match index {
        i if i < LOWERCASE_OFFSET => Some((b'A' + (i - UPPERCASE_OFFSET) as u8) as char),
        i if i < ALPHABET_SIZE => Some((b'a' + (i - LOWERCASE_OFFSET) as u8) as char),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CurveParams;

    fn toy_curve() -> Curve {
        Curve::new(CurveParams { a: 2, b: 3, p: 521 }).unwrap()
    }

    #[test]
    fn test_build_table_order() {
        let table = PointTable::build(&toy_curve()).unwrap();
        assert_eq!(table.len(), ALPHABET_SIZE);
        assert_eq!(
            &table.points()[..4],
            &[
                Point::new(3, 6),
                Point::new(3, 515),
                Point::new(5, 212),
                Point::new(5, 309)
            ]
        );
        assert_eq!(table.points()[25], Point::new(23, 393));
        assert_eq!(table.points()[26], Point::new(26, 209));
        assert_eq!(table.points()[51], Point::new(49, 2));
    }

    #[test]
    fn test_table_points_on_curve_and_distinct() {
        let curve = toy_curve();
        let table = PointTable::build(&curve).unwrap();
        for (i, point) in table.points().iter().enumerate() {
            let (x, y) = point.coords().unwrap();
            assert!(curve.is_valid_point(x, y));
            assert!(!table.points()[..i].contains(point));
        }
    }

    #[test]
    fn test_table_is_deterministic() {
        let curve = toy_curve();
        assert_eq!(
            PointTable::build(&curve).unwrap(),
            PointTable::build(&curve).unwrap()
        );
    }

    #[test]
    fn test_insufficient_points() {
        // y^2 = x^3 + x + 1 over F_23 has only 27 affine points
        let curve = Curve::new(CurveParams { a: 1, b: 1, p: 23 }).unwrap();
        assert_eq!(
            PointTable::build(&curve),
            Err(Error::InsufficientPoints {
                found: 27,
                required: ALPHABET_SIZE
            })
        );
    }

    #[test]
    fn test_char_mapping() {
        let table = PointTable::build(&toy_curve()).unwrap();
        assert_eq!(table.char_to_point('A'), Some(Point::new(3, 6)));
        assert_eq!(table.char_to_point('Z'), Some(Point::new(23, 393)));
        assert_eq!(table.char_to_point('a'), Some(Point::new(26, 209)));
        assert_eq!(table.char_to_point('z'), Some(Point::new(49, 2)));
        assert_eq!(table.char_to_point('5'), None);
        assert_eq!(table.char_to_point(' '), None);
        assert_eq!(table.char_to_point('é'), None);

        for c in ('A'..='Z').chain('a'..='z') {
            let point = table.char_to_point(c).unwrap();
            assert_eq!(table.point_to_char(&point), c);
        }
    }

    #[test]
    fn test_unknown_point() {
        let table = PointTable::build(&toy_curve()).unwrap();
        assert_eq!(table.point_to_char(&Point::Infinity), UNKNOWN_SYMBOL);
        // on the curve but past the 52nd point
        assert_eq!(table.point_to_char(&Point::new(520, 0)), UNKNOWN_SYMBOL);
        assert_eq!(table.point_to_char(&Point::new(3, 7)), UNKNOWN_SYMBOL);
    }

    struct Fixed(Vec<Point>);

    impl PointSource for Fixed {
        fn collect_points(&self, _curve: &Curve, max_points: usize) -> Vec<Point> {
            self.0.iter().copied().take(max_points).collect()
        }
    }

    #[test]
    fn test_custom_point_source() {
        let curve = toy_curve();
        let mut reversed = ExhaustiveSearch.collect_points(&curve, ALPHABET_SIZE);
        reversed.reverse();

        let table = PointTable::build_with(&curve, &Fixed(reversed)).unwrap();
        assert_eq!(table.char_to_point('A'), Some(Point::new(49, 2)));
        assert_eq!(table.point_to_char(&Point::new(3, 6)), 'z');

        let mut bogus = ExhaustiveSearch.collect_points(&curve, ALPHABET_SIZE);
        bogus[10] = Point::new(3, 7);
        assert_eq!(
            PointTable::build_with(&curve, &Fixed(bogus)),
            Err(Error::PointNotOnCurve { x: 3, y: 7 })
        );
    }

    #[test]
    fn test_duplicate_points_rejected() {
        let curve = toy_curve();
        let mut repeated = ExhaustiveSearch.collect_points(&curve, ALPHABET_SIZE);
        // 'K' would otherwise decode as 'A'
        repeated[10] = repeated[0];
        assert!(matches!(
            PointTable::build_with(&curve, &Fixed(repeated)),
            Err(Error::InvalidCurve(_))
        ));

        let mut with_identity = ExhaustiveSearch.collect_points(&curve, ALPHABET_SIZE);
        with_identity[3] = Point::Infinity;
        assert!(matches!(
            PointTable::build_with(&curve, &Fixed(with_identity)),
            Err(Error::InvalidCurve(_))
        ));
    }
}
