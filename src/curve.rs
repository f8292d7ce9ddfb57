//! DISCLAIMER: This module is a **toy** implementation of elliptic curve arithmetic.
//! It is *EXCLUSIVELY* for demonstration and educational purposes. The field is tiny,
//! nothing runs in constant time, and it is trivially breakable. Do NOT use it for
//! anything security-sensitive.
//!
//! # Overview
//! Group operations on a short-Weierstrass curve `y^2 = x^3 + a*x + b (mod p)`:
//! 1. The curve parameters `(a, b, p)`, validated once in [`Curve::new`].
//! 2. A [`Point`] type holding either an affine coordinate pair or `Infinity`, the identity.
//! 3. Negation, doubling, addition and double-and-add scalar multiplication.
//!
//! Every operation that needs a modular inverse returns a [`Result`]: a missing inverse is
//! reported as [`Error::NoInverse`] and never papered over with a default point.

use std::fmt;

use log::trace;
use num_integer::Roots;
use num_prime::nt_funcs::is_prime64;

use crate::error::{Error, Result};
use crate::field::{mod_add, mod_inverse, mod_mul, mod_sub, reduce};

/// A point on the curve, or the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity (identity).
    Infinity,
    /// An affine coordinate pair (x, y).
    Coord { x: i64, y: i64 },
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point::Coord { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The affine coordinates, or `None` for the identity.
    pub fn coords(&self) -> Option<(i64, i64)> {
        match *self {
            Point::Infinity => None,
            Point::Coord { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "Infinity"),
            Point::Coord { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Coefficients and modulus of `y^2 = x^3 + a*x + b (mod p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveParams {
    /// Coefficient a in the curve equation.
    pub a: i64,
    /// Coefficient b in the curve equation.
    pub b: i64,
    /// The prime modulus p.
    pub p: i64,
}

/// A validated curve. All group operations hang off this struct, so several curves
/// can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    a: i64,
    b: i64,
    p: i64,
}

impl Curve {
    /// Validate `params` and build the curve.
    ///
    /// # Errors
    /// [`Error::InvalidCurve`] if `p` is not an odd prime or the curve is singular
    /// (`4a^3 + 27b^2 = 0 mod p`).
    pub fn new(params: CurveParams) -> Result<Self> {
        let CurveParams { a, b, p } = params;
        if p < 3 || !is_prime64(p as u64) {
            return Err(Error::InvalidCurve(format!(
                "modulus {} is not an odd prime",
                p
            )));
        }

        let a = reduce(a, p);
        let b = reduce(b, p);
        let a_cubed = mod_mul(mod_mul(a, a, p), a, p);
        let b_squared = mod_mul(b, b, p);
        let discriminant = mod_add(mod_mul(4, a_cubed, p), mod_mul(27, b_squared, p), p);
        if discriminant == 0 {
            return Err(Error::InvalidCurve(format!(
                "y^2 = x^3 + {}x + {} is singular modulo {}",
                a, b, p
            )));
        }

        Ok(Curve { a, b, p })
    }

    pub fn params(&self) -> CurveParams {
        CurveParams {
            a: self.a,
            b: self.b,
            p: self.p,
        }
    }

    pub fn modulus(&self) -> i64 {
        self.p
    }

    /// Check `y^2 = x^3 + a*x + b (mod p)`.
    pub fn is_valid_point(&self, x: i64, y: i64) -> bool {
        let p = self.p;
        let lhs = mod_mul(y, y, p);
        let x_cubed = mod_mul(mod_mul(x, x, p), x, p);
        let rhs = mod_add(mod_add(x_cubed, mod_mul(self.a, x, p), p), self.b, p);
        lhs == rhs
    }

    /// `true` for the identity and for reduced coordinate pairs on the curve.
    pub fn contains(&self, point: &Point) -> bool {
        match *point {
            Point::Infinity => true,
            Point::Coord { x, y } => {
                (0..self.p).contains(&x) && (0..self.p).contains(&y) && self.is_valid_point(x, y)
            }
        }
    }

    /// Reflect a point across the x-axis: (x, p - y mod p).
    pub fn negate(&self, point: &Point) -> Point {
        match *point {
            Point::Infinity => Point::Infinity,
            Point::Coord { x, y } => Point::Coord {
                x,
                y: mod_sub(self.p, y, self.p),
            },
        }
    }

    /// Point doubling: slope = (3x^2 + a) / (2y).
    ///
    /// A point with `y = 0` has a vertical tangent, so its double is the identity.
    pub fn double(&self, point: &Point) -> Result<Point> {
        match *point {
            Point::Infinity => Ok(Point::Infinity),
            Point::Coord { x, y } => {
                let p = self.p;
                if reduce(y, p) == 0 {
                    return Ok(Point::Infinity);
                }

                let x_squared = mod_mul(x, x, p);
                let numerator = mod_add(mod_mul(3, x_squared, p), self.a, p);
                let denom_inv = mod_inverse(mod_mul(2, y, p), p)?;
                let slope = mod_mul(numerator, denom_inv, p);
                trace!("double ({}, {}): slope = {}", x, y, slope);

                // x3 = slope^2 - 2x
                let x3 = mod_sub(mod_mul(slope, slope, p), mod_mul(2, x, p), p);
                // y3 = slope*(x - x3) - y
                let y3 = mod_sub(mod_mul(slope, mod_sub(x, x3, p), p), y, p);

                Ok(Point::Coord { x: x3, y: y3 })
            }
        }
    }

    /// Point addition.
    ///
    /// The identity is matched first, then:
    /// - equal x and equal y: doubling
    /// - equal x and different y: the points are inverses, so the sum is the identity
    /// - otherwise the chord formula, slope = (y2 - y1) / (x2 - x1)
    pub fn add(&self, p1: &Point, p2: &Point) -> Result<Point> {
        match (*p1, *p2) {
            (Point::Infinity, _) => Ok(*p2),
            (_, Point::Infinity) => Ok(*p1),
            (Point::Coord { x: x1, y: y1 }, Point::Coord { x: x2, y: y2 }) => {
                let p = self.p;
                if reduce(x1, p) == reduce(x2, p) {
                    if reduce(y1, p) == reduce(y2, p) {
                        return self.double(p1);
                    }
                    return Ok(Point::Infinity);
                }

                let dx = mod_sub(x2, x1, p);
                let dy = mod_sub(y2, y1, p);
                let slope = mod_mul(dy, mod_inverse(dx, p)?, p);
                trace!("add ({}, {}) + ({}, {}): slope = {}", x1, y1, x2, y2, slope);

                // x3 = slope^2 - x1 - x2
                let x3 = mod_sub(mod_sub(mod_mul(slope, slope, p), x1, p), x2, p);
                // y3 = slope*(x1 - x3) - y1
                let y3 = mod_sub(mod_mul(slope, mod_sub(x1, x3, p), p), y1, p);

                Ok(Point::Coord { x: x3, y: y3 })
            }
        }
    }

    /// Scalar multiplication `k*P` by double-and-add, scanning `k` from its least
    /// significant bit.
    ///
    /// A negative `k` is replaced by `|k|` and the result is NOT negated, so
    /// `scalar_multiply(P, -k) == scalar_multiply(P, k)`. Use
    /// [`Curve::scalar_multiply_signed`] for proper group semantics.
    pub fn scalar_multiply(&self, point: &Point, k: i64) -> Result<Point> {
        let mut k = k.unsigned_abs();
        let mut result = Point::Infinity;
        let mut addend = *point;

        while k > 0 {
            if k & 1 == 1 {
                // first hit just takes the addend
                result = if result.is_infinity() {
                    addend
                } else {
                    self.add(&result, &addend)?
                };
            }
            k >>= 1;
            if k > 0 {
                addend = self.double(&addend)?;
            }
        }
        Ok(result)
    }

    /// Scalar multiplication where `(-k)*P = -(k*P)`.
    pub fn scalar_multiply_signed(&self, point: &Point, k: i64) -> Result<Point> {
        let product = self.scalar_multiply(point, k)?;
        if k < 0 {
            Ok(self.negate(&product))
        } else {
            Ok(product)
        }
    }

    /// The order of `point`: the smallest `n >= 1` with `n*P = Infinity`.
    ///
    /// Found by repeated addition, so only practical for small moduli.
    pub fn point_order(&self, point: &Point) -> Result<u64> {
        if let Point::Coord { x, y } = *point {
            if !self.contains(point) {
                return Err(Error::PointNotOnCurve { x, y });
            }
        }

        // Hasse: #E <= p + 1 + 2*sqrt(p)
        let p = self.p as u64;
        let bound = p + 2 + 2 * (p.sqrt() + 1);

        let mut order = 1;
        let mut acc = *point;
        while !acc.is_infinity() {
            acc = self.add(&acc, point)?;
            order += 1;
            if order > bound {
                return Err(Error::InvalidCurve(format!(
                    "order of {} exceeds the Hasse bound {}",
                    point, bound
                )));
            }
        }
        Ok(order)
    }
}
