// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// A new value for a piece of transform state.
///
/// Implemented for literal values (replace the current value) and for any
/// `FnOnce(T) -> T` (derive the new value from the current one). Closures
/// need an annotated parameter type, e.g. `|pan: Vec2| pan + delta`.
pub trait Update<T> {
    /// Produces the new value given the current one.
    fn apply(self, current: T) -> T;
}

impl<T, F> Update<T> for F
where
    F: FnOnce(T) -> T,
{
    fn apply(self, current: T) -> T {
        self(current)
    }
}

impl Update<f64> for f64 {
    fn apply(self, _current: f64) -> f64 {
        self
    }
}

impl Update<Vec2> for Vec2 {
    fn apply(self, _current: Vec2) -> Vec2 {
        self
    }
}

impl Update<Vec2> for Point {
    fn apply(self, _current: Vec2) -> Vec2 {
        self.to_vec2()
    }
}

impl Update<Vec2> for (f64, f64) {
    fn apply(self, _current: Vec2) -> Vec2 {
        Vec2::new(self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::Update;

    fn run<U: Update<Vec2>>(u: U, current: Vec2) -> Vec2 {
        u.apply(current)
    }

    #[test]
    fn literals_replace() {
        let cur = Vec2::new(1.0, 2.0);
        assert_eq!(run(Vec2::new(5.0, 6.0), cur), Vec2::new(5.0, 6.0));
        assert_eq!(run(Point::new(5.0, 6.0), cur), Vec2::new(5.0, 6.0));
        assert_eq!(run((0.0, 0.0), cur), Vec2::ZERO);
        assert_eq!(3.0_f64.apply(9.0), 3.0);
    }

    #[test]
    fn closures_derive_from_current() {
        let cur = Vec2::new(1.0, 2.0);
        assert_eq!(run(|p: Vec2| p * 2.0, cur), Vec2::new(2.0, 4.0));
        assert_eq!((|z: f64| z / 4.0).apply(2.0), 0.5);
    }
}
