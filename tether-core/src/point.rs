//! Immutable integer points.

use std::fmt;

/// An n-dimensional integer vector.
///
/// Points carry no identity of their own; the engine refers to them by their
/// position in the caller's slice.
///
/// # Examples
/// ```
/// use tether_core::Point;
///
/// let point = Point::from([162, 817, 812]);
/// assert_eq!(point.dimensions(), 3);
/// assert_eq!(point.to_string(), "162,817,812");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    coords: Box<[i64]>,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coords: impl Into<Box<[i64]>>) -> Self {
        Self {
            coords: coords.into(),
        }
    }

    /// Returns the coordinates in axis order.
    #[must_use]
    #[rustfmt::skip]
    pub fn coords(&self) -> &[i64] { &self.coords }

    /// Returns the number of axes.
    #[must_use]
    #[rustfmt::skip]
    pub fn dimensions(&self) -> usize { self.coords.len() }
}

impl From<Vec<i64>> for Point {
    fn from(coords: Vec<i64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[i64; N]> for Point {
    fn from(coords: [i64; N]) -> Self {
        Self::new(Vec::from(coords))
    }
}

impl FromIterator<i64> for Point {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl AsRef<[i64]> for Point {
    fn as_ref(&self) -> &[i64] {
        &self.coords
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut axes = self.coords.iter();
        if let Some(first) = axes.next() {
            write!(f, "{first}")?;
        }
        for axis in axes {
            write!(f, ",{axis}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::planar(Point::from([0, 5]), "0,5")]
    #[case::negative(Point::from(vec![-1, 2, -3]), "-1,2,-3")]
    #[case::empty(Point::default(), "")]
    fn display_joins_coordinates(#[case] point: Point, #[case] expected: &str) {
        assert_eq!(point.to_string(), expected);
    }

    #[test]
    fn collects_from_iterator() {
        let point: Point = (1..=3).collect();
        assert_eq!(point.coords(), &[1, 2, 3]);
        assert_eq!(point.dimensions(), 3);
    }
}
