use tether_core::Point;
use tether_test_support::fixtures::JUNCTION_BOXES;

/// Builds points from fixed-arity rows.
#[must_use]
pub fn points_from<const D: usize>(rows: &[[i64; D]]) -> Vec<Point> {
    rows.iter().copied().map(Point::from).collect()
}

/// The twenty-box fixture as engine points.
#[must_use]
pub fn junction_boxes() -> Vec<Point> {
    points_from(&JUNCTION_BOXES)
}
