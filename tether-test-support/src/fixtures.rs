//! Deterministic coordinate sets with hand-checked answers.
//!
//! Rows are raw `i64` triples so every crate can build its own point type
//! from them without this crate depending on the engine.

/// Twenty 3-D junction boxes with a known connection history.
///
/// - The ten shortest edges leave eleven components sized
///   `[5, 4, 2, 2, 1, 1, 1, 1, 1, 1, 1]`; the three largest multiply to 40.
/// - The 29th sorted edge, between rows 10 and 12, connects everything; the
///   product of their x coordinates is 25272.
pub const JUNCTION_BOXES: [[i64; 3]; 20] = [
    [162, 817, 812],
    [57, 618, 57],
    [906, 360, 560],
    [592, 479, 940],
    [352, 342, 300],
    [466, 668, 158],
    [542, 29, 236],
    [431, 825, 988],
    [739, 650, 466],
    [52, 470, 668],
    [216, 146, 977],
    [819, 987, 18],
    [117, 168, 530],
    [805, 96, 715],
    [346, 949, 466],
    [970, 615, 88],
    [941, 993, 340],
    [862, 61, 35],
    [984, 92, 344],
    [425, 690, 689],
];

/// Component sizes after the ten shortest [`JUNCTION_BOXES`] edges.
pub const JUNCTION_BOXES_SIZES_AFTER_TEN: [usize; 11] = [5, 4, 2, 2, 1, 1, 1, 1, 1, 1, 1];

/// Row indices joined by the edge that connects every [`JUNCTION_BOXES`] row.
pub const JUNCTION_BOXES_CONNECTING_ROWS: (usize, usize) = (10, 12);

/// Squared distance of the connecting [`JUNCTION_BOXES`] edge.
pub const JUNCTION_BOXES_CONNECTING_DISTANCE: u128 = 210_094;

/// One-based position of the connecting edge in sorted order.
pub const JUNCTION_BOXES_EDGES_EXAMINED: usize = 29;

/// Renders rows in the comma-separated, one-point-per-line input format.
///
/// # Examples
/// ```
/// use tether_test_support::fixtures::render_rows;
///
/// assert_eq!(render_rows(&[[1, 2], [-3, 4]]), "1,2\n-3,4\n");
/// ```
#[must_use]
pub fn render_rows<const D: usize>(rows: &[[i64; D]]) -> String {
    rows.iter()
        .map(|row| {
            let line: Vec<String> = row.iter().map(i64::to_string).collect();
            line.join(",") + "\n"
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_account_for_every_row() {
        assert_eq!(
            JUNCTION_BOXES_SIZES_AFTER_TEN.iter().sum::<usize>(),
            JUNCTION_BOXES.len()
        );
    }

    #[test]
    fn rendered_rows_round_trip_line_count() {
        let rendered = render_rows(&JUNCTION_BOXES);
        assert_eq!(rendered.lines().count(), JUNCTION_BOXES.len());
        assert_eq!(rendered.lines().next(), Some("162,817,812"));
    }
}
