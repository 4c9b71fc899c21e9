//! Shared test utilities for `tether-core`.

use proptest::test_runner::Config as ProptestConfig;
use tether_test_support::property::ProptestRunProfile;

use crate::Point;

/// Builds a standard proptest configuration from the shared run profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `TETHER_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Converts raw coordinate rows into [`Point`]s.
#[must_use]
pub(crate) fn points(rows: &[&[i64]]) -> Vec<Point> {
    rows.iter().map(|row| Point::new(row.to_vec())).collect()
}
