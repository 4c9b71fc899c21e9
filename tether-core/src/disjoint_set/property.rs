//! Property-based tests for the disjoint-set structure.
//!
//! Each property runs an arbitrary union sequence over a small universe and
//! checks the invariants the connectivity queries lean on: sizes always sum
//! to the universe, `find` is idempotent, the component count falls by one on
//! every successful union, and the final partition ignores union order.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::test_utils::suite_proptest_config;

use super::DisjointSet;

const MAX_ELEMENTS: usize = 48;
const MAX_UNIONS: usize = 96;

#[derive(Clone, Debug)]
struct UnionFixture {
    len: usize,
    unions: Vec<(usize, usize)>,
}

fn union_fixture_strategy() -> impl Strategy<Value = UnionFixture> {
    (1..=MAX_ELEMENTS).prop_flat_map(|len| {
        prop::collection::vec((0..len, 0..len), 0..=MAX_UNIONS)
            .prop_map(move |unions| UnionFixture { len, unions })
    })
}

fn apply(len: usize, unions: impl IntoIterator<Item = (usize, usize)>) -> DisjointSet {
    let mut set = DisjointSet::new(len);
    for (left, right) in unions {
        let _merged = set.union(left, right);
    }
    set
}

/// Labels every element with the smallest index reachable through the union
/// edges, by relaxing until nothing changes.
fn oracle_partition(len: usize, unions: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut label: Vec<usize> = (0..len).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for &(left, right) in unions {
            let low = label[left].min(label[right]);
            if label[left] != low || label[right] != low {
                label[left] = low;
                label[right] = low;
                changed = true;
            }
        }
    }

    let mut groups: Vec<Vec<usize>> = Vec::new();
    for root in 0..len {
        let members: Vec<usize> = (0..len).filter(|&index| label[index] == root).collect();
        if !members.is_empty() {
            groups.push(members);
        }
    }
    groups
}

fn run_size_conservation_property(fixture: &UnionFixture) -> TestCaseResult {
    let mut set = DisjointSet::new(fixture.len);
    for &(left, right) in &fixture.unions {
        let before = set.component_count();
        let merged = set
            .union(left, right)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let expected = if merged { before - 1 } else { before };
        prop_assert_eq!(set.component_count(), expected);
        prop_assert_eq!(set.roots().count(), set.component_count());
        prop_assert_eq!(set.all_component_sizes().iter().sum::<usize>(), fixture.len);
    }
    Ok(())
}

fn run_idempotent_find_property(fixture: &UnionFixture) -> TestCaseResult {
    let mut set = apply(fixture.len, fixture.unions.iter().copied());
    let count = set.component_count();
    for index in 0..fixture.len {
        let first = set
            .find(index)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let second = set
            .find(index)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(first, second);
        prop_assert!(set.is_root(first).unwrap_or(false));
        prop_assert_eq!(set.component_count(), count);
    }
    Ok(())
}

fn run_order_independence_property(fixture: &UnionFixture) -> TestCaseResult {
    let expected = oracle_partition(fixture.len, &fixture.unions);

    let mut forward = apply(fixture.len, fixture.unions.iter().copied());
    let mut reversed = apply(fixture.len, fixture.unions.iter().rev().copied());
    let mut swapped = apply(
        fixture.len,
        fixture.unions.iter().map(|&(left, right)| (right, left)),
    );

    prop_assert_eq!(forward.partition(), expected.clone());
    prop_assert_eq!(reversed.partition(), expected.clone());
    prop_assert_eq!(swapped.partition(), expected);

    let mut forward_sizes = forward.all_component_sizes();
    let mut reversed_sizes = reversed.all_component_sizes();
    forward_sizes.sort_unstable();
    reversed_sizes.sort_unstable();
    prop_assert_eq!(forward_sizes, reversed_sizes);
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn disjoint_set_conserves_size(fixture in union_fixture_strategy()) {
        run_size_conservation_property(&fixture)?;
    }

    #[test]
    fn disjoint_set_find_is_idempotent(fixture in union_fixture_strategy()) {
        run_idempotent_find_property(&fixture)?;
    }

    #[test]
    fn disjoint_set_partition_ignores_union_order(fixture in union_fixture_strategy()) {
        run_order_independence_property(&fixture)?;
    }
}

#[rstest::rstest]
#[case::star(6, vec![(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])]
#[case::cycle(4, vec![(0, 1), (1, 2), (2, 3), (3, 0)])]
#[case::self_loops(3, vec![(1, 1), (2, 2)])]
fn targeted_fixtures_satisfy_properties(#[case] len: usize, #[case] unions: Vec<(usize, usize)>) {
    let fixture = UnionFixture { len, unions };
    run_size_conservation_property(&fixture).expect("sizes must be conserved");
    run_idempotent_find_property(&fixture).expect("find must be idempotent");
    run_order_independence_property(&fixture).expect("partition must ignore order");
}
