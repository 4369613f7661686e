//! Property-based tests for natural ordering.

use super::natural::{natural_cmp, natural_sort};
use proptest::prelude::*;
use std::cmp::Ordering;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{0,3}[0-9]{0,3}[-/]?[a-z]{0,2}[0-9]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Equal only for identical strings
    #[test]
    fn natural_cmp_equal_iff_identical(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(natural_cmp(&a, &b) == Ordering::Equal, a == b);
    }

    // Antisymmetric
    #[test]
    fn natural_cmp_antisymmetric(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }

    // Transitive across sorted output
    #[test]
    fn natural_sort_is_ordered(mut names in prop::collection::vec(name_strategy(), 0..20)) {
        natural_sort(&mut names);
        for pair in names.windows(2) {
            prop_assert_ne!(natural_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    // Numbers with the same prefix sort numerically
    #[test]
    fn numeric_suffixes_sort_by_value(prefix in "[a-z]{1,4}", x in 0u32..10_000, y in 0u32..10_000) {
        let a = format!("{prefix}{x}");
        let b = format!("{prefix}{y}");
        prop_assert_eq!(natural_cmp(&a, &b), x.cmp(&y));
    }
}
