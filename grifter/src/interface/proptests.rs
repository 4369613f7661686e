//! Property-based tests for interface maps and padding.

use super::map::int_to_port_map;
use super::padding::pad_interfaces;
use crate::guest::Interface;
use proptest::prelude::*;

fn interfaces_strategy() -> impl Strategy<Value = Vec<Interface>> {
    prop::collection::vec(
        (0u32..40, "[a-z]{1,4}[0-9]{0,2}", 0u32..40)
            .prop_map(|(local, remote, port)| Interface::new(local, remote, port)),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // The map has exactly `count` entries, all prefixed and contiguous
    #[test]
    fn port_map_is_contiguous(prefix in "[a-z]{1,6}", offset in 0u32..100, count in 0u32..64) {
        let map = int_to_port_map(&prefix, offset, count);
        prop_assert_eq!(map.len(), count as usize);
        for (i, (index, name)) in map.iter().enumerate() {
            prop_assert_eq!(*index, offset + i as u32);
            prop_assert!(name.starts_with(prefix.as_str()));
            prop_assert!(name.ends_with(&index.to_string()));
        }
    }

    // Padding always yields `total` interfaces
    #[test]
    fn padding_yields_total(offset in 0u32..4, total in 0u32..20, declared in interfaces_strategy()) {
        let padded = pad_interfaces(offset, total, declared);
        prop_assert_eq!(padded.len(), total as usize);
    }

    // When padding happens, slots are ordered by index and keep declared links
    #[test]
    fn padding_preserves_declared_links(offset in 0u32..4, total in 0u32..20, declared in interfaces_strategy()) {
        prop_assume!(declared.len() != total as usize);
        let padded = pad_interfaces(offset, total, declared.clone());

        for (i, iface) in padded.iter().enumerate() {
            let index = offset + i as u32;
            prop_assert_eq!(iface.local_port, index);
            match declared.iter().find(|d| d.local_port == index) {
                Some(first) => prop_assert_eq!(iface, first),
                None => prop_assert!(iface.is_blackhole()),
            }
        }
    }
}
