//! Property-based tests for GF(2^n) arithmetic

use gf2n_algorithms::{
    add, build_multiplication_table, checked_multiply, multiply, subtract, FieldConfig, Word,
};
use gf2n_tests::{field_with_elements, heuristic_field, irreducible_field};
use proptest::prelude::*;

proptest! {
    #[test]
    fn add_is_self_inverse(f in any::<Word>(), g in any::<Word>()) {
        prop_assert_eq!(add(f, f), 0);
        prop_assert_eq!(add(f, 0), f);
        prop_assert_eq!(add(f, g), add(g, f));
        prop_assert_eq!(subtract(f, g), add(f, g));
    }

    #[test]
    fn add_is_associative(f in any::<Word>(), g in any::<Word>(), h in any::<Word>()) {
        prop_assert_eq!(add(add(f, g), h), add(f, add(g, h)));
    }

    #[test]
    fn multiply_identity_and_absorption((config, e) in field_with_elements(heuristic_field(), 1)) {
        let (ip, n) = (config.modulus(), config.grade());
        prop_assert_eq!(multiply(e[0], 1, ip, n), e[0]);
        prop_assert_eq!(multiply(e[0], 0, ip, n), 0);
    }

    #[test]
    fn multiply_commutes((config, e) in field_with_elements(heuristic_field(), 2)) {
        let (ip, n) = (config.modulus(), config.grade());
        prop_assert_eq!(multiply(e[0], e[1], ip, n), multiply(e[1], e[0], ip, n));
    }

    #[test]
    fn multiply_distributes((config, e) in field_with_elements(heuristic_field(), 3)) {
        let (ip, n) = (config.modulus(), config.grade());
        let (f, g, h) = (e[0], e[1], e[2]);
        prop_assert_eq!(
            multiply(f, add(g, h), ip, n),
            add(multiply(f, g, ip, n), multiply(f, h, ip, n))
        );
    }

    #[test]
    fn multiply_is_associative((config, e) in field_with_elements(heuristic_field(), 3)) {
        let (ip, n) = (config.modulus(), config.grade());
        let (f, g, h) = (e[0], e[1], e[2]);
        prop_assert_eq!(
            multiply(multiply(f, g, ip, n), h, ip, n),
            multiply(f, multiply(g, h, ip, n), ip, n)
        );
    }

    #[test]
    fn multiply_stays_below_order((config, e) in field_with_elements(heuristic_field(), 2)) {
        let product = multiply(e[0], e[1], config.modulus(), config.grade());
        prop_assert!(product < config.order());
        prop_assert!(config.contains(product));
    }

    #[test]
    fn checked_multiply_agrees_with_raw((config, e) in field_with_elements(heuristic_field(), 2)) {
        let (ip, n) = (config.modulus(), config.grade());
        prop_assert_eq!(checked_multiply(e[0], e[1], ip, n), Ok(multiply(e[0], e[1], ip, n)));
        prop_assert_eq!(config.mul(e[0], e[1]), Ok(multiply(e[0], e[1], ip, n)));
    }

    #[test]
    fn no_zero_divisors_in_irreducible_fields((config, e) in field_with_elements(irreducible_field(), 2)) {
        prop_assume!(e[0] != 0 && e[1] != 0);
        prop_assert_ne!(config.mul(e[0], e[1]), Ok(0));
    }

    #[test]
    fn fermat_little_theorem((config, e) in field_with_elements(irreducible_field(), 1)) {
        // a^(2^n) = a for every element of GF(2^n)
        prop_assert_eq!(config.pow(e[0], config.order()), Ok(e[0]));
    }

    #[test]
    fn out_of_field_operands_are_rejected(
        config in heuristic_field(),
        high in any::<Word>()
    ) {
        let outside = high | config.order();
        prop_assert!(config.mul(outside, 1).is_err());
        prop_assert!(checked_multiply(1, outside, config.modulus(), config.grade()).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn table_matches_standalone_multiply(grade in 1u32..=6, r in any::<usize>(), c in any::<usize>()) {
        let table = build_multiplication_table(grade).unwrap();
        let config = FieldConfig::heuristic(grade).unwrap();
        let (r, c) = (r % table.size(), c % table.size());
        prop_assert_eq!(table[r][c], multiply(r as Word, c as Word, config.modulus(), grade));
        prop_assert_eq!(table[r][c], table[c][r]);
    }
}
