// Cross-crate checks of the public surface

use gf2n_algorithms::{
    add, build_multiplication_table, build_table, checked_multiply, irreducible_polynomial,
    multiply, subtract, FieldConfig, FirstIrreducible, Heuristic, TrialDivision, Unchecked, Word,
};
use gf2n_api::{Error, IrreducibilityChecker, ModulusProvider};
use gf2n_params::field::{MAX_GRADE, MAX_TABLE_GRADE};
use gf2n_params::moduli::{AES_MODULUS, GF16_MODULUS};
use gf2n_tests::IRREDUCIBLE_FIELDS;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_worked_scenarios() {
    // GF(16) by hand: (x^3 + x^2 + 1)(x^2 + x) = x^3 mod x^4 + x + 1
    assert_eq!(multiply(0xD, 0x6, 0x13, 4), 0x8);
    // GF(2)
    assert_eq!(multiply(1, 1, 0x3, 1), 1);
    assert_eq!(add(0x5, 0x3), 0x6);
    assert_eq!(irreducible_polynomial(5), 0x23);

    let table = build_multiplication_table(2).unwrap();
    assert_eq!(table[2][3], multiply(2, 3, irreducible_polynomial(2), 2));
}

#[test]
fn test_grade_limits() {
    assert_eq!(MAX_GRADE, 62);
    assert!(FieldConfig::heuristic(MAX_GRADE).is_ok());
    assert_eq!(
        FieldConfig::heuristic(MAX_GRADE + 1),
        Err(Error::InvalidGrade {
            grade: MAX_GRADE + 1,
            max: MAX_GRADE
        })
    );
    assert!(MAX_TABLE_GRADE >= 13);
}

#[test]
fn test_known_fields_are_irreducible() {
    for (grade, modulus) in IRREDUCIBLE_FIELDS {
        let config = FieldConfig::verified(grade, modulus, &TrialDivision).unwrap();
        assert_eq!(config.grade(), grade);
        assert_eq!(config.modulus(), modulus);
    }
}

#[test]
fn test_heuristic_and_search_agree_where_heuristic_is_irreducible() {
    let search = FirstIrreducible::<TrialDivision>::default();
    for grade in 1..=16 {
        let heuristic = Heuristic.modulus(grade).unwrap();
        let found = search.modulus(grade).unwrap();
        assert!(TrialDivision.is_irreducible(found));
        if TrialDivision.is_irreducible(heuristic) {
            // x^n + x + 1 is the smallest candidate after x^n + 1, which is
            // always divisible by x + 1
            assert_eq!(found, heuristic, "grade {}", grade);
        } else {
            assert!(found > heuristic, "grade {}", grade);
        }
    }
}

#[test]
fn test_config_from_search_provider() {
    let search = FirstIrreducible::new(TrialDivision);
    let config = FieldConfig::with_provider(8, &search).unwrap();
    assert_eq!(config, FieldConfig::aes());
    assert_eq!(config.modulus(), AES_MODULUS);

    let trusting = FirstIrreducible::new(Unchecked);
    let config = FieldConfig::with_provider(4, &trusting).unwrap();
    assert_eq!(config.modulus(), 0x11);
    assert!(!TrialDivision.is_irreducible(config.modulus()));
}

#[test]
fn test_table_from_config() {
    let config = FieldConfig::new(4, GF16_MODULUS).unwrap();
    let from_config = build_table(&config).unwrap();
    let from_grade = build_multiplication_table(4).unwrap();
    assert_eq!(from_config, from_grade);
    assert!(from_config.is_symmetric());
}

#[test]
fn test_table_agrees_with_config_mul() {
    let config = FieldConfig::aes();
    let table = build_table(&config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for _ in 0..1000 {
        let f = config.random_element(&mut rng);
        let g = config.random_element(&mut rng);
        assert_eq!(Ok(table[f as usize][g as usize]), config.mul(f, g));
    }
}

#[test]
fn test_subtraction_undoes_addition() {
    let config = FieldConfig::aes();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for _ in 0..100 {
        let f = config.random_element(&mut rng);
        let g = config.random_element(&mut rng);
        let sum = config.add(f, g).unwrap();
        assert_eq!(config.sub(sum, g), Ok(f));
        assert_eq!(subtract(add(f, g), f), g);
    }
}

#[test]
fn test_checked_multiply_reports_each_precondition() {
    let cases: [(Word, Word, Word, u32); 4] = [
        (1, 1, 0x13, 0),
        (1, 1, 0x13, 5),
        (0x10, 1, 0x13, 4),
        (1, 0x10, 0x13, 4),
    ];
    let errors: Vec<Error> = cases
        .iter()
        .map(|&(f, g, ip, n)| checked_multiply(f, g, ip, n).unwrap_err())
        .collect();
    assert!(matches!(errors[0], Error::InvalidGrade { grade: 0, .. }));
    assert!(matches!(errors[1], Error::InvalidModulus { grade: 5, modulus: 0x13, .. }));
    assert!(matches!(errors[2], Error::ElementOutOfRange { element: 0x10, grade: 4 }));
    assert!(matches!(errors[3], Error::ElementOutOfRange { element: 0x10, grade: 4 }));
}
