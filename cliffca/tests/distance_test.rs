use cliffca::distance::{finite_gcd, residual_distance, residual_polynomial, support_distance};
use cliffca::properties::{has_orthogonal_stabilizer_periodic, is_invertible, is_symplectic_rule_matrix};
use cliffca::{
    calculate_code_distance, calculate_logical_qubits, AnalysisError, DistanceMethod, LatticeState, PauliSymbol,
    RuleMatrix, StabilizerGenerator,
};
use laurent::periodic::periodic_modulus;
use laurent::LaurentPolynomial;
use proptest::prelude::*;

fn state(text: &str) -> LatticeState {
    text.parse().unwrap()
}

proptest! {
    #[test]
    fn logical_qubits_are_bounded(state in arbitrary_state(1..12)) {
        let n = state.len();
        let k = calculate_logical_qubits(&state, n).unwrap();
        assert!(k <= n);
        let distance = calculate_code_distance(&state, n).unwrap();
        assert_eq!(distance.value() == 0, k == 0);
        assert_eq!(residual_distance(&state, n).unwrap() == 0, k == 0);
    }

    #[test]
    fn residual_divides_modulus(state in arbitrary_state(1..16)) {
        let n = state.len();
        let generator = StabilizerGenerator::from_state(&state);
        let residual = residual_polynomial(&generator, n).unwrap();
        assert_eq!(&residual * &finite_gcd(&generator, n), periodic_modulus(n));
    }

    #[test]
    fn single_logical_qubit_formulas_agree(state in arbitrary_state(2..16)) {
        let n = state.len();
        if calculate_logical_qubits(&state, n).unwrap() == 1 {
            let distance = calculate_code_distance(&state, n).unwrap();
            assert!(distance.agrees());
            assert_eq!(distance.support(), distance.residual());
            assert_eq!(support_distance(&state, n).unwrap(), Some(residual_distance(&state, n).unwrap()));
        }
    }

    #[test]
    fn support_distance_is_an_annihilator_weight(state in arbitrary_state(1..12)) {
        let n = state.len();
        let k = calculate_logical_qubits(&state, n).unwrap();
        let support = support_distance(&state, n).unwrap().unwrap();
        assert_eq!(support == 0, k == 0);
        if k > 0 {
            // the residual annihilates the gcd, so it bounds the minimum
            assert!(support <= residual_distance(&state, n).unwrap());
        }
    }
}

#[test]
fn glider_with_adjacent_pair() {
    let rule = RuleMatrix::glider();
    assert!(is_invertible(&rule));
    assert!(is_symplectic_rule_matrix(&rule));
    let pair = LatticeState::with_symbols(8, PauliSymbol::X, [3, 4]);
    assert!(has_orthogonal_stabilizer_periodic(&pair, 8).unwrap());
    assert_eq!(calculate_logical_qubits(&pair, 8), Ok(1));
}

#[test]
fn pure_generator_has_distance_two() {
    for (text, symbol) in [("XXIIIIII", PauliSymbol::X), ("ZZIIIIII", PauliSymbol::Z)] {
        let distance = calculate_code_distance(&state(text), 8).unwrap();
        assert_eq!(distance.value(), 2, "{symbol}");
        assert_eq!(distance.method(), DistanceMethod::PureGenerator);
        assert_eq!(distance.residual(), Some(8));
        assert_eq!(distance.support(), Some(8));
        assert!(distance.agrees());
    }
}

#[test]
fn single_site_has_no_logical_qubit() {
    let single = LatticeState::with_symbols(6, PauliSymbol::X, [2]);
    assert_eq!(finite_gcd(&StabilizerGenerator::from_state(&single), 6), LaurentPolynomial::from_exponents([0]));
    assert_eq!(calculate_logical_qubits(&single, 6), Ok(0));
    let distance = calculate_code_distance(&single, 6).unwrap();
    assert_eq!(distance.value(), 0);
    assert_eq!(distance.method(), DistanceMethod::NoLogicalQubits);
    assert_eq!(residual_distance(&single, 6), Ok(0));
    assert_eq!(support_distance(&single, 6), Ok(Some(0)));
}

#[test]
fn mixed_pair_uses_residual() {
    let distance = calculate_code_distance(&state("YYIIII"), 6).unwrap();
    assert_eq!(distance.method(), DistanceMethod::Residual);
    assert_eq!(distance.value(), 6);
}

#[test]
fn two_logical_qubits() {
    // 1 + z + z² divides z⁶ + 1, with residual 1 + z + z³ + z⁴
    let triple = state("YYYIII");
    assert_eq!(calculate_logical_qubits(&triple, 6), Ok(2));
    let distance = calculate_code_distance(&triple, 6).unwrap();
    assert_eq!(distance.value(), 4);
    assert_eq!(distance.support(), Some(4));

    let pure = calculate_code_distance(&state("XXXIII"), 6).unwrap();
    assert_eq!(pure.value(), 2);
    assert_eq!(pure.residual(), Some(4));

    assert_eq!(calculate_logical_qubits(&state("XXXII"), 5), Ok(0));
}

#[test]
fn support_distance_skips_the_division() {
    // d₁ = 1 + z, annihilated only by the all-ones word
    let pair = state("YYIIIIII");
    assert_eq!(support_distance(&pair, 8), Ok(Some(8)));
    // d₁ = z⁶ + 1, every word annihilates it
    assert_eq!(support_distance(&LatticeState::identity(6), 6), Ok(Some(1)));
    // d₁ = 1 + z + z², annihilated by multiples of 1 + z + z³ + z⁴
    assert_eq!(support_distance(&state("ZZZIII"), 6), Ok(Some(4)));
}

#[test]
fn cluster_state_has_no_logical_qubit() {
    assert_eq!(calculate_logical_qubits(&state("ZXZIII"), 6), Ok(0));
}

#[test]
fn empty_generator() {
    let identity = LatticeState::identity(6);
    assert_eq!(calculate_logical_qubits(&identity, 6), Ok(6));
    let distance = calculate_code_distance(&identity, 6).unwrap();
    assert_eq!(distance.value(), 1);
    assert!(distance.agrees());
}

#[test]
fn size_mismatch() {
    assert_eq!(
        calculate_logical_qubits(&state("XX"), 3),
        Err(AnalysisError::StateLength { expected: 3, actual: 2 })
    );
    assert_eq!(calculate_code_distance(&state("XX"), 0), Err(AnalysisError::EmptyLattice));
}

fn arbitrary_state(sizes: std::ops::Range<usize>) -> impl Strategy<Value = LatticeState> {
    prop::collection::vec(
        prop::sample::select(vec![PauliSymbol::I, PauliSymbol::X, PauliSymbol::Z, PauliSymbol::Y]),
        sizes,
    )
    .prop_map(LatticeState::new)
}
