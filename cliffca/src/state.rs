use crate::{AnalysisError, Result};
use binar::BitVec;
use derive_more::{Display, FromStr, TryFrom};
use laurent::{GF2, LaurentPolynomial};
use smallvec::SmallVec;

/// A single-site Pauli operator, encoded as the bit pair `(x, z)`.
///
/// The discriminant is `x + 2z`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Display, FromStr, TryFrom, PartialEq, Eq, Hash, Default)]
#[try_from(repr)]
#[repr(u8)]
pub enum PauliSymbol {
    #[default]
    I = 0,
    X = 1,
    Z = 2,
    Y = 3,
}

impl PauliSymbol {
    #[must_use]
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => PauliSymbol::I,
            (true, false) => PauliSymbol::X,
            (false, true) => PauliSymbol::Z,
            (true, true) => PauliSymbol::Y,
        }
    }

    #[must_use]
    pub fn bits(self) -> (bool, bool) {
        (self.x_bit(), self.z_bit())
    }

    #[must_use]
    pub fn x_bit(self) -> bool {
        matches!(self, PauliSymbol::X | PauliSymbol::Y)
    }

    #[must_use]
    pub fn z_bit(self) -> bool {
        matches!(self, PauliSymbol::Z | PauliSymbol::Y)
    }

    #[must_use]
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'I' | '_' | '.' => Some(PauliSymbol::I),
            'X' => Some(PauliSymbol::X),
            'Z' => Some(PauliSymbol::Z),
            'Y' => Some(PauliSymbol::Y),
            _ => None,
        }
    }
}

/// An assignment of a Pauli symbol to each of the sites `0..N` of a periodic
/// chain.
///
/// ```
/// use cliffca::{LatticeState, PauliSymbol};
///
/// let state: LatticeState = "IXZY".parse().unwrap();
/// assert_eq!(state.len(), 4);
/// assert_eq!(state[3], PauliSymbol::Y);
/// assert_eq!(state.x_bits().to_string(), "0101");
/// assert_eq!(state.z_bits().to_string(), "0011");
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct LatticeState {
    sites: SmallVec<[PauliSymbol; 32]>,
}

impl LatticeState {
    pub fn new(sites: impl IntoIterator<Item = PauliSymbol>) -> Self {
        Self {
            sites: sites.into_iter().collect(),
        }
    }

    pub fn identity(size: usize) -> Self {
        Self::new(std::iter::repeat(PauliSymbol::I).take(size))
    }

    /// `symbol` at each listed site, identity elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if a site is out of bounds.
    pub fn with_symbols(size: usize, symbol: PauliSymbol, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::identity(size);
        for position in positions {
            result.sites[position] = symbol;
        }
        result
    }

    /// Builds a state from separate X and Z supports.
    ///
    /// # Panics
    ///
    /// Panics if the supports have different lengths.
    pub fn from_bits(x_bits: &BitVec, z_bits: &BitVec) -> Self {
        assert_eq!(x_bits.len(), z_bits.len(), "X and Z supports must have equal length");
        Self::new(x_bits.iter().zip(z_bits.iter()).map(|(x, z)| PauliSymbol::from_bits(x, z)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[must_use]
    pub fn sites(&self) -> &[PauliSymbol] {
        &self.sites
    }

    /// Number of non-identity sites.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.sites.iter().filter(|site| **site != PauliSymbol::I).count()
    }

    /// Checks the state against a lattice of `size` sites.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyLattice`] when `size` is zero and
    /// [`AnalysisError::StateLength`] when the state has a different length.
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(AnalysisError::EmptyLattice);
        }
        if self.len() != size {
            return Err(AnalysisError::StateLength {
                expected: size,
                actual: self.len(),
            });
        }
        Ok(())
    }

    pub fn x_bits(&self) -> BitVec {
        self.sites.iter().map(|site| site.x_bit()).collect()
    }

    pub fn z_bits(&self) -> BitVec {
        self.sites.iter().map(|site| site.z_bit()).collect()
    }
}

impl std::ops::Index<usize> for LatticeState {
    type Output = PauliSymbol;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sites[index]
    }
}

impl FromIterator<PauliSymbol> for LatticeState {
    fn from_iter<Symbols: IntoIterator<Item = PauliSymbol>>(iter: Symbols) -> Self {
        Self::new(iter)
    }
}

/// Parses strings such as `"IXXZ"`; `_` and `.` stand for the identity and
/// whitespace is ignored.
impl std::str::FromStr for LatticeState {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .filter(|(_, symbol)| !symbol.is_whitespace())
            .map(|(position, symbol)| {
                PauliSymbol::from_char(symbol).ok_or(AnalysisError::UnknownPauli { symbol, position })
            })
            .collect()
    }
}

impl std::fmt::Display for LatticeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for site in &self.sites {
            write!(f, "{site}")?;
        }
        Ok(())
    }
}

/// The generator pair `(X(z), Z(z))` of a lattice state: `X` has a term `zⁱ`
/// for every site `i` with an X component, `Z` likewise for Z components.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StabilizerGenerator {
    pub x: LaurentPolynomial,
    pub z: LaurentPolynomial,
}

impl StabilizerGenerator {
    pub fn new(x: LaurentPolynomial, z: LaurentPolynomial) -> Self {
        Self {
            x: x.with_modulus(GF2),
            z: z.with_modulus(GF2),
        }
    }

    pub fn from_state(state: &LatticeState) -> Self {
        let exponents_where = |predicate: fn(PauliSymbol) -> bool| {
            let positions = state.sites().iter().enumerate().filter(|(_, site)| predicate(**site));
            LaurentPolynomial::from_exponents(positions.map(|(position, _)| site_exponent(position)))
        };
        Self {
            x: exponents_where(PauliSymbol::x_bit),
            z: exponents_where(PauliSymbol::z_bit),
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.z.is_zero()
    }

    /// True when exactly one of the two components is present.
    #[must_use]
    pub fn is_pure(&self) -> bool {
        self.x.is_zero() != self.z.is_zero()
    }

    /// `S(z) = X(z)Z(z⁻¹) + Z(z)X(z⁻¹)`, the symplectic product of the
    /// generator with all of its translates.
    pub fn symplectic_self_product(&self) -> LaurentPolynomial {
        &(&self.x * &self.z.substitute_inverse()) + &(&self.z * &self.x.substitute_inverse())
    }

    /// Translation by `shift` sites.
    pub fn shifted(&self, shift: i64) -> Self {
        Self {
            x: self.x.shifted(shift),
            z: self.z.shifted(shift),
        }
    }

    /// The `n` cyclic translates `zⁱ·(X, Z)` for `i` in `0..n`.
    pub fn translates(&self, n: usize) -> Vec<StabilizerGenerator> {
        (0..n).map(|shift| self.shifted(site_exponent(shift))).collect()
    }

    /// The generator as a Pauli string on a periodic chain of `n` sites.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn to_state(&self, n: usize) -> LatticeState {
        let x_bits = laurent::periodic::laurent_to_polynomial(&self.x, n);
        let z_bits = laurent::periodic::laurent_to_polynomial(&self.z, n);
        LatticeState::from_bits(&x_bits, &z_bits)
    }
}

impl From<&LatticeState> for StabilizerGenerator {
    fn from(state: &LatticeState) -> Self {
        Self::from_state(state)
    }
}

pub(crate) fn site_exponent(site: usize) -> i64 {
    i64::try_from(site).unwrap_or(i64::MAX)
}
