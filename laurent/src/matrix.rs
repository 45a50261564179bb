use crate::LaurentPolynomial;
use binar::BitMatrix;

/// A 2×2 matrix over the Laurent polynomial ring.
///
/// All four entries share one coefficient modulus.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaurentMatrix {
    entries: [[LaurentPolynomial; 2]; 2],
}

impl LaurentMatrix {
    /// # Panics
    ///
    /// Panics if the entries have different moduli.
    pub fn new(entries: [[LaurentPolynomial; 2]; 2]) -> Self {
        let modulus = entries[0][0].modulus();
        assert!(
            entries.iter().flatten().all(|entry| entry.modulus() == modulus),
            "matrix entries must share a coefficient modulus"
        );
        Self { entries }
    }

    pub fn zero(modulus: u32) -> Self {
        let zero = LaurentPolynomial::zero(modulus);
        Self::new([[zero.clone(), zero.clone()], [zero.clone(), zero]])
    }

    pub fn identity(modulus: u32) -> Self {
        let zero = LaurentPolynomial::zero(modulus);
        let one = LaurentPolynomial::one(modulus);
        Self::new([[one.clone(), zero.clone()], [zero, one]])
    }

    /// Ω = [[0, 1], [−1, 0]], with −1 reduced modulo `modulus`.
    pub fn symplectic_form(modulus: u32) -> Self {
        let zero = LaurentPolynomial::zero(modulus);
        Self::new([
            [zero.clone(), LaurentPolynomial::one(modulus)],
            [LaurentPolynomial::monomial(0, -1, modulus), zero],
        ])
    }

    /// `left·x⁻¹ + center + right·x` for three 2×2 binary blocks.
    ///
    /// # Panics
    ///
    /// Panics if a block is not 2×2.
    pub fn from_blocks(left: &BitMatrix, center: &BitMatrix, right: &BitMatrix, modulus: u32) -> Self {
        for block in [left, center, right] {
            assert_eq!(block.shape(), (2, 2), "neighbor blocks must be 2×2");
        }
        let entry = |row: usize, column: usize| {
            let terms = [(-1, left), (0, center), (1, right)]
                .into_iter()
                .filter(|(_, block)| block.get((row, column)))
                .map(|(exponent, _)| (exponent, 1));
            LaurentPolynomial::from_terms(terms, modulus)
        };
        Self::new([[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]])
    }

    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.entries[0][0].modulus()
    }

    pub fn entry(&self, row: usize, column: usize) -> &LaurentPolynomial {
        &self.entries[row][column]
    }

    #[must_use]
    pub fn entries(&self) -> &[[LaurentPolynomial; 2]; 2] {
        &self.entries
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let entry = |row: usize, column: usize| {
            &(&self.entries[row][0] * &other.entries[0][column]) + &(&self.entries[row][1] * &other.entries[1][column])
        };
        Self::new([[entry(0, 0), entry(0, 1)], [entry(1, 0), entry(1, 1)]])
    }

    pub fn transposed(&self) -> Self {
        let [[a, b], [c, d]] = self.entries.clone();
        Self::new([[a, c], [b, d]])
    }

    /// Entrywise `x → x⁻¹`.
    pub fn substitute_inverse(&self) -> Self {
        Self::new(self.entries.clone().map(|row| row.map(|entry| entry.substitute_inverse())))
    }

    /// `ad − bc`.
    pub fn determinant(&self) -> LaurentPolynomial {
        let [[a, b], [c, d]] = &self.entries;
        &(a * d) - &(b * c)
    }

    /// `M(x⁻¹)ᵗ Ω M(x)`; equals Ω exactly when the matrix preserves the
    /// symplectic form.
    pub fn symplectic_image(&self) -> Self {
        let form = Self::symplectic_form(self.modulus());
        self.substitute_inverse().transposed().multiply(&form).multiply(self)
    }

    #[must_use]
    pub fn is_symplectic(&self) -> bool {
        self.symplectic_image() == Self::symplectic_form(self.modulus())
    }
}

impl std::ops::Mul for &LaurentMatrix {
    type Output = LaurentMatrix;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(other)
    }
}

impl std::fmt::Display for LaurentMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [[a, b], [c, d]] = &self.entries;
        write!(f, "[[{a}, {b}], [{c}, {d}]]")
    }
}
