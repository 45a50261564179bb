use crate::LaurentError;
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

/// Coefficient modulus of the binary field GF(2).
pub const GF2: u32 = 2;

/// A Laurent polynomial `Σ cₑ xᵉ` with signed exponents.
///
/// Coefficients live in ℤ when `modulus == 0` and in ℤ/mℤ otherwise, stored as
/// canonical residues in `[0, m)`. Terms with a zero coefficient are never
/// stored, so structural equality is polynomial equality and
/// [`is_zero`](LaurentPolynomial::is_zero) is an emptiness test.
///
/// Terms are kept in a `BTreeMap`, so iteration is ordered by exponent.
///
/// # Examples
///
/// ```
/// use laurent::{LaurentPolynomial, GF2};
///
/// // (x⁻¹ + 1)(1 + x) = x⁻¹ + x over GF(2)
/// let left = LaurentPolynomial::from_exponents([-1, 0]);
/// let right = LaurentPolynomial::from_exponents([0, 1]);
/// let product = &left * &right;
/// assert_eq!(product, LaurentPolynomial::from_exponents([-1, 1]));
/// assert_eq!(product.to_string(), "x^-1 + x");
///
/// assert!(LaurentPolynomial::monomial(-3, 1, GF2).is_monomial());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LaurentPolynomial {
    terms: BTreeMap<i64, i64>,
    modulus: u32,
}

impl LaurentPolynomial {
    pub fn zero(modulus: u32) -> Self {
        Self {
            terms: BTreeMap::new(),
            modulus,
        }
    }

    pub fn one(modulus: u32) -> Self {
        Self::monomial(0, 1, modulus)
    }

    /// `coefficient · x^exponent`; zero when the coefficient reduces to zero.
    pub fn monomial(exponent: i64, coefficient: i64, modulus: u32) -> Self {
        Self::from_terms([(exponent, coefficient)], modulus)
    }

    /// Sums the given terms; repeated exponents accumulate.
    pub fn from_terms(terms: impl IntoIterator<Item = (i64, i64)>, modulus: u32) -> Self {
        let mut result = Self::zero(modulus);
        for (exponent, coefficient) in terms {
            result.add_term(exponent, coefficient);
        }
        result
    }

    /// Polynomial over GF(2) with a term `xᵉ` for each listed exponent.
    /// Repeated exponents cancel in pairs.
    pub fn from_exponents(exponents: impl IntoIterator<Item = i64>) -> Self {
        Self::from_terms(exponents.into_iter().map(|exponent| (exponent, 1)), GF2)
    }

    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of nonzero terms.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Nonzero terms `(exponent, coefficient)` in increasing exponent order.
    pub fn terms(&self) -> impl DoubleEndedIterator<Item = (i64, i64)> + '_ {
        self.terms.iter().map(|(exponent, coefficient)| (*exponent, *coefficient))
    }

    pub fn exponents(&self) -> impl DoubleEndedIterator<Item = i64> + '_ {
        self.terms.keys().copied()
    }

    #[must_use]
    pub fn coefficient(&self, exponent: i64) -> i64 {
        self.terms.get(&exponent).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn max_exponent(&self) -> Option<i64> {
        self.terms.keys().next_back().copied()
    }

    #[must_use]
    pub fn min_exponent(&self) -> Option<i64> {
        self.terms.keys().next().copied()
    }

    /// Highest exponent present; `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i64> {
        self.max_exponent()
    }

    /// `max − min` exponent; `None` for the zero polynomial.
    #[must_use]
    pub fn span(&self) -> Option<i64> {
        Some(self.max_exponent()? - self.min_exponent()?)
    }

    #[must_use]
    pub fn leading_coefficient(&self) -> Option<i64> {
        self.terms.values().next_back().copied()
    }

    /// True iff there is exactly one term and its coefficient is a sign unit:
    /// `1` over GF(2), `±1` otherwise.
    #[must_use]
    pub fn is_monomial(&self) -> bool {
        if self.terms.len() != 1 {
            return false;
        }
        let coefficient = self.leading_coefficient().unwrap_or(0);
        coefficient == 1 || coefficient == self.reduce_coefficient(-1)
    }

    /// Sum of two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the moduli differ.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result += other;
        result
    }

    pub fn negated(&self) -> Self {
        Self::from_terms(self.terms().map(|(exponent, coefficient)| (exponent, -coefficient)), self.modulus)
    }

    /// # Panics
    ///
    /// Panics if the moduli differ.
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negated())
    }

    /// Convolution of the two term maps.
    ///
    /// # Panics
    ///
    /// Panics if the moduli differ.
    pub fn multiply(&self, other: &Self) -> Self {
        self.assert_same_modulus(other);
        let mut result = Self::zero(self.modulus);
        for (left_exponent, left_coefficient) in self.terms() {
            for (right_exponent, right_coefficient) in other.terms() {
                result.add_term(left_exponent + right_exponent, left_coefficient * right_coefficient);
            }
        }
        result
    }

    pub fn scaled(&self, factor: i64) -> Self {
        Self::from_terms(
            self.terms().map(|(exponent, coefficient)| (exponent, coefficient * factor)),
            self.modulus,
        )
    }

    /// Multiplication by `x^shift`.
    pub fn shifted(&self, shift: i64) -> Self {
        Self {
            terms: self.terms().map(|(exponent, coefficient)| (exponent + shift, coefficient)).collect(),
            modulus: self.modulus,
        }
    }

    /// The substitution `x → x⁻¹`, negating every exponent.
    pub fn substitute_inverse(&self) -> Self {
        Self {
            terms: self.terms().map(|(exponent, coefficient)| (-exponent, coefficient)).collect(),
            modulus: self.modulus,
        }
    }

    /// Same terms, coefficients reduced modulo `modulus`.
    pub fn with_modulus(&self, modulus: u32) -> Self {
        Self::from_terms(self.terms(), modulus)
    }

    /// Number of terms with an odd coefficient, i.e. the Pauli weight of the
    /// GF(2) image.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.terms.values().filter(|coefficient| coefficient.rem_euclid(2) == 1).count()
    }

    pub(crate) fn add_term(&mut self, exponent: i64, coefficient: i64) {
        let sum = self.reduce_coefficient(self.coefficient(exponent) + coefficient);
        if sum == 0 {
            self.terms.remove(&exponent);
        } else {
            self.terms.insert(exponent, sum);
        }
    }

    fn reduce_coefficient(&self, coefficient: i64) -> i64 {
        if self.modulus == 0 {
            coefficient
        } else {
            coefficient.rem_euclid(i64::from(self.modulus))
        }
    }

    fn assert_same_modulus(&self, other: &Self) {
        assert_eq!(
            self.modulus, other.modulus,
            "cannot combine polynomials with coefficient moduli {} and {}",
            self.modulus, other.modulus
        );
    }
}

/// The zero polynomial over GF(2).
impl Default for LaurentPolynomial {
    fn default() -> Self {
        Self::zero(GF2)
    }
}

impl AddAssign<&LaurentPolynomial> for LaurentPolynomial {
    fn add_assign(&mut self, other: &LaurentPolynomial) {
        self.assert_same_modulus(other);
        for (exponent, coefficient) in other.terms() {
            self.add_term(exponent, coefficient);
        }
    }
}

impl Add for &LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn add(self, other: Self) -> Self::Output {
        LaurentPolynomial::add(self, other)
    }
}

impl Add for LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn add(mut self, other: Self) -> Self::Output {
        self += &other;
        self
    }
}

impl Sub for &LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn sub(self, other: Self) -> Self::Output {
        self.subtract(other)
    }
}

impl Mul for &LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(other)
    }
}

impl Mul for LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(&other)
    }
}

impl Neg for &LaurentPolynomial {
    type Output = LaurentPolynomial;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl std::fmt::Display for LaurentPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (position, (exponent, coefficient)) in self.terms().enumerate() {
            let magnitude = if coefficient < 0 {
                write!(f, "{}", if position == 0 { "-" } else { " - " })?;
                -coefficient
            } else {
                if position > 0 {
                    write!(f, " + ")?;
                }
                coefficient
            };
            match (exponent, magnitude) {
                (0, _) => write!(f, "{magnitude}")?,
                (1, 1) => write!(f, "x")?,
                (1, _) => write!(f, "{magnitude}x")?,
                (_, 1) => write!(f, "x^{exponent}")?,
                _ => write!(f, "{magnitude}x^{exponent}")?,
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for LaurentPolynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LaurentPolynomial(modulus={},value={})", self.modulus, self)
    }
}

/// Parses a polynomial over GF(2) such as `"x^-1 + 1 + x^2"` or `"1 + x"`.
/// Integer coefficients (`"3x^2"`) are accepted and reduced modulo 2.
impl FromStr for LaurentPolynomial {
    type Err = LaurentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Self::zero(GF2);
        let compact: String = s.chars().filter(|char| !char.is_whitespace()).collect();
        if compact == "0" {
            return Ok(result);
        }
        for term in compact.split('+') {
            let (exponent, coefficient) = parse_term(term).ok_or_else(|| LaurentError::Parse(term.to_owned()))?;
            result.add_term(exponent, coefficient);
        }
        Ok(result)
    }
}

fn parse_term(term: &str) -> Option<(i64, i64)> {
    let Some(x_position) = term.find('x') else {
        return Some((0, term.parse().ok()?));
    };
    let (coefficient_text, power_text) = term.split_at(x_position);
    let coefficient = if coefficient_text.is_empty() {
        1
    } else {
        coefficient_text.parse().ok()?
    };
    let exponent = match &power_text[1..] {
        "" => 1,
        power => power.strip_prefix('^')?.parse().ok()?,
    };
    Some((exponent, coefficient))
}
