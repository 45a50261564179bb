use crate::LaurentPolynomial;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaurentError {
    #[error("division by the zero polynomial")]
    ZeroDivisor,
    #[error("divisor {divisor} has a leading coefficient that is not one")]
    NonMonicDivisor { divisor: LaurentPolynomial },
    #[error("{divisor} does not divide {dividend}, remainder {remainder}")]
    InexactDivision {
        dividend: LaurentPolynomial,
        divisor: LaurentPolynomial,
        remainder: LaurentPolynomial,
    },
    #[error("cannot parse polynomial term `{0}`")]
    Parse(String),
}
