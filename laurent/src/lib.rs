mod error;
mod matrix;
mod polynomial;

pub mod periodic;

pub use error::LaurentError;
pub use matrix::LaurentMatrix;
pub use polynomial::{GF2, LaurentPolynomial};

pub type Result<T> = std::result::Result<T, LaurentError>;
