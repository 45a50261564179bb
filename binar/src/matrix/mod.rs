mod bitmatrix;
mod echelon;

pub use bitmatrix::{BitMatrix, row_stacked};
pub use echelon::{EchelonForm, complement};
