pub mod bit;
pub use bit::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};

pub mod vec;
pub use vec::BitVec;

pub mod matrix;
pub use matrix::{BitMatrix, EchelonForm};

#[cfg(feature = "serde")]
mod serde;
